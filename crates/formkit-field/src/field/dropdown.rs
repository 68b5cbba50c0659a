//! Dropdown (select) field.

use crate::field::{decorate, parse_scalar, Field};
use crate::{
    Choice, Converter, EnumConverter, EnumMembers, Fragment, ParseError, SelectChoice,
    TextConverter, Widget,
};
use formkit_types::{ConfigSnapshot, Patch, SubmittedData};

/// Select widget over a fixed choice list.
///
/// Two explicit constructors replace dispatch on option type
/// (enumeration vs plain list):
///
/// - [`from_choices`](DropdownField::from_choices) — explicit choice
///   list, identity converter (or caller-supplied via
///   [`with_converter`](DropdownField::with_converter));
/// - [`from_enumeration`](DropdownField::from_enumeration) — one
///   choice per enumeration member, [`EnumConverter`] so submitted
///   names are validated against the member set.
///
/// Render marks the option whose value equals the current display
/// value as selected.
///
/// # Example
///
/// ```
/// use formkit_field::{DropdownField, Field};
/// use formkit_types::{ConfigSnapshot, SubmittedData, Value};
/// use strum_macros::{AsRefStr, Display, EnumIter};
///
/// #[derive(Debug, Clone, Copy, PartialEq, AsRefStr, Display, EnumIter)]
/// enum Theme { Light, Dark }
///
/// let field = DropdownField::from_enumeration::<Theme>("theme", "Theme");
/// let data = SubmittedData::new().with("theme", "Dark");
/// let patch = field.parse(&data).unwrap();
/// assert_eq!(patch.get("theme"), Some(&Value::Text("Dark".into())));
///
/// assert!(field.parse(&SubmittedData::new().with("theme", "dark")).is_err());
/// ```
pub struct DropdownField {
    id: String,
    label: String,
    help: Option<String>,
    choices: Vec<Choice>,
    converter: Box<dyn Converter>,
}

impl DropdownField {
    /// Builds a dropdown over an explicit choice list.
    #[must_use]
    pub fn from_choices(
        id: impl Into<String>,
        label: impl Into<String>,
        choices: Vec<Choice>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            help: None,
            choices,
            converter: Box::new(TextConverter),
        }
    }

    /// Builds a dropdown with one choice per member of `E`.
    #[must_use]
    pub fn from_enumeration<E: EnumMembers>(
        id: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            help: None,
            choices: Choice::for_members::<E>(),
            converter: Box::new(EnumConverter::<E>::new()),
        }
    }

    /// Attaches help text.
    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Replaces the converter.
    #[must_use]
    pub fn with_converter(mut self, converter: impl Converter + 'static) -> Self {
        self.converter = Box::new(converter);
        self
    }

    /// Returns the field's choices in declaration order.
    #[must_use]
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }
}

impl Field for DropdownField {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    fn render(&self, snapshot: &ConfigSnapshot) -> Fragment {
        let current = self.converter.to_display(snapshot.get(&self.id));
        let options = self
            .choices
            .iter()
            .map(|choice| SelectChoice {
                value: choice.value.clone(),
                text: choice.text.clone(),
                selected: choice.value == current,
            })
            .collect();
        let widget = Widget::Select {
            name: self.id.clone(),
            options,
        };
        decorate(
            Fragment::new(&self.id, &self.label, widget),
            self.help.as_deref(),
        )
    }

    fn parse(&self, data: &SubmittedData) -> Result<Patch, ParseError> {
        parse_scalar(&self.id, self.converter.as_ref(), data)
    }
}
