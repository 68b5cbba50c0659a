//! Single-line and multi-line text fields.

use crate::field::{decorate, parse_scalar, Field};
use crate::{Converter, Fragment, ParseError, TextConverter, Widget};
use formkit_types::{ConfigSnapshot, Patch, SubmittedData};

/// Single-line text field.
///
/// Stores [`Value::Text`](formkit_types::Value::Text) via the identity
/// converter by default; a custom converter may be supplied for fields
/// whose stored value has a non-textual canonical form.
///
/// # Example
///
/// ```
/// use formkit_field::{Field, TextField};
/// use formkit_types::{SubmittedData, Value};
///
/// let field = TextField::new("callsign", "Callsign").with_help("Your station callsign");
/// let data = SubmittedData::new().with("callsign", "DL1ABC");
/// let patch = field.parse(&data).unwrap();
/// assert_eq!(patch.get("callsign"), Some(&Value::Text("DL1ABC".into())));
/// ```
pub struct TextField {
    id: String,
    label: String,
    help: Option<String>,
    converter: Box<dyn Converter>,
}

impl TextField {
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            help: None,
            converter: Box::new(TextConverter),
        }
    }

    /// Attaches help text.
    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Replaces the default identity converter.
    #[must_use]
    pub fn with_converter(mut self, converter: impl Converter + 'static) -> Self {
        self.converter = Box::new(converter);
        self
    }
}

impl Field for TextField {
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
        let widget = Widget::TextInput {
            name: self.id.clone(),
            placeholder: self.label.clone(),
            value: self.converter.to_display(snapshot.get(&self.id)),
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

/// Multi-line text field.
pub struct TextAreaField {
    id: String,
    label: String,
    help: Option<String>,
    converter: Box<dyn Converter>,
}

impl TextAreaField {
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            help: None,
            converter: Box::new(TextConverter),
        }
    }

    /// Attaches help text.
    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Replaces the default identity converter.
    #[must_use]
    pub fn with_converter(mut self, converter: impl Converter + 'static) -> Self {
        self.converter = Box::new(converter);
        self
    }
}

impl Field for TextAreaField {
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
        let widget = Widget::TextArea {
            name: self.id.clone(),
            value: self.converter.to_display(snapshot.get(&self.id)),
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
