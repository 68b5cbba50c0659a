//! Multi-checkbox field storing a set of keys.

use crate::field::{decorate, Field};
use crate::{Choice, Fragment, ParseError, ServiceDirectory, Widget};
use formkit_types::{ConfigSnapshot, Patch, SubmittedData, Value};

/// One checkbox per choice, storing the set of checked keys.
///
/// Each checkbox submits under the composite key
/// `"{id}-{choice.value}"`. As with [`CheckboxField`](crate::CheckboxField),
/// absence is data: `parse` **always** yields an entry holding the
/// checked keys in choice declaration order.
///
/// # Choice Sourcing
///
/// - [`new`](MultiCheckboxField::new) — explicit choice list;
/// - [`from_directory`](MultiCheckboxField::from_directory) — choices
///   queried from a live [`ServiceDirectory`] at construction time;
///   construct such fields fresh per request so the list never goes
///   stale;
/// - [`profile_presets`](MultiCheckboxField::profile_presets) — the
///   fixed set of operating profiles.
///
/// # Example
///
/// ```
/// use formkit_field::{Choice, Field, MultiCheckboxField};
/// use formkit_types::{SubmittedData, Value};
///
/// let field = MultiCheckboxField::new(
///     "sel",
///     "Selection",
///     vec![Choice::new("a", "A"), Choice::new("b", "B"), Choice::new("c", "C")],
/// );
///
/// let data = SubmittedData::new().with("sel-a", "on").with("sel-c", "on");
/// let patch = field.parse(&data).unwrap();
/// assert_eq!(
///     patch.get("sel"),
///     Some(&Value::Keys(vec!["a".into(), "c".into()]))
/// );
/// ```
pub struct MultiCheckboxField {
    id: String,
    label: String,
    help: Option<String>,
    choices: Vec<Choice>,
}

impl MultiCheckboxField {
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>, choices: Vec<Choice>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            help: None,
            choices,
        }
    }

    /// Builds the field from the directory's currently available variants.
    ///
    /// The directory is queried exactly once, here. Callers must
    /// construct directory-backed fields per request rather than cache
    /// them across requests.
    #[must_use]
    pub fn from_directory(
        id: impl Into<String>,
        label: impl Into<String>,
        directory: &dyn ServiceDirectory,
    ) -> Self {
        Self::new(id, label, directory.available())
    }

    /// Builds the field with the fixed set of operating profiles.
    #[must_use]
    pub fn profile_presets(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(
            id,
            label,
            vec![
                Choice::new("normal", "Normal (15s, 50Hz, ~16WPM)"),
                Choice::new("slow", "Slow (30s, 25Hz, ~8WPM)"),
                Choice::new("fast", "Fast (10s, 80Hz, ~24WPM)"),
                Choice::new("turbo", "Turbo (6s, 160Hz, ~40WPM)"),
            ],
        )
    }

    /// Attaches help text.
    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Returns the field's choices in declaration order.
    #[must_use]
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// The composite submission key for one choice.
    fn checkbox_name(&self, choice: &Choice) -> String {
        format!("{}-{}", self.id, choice.value)
    }
}

impl Field for MultiCheckboxField {
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
        let current = snapshot
            .get(&self.id)
            .and_then(Value::as_keys)
            .unwrap_or(&[]);
        let children = self
            .choices
            .iter()
            .map(|choice| Widget::Checkbox {
                name: self.checkbox_name(choice),
                caption: choice.text.clone(),
                checked: current.iter().any(|key| key == &choice.value),
            })
            .collect();
        decorate(
            Fragment::new(&self.id, &self.label, Widget::Group { children }),
            self.help.as_deref(),
        )
    }

    fn parse(&self, data: &SubmittedData) -> Result<Patch, ParseError> {
        let keys: Vec<String> = self
            .choices
            .iter()
            .filter(|choice| data.first(&self.checkbox_name(choice)) == Some("on"))
            .map(|choice| choice.value.clone())
            .collect();
        Ok(Patch::single(&self.id, Value::Keys(keys)))
    }
}
