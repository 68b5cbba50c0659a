//! Boolean checkbox field.

use crate::field::{decorate, Field};
use crate::{Fragment, ParseError, Widget};
use formkit_types::{ConfigSnapshot, Patch, SubmittedData, Value};

/// Single checkbox storing a boolean.
///
/// Unlike scalar fields, absence of the submitted key is meaningful:
/// an unchecked box submits nothing, so `parse` **always** yields an
/// entry — `true` iff the submitted value for the id is exactly
/// `"on"`, `false` otherwise (including absence).
///
/// # Example
///
/// ```
/// use formkit_field::{CheckboxField, Field};
/// use formkit_types::{SubmittedData, Value};
///
/// let field = CheckboxField::new("waterfall", "Waterfall", "Enable the waterfall display");
///
/// let patch = field.parse(&SubmittedData::new()).unwrap();
/// assert_eq!(patch.get("waterfall"), Some(&Value::Bool(false)));
///
/// let patch = field.parse(&SubmittedData::new().with("waterfall", "on")).unwrap();
/// assert_eq!(patch.get("waterfall"), Some(&Value::Bool(true)));
/// ```
pub struct CheckboxField {
    id: String,
    label: String,
    caption: String,
    help: Option<String>,
}

impl CheckboxField {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        caption: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            caption: caption.into(),
            help: None,
        }
    }

    /// Attaches help text.
    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl Field for CheckboxField {
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
        let checked = snapshot
            .get(&self.id)
            .and_then(Value::as_bool)
            .unwrap_or(false);
        let widget = Widget::Checkbox {
            name: self.id.clone(),
            caption: self.caption.clone(),
            checked,
        };
        decorate(
            Fragment::new(&self.id, &self.label, widget),
            self.help.as_deref(),
        )
    }

    fn parse(&self, data: &SubmittedData) -> Result<Patch, ParseError> {
        let checked = data.first(&self.id) == Some("on");
        Ok(Patch::single(&self.id, Value::Bool(checked)))
    }
}
