//! Structural widget node tree.
//!
//! `render` emits a typed tree instead of markup strings, so tests and
//! alternative renderers can work on structure rather than string
//! equality. Serialization to actual markup lives in a separate
//! renderer crate.
//!
//! The tree is intentionally flat and closed: a [`Fragment`] is one
//! labeled field, its body is one [`Widget`], and composite fields use
//! [`Widget::Group`].

use serde::{Deserialize, Serialize};

/// A rendered field: the uniformly labeled wrapper around one widget.
///
/// The fragment carries the field id, so the emitted structure
/// unambiguously identifies which field it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fragment {
    /// The owning field's id.
    pub id: String,
    /// The field's label.
    pub label: String,
    /// Optional help text shown under the widget.
    pub help: Option<String>,
    /// The editable widget body.
    pub widget: Widget,
}

impl Fragment {
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>, widget: Widget) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            help: None,
            widget,
        }
    }

    /// Attaches help text.
    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// Step constraint for numeric inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Unconstrained precision (`step="any"`).
    Any,
    /// Fixed increment.
    Every(i64),
}

/// One selectable option inside a [`Widget::Select`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectChoice {
    pub value: String,
    pub text: String,
    /// True for the option matching the current value.
    pub selected: bool,
}

/// An editable widget.
///
/// `name` is always the raw submission key the widget posts under —
/// the field id for scalar widgets, a derived composite key for
/// checkbox-group entries and location sub-inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Widget {
    /// Single-line text input.
    TextInput {
        name: String,
        placeholder: String,
        value: String,
    },

    /// Multi-line text input.
    TextArea { name: String, value: String },

    /// Numeric input with optional step constraint and unit suffix.
    NumberInput {
        name: String,
        placeholder: String,
        value: String,
        step: Option<Step>,
        unit: Option<String>,
    },

    /// Single checkbox with caption.
    Checkbox {
        name: String,
        caption: String,
        checked: bool,
    },

    /// Select widget with one entry per choice.
    Select {
        name: String,
        options: Vec<SelectChoice>,
    },

    /// Ordered group of sibling widgets (composite fields).
    Group { children: Vec<Widget> },

    /// Auxiliary map-picker widget bound to a location field.
    ///
    /// `api_key` is an opaque external credential; it may be absent,
    /// in which case the picker renders without map tiles.
    MapPicker {
        target: String,
        api_key: Option<String>,
    },
}
