//! Field descriptors.
//!
//! A [`Field`] is a declarative descriptor of one editable
//! configuration value: id, label, optional help text, and
//! variant-specific behavior. Fields expose exactly two operations —
//! `render` and `parse` — and both are pure functions of the
//! descriptor and their input; no field carries mutable state.
//!
//! # Variants
//!
//! | Variant | Stores | Parse rule |
//! |---------|--------|------------|
//! | [`TextField`] | `Text` | scalar (absence ⇒ unchanged) |
//! | [`TextAreaField`] | `Text` | scalar |
//! | [`NumberField`] | `Int` | scalar |
//! | [`FloatField`] | `Float` | scalar |
//! | [`DropdownField`] | `Text` | scalar |
//! | [`CheckboxField`] | `Bool` | always yields an entry |
//! | [`MultiCheckboxField`] | `Keys` | always yields an entry |
//! | [`LocationField`] | `Location` | whole entry or error |
//!
//! # The Scalar Rule
//!
//! For scalar, non-boolean, non-composite fields, absence of the
//! submitted key means "value unchanged" and parse yields an empty
//! patch. Checkbox-style fields invert this: absence is itself data
//! (unchecked), so they always yield an entry. Composite fields yield
//! a whole entry or fail — never a partial patch.
//!
//! # Example
//!
//! ```
//! use formkit_field::{Field, TextField};
//! use formkit_types::{ConfigSnapshot, SubmittedData};
//!
//! let field = TextField::new("receiver_name", "Receiver name");
//!
//! let fragment = field.render(&ConfigSnapshot::new());
//! assert_eq!(fragment.id, "receiver_name");
//!
//! // Absent key: nothing changed, empty patch.
//! let patch = field.parse(&SubmittedData::new()).unwrap();
//! assert!(patch.is_empty());
//! ```

mod checkbox;
mod dropdown;
mod location;
mod multi_checkbox;
mod number;
mod text;

pub use checkbox::CheckboxField;
pub use dropdown::DropdownField;
pub use location::LocationField;
pub use multi_checkbox::MultiCheckboxField;
pub use number::{FloatField, NumberField};
pub use text::{TextAreaField, TextField};

use crate::{Converter, Fragment, ParseError};
use formkit_types::{ConfigSnapshot, Patch, SubmittedData};

/// Declarative descriptor of one editable configuration value.
///
/// # Contract
///
/// - `render` is total: it resolves the current value from the
///   snapshot (or a variant-defined default when absent) and produces
///   a [`Fragment`] tagged with the field id.
/// - `parse` produces at most one patch entry, for this field's id,
///   following the variant's absence rule. Conversion failures
///   propagate unchanged as [`ParseError`]; fields never swallow them.
///
/// # Thread Safety
///
/// Fields are immutable after construction and `Send + Sync`, so one
/// descriptor may serve concurrent render/parse operations without
/// locking.
pub trait Field: Send + Sync {
    /// Returns the field's id, unique within its schema.
    fn id(&self) -> &str;

    /// Returns the field's label.
    fn label(&self) -> &str;

    /// Returns the field's help text, if any.
    fn help(&self) -> Option<&str> {
        None
    }

    /// Renders the field as a structural fragment.
    fn render(&self, snapshot: &ConfigSnapshot) -> Fragment;

    /// Parses this field's portion of a submission into a patch.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] identifying this field and the offending
    /// raw input.
    fn parse(&self, data: &SubmittedData) -> Result<Patch, ParseError>;
}

/// The shared scalar parse rule.
///
/// Absent key ⇒ empty patch (unchanged); present key ⇒ first submitted
/// string converted, one patch entry.
pub(crate) fn parse_scalar(
    id: &str,
    converter: &dyn Converter,
    data: &SubmittedData,
) -> Result<Patch, ParseError> {
    match data.first(id) {
        None => Ok(Patch::new()),
        Some(raw) => converter
            .from_submitted(raw)
            .map(|value| Patch::single(id, value))
            .map_err(|e| e.for_field(id)),
    }
}

/// Attaches a field's help text to its fragment, if present.
pub(crate) fn decorate(fragment: Fragment, help: Option<&str>) -> Fragment {
    match help {
        Some(text) => fragment.with_help(text),
        None => fragment,
    }
}
