//! Choices for selection-based fields.

use crate::EnumMembers;
use serde::{Deserialize, Serialize};

/// An immutable (stored value, display label) pair.
///
/// Used by dropdown and multi-checkbox fields: `value` is the key
/// stored in configuration and submitted by the form, `text` is what
/// the user sees.
///
/// # Example
///
/// ```
/// use formkit_field::Choice;
///
/// let c = Choice::new("slow", "Slow (30s, 25Hz, ~8WPM)");
/// assert_eq!(c.value, "slow");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// The stored key, submitted by the form.
    pub value: String,
    /// The human-readable label.
    pub text: String,
}

impl Choice {
    #[must_use]
    pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
        }
    }

    /// Derives one choice per enumeration member, in declaration order.
    ///
    /// The stored value is the member's canonical name, the label its
    /// `Display` form.
    ///
    /// # Example
    ///
    /// ```
    /// use formkit_field::Choice;
    /// use strum_macros::{AsRefStr, Display, EnumIter};
    ///
    /// #[derive(Debug, Clone, Copy, PartialEq, AsRefStr, Display, EnumIter)]
    /// enum Mode { Usb, Lsb }
    ///
    /// let choices = Choice::for_members::<Mode>();
    /// assert_eq!(choices[0], Choice::new("Usb", "Usb"));
    /// ```
    #[must_use]
    pub fn for_members<E: EnumMembers>() -> Vec<Choice> {
        E::iter()
            .map(|m| Choice::new(m.as_ref(), m.to_string()))
            .collect()
    }
}
