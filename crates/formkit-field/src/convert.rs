//! Bidirectional value converters.
//!
//! A [`Converter`] is the stateless pair of functions between a typed
//! [`Value`] and its display/submission string:
//!
//! - `to_display` is total — an absent value maps to `""`;
//! - `from_submitted` is partial — it may reject malformed input.
//!
//! # Round-trip Contract
//!
//! For every value `v` a converter can legally produce,
//! `from_submitted(&to_display(Some(&v))) == Ok(v)`. Integer and float
//! display uses Rust's `Display` formatting, the shortest decimal that
//! re-parses to the same number, so numeric round-trips are exact.
//!
//! # Converters
//!
//! | Converter | Value | Failure |
//! |-----------|-------|---------|
//! | [`TextConverter`] | `Text` | never |
//! | [`IntConverter`] | `Int` | `MalformedNumber` |
//! | [`FloatConverter`] | `Float` | `MalformedNumber` |
//! | [`EnumConverter`] | `Text` (canonical member name) | `UnknownMember` |

use crate::ParseError;
use formkit_types::Value;
use std::fmt;
use std::marker::PhantomData;
use strum::IntoEnumIterator;
use thiserror::Error;

/// A conversion failure, not yet attributed to a field.
///
/// Converters know nothing about the field that owns them; the owning
/// field attaches its id with [`for_field`](ConvertError::for_field)
/// before propagating, producing the schema-level [`ParseError`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// The raw string is not a valid integer or float.
    #[error("malformed number '{raw}'")]
    MalformedNumber { raw: String },

    /// The raw string matches no known enumeration member name.
    #[error("unknown member '{raw}'")]
    UnknownMember { raw: String },
}

impl ConvertError {
    /// Attributes this failure to a field, producing a [`ParseError`].
    #[must_use]
    pub fn for_field(self, field: impl Into<String>) -> ParseError {
        let field = field.into();
        match self {
            Self::MalformedNumber { raw } => ParseError::MalformedNumber { field, raw },
            Self::UnknownMember { raw } => ParseError::UnknownEnumMember { field, raw },
        }
    }
}

/// Stateless bidirectional mapping between a [`Value`] and its string form.
///
/// Converters carry no state and may be shared freely across concurrent
/// render/parse operations.
pub trait Converter: Send + Sync {
    /// Renders a value as its display string. Total; `None` maps to `""`.
    fn to_display(&self, value: Option<&Value>) -> String;

    /// Parses a submitted string back into a value.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError`] for input this converter cannot interpret.
    fn from_submitted(&self, raw: &str) -> Result<Value, ConvertError>;
}

/// Identity converter for plain text. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextConverter;

impl Converter for TextConverter {
    fn to_display(&self, value: Option<&Value>) -> String {
        value.map(Value::to_string).unwrap_or_default()
    }

    fn from_submitted(&self, raw: &str) -> Result<Value, ConvertError> {
        Ok(Value::Text(raw.to_string()))
    }
}

/// Converter for `i64` values.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntConverter;

impl Converter for IntConverter {
    fn to_display(&self, value: Option<&Value>) -> String {
        value.map(Value::to_string).unwrap_or_default()
    }

    fn from_submitted(&self, raw: &str) -> Result<Value, ConvertError> {
        raw.parse::<i64>()
            .map(Value::Int)
            .map_err(|_| ConvertError::MalformedNumber {
                raw: raw.to_string(),
            })
    }
}

/// Converter for `f64` values.
///
/// Display is Rust's shortest round-trip decimal formatting; every
/// finite `f64` survives a display/parse cycle exactly.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloatConverter;

impl FloatConverter {
    /// Parses a raw string as `f64`.
    ///
    /// Shared with the location field, which converts each composite
    /// sub-input with float semantics.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::MalformedNumber`] on non-numeric input.
    pub fn parse(raw: &str) -> Result<f64, ConvertError> {
        raw.parse::<f64>().map_err(|_| ConvertError::MalformedNumber {
            raw: raw.to_string(),
        })
    }
}

impl Converter for FloatConverter {
    fn to_display(&self, value: Option<&Value>) -> String {
        value.map(Value::to_string).unwrap_or_default()
    }

    fn from_submitted(&self, raw: &str) -> Result<Value, ConvertError> {
        Self::parse(raw).map(Value::Float)
    }
}

/// Bound alias for enumerations usable behind dropdowns.
///
/// An enumeration qualifies when its members can be iterated
/// (`strum::EnumIter`), carry a canonical name (`strum::AsRefStr`), and
/// a human label (`Display`). Derive strum's `Display` when the label
/// is just the member name, or write the impl for descriptive labels:
///
/// ```
/// use std::fmt;
/// use strum_macros::{AsRefStr, EnumIter};
///
/// #[derive(Debug, Clone, Copy, PartialEq, AsRefStr, EnumIter)]
/// enum Band { Forty, Twenty }
///
/// impl fmt::Display for Band {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         match self {
///             Band::Forty => write!(f, "40 m"),
///             Band::Twenty => write!(f, "20 m"),
///         }
///     }
/// }
/// ```
pub trait EnumMembers:
    IntoEnumIterator + AsRef<str> + fmt::Display + Clone + PartialEq + Send + Sync + 'static
{
}

impl<T> EnumMembers for T where
    T: IntoEnumIterator + AsRef<str> + fmt::Display + Clone + PartialEq + Send + Sync + 'static
{
}

/// Converter that maps submitted strings to enumeration members by name.
///
/// Lookup is case-sensitive against each member's canonical name
/// (`AsRef<str>`). The stored value is the canonical name as
/// [`Value::Text`]; callers that need the member itself use
/// [`member`](EnumConverter::member).
///
/// # Example
///
/// ```
/// use formkit_field::{Converter, ConvertError, EnumConverter};
/// use strum_macros::{AsRefStr, Display, EnumIter};
///
/// #[derive(Debug, Clone, Copy, PartialEq, AsRefStr, Display, EnumIter)]
/// enum Mode { Usb, Lsb, Cw }
///
/// let conv = EnumConverter::<Mode>::new();
/// assert_eq!(conv.member("Cw").unwrap(), Mode::Cw);
/// assert!(matches!(
///     conv.from_submitted("cw"),
///     Err(ConvertError::UnknownMember { .. })
/// ));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct EnumConverter<E> {
    _members: PhantomData<E>,
}

impl<E: EnumMembers> EnumConverter<E> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            _members: PhantomData,
        }
    }

    /// Looks up the member whose canonical name matches `raw` exactly.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::UnknownMember`] if no member matches.
    pub fn member(&self, raw: &str) -> Result<E, ConvertError> {
        E::iter()
            .find(|m| m.as_ref() == raw)
            .ok_or_else(|| ConvertError::UnknownMember {
                raw: raw.to_string(),
            })
    }
}

impl<E: EnumMembers> Default for EnumConverter<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EnumMembers> Converter for EnumConverter<E> {
    fn to_display(&self, value: Option<&Value>) -> String {
        value.map(Value::to_string).unwrap_or_default()
    }

    fn from_submitted(&self, raw: &str) -> Result<Value, ConvertError> {
        self.member(raw)
            .map(|m| Value::Text(m.as_ref().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum_macros::{AsRefStr, Display, EnumIter};

    #[derive(Debug, Clone, Copy, PartialEq, AsRefStr, Display, EnumIter)]
    enum Profile {
        Normal,
        Slow,
        Turbo,
    }

    #[test]
    fn text_identity() {
        let conv = TextConverter;
        assert_eq!(conv.to_display(Some(&Value::Text("abc".into()))), "abc");
        assert_eq!(conv.from_submitted("abc").unwrap(), Value::Text("abc".into()));
    }

    #[test]
    fn absent_value_displays_empty() {
        assert_eq!(TextConverter.to_display(None), "");
        assert_eq!(IntConverter.to_display(None), "");
        assert_eq!(FloatConverter.to_display(None), "");
        assert_eq!(EnumConverter::<Profile>::new().to_display(None), "");
    }

    #[test]
    fn int_round_trip() {
        let conv = IntConverter;
        for v in [0i64, 42, -7, i64::MAX, i64::MIN] {
            let shown = conv.to_display(Some(&Value::Int(v)));
            assert_eq!(conv.from_submitted(&shown).unwrap(), Value::Int(v));
        }
    }

    #[test]
    fn int_rejects_garbage() {
        assert_eq!(
            IntConverter.from_submitted("12.5"),
            Err(ConvertError::MalformedNumber { raw: "12.5".into() })
        );
        assert!(IntConverter.from_submitted("").is_err());
        assert!(IntConverter.from_submitted("fast").is_err());
    }

    #[test]
    fn float_round_trip() {
        let conv = FloatConverter;
        for v in [0.0f64, 12.5, -3.25, 0.1, 1e-12, f64::MAX] {
            let shown = conv.to_display(Some(&Value::Float(v)));
            assert_eq!(conv.from_submitted(&shown).unwrap(), Value::Float(v));
        }
    }

    #[test]
    fn float_rejects_garbage() {
        assert!(FloatConverter.from_submitted("12,5").is_err());
        assert!(FloatConverter.from_submitted("").is_err());
    }

    #[test]
    fn enum_round_trip_every_member() {
        let conv = EnumConverter::<Profile>::new();
        for m in Profile::iter() {
            let shown = conv.to_display(Some(&Value::Text(m.as_ref().to_string())));
            assert_eq!(conv.from_submitted(&shown).unwrap(), Value::Text(m.as_ref().into()));
            assert_eq!(conv.member(&shown).unwrap(), m);
        }
    }

    #[test]
    fn enum_lookup_is_case_sensitive() {
        let conv = EnumConverter::<Profile>::new();
        assert!(conv.member("Normal").is_ok());
        assert_eq!(
            conv.member("normal"),
            Err(ConvertError::UnknownMember { raw: "normal".into() })
        );
        assert!(conv.from_submitted("not-a-member").is_err());
    }

    #[test]
    fn for_field_attributes_error() {
        let err = ConvertError::MalformedNumber { raw: "x".into() };
        assert_eq!(
            err.for_field("frequency"),
            ParseError::MalformedNumber {
                field: "frequency".into(),
                raw: "x".into()
            }
        );

        let err = ConvertError::UnknownMember { raw: "y".into() };
        assert_eq!(
            err.for_field("mode"),
            ParseError::UnknownEnumMember {
                field: "mode".into(),
                raw: "y".into()
            }
        );
    }
}
