//! Typed configuration values.
//!
//! [`Value`] is the closed set of types a form field can store. Each
//! variant has a canonical display form (its `Display` impl) that the
//! converters in `formkit-field` use as the submission string, so the
//! `Display`/parse pair must round-trip exactly.
//!
//! # Canonical Display Forms
//!
//! | Variant | Display | Round-trip |
//! |---------|---------|------------|
//! | `Text` | the string itself | identity |
//! | `Int` | `i64` decimal | exact |
//! | `Float` | shortest decimal that re-parses to the same `f64` | exact |
//! | `Bool` | `true` / `false` | exact |
//! | `Keys` | comma-joined keys | display only |
//! | `Location` | `lat,lon` | display only |
//!
//! `Keys` and `Location` never travel through a single scalar input;
//! their display form exists only so `Display` stays total.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Geographic coordinate pair stored by the location field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    #[must_use]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}

/// A typed configuration value.
///
/// Values are immutable data; fields and converters never mutate them
/// in place. The variant set covers every field variant's storage type:
///
/// | Variant | Stored by |
/// |---------|-----------|
/// | `Text` | text, text-area, dropdown fields |
/// | `Int` | number fields |
/// | `Float` | float fields |
/// | `Bool` | checkbox fields |
/// | `Keys` | multi-checkbox fields (declaration order) |
/// | `Location` | location fields |
///
/// # Example
///
/// ```
/// use formkit_types::Value;
///
/// let v = Value::Int(7_074_000);
/// assert_eq!(v.to_string(), "7074000");
/// assert_eq!("7074000".parse::<i64>().unwrap(), 7_074_000);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Keys(Vec<String>),
    Location(Coordinates),
}

impl Value {
    /// Returns the boolean if this is a `Bool` value.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the stored key set if this is a `Keys` value.
    #[must_use]
    pub fn as_keys(&self) -> Option<&[String]> {
        match self {
            Value::Keys(keys) => Some(keys),
            _ => None,
        }
    }

    /// Returns the coordinates if this is a `Location` value.
    #[must_use]
    pub fn as_location(&self) -> Option<Coordinates> {
        match self {
            Value::Location(c) => Some(*c),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    /// Canonical display form. Total; see the module docs for the
    /// per-variant format and round-trip guarantees.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => write!(f, "{s}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Keys(keys) => write!(f, "{}", keys.join(",")),
            Value::Location(c) => write!(f, "{c}"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Vec<String>> for Value {
    fn from(keys: Vec<String>) -> Self {
        Value::Keys(keys)
    }
}

impl From<Coordinates> for Value {
    fn from(c: Coordinates) -> Self {
        Value::Location(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_display_round_trips() {
        for v in [0i64, 1, -1, 7_074_000, i64::MAX, i64::MIN] {
            let shown = Value::Int(v).to_string();
            assert_eq!(shown.parse::<i64>().unwrap(), v);
        }
    }

    #[test]
    fn float_display_round_trips() {
        for v in [0.0f64, 12.5, -3.25, 0.1, 1e-12, 6.02214076e23, f64::MAX] {
            let shown = Value::Float(v).to_string();
            assert_eq!(shown.parse::<f64>().unwrap(), v);
        }
    }

    #[test]
    fn bool_display() {
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Bool(false).to_string(), "false");
    }

    #[test]
    fn accessors_reject_other_variants() {
        assert_eq!(Value::Text("x".into()).as_bool(), None);
        assert_eq!(Value::Bool(true).as_keys(), None);
        assert_eq!(Value::Int(1).as_location(), None);

        let keys = Value::Keys(vec!["a".into(), "b".into()]);
        assert_eq!(keys.as_keys().unwrap().len(), 2);

        let loc = Value::Location(Coordinates::new(12.5, -3.25));
        assert_eq!(loc.as_location().unwrap().lat, 12.5);
    }

    #[test]
    fn from_conversions() {
        assert_eq!(Value::from("x"), Value::Text("x".into()));
        assert_eq!(Value::from(5i64), Value::Int(5));
        assert_eq!(Value::from(2.5f64), Value::Float(2.5));
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(
            Value::from(Coordinates::new(1.0, 2.0)),
            Value::Location(Coordinates::new(1.0, 2.0))
        );
    }

    #[test]
    fn serde_untagged_representation() {
        let json = serde_json::to_value(Value::Int(42)).unwrap();
        assert_eq!(json, serde_json::json!(42));

        let json = serde_json::to_value(Value::Location(Coordinates::new(12.5, -3.25))).unwrap();
        assert_eq!(json, serde_json::json!({"lat": 12.5, "lon": -3.25}));

        let back: Value = serde_json::from_value(serde_json::json!("hello")).unwrap();
        assert_eq!(back, Value::Text("hello".into()));
    }
}
