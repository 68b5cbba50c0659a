//! Parse and schema errors.
//!
//! All errors implement [`ErrorCode`] for unified handling.
//!
//! # Error Code Convention
//!
//! End-user input errors use the `FORM_` prefix; schema-definition
//! errors use `SCHEMA_`:
//!
//! | Error | Code | Recoverable |
//! |-------|------|-------------|
//! | [`MalformedNumber`](ParseError::MalformedNumber) | `FORM_MALFORMED_NUMBER` | Yes |
//! | [`UnknownEnumMember`](ParseError::UnknownEnumMember) | `FORM_UNKNOWN_ENUM_MEMBER` | Yes |
//! | [`MissingCompositeComponent`](ParseError::MissingCompositeComponent) | `FORM_MISSING_COMPOSITE_COMPONENT` | Yes |
//! | [`DuplicateFieldId`](SchemaError::DuplicateFieldId) | `SCHEMA_DUPLICATE_FIELD_ID` | No |
//!
//! Every `FORM_` error is malformed end-user input: the submitter can
//! correct the form and resubmit, so all are recoverable and none are
//! retried automatically. `SCHEMA_` errors are misconfiguration — a
//! schema definition bug that resubmission cannot fix.
//!
//! # Example
//!
//! ```
//! use formkit_field::ParseError;
//! use formkit_types::ErrorCode;
//!
//! let err = ParseError::MalformedNumber {
//!     field: "frequency".into(),
//!     raw: "fast".into(),
//! };
//! assert_eq!(err.code(), "FORM_MALFORMED_NUMBER");
//! assert!(err.is_recoverable());
//! assert_eq!(err.field(), "frequency");
//! ```

use formkit_types::ErrorCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A field-level parse failure.
///
/// Raised synchronously during `parse` and propagated unchanged to the
/// schema-level caller; fields never catch their own conversion errors.
/// Each variant identifies the offending field id and the raw input
/// that caused it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum ParseError {
    /// A submitted string could not be parsed as an integer or float.
    #[error("field '{field}': malformed number '{raw}'")]
    MalformedNumber { field: String, raw: String },

    /// A submitted string matched no known enumeration member name.
    ///
    /// The lookup is case-sensitive.
    #[error("field '{field}': unknown enum member '{raw}'")]
    UnknownEnumMember { field: String, raw: String },

    /// A composite field is missing one of its required sub-keys.
    ///
    /// Composite fields parse whole or fail whole; a missing component
    /// never produces a partial patch.
    #[error("field '{field}': missing composite component '{component}'")]
    MissingCompositeComponent { field: String, component: String },
}

impl ParseError {
    /// Returns the id of the field whose input failed to parse.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::MalformedNumber { field, .. }
            | Self::UnknownEnumMember { field, .. }
            | Self::MissingCompositeComponent { field, .. } => field,
        }
    }
}

impl ErrorCode for ParseError {
    fn code(&self) -> &'static str {
        match self {
            Self::MalformedNumber { .. } => "FORM_MALFORMED_NUMBER",
            Self::UnknownEnumMember { .. } => "FORM_UNKNOWN_ENUM_MEMBER",
            Self::MissingCompositeComponent { .. } => "FORM_MISSING_COMPOSITE_COMPONENT",
        }
    }

    fn is_recoverable(&self) -> bool {
        // Malformed end-user input: correct the form and resubmit.
        true
    }
}

/// A schema-definition error.
///
/// These surface at schema construction time, never during parse, and
/// represent bugs in the schema definition rather than bad input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum SchemaError {
    /// Two fields in one schema share the same id.
    #[error("duplicate field id '{id}' in schema")]
    DuplicateFieldId { id: String },
}

impl ErrorCode for SchemaError {
    fn code(&self) -> &'static str {
        match self {
            Self::DuplicateFieldId { .. } => "SCHEMA_DUPLICATE_FIELD_ID",
        }
    }

    fn is_recoverable(&self) -> bool {
        false
    }
}
