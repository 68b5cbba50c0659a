//! Unified error interface for FormKit.
//!
//! Every FormKit error type implements [`ErrorCode`] so that the layer
//! presenting errors back to the form's originator can treat them
//! uniformly: a stable machine-readable code for programmatic handling,
//! and a recoverability flag that distinguishes "the user can correct
//! their input and resubmit" from "the schema itself is misconfigured".
//!
//! # Example
//!
//! ```
//! use formkit_types::ErrorCode;
//!
//! #[derive(Debug)]
//! enum InputError {
//!     Malformed(String),
//!     Misconfigured,
//! }
//!
//! impl ErrorCode for InputError {
//!     fn code(&self) -> &'static str {
//!         match self {
//!             Self::Malformed(_) => "FORM_MALFORMED",
//!             Self::Misconfigured => "SCHEMA_MISCONFIGURED",
//!         }
//!     }
//!
//!     fn is_recoverable(&self) -> bool {
//!         matches!(self, Self::Malformed(_))
//!     }
//! }
//!
//! let err = InputError::Malformed("abc".into());
//! assert_eq!(err.code(), "FORM_MALFORMED");
//! assert!(err.is_recoverable());
//! ```

/// Unified error code interface for FormKit errors.
///
/// # Code Format
///
/// Error codes must be:
///
/// - **UPPER_SNAKE_CASE**: e.g. `"FORM_MALFORMED_NUMBER"`
/// - **Domain-prefixed**: `"FORM_"` for end-user input errors,
///   `"SCHEMA_"` for schema misconfiguration
/// - **Stable**: a code never changes once defined (API contract)
///
/// # Recoverability
///
/// A FormKit error is recoverable when the person who submitted the
/// form can fix it by correcting their input and resubmitting. It is
/// not recoverable when resubmission cannot help — duplicate field ids
/// and other schema-definition mistakes require a code change.
pub trait ErrorCode {
    /// Returns the machine-readable error code.
    ///
    /// UPPER_SNAKE_CASE, domain-prefixed, stable across versions.
    fn code(&self) -> &'static str;

    /// Returns whether resubmitting corrected input can resolve the error.
    fn is_recoverable(&self) -> bool;
}

/// Validates that an error code follows FormKit conventions.
///
/// # Checks
///
/// 1. Code is non-empty
/// 2. Code starts with the expected domain prefix
/// 3. Code is UPPER_SNAKE_CASE
///
/// # Panics
///
/// Panics with a descriptive message if validation fails; intended for
/// use in tests.
///
/// # Example
///
/// ```
/// use formkit_types::{assert_error_code, ErrorCode};
///
/// #[derive(Debug)]
/// struct BadInput;
///
/// impl ErrorCode for BadInput {
///     fn code(&self) -> &'static str { "FORM_BAD_INPUT" }
///     fn is_recoverable(&self) -> bool { true }
/// }
///
/// assert_error_code(&BadInput, "FORM_");
/// ```
pub fn assert_error_code<E: ErrorCode>(err: &E, expected_prefix: &str) {
    let code = err.code();

    assert!(!code.is_empty(), "error code must not be empty");

    assert!(
        code.starts_with(expected_prefix),
        "error code '{code}' must start with prefix '{expected_prefix}'"
    );

    assert!(
        is_upper_snake_case(code),
        "error code '{code}' must be UPPER_SNAKE_CASE"
    );
}

/// Validates every variant of an error enum at once.
///
/// # Example
///
/// ```
/// use formkit_types::{assert_error_codes, ErrorCode};
///
/// #[derive(Debug)]
/// enum E { A, B }
///
/// impl ErrorCode for E {
///     fn code(&self) -> &'static str {
///         match self {
///             Self::A => "FORM_A",
///             Self::B => "FORM_B",
///         }
///     }
///     fn is_recoverable(&self) -> bool { true }
/// }
///
/// assert_error_codes(&[E::A, E::B], "FORM_");
/// ```
pub fn assert_error_codes<E: ErrorCode>(errors: &[E], expected_prefix: &str) {
    for err in errors {
        assert_error_code(err, expected_prefix);
    }
}

/// Checks if a string is UPPER_SNAKE_CASE.
fn is_upper_snake_case(s: &str) -> bool {
    if s.is_empty() || s.starts_with('_') || s.ends_with('_') || s.contains("__") {
        return false;
    }
    s.chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}
