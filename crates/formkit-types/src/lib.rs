//! Core types for FormKit.
//!
//! This crate provides the foundational data model for the FormKit
//! field-schema framework: typed configuration values, the flat
//! submitted key/value representation produced by a form post, and the
//! partial patch that a parse produces.
//!
//! # Crate Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Foundation Layer                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  formkit-types  : Value, Snapshot, Patch, ErrorCode ◄── HERE │
//! └─────────────────────────────────────────────────────────────┘
//!                               ↓
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Domain Layer                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  formkit-field  : Converter, Field variants, Schema          │
//! └─────────────────────────────────────────────────────────────┘
//!                               ↓
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   Presentation Layer                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  formkit-render : widget tree → HTML markup                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Data Flow
//!
//! A [`ConfigSnapshot`] (field id → current [`Value`]) flows into each
//! field's `render`. [`SubmittedData`] (raw key → one or more strings)
//! flows into each field's `parse`, which produces a [`Patch`] the
//! caller merges back into persisted configuration with
//! [`ConfigSnapshot::apply`].
//!
//! # Example
//!
//! ```
//! use formkit_types::{ConfigSnapshot, Patch, SubmittedData, Value};
//!
//! let mut snapshot = ConfigSnapshot::new()
//!     .with("receiver_name", "My Receiver")
//!     .with("frequency", 14_074_000i64);
//!
//! let data = SubmittedData::new().with("frequency", "7074000");
//! assert_eq!(data.first("frequency"), Some("7074000"));
//!
//! let patch = Patch::single("frequency", 7_074_000i64);
//! snapshot.apply(patch);
//! assert_eq!(snapshot.get("frequency"), Some(&Value::Int(7_074_000)));
//! ```

mod error;
mod patch;
mod snapshot;
mod submitted;
mod value;

pub use error::{assert_error_code, assert_error_codes, ErrorCode};
pub use patch::Patch;
pub use snapshot::ConfigSnapshot;
pub use submitted::SubmittedData;
pub use value::{Coordinates, Value};
