//! Field/Converter core of FormKit.
//!
//! FormKit is a declarative field-schema framework: typed
//! configuration values map to and from a flat, submitted key/value
//! representation, and each field renders as a self-describing widget
//! node. This crate is the core of that contract — the polymorphic
//! field hierarchy, the bidirectional converter protocol, and the
//! parse/render rules that guarantee round-trip fidelity and
//! well-defined "unchanged" vs "explicit" semantics per field kind.
//!
//! # Crate Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  formkit-types  : Value, Snapshot, SubmittedData, Patch      │
//! └─────────────────────────────────────────────────────────────┘
//!                               ↓
//! ┌─────────────────────────────────────────────────────────────┐
//! │  formkit-field                                   ◄── HERE    │
//! │   convert   : Converter protocol (text/int/float/enum)       │
//! │   choice    : (value, text) pairs for selection fields       │
//! │   field     : Field trait + variants                         │
//! │   node      : structural widget tree                         │
//! │   directory : live-registry boundary                         │
//! │   schema    : composition + error policy                     │
//! └─────────────────────────────────────────────────────────────┘
//!                               ↓
//! ┌─────────────────────────────────────────────────────────────┐
//! │  formkit-render : widget tree → HTML markup                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Parse Contract
//!
//! | Field kind | Submitted key absent |
//! |------------|----------------------|
//! | scalar (text, number, float, textarea, dropdown) | unchanged — no patch entry |
//! | checkbox / multi-checkbox | meaningful — explicit false / empty set |
//! | composite (location) | error — never a partial patch |
//!
//! # Example
//!
//! ```
//! use formkit_field::{CheckboxField, LocationField, NumberField, Schema, TextField};
//! use formkit_types::{ConfigSnapshot, SubmittedData, Value};
//!
//! let schema = Schema::builder()
//!     .field(TextField::new("receiver_name", "Receiver name"))
//!     .field(NumberField::new("frequency", "Frequency").with_unit("Hz"))
//!     .field(CheckboxField::new("waterfall", "Waterfall", "Enable waterfall"))
//!     .field(LocationField::new("location", "Receiver location"))
//!     .build()
//!     .unwrap();
//!
//! let data = SubmittedData::new()
//!     .with("frequency", "7074000")
//!     .with("location-lat", "50.1")
//!     .with("location-lon", "8.6");
//!
//! let patch = schema.parse(&data).unwrap();
//! assert_eq!(patch.get("frequency"), Some(&Value::Int(7_074_000)));
//! // receiver_name absent ⇒ unchanged; waterfall absent ⇒ explicit false.
//! assert_eq!(patch.get("receiver_name"), None);
//! assert_eq!(patch.get("waterfall"), Some(&Value::Bool(false)));
//! ```

mod choice;
mod convert;
mod directory;
mod error;
mod field;
mod node;
mod schema;

pub use choice::Choice;
pub use convert::{
    ConvertError, Converter, EnumConverter, EnumMembers, FloatConverter, IntConverter,
    TextConverter,
};
pub use directory::ServiceDirectory;
pub use error::{ParseError, SchemaError};
pub use field::{
    CheckboxField, DropdownField, Field, FloatField, LocationField, MultiCheckboxField,
    NumberField, TextAreaField, TextField,
};
pub use node::{Fragment, SelectChoice, Step, Widget};
pub use schema::{Schema, SchemaBuilder};
