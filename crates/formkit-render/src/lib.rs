//! HTML serialization for FormKit.
//!
//! The domain layer (`formkit-field`) renders fields as a structural
//! widget tree; this crate turns that tree into markup. Keeping
//! serialization separate means semantic tests assert on structure
//! while markup stays a swappable presentation concern.
//!
//! # Crate Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  formkit-field  : Field::render → Fragment (widget tree)     │
//! └─────────────────────────────────────────────────────────────┘
//!                               ↓
//! ┌─────────────────────────────────────────────────────────────┐
//! │  formkit-render : Fragment → HTML string         ◄── HERE    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use formkit_field::{Field, TextField};
//! use formkit_render::HtmlRenderer;
//! use formkit_types::ConfigSnapshot;
//!
//! let fragment = TextField::new("receiver_name", "Receiver name")
//!     .render(&ConfigSnapshot::new());
//!
//! let html = HtmlRenderer::new().render_fragment(&fragment);
//! assert!(html.contains(r#"id="receiver_name""#));
//! assert!(html.contains("form-control"));
//! ```

mod html;

pub use html::HtmlRenderer;
