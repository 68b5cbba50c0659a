//! Schema: an ordered collection of fields.

use crate::{Field, Fragment, ParseError, SchemaError};
use formkit_types::{ConfigSnapshot, ErrorCode, Patch, SubmittedData};
use std::collections::HashSet;

/// An ordered collection of fields composed into one form.
///
/// A schema validates field-id uniqueness at construction and then
/// composes per-field render/parse results: `render` yields one
/// fragment per field in declaration order; `parse` merges each
/// field's patch into one configuration patch.
///
/// # Error Policy
///
/// Two parse entry points expose the two aggregation policies:
///
/// - [`parse`](Schema::parse) — fail fast on the first failing field;
/// - [`parse_all`](Schema::parse_all) — run every field and return all
///   failures, for callers that present per-field errors together.
///
/// # Example
///
/// ```
/// use formkit_field::{CheckboxField, NumberField, Schema, TextField};
/// use formkit_types::{ConfigSnapshot, SubmittedData, Value};
///
/// let schema = Schema::builder()
///     .field(TextField::new("receiver_name", "Receiver name"))
///     .field(NumberField::new("frequency", "Frequency").with_unit("Hz"))
///     .field(CheckboxField::new("waterfall", "Waterfall", "Enable waterfall"))
///     .build()
///     .unwrap();
///
/// let fragments = schema.render(&ConfigSnapshot::new());
/// assert_eq!(fragments.len(), 3);
///
/// // Scalars absent ⇒ unchanged; checkbox absent ⇒ explicit false.
/// let patch = schema.parse(&SubmittedData::new()).unwrap();
/// assert_eq!(patch.len(), 1);
/// assert_eq!(patch.get("waterfall"), Some(&Value::Bool(false)));
/// ```
pub struct Schema {
    fields: Vec<Box<dyn Field>>,
}

impl Schema {
    /// Starts building a schema.
    #[must_use]
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder { fields: Vec::new() }
    }

    /// Builds a schema from boxed fields, validating id uniqueness.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::DuplicateFieldId`] if two fields share an id.
    pub fn from_fields(fields: Vec<Box<dyn Field>>) -> Result<Self, SchemaError> {
        let mut seen = HashSet::new();
        for field in &fields {
            if !seen.insert(field.id().to_string()) {
                return Err(SchemaError::DuplicateFieldId {
                    id: field.id().to_string(),
                });
            }
        }
        Ok(Self { fields })
    }

    /// Returns the field ids in declaration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.iter().map(|f| f.id())
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the schema has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Renders every field against the snapshot, in declaration order.
    ///
    /// Total: rendering never fails under the parse-error taxonomy.
    #[must_use]
    pub fn render(&self, snapshot: &ConfigSnapshot) -> Vec<Fragment> {
        tracing::debug!(fields = self.fields.len(), "rendering schema");
        self.fields.iter().map(|f| f.render(snapshot)).collect()
    }

    /// Parses a submission, failing fast on the first failing field.
    ///
    /// # Errors
    ///
    /// Returns the first field's [`ParseError`], unchanged.
    pub fn parse(&self, data: &SubmittedData) -> Result<Patch, ParseError> {
        tracing::debug!(fields = self.fields.len(), "parsing submission");
        let mut patch = Patch::new();
        for field in &self.fields {
            match field.parse(data) {
                Ok(partial) => patch.merge(partial),
                Err(err) => {
                    tracing::warn!(field = field.id(), code = err.code(), "field parse failed");
                    return Err(err);
                }
            }
        }
        Ok(patch)
    }

    /// Parses a submission, collecting every field failure.
    ///
    /// Successful fields still contribute nothing when any field
    /// fails; the submission is accepted whole or rejected whole.
    ///
    /// # Errors
    ///
    /// Returns every failing field's [`ParseError`], in field order.
    pub fn parse_all(&self, data: &SubmittedData) -> Result<Patch, Vec<ParseError>> {
        tracing::debug!(fields = self.fields.len(), "parsing submission");
        let mut patch = Patch::new();
        let mut errors = Vec::new();
        for field in &self.fields {
            match field.parse(data) {
                Ok(partial) => patch.merge(partial),
                Err(err) => {
                    tracing::warn!(field = field.id(), code = err.code(), "field parse failed");
                    errors.push(err);
                }
            }
        }
        if errors.is_empty() {
            Ok(patch)
        } else {
            Err(errors)
        }
    }
}

/// Builder collecting fields before uniqueness validation.
pub struct SchemaBuilder {
    fields: Vec<Box<dyn Field>>,
}

impl SchemaBuilder {
    /// Appends a field.
    #[must_use]
    pub fn field(mut self, field: impl Field + 'static) -> Self {
        self.fields.push(Box::new(field));
        self
    }

    /// Validates and builds the schema.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::DuplicateFieldId`] if two fields share an id.
    pub fn build(self) -> Result<Schema, SchemaError> {
        Schema::from_fields(self.fields)
    }
}
