//! Raw submitted form data.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A flat form submission: raw key → one or more raw strings.
///
/// Keys are field ids or field-derived composites (`"{id}-{suffix}"`
/// for location sub-inputs, `"{id}-{choice}"` for multi-checkbox
/// entries). A key may be absent — for scalar fields that means
/// "unchanged", for checkbox-style fields it means "unchecked" — or
/// repeated, in which case only the first string is meaningful and
/// [`first`](SubmittedData::first) returns it.
///
/// # Example
///
/// ```
/// use formkit_types::SubmittedData;
///
/// let data = SubmittedData::new()
///     .with("frequency", "7074000")
///     .with("pos-lat", "12.5")
///     .with("pos-lon", "-3.25");
///
/// assert_eq!(data.first("frequency"), Some("7074000"));
/// assert!(!data.contains("missing"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmittedData {
    entries: HashMap<String, Vec<String>>,
}

impl SubmittedData {
    /// Creates an empty submission.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a submitted string for a key, builder style.
    ///
    /// Calling this twice with the same key models a repeated key.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(key, value);
        self
    }

    /// Appends a submitted string for a key.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries
            .entry(key.into())
            .or_default()
            .push(value.into());
    }

    /// Returns the first submitted string for a key, if the key is present.
    #[must_use]
    pub fn first(&self, key: &str) -> Option<&str> {
        self.entries
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns all submitted strings for a key, if the key is present.
    #[must_use]
    pub fn all(&self, key: &str) -> Option<&[String]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// Returns true if the key was submitted at all.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the number of distinct submitted keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing was submitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
