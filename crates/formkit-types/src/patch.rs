//! Partial configuration patches produced by parsing.

use crate::Value;
use serde::{Deserialize, Serialize};
use std::collections::{btree_map, BTreeMap};

/// A partial mapping from field id to newly parsed [`Value`].
///
/// A patch is the output of `parse`. Absence of an id means "leave the
/// persisted value unchanged" — except for field variants whose
/// semantics make absence meaningful (checkbox, multi-checkbox), which
/// always contribute an entry. The caller merges a patch into persisted
/// configuration with `ConfigSnapshot::apply`.
///
/// Entries are kept in a sorted map so iteration order is stable for
/// logging and tests.
///
/// # Example
///
/// ```
/// use formkit_types::{Patch, Value};
///
/// let mut patch = Patch::single("enabled", true);
/// patch.merge(Patch::single("frequency", 7_074_000i64));
///
/// assert_eq!(patch.len(), 2);
/// assert_eq!(patch.get("enabled"), Some(&Value::Bool(true)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Patch {
    entries: BTreeMap<String, Value>,
}

impl Patch {
    /// Creates an empty patch (the "nothing changed" result).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a patch with exactly one entry.
    ///
    /// This is the shape every scalar field produces on success.
    #[must_use]
    pub fn single(id: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut patch = Self::new();
        patch.insert(id, value);
        patch
    }

    /// Inserts an entry, replacing any previous value for the id.
    pub fn insert(&mut self, id: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(id.into(), value.into());
    }

    /// Returns the parsed value for a field id, if present.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Value> {
        self.entries.get(id)
    }

    /// Merges another patch into this one; `other`'s entries win on conflict.
    ///
    /// Field ids are unique within a schema, so conflicts cannot occur
    /// when merging per-field parse results.
    pub fn merge(&mut self, other: Patch) {
        self.entries.extend(other.entries);
    }

    /// Iterates entries in field-id order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> + '_ {
        self.entries.iter()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the patch holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for Patch {
    type Item = (String, Value);
    type IntoIter = btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
