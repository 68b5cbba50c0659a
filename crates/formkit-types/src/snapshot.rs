//! Configuration snapshot used to pre-populate rendering.

use crate::{Patch, Value};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A snapshot of current configuration: field id → current [`Value`].
///
/// Snapshots are read by every field's `render`; a field whose id is
/// absent renders its variant-defined default (usually empty). The
/// snapshot is also the merge target for a parsed [`Patch`] via
/// [`apply`](ConfigSnapshot::apply) — the caller-side half of the
/// parse/merge contract.
///
/// # Example
///
/// ```
/// use formkit_types::{ConfigSnapshot, Value};
///
/// let snapshot = ConfigSnapshot::new().with("frequency", 7_074_000i64);
/// assert_eq!(snapshot.get("frequency"), Some(&Value::Int(7_074_000)));
/// assert_eq!(snapshot.get("missing"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigSnapshot {
    values: HashMap<String, Value>,
}

impl ConfigSnapshot {
    /// Creates an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry, builder style.
    #[must_use]
    pub fn with(mut self, id: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(id, value);
        self
    }

    /// Sets the value for a field id.
    pub fn set(&mut self, id: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(id.into(), value.into());
    }

    /// Returns the current value for a field id, if any.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Value> {
        self.values.get(id)
    }

    /// Merges a parsed patch into this snapshot.
    ///
    /// Patch entries overwrite existing values; ids absent from the
    /// patch are left unchanged.
    pub fn apply(&mut self, patch: Patch) {
        for (id, value) in patch {
            self.values.insert(id, value);
        }
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the snapshot holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_overwrites() {
        let mut snapshot = ConfigSnapshot::new().with("id", "a");
        snapshot.set("id", "b");
        assert_eq!(snapshot.get("id"), Some(&Value::Text("b".into())));
        assert_eq!(snapshot.len(), 1);
    }

    #[test]
    fn apply_overwrites_and_extends() {
        let mut snapshot = ConfigSnapshot::new().with("a", 1i64);
        let mut patch = Patch::new();
        patch.insert("a", 2i64);
        patch.insert("b", 3i64);
        snapshot.apply(patch);
        assert_eq!(snapshot.get("a"), Some(&Value::Int(2)));
        assert_eq!(snapshot.get("b"), Some(&Value::Int(3)));
    }

    #[test]
    fn empty_snapshot() {
        let snapshot = ConfigSnapshot::new();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.get("anything"), None);
    }
}
