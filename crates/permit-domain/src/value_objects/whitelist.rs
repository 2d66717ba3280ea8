//! Published whitelist

use super::attribute::{AttributeEntry, NestedAttributes};
use serde::{Serialize, Serializer};
use std::sync::Arc;

/// Immutable CRUD attribute whitelist of one model type
///
/// Created once by the aggregator and never mutated afterwards. Cloning
/// shares the underlying entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrudAttributes {
    model: String,
    entries: Arc<[AttributeEntry]>,
}

impl CrudAttributes {
    /// Bind a whitelist to a model name
    pub fn new<S: Into<String>>(model: S, entries: Vec<AttributeEntry>) -> Self {
        Self {
            model: model.into(),
            entries: entries.into(),
        }
    }

    /// Model the whitelist belongs to
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Entries in publication order
    pub fn entries(&self) -> &[AttributeEntry] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the whitelist has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries
    pub fn iter(&self) -> std::slice::Iter<'_, AttributeEntry> {
        self.entries.iter()
    }

    /// Whether a bare attribute name is permitted
    pub fn contains_name(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry.as_name() == Some(name))
    }

    /// Nested fragment for a key
    ///
    /// When the same key appears more than once the last one wins, which is
    /// how key-deduplicating consumers read the list.
    pub fn nested(&self, key: &str) -> Option<&NestedAttributes> {
        self.entries
            .iter()
            .rev()
            .filter_map(AttributeEntry::as_nested)
            .find(|nested| nested.key() == key)
    }
}

impl<'a> IntoIterator for &'a CrudAttributes {
    type Item = &'a AttributeEntry;
    type IntoIter = std::slice::Iter<'a, AttributeEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for CrudAttributes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}
