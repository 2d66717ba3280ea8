//! Attribute whitelist entries
//!
//! A whitelist is a flat sequence mixing bare attribute names with nested
//! fragments that permit a sub-resource's own attributes. The JSON shape
//! matches what strong-parameter style consumers expect:
//!
//! ```json
//! ["title", {"avatar_attachment_attributes": ["file", "source", "id", "name"]}]
//! ```

use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Nested whitelist fragment for a sub-resource
///
/// `key` is the attribute that accepts a nested payload; `attributes` are
/// the names permitted inside it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NestedAttributes {
    key: String,
    attributes: Vec<String>,
}

impl NestedAttributes {
    /// Create a nested fragment
    pub fn new<K, I, S>(key: K, attributes: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            key: key.into(),
            attributes: attributes.into_iter().map(Into::into).collect(),
        }
    }

    /// Attribute that accepts the nested payload
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Attributes permitted inside the nested payload
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }
}

impl Serialize for NestedAttributes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.key, &self.attributes)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for NestedAttributes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = BTreeMap::<String, Vec<String>>::deserialize(deserializer)?;
        if map.len() != 1 {
            return Err(D::Error::invalid_length(
                map.len(),
                &"a nested whitelist with exactly one key",
            ));
        }
        let mut entries = map.into_iter();
        match entries.next() {
            Some((key, attributes)) => Ok(Self { key, attributes }),
            None => Err(D::Error::custom("empty nested whitelist")),
        }
    }
}

/// One entry of a mass-assignment whitelist
///
/// Entries are opaque to the aggregator; it only concatenates and filters
/// them. Consumers treat [`AttributeEntry::Nested`] as "this key accepts a
/// whitelist scoped to a sub-resource", never as a literal attribute name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeEntry {
    /// A bare attribute name
    Name(String),
    /// A nested sub-resource whitelist
    Nested(NestedAttributes),
}

impl AttributeEntry {
    /// Create a bare-name entry
    pub fn name<S: Into<String>>(name: S) -> Self {
        Self::Name(name.into())
    }

    /// Create a nested entry
    pub fn nested<K, I, S>(key: K, attributes: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Nested(NestedAttributes::new(key, attributes))
    }

    /// The bare name, or the key of a nested entry
    pub fn key(&self) -> &str {
        match self {
            Self::Name(name) => name,
            Self::Nested(nested) => nested.key(),
        }
    }

    /// The bare name, if this is not a nested entry
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Self::Name(name) => Some(name),
            Self::Nested(_) => None,
        }
    }

    /// The nested fragment, if any
    pub fn as_nested(&self) -> Option<&NestedAttributes> {
        match self {
            Self::Name(_) => None,
            Self::Nested(nested) => Some(nested),
        }
    }

    /// Whether this entry carries nothing and must be dropped
    ///
    /// A blank name or a nested entry with a blank key is a placeholder.
    /// A nested entry with a real key stays even when its attribute list
    /// is empty.
    pub fn is_placeholder(&self) -> bool {
        self.key().trim().is_empty()
    }
}

impl From<&str> for AttributeEntry {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for AttributeEntry {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<NestedAttributes> for AttributeEntry {
    fn from(nested: NestedAttributes) -> Self {
        Self::Nested(nested)
    }
}

impl fmt::Display for AttributeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => write!(f, "{name}"),
            Self::Nested(nested) => {
                write!(f, "{}: [{}]", nested.key(), nested.attributes().join(", "))
            }
        }
    }
}
