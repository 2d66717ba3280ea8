//! Field configuration value objects
//!
//! A model's configuration is owned elsewhere; these types are the
//! read-only view providers query.

use serde::{Deserialize, Serialize};

/// Cardinality of an attachment field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttachmentCardinality {
    /// One file per record
    #[serde(rename = "single_media")]
    Single,
    /// Many files per record
    #[serde(rename = "multiple_media")]
    Multiple,
}

impl AttachmentCardinality {
    /// Stored field type name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single_media",
            Self::Multiple => "multiple_media",
        }
    }
}

/// A single configured field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Field name
    pub name: String,
    /// Static fields map to fixed columns; the rest are dynamically configured
    #[serde(default)]
    pub is_static: bool,
    /// Set when the field holds uploaded files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<AttachmentCardinality>,
}

impl FieldDefinition {
    /// Create a static (column-backed) field
    pub fn fixed<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            is_static: true,
            attachment: None,
        }
    }

    /// Create a dynamically configured field
    pub fn dynamic<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            is_static: false,
            attachment: None,
        }
    }

    /// Create an attachment field of the given cardinality
    ///
    /// Attachment fields are dynamic unless marked static afterwards.
    pub fn attachment<S: Into<String>>(name: S, cardinality: AttachmentCardinality) -> Self {
        Self {
            name: name.into(),
            is_static: false,
            attachment: Some(cardinality),
        }
    }

    /// Mark the field as static
    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    /// Whether this field holds uploaded files
    pub fn is_attachment(&self) -> bool {
        self.attachment.is_some()
    }
}

/// Field configuration of one model type
///
/// Iteration order always follows the stored order of `fields`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelConfiguration {
    /// Configured fields
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
}

impl ModelConfiguration {
    /// Create a configuration from a list of fields
    pub fn new(fields: Vec<FieldDefinition>) -> Self {
        Self { fields }
    }

    /// Append a field
    pub fn with_field(mut self, field: FieldDefinition) -> Self {
        self.fields.push(field);
        self
    }

    /// Whether no field is configured
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Dynamically configured fields
    pub fn not_static(&self) -> impl Iterator<Item = &FieldDefinition> {
        self.fields.iter().filter(|field| !field.is_static)
    }

    /// All attachment fields
    pub fn attachments(&self) -> impl Iterator<Item = &FieldDefinition> {
        self.fields.iter().filter(|field| field.is_attachment())
    }

    /// Attachment fields of one cardinality
    pub fn attachments_of(
        &self,
        cardinality: AttachmentCardinality,
    ) -> impl Iterator<Item = &FieldDefinition> {
        self.fields
            .iter()
            .filter(move |field| field.attachment == Some(cardinality))
    }
}
