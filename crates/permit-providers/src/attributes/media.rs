//! Media attachment attributes
//!
//! Each attachment field becomes a nested entry accepting the attachment
//! sub-resource: `<name>_attachment_attributes` for single files and
//! `<name>_attachments_attributes` for collections. Single attachments are
//! emitted before multiple ones.
//!
//! Names shared across both cardinalities are not validated; both entries
//! are emitted.

use std::sync::Arc;

use permit_application::domain_services::provisioned_configuration;
use permit_application::ports::registry::{
    ATTRIBUTE_PROVIDERS, AttributeProviderConfig, AttributeProviderEntry,
};
use permit_domain::constants::{
    MEDIA_PERMITTED_ATTRIBUTES, MULTIPLE_ATTACHMENTS_SUFFIX, SINGLE_ATTACHMENT_SUFFIX,
};
use permit_domain::error::Result;
use permit_domain::ports::{AttributeProvider, ModelType};
use permit_domain::value_objects::{AttachmentCardinality, AttributeEntry, ModelConfiguration};

use crate::constants::MEDIA_PRIORITY;

/// Attachment provider for both cardinalities
#[derive(Debug, Clone, Copy, Default)]
pub struct MediaAttributeProvider;

impl MediaAttributeProvider {
    fn nested_key(name: &str, cardinality: AttachmentCardinality) -> String {
        let suffix = match cardinality {
            AttachmentCardinality::Single => SINGLE_ATTACHMENT_SUFFIX,
            AttachmentCardinality::Multiple => MULTIPLE_ATTACHMENTS_SUFFIX,
        };
        format!("{name}{suffix}")
    }

    fn build(
        configuration: &ModelConfiguration,
        cardinality: AttachmentCardinality,
    ) -> impl Iterator<Item = AttributeEntry> + '_ {
        configuration.attachments_of(cardinality).map(move |field| {
            AttributeEntry::nested(
                Self::nested_key(&field.name, cardinality),
                MEDIA_PERMITTED_ATTRIBUTES,
            )
        })
    }
}

impl AttributeProvider for MediaAttributeProvider {
    fn name(&self) -> &'static str {
        "media"
    }

    fn attributes_for(&self, model: &dyn ModelType) -> Result<Vec<AttributeEntry>> {
        let Some(configuration) = provisioned_configuration(model)? else {
            return Ok(Vec::new());
        };

        Ok(Self::build(&configuration, AttachmentCardinality::Single)
            .chain(Self::build(&configuration, AttachmentCardinality::Multiple))
            .collect())
    }
}

#[linkme::distributed_slice(ATTRIBUTE_PROVIDERS)]
static MEDIA_PROVIDER: AttributeProviderEntry = AttributeProviderEntry {
    name: "media",
    description: "Nested whitelists for single and multiple attachment fields",
    priority: MEDIA_PRIORITY,
    factory: |_config: &AttributeProviderConfig| Arc::new(MediaAttributeProvider),
};
