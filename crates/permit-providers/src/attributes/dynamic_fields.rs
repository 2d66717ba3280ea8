//! Dynamic field attributes
//!
//! Every non-static configured field is accepted through a single nested
//! `dynamic_fields_attributes` entry, in configuration order.

use std::sync::Arc;

use permit_application::domain_services::provisioned_configuration;
use permit_application::ports::registry::{
    ATTRIBUTE_PROVIDERS, AttributeProviderConfig, AttributeProviderEntry,
};
use permit_domain::constants::DYNAMIC_FIELDS_ATTRIBUTES_KEY;
use permit_domain::error::Result;
use permit_domain::ports::{AttributeProvider, ModelType};
use permit_domain::value_objects::AttributeEntry;

use crate::constants::DYNAMIC_FIELDS_PRIORITY;

/// Dynamic fields provider
#[derive(Debug, Clone, Copy, Default)]
pub struct DynamicFieldsAttributeProvider;

impl AttributeProvider for DynamicFieldsAttributeProvider {
    fn name(&self) -> &'static str {
        "dynamic_fields"
    }

    fn attributes_for(&self, model: &dyn ModelType) -> Result<Vec<AttributeEntry>> {
        let Some(configuration) = provisioned_configuration(model)? else {
            return Ok(Vec::new());
        };

        let names: Vec<&str> = configuration
            .not_static()
            .map(|field| field.name.as_str())
            .collect();
        if names.is_empty() {
            return Ok(Vec::new());
        }

        Ok(vec![AttributeEntry::nested(
            DYNAMIC_FIELDS_ATTRIBUTES_KEY,
            names,
        )])
    }
}

#[linkme::distributed_slice(ATTRIBUTE_PROVIDERS)]
static DYNAMIC_FIELDS_PROVIDER: AttributeProviderEntry = AttributeProviderEntry {
    name: "dynamic_fields",
    description: "Nested whitelist of dynamically configured fields",
    priority: DYNAMIC_FIELDS_PRIORITY,
    factory: |_config: &AttributeProviderConfig| Arc::new(DynamicFieldsAttributeProvider),
};
