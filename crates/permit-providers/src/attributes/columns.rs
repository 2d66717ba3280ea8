//! Persisted column attributes
//!
//! Contributes one bare name per persisted column, minus the configured
//! blocklist (primary keys, timestamps and the like).

use std::sync::Arc;

use permit_application::domain_services::is_provisioned;
use permit_application::ports::registry::{
    ATTRIBUTE_PROVIDERS, AttributeProviderConfig, AttributeProviderEntry,
};
use permit_domain::error::Result;
use permit_domain::ports::{AttributeProvider, ModelType};
use permit_domain::value_objects::AttributeEntry;

use crate::constants::COLUMNS_PRIORITY;
use tracing::debug;

/// Base column provider
#[derive(Debug, Clone, Default)]
pub struct ColumnsAttributeProvider {
    blocklist: Vec<String>,
}

impl ColumnsAttributeProvider {
    /// Create a provider that skips the given column names
    pub fn new(blocklist: Vec<String>) -> Self {
        Self { blocklist }
    }

    /// Columns never contributed
    pub fn blocklist(&self) -> &[String] {
        &self.blocklist
    }
}

impl AttributeProvider for ColumnsAttributeProvider {
    fn name(&self) -> &'static str {
        "columns"
    }

    fn attributes_for(&self, model: &dyn ModelType) -> Result<Vec<AttributeEntry>> {
        if !is_provisioned(model)? {
            return Ok(Vec::new());
        }

        let columns = model.column_names()?;
        let total = columns.len();
        let entries: Vec<AttributeEntry> = columns
            .into_iter()
            .filter(|column| !self.blocklist.contains(column))
            .map(AttributeEntry::Name)
            .collect();

        debug!(
            model = model.model_name(),
            columns = total,
            blocked = total - entries.len(),
            "Collected column attributes"
        );
        Ok(entries)
    }
}

#[linkme::distributed_slice(ATTRIBUTE_PROVIDERS)]
static COLUMNS_PROVIDER: AttributeProviderEntry = AttributeProviderEntry {
    name: "columns",
    description: "Persisted columns minus the CRUD blocklist",
    priority: COLUMNS_PRIORITY,
    factory: |config: &AttributeProviderConfig| {
        Arc::new(ColumnsAttributeProvider::new(config.blocklist.clone()))
    },
};
