//! Audit justification attribute

use std::sync::Arc;

use permit_application::domain_services::is_provisioned;
use permit_application::ports::registry::{
    ATTRIBUTE_PROVIDERS, AttributeProviderConfig, AttributeProviderEntry,
};
use permit_domain::constants::AUDIT_COMMENT_ATTRIBUTE;
use permit_domain::error::Result;
use permit_domain::ports::{AttributeProvider, ModelType};
use permit_domain::value_objects::AttributeEntry;

use crate::constants::AUDIT_PRIORITY;

/// Contributes `audit_comment` for models that require a justification
#[derive(Debug, Clone, Copy, Default)]
pub struct AuditAttributeProvider;

impl AttributeProvider for AuditAttributeProvider {
    fn name(&self) -> &'static str {
        "audit"
    }

    fn attributes_for(&self, model: &dyn ModelType) -> Result<Vec<AttributeEntry>> {
        if !is_provisioned(model)? || !model.requires_audit_justification() {
            return Ok(Vec::new());
        }
        Ok(vec![AttributeEntry::name(AUDIT_COMMENT_ATTRIBUTE)])
    }
}

#[linkme::distributed_slice(ATTRIBUTE_PROVIDERS)]
static AUDIT_PROVIDER: AttributeProviderEntry = AttributeProviderEntry {
    name: "audit",
    description: "Audit justification comment",
    priority: AUDIT_PRIORITY,
    factory: |_config: &AttributeProviderConfig| Arc::new(AuditAttributeProvider),
};
