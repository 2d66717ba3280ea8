//! Application service interfaces

use std::sync::Arc;

use permit_domain::error::Result;
use permit_domain::ports::ModelType;
use permit_domain::value_objects::{AttributeEntry, CrudAttributes};
use serde::{Deserialize, Serialize};

/// What happens when a whitelist is defined again for a published model
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedefinitionPolicy {
    /// First publication wins; repeat calls return it unchanged
    #[default]
    Keep,
    /// Recompute and overwrite the published whitelist
    Replace,
    /// Fail with `Error::AlreadyPublished`
    Reject,
}

/// Publication state of one model type's whitelist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WhitelistState {
    /// Nothing published yet (or preconditions never held)
    Undefined,
    /// A whitelist is bound and immutable
    Published,
}

/// CRUD attribute aggregation interface
pub trait CrudAttributesServiceInterface: Send + Sync {
    /// Run every registered provider and return the filtered whitelist
    ///
    /// `Ok(None)` when the store is missing, the configuration is empty, or
    /// the persistence layer is unavailable.
    fn compute_crud_attributes(&self, model: &dyn ModelType) -> Result<Option<Vec<AttributeEntry>>>;

    /// Compute and publish the whitelist of a model type
    fn define_crud_attributes(&self, model: &dyn ModelType) -> Result<Option<Arc<CrudAttributes>>>;

    /// Published whitelist of a model, if any
    fn crud_attributes(&self, model_name: &str) -> Option<Arc<CrudAttributes>>;

    /// Publication state of a model
    fn state(&self, model_name: &str) -> WhitelistState;
}
