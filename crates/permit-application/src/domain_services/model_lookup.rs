//! Model lookups that treat every missing link as "nothing configured"
//!
//! Each hop is an explicit `Result<Option<_>>`: an unprovisioned store or an
//! absent configuration becomes `None`, while persistence failures keep
//! propagating so the aggregator can decide what to do with them.

use permit_domain::error::Result;
use permit_domain::ports::ModelType;
use permit_domain::value_objects::ModelConfiguration;

/// Whether the model's backing store exists
pub fn is_provisioned(model: &dyn ModelType) -> Result<bool> {
    model.table_exists()
}

/// Configuration of a provisioned model
///
/// `None` when the store does not exist yet or nothing is configured.
pub fn provisioned_configuration(model: &dyn ModelType) -> Result<Option<ModelConfiguration>> {
    if !is_provisioned(model)? {
        return Ok(None);
    }
    model.configuration()
}
