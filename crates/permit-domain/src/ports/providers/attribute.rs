//! Attribute Provider Port
//!
//! A provider is a stateless policy unit contributing one fragment of a
//! model's whitelist. Providers are discovered through the registry in
//! `permit-application`; the aggregator never names them.
//!
//! ## Contract
//!
//! - Missing configuration or an unprovisioned store yields `Ok(vec![])`.
//! - Persistence failures are propagated with `?`, never swallowed.
//! - Leaving `attributes_for` unimplemented is a programming defect and
//!   fails with [`Error::NotImplemented`].

use crate::error::{Error, Result};
use crate::ports::ModelType;
use crate::value_objects::AttributeEntry;

/// Contributes whitelist entries for one policy concern
pub trait AttributeProvider: Send + Sync {
    /// Unique provider name
    fn name(&self) -> &'static str;

    /// Entries this provider is responsible for, in order
    fn attributes_for(&self, model: &dyn ModelType) -> Result<Vec<AttributeEntry>> {
        let _ = model;
        Err(Error::not_implemented(self.name()))
    }
}
