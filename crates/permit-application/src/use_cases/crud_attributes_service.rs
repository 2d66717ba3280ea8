//! CRUD Attributes Service Use Case
//!
//! Aggregates the contributions of every registered attribute provider into
//! one whitelist per model type and publishes it exactly once.
//!
//! ## Lifecycle
//!
//! ```text
//! Undefined --(store exists, configuration non-empty)--> Published
//! Undefined --(preconditions fail)--> Undefined (no-op)
//! ```
//!
//! There is no path from `Published` back to `Undefined`. What a repeat
//! call does is decided by [`RedefinitionPolicy`].

use std::sync::Arc;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use permit_domain::error::{Error, Result};
use permit_domain::ports::ModelType;
use permit_domain::value_objects::{AttributeEntry, CrudAttributes};
use tracing::{debug, info, warn};

use crate::domain_services::provisioned_configuration;
use crate::ports::registry::{AttributeProviderConfig, all_providers};
use crate::ports::services::{CrudAttributesServiceInterface, RedefinitionPolicy, WhitelistState};

/// Attribute aggregator and whitelist publisher
pub struct CrudAttributesService {
    provider_config: AttributeProviderConfig,
    redefinition: RedefinitionPolicy,
    published: DashMap<String, Arc<CrudAttributes>>,
}

impl CrudAttributesService {
    /// Create a service with the given provider config and redefinition policy
    pub fn new(provider_config: AttributeProviderConfig, redefinition: RedefinitionPolicy) -> Self {
        Self {
            provider_config,
            redefinition,
            published: DashMap::new(),
        }
    }

    /// Provider configuration used for every aggregation
    pub fn provider_config(&self) -> &AttributeProviderConfig {
        &self.provider_config
    }

    /// Active redefinition policy
    pub fn redefinition(&self) -> RedefinitionPolicy {
        self.redefinition
    }

    /// Names of every model with a published whitelist, sorted
    pub fn published_models(&self) -> Vec<String> {
        let mut names: Vec<String> = self.published.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }

    fn preconditions_met(model: &dyn ModelType) -> Result<bool> {
        Ok(provisioned_configuration(model)?
            .is_some_and(|configuration| !configuration.is_empty()))
    }

    fn aggregate(&self, model: &dyn ModelType) -> Result<Option<Vec<AttributeEntry>>> {
        if !Self::preconditions_met(model)? {
            debug!(
                model = model.model_name(),
                "Store missing or configuration empty, skipping CRUD attributes"
            );
            return Ok(None);
        }

        let mut entries = Vec::new();
        for provider in all_providers(&self.provider_config) {
            let contribution = provider.attributes_for(model)?;
            debug!(
                model = model.model_name(),
                provider = provider.name(),
                count = contribution.len(),
                "Provider contribution"
            );
            entries.extend(contribution);
        }
        entries.retain(|entry| !entry.is_placeholder());

        Ok(Some(entries))
    }

    fn publish(&self, model_name: &str, entries: Vec<AttributeEntry>) -> Arc<CrudAttributes> {
        let whitelist = Arc::new(CrudAttributes::new(model_name, entries));
        match self.published.entry(model_name.to_string()) {
            Entry::Occupied(mut occupied) => {
                if self.redefinition == RedefinitionPolicy::Keep {
                    return Arc::clone(occupied.get());
                }
                occupied.insert(Arc::clone(&whitelist));
            }
            Entry::Vacant(vacant) => {
                vacant.insert(Arc::clone(&whitelist));
            }
        }
        info!(
            model = model_name,
            entries = whitelist.len(),
            "Published CRUD attributes"
        );
        whitelist
    }
}

impl CrudAttributesServiceInterface for CrudAttributesService {
    fn compute_crud_attributes(&self, model: &dyn ModelType) -> Result<Option<Vec<AttributeEntry>>> {
        match self.aggregate(model) {
            Err(err) if err.is_persistence_unavailable() => {
                warn!(
                    model = model.model_name(),
                    error = %err,
                    "Persistence unavailable, skipping CRUD attributes"
                );
                Ok(None)
            }
            other => other,
        }
    }

    fn define_crud_attributes(&self, model: &dyn ModelType) -> Result<Option<Arc<CrudAttributes>>> {
        let model_name = model.model_name();

        if let Some(existing) = self.crud_attributes(model_name) {
            match self.redefinition {
                RedefinitionPolicy::Keep => return Ok(Some(existing)),
                RedefinitionPolicy::Reject => return Err(Error::already_published(model_name)),
                RedefinitionPolicy::Replace => {}
            }
        }

        match self.compute_crud_attributes(model)? {
            Some(entries) => Ok(Some(self.publish(model_name, entries))),
            None => Ok(self.crud_attributes(model_name)),
        }
    }

    fn crud_attributes(&self, model_name: &str) -> Option<Arc<CrudAttributes>> {
        self.published
            .get(model_name)
            .map(|whitelist| Arc::clone(whitelist.value()))
    }

    fn state(&self, model_name: &str) -> WhitelistState {
        if self.published.contains_key(model_name) {
            WhitelistState::Published
        } else {
            WhitelistState::Undefined
        }
    }
}

impl std::fmt::Debug for CrudAttributesService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CrudAttributesService")
            .field("redefinition", &self.redefinition)
            .field("published", &self.published.len())
            .finish_non_exhaustive()
    }
}
