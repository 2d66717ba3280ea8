//! CRUD attribute configuration types

use crate::constants::DEFAULT_CRUD_BLOCKLIST;
use permit_application::ports::registry::AttributeProviderConfig;
use permit_application::ports::services::RedefinitionPolicy;
use serde::{Deserialize, Serialize};

/// Whitelist aggregation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributesConfig {
    /// Persisted columns never accepted from untrusted input
    pub blocklist: Vec<String>,

    /// Providers excluded from aggregation, by name
    pub disabled_providers: Vec<String>,

    /// Behavior when a published whitelist is defined again
    pub redefinition: RedefinitionPolicy,
}

impl AttributesConfig {
    /// Registry config handed to provider factories
    pub fn provider_config(&self) -> AttributeProviderConfig {
        let mut config = AttributeProviderConfig::new().with_blocklist(self.blocklist.clone());
        for name in &self.disabled_providers {
            config = config.with_disabled(name.clone());
        }
        config
    }
}

impl Default for AttributesConfig {
    fn default() -> Self {
        Self {
            blocklist: DEFAULT_CRUD_BLOCKLIST.iter().map(ToString::to_string).collect(),
            disabled_providers: Vec::new(),
            redefinition: RedefinitionPolicy::default(),
        }
    }
}
