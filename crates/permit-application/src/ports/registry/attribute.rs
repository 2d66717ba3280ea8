//! Attribute Provider Registry
//!
//! Auto-registration system for attribute providers.
//! Providers register themselves via `#[linkme::distributed_slice]` at
//! compile time, or through [`register_attribute_provider`] when they are
//! loaded after process start. Both sources are read on every call; nothing
//! is cached.

use std::collections::HashSet;
use std::sync::{Arc, PoisonError, RwLock};

use once_cell::sync::Lazy;
use permit_domain::error::{Error, Result};
use permit_domain::ports::AttributeProvider;
use tracing::{debug, warn};

/// Configuration handed to provider factories
///
/// Contains all options an attribute provider might need. Providers use
/// what they need and ignore the rest.
#[derive(Debug, Clone, Default)]
pub struct AttributeProviderConfig {
    /// Column names never accepted from untrusted input
    pub blocklist: Vec<String>,
    /// Names of providers excluded from aggregation
    pub disabled: Vec<String>,
}

impl AttributeProviderConfig {
    /// Create an empty config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the column blocklist
    pub fn with_blocklist<I, S>(mut self, blocklist: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.blocklist = blocklist.into_iter().map(Into::into).collect();
        self
    }

    /// Disable a provider by name
    pub fn with_disabled(mut self, name: impl Into<String>) -> Self {
        self.disabled.push(name.into());
        self
    }

    /// Whether the named provider is disabled
    pub fn is_disabled(&self, name: &str) -> bool {
        self.disabled.iter().any(|disabled| disabled == name)
    }
}

/// Registry entry for attribute providers
///
/// Each provider registers one entry. Entries are ordered by `priority`
/// then `name`, which fixes the concatenation order of contributions.
#[derive(Clone, Copy)]
pub struct AttributeProviderEntry {
    /// Unique provider name (e.g., "audit", "media")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Lower values contribute first
    pub priority: u16,
    /// Factory function to create the provider
    pub factory: fn(&AttributeProviderConfig) -> Arc<dyn AttributeProvider>,
}

impl std::fmt::Debug for AttributeProviderEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AttributeProviderEntry")
            .field("name", &self.name)
            .field("priority", &self.priority)
            .finish_non_exhaustive()
    }
}

// Auto-collection via linkme distributed slices - providers submit entries at compile time
#[linkme::distributed_slice]
pub static ATTRIBUTE_PROVIDERS: [AttributeProviderEntry] = [..];

static RUNTIME_PROVIDERS: Lazy<RwLock<Vec<AttributeProviderEntry>>> =
    Lazy::new(|| RwLock::new(Vec::new()));

/// Register a provider loaded after process start
///
/// Fails if a provider with the same name is already known, from either
/// the compile-time slice or an earlier runtime registration.
pub fn register_attribute_provider(entry: AttributeProviderEntry) -> Result<()> {
    let mut runtime = RUNTIME_PROVIDERS
        .write()
        .unwrap_or_else(PoisonError::into_inner);

    let taken = ATTRIBUTE_PROVIDERS
        .iter()
        .chain(runtime.iter())
        .any(|existing| existing.name == entry.name);
    if taken {
        return Err(Error::duplicate_provider(entry.name));
    }

    debug!(provider = entry.name, "Registered attribute provider at runtime");
    runtime.push(entry);
    Ok(())
}

/// Every registered entry, in aggregation order
///
/// Names are unique: when two compile-time entries share a name, only the
/// first one linked is kept. Runtime registration already rejects
/// duplicates.
pub fn registered_entries() -> Vec<AttributeProviderEntry> {
    let runtime = RUNTIME_PROVIDERS
        .read()
        .unwrap_or_else(PoisonError::into_inner);

    let mut seen = HashSet::new();
    let mut entries: Vec<AttributeProviderEntry> = Vec::new();
    for entry in ATTRIBUTE_PROVIDERS.iter().chain(runtime.iter()) {
        if !seen.insert(entry.name) {
            warn!(
                provider = entry.name,
                "Duplicate attribute provider name, keeping the first registration"
            );
            continue;
        }
        entries.push(*entry);
    }
    entries.sort_by(|a, b| a.priority.cmp(&b.priority).then_with(|| a.name.cmp(b.name)));
    entries
}

/// Instantiate all enabled providers in aggregation order
pub fn all_providers(config: &AttributeProviderConfig) -> Vec<Arc<dyn AttributeProvider>> {
    registered_entries()
        .into_iter()
        .filter(|entry| !config.is_disabled(entry.name))
        .map(|entry| (entry.factory)(config))
        .collect()
}

/// List all registered attribute providers
///
/// Returns a list of (name, description) tuples in aggregation order.
pub fn list_attribute_providers() -> Vec<(&'static str, &'static str)> {
    registered_entries()
        .into_iter()
        .map(|entry| (entry.name, entry.description))
        .collect()
}
