//! Providers that only exist in this test binary
//!
//! Each one activates for a single model name so it never disturbs the
//! whitelists other tests assert on.

use std::sync::{Arc, Once};

use permit_application::ports::registry::{
    ATTRIBUTE_PROVIDERS, AttributeProviderConfig, AttributeProviderEntry,
    register_attribute_provider,
};
use permit_domain::{AttributeEntry, AttributeProvider, ModelType, Result};

pub const LEDGER_MODEL: &str = "Ledger";
pub const PLACEHOLDER_MODEL: &str = "Placeholder";
pub const SHIPMENT_MODEL: &str = "Shipment";

/// Registered at compile time, with no change to the aggregator
pub struct LedgerReferenceProvider;

impl AttributeProvider for LedgerReferenceProvider {
    fn name(&self) -> &'static str {
        "ledger_reference"
    }

    fn attributes_for(&self, model: &dyn ModelType) -> Result<Vec<AttributeEntry>> {
        if model.model_name() != LEDGER_MODEL {
            return Ok(Vec::new());
        }
        Ok(vec![AttributeEntry::name("ledger_reference")])
    }
}

#[linkme::distributed_slice(ATTRIBUTE_PROVIDERS)]
static LEDGER_PROVIDER: AttributeProviderEntry = AttributeProviderEntry {
    name: "ledger_reference",
    description: "Test provider for ledger models",
    priority: 50,
    factory: |_config: &AttributeProviderConfig| Arc::new(LedgerReferenceProvider),
};

/// Emits a placeholder and an empty-but-keyed nested entry
pub struct PlaceholderProvider;

impl AttributeProvider for PlaceholderProvider {
    fn name(&self) -> &'static str {
        "placeholder"
    }

    fn attributes_for(&self, model: &dyn ModelType) -> Result<Vec<AttributeEntry>> {
        if model.model_name() != PLACEHOLDER_MODEL {
            return Ok(Vec::new());
        }
        Ok(vec![
            AttributeEntry::name(""),
            AttributeEntry::nested("", ["file"]),
            AttributeEntry::nested("notes_attributes", Vec::<String>::new()),
        ])
    }
}

#[linkme::distributed_slice(ATTRIBUTE_PROVIDERS)]
static PLACEHOLDER_ENTRY: AttributeProviderEntry = AttributeProviderEntry {
    name: "placeholder",
    description: "Test provider emitting placeholder entries",
    priority: 60,
    factory: |_config: &AttributeProviderConfig| Arc::new(PlaceholderProvider),
};

/// Registered at runtime through `register_attribute_provider`
pub struct ShipmentTrackingProvider;

impl AttributeProvider for ShipmentTrackingProvider {
    fn name(&self) -> &'static str {
        "shipment_tracking"
    }

    fn attributes_for(&self, model: &dyn ModelType) -> Result<Vec<AttributeEntry>> {
        if model.model_name() != SHIPMENT_MODEL {
            return Ok(Vec::new());
        }
        Ok(vec![AttributeEntry::name("tracking_number")])
    }
}

pub fn shipment_entry() -> AttributeProviderEntry {
    AttributeProviderEntry {
        name: "shipment_tracking",
        description: "Runtime-registered test provider",
        priority: 5,
        factory: |_config: &AttributeProviderConfig| Arc::new(ShipmentTrackingProvider),
    }
}

static SHIPMENT_REGISTRATION: Once = Once::new();

pub fn ensure_shipment_provider() {
    SHIPMENT_REGISTRATION.call_once(|| {
        register_attribute_provider(shipment_entry()).expect("first registration succeeds");
    });
}
