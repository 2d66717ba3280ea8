//! Tests for the attribute provider registry
//!
//! Uses `extern crate permit_providers` to force linkme registration of the
//! real providers.

// Force linkme registration of all providers from permit-providers
extern crate permit_providers;

use permit_application::ports::registry::{
    AttributeProviderConfig, all_providers, list_attribute_providers,
    register_attribute_provider, registered_entries,
};
use permit_domain::Error;

use crate::test_providers::{ensure_shipment_provider, shipment_entry};

fn names(list: &[(&'static str, &'static str)]) -> Vec<&'static str> {
    list.iter().map(|(name, _)| *name).collect()
}

#[test]
fn test_builtin_providers_are_registered_in_order() {
    let listed = names(&list_attribute_providers());
    let builtin: Vec<&str> = listed
        .into_iter()
        .filter(|name| ["columns", "dynamic_fields", "media", "audit"].contains(name))
        .collect();

    assert_eq!(builtin, vec!["columns", "dynamic_fields", "media", "audit"]);
}

#[test]
fn test_test_binary_providers_are_discovered() {
    let listed = names(&list_attribute_providers());
    assert!(listed.contains(&"ledger_reference"), "Available: {listed:?}");
    assert!(listed.contains(&"placeholder"), "Available: {listed:?}");
}

#[test]
fn test_entries_sorted_by_priority() {
    let entries = registered_entries();
    assert!(
        entries
            .windows(2)
            .all(|pair| (pair[0].priority, pair[0].name) <= (pair[1].priority, pair[1].name))
    );
}

#[test]
fn test_order_is_stable_across_calls() {
    let first = names(&list_attribute_providers());
    let second = names(&list_attribute_providers());
    assert_eq!(first, second);
}

#[test]
fn test_descriptions_are_present() {
    for (name, description) in list_attribute_providers() {
        assert!(!name.is_empty(), "Provider name should not be empty");
        assert!(
            !description.is_empty(),
            "Provider {name} should have a description"
        );
    }
}

#[test]
fn test_disabled_providers_are_skipped() {
    let config = AttributeProviderConfig::new().with_disabled("audit");
    let providers = all_providers(&config);

    assert!(providers.iter().all(|provider| provider.name() != "audit"));
    assert!(providers.iter().any(|provider| provider.name() == "media"));
}

#[test]
fn test_factories_build_named_providers() {
    let providers = all_providers(&AttributeProviderConfig::new());
    let built: Vec<&str> = providers.iter().map(|provider| provider.name()).collect();
    let listed = names(&list_attribute_providers());
    for name in ["columns", "dynamic_fields", "media", "audit"] {
        assert!(built.contains(&name));
        assert!(listed.contains(&name));
    }
}

#[test]
fn test_runtime_registration_is_visible() {
    ensure_shipment_provider();
    let listed = names(&list_attribute_providers());
    assert!(listed.contains(&"shipment_tracking"));
}

#[test]
fn test_duplicate_runtime_registration_rejected() {
    ensure_shipment_provider();
    match register_attribute_provider(shipment_entry()) {
        Err(Error::DuplicateProvider { name }) => assert_eq!(name, "shipment_tracking"),
        other => panic!("Expected DuplicateProvider, got {other:?}"),
    }
}

#[test]
fn test_runtime_registration_cannot_shadow_builtin() {
    let mut entry = shipment_entry();
    entry.name = "audit";
    assert!(matches!(
        register_attribute_provider(entry),
        Err(Error::DuplicateProvider { .. })
    ));
}
