//! Tests for the persisted column provider

use permit_domain::AttributeEntry;
use permit_providers::{AttributeProvider, ColumnsAttributeProvider, InMemoryModel};

fn blocklist() -> Vec<String> {
    vec!["id".to_string(), "created_at".to_string(), "updated_at".to_string()]
}

#[test]
fn test_columns_minus_blocklist_in_schema_order() {
    let model = InMemoryModel::new("Article").with_columns([
        "id",
        "title",
        "body",
        "created_at",
        "updated_at",
        "published",
    ]);
    let provider = ColumnsAttributeProvider::new(blocklist());

    let entries = provider.attributes_for(&model).unwrap();

    assert_eq!(
        entries,
        vec![
            AttributeEntry::name("title"),
            AttributeEntry::name("body"),
            AttributeEntry::name("published"),
        ]
    );
}

#[test]
fn test_empty_blocklist_keeps_every_column() {
    let model = InMemoryModel::new("Article").with_columns(["id", "title"]);
    let entries = ColumnsAttributeProvider::default()
        .attributes_for(&model)
        .unwrap();
    assert_eq!(entries.len(), 2);
}

#[test]
fn test_nothing_when_table_missing() {
    let model = InMemoryModel::new("Article")
        .with_columns(["title"])
        .without_table();
    let provider = ColumnsAttributeProvider::new(blocklist());
    assert!(provider.attributes_for(&model).unwrap().is_empty());
}

#[test]
fn test_persistence_failure_propagates() {
    let model = InMemoryModel::new("Article")
        .with_columns(["title"])
        .with_persistence_unavailable();
    let provider = ColumnsAttributeProvider::new(blocklist());
    assert!(
        provider
            .attributes_for(&model)
            .unwrap_err()
            .is_persistence_unavailable()
    );
}
