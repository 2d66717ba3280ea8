//! Tests for the in-memory model adapter

use permit_domain::{FieldDefinition, ModelConfiguration};
use permit_providers::{InMemoryModel, ModelType};

#[test]
fn test_defaults() {
    let model = InMemoryModel::new("Note");
    assert_eq!(model.model_name(), "Note");
    assert!(model.table_exists().unwrap());
    assert!(model.configuration().unwrap().is_none());
    assert!(model.column_names().unwrap().is_empty());
    assert!(!model.requires_audit_justification());
}

#[test]
fn test_with_field_creates_configuration() {
    let model = InMemoryModel::new("Note")
        .with_field(FieldDefinition::dynamic("mood"))
        .with_field(FieldDefinition::dynamic("weather"));
    let configuration = model.configuration().unwrap().unwrap();
    assert_eq!(configuration.fields.len(), 2);
}

#[test]
fn test_with_configuration_replaces() {
    let model = InMemoryModel::new("Note")
        .with_field(FieldDefinition::dynamic("mood"))
        .with_configuration(ModelConfiguration::default());
    assert!(model.configuration().unwrap().unwrap().is_empty());
}

#[test]
fn test_without_table_hides_columns() {
    let model = InMemoryModel::new("Note")
        .with_columns(["body"])
        .without_table();
    assert!(!model.table_exists().unwrap());
    assert!(model.column_names().unwrap().is_empty());
}

#[test]
fn test_persistence_unavailable_fails_every_query() {
    let model = InMemoryModel::new("Note").with_persistence_unavailable();
    assert!(model.table_exists().unwrap_err().is_persistence_unavailable());
    assert!(model.configuration().unwrap_err().is_persistence_unavailable());
    assert!(model.column_names().unwrap_err().is_persistence_unavailable());
}
