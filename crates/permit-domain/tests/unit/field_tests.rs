//! Unit tests for field configuration

use permit_domain::{AttachmentCardinality, FieldDefinition, ModelConfiguration};
use serde_json::json;

fn sample_configuration() -> ModelConfiguration {
    ModelConfiguration::default()
        .with_field(FieldDefinition::fixed("title"))
        .with_field(FieldDefinition::dynamic("priority"))
        .with_field(FieldDefinition::attachment("avatar", AttachmentCardinality::Single))
        .with_field(FieldDefinition::dynamic("status"))
        .with_field(FieldDefinition::attachment("gallery", AttachmentCardinality::Multiple))
}

#[test]
fn test_not_static_keeps_configuration_order() {
    let config = sample_configuration();
    let names: Vec<&str> = config.not_static().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["priority", "avatar", "status", "gallery"]);
}

#[test]
fn test_attachments_by_cardinality() {
    let config = sample_configuration();

    let single: Vec<&str> = config
        .attachments_of(AttachmentCardinality::Single)
        .map(|f| f.name.as_str())
        .collect();
    let multiple: Vec<&str> = config
        .attachments_of(AttachmentCardinality::Multiple)
        .map(|f| f.name.as_str())
        .collect();

    assert_eq!(single, vec!["avatar"]);
    assert_eq!(multiple, vec!["gallery"]);
    assert_eq!(config.attachments().count(), 2);
}

#[test]
fn test_empty_configuration() {
    let config = ModelConfiguration::default();
    assert!(config.is_empty());
    assert_eq!(config.not_static().count(), 0);
    assert_eq!(config.attachments().count(), 0);
}

#[test]
fn test_field_deserializes_stored_field_type() {
    let config: ModelConfiguration = serde_json::from_value(json!({
        "fields": [
            {"name": "title", "is_static": true},
            {"name": "avatar", "attachment": "single_media"},
            {"name": "gallery", "attachment": "multiple_media"}
        ]
    }))
    .unwrap();

    assert!(config.fields[0].is_static);
    assert_eq!(config.fields[1].attachment, Some(AttachmentCardinality::Single));
    assert!(!config.fields[1].is_static);
    assert_eq!(config.fields[2].attachment, Some(AttachmentCardinality::Multiple));
}

#[test]
fn test_cardinality_names() {
    assert_eq!(AttachmentCardinality::Single.as_str(), "single_media");
    assert_eq!(AttachmentCardinality::Multiple.as_str(), "multiple_media");
}
