//! Bootstrap Tests

use permit_application::ports::services::{RedefinitionPolicy, WhitelistState};
use permit_domain::{AttachmentCardinality, AttributeEntry, FieldDefinition, ModelType};
use permit_infrastructure::config::{AttributesConfig, ConfigBuilder};
use permit_infrastructure::init_app;
use permit_providers::InMemoryModel;

#[test]
fn test_builtin_providers_available() {
    let context = init_app(ConfigBuilder::new().build()).unwrap();
    let names: Vec<&str> = context
        .available_providers()
        .into_iter()
        .map(|(name, _)| name)
        .collect();

    assert_eq!(names, vec!["columns", "dynamic_fields", "media", "audit"]);
}

#[test]
fn test_prepare_models_publishes_configured_models() {
    let context = init_app(ConfigBuilder::new().build()).unwrap();

    let article = InMemoryModel::new("Article")
        .with_columns(["id", "title", "created_at", "updated_at"])
        .with_field(FieldDefinition::dynamic("priority"))
        .with_field(FieldDefinition::attachment("cover", AttachmentCardinality::Single))
        .with_audit_justification(true);
    let unconfigured = InMemoryModel::new("Draft").with_columns(["title"]);
    let unprovisioned = InMemoryModel::new("Archive")
        .with_field(FieldDefinition::dynamic("reason"))
        .without_table();
    let models: [&dyn ModelType; 3] = [&article, &unconfigured, &unprovisioned];

    let published = context.prepare_models(&models).unwrap();

    assert_eq!(published, 1);
    assert_eq!(context.published_models(), vec!["Article"]);

    let service = context.crud_attributes();
    assert_eq!(service.state("Draft"), WhitelistState::Undefined);
    let whitelist = service.crud_attributes("Article").unwrap();
    assert_eq!(
        whitelist.entries(),
        [
            AttributeEntry::name("title"),
            AttributeEntry::nested("dynamic_fields_attributes", ["priority", "cover"]),
            AttributeEntry::nested(
                "cover_attachment_attributes",
                ["file", "source", "id", "name"]
            ),
            AttributeEntry::name("audit_comment"),
        ]
    );
}

#[test]
fn test_configured_blocklist_and_disabled_providers_apply() {
    let attributes = AttributesConfig {
        blocklist: vec!["id".to_string(), "secret".to_string()],
        disabled_providers: vec!["audit".to_string()],
        redefinition: RedefinitionPolicy::Keep,
    };
    let context = init_app(ConfigBuilder::new().with_attributes(attributes).build()).unwrap();
    let model = InMemoryModel::new("Account")
        .with_columns(["id", "email", "secret"])
        .with_field(FieldDefinition::fixed("email"))
        .with_audit_justification(true);

    context.prepare_models(&[&model]).unwrap();

    let whitelist = context.crud_attributes().crud_attributes("Account").unwrap();
    assert_eq!(whitelist.entries(), [AttributeEntry::name("email")]);
}

#[test]
fn test_reject_policy_from_config_stops_preparation() {
    let attributes = AttributesConfig {
        redefinition: RedefinitionPolicy::Reject,
        ..AttributesConfig::default()
    };
    let context = init_app(ConfigBuilder::new().with_attributes(attributes).build()).unwrap();
    let model = InMemoryModel::new("Account").with_field(FieldDefinition::dynamic("plan"));

    assert_eq!(context.prepare_models(&[&model]).unwrap(), 1);
    assert!(context.prepare_models(&[&model]).is_err());
}

#[test]
fn test_unreachable_database_prepares_nothing() {
    let context = init_app(ConfigBuilder::new().build()).unwrap();
    let model = InMemoryModel::new("Account")
        .with_field(FieldDefinition::dynamic("plan"))
        .with_persistence_unavailable();

    assert_eq!(context.prepare_models(&[&model]).unwrap(), 0);
    assert!(context.published_models().is_empty());
}
