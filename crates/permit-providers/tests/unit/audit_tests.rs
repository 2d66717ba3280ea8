//! Tests for the audit attribute provider

use permit_domain::AttributeEntry;
use permit_providers::{AttributeProvider, AuditAttributeProvider, InMemoryModel};

#[test]
fn test_audit_comment_when_justification_required() {
    let model = InMemoryModel::new("Invoice").with_audit_justification(true);
    let entries = AuditAttributeProvider.attributes_for(&model).unwrap();
    assert_eq!(entries, vec![AttributeEntry::name("audit_comment")]);
}

#[test]
fn test_nothing_when_justification_not_required() {
    let model = InMemoryModel::new("Invoice");
    assert!(AuditAttributeProvider.attributes_for(&model).unwrap().is_empty());
}

#[test]
fn test_nothing_when_table_missing() {
    let model = InMemoryModel::new("Invoice")
        .with_audit_justification(true)
        .without_table();
    assert!(AuditAttributeProvider.attributes_for(&model).unwrap().is_empty());
}

#[test]
fn test_persistence_failure_propagates() {
    let model = InMemoryModel::new("Invoice")
        .with_audit_justification(true)
        .with_persistence_unavailable();
    let err = AuditAttributeProvider.attributes_for(&model).unwrap_err();
    assert!(err.is_persistence_unavailable());
}
