//! Domain layer constants
//!
//! Attribute names and suffixes that make up the shape of a whitelist.
//! Infrastructure-specific constants remain in `permit_infrastructure::constants`.

// ============================================================================
// AUDIT
// ============================================================================

/// Attribute carrying the justification for an audited change
pub const AUDIT_COMMENT_ATTRIBUTE: &str = "audit_comment";

// ============================================================================
// DYNAMIC FIELDS
// ============================================================================

/// Key of the nested entry holding configured (non-static) field names
pub const DYNAMIC_FIELDS_ATTRIBUTES_KEY: &str = "dynamic_fields_attributes";

// ============================================================================
// MEDIA
// ============================================================================

/// Suffix for single-cardinality attachment keys (`<name>_attachment_attributes`)
pub const SINGLE_ATTACHMENT_SUFFIX: &str = "_attachment_attributes";

/// Suffix for multiple-cardinality attachment keys (`<name>_attachments_attributes`)
pub const MULTIPLE_ATTACHMENTS_SUFFIX: &str = "_attachments_attributes";

/// Attributes accepted for every attachment sub-resource, in order
pub const MEDIA_PERMITTED_ATTRIBUTES: [&str; 4] = ["file", "source", "id", "name"];
