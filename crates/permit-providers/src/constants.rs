//! Provider-specific constants
//!
//! Priorities fix the concatenation order of contributions. Gaps leave room
//! for providers registered elsewhere.

/// Persisted columns come first
pub const COLUMNS_PRIORITY: u16 = 10;

/// Then the nested dynamic-fields entry
pub const DYNAMIC_FIELDS_PRIORITY: u16 = 20;

/// Then attachment sub-resources (single before multiple)
pub const MEDIA_PRIORITY: u16 = 30;

/// Audit justification last
pub const AUDIT_PRIORITY: u16 = 40;
