//! Provider ports

/// Attribute provider contract
pub mod attribute;

pub use attribute::AttributeProvider;
