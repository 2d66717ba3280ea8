//! Domain Value Objects
//!
//! Immutable values that make up a whitelist and the configuration it is
//! derived from.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`AttributeEntry`] | Bare attribute name or nested sub-resource whitelist |
//! | [`FieldDefinition`] | One configured field (static, dynamic, attachment) |
//! | [`ModelConfiguration`] | The fields configured for a model type |
//! | [`CrudAttributes`] | The published whitelist of a model type |

/// Whitelist entries
pub mod attribute;
/// Field configuration
pub mod field;
/// Published whitelist
pub mod whitelist;

pub use attribute::{AttributeEntry, NestedAttributes};
pub use field::{AttachmentCardinality, FieldDefinition, ModelConfiguration};
pub use whitelist::CrudAttributes;
