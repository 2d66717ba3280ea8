//! # Permit Domain
//!
//! Core types for computing mass-assignment whitelists of models whose
//! schema is partly defined by stored field configuration.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`value_objects`] | Attribute entries, field definitions, published whitelists |
//! | [`ports`] | `ModelType` and `AttributeProvider` contracts |
//! | [`error`] | Domain error type and `Result` alias |
//! | [`constants`] | Well-known attribute names |
//!
//! The domain crate has no knowledge of how providers are discovered or
//! how whitelists are published; that lives in `permit-application`.

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{AttributeProvider, ModelType};
pub use value_objects::{
    AttachmentCardinality, AttributeEntry, CrudAttributes, FieldDefinition, ModelConfiguration,
    NestedAttributes,
};
