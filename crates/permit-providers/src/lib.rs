//! # Permit - Provider Implementations
//!
//! Concrete attribute providers and model adapters. Each provider
//! implements the `AttributeProvider` port defined in `permit-domain` and
//! registers itself in the linkme registry of `permit-application`.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Attributes | `AttributeProvider` | Columns, DynamicFields, Media, Audit |
//! | Models | `ModelType` | InMemory |
//!
//! ## Usage
//!
//! ```ignore
//! // Force linkme registration when nothing else references this crate
//! extern crate permit_providers;
//!
//! use permit_providers::model::InMemoryModel;
//! ```

// Re-export permit-domain types commonly used with providers
pub use permit_domain::error::{Error, Result};
pub use permit_domain::ports::{AttributeProvider, ModelType};

/// Provider-specific constants
pub mod constants;

/// Attribute provider implementations
///
/// Implements `AttributeProvider` for each whitelist policy concern.
pub mod attributes;

/// Model type adapters
///
/// Implements `ModelType` for in-memory schemas.
pub mod model;

pub use attributes::{
    AuditAttributeProvider, ColumnsAttributeProvider, DynamicFieldsAttributeProvider,
    MediaAttributeProvider,
};
pub use model::InMemoryModel;
