//! # Permit
//!
//! Mass-assignment protection for CRUD endpoints: each model type gets a
//! whitelist of attributes it accepts from untrusted input, aggregated from
//! independent attribute providers.
//!
//! This crate provides the main public API. It re-exports the domain types,
//! the aggregation service and the bootstrap entry point.
//!
//! ## Features
//!
//! - **Pluggable Providers**: Any crate linked into the binary can contribute attributes
//! - **Built-in Providers**: Columns, dynamic fields, media attachments and audit comments
//! - **Graceful Degradation**: Unprovisioned or unreachable models are skipped, never failed
//!
//! ## Example
//!
//! ```ignore
//! use permit::{ConfigLoader, FieldDefinition, InMemoryModel, init_app};
//!
//! let context = init_app(ConfigLoader::new().load()?)?;
//! let ticket = InMemoryModel::new("Ticket")
//!     .with_columns(["id", "subject"])
//!     .with_field(FieldDefinition::dynamic("severity"));
//!
//! context.prepare_models(&[&ticket])?;
//! let whitelist = context.crud_attributes().crud_attributes("Ticket");
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Entries, model configuration, provider and model ports, errors
//! - `application` - Provider registry and the aggregation service
//! - `providers` - Built-in attribute providers and an in-memory model
//! - `infrastructure` - Configuration, logging and bootstrap

/// Domain layer - core types and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use permit_domain::*;
}

/// Application layer - registry and aggregation
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use permit_application::*;
}

/// Built-in attribute providers
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use permit_providers::*;
}

/// Infrastructure layer - config, logging and bootstrap
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use permit_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export the aggregation service at the crate root
pub use application::{
    CrudAttributesService, CrudAttributesServiceInterface, RedefinitionPolicy, WhitelistState,
};

// Re-export main entry points at the crate root
pub use infrastructure::{AppConfig, AppContext, ConfigLoader, init_app};

pub use providers::InMemoryModel;
