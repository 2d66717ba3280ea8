//! Application Port Interfaces
//!
//! ## Organization
//!
//! - **registry/** - Auto-registration system for attribute providers
//! - **services.rs** - Application service interfaces (aggregation, publication)

/// Provider registry for dynamic provider discovery
pub mod registry;
/// Application service interfaces
pub mod services;

pub use permit_domain::ports::{AttributeProvider, ModelType};
pub use registry::{
    ATTRIBUTE_PROVIDERS, AttributeProviderConfig, AttributeProviderEntry, all_providers,
    list_attribute_providers, register_attribute_provider,
};
pub use services::{CrudAttributesServiceInterface, RedefinitionPolicy, WhitelistState};
