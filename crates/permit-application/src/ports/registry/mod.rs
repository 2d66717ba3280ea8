//! Provider Registry System
//!
//! Defines the auto-registration infrastructure for attribute providers.
//! Uses the `linkme` crate for compile-time registration of providers
//! that are discovered and instantiated at aggregation time.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Provider Registration Flow                    │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Provider defines:  #[linkme::distributed_slice(             │
//! │                            ATTRIBUTE_PROVIDERS)]                │
//! │                        static ENTRY: AttributeProviderEntry     │
//! │                              ↓                                  │
//! │  2. Registry declares: #[linkme::distributed_slice]             │
//! │                        pub static ATTRIBUTE_PROVIDERS: [..]     │
//! │                              ↓                                  │
//! │  3. Aggregator calls:  all_providers(&config)                   │
//! │                              ↓                                  │
//! │  4. Order:             (priority, name), disabled skipped       │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ### Registering a Provider (in permit-providers)
//!
//! ```ignore
//! use permit_application::ports::registry::{AttributeProviderEntry, ATTRIBUTE_PROVIDERS};
//!
//! #[linkme::distributed_slice(ATTRIBUTE_PROVIDERS)]
//! static AUDIT_PROVIDER: AttributeProviderEntry = AttributeProviderEntry {
//!     name: "audit",
//!     description: "Audit justification comment",
//!     priority: 40,
//!     factory: |_config| Arc::new(AuditAttributeProvider),
//! };
//! ```
//!
//! ### Providers loaded later
//!
//! ```ignore
//! register_attribute_provider(AttributeProviderEntry { .. })?;
//! ```

pub mod attribute;

// Re-export all registry types and functions
pub use attribute::{
    ATTRIBUTE_PROVIDERS, AttributeProviderConfig, AttributeProviderEntry, all_providers,
    list_attribute_providers, register_attribute_provider, registered_entries,
};
