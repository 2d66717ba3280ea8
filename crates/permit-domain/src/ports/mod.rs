//! Domain Port Interfaces
//!
//! Boundary contracts between the domain and the outer layers.
//!
//! ## Organization
//!
//! - **model** - The model type whose whitelist is derived (implemented by persistence adapters)
//! - **providers/** - Attribute providers contributing whitelist fragments

/// Model type port
pub mod model;
/// Provider ports
pub mod providers;

pub use model::ModelType;
pub use providers::AttributeProvider;
