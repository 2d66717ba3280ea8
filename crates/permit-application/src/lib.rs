//! Application Layer - Permit
//!
//! Discovers attribute providers and aggregates their contributions into
//! the published CRUD attribute whitelist of each model type.
//!
//! ## Architecture
//!
//! ```text
//! CrudAttributesService → registry::all_providers → AttributeProvider::attributes_for
//!                                                              ↓
//!                                                  ModelType (configuration)
//! ```
//!
//! ## Modules
//!
//! - `ports::registry`: linkme-based provider registry
//! - `ports::services`: service interfaces and publication types
//! - `domain_services`: null-safe model lookups shared by providers
//! - `use_cases`: the aggregator
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `permit-domain`: entries, configuration and ports
//! - Pure Rust libraries for registration, logging and concurrency

pub mod domain_services;
pub mod ports;
pub mod use_cases;

pub use domain_services::*;
pub use ports::*;
pub use use_cases::*;
