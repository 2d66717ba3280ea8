//! Configuration
//!
//! TOML file plus `PERMIT_*` environment overrides, layered with Figment.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{AppConfig, AttributesConfig, LoggingConfig};
