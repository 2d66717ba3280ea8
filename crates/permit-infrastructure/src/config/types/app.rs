//! Main application configuration

use serde::{Deserialize, Serialize};

pub use super::attributes::AttributesConfig;
pub use super::logging::LoggingConfig;

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Whitelist aggregation configuration
    pub attributes: AttributesConfig,
}
