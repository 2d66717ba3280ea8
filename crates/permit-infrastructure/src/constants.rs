//! Infrastructure layer constants
//!
//! Domain-specific constants are defined in `permit_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "permit.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "permit";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "PERMIT";

/// Separator between nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "PERMIT_LOG";

/// File stem used when the log path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "permit";

// ============================================================================
// ATTRIBUTE CONSTANTS
// ============================================================================

/// Columns never accepted from untrusted input unless configured otherwise
pub const DEFAULT_CRUD_BLOCKLIST: [&str; 3] = ["id", "created_at", "updated_at"];
