//! Domain services shared by providers and the aggregator

/// Null-safe model lookups
pub mod model_lookup;

pub use model_lookup::{is_provisioned, provisioned_configuration};
