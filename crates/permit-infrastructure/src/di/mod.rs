//! Composition root
//!
//! Wires configuration into the aggregation service. Providers are found
//! through the linkme registry; linking `permit-providers` here is what
//! makes the built-in ones visible.

pub mod bootstrap;

pub use bootstrap::*;
