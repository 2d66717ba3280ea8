//! Configuration types module

pub mod app;
pub mod attributes;
pub mod logging;

// Re-export main types
pub use app::*;
