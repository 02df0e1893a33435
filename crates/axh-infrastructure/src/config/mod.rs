//! Application configuration
//!
//! Typed sections loaded by [`ConfigLoader`] from defaults, an optional TOML
//! file and `AXH_*` environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::*;
