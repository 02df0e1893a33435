//! Application ports
//!
//! Re-exports the domain provider ports and declares the provider
//! registries that adapters register into.

/// Provider ports (re-exported from the domain)
pub mod providers {
    pub use axh_domain::ports::providers::*;
}

/// Provider auto-registration
pub mod registry;
