//! Provider Registry System
//!
//! Auto-registration infrastructure for pluggable providers. Uses the
//! `linkme` crate for compile-time registration of providers that are
//! discovered and instantiated at runtime.
//!
//! ## Usage
//!
//! ### Registering a Provider (in axh-providers)
//!
//! ```ignore
//! use axh_application::ports::registry::{CacheProviderEntry, CACHE_PROVIDERS};
//!
//! #[linkme::distributed_slice(CACHE_PROVIDERS)]
//! static MOKA_PROVIDER: CacheProviderEntry = CacheProviderEntry {
//!     name: "moka",
//!     description: "Moka in-memory cache",
//!     factory: |config| Ok(Arc::new(MokaCacheProvider::from_config(config))),
//! };
//! ```
//!
//! ### Resolving a Provider (in axh-infrastructure)
//!
//! ```ignore
//! let config = CacheProviderConfig::new("redis").with_uri("redis://localhost:6379");
//! let cache = resolve_cache_provider(&config)?;
//! ```

pub mod cache;

pub use cache::{
    CACHE_PROVIDERS, CacheProviderConfig, CacheProviderEntry, list_cache_providers,
    resolve_cache_provider,
};
