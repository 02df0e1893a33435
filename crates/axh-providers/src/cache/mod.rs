//! Cache Provider Implementations
//!
//! Cache stores behind the cache-aside orchestrator.
//!
//! ## Available Providers
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | [`NullCacheProvider`] | Disabled | Stores nothing, every read misses |
//! | [`MokaCacheProvider`] | Local | In-memory cache with per-entry TTL |
//! | [`RedisCacheProvider`] | Remote | Redis shared across bot instances |
//!
//! ## Provider Selection Guide
//!
//! - **Tests / no cache**: `NullCacheProvider`
//! - **Single instance**: `MokaCacheProvider`
//! - **Shared or persistent cache**: `RedisCacheProvider`

#[cfg(feature = "cache-moka")]
pub mod moka;
pub mod null;
#[cfg(feature = "cache-redis")]
pub mod redis;

// Re-export for convenience
#[cfg(feature = "cache-moka")]
pub use moka::MokaCacheProvider;
pub use null::NullCacheProvider;
#[cfg(feature = "cache-redis")]
pub use redis::RedisCacheProvider;

// Re-export domain types used by cache providers
pub use axh_application::ports::providers::cache::CacheEntryConfig;
