//! Cache Provider Port
//!
//! Port for cache backend providers. Supports a remote store (Redis), an
//! in-memory store (Moka) and a null provider for running without a cache.
//!
//! Values are JSON strings; keys are colon-delimited and namespaced by
//! entity type (see [`crate::cache_keys`]).

use crate::constants::DEFAULT_CACHE_TTL_SECS;
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Cache Entry Configuration
///
/// Configures how long an entry lives. `ttl: None` stores the entry
/// without expiry; it then only disappears through an admin purge.
///
/// # Example
///
/// ```ignore
/// use axh_domain::ports::providers::cache::CacheEntryConfig;
///
/// let config = CacheEntryConfig::default().with_ttl_secs(60);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntryConfig {
    /// Time to live for the cache entry
    pub ttl: Option<Duration>,
}

impl CacheEntryConfig {
    /// Create a new cache entry config with default TTL
    pub fn new() -> Self {
        Self {
            ttl: Some(Duration::from_secs(DEFAULT_CACHE_TTL_SECS)),
        }
    }

    /// Entry that never expires
    pub fn persistent() -> Self {
        Self { ttl: None }
    }

    /// Set the TTL for the cache entry
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// Set TTL in seconds
    pub fn with_ttl_secs(mut self, secs: u64) -> Self {
        self.ttl = Some(Duration::from_secs(secs));
        self
    }
}

impl Default for CacheEntryConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache Provider Port
///
/// Defines the contract for cache backend providers. Callers on the fetch
/// path must treat an `Err` from any method exactly like a miss (reads) or
/// a skipped write (writes); only the admin surface reports cache errors.
///
/// # Example
///
/// ```ignore
/// let config = CacheEntryConfig::default().with_ttl_secs(1800);
/// cache.set_json("playerItems:abc123", &json, config).await?;
///
/// if let Some(json) = cache.get_json("playerItems:abc123").await? {
///     let items: Vec<PlayerItem> = serde_json::from_str(&json)?;
/// }
/// ```
#[async_trait]
pub trait CacheProvider: Send + Sync + std::fmt::Debug {
    /// Get a value from the cache as JSON string
    ///
    /// # Returns
    /// The cached JSON string if present, None if not found or expired
    async fn get_json(&self, key: &str) -> Result<Option<String>>;

    /// Set a value in the cache from JSON string
    async fn set_json(&self, key: &str, value: &str, config: CacheEntryConfig) -> Result<()>;

    /// Delete a value from the cache
    ///
    /// # Returns
    /// True if the key was deleted, false if it didn't exist
    async fn delete(&self, key: &str) -> Result<bool>;

    /// Delete several keys at once
    ///
    /// # Returns
    /// The number of keys that existed and were removed
    async fn delete_many(&self, keys: &[String]) -> Result<usize>;

    /// List live keys matching a glob pattern (`*`, `?`, `[...]`)
    async fn keys(&self, pattern: &str) -> Result<Vec<String>>;

    /// Check if a key exists in the cache
    async fn exists(&self, key: &str) -> Result<bool>;

    /// Get the cache size (number of entries)
    async fn size(&self) -> Result<usize>;

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;
}
