//! Cache configuration types

use crate::constants::{DEFAULT_CACHE_MAX_CAPACITY, DEFAULT_CACHE_PROVIDER};
use axh_application::ports::registry::CacheProviderConfig;
use axh_domain::constants::{DEFAULT_CACHE_TTL_SECS, PROFILE_TTL_SECS};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Cache store selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Registered provider name (`moka`, `redis` or `null`)
    pub provider: String,

    /// Redis connection string, required by the `redis` provider
    pub redis_url: Option<String>,

    /// Maximum entries held by the in-memory provider
    pub max_capacity: u64,

    /// Prefix prepended to every Redis key
    pub namespace: Option<String>,

    /// Lifetime of player entries other than profiles (seconds)
    pub player_ttl_secs: u64,

    /// Lifetime of player profiles (seconds)
    pub profile_ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_CACHE_PROVIDER.to_string(),
            redis_url: None,
            max_capacity: DEFAULT_CACHE_MAX_CAPACITY,
            namespace: None,
            player_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            profile_ttl_secs: PROFILE_TTL_SECS,
        }
    }
}

impl CacheConfig {
    pub fn player_ttl(&self) -> Duration {
        Duration::from_secs(self.player_ttl_secs)
    }

    pub fn profile_ttl(&self) -> Duration {
        Duration::from_secs(self.profile_ttl_secs)
    }

    /// Registry lookup for the configured provider
    pub fn provider_config(&self) -> CacheProviderConfig {
        let mut config = CacheProviderConfig::new(&self.provider)
            .with_max_size(usize::try_from(self.max_capacity).unwrap_or(usize::MAX));
        if let Some(url) = &self.redis_url {
            config = config.with_uri(url);
        }
        if let Some(namespace) = &self.namespace {
            config = config.with_namespace(namespace);
        }
        config
    }
}
