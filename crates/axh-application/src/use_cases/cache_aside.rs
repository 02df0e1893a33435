//! Fetch-or-Cache Orchestrator
//!
//! The policy every upstream call goes through:
//!
//! 1. read the key; a hit returns without touching the upstream
//! 2. on a miss run the fetch (which may paginate and throttle)
//! 3. normalize fresh data and write it back with its TTL
//! 4. report upstream failures as [`FetchOutcome::Failed`]
//! 5. report successful-but-empty responses as [`FetchOutcome::Empty`],
//!    without caching them
//!
//! Cache errors never reach the caller: a failed read is a miss and a failed
//! write only costs the next call a round trip.

use crate::ports::providers::cache::{CacheEntryConfig, CacheProvider};
use axh_domain::{ApiResult, CachedPayload, FetchOutcome};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};

/// Per-call caching policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachePolicy {
    /// Lifetime of the written entry, `None` for no expiry
    pub ttl: Option<Duration>,
    /// Skip the initial cache read and always ask the upstream
    pub bypass_read: bool,
    /// Serve the cached entry when the upstream fails
    pub stale_on_error: bool,
}

impl CachePolicy {
    pub fn ttl(ttl: Duration) -> Self {
        Self {
            ttl: Some(ttl),
            bypass_read: false,
            stale_on_error: false,
        }
    }

    pub fn ttl_secs(secs: u64) -> Self {
        Self::ttl(Duration::from_secs(secs))
    }

    /// Entry kept until purged
    pub fn persistent() -> Self {
        Self {
            ttl: None,
            bypass_read: false,
            stale_on_error: false,
        }
    }

    pub fn with_bypass_read(mut self, bypass: bool) -> Self {
        self.bypass_read = bypass;
        self
    }

    pub fn with_stale_on_error(mut self) -> Self {
        self.stale_on_error = true;
        self
    }

    fn entry_config(self, ttl_override: Option<Duration>) -> CacheEntryConfig {
        match ttl_override.or(self.ttl) {
            Some(ttl) => CacheEntryConfig::new().with_ttl(ttl),
            None => CacheEntryConfig::persistent(),
        }
    }
}

/// Cache-aside orchestrator over an injected cache store
#[derive(Debug, Clone)]
pub struct CacheAside {
    cache: Arc<dyn CacheProvider>,
}

impl CacheAside {
    pub fn new(cache: Arc<dyn CacheProvider>) -> Self {
        Self { cache }
    }

    pub fn cache(&self) -> &Arc<dyn CacheProvider> {
        &self.cache
    }

    /// Serve `key` from the cache, else from `fetch`
    ///
    /// `fetch` answers `Ok(None)` when the upstream has no data. A value
    /// whose [`CachedPayload::is_empty`] holds after normalization is
    /// treated the same way.
    pub async fn fetch_with_cache<T, F, Fut>(
        &self,
        key: &str,
        policy: CachePolicy,
        fetch: F,
    ) -> FetchOutcome<T>
    where
        T: CachedPayload,
        F: FnOnce() -> Fut,
        Fut: Future<Output = ApiResult<Option<T>>>,
    {
        if !policy.bypass_read {
            if let Some(cached) = self.read::<T>(key).await {
                debug!(key, "cache hit");
                return FetchOutcome::Found(cached);
            }
        }

        match fetch().await {
            Ok(Some(mut value)) => {
                value.normalize();
                if value.is_empty() {
                    debug!(key, "upstream returned no data");
                    return FetchOutcome::Empty;
                }
                let config = policy.entry_config(value.ttl_override());
                self.write(key, &value, config).await;
                FetchOutcome::Found(value)
            }
            Ok(None) => {
                debug!(key, "upstream returned no data");
                FetchOutcome::Empty
            }
            Err(err) => {
                error!(
                    upstream = %err.upstream,
                    operation = %err.operation,
                    entity = err.entity.as_deref().unwrap_or("-"),
                    status = err.status.unwrap_or_default(),
                    key,
                    "{err}"
                );
                if policy.stale_on_error {
                    if let Some(stale) = self.read::<T>(key).await {
                        warn!(key, "serving stale cache entry after upstream failure");
                        return FetchOutcome::Found(stale);
                    }
                }
                FetchOutcome::Failed(err)
            }
        }
    }

    /// Read and decode a cached entry; any failure is a miss
    pub async fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.cache.get_json(key).await {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(value) => Some(value),
                Err(e) => {
                    warn!(key, error = %e, "discarding undecodable cache entry");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!(key, error = %e, "cache read failed, treating as miss");
                None
            }
        }
    }

    /// Encode and write an entry; failures are logged and swallowed
    pub async fn write<T: Serialize>(&self, key: &str, value: &T, config: CacheEntryConfig) {
        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(e) => {
                warn!(key, error = %e, "cache write skipped, value not serializable");
                return;
            }
        };
        if let Err(e) = self.cache.set_json(key, &json, config).await {
            warn!(key, error = %e, "cache write failed, continuing without caching");
        }
    }
}
