//! Redis cache provider
//!
//! Remote cache shared by every bot instance. One connection manager is
//! opened lazily on first use and kept for the life of the process; it
//! reconnects on its own after a dropped connection.
//!
//! Connection lifecycle is logged at `info`: connecting, ready, link lost
//! (the manager is reconnecting) and link restored. Command errors are not
//! logged here; they are returned and reported once by the caller.
//!
//! Keys can be namespaced: with namespace `axh` the entry `rank:abc` is
//! stored as `axh:rank:abc`. Callers always see un-prefixed keys.
//!
//! ## Example
//!
//! ```ignore
//! use axh_providers::cache::RedisCacheProvider;
//!
//! let provider = RedisCacheProvider::new("redis://localhost:6379", None)?;
//! ```

use crate::constants::{CACHE_NAMESPACE_SEPARATOR, REDIS_DEFAULT_URL, REDIS_SCAN_COUNT};
use async_trait::async_trait;
use axh_domain::error::{Error, Result};
use axh_domain::ports::providers::cache::{CacheEntryConfig, CacheProvider};
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client, RedisError, RedisResult};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::OnceCell;
use tracing::{debug, info};

fn redis_error(command: &str, e: RedisError) -> Error {
    let message = format!("Redis {command} failed: {e}");
    Error::infrastructure_with_source(message, e)
}

/// Errors after which the connection manager re-dials the server
fn is_link_error(e: &RedisError) -> bool {
    e.is_io_error() || e.is_connection_dropped() || e.is_connection_refusal() || e.is_timeout()
}

/// Transition of the server link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LinkEvent {
    Lost,
    Restored,
}

/// Link health as observed by the commands that use it
///
/// Only transitions are reported, so a burst of failing commands during an
/// outage yields a single `Lost` and the first success after it a single
/// `Restored`.
#[derive(Debug, Default)]
struct LinkState {
    lost: AtomicBool,
}

impl LinkState {
    fn record_failure(&self, link_error: bool) -> Option<LinkEvent> {
        if !link_error {
            return None;
        }
        (!self.lost.swap(true, Ordering::AcqRel)).then_some(LinkEvent::Lost)
    }

    fn record_success(&self) -> Option<LinkEvent> {
        self.lost
            .swap(false, Ordering::AcqRel)
            .then_some(LinkEvent::Restored)
    }
}

/// Connection string without credentials, for logs
fn redact(connection_string: &str) -> String {
    match connection_string.split_once("://") {
        Some((scheme, rest)) => {
            let host = rest.rsplit_once('@').map_or(rest, |(_, host)| host);
            format!("{scheme}://{host}")
        }
        None => connection_string.to_string(),
    }
}

/// Redis cache provider
#[derive(Clone)]
pub struct RedisCacheProvider {
    client: Client,
    server: String,
    connection: Arc<OnceCell<ConnectionManager>>,
    namespace: Option<String>,
    link: Arc<LinkState>,
}

impl RedisCacheProvider {
    /// Create a provider for `connection_string`
    ///
    /// No connection is opened until the first command.
    pub fn new(connection_string: &str, namespace: Option<String>) -> Result<Self> {
        let client = Client::open(connection_string)
            .map_err(|e| Error::infrastructure_with_source("Failed to create Redis client", e))?;

        Ok(Self {
            client,
            server: redact(connection_string),
            connection: Arc::new(OnceCell::new()),
            namespace: namespace.filter(|ns| !ns.is_empty()),
            link: Arc::new(LinkState::default()),
        })
    }

    /// Process-lifetime connection, opened on first use
    async fn connection(&self) -> Result<ConnectionManager> {
        let manager = self
            .connection
            .get_or_try_init(|| async {
                info!(server = %self.server, "connecting to redis");
                let result = ConnectionManager::new(self.client.clone()).await;
                let manager = self.observe("CONNECT", result)?;
                info!(server = %self.server, "redis connection ready");
                Ok::<_, Error>(manager)
            })
            .await?;
        Ok(manager.clone())
    }

    /// Track link health from a command result and convert its error
    fn observe<T>(&self, command: &str, result: RedisResult<T>) -> Result<T> {
        match result {
            Ok(value) => {
                if self.link.record_success() == Some(LinkEvent::Restored) {
                    info!(server = %self.server, "reconnected to redis");
                }
                Ok(value)
            }
            Err(e) => {
                if self.link.record_failure(is_link_error(&e)) == Some(LinkEvent::Lost) {
                    info!(server = %self.server, error = %e, "redis connection lost, reconnecting");
                }
                Err(redis_error(command, e))
            }
        }
    }

    fn namespaced(&self, key: &str) -> String {
        match &self.namespace {
            Some(ns) => format!("{ns}{CACHE_NAMESPACE_SEPARATOR}{key}"),
            None => key.to_string(),
        }
    }

    fn strip_namespace(&self, key: String) -> String {
        match &self.namespace {
            Some(ns) => key
                .strip_prefix(ns.as_str())
                .and_then(|rest| rest.strip_prefix(CACHE_NAMESPACE_SEPARATOR))
                .map_or(key.clone(), str::to_string),
            None => key,
        }
    }

    /// Key namespace, if any
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Server address without credentials
    pub fn server_address(&self) -> &str {
        &self.server
    }
}

#[async_trait]
impl CacheProvider for RedisCacheProvider {
    async fn get_json(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.connection().await?;

        let result = conn.get(self.namespaced(key)).await;
        self.observe("GET", result)
    }

    async fn set_json(&self, key: &str, value: &str, config: CacheEntryConfig) -> Result<()> {
        let mut conn = self.connection().await?;
        let key = self.namespaced(key);

        let result: RedisResult<()> = match config.ttl {
            Some(ttl) => {
                let millis = u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX).max(1);
                conn.pset_ex(&key, value, millis).await
            }
            None => conn.set(&key, value).await,
        };

        self.observe("SET", result)
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        let mut conn = self.connection().await?;

        let result: RedisResult<usize> = conn.del(self.namespaced(key)).await;
        Ok(self.observe("DEL", result)? > 0)
    }

    async fn delete_many(&self, keys: &[String]) -> Result<usize> {
        if keys.is_empty() {
            return Ok(0);
        }
        let mut conn = self.connection().await?;
        let keys: Vec<String> = keys.iter().map(|key| self.namespaced(key)).collect();

        let result = conn.del(keys).await;
        self.observe("DEL", result)
    }

    async fn keys(&self, pattern: &str) -> Result<Vec<String>> {
        let mut conn = self.connection().await?;
        let pattern = self.namespaced(pattern);
        let mut cursor: u64 = 0;
        let mut keys = Vec::new();

        loop {
            let result = redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg(&pattern)
                .arg("COUNT")
                .arg(REDIS_SCAN_COUNT)
                .query_async(&mut conn)
                .await;
            let (next, batch): (u64, Vec<String>) = self.observe("SCAN", result)?;
            keys.extend(batch.into_iter().map(|key| self.strip_namespace(key)));
            if next == 0 {
                break;
            }
            cursor = next;
        }

        keys.sort_unstable();
        keys.dedup();
        debug!(pattern = %pattern, matched = keys.len(), "scanned redis keys");
        Ok(keys)
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        let mut conn = self.connection().await?;

        let result = conn.exists(self.namespaced(key)).await;
        self.observe("EXISTS", result)
    }

    async fn size(&self) -> Result<usize> {
        if self.namespace.is_some() {
            return Ok(self.keys("*").await?.len());
        }

        let mut conn = self.connection().await?;
        let result = redis::cmd("DBSIZE").query_async(&mut conn).await;
        self.observe("DBSIZE", result)
    }

    fn provider_name(&self) -> &str {
        "redis"
    }
}

impl std::fmt::Debug for RedisCacheProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCacheProvider")
            .field("server", &self.server)
            .field("namespace", &self.namespace)
            .field("connected", &self.connection.initialized())
            .field("link_lost", &self.link.lost.load(Ordering::Relaxed))
            .finish()
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use axh_application::ports::registry::{CACHE_PROVIDERS, CacheProviderConfig, CacheProviderEntry};

/// Factory function for creating Redis cache provider instances.
fn redis_cache_factory(
    config: &CacheProviderConfig,
) -> std::result::Result<Arc<dyn CacheProvider>, String> {
    let uri = config.uri.as_deref().unwrap_or(REDIS_DEFAULT_URL);

    let provider = RedisCacheProvider::new(uri, config.namespace.clone())
        .map_err(|e| format!("Failed to create Redis provider: {e}"))?;

    Ok(Arc::new(provider))
}

#[linkme::distributed_slice(CACHE_PROVIDERS)]
static REDIS_PROVIDER: CacheProviderEntry = CacheProviderEntry {
    name: "redis",
    description: "Redis cache shared across instances",
    factory: redis_cache_factory,
};
