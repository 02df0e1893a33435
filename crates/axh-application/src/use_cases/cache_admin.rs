//! Cache administration
//!
//! Owner commands over the shared cache store. Unlike the fetch path these
//! report cache errors to the caller.

use crate::ports::providers::CacheProvider;
use axh_domain::Result;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone)]
pub struct CacheAdminService {
    cache: Arc<dyn CacheProvider>,
}

impl CacheAdminService {
    pub fn new(cache: Arc<dyn CacheProvider>) -> Self {
        Self { cache }
    }

    /// Number of live entries
    pub async fn size(&self) -> Result<usize> {
        self.cache.size().await
    }

    /// Keys matching a glob pattern, sorted
    pub async fn keys(&self, pattern: &str) -> Result<Vec<String>> {
        let mut keys = self.cache.keys(pattern).await?;
        keys.sort_unstable();
        Ok(keys)
    }

    /// Delete every key matching `pattern`, answering how many were removed
    pub async fn purge(&self, pattern: &str) -> Result<usize> {
        let keys = self.cache.keys(pattern).await?;
        if keys.is_empty() {
            return Ok(0);
        }
        let deleted = self.cache.delete_many(&keys).await?;
        info!(pattern, deleted, "purged cache entries");
        Ok(deleted)
    }
}
