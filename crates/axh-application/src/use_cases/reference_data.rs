//! Reference data: seasons, item catalogs and identity resolution

use super::cache_aside::{CacheAside, CachePolicy};
use crate::ports::providers::{GameApi, GatewayApi, ProfileResolver};
use axh_domain::cache_keys;
use axh_domain::constants::{DEFAULT_CACHE_TTL_SECS, RESOLVED_PROFILE_TTL_SECS};
use axh_domain::value_objects::{ItemCatalogKind, ResolvedProfile, Seasons};
use axh_domain::{ApiError, FetchOutcome};
use std::sync::Arc;

/// Seasons requested from the game API in one call
const SEASON_PAGE_LIMIT: u32 = 100;

#[derive(Debug, Clone)]
pub struct ReferenceDataService {
    cache: CacheAside,
    game: Arc<dyn GameApi>,
    gateway: Arc<dyn GatewayApi>,
    resolver: Arc<dyn ProfileResolver>,
}

impl ReferenceDataService {
    pub fn new(
        cache: CacheAside,
        game: Arc<dyn GameApi>,
        gateway: Arc<dyn GatewayApi>,
        resolver: Arc<dyn ProfileResolver>,
    ) -> Self {
        Self {
            cache,
            game,
            gateway,
            resolver,
        }
    }

    /// Season list
    ///
    /// `force` skips the cache read. The entry lives until the latest
    /// season ends, and is served stale if the upstream is down.
    pub async fn seasons(&self, force: bool) -> FetchOutcome<Seasons> {
        let policy = CachePolicy::ttl_secs(DEFAULT_CACHE_TTL_SECS)
            .with_bypass_read(force)
            .with_stale_on_error();
        self.cache
            .fetch_with_cache(&cache_keys::seasons(), policy, || async {
                let seasons = self.game.fetch_seasons(SEASON_PAGE_LIMIT, 0).await?;
                Ok::<_, ApiError>(Some(Seasons(seasons)))
            })
            .await
    }

    /// Community catalog of one item kind
    ///
    /// Always asks the upstream first; the persistent cache entry is only a
    /// fallback for when the upstream fails.
    pub async fn item_catalog(&self, kind: ItemCatalogKind) -> FetchOutcome<Vec<serde_json::Value>> {
        let policy = CachePolicy::persistent()
            .with_bypass_read(true)
            .with_stale_on_error();
        self.cache
            .fetch_with_cache(&cache_keys::item_catalog(kind), policy, || async {
                let items = self.gateway.fetch_item_catalog(kind).await?;
                Ok::<_, ApiError>(Some(items))
            })
            .await
    }

    /// Identity behind a user id or an address
    pub async fn resolve_profile(&self, id_or_address: &str) -> FetchOutcome<ResolvedProfile> {
        let key = cache_keys::resolved_profile(id_or_address);
        self.cache
            .fetch_with_cache(
                &key,
                CachePolicy::ttl_secs(RESOLVED_PROFILE_TTL_SECS),
                || self.resolver.resolve_profile(id_or_address),
            )
            .await
    }
}
