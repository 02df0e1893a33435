//! Player data service
//!
//! Cached access to everything the bot shows about one player. Each method
//! is one cache-aside call with its own key and lifetime.

use super::cache_aside::{CacheAside, CachePolicy};
use super::pagination::{DedupStrategy, PageMerger};
use crate::ports::providers::{GameApi, GatewayApi};
use axh_domain::cache_keys;
use axh_domain::constants::{
    DEFAULT_BATTLE_LIMIT, DEFAULT_CACHE_TTL_SECS, DEFAULT_PAGE_LIMIT, PROFILE_TTL_SECS,
};
use axh_domain::value_objects::{
    BattleFeed, LeaderboardEntry, PlayerBattles, PlayerInventory, PlayerItem, PlayerProfile,
};
use axh_domain::{ApiError, FetchOutcome};
use std::sync::Arc;
use std::time::Duration;

/// Tunables of the player data service
#[derive(Debug, Clone, Copy)]
pub struct PlayerDataSettings {
    /// Lifetime of rank, leaderboard, battle and item entries
    pub ttl: Duration,
    /// Lifetime of profile entries
    pub profile_ttl: Duration,
    /// Page size for item listings
    pub page_limit: u32,
    /// Battles requested per history
    pub battle_limit: u32,
    /// De-duplication of merged item pages
    pub item_dedup: DedupStrategy<PlayerItem>,
}

impl Default for PlayerDataSettings {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
            profile_ttl: Duration::from_secs(PROFILE_TTL_SECS),
            page_limit: DEFAULT_PAGE_LIMIT,
            battle_limit: DEFAULT_BATTLE_LIMIT,
            item_dedup: DedupStrategy::ByKey(|item: &PlayerItem| item.item_id.clone()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlayerDataService {
    cache: CacheAside,
    game: Arc<dyn GameApi>,
    gateway: Arc<dyn GatewayApi>,
    items_merger: PageMerger,
    settings: PlayerDataSettings,
}

impl PlayerDataService {
    /// `items_merger` carries the throttle gate of the gateway upstream
    pub fn new(
        cache: CacheAside,
        game: Arc<dyn GameApi>,
        gateway: Arc<dyn GatewayApi>,
        items_merger: PageMerger,
        settings: PlayerDataSettings,
    ) -> Self {
        Self {
            cache,
            game,
            gateway,
            items_merger,
            settings,
        }
    }

    fn policy(&self) -> CachePolicy {
        CachePolicy::ttl(self.settings.ttl)
    }

    /// In-game profile with cleaned name and derived links
    pub async fn profile(&self, user_id: &str) -> FetchOutcome<PlayerProfile> {
        let key = cache_keys::player_profile(user_id);
        self.cache
            .fetch_with_cache(&key, CachePolicy::ttl(self.settings.profile_ttl), || {
                self.game.fetch_profile(user_id)
            })
            .await
    }

    /// Leaderboard row of one player
    pub async fn rank(&self, user_id: &str) -> FetchOutcome<LeaderboardEntry> {
        let key = cache_keys::player_rank(user_id);
        self.cache
            .fetch_with_cache(&key, self.policy(), || async {
                let page = self.game.fetch_leaderboard(1, 0, Some(user_id)).await?;
                Ok::<_, ApiError>(page.items.into_iter().next())
            })
            .await
    }

    /// One leaderboard page, cached per offset and page size
    pub async fn leaderboard(&self, limit: u32, offset: u32) -> FetchOutcome<Vec<LeaderboardEntry>> {
        let key = cache_keys::leaderboard(limit, offset);
        self.cache
            .fetch_with_cache(&key, self.policy(), || async {
                let page = self.game.fetch_leaderboard(limit, offset, None).await?;
                Ok::<_, ApiError>(Some(page.items))
            })
            .await
    }

    /// Parsed battle history of one feed
    pub async fn battles(&self, user_id: &str, feed: BattleFeed) -> FetchOutcome<PlayerBattles> {
        let key = cache_keys::player_battles(user_id, feed);
        let limit = self.settings.battle_limit;
        self.cache
            .fetch_with_cache(&key, self.policy(), || async {
                let history = self.game.fetch_battles(user_id, feed, limit).await?;
                Ok::<_, ApiError>(PlayerBattles::from_history(&history, user_id))
            })
            .await
    }

    /// Every item the player holds, merged across pages
    pub async fn items(&self, user_id: &str) -> FetchOutcome<Vec<PlayerItem>> {
        let key = cache_keys::player_items(user_id);
        let limit = self.settings.page_limit;
        self.cache
            .fetch_with_cache(&key, self.policy(), || async {
                self.items_merger.gate().acquire().await;
                let first = self
                    .gateway
                    .fetch_player_items_page(user_id, limit, 0)
                    .await?;
                if first.is_empty() {
                    return Ok(None);
                }
                let items = self
                    .items_merger
                    .merge(first, self.settings.item_dedup, |offset| {
                        self.gateway.fetch_player_items_page(user_id, limit, offset)
                    })
                    .await;
                Ok::<_, ApiError>(Some(items))
            })
            .await
    }

    /// Charms and runes split out of the player's items
    pub async fn inventory(&self, user_id: &str) -> FetchOutcome<PlayerInventory> {
        self.items(user_id).await.and_then(|items| {
            let inventory = PlayerInventory::from_items(&items);
            if inventory.is_empty() {
                FetchOutcome::Empty
            } else {
                FetchOutcome::Found(inventory)
            }
        })
    }
}
