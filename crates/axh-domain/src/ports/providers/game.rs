//! Game API Port
//!
//! Profiles, leaderboards, battle history and seasons. Adapters return the
//! raw upstream data; normalization and caching happen in the application
//! layer.

use crate::value_objects::{
    ApiResult, ArenaBattle, BattleFeed, LeaderboardEntry, Page, PlayerProfile, Season,
};
use async_trait::async_trait;

#[async_trait]
pub trait GameApi: Send + Sync + std::fmt::Debug {
    /// Profile of a player, `None` when the upstream has none
    async fn fetch_profile(&self, user_id: &str) -> ApiResult<Option<PlayerProfile>>;

    /// One leaderboard page, optionally filtered to a single player
    async fn fetch_leaderboard(
        &self,
        limit: u32,
        offset: u32,
        user_id: Option<&str>,
    ) -> ApiResult<Page<LeaderboardEntry>>;

    /// Latest battles of a player, newest first
    async fn fetch_battles(
        &self,
        user_id: &str,
        feed: BattleFeed,
        limit: u32,
    ) -> ApiResult<Vec<ArenaBattle>>;

    async fn fetch_seasons(&self, limit: u32, offset: u32) -> ApiResult<Vec<Season>>;

    fn provider_name(&self) -> &str;
}
