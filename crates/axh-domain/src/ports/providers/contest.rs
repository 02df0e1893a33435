//! Contest API Port

use crate::value_objects::{ApiResult, Contest, ContestPlayer, Page};
use async_trait::async_trait;

#[async_trait]
pub trait ContestApi: Send + Sync + std::fmt::Debug {
    /// Contests, newest first. `page` counts from 1.
    async fn fetch_contests(&self, limit: u32, page: u32) -> ApiResult<Vec<Contest>>;

    /// One leaderboard page of a contest. `page` counts from 1.
    async fn fetch_contest_leaderboard(
        &self,
        contest_id: i64,
        limit: u32,
        page: u32,
    ) -> ApiResult<Page<ContestPlayer>>;

    fn provider_name(&self) -> &str;
}
