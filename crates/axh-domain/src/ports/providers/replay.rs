//! Battle Replay Port

use crate::value_objects::{ApiResult, BattleFeed};
use async_trait::async_trait;

#[async_trait]
pub trait BattleReplaySource: Send + Sync + std::fmt::Debug {
    /// Raw replay text of a battle, `None` when storage has no such replay
    async fn fetch_replay(&self, battle_id: &str, feed: BattleFeed) -> ApiResult<Option<String>>;

    fn provider_name(&self) -> &str;
}
