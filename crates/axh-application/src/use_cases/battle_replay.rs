//! Battle replays, reduced to the winner of the opening rock-paper-scissors

use super::cache_aside::{CacheAside, CachePolicy};
use crate::ports::providers::BattleReplaySource;
use axh_domain::cache_keys;
use axh_domain::value_objects::{BattleFeed, RpsWinner};
use axh_domain::{ApiError, FetchOutcome};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct BattleReplayService {
    cache: CacheAside,
    source: Arc<dyn BattleReplaySource>,
}

impl BattleReplayService {
    pub fn new(cache: CacheAside, source: Arc<dyn BattleReplaySource>) -> Self {
        Self { cache, source }
    }

    /// User id of the RPS winner of a battle
    ///
    /// Battle ids are unique across feeds, so the key ignores `feed`. A
    /// replay that carries no user id is `Empty` and is not cached.
    pub async fn rps_winner(&self, battle_id: &str, feed: BattleFeed) -> FetchOutcome<RpsWinner> {
        self.cache
            .fetch_with_cache(
                &cache_keys::battle_replay(battle_id),
                CachePolicy::persistent(),
                || async {
                    let replay = self.source.fetch_replay(battle_id, feed).await?;
                    Ok::<_, ApiError>(replay.as_deref().and_then(RpsWinner::from_replay))
                },
            )
            .await
    }
}
