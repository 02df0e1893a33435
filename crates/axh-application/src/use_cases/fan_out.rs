//! Fan-out Aggregator
//!
//! Runs independent fetches for one player concurrently. Every branch is
//! tagged with the slot it fills, so the composite is assembled by tag; a
//! branch that fails or finds nothing leaves its slot empty and never
//! affects its siblings.

use super::player_data::PlayerDataService;
use axh_domain::value_objects::{BattleFeed, CompositePlayerStats, SlotValue};
use axh_domain::FetchOutcome;
use futures::future::{BoxFuture, FutureExt, join_all};
use tracing::{debug, warn};

/// One tagged fan-out branch
pub type SlotFuture<'a> = BoxFuture<'a, FetchOutcome<SlotValue>>;

/// Settle every branch and assemble what succeeded
pub async fn settle_slots(user_id: &str, branches: Vec<SlotFuture<'_>>) -> CompositePlayerStats {
    let mut stats = CompositePlayerStats::new(user_id);

    for outcome in join_all(branches).await {
        match outcome {
            FetchOutcome::Found(value) => stats.assign(value),
            FetchOutcome::Empty => debug!(user_id, "fan-out branch found no data"),
            FetchOutcome::Failed(err) => warn!(user_id, error = %err, "fan-out branch failed"),
        }
    }

    stats
}

/// Composite per-player statistics
#[derive(Debug, Clone)]
pub struct PlayerStatsService {
    data: PlayerDataService,
}

impl PlayerStatsService {
    pub fn new(data: PlayerDataService) -> Self {
        Self { data }
    }

    pub fn data(&self) -> &PlayerDataService {
        &self.data
    }

    /// Profile, rank, ranked battles and inventory of one player
    pub async fn overall_stats(&self, user_id: &str) -> CompositePlayerStats {
        let data = &self.data;
        let branches: Vec<SlotFuture<'_>> = vec![
            data.profile(user_id).map(|o| o.map(SlotValue::Profile)).boxed(),
            data.rank(user_id).map(|o| o.map(SlotValue::Rank)).boxed(),
            data.battles(user_id, BattleFeed::Ranked)
                .map(|o| o.map(SlotValue::Battles))
                .boxed(),
            data.inventory(user_id)
                .map(|o| o.map(SlotValue::Inventory))
                .boxed(),
        ];

        settle_slots(user_id, branches).await
    }
}
