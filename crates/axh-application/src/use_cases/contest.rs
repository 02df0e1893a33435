//! Contests and the latest contest's leaderboard

use super::cache_aside::{CacheAside, CachePolicy};
use crate::ports::providers::ContestApi;
use axh_domain::cache_keys;
use axh_domain::constants::{CONTEST_TTL_SECS, DEFAULT_CACHE_TTL_SECS};
use axh_domain::value_objects::{ContestLeaderboard, Contests};
use axh_domain::{ApiError, FetchOutcome};
use std::sync::Arc;
use tracing::debug;

/// Contests requested in one call
const CONTEST_LIST_LIMIT: u32 = 100;

#[derive(Debug, Clone)]
pub struct ContestService {
    cache: CacheAside,
    api: Arc<dyn ContestApi>,
}

impl ContestService {
    pub fn new(cache: CacheAside, api: Arc<dyn ContestApi>) -> Self {
        Self { cache, api }
    }

    /// Contest list, newest first
    ///
    /// The entry lives until the latest contest ends, at most a day.
    pub async fn contests(&self) -> FetchOutcome<Contests> {
        self.cache
            .fetch_with_cache(
                &cache_keys::contests(),
                CachePolicy::ttl_secs(CONTEST_TTL_SECS),
                || async {
                    let contests = self.api.fetch_contests(CONTEST_LIST_LIMIT, 1).await?;
                    Ok::<_, ApiError>(Some(Contests(contests)))
                },
            )
            .await
    }

    /// One leaderboard page of the latest contest, `page` counting from 1
    ///
    /// Depends on the contest list: no contest means `Empty`, and a failed
    /// list fails the leaderboard without asking for it.
    pub async fn contest_leaderboard(
        &self,
        limit: u32,
        page: u32,
    ) -> FetchOutcome<ContestLeaderboard> {
        let page = page.max(1);
        let latest = self.contests().await.and_then(|contests| {
            contests
                .latest()
                .cloned()
                .map_or(FetchOutcome::Empty, FetchOutcome::Found)
        });
        let contest = match latest {
            FetchOutcome::Found(contest) => contest,
            FetchOutcome::Empty => {
                debug!("no contest listed, skipping leaderboard");
                return FetchOutcome::Empty;
            }
            FetchOutcome::Failed(err) => return FetchOutcome::Failed(err),
        };

        let key = cache_keys::contest_leaderboard(contest.id, page, limit);
        self.cache
            .fetch_with_cache(&key, CachePolicy::ttl_secs(DEFAULT_CACHE_TTL_SECS), || async {
                let players = self
                    .api
                    .fetch_contest_leaderboard(contest.id, limit, page)
                    .await?;
                Ok::<_, ApiError>(Some(ContestLeaderboard {
                    total: players.metadata.total,
                    players: players.items,
                    contest: contest.clone(),
                }))
            })
            .await
    }
}
