//! Game seasons

use crate::constants::DEFAULT_CACHE_TTL_SECS;
use crate::payload::CachedPayload;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Season {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    /// Unix seconds
    pub started_at: i64,
    /// Unix seconds
    pub ended_at: i64,
    #[serde(default, rename = "seasonPassID")]
    pub season_pass_id: String,
    #[serde(default)]
    pub description: String,
}

/// Season list, cached until the latest season ends
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seasons(pub Vec<Season>);

impl Seasons {
    /// Season with the highest id
    pub fn latest(&self) -> Option<&Season> {
        self.0
            .iter()
            .filter(|season| season.id.is_some())
            .max_by_key(|season| season.id)
    }

    /// Season running at `now` (unix seconds)
    pub fn current(&self, now: i64) -> Option<&Season> {
        self.0
            .iter()
            .find(|season| season.started_at <= now && now < season.ended_at)
    }

    /// Cache lifetime at `now`: until the latest season ends, or the default
    /// lifetime when there is no latest season or it already ended
    pub fn ttl_at(&self, now: i64) -> Duration {
        let default = Duration::from_secs(DEFAULT_CACHE_TTL_SECS);
        match self.latest() {
            Some(season) if season.ended_at > now => {
                Duration::from_secs(u64::try_from(season.ended_at - now).unwrap_or(DEFAULT_CACHE_TTL_SECS))
            }
            _ => default,
        }
    }
}

impl CachedPayload for Seasons {
    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn ttl_override(&self) -> Option<Duration> {
        Some(self.ttl_at(chrono::Utc::now().timestamp()))
    }
}
