//! Limited-time contests and their leaderboards

use crate::constants::CONTEST_TTL_SECS;
use crate::normalize::clean_player_name;
use crate::payload::CachedPayload;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One contest as listed by the contest API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contest {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub mobile_image_url: String,
    #[serde(default)]
    pub thumbnail_url: String,
    #[serde(default)]
    pub short_description: String,
    /// Unix seconds
    #[serde(default)]
    pub start_time: i64,
    /// Unix seconds
    #[serde(default)]
    pub end_time: i64,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub event_url: String,
    #[serde(default)]
    pub disable_leaderboard: bool,
}

impl Contest {
    pub fn has_ended(&self, now: i64) -> bool {
        self.end_time <= now
    }
}

/// Contest list, newest first
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Contests(pub Vec<Contest>);

impl Contests {
    /// Most recent contest, the one the leaderboard command shows
    pub fn latest(&self) -> Option<&Contest> {
        self.0.first()
    }

    /// Cache lifetime at `now`: until the latest contest ends, capped at
    /// one day. An ended contest, or none at all, keeps the list for a day.
    pub fn ttl_at(&self, now: i64) -> Duration {
        let day = Duration::from_secs(CONTEST_TTL_SECS);
        match self.latest() {
            Some(contest) if !contest.has_ended(now) => u64::try_from(contest.end_time - now)
                .map_or(day, |left| Duration::from_secs(left).min(day)),
            _ => day,
        }
    }
}

impl CachedPayload for Contests {
    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn ttl_override(&self) -> Option<Duration> {
        Some(self.ttl_at(chrono::Utc::now().timestamp()))
    }
}

/// Leaderboard row of a contest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContestPlayer {
    pub user_id: String,
    pub user_name: String,
    #[serde(default)]
    pub total_point: i64,
    #[serde(default)]
    pub rank: u32,
}

/// One leaderboard page of the latest contest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContestLeaderboard {
    pub contest: Contest,
    pub players: Vec<ContestPlayer>,
    /// Players across all pages
    #[serde(default)]
    pub total: u32,
}

impl CachedPayload for ContestLeaderboard {
    fn normalize(&mut self) {
        for player in &mut self.players {
            player.user_name = clean_player_name(&player.user_name);
        }
    }

    fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
