//! Player identity and ranking data

use crate::constants::{AXIES_IO_URL, MARKETPLACE_URL, RONINCHAIN_URL};
use crate::normalize::{AddressFormat, clean_player_name, parse_address};
use crate::payload::CachedPayload;
use serde::{Deserialize, Serialize};

/// Arena division
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Division {
    Egg,
    Chick,
    Hare,
    Boar,
    Wolf,
    Bear,
    Tiger,
    Challenger,
    #[serde(other)]
    Unknown,
}

/// Public profile links derived from the ronin address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUrls {
    pub axies_io: String,
    pub marketplace: String,
    pub explorer: String,
}

impl ProfileUrls {
    pub fn for_address(ronin_address: &str) -> Self {
        Self {
            axies_io: format!("{AXIES_IO_URL}/profile/{ronin_address}"),
            marketplace: format!("{MARKETPLACE_URL}/profile/{ronin_address}"),
            explorer: format!("{RONINCHAIN_URL}/address/{ronin_address}"),
        }
    }
}

/// In-game profile of a player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfile {
    #[serde(rename = "userID")]
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub level: u32,
    pub ronin_address: String,
    #[serde(default)]
    pub crafting_level: u32,
    #[serde(default)]
    pub rank: Option<Division>,
    #[serde(default)]
    pub tier: u8,
    #[serde(default)]
    pub vstar: i64,
    #[serde(default)]
    pub ban_until: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<ProfileUrls>,
}

impl CachedPayload for PlayerProfile {
    fn normalize(&mut self) {
        self.name = clean_player_name(&self.name);
        self.ronin_address = parse_address(&self.ronin_address, AddressFormat::Ronin);
        self.url = Some(ProfileUrls::for_address(&self.ronin_address));
    }

    fn is_empty(&self) -> bool {
        self.user_id.is_empty()
    }
}

/// Leaderboard row, also used as a player's rank
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    #[serde(rename = "userID")]
    pub user_id: String,
    pub name: String,
    pub rank: Division,
    #[serde(default)]
    pub tier: u8,
    #[serde(default)]
    pub top_rank: u32,
    #[serde(default)]
    pub vstar: i64,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl CachedPayload for LeaderboardEntry {
    fn normalize(&mut self) {
        self.name = clean_player_name(&self.name);
    }
}

/// Identity resolved from a user id or an address
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedProfile {
    #[serde(default)]
    pub account_id: String,
    #[serde(default)]
    pub ronin: String,
    #[serde(default)]
    pub ethereum: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub homeland: Option<String>,
}

impl CachedPayload for ResolvedProfile {
    fn normalize(&mut self) {
        self.name = clean_player_name(&self.name);
    }

    /// Incomplete identities are not worth caching
    fn is_empty(&self) -> bool {
        self.account_id.is_empty() || self.ronin.is_empty()
    }
}
