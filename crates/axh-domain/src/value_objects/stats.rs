//! Composite per-player view assembled by the fan-out aggregator

use super::battle::PlayerBattles;
use super::item::PlayerInventory;
use super::player::{LeaderboardEntry, PlayerProfile};
use serde::{Deserialize, Serialize};

/// Output slot of a fan-out branch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatSlot {
    Profile,
    Rank,
    Battles,
    Inventory,
}

/// A fan-out branch result tagged with the slot it fills
#[derive(Debug, Clone, PartialEq)]
pub enum SlotValue {
    Profile(PlayerProfile),
    Rank(LeaderboardEntry),
    Battles(PlayerBattles),
    Inventory(PlayerInventory),
}

impl SlotValue {
    pub fn slot(&self) -> StatSlot {
        match self {
            Self::Profile(_) => StatSlot::Profile,
            Self::Rank(_) => StatSlot::Rank,
            Self::Battles(_) => StatSlot::Battles,
            Self::Inventory(_) => StatSlot::Inventory,
        }
    }
}

/// Best-effort aggregate of independent per-player fetches
///
/// Every field is filled by its own upstream call and is absent when that
/// call failed or found nothing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositePlayerStats {
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<PlayerProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leaderboard: Option<LeaderboardEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub battles: Option<PlayerBattles>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory: Option<PlayerInventory>,
}

impl CompositePlayerStats {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            ..Self::default()
        }
    }

    /// Place a tagged value into its slot
    pub fn assign(&mut self, value: SlotValue) {
        match value {
            SlotValue::Profile(v) => self.profile = Some(v),
            SlotValue::Rank(v) => self.leaderboard = Some(v),
            SlotValue::Battles(v) => self.battles = Some(v),
            SlotValue::Inventory(v) => self.inventory = Some(v),
        }
    }

    /// Slots that were filled, in declaration order
    pub fn populated_slots(&self) -> Vec<StatSlot> {
        let mut slots = Vec::with_capacity(4);
        if self.profile.is_some() {
            slots.push(StatSlot::Profile);
        }
        if self.leaderboard.is_some() {
            slots.push(StatSlot::Rank);
        }
        if self.battles.is_some() {
            slots.push(StatSlot::Battles);
        }
        if self.inventory.is_some() {
            slots.push(StatSlot::Inventory);
        }
        slots
    }
}
