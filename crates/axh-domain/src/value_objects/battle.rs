//! Battle history
//!
//! [`ArenaBattle`] mirrors the battles API; [`PlayerBattles`] is the parsed
//! per-player view cached under `playerBattles:<id>` and
//! `playerEsportBattles:<id>`.

use super::player::Division;
use crate::normalize::{extract_uuid, round2};
use crate::payload::CachedPayload;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Which battle history feed to read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BattleFeed {
    Ranked,
    Esport,
}

impl BattleFeed {
    pub fn path(self) -> &'static str {
        match self {
            Self::Ranked => "/origin/battle-history",
            Self::Esport => "/origin-esport/battle-history",
        }
    }

    pub fn operation(self) -> &'static str {
        match self {
            Self::Ranked => "getPlayerBattles",
            Self::Esport => "getPlayerEsportBattles",
        }
    }

    /// Environment segment of the replay storage bucket
    pub fn replay_bucket(self) -> &'static str {
        match self {
            Self::Ranked => "prod",
            Self::Esport => "esport",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FighterCharms {
    pub eyes: String,
    pub mouth: String,
    pub ears: String,
    pub horn: String,
    pub back: String,
    pub tail: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fighter {
    #[serde(default)]
    pub gene: String,
    pub axie_id: i64,
    #[serde(default)]
    pub axie_type: String,
    #[serde(default)]
    pub runes: Vec<String>,
    #[serde(default)]
    pub charms: FighterCharms,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemReward {
    pub item_id: String,
    pub quantity: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    pub user_id: String,
    #[serde(default)]
    pub new_vstar: i64,
    #[serde(default)]
    pub old_vstar: i64,
    #[serde(default)]
    pub result: String,
    #[serde(default)]
    pub items: Vec<ItemReward>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankTier {
    pub division: Division,
    #[serde(default)]
    pub tier: u8,
}

/// One battle as returned by the battles API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArenaBattle {
    pub battle_uuid: String,
    pub client_ids: Vec<String>,
    #[serde(default)]
    pub team_ids: Vec<i64>,
    #[serde(default)]
    pub created_at: i64,
    /// 0 first client, 1 second client, 2 draw
    pub winner: u8,
    #[serde(default)]
    pub battle_type_string: String,
    #[serde(default)]
    pub first_client_fighters: Vec<Fighter>,
    #[serde(default)]
    pub second_client_fighters: Vec<Fighter>,
    #[serde(default)]
    pub rewards: Vec<Reward>,
    #[serde(default)]
    pub delta_rewards: Vec<Reward>,
    #[serde(default)]
    pub user_ranks: Vec<RankTier>,
    #[serde(default)]
    pub started_time: i64,
    #[serde(default)]
    pub ended_time: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattleResult {
    Victory,
    Defeated,
    Draw,
}

/// Gains of one side of a battle
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BattleRewards {
    pub vstar_gained: i64,
    pub slp_gained: i64,
    pub moonshard_gained: i64,
    pub new_vstar: Option<i64>,
    pub old_vstar: Option<i64>,
}

impl BattleRewards {
    fn from_reward(reward: &Reward) -> Self {
        let vstar_gained = if reward.new_vstar != 0 {
            reward.new_vstar - reward.old_vstar
        } else {
            0
        };
        let slp_gained = reward
            .items
            .iter()
            .find(|item| item.item_id == "slp")
            .map_or(0, |item| item.quantity);
        let moonshard_gained = reward
            .items
            .iter()
            .filter(|item| item.item_id == "moonshard")
            .map(|item| item.quantity)
            .sum();

        Self {
            vstar_gained,
            slp_gained,
            moonshard_gained,
            new_vstar: Some(reward.new_vstar),
            old_vstar: Some(reward.old_vstar),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleSide {
    pub user_id: String,
    pub fighters: Vec<Fighter>,
    pub team_id: Option<i64>,
    pub rank: Option<RankTier>,
    pub rewards: Option<BattleRewards>,
}

/// A battle seen from one player's side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedBattle {
    pub battle_index: usize,
    pub battle_uuid: String,
    pub battle_type: String,
    pub ended_time: i64,
    pub result: BattleResult,
    pub player: BattleSide,
    pub opponent: BattleSide,
}

impl ParsedBattle {
    /// Parse `battle` from the perspective of `user_id`
    ///
    /// When `user_id` is not one of the participants the first client is
    /// taken as the player.
    pub fn parse(battle: &ArenaBattle, user_id: &str, battle_index: usize) -> Self {
        let user_id = user_id.to_lowercase();
        let player_index = battle
            .client_ids
            .iter()
            .position(|id| id.to_lowercase() == user_id)
            .unwrap_or(0);
        let opponent_index = if player_index == 1 { 0 } else { 1 };

        let result = if usize::from(battle.winner) == player_index {
            BattleResult::Victory
        } else if usize::from(battle.winner) == opponent_index {
            BattleResult::Defeated
        } else {
            BattleResult::Draw
        };

        let side = |index: usize, is_player: bool| {
            let id = battle.client_ids.get(index).cloned().unwrap_or_default();
            let fighters = if index == 0 {
                battle.first_client_fighters.clone()
            } else {
                battle.second_client_fighters.clone()
            };
            let rewards = battle
                .delta_rewards
                .iter()
                .find(|r| (r.user_id.to_lowercase() == user_id) == is_player)
                .map(BattleRewards::from_reward);
            BattleSide {
                user_id: id,
                fighters,
                team_id: battle.team_ids.get(index).copied(),
                rank: battle.user_ranks.get(index).copied(),
                rewards,
            }
        };

        Self {
            battle_index,
            battle_uuid: battle.battle_uuid.clone(),
            battle_type: battle.battle_type_string.clone(),
            ended_time: battle.ended_time,
            result,
            player: side(player_index, true),
            opponent: side(opponent_index, false),
        }
    }
}

/// Parsed battle history with aggregate results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerBattles {
    pub battles: Vec<ParsedBattle>,
    pub match_total: u32,
    pub win_total: u32,
    pub win_rate: f64,
    pub draw_total: u32,
    pub draw_rate: f64,
    pub lose_total: u32,
    pub lose_rate: f64,
    pub last_used_team: Vec<Fighter>,
    pub most_used_team: Vec<Fighter>,
}

impl PlayerBattles {
    /// Build the parsed view, `None` when the history is empty
    ///
    /// History is newest first, so the last used team is the player's team in
    /// the first battle. The most used team is the player's team id that
    /// appears most often; ties go to the most recent one.
    pub fn from_history(history: &[ArenaBattle], user_id: &str) -> Option<Self> {
        if history.is_empty() {
            return None;
        }

        let battles: Vec<ParsedBattle> = history
            .iter()
            .enumerate()
            .map(|(index, battle)| ParsedBattle::parse(battle, user_id, index))
            .collect();

        let count = |wanted: BattleResult| {
            u32::try_from(battles.iter().filter(|b| b.result == wanted).count()).unwrap_or(u32::MAX)
        };
        let match_total = u32::try_from(battles.len()).unwrap_or(u32::MAX);
        let win_total = count(BattleResult::Victory);
        let draw_total = count(BattleResult::Draw);
        let lose_total = count(BattleResult::Defeated);
        let rate = |total: u32| round2(f64::from(total) / f64::from(match_total) * 100.0);

        let last_used_team = battles
            .first()
            .map(|b| b.player.fighters.clone())
            .unwrap_or_default();

        let mut team_counts: HashMap<i64, usize> = HashMap::new();
        for team_id in battles.iter().filter_map(|b| b.player.team_id) {
            *team_counts.entry(team_id).or_default() += 1;
        }
        let mut most_used_id = None;
        let mut best = 0;
        for team_id in battles.iter().filter_map(|b| b.player.team_id) {
            let seen = team_counts.get(&team_id).copied().unwrap_or(0);
            if seen > best {
                best = seen;
                most_used_id = Some(team_id);
            }
        }
        let most_used_team = most_used_id
            .and_then(|id| battles.iter().find(|b| b.player.team_id == Some(id)))
            .map_or_else(|| last_used_team.clone(), |b| b.player.fighters.clone());

        Some(Self {
            match_total,
            win_total,
            win_rate: rate(win_total),
            draw_total,
            draw_rate: rate(draw_total),
            lose_total,
            lose_rate: rate(lose_total),
            last_used_team,
            most_used_team,
            battles,
        })
    }
}

/// Winner of the rock-paper-scissors round that opens a battle replay
///
/// Replays never change, so the entry is stored without expiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RpsWinner(pub String);

impl RpsWinner {
    /// First user id found in a raw replay, `None` when there is none
    pub fn from_replay(replay: &str) -> Option<Self> {
        extract_uuid(replay).map(Self)
    }
}

impl CachedPayload for RpsWinner {
    fn normalize(&mut self) {
        self.0 = self.0.to_lowercase();
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl CachedPayload for PlayerBattles {
    fn is_empty(&self) -> bool {
        self.battles.is_empty()
    }
}
