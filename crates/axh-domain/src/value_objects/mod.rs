//! Value Objects
//!
//! Immutable data carried between the upstream adapters, the cache and the
//! command handlers. Upstream field names are preserved through serde
//! renames so a cached entry round-trips exactly.

pub mod axie;
pub mod battle;
pub mod contest;
pub mod item;
pub mod market;
pub mod outcome;
pub mod page;
pub mod player;
pub mod season;
pub mod stats;

pub use axie::{AxieDetails, AxieStats};
pub use battle::{
    ArenaBattle, BattleFeed, BattleResult, BattleRewards, BattleSide, Fighter, FighterCharms,
    ItemReward, ParsedBattle, PlayerBattles, RankTier, Reward, RpsWinner,
};
pub use contest::{Contest, ContestLeaderboard, ContestPlayer, Contests};
pub use item::{ItemCatalogKind, ItemMinimumPrice, PlayerInventory, PlayerItem, TokenType};
pub use market::{MarketData, Token, TokenPrice};
pub use outcome::{ApiError, ApiResult, FetchOutcome};
pub use page::{Envelope, Page, PageMetadata};
pub use player::{Division, LeaderboardEntry, PlayerProfile, ProfileUrls, ResolvedProfile};
pub use season::{Season, Seasons};
pub use stats::{CompositePlayerStats, SlotValue, StatSlot};
