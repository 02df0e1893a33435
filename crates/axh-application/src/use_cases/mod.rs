//! Use Cases
//!
//! Application services built from the cache-aside, pagination and fan-out
//! policies.

pub mod battle_replay;
pub mod cache_admin;
pub mod cache_aside;
pub mod contest;
pub mod fan_out;
pub mod market;
pub mod pagination;
pub mod player_data;
pub mod price_board;
pub mod reference_data;

pub use battle_replay::BattleReplayService;
pub use cache_admin::CacheAdminService;
pub use cache_aside::{CacheAside, CachePolicy};
pub use contest::ContestService;
pub use fan_out::{PlayerStatsService, SlotFuture, settle_slots};
pub use market::{MarketService, MinPricePaging};
pub use pagination::{DedupStrategy, PageMerger};
pub use player_data::{PlayerDataService, PlayerDataSettings};
pub use price_board::{PriceBoard, PriceRefresher, PriceSnapshot};
pub use reference_data::ReferenceDataService;
