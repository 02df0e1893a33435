//! External Provider Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | CacheProvider | Key/value cache with TTL |
//! | ThrottleGate | Start-rate limiter in front of an upstream |
//! | GameApi | Profiles, leaderboards, battles and seasons |
//! | GatewayApi | Player items and community item catalogs |
//! | MarketplaceApi | Floor prices, axie details and account lookup |
//! | ContestApi | Contests and contest leaderboards |
//! | BattleReplaySource | Raw battle replays from storage |
//! | PriceFeed | Token market data |
//! | ProfileResolver | User id / address identity lookup |

/// Cache provider port
pub mod cache;
/// Contest API port
pub mod contest;
/// Game API port
pub mod game;
/// Gateway API port
pub mod gateway;
/// Marketplace port
pub mod marketplace;
/// Token price feed port
pub mod price_feed;
/// Battle replay port
pub mod replay;
/// Identity resolver port
pub mod resolver;
/// Throttle gate port
pub mod throttle;

pub use cache::{CacheEntryConfig, CacheProvider};
pub use contest::ContestApi;
pub use game::GameApi;
pub use gateway::GatewayApi;
pub use marketplace::MarketplaceApi;
pub use price_feed::PriceFeed;
pub use replay::BattleReplaySource;
pub use resolver::ProfileResolver;
pub use throttle::{ThrottleBudget, ThrottleGate};
