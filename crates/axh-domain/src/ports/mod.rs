//! Domain Port Interfaces
//!
//! Boundary contracts between the domain and the outer layers. The
//! application layer depends on these traits only; `axh-providers`
//! implements them and the infrastructure layer wires them together.

/// External service provider ports
pub mod providers;

pub use providers::{
    BattleReplaySource, CacheEntryConfig, CacheProvider, ContestApi, GameApi, GatewayApi,
    MarketplaceApi, PriceFeed, ProfileResolver, ThrottleBudget, ThrottleGate,
};
