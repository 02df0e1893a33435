//! Upstream API Clients
//!
//! | Client | Port | Upstream |
//! |--------|------|----------|
//! | [`GameApiClient`] | `GameApi` | Origins game API, battles API |
//! | [`GatewayApiClient`] | `GatewayApi` | Sky Mavis API gateway |
//! | [`MarketplaceClient`] | `MarketplaceApi` | Marketplace GraphQL |
//! | [`ContestApiClient`] | `ContestApi` | Contest API |
//! | [`ReplayStorageClient`] | `BattleReplaySource` | Replay storage buckets |
//! | [`CoinGeckoClient`] | `PriceFeed` | CoinGecko |
//! | [`RoninRestClient`] | `ProfileResolver` | Ronin REST |
//!
//! Clients only translate HTTP into domain values and [`ApiError`]s;
//! caching, throttling and normalization belong to the application layer.
//!
//! [`ApiError`]: axh_domain::ApiError

pub mod coingecko;
pub mod contest_api;
pub mod game_api;
pub mod gateway_api;
pub mod marketplace;
pub mod replay_storage;
pub mod ronin_rest;

pub use coingecko::CoinGeckoClient;
pub use contest_api::ContestApiClient;
pub use game_api::GameApiClient;
pub use gateway_api::GatewayApiClient;
pub use marketplace::MarketplaceClient;
pub use replay_storage::ReplayStorageClient;
pub use ronin_rest::RoninRestClient;
