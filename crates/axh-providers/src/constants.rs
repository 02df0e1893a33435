//! Provider Constants
//!
//! Constants specific to provider implementations. Domain constants live in
//! `axh-domain`.

// ============================================================================
// UPSTREAM BASE URLS
// ============================================================================

/// Origins game API (profiles, leaderboards, seasons)
pub const GAME_API_URL: &str = "https://game-api-origin.skymavis.com";

/// Battle history API
pub const BATTLES_API_URL: &str = "https://x.skymavis.com";

/// Sky Mavis API gateway (items, catalogs)
pub const GATEWAY_API_URL: &str = "https://api-gateway.skymavis.com";

/// Marketplace GraphQL endpoint
pub const MARKETPLACE_GRAPHQL_URL: &str = "https://graphql-gateway.axieinfinity.com/graphql";

/// CoinGecko public API
pub const COINGECKO_API_URL: &str = "https://api.coingecko.com";

/// Ronin REST identity API
pub const RONIN_REST_API_URL: &str = "https://go.ronin.rest";

/// Contest API
pub const CONTEST_API_URL: &str = "https://contest-api.skymavis.com";

/// Storage host of the battle replay buckets
pub const REPLAY_STORAGE_URL: &str = "https://storage.googleapis.com";

// ============================================================================
// UPSTREAM NAMES (error context)
// ============================================================================

pub const UPSTREAM_GAME: &str = "GameAPI";
pub const UPSTREAM_GATEWAY: &str = "GatewayAPI";
pub const UPSTREAM_MARKETPLACE: &str = "MarketplaceAPI";
pub const UPSTREAM_COINGECKO: &str = "Coingecko API";
pub const UPSTREAM_RONIN_REST: &str = "RoninRest API";
pub const UPSTREAM_CONTEST: &str = "ContestAPI";
pub const UPSTREAM_REPLAY: &str = "ReplayStorage";

// ============================================================================
// HTTP
// ============================================================================

/// Header carrying the gateway API key
pub const GATEWAY_API_KEY_HEADER: &str = "X-API-Key";

/// Default HTTP request timeout in seconds
pub const HTTP_DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Battle type requested from the battles API
pub const BATTLE_TYPE_PVP: &str = "pvp";

// ============================================================================
// CACHE PROVIDER CONSTANTS
// ============================================================================

/// Default in-memory cache capacity (entries)
pub const CACHE_DEFAULT_MAX_ENTRIES: u64 = 10_000;

/// Redis default URL
pub const REDIS_DEFAULT_URL: &str = "redis://localhost:6379";

/// Keys requested per SCAN round trip
pub const REDIS_SCAN_COUNT: usize = 500;

/// Cache namespace separator
pub const CACHE_NAMESPACE_SEPARATOR: &str = ":";
