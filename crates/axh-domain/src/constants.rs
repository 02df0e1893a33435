//! Domain constants
//!
//! Cache lifetimes, identifier shapes and public site URLs shared by every
//! layer. Provider specific constants live in `axh_providers::constants`.

// ============================================================================
// CACHE LIFETIMES
// ============================================================================

/// Default cache expiration for player data (30 minutes)
pub const DEFAULT_CACHE_TTL_SECS: u64 = 60 * 30;

/// Player profile expiration (7 days)
pub const PROFILE_TTL_SECS: u64 = 60 * 60 * 24 * 7;

/// Token market data expiration (1 minute)
pub const TOKEN_PRICE_TTL_SECS: u64 = 60;

/// Resolved profile identity expiration (1 day)
pub const RESOLVED_PROFILE_TTL_SECS: u64 = 60 * 60 * 24;

/// Upper bound on the contest list lifetime (1 day)
pub const CONTEST_TTL_SECS: u64 = 60 * 60 * 24;

/// Marketplace axie details expiration (3 hours)
pub const AXIE_DETAILS_TTL_SECS: u64 = 60 * 60 * 3;

// ============================================================================
// PAGINATION
// ============================================================================

/// Default page size for paginated upstream listings
pub const DEFAULT_PAGE_LIMIT: u32 = 100;

/// Upper bound on pages fetched for one paginated listing
pub const DEFAULT_MAX_PAGES: u32 = 50;

/// Battle history entries requested per player
pub const DEFAULT_BATTLE_LIMIT: u32 = 100;

// ============================================================================
// IDENTIFIERS
// ============================================================================

/// Number of characters in a game user id (UUID form)
pub const USER_ID_LENGTH: usize = 36;

/// Number of characters in an address without the `0x` prefix
pub const ETH_ADDRESS_LENGTH: usize = 40;

/// Ronin address prefix
pub const RONIN_PREFIX: &str = "ronin:";

/// Ethereum address prefix
pub const ETHEREUM_PREFIX: &str = "0x";

/// Item id prefix of charms in the player inventory
pub const CHARM_ITEM_PREFIX: &str = "ecard_";

/// Item id prefix of runes in the player inventory
pub const RUNE_ITEM_PREFIX: &str = "rune_";

// ============================================================================
// PUBLIC SITES
// ============================================================================

/// axies.io profile site
pub const AXIES_IO_URL: &str = "https://axies.io";

/// Official marketplace
pub const MARKETPLACE_URL: &str = "https://app.axieinfinity.com";

/// Ronin chain explorer
pub const RONINCHAIN_URL: &str = "https://explorer.roninchain.com";
