//! Infrastructure layer constants
//!
//! Defaults for configuration, logging and scheduled jobs. Domain constants
//! live in `axh_domain::constants`, provider constants in
//! `axh_providers::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "axh.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "axh";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "AXH";

/// Separator between nested keys in environment variables
/// (`AXH_CACHE__REDIS_URL` sets `cache.redis_url`)
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "AXH_LOG";

/// File name stem of rolled log files
pub const LOG_FILE_STEM: &str = "axh";

// ============================================================================
// CACHE CONSTANTS
// ============================================================================

/// Cache provider used when none is configured
pub const DEFAULT_CACHE_PROVIDER: &str = "moka";

/// Default in-memory cache capacity (entries)
pub const DEFAULT_CACHE_MAX_CAPACITY: u64 = 10_000;

// ============================================================================
// THROTTLE CONSTANTS
// ============================================================================

/// Gateway API requests started per interval
pub const GATEWAY_THROTTLE_LIMIT: u32 = 10;

/// Gateway API throttle interval (milliseconds)
pub const GATEWAY_THROTTLE_INTERVAL_MS: u64 = 1000;

/// Marketplace requests started per interval
pub const MARKETPLACE_THROTTLE_LIMIT: u32 = 5;

/// Marketplace throttle interval (milliseconds)
pub const MARKETPLACE_THROTTLE_INTERVAL_MS: u64 = 1000;

// ============================================================================
// JOB CONSTANTS
// ============================================================================

/// Price refresh schedule (every 15 minutes, on the minute)
pub const PRICE_REFRESH_CRON: &str = "0 */15 * * * *";

/// Tokens requested per marketplace window
pub const PRICE_PAGE_SIZE: u32 = 100;

/// Upper bound on marketplace windows per token type
pub const PRICE_MAX_PAGES: u32 = 20;
