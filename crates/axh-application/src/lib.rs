//! Application Layer - Axie Helper
//!
//! Use cases sitting between the bot's command handlers and the upstream
//! adapters. Every fetch goes through the same composable policies:
//!
//! - [`use_cases::CacheAside`]: read the cache, else fetch, normalize, write
//!   back with a TTL, and answer with a three-way
//!   [`FetchOutcome`](axh_domain::FetchOutcome)
//! - [`use_cases::PageMerger`]: fan out the remaining pages of a paginated
//!   listing behind a throttle gate and merge them
//! - [`use_cases::fan_out`]: run independent per-player fetches concurrently
//!   and assemble a best-effort composite
//!
//! ## Dependencies
//!
//! This crate depends only on `axh-domain` ports; concrete cache stores,
//! throttle gates and HTTP clients are injected by `axh-infrastructure`.

pub mod ports;
pub mod use_cases;

pub use ports::*;
pub use use_cases::*;
