//! # Axie Helper - Domain Layer
//!
//! Core types and contracts for the Axie Helper data layer. Everything the
//! bot's command handlers consume flows through the types defined here:
//!
//! - [`value_objects`] - player, battle, item, market, season, contest and
//!   axie data, the paginated [`Page`] envelope and the three-way
//!   [`FetchOutcome`]
//! - [`ports`] - boundary traits implemented by `axh-providers`
//!   (cache store, throttle gate, upstream APIs)
//! - [`cache_keys`] - colon-delimited cache key builders
//! - [`normalize`] - player name cleaning and address formatting
//!
//! The domain layer has no runtime dependencies: no HTTP client, no async
//! runtime, no cache backend.

pub mod cache_keys;
pub mod constants;
pub mod error;
pub mod normalize;
pub mod payload;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use payload::CachedPayload;
pub use value_objects::{ApiError, ApiResult, FetchOutcome, Page, PageMetadata};
