//! # Axie Helper
//!
//! Cache-aside data layer behind the Axie Helper Discord bot. Player,
//! market and reference data are read from a cache store first, fetched
//! from the Axie Infinity upstreams on a miss, normalized and written back
//! with a per-kind lifetime. Every fetch answers with a three-way
//! [`FetchOutcome`]: found, empty or failed.
//!
//! ## Example
//!
//! ```ignore
//! use axh::infrastructure::{ConfigLoader, init_app};
//!
//! let context = init_app(ConfigLoader::new().load()?)?;
//! match context.player_data().items("abc123").await {
//!     FetchOutcome::Found(items) => println!("{} items", items.len()),
//!     FetchOutcome::Empty => println!("no items"),
//!     FetchOutcome::Failed(err) => eprintln!("{err}"),
//! }
//! ```
//!
//! ## Architecture
//!
//! - `domain` - value objects, outcomes, cache keys and port traits
//! - `application` - cache-aside, pagination and fan-out use cases
//! - `infrastructure` - configuration, logging, wiring and the price job
//! - `providers` - cache stores, throttle gates and upstream clients

/// Domain layer - values, outcomes and ports
pub mod domain {
    pub use axh_domain::*;
}

/// Application layer - use cases
pub mod application {
    pub use axh_application::*;
}

/// Infrastructure layer - config, logging and wiring
pub mod infrastructure {
    pub use axh_infrastructure::*;
}

/// Provider implementations
pub mod providers {
    pub use axh_providers::*;
}

/// Command line interface
pub mod cli;

pub use domain::{Error, FetchOutcome, Result};
pub use infrastructure::{AppConfig, AppContext, ConfigLoader, init_app};
