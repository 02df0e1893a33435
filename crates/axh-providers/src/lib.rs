// Allow collapsible_if for complex conditional logic
#![allow(clippy::collapsible_if)]

//! # Axie Helper - Provider Implementations
//!
//! Concrete adapters for the ports defined in `axh-domain`.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Cache | `CacheProvider` | Moka, Redis, Null |
//! | Throttle | `ThrottleGate` | SlidingWindow, Unthrottled |
//! | Game | `GameApi` | Origins game API + battles API |
//! | Gateway | `GatewayApi` | Sky Mavis API gateway |
//! | Marketplace | `MarketplaceApi` | Marketplace GraphQL |
//! | Price feed | `PriceFeed` | CoinGecko |
//! | Resolver | `ProfileResolver` | Ronin REST |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! axh-providers = { version = "0.1", default-features = false, features = ["cache-redis"] }
//! ```

// Re-export axh-domain types commonly used with providers
pub use axh_domain::error::{Error, Result};
pub use axh_domain::ports::providers::{
    CacheProvider, GameApi, GatewayApi, MarketplaceApi, PriceFeed, ProfileResolver, ThrottleGate,
};

/// Provider-specific constants
pub mod constants;

/// Shared utilities for provider implementations
pub mod utils;

/// Cache provider implementations
pub mod cache;

/// Throttle gate implementations
pub mod throttle;

/// HTTP client configuration shared by the upstream clients
pub mod http;

/// Upstream API clients
pub mod upstream;
