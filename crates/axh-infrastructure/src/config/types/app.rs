//! Main application configuration

use super::{CacheConfig, JobsConfig, LoggingConfig, ThrottleConfig, UpstreamConfig};
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Cache store selection
    pub cache: CacheConfig,
    /// Upstream endpoints and credentials
    pub upstream: UpstreamConfig,
    /// Per-upstream request budgets
    pub throttle: ThrottleConfig,
    /// Background jobs
    pub jobs: JobsConfig,
}
