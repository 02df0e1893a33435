//! Configuration types module

pub mod app;
pub mod cache;
pub mod jobs;
pub mod logging;
pub mod throttle;
pub mod upstream;

// Re-export main types
pub use app::AppConfig;
pub use cache::CacheConfig;
pub use jobs::JobsConfig;
pub use logging::LoggingConfig;
pub use throttle::{ThrottleConfig, ThrottleLimitConfig};
pub use upstream::UpstreamConfig;
