//! # Axie Helper - Infrastructure Layer
//!
//! Everything between the process and the application services.
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`config`] | figment-based loading of `axh.toml` and `AXH_*` variables |
//! | [`logging`] | tracing subscriber setup |
//! | [`error_ext`] | context helpers mapping foreign errors to the domain error |
//! | [`di`] | composition root building [`di::AppContext`] |
//! | [`scheduler`] | cron-driven price board refresh |

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;
pub mod scheduler;

pub use config::{AppConfig, ConfigLoader};
pub use di::{AppContext, init_app};
pub use error_ext::ErrorContext;
pub use logging::init_logging;
pub use scheduler::PriceRefreshJob;
