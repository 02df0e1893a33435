//! Composition root
//!
//! Wires configuration into cache stores, throttle gates, upstream clients
//! and the application services. There is no container: every dependency
//! is an `Arc<dyn Port>` passed by constructor.

pub mod bootstrap;

pub use bootstrap::*;
