//! Throttle Gate Port
//!
//! Bounds how many requests may start against one upstream within a time
//! window. Callers `acquire()` immediately before issuing a request; the
//! call suspends until a start slot is free. There is no cancellation:
//! a queued caller eventually proceeds.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Permits per rolling window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThrottleBudget {
    /// Maximum starts within one window
    pub limit: u32,
    /// Window length
    pub interval: Duration,
}

impl ThrottleBudget {
    pub fn new(limit: u32, interval: Duration) -> Self {
        Self { limit, interval }
    }

    pub fn per_second(limit: u32) -> Self {
        Self::new(limit, Duration::from_secs(1))
    }
}

#[async_trait]
pub trait ThrottleGate: Send + Sync + std::fmt::Debug {
    /// Wait for a start slot
    async fn acquire(&self);

    /// Configured budget, `None` when the gate does not throttle
    fn budget(&self) -> Option<ThrottleBudget>;
}
