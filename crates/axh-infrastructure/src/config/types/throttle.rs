//! Throttle configuration types

use crate::constants::{
    GATEWAY_THROTTLE_INTERVAL_MS, GATEWAY_THROTTLE_LIMIT, MARKETPLACE_THROTTLE_INTERVAL_MS,
    MARKETPLACE_THROTTLE_LIMIT,
};
use axh_domain::ports::providers::ThrottleBudget;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Request budget of one upstream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThrottleLimitConfig {
    /// Requests started per interval
    pub limit: u32,
    /// Interval length (milliseconds)
    pub interval_ms: u64,
}

impl ThrottleLimitConfig {
    pub fn budget(&self) -> ThrottleBudget {
        ThrottleBudget::new(self.limit, Duration::from_millis(self.interval_ms))
    }
}

/// Per-upstream request budgets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThrottleConfig {
    /// Gateway API (player items, catalogs)
    pub gateway: ThrottleLimitConfig,
    /// Marketplace GraphQL (floor prices)
    pub marketplace: ThrottleLimitConfig,
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self {
            gateway: ThrottleLimitConfig {
                limit: GATEWAY_THROTTLE_LIMIT,
                interval_ms: GATEWAY_THROTTLE_INTERVAL_MS,
            },
            marketplace: ThrottleLimitConfig {
                limit: MARKETPLACE_THROTTLE_LIMIT,
                interval_ms: MARKETPLACE_THROTTLE_INTERVAL_MS,
            },
        }
    }
}
