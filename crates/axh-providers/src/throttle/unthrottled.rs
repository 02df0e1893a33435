//! Gate that never waits

use async_trait::async_trait;
use axh_domain::ports::providers::throttle::{ThrottleBudget, ThrottleGate};

#[derive(Debug, Clone, Copy, Default)]
pub struct UnthrottledGate;

#[async_trait]
impl ThrottleGate for UnthrottledGate {
    async fn acquire(&self) {}

    fn budget(&self) -> Option<ThrottleBudget> {
        None
    }
}
