//! Sliding-window throttle gate
//!
//! Keeps the start times of the last `limit` requests. A caller may start
//! once the oldest of them is at least `interval` old. Waiters queue on a
//! fair mutex, so slots are handed out in arrival order.

use async_trait::async_trait;
use axh_domain::ports::providers::throttle::{ThrottleBudget, ThrottleGate};
use std::collections::VecDeque;
use tokio::sync::Mutex;
use tokio::time::{Instant, sleep_until};
use tracing::trace;

#[derive(Debug)]
pub struct SlidingWindowThrottle {
    name: String,
    budget: ThrottleBudget,
    starts: Mutex<VecDeque<Instant>>,
}

impl SlidingWindowThrottle {
    /// Gate allowing `budget.limit` starts per `budget.interval`
    ///
    /// A zero limit is raised to one.
    pub fn new(name: impl Into<String>, budget: ThrottleBudget) -> Self {
        let budget = ThrottleBudget::new(budget.limit.max(1), budget.interval);
        Self {
            name: name.into(),
            budget,
            starts: Mutex::new(VecDeque::with_capacity(budget.limit as usize)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[async_trait]
impl ThrottleGate for SlidingWindowThrottle {
    async fn acquire(&self) {
        let limit = self.budget.limit as usize;
        let interval = self.budget.interval;
        let mut starts = self.starts.lock().await;

        loop {
            let now = Instant::now();
            while let Some(&oldest) = starts.front() {
                if now.duration_since(oldest) >= interval {
                    starts.pop_front();
                } else {
                    break;
                }
            }

            if starts.len() < limit {
                starts.push_back(now);
                return;
            }

            if let Some(&oldest) = starts.front() {
                trace!(gate = %self.name, "throttle window full, waiting");
                sleep_until(oldest + interval).await;
            }
        }
    }

    fn budget(&self) -> Option<ThrottleBudget> {
        Some(self.budget)
    }
}
