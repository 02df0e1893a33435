//! Unit tests for the throttle gates

use axh_domain::ports::providers::{ThrottleBudget, ThrottleGate};
use axh_providers::throttle::{SlidingWindowThrottle, UnthrottledGate};
use futures::future::join_all;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

async fn start_times(gate: Arc<SlidingWindowThrottle>, calls: usize) -> Vec<Instant> {
    let requests = (0..calls).map(|_| {
        let gate = Arc::clone(&gate);
        async move {
            gate.acquire().await;
            Instant::now()
        }
    });
    let mut starts = join_all(requests).await;
    starts.sort();
    starts
}

#[tokio::test(start_paused = true)]
async fn test_no_more_than_limit_starts_per_interval() {
    let interval = Duration::from_millis(1000);
    let gate = Arc::new(SlidingWindowThrottle::new(
        "gateway",
        ThrottleBudget::new(5, interval),
    ));
    let begin = Instant::now();

    let starts = start_times(gate, 20).await;

    assert_eq!(starts.len(), 20);
    for window in starts.windows(6) {
        assert!(
            window[5].duration_since(window[0]) >= interval,
            "six starts within one interval"
        );
    }
    assert!(starts[..5].iter().all(|start| *start == begin));
    assert!(starts[19].duration_since(begin) >= Duration::from_millis(3000));
}

#[tokio::test(start_paused = true)]
async fn test_slot_frees_after_interval() {
    let gate = SlidingWindowThrottle::new("marketplace", ThrottleBudget::new(1, Duration::from_millis(250)));
    let begin = Instant::now();

    gate.acquire().await;
    gate.acquire().await;

    assert_eq!(Instant::now().duration_since(begin), Duration::from_millis(250));
    assert_eq!(gate.budget().map(|b| b.limit), Some(1));
}

#[test]
fn test_zero_limit_is_raised_to_one() {
    let gate = SlidingWindowThrottle::new("gateway", ThrottleBudget::per_second(0));
    assert_eq!(gate.budget(), Some(ThrottleBudget::per_second(1)));
    assert_eq!(gate.name(), "gateway");
}

#[tokio::test(start_paused = true)]
async fn test_unthrottled_gate_never_waits() {
    let gate = UnthrottledGate;
    let begin = Instant::now();
    for _ in 0..100 {
        gate.acquire().await;
    }
    assert_eq!(Instant::now(), begin);
    assert!(gate.budget().is_none());
}
