//! Unit tests for the paginated fetch merger

use crate::support::failure;
use axh_application::use_cases::{DedupStrategy, PageMerger};
use axh_domain::ports::providers::ThrottleBudget;
use axh_domain::{ApiResult, Page, PageMetadata};
use axh_providers::throttle::{SlidingWindowThrottle, UnthrottledGate};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::Instant;

/// A listing of `total` numbered rows served in pages
struct Listing {
    rows: Vec<u32>,
    limit: u32,
    failing: HashSet<u32>,
    requested: Mutex<Vec<(u32, Instant)>>,
}

impl Listing {
    fn new(total: u32, limit: u32) -> Self {
        Self {
            rows: (0..total).collect(),
            limit,
            failing: HashSet::new(),
            requested: Mutex::new(Vec::new()),
        }
    }

    fn failing_at(mut self, offset: u32) -> Self {
        self.failing.insert(offset);
        self
    }

    fn page(&self, offset: u32) -> ApiResult<Page<u32>> {
        if self.failing.contains(&offset) {
            return Err(failure("getPlayerItems", 500));
        }
        let start = (offset as usize).min(self.rows.len());
        let end = (start + self.limit as usize).min(self.rows.len());
        let total = u32::try_from(self.rows.len()).expect("small listing");
        Ok(Page::new(self.rows[start..end].to_vec(), self.limit, offset, total))
    }

    async fn fetch(&self, offset: u32) -> ApiResult<Page<u32>> {
        self.requested
            .lock()
            .expect("lock")
            .push((offset, Instant::now()));
        self.page(offset)
    }

    fn offsets(&self) -> Vec<u32> {
        let mut offsets: Vec<u32> = self
            .requested
            .lock()
            .expect("lock")
            .iter()
            .map(|(offset, _)| *offset)
            .collect();
        offsets.sort_unstable();
        offsets
    }
}

fn unthrottled() -> PageMerger {
    PageMerger::new(Arc::new(UnthrottledGate))
}

#[tokio::test]
async fn test_single_page_needs_no_more_calls() {
    let listing = Listing::new(40, 100);
    let first = listing.page(0).expect("first page");

    let rows = unthrottled()
        .merge(first, DedupStrategy::KeepAll, |offset| listing.fetch(offset))
        .await;

    assert_eq!(rows.len(), 40);
    assert!(listing.offsets().is_empty());
}

#[tokio::test]
async fn test_remaining_pages_requested_once_each() {
    let listing = Listing::new(250, 100);
    let first = listing.page(0).expect("first page");

    let rows = unthrottled()
        .merge(first, DedupStrategy::KeepAll, |offset| listing.fetch(offset))
        .await;

    assert_eq!(listing.offsets(), vec![100, 200]);
    assert_eq!(rows, (0..250).collect::<Vec<u32>>(), "merged in page order");
}

#[tokio::test]
async fn test_exact_multiple_has_no_trailing_request() {
    let listing = Listing::new(200, 100);
    let first = listing.page(0).expect("first page");

    let rows = unthrottled()
        .merge(first, DedupStrategy::KeepAll, |offset| listing.fetch(offset))
        .await;

    assert_eq!(listing.offsets(), vec![100]);
    assert_eq!(rows.len(), 200);
}

#[tokio::test]
async fn test_failed_page_is_skipped() {
    let listing = Listing::new(350, 100).failing_at(200);
    let first = listing.page(0).expect("first page");

    let rows = unthrottled()
        .merge(first, DedupStrategy::KeepAll, |offset| listing.fetch(offset))
        .await;

    assert_eq!(listing.offsets(), vec![100, 200, 300]);
    assert_eq!(rows.len(), 250);
    assert!(!rows.contains(&250));
    assert!(rows.contains(&349));
}

#[tokio::test]
async fn test_dedup_by_key_keeps_first_occurrence() {
    let first = Page::new(vec![1_u32, 2, 3], 3, 0, 6);
    let overlapping = |offset: u32| async move {
        assert_eq!(offset, 3);
        ApiResult::Ok(Page::new(vec![3_u32, 4, 1], 3, offset, 6))
    };

    let merger = unthrottled();
    let kept = merger
        .merge(first.clone(), DedupStrategy::KeepAll, overlapping)
        .await;
    let unique = merger
        .merge(first, DedupStrategy::ByKey(|n: &u32| n.to_string()), overlapping)
        .await;

    assert_eq!(kept, vec![1, 2, 3, 3, 4, 1]);
    assert_eq!(unique, vec![1, 2, 3, 4]);
}

#[tokio::test(start_paused = true)]
async fn test_pages_wait_for_throttle_slots() {
    let gate = SlidingWindowThrottle::new(
        "gateway",
        ThrottleBudget::new(2, Duration::from_millis(1000)),
    );
    let merger = PageMerger::new(Arc::new(gate));
    let listing = Listing::new(500, 100);
    let first = listing.page(0).expect("first page");
    let begin = Instant::now();

    let rows = merger
        .merge(first, DedupStrategy::KeepAll, |offset| listing.fetch(offset))
        .await;

    assert_eq!(rows.len(), 500);
    let mut starts: Vec<Instant> = listing
        .requested
        .lock()
        .expect("lock")
        .iter()
        .map(|(_, at)| *at)
        .collect();
    starts.sort();
    assert_eq!(starts.len(), 4);
    assert_eq!(starts[1], begin, "two slots are free immediately");
    assert!(starts[2].duration_since(begin) >= Duration::from_millis(1000));
    assert!(starts[3].duration_since(begin) >= Duration::from_millis(1000));
}

#[tokio::test]
async fn test_bogus_total_is_bounded_by_the_page_cap() {
    let first = Page::new(vec![0_u32; 10], 10, 0, u32::MAX);
    let requested = Mutex::new(Vec::new());

    let rows = unthrottled()
        .with_max_pages(5)
        .merge(first, DedupStrategy::KeepAll, |offset| {
            requested.lock().expect("lock").push(offset);
            async move { ApiResult::Ok(Page::new(vec![offset; 10], 10, offset, u32::MAX)) }
        })
        .await;

    let mut offsets = requested.into_inner().expect("lock");
    offsets.sort_unstable();
    assert_eq!(offsets, vec![10, 20, 30, 40]);
    assert_eq!(rows.len(), 50);
}

/// Page that only says whether another one follows
fn open_ended(offset: u32, len: u32, has_next: bool) -> Page<u32> {
    Page {
        items: (offset..offset + len).collect(),
        metadata: PageMetadata {
            limit: 10,
            offset,
            total: 0,
            has_next,
        },
    }
}

#[tokio::test]
async fn test_unknown_total_walks_pages_until_the_last() {
    let requested = Mutex::new(Vec::new());

    let rows = unthrottled()
        .merge(open_ended(0, 10, true), DedupStrategy::KeepAll, |offset| {
            requested.lock().expect("lock").push(offset);
            async move { ApiResult::Ok(open_ended(offset, if offset < 20 { 10 } else { 4 }, offset < 20)) }
        })
        .await;

    assert_eq!(requested.into_inner().expect("lock"), vec![10, 20]);
    assert_eq!(rows, (0..24).collect::<Vec<u32>>());
}

#[tokio::test]
async fn test_unknown_total_stops_at_a_failed_page() {
    let requested = Mutex::new(Vec::new());

    let rows = unthrottled()
        .merge(open_ended(0, 10, true), DedupStrategy::KeepAll, |offset| {
            requested.lock().expect("lock").push(offset);
            async move {
                if offset == 20 {
                    Err(failure("getPlayerItems", 502))
                } else {
                    Ok(open_ended(offset, 10, true))
                }
            }
        })
        .await;

    assert_eq!(requested.into_inner().expect("lock"), vec![10, 20]);
    assert_eq!(rows.len(), 20);
}

#[tokio::test]
async fn test_unknown_total_respects_the_page_cap() {
    let requested = Mutex::new(Vec::new());

    let rows = unthrottled()
        .with_max_pages(3)
        .merge(open_ended(0, 10, true), DedupStrategy::KeepAll, |offset| {
            requested.lock().expect("lock").push(offset);
            async move { ApiResult::Ok(open_ended(offset, 10, true)) }
        })
        .await;

    assert_eq!(requested.into_inner().expect("lock"), vec![10, 20]);
    assert_eq!(rows.len(), 30);
}
