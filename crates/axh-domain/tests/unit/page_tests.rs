//! Unit tests for page metadata and envelope unification

use axh_domain::value_objects::{Envelope, Page, PageMetadata};
use serde_json::json;

#[test]
fn test_has_next_follows_counts() {
    let page = Page::new(vec![1; 100], 100, 0, 250);
    assert!(page.metadata.has_next);

    let last = Page::new(vec![1; 50], 100, 200, 250);
    assert!(!last.metadata.has_next);
}

#[test]
fn test_total_pages_rounds_up() {
    let metadata = PageMetadata::new(100, 0, 250, 100);
    assert_eq!(metadata.total_pages(), 3);
    assert_eq!(metadata.offset_of_page(2), 200);

    let exact = PageMetadata::new(100, 0, 200, 100);
    assert_eq!(exact.total_pages(), 2);
}

#[test]
fn test_gateway_envelope() {
    let body = json!({
        "_items": [1, 2],
        "_metadata": { "limit": 2, "offset": 0, "total": 5, "hasNext": true },
        "_etag": "x"
    });
    let envelope: Envelope<u32> = serde_json::from_value(body).expect("gateway shape");
    let page = envelope.into_page(2, 0);

    assert_eq!(page.items, vec![1, 2]);
    assert_eq!(page.metadata.total, 5);
    assert!(page.metadata.has_next);
}

#[test]
fn test_listing_envelope_synthesizes_metadata() {
    let body = json!({ "data": [1, 2, 3], "total": 7 });
    let envelope: Envelope<u32> = serde_json::from_value(body).expect("listing shape");
    let page = envelope.into_page(3, 3);

    assert_eq!(page.metadata.limit, 3);
    assert_eq!(page.metadata.offset, 3);
    assert_eq!(page.metadata.total, 7);
    assert!(page.metadata.has_next);
}

#[test]
fn test_gateway_envelope_without_total() {
    let body = json!({
        "_items": [1],
        "_metadata": { "limit": 1, "offset": 4, "hasNext": false }
    });
    let envelope: Envelope<u32> = serde_json::from_value(body).expect("leaderboard shape");
    let page = envelope.into_page(1, 4);

    assert_eq!(page.metadata.total, 5);
    assert_eq!(page.metadata.total_pages(), 5);
}

#[test]
fn test_gateway_envelope_with_next_but_no_total() {
    let body = json!({
        "_items": [1, 2],
        "_metadata": { "limit": 2, "offset": 0, "hasNext": true }
    });
    let envelope: Envelope<u32> = serde_json::from_value(body).expect("gateway shape");
    let page = envelope.into_page(2, 0);

    assert!(page.metadata.has_next);
    assert!(page.metadata.total_unknown());
    assert_eq!(page.metadata.total, 0);
}
