//! Unit tests for seasons, item catalogs and identity resolution

use crate::support::{FakeGame, FakeGateway, FakeResolver, RecordingCache, Reply, resolved, season};
use axh_application::use_cases::{CacheAside, ReferenceDataService};
use axh_domain::value_objects::{ItemCatalogKind, ResolvedProfile};
use axh_domain::FetchOutcome;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

struct Fixture {
    store: Arc<RecordingCache>,
    game: Arc<FakeGame>,
    gateway: Arc<FakeGateway>,
    resolver: Arc<FakeResolver>,
    service: ReferenceDataService,
}

fn fixture(resolver_reply: Reply<ResolvedProfile>) -> Fixture {
    let store = Arc::new(RecordingCache::new());
    let game = Arc::new(FakeGame::new("abc123"));
    let gateway = Arc::new(FakeGateway::with_items("abc123", 0));
    let resolver = Arc::new(FakeResolver::new(resolver_reply));
    let service = ReferenceDataService::new(
        CacheAside::new(store.clone()),
        game.clone(),
        gateway.clone(),
        resolver.clone(),
    );
    Fixture {
        store,
        game,
        gateway,
        resolver,
        service,
    }
}

#[tokio::test]
async fn test_seasons_cached_unless_forced() {
    let f = fixture(Reply::Nothing);

    let seasons = f.service.seasons(false).await.found().expect("seasons");
    f.service.seasons(false).await;
    assert_eq!(seasons.0.len(), 2);
    assert_eq!(seasons.latest().and_then(|s| s.id), Some(2));
    assert_eq!(f.game.calls("seasons"), 1);

    f.service.seasons(true).await;
    assert_eq!(f.game.calls("seasons"), 2);
}

#[tokio::test]
async fn test_seasons_live_until_latest_season_ends() {
    let f = fixture(Reply::Nothing);
    let now = chrono::Utc::now().timestamp();
    f.game
        .set_seasons(Reply::Data(vec![season(1, now - 7200, now - 3600), season(2, now - 3600, now + 3600)]));

    f.service.seasons(false).await.found().expect("seasons");

    let writes = f.store.writes();
    let ttl = writes[0].1.ttl.expect("seasons expire");
    assert_eq!(writes[0].0, "origin_seasons");
    assert!(ttl <= Duration::from_secs(3600));
    assert!(ttl >= Duration::from_secs(3500));
}

#[tokio::test]
async fn test_finished_seasons_fall_back_to_default_lifetime() {
    let f = fixture(Reply::Nothing);

    f.service.seasons(false).await;

    assert_eq!(f.store.writes()[0].1.ttl, Some(Duration::from_secs(1800)));
}

#[tokio::test]
async fn test_seasons_served_stale_when_upstream_fails() {
    let f = fixture(Reply::Nothing);
    let fresh = f.service.seasons(false).await.found().expect("seasons");

    f.game.set_seasons(Reply::Fail(503));
    let stale = f.service.seasons(true).await;

    assert_eq!(stale, FetchOutcome::Found(fresh));
}

#[tokio::test]
async fn test_seasons_fail_without_cached_copy() {
    let f = fixture(Reply::Nothing);
    f.game.set_seasons(Reply::Fail(503));

    assert!(f.service.seasons(false).await.is_failed());
}

#[tokio::test]
async fn test_catalog_always_asks_upstream_first() {
    let f = fixture(Reply::Nothing);

    let catalog = f
        .service
        .item_catalog(ItemCatalogKind::Charms)
        .await
        .found()
        .expect("catalog");
    f.service.item_catalog(ItemCatalogKind::Charms).await;

    assert_eq!(catalog, vec![json!({ "id": 1 }), json!({ "id": 2 })]);
    assert_eq!(f.gateway.calls("catalog"), 2);
    let writes = f.store.writes();
    assert_eq!(writes[0].0, "itemList:charms");
    assert_eq!(writes[0].1.ttl, None, "catalog entries never expire");
}

#[tokio::test]
async fn test_catalog_falls_back_to_last_copy() {
    let f = fixture(Reply::Nothing);
    f.service.item_catalog(ItemCatalogKind::Runes).await;

    f.gateway.set_catalog(Reply::Fail(500));
    let fallback = f.service.item_catalog(ItemCatalogKind::Runes).await;
    let never_fetched = f.service.item_catalog(ItemCatalogKind::Cards).await;

    assert_eq!(fallback.found().map(|items| items.len()), Some(2));
    assert!(never_fetched.is_failed());
}

#[tokio::test]
async fn test_resolve_profile_cleans_and_caches_identity() {
    let f = fixture(Reply::Data(resolved("abc-123")));

    let identity = f
        .service
        .resolve_profile("0xABC")
        .await
        .found()
        .expect("identity");
    f.service.resolve_profile("0xabc").await;

    assert_eq!(identity.name, "Lunacian");
    assert_eq!(f.resolver.calls(), 1, "lookups share one lowercase key");
    let writes = f.store.writes();
    assert_eq!(writes[0].0, "id:0xabc");
    assert_eq!(writes[0].1.ttl, Some(Duration::from_secs(86_400)));
}

#[tokio::test]
async fn test_incomplete_identity_is_empty() {
    let f = fixture(Reply::Data(resolved("")));

    assert_eq!(f.service.resolve_profile("0xabc").await, FetchOutcome::Empty);
    assert!(f.store.writes().is_empty());
}

#[tokio::test]
async fn test_unknown_identity_is_empty() {
    let f = fixture(Reply::Nothing);

    assert_eq!(f.service.resolve_profile("ghost").await, FetchOutcome::Empty);
}
