//! Unit tests for the in-memory cache provider

use axh_domain::ports::providers::{CacheEntryConfig, CacheProvider};
use axh_providers::cache::MokaCacheProvider;
use std::time::Duration;

#[tokio::test]
async fn test_set_then_get() {
    let cache = MokaCacheProvider::new();
    cache
        .set_json("rank:abc", r#"{"vstar":1200}"#, CacheEntryConfig::default())
        .await
        .expect("set");

    let value = cache.get_json("rank:abc").await.expect("get");
    assert_eq!(value.as_deref(), Some(r#"{"vstar":1200}"#));
    assert_eq!(cache.get_json("rank:missing").await.expect("get"), None);
}

#[tokio::test]
async fn test_entry_expires_after_its_own_ttl() {
    let cache = MokaCacheProvider::new();
    let short = CacheEntryConfig::new().with_ttl(Duration::from_millis(50));
    cache.set_json("tokenPrice:axs", "{}", short).await.expect("set");
    cache
        .set_json("itemList:charms", "[]", CacheEntryConfig::persistent())
        .await
        .expect("set");

    assert!(cache.get_json("tokenPrice:axs").await.expect("get").is_some());
    tokio::time::sleep(Duration::from_millis(200)).await;

    assert!(cache.get_json("tokenPrice:axs").await.expect("get").is_none());
    assert!(cache.get_json("itemList:charms").await.expect("get").is_some());
}

#[tokio::test]
async fn test_overwrite_resets_ttl() {
    let cache = MokaCacheProvider::new();
    let short = CacheEntryConfig::new().with_ttl(Duration::from_millis(50));
    cache.set_json("rank:abc", "1", short).await.expect("set");
    cache
        .set_json("rank:abc", "2", CacheEntryConfig::new())
        .await
        .expect("set");

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(cache.get_json("rank:abc").await.expect("get").as_deref(), Some("2"));
}

#[tokio::test]
async fn test_keys_match_glob_patterns() {
    let cache = MokaCacheProvider::new();
    for key in ["playerItems:a", "playerItems:b", "rank:a", "leaderboard:100"] {
        cache
            .set_json(key, "{}", CacheEntryConfig::default())
            .await
            .expect("set");
    }

    let mut items = cache.keys("playerItems:*").await.expect("keys");
    items.sort();
    assert_eq!(items, vec!["playerItems:a", "playerItems:b"]);

    assert_eq!(cache.keys("rank:?").await.expect("keys"), vec!["rank:a"]);
    assert_eq!(cache.keys("*").await.expect("keys").len(), 4);
    assert!(cache.keys("[").await.is_err());
}

#[tokio::test]
async fn test_delete_many_counts_existing_keys() {
    let cache = MokaCacheProvider::new();
    cache
        .set_json("a", "1", CacheEntryConfig::default())
        .await
        .expect("set");
    cache
        .set_json("b", "2", CacheEntryConfig::default())
        .await
        .expect("set");

    let deleted = cache
        .delete_many(&["a".to_string(), "b".to_string(), "c".to_string()])
        .await
        .expect("delete");
    assert_eq!(deleted, 2);
    assert!(!cache.exists("a").await.expect("exists"));
    assert!(!cache.delete("a").await.expect("delete"));
}

#[tokio::test]
async fn test_size_counts_live_entries() {
    let cache = MokaCacheProvider::new();
    for key in ["rank:a", "rank:b", "rank:c"] {
        cache
            .set_json(key, "{}", CacheEntryConfig::default())
            .await
            .expect("set");
    }
    assert_eq!(cache.size().await.expect("size"), 3);

    let keys = cache.keys("rank:*").await.expect("keys");
    cache.delete_many(&keys).await.expect("delete");
    assert_eq!(cache.size().await.expect("size"), 0);
}
