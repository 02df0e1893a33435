use axh_domain::ports::providers::{CacheEntryConfig, CacheProvider};
use axh_providers::cache::NullCacheProvider;

#[tokio::test]
async fn test_null_cache_never_stores() {
    let cache = NullCacheProvider::new();
    cache
        .set_json("rank:abc", "{}", CacheEntryConfig::default())
        .await
        .expect("set");

    assert_eq!(cache.get_json("rank:abc").await.expect("get"), None);
    assert!(cache.keys("*").await.expect("keys").is_empty());
    assert_eq!(cache.size().await.expect("size"), 0);
    assert_eq!(cache.provider_name(), "null");
}
