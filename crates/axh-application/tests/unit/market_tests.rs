//! Unit tests for token prices and marketplace floor prices

use crate::support::{
    FakeFeed, FakeMarketplace, RecordingCache, Reply, market_data, min_price, moka,
};
use axh_application::ports::providers::{CacheProvider, ThrottleBudget, ThrottleGate};
use axh_application::use_cases::{CacheAside, MarketService, MinPricePaging};
use axh_domain::value_objects::{ItemMinimumPrice, Token, TokenType};
use axh_domain::FetchOutcome;
use axh_providers::cache::MokaCacheProvider;
use axh_providers::throttle::{SlidingWindowThrottle, UnthrottledGate};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

fn charms(total: usize) -> Vec<ItemMinimumPrice> {
    (0..total).map(|i| min_price(TokenType::Charm, i, true)).collect()
}

fn market(
    cache: Arc<MokaCacheProvider>,
    feed: Arc<FakeFeed>,
    marketplace: Arc<FakeMarketplace>,
    gate: Arc<dyn ThrottleGate>,
    paging: MinPricePaging,
) -> MarketService {
    MarketService::new(CacheAside::new(cache), feed, marketplace, gate, paging)
}

fn with_marketplace(marketplace: Arc<FakeMarketplace>, paging: MinPricePaging) -> MarketService {
    market(
        moka(),
        Arc::new(FakeFeed::new(Reply::Nothing)),
        marketplace,
        Arc::new(UnthrottledGate),
        paging,
    )
}

#[tokio::test]
async fn test_market_data_is_cached_for_a_minute() {
    let cache = moka();
    let feed = Arc::new(FakeFeed::new(Reply::Data(market_data(6.5))));
    let service = market(
        cache.clone(),
        feed.clone(),
        Arc::new(FakeMarketplace::new(Vec::new())),
        Arc::new(UnthrottledGate),
        MinPricePaging::default(),
    );

    let price = service
        .token_price(Token::Axs, "USD")
        .await
        .found()
        .expect("usd quote");
    service.market_data(Token::Axs).await;

    assert!((price.price - 6.5).abs() < f64::EPSILON);
    assert_eq!(price.change, "1.3%");
    assert_eq!(price.source, "COINGECKO_API");
    assert_eq!(feed.calls(), 1);
    assert!(cache.exists("tokenPrice:axs").await.expect("exists"));
}

#[tokio::test]
async fn test_missing_currency_is_empty() {
    let service = market(
        moka(),
        Arc::new(FakeFeed::new(Reply::Data(market_data(0.002)))),
        Arc::new(FakeMarketplace::new(Vec::new())),
        Arc::new(UnthrottledGate),
        MinPricePaging::default(),
    );

    assert_eq!(service.token_price(Token::Slp, "eur").await, FetchOutcome::Empty);
}

#[tokio::test]
async fn test_feed_failures_and_blank_data() {
    let failing = market(
        moka(),
        Arc::new(FakeFeed::new(Reply::Fail(429))),
        Arc::new(FakeMarketplace::new(Vec::new())),
        Arc::new(UnthrottledGate),
        MinPricePaging::default(),
    );
    let blank = market(
        moka(),
        Arc::new(FakeFeed::new(Reply::Nothing)),
        Arc::new(FakeMarketplace::new(Vec::new())),
        Arc::new(UnthrottledGate),
        MinPricePaging::default(),
    );

    let err = failing.market_data(Token::Ron).await;
    assert!(err.error().is_some_and(|e| e.is_rate_limited()));
    assert_eq!(blank.market_data(Token::Ron).await, FetchOutcome::Empty);
}

#[tokio::test]
async fn test_min_prices_walk_windows_until_short_one() {
    let marketplace = Arc::new(FakeMarketplace::new(charms(250)));
    let service = with_marketplace(marketplace.clone(), MinPricePaging::default());

    let prices = service
        .min_prices(TokenType::Charm, &[])
        .await
        .found()
        .expect("prices");

    assert_eq!(prices.len(), 250);
    assert_eq!(marketplace.windows(), vec![(0, 100), (100, 100), (200, 100)]);
}

#[tokio::test]
async fn test_unlisted_tokens_are_dropped() {
    let mut prices = charms(3);
    prices.push(min_price(TokenType::Charm, 3, false));
    prices.push(min_price(TokenType::Rune, 4, true));
    let service = with_marketplace(Arc::new(FakeMarketplace::new(prices)), MinPricePaging::default());

    let charms = service
        .min_prices(TokenType::Charm, &[])
        .await
        .found()
        .expect("charms");
    let runes = service
        .min_prices(TokenType::Rune, &[])
        .await
        .found()
        .expect("runes");

    assert_eq!(charms.len(), 3);
    assert!(charms.iter().all(ItemMinimumPrice::is_listed));
    assert_eq!(runes.len(), 1);
}

#[tokio::test]
async fn test_nothing_listed_is_empty() {
    let prices = vec![min_price(TokenType::Rune, 0, false)];
    let service = with_marketplace(Arc::new(FakeMarketplace::new(prices)), MinPricePaging::default());

    assert_eq!(service.min_prices(TokenType::Rune, &[]).await, FetchOutcome::Empty);
}

#[tokio::test]
async fn test_requested_ids_take_a_single_window() {
    let marketplace = Arc::new(FakeMarketplace::new(charms(250)));
    let service = with_marketplace(marketplace.clone(), MinPricePaging::default());
    let ids = vec!["5".to_string(), "7".to_string()];

    let prices = service
        .min_prices(TokenType::Charm, &ids)
        .await
        .found()
        .expect("prices");

    assert_eq!(prices.len(), 2);
    assert_eq!(marketplace.windows(), vec![(0, 2)]);
}

#[tokio::test]
async fn test_window_failures() {
    let first_fails = with_marketplace(
        Arc::new(FakeMarketplace::new(charms(250)).failing_from(0)),
        MinPricePaging::default(),
    );
    let later_fails = with_marketplace(
        Arc::new(FakeMarketplace::new(charms(250)).failing_from(100)),
        MinPricePaging::default(),
    );

    assert!(first_fails.min_prices(TokenType::Charm, &[]).await.is_failed());
    let partial = later_fails
        .min_prices(TokenType::Charm, &[])
        .await
        .found()
        .expect("first window kept");
    assert_eq!(partial.len(), 100);
}

#[tokio::test]
async fn test_window_count_is_capped() {
    let marketplace = Arc::new(FakeMarketplace::new(charms(100)));
    let paging = MinPricePaging {
        page_size: 10,
        max_pages: 3,
    };
    let service = with_marketplace(marketplace.clone(), paging);

    let prices = service
        .min_prices(TokenType::Charm, &[])
        .await
        .found()
        .expect("prices");

    assert_eq!(prices.len(), 30);
    assert_eq!(marketplace.windows().len(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_windows_wait_for_marketplace_gate() {
    let gate = Arc::new(SlidingWindowThrottle::new(
        "marketplace",
        ThrottleBudget::new(1, Duration::from_millis(500)),
    ));
    let service = market(
        moka(),
        Arc::new(FakeFeed::new(Reply::Nothing)),
        Arc::new(FakeMarketplace::new(charms(250))),
        gate,
        MinPricePaging::default(),
    );
    let begin = Instant::now();

    service.min_prices(TokenType::Charm, &[]).await;

    assert!(begin.elapsed() >= Duration::from_millis(1000));
}

#[tokio::test]
async fn test_axie_details_are_normalized_and_kept_three_hours() {
    let store = Arc::new(RecordingCache::new());
    let marketplace = Arc::new(FakeMarketplace::new(Vec::new()));
    let service = MarketService::new(
        CacheAside::new(store.clone()),
        Arc::new(FakeFeed::new(Reply::Nothing)),
        marketplace.clone(),
        Arc::new(UnthrottledGate),
        MinPricePaging::default(),
    );

    let details = service.axie_details(42).await.found().expect("axie");
    service.axie_details(42).await;

    assert_eq!(details.class.as_deref(), Some("reptile"));
    assert_eq!(
        details.url.as_deref(),
        Some("https://app.axieinfinity.com/marketplace/axies/42")
    );
    assert_eq!(marketplace.calls("axie"), 1);
    let writes = store.writes();
    assert_eq!(writes[0].0, "axieDetails:42");
    assert_eq!(writes[0].1.ttl, Some(Duration::from_secs(3 * 60 * 60)));
}

#[tokio::test]
async fn test_unknown_axie_is_empty() {
    let marketplace = Arc::new(FakeMarketplace::new(Vec::new()));
    marketplace.set_axie(Reply::Nothing);
    let service = with_marketplace(marketplace, MinPricePaging::default());

    assert!(service.axie_details(7).await.is_empty());
}

#[tokio::test]
async fn test_account_lookup_normalizes_the_address() {
    let store = Arc::new(RecordingCache::new());
    let marketplace = Arc::new(FakeMarketplace::new(Vec::new()));
    let service = MarketService::new(
        CacheAside::new(store.clone()),
        Arc::new(FakeFeed::new(Reply::Nothing)),
        marketplace.clone(),
        Arc::new(UnthrottledGate),
        MinPricePaging::default(),
    );

    let profile = service
        .account_by_address("ronin:ABCDEF0123456789ABCDEF0123456789ABCDEF01")
        .await
        .found()
        .expect("account");
    service
        .account_by_address("0xabcdef0123456789abcdef0123456789abcdef01")
        .await;

    let address = "0xabcdef0123456789abcdef0123456789abcdef01";
    assert_eq!(profile.account_id, "acc-1");
    assert_eq!(profile.ronin, address);
    assert_eq!(marketplace.looked_up_addresses(), vec![address.to_string()]);
    let writes = store.writes();
    assert_eq!(writes[0].0, format!("id:{address}"));
    assert_eq!(writes[0].1.ttl, None);
}

#[tokio::test]
async fn test_failed_account_lookup_is_not_cached() {
    let store = Arc::new(RecordingCache::new());
    let marketplace = Arc::new(FakeMarketplace::new(Vec::new()));
    marketplace.set_account(Reply::Fail(502));
    let service = MarketService::new(
        CacheAside::new(store.clone()),
        Arc::new(FakeFeed::new(Reply::Nothing)),
        marketplace,
        Arc::new(UnthrottledGate),
        MinPricePaging::default(),
    );

    assert!(service.account_by_address("0xabc").await.is_failed());
    assert!(store.writes().is_empty());
}
