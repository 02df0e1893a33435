//! Application bootstrap
//!
//! ```text
//! AppConfig → cache registry (linkme) → CacheAside ─┐
//!           → throttle gates ──────────────────────┼→ use cases → AppContext
//!           → HTTP client → upstream clients ──────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let context = init_app(AppConfig::default())?;
//! let outcome = context.player_data().items("abc123").await;
//! ```

use crate::config::AppConfig;
use axh_application::ports::registry::resolve_cache_provider;
use axh_application::use_cases::{
    BattleReplayService, CacheAdminService, CacheAside, ContestService, MarketService,
    MinPricePaging, PageMerger, PlayerDataService, PlayerDataSettings, PlayerStatsService,
    PriceBoard, PriceRefresher, ReferenceDataService,
};
use axh_domain::error::{Error, Result};
use axh_domain::ports::providers::{CacheProvider, ThrottleGate};
use axh_providers::throttle::SlidingWindowThrottle;
use axh_providers::upstream::{
    CoinGeckoClient, ContestApiClient, GameApiClient, GatewayApiClient, MarketplaceClient,
    ReplayStorageClient, RoninRestClient,
};
use std::sync::Arc;
use tracing::{info, warn};

/// Wired application services
///
/// Cheap to share: every service holds `Arc`s to the same cache store,
/// gates and clients.
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,

    cache: Arc<dyn CacheProvider>,
    gateway_gate: Arc<dyn ThrottleGate>,
    marketplace_gate: Arc<dyn ThrottleGate>,

    player_stats: PlayerStatsService,
    market: MarketService,
    reference: ReferenceDataService,
    contests: ContestService,
    battle_replays: BattleReplayService,
    cache_admin: CacheAdminService,
    price_board: Arc<PriceBoard>,
    price_refresher: Arc<PriceRefresher>,
}

impl AppContext {
    /// Active cache store
    pub fn cache(&self) -> Arc<dyn CacheProvider> {
        Arc::clone(&self.cache)
    }

    /// Throttle gate shared by every gateway request
    pub fn gateway_gate(&self) -> Arc<dyn ThrottleGate> {
        Arc::clone(&self.gateway_gate)
    }

    /// Throttle gate shared by every marketplace request
    pub fn marketplace_gate(&self) -> Arc<dyn ThrottleGate> {
        Arc::clone(&self.marketplace_gate)
    }

    pub fn player_data(&self) -> &PlayerDataService {
        self.player_stats.data()
    }

    pub fn player_stats(&self) -> &PlayerStatsService {
        &self.player_stats
    }

    pub fn market(&self) -> &MarketService {
        &self.market
    }

    pub fn reference(&self) -> &ReferenceDataService {
        &self.reference
    }

    pub fn contests(&self) -> &ContestService {
        &self.contests
    }

    pub fn battle_replays(&self) -> &BattleReplayService {
        &self.battle_replays
    }

    pub fn cache_admin(&self) -> &CacheAdminService {
        &self.cache_admin
    }

    /// In-memory floor prices maintained by the refresh job
    pub fn price_board(&self) -> Arc<PriceBoard> {
        Arc::clone(&self.price_board)
    }

    pub fn price_refresher(&self) -> Arc<PriceRefresher> {
        Arc::clone(&self.price_refresher)
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("cache_provider", &self.cache.provider_name())
            .field("gateway_gate", &self.gateway_gate)
            .field("marketplace_gate", &self.marketplace_gate)
            .finish_non_exhaustive()
    }
}

/// Build every service from configuration
///
/// Fails when the cache store cannot be created or the HTTP client cannot
/// be built. Upstreams are not contacted.
pub fn init_app(config: AppConfig) -> Result<AppContext> {
    let cache = resolve_cache_provider(&config.cache.provider_config())
        .map_err(|message| {
            Error::configuration(format!("Failed to create cache provider: {}", message))
        })?;
    info!(provider = cache.provider_name(), "Cache provider ready");

    let http = config.upstream.http_client_config().build_client()?;
    let upstream = &config.upstream;

    if upstream.gateway_api_keys.is_empty() {
        warn!("No gateway API keys configured; item and catalog requests will be rejected");
    }

    let game = Arc::new(GameApiClient::new(
        http.clone(),
        Some(upstream.game_api_url.clone()),
        Some(upstream.battles_api_url.clone()),
    ));
    let gateway = Arc::new(GatewayApiClient::new(
        http.clone(),
        Some(upstream.gateway_api_url.clone()),
        upstream.gateway_api_keys.clone(),
    ));
    let marketplace = Arc::new(MarketplaceClient::new(
        http.clone(),
        Some(upstream.marketplace_url.clone()),
    ));
    let feed = Arc::new(CoinGeckoClient::new(
        http.clone(),
        Some(upstream.coingecko_url.clone()),
    ));
    let resolver = Arc::new(RoninRestClient::new(
        http.clone(),
        Some(upstream.ronin_rest_url.clone()),
    ));
    let contest_api = Arc::new(ContestApiClient::new(
        http.clone(),
        Some(upstream.contest_api_url.clone()),
    ));
    let replay_storage = Arc::new(ReplayStorageClient::new(
        http,
        Some(upstream.replay_storage_url.clone()),
    ));

    let gateway_gate: Arc<dyn ThrottleGate> = Arc::new(SlidingWindowThrottle::new(
        "gateway",
        config.throttle.gateway.budget(),
    ));
    let marketplace_gate: Arc<dyn ThrottleGate> = Arc::new(SlidingWindowThrottle::new(
        "marketplace",
        config.throttle.marketplace.budget(),
    ));

    let cache_aside = CacheAside::new(Arc::clone(&cache));

    let settings = PlayerDataSettings {
        ttl: config.cache.player_ttl(),
        profile_ttl: config.cache.profile_ttl(),
        ..PlayerDataSettings::default()
    };
    let player_data = PlayerDataService::new(
        cache_aside.clone(),
        game.clone(),
        gateway.clone(),
        PageMerger::new(Arc::clone(&gateway_gate)).with_max_pages(upstream.max_pages),
        settings,
    );

    let market = MarketService::new(
        cache_aside.clone(),
        feed,
        marketplace,
        Arc::clone(&marketplace_gate),
        MinPricePaging {
            page_size: config.jobs.price_page_size,
            max_pages: config.jobs.price_max_pages,
        },
    );

    let contests = ContestService::new(cache_aside.clone(), contest_api);
    let battle_replays = BattleReplayService::new(cache_aside.clone(), replay_storage);
    let reference = ReferenceDataService::new(cache_aside, game, gateway, resolver);

    let price_board = Arc::new(PriceBoard::new());
    let price_refresher = Arc::new(PriceRefresher::new(
        market.clone(),
        Arc::clone(&price_board),
        config.jobs.price_token_types.clone(),
    ));

    info!("Application services initialized");

    Ok(AppContext {
        config: Arc::new(config),
        cache_admin: CacheAdminService::new(Arc::clone(&cache)),
        cache,
        gateway_gate,
        marketplace_gate,
        player_stats: PlayerStatsService::new(player_data),
        market,
        reference,
        contests,
        battle_replays,
        price_board,
        price_refresher,
    })
}
