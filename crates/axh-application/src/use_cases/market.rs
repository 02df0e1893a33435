//! Market service
//!
//! Token prices from the price feed (cached briefly) and marketplace floor
//! prices (never cached, refreshed in bulk by the price job). Axie details
//! and account lookups share the marketplace gate.

use super::cache_aside::{CacheAside, CachePolicy};
use crate::ports::providers::{MarketplaceApi, PriceFeed, ThrottleGate};
use axh_domain::cache_keys;
use axh_domain::constants::{AXIE_DETAILS_TTL_SECS, TOKEN_PRICE_TTL_SECS};
use axh_domain::normalize::{AddressFormat, parse_address};
use axh_domain::value_objects::{
    AxieDetails, ItemMinimumPrice, MarketData, ResolvedProfile, Token, TokenPrice, TokenType,
};
use axh_domain::{ApiError, FetchOutcome};
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Marketplace paging limits
#[derive(Debug, Clone, Copy)]
pub struct MinPricePaging {
    /// Tokens requested per window
    pub page_size: u32,
    /// Upper bound on windows per refresh
    pub max_pages: u32,
}

impl Default for MinPricePaging {
    fn default() -> Self {
        Self {
            page_size: 100,
            max_pages: 20,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MarketService {
    cache: CacheAside,
    feed: Arc<dyn PriceFeed>,
    marketplace: Arc<dyn MarketplaceApi>,
    marketplace_gate: Arc<dyn ThrottleGate>,
    paging: MinPricePaging,
}

impl MarketService {
    pub fn new(
        cache: CacheAside,
        feed: Arc<dyn PriceFeed>,
        marketplace: Arc<dyn MarketplaceApi>,
        marketplace_gate: Arc<dyn ThrottleGate>,
        paging: MinPricePaging,
    ) -> Self {
        Self {
            cache,
            feed,
            marketplace,
            marketplace_gate,
            paging,
        }
    }

    /// Market data block of a token
    pub async fn market_data(&self, token: Token) -> FetchOutcome<MarketData> {
        let key = cache_keys::token_price(token);
        self.cache
            .fetch_with_cache(&key, CachePolicy::ttl_secs(TOKEN_PRICE_TTL_SECS), || async {
                let data = self.feed.fetch_market_data(token).await?;
                Ok::<_, ApiError>(Some(data))
            })
            .await
    }

    /// Price of `token` in `currency`; `Empty` when the feed has no quote
    /// for that currency
    pub async fn token_price(&self, token: Token, currency: &str) -> FetchOutcome<TokenPrice> {
        self.market_data(token)
            .await
            .and_then(|data| data.quote(currency).map_or(FetchOutcome::Empty, FetchOutcome::Found))
    }

    /// Floor prices of listed tokens of one type
    ///
    /// Windows of `page_size` are requested in order, each after a slot from
    /// the marketplace gate, until a short window comes back. A failure on
    /// the first window fails the call; a later failure keeps what was
    /// already collected.
    pub async fn min_prices(
        &self,
        token_type: TokenType,
        token_ids: &[String],
    ) -> FetchOutcome<Vec<ItemMinimumPrice>> {
        let size = if token_ids.is_empty() {
            self.paging.page_size
        } else {
            u32::try_from(token_ids.len()).unwrap_or(u32::MAX)
        };
        let mut prices = Vec::new();

        for page in 0..self.paging.max_pages.max(1) {
            self.marketplace_gate.acquire().await;
            let from = page.saturating_mul(size);
            match self
                .marketplace
                .fetch_min_prices(token_type, token_ids, from, size)
                .await
            {
                Ok(window) => {
                    let received = window.len();
                    prices.extend(window.into_iter().filter(ItemMinimumPrice::is_listed));
                    if received < size as usize || !token_ids.is_empty() {
                        break;
                    }
                }
                Err(err) if page == 0 => {
                    error!(
                        upstream = %err.upstream,
                        token_type = token_type.as_str(),
                        "{err}"
                    );
                    return FetchOutcome::Failed(err);
                }
                Err(err) => {
                    warn!(page, error = %err, "min price window failed, keeping earlier windows");
                    break;
                }
            }
        }

        debug!(token_type = token_type.as_str(), listed = prices.len(), "min prices fetched");
        if prices.is_empty() {
            FetchOutcome::Empty
        } else {
            FetchOutcome::Found(prices)
        }
    }

    /// Marketplace details of one axie, kept for three hours
    pub async fn axie_details(&self, axie_id: u64) -> FetchOutcome<AxieDetails> {
        let key = cache_keys::axie_details(axie_id);
        self.cache
            .fetch_with_cache(&key, CachePolicy::ttl_secs(AXIE_DETAILS_TTL_SECS), || async {
                self.marketplace_gate.acquire().await;
                self.marketplace.fetch_axie(axie_id).await
            })
            .await
    }

    /// Account id behind a ronin or 0x address
    ///
    /// The address is looked up in lowercase `0x` form and the identity is
    /// stored without expiry in the `id:` namespace the resolver uses.
    pub async fn account_by_address(&self, address: &str) -> FetchOutcome<ResolvedProfile> {
        let address = parse_address(address.trim(), AddressFormat::Ethereum);
        let key = cache_keys::resolved_profile(&address);
        self.cache
            .fetch_with_cache(&key, CachePolicy::persistent(), || async {
                self.marketplace_gate.acquire().await;
                let account_id = self.marketplace.fetch_account_id(&address).await?;
                Ok::<_, ApiError>(account_id.map(|account_id| ResolvedProfile {
                    account_id,
                    ronin: address.clone(),
                    ..ResolvedProfile::default()
                }))
            })
            .await
    }
}
