//! CoinGecko price feed

use super::game_api::trim_base;
use crate::constants::{COINGECKO_API_URL, UPSTREAM_COINGECKO};
use crate::utils::{HttpResponseUtils, UpstreamCall};
use async_trait::async_trait;
use axh_domain::ports::providers::PriceFeed;
use axh_domain::value_objects::{MarketData, Token};
use axh_domain::ApiResult;
use reqwest::Client;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct CoinResponse {
    market_data: MarketData,
}

#[derive(Debug, Clone)]
pub struct CoinGeckoClient {
    http_client: Client,
    base_url: String,
}

impl CoinGeckoClient {
    pub fn new(http_client: Client, base_url: Option<String>) -> Self {
        Self {
            http_client,
            base_url: trim_base(base_url, COINGECKO_API_URL),
        }
    }
}

#[async_trait]
impl PriceFeed for CoinGeckoClient {
    async fn fetch_market_data(&self, token: Token) -> ApiResult<MarketData> {
        let call = UpstreamCall::new(UPSTREAM_COINGECKO, "getTokenPrice").about(token.symbol());
        let response = self
            .http_client
            .get(format!("{}/api/v3/coins/{}", self.base_url, token.coin_id()))
            .send()
            .await
            .map_err(|e| call.transport_error(&e))?;

        let body: CoinResponse = HttpResponseUtils::check_and_parse(response, call).await?;
        Ok(body.market_data)
    }

    fn provider_name(&self) -> &str {
        "coingecko"
    }
}
