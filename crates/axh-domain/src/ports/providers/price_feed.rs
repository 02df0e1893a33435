//! Token Price Feed Port

use crate::value_objects::{ApiResult, MarketData, Token};
use async_trait::async_trait;

#[async_trait]
pub trait PriceFeed: Send + Sync + std::fmt::Debug {
    async fn fetch_market_data(&self, token: Token) -> ApiResult<MarketData>;

    fn provider_name(&self) -> &str;
}
