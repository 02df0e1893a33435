//! Marketplace Port

use crate::value_objects::{ApiResult, AxieDetails, ItemMinimumPrice, TokenType};
use async_trait::async_trait;

#[async_trait]
pub trait MarketplaceApi: Send + Sync + std::fmt::Debug {
    /// One window (`from`, `size`) of floor prices for a token type
    ///
    /// An empty `token_ids` slice asks for every token of the type. Results
    /// include unlisted tokens; filtering is up to the caller.
    async fn fetch_min_prices(
        &self,
        token_type: TokenType,
        token_ids: &[String],
        from: u32,
        size: u32,
    ) -> ApiResult<Vec<ItemMinimumPrice>>;

    /// Full details of one axie, `None` when the marketplace has no such axie
    async fn fetch_axie(&self, axie_id: u64) -> ApiResult<Option<AxieDetails>>;

    /// Account id behind a 0x address, `None` when no profile uses it
    async fn fetch_account_id(&self, address: &str) -> ApiResult<Option<String>>;

    fn provider_name(&self) -> &str;
}
