//! Gateway API Port

use crate::value_objects::{ApiResult, ItemCatalogKind, Page, PlayerItem};
use async_trait::async_trait;

#[async_trait]
pub trait GatewayApi: Send + Sync + std::fmt::Debug {
    /// One page of a player's items
    async fn fetch_player_items_page(
        &self,
        user_id: &str,
        limit: u32,
        offset: u32,
    ) -> ApiResult<Page<PlayerItem>>;

    /// Full community catalog of one item kind, passed through untyped
    async fn fetch_item_catalog(&self, kind: ItemCatalogKind) -> ApiResult<Vec<serde_json::Value>>;

    fn provider_name(&self) -> &str;
}
