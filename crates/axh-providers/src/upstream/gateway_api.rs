//! Sky Mavis API gateway client
//!
//! Every request carries an `X-API-Key` picked at random from the
//! configured keys, spreading load over the per-key quotas.

use super::game_api::trim_base;
use crate::constants::{GATEWAY_API_KEY_HEADER, GATEWAY_API_URL, UPSTREAM_GATEWAY};
use crate::utils::{HttpResponseUtils, UpstreamCall};
use async_trait::async_trait;
use axh_domain::ports::providers::GatewayApi;
use axh_domain::value_objects::{Envelope, ItemCatalogKind, Page, PlayerItem};
use axh_domain::{ApiError, ApiResult};
use rand::seq::IndexedRandom;
use reqwest::{Client, RequestBuilder};

#[derive(Clone)]
pub struct GatewayApiClient {
    http_client: Client,
    base_url: String,
    api_keys: Vec<String>,
}

impl GatewayApiClient {
    /// Blank keys are dropped; with no key left every call fails
    pub fn new(http_client: Client, base_url: Option<String>, api_keys: Vec<String>) -> Self {
        Self {
            http_client,
            base_url: trim_base(base_url, GATEWAY_API_URL),
            api_keys: api_keys
                .into_iter()
                .map(|key| key.trim().to_string())
                .filter(|key| !key.is_empty())
                .collect(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn key_count(&self) -> usize {
        self.api_keys.len()
    }

    fn get(&self, path: &str, call: UpstreamCall<'_>) -> Result<RequestBuilder, ApiError> {
        let key = self
            .api_keys
            .choose(&mut rand::rng())
            .ok_or_else(|| call.error("Gateway API Key(s) Not Found"))?;

        Ok(self
            .http_client
            .get(format!("{}{path}", self.base_url))
            .header(GATEWAY_API_KEY_HEADER, key))
    }
}

impl std::fmt::Debug for GatewayApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayApiClient")
            .field("base_url", &self.base_url)
            .field("api_keys", &self.api_keys.len())
            .finish()
    }
}

#[async_trait]
impl GatewayApi for GatewayApiClient {
    async fn fetch_player_items_page(
        &self,
        user_id: &str,
        limit: u32,
        offset: u32,
    ) -> ApiResult<Page<PlayerItem>> {
        let call = UpstreamCall::new(UPSTREAM_GATEWAY, "getPlayerItems").about(user_id);
        let response = self
            .get(&format!("/origins/v2/community/users/{user_id}/items"), call)?
            .query(&[("limit", limit), ("offset", offset)])
            .send()
            .await
            .map_err(|e| call.transport_error(&e))?;

        let envelope: Envelope<PlayerItem> =
            HttpResponseUtils::check_and_parse(response, call).await?;
        Ok(envelope.into_page(limit, offset))
    }

    async fn fetch_item_catalog(&self, kind: ItemCatalogKind) -> ApiResult<Vec<serde_json::Value>> {
        let call = UpstreamCall::new(UPSTREAM_GATEWAY, "getItemsList").about(kind.as_str());
        let response = self
            .get(&format!("/origin/v2/community/{kind}"), call)?
            .send()
            .await
            .map_err(|e| call.transport_error(&e))?;

        let envelope: Envelope<serde_json::Value> =
            HttpResponseUtils::check_and_parse(response, call).await?;
        Ok(envelope.into_page(0, 0).items)
    }

    fn provider_name(&self) -> &str {
        "gateway-api"
    }
}
