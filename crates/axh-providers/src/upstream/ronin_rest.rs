//! Ronin REST identity resolver

use super::game_api::trim_base;
use crate::constants::{RONIN_REST_API_URL, UPSTREAM_RONIN_REST};
use crate::utils::{HttpResponseUtils, UpstreamCall};
use async_trait::async_trait;
use axh_domain::ports::providers::ProfileResolver;
use axh_domain::value_objects::ResolvedProfile;
use axh_domain::ApiResult;
use reqwest::Client;

#[derive(Debug, Clone)]
pub struct RoninRestClient {
    http_client: Client,
    base_url: String,
}

impl RoninRestClient {
    pub fn new(http_client: Client, base_url: Option<String>) -> Self {
        Self {
            http_client,
            base_url: trim_base(base_url, RONIN_REST_API_URL),
        }
    }
}

#[async_trait]
impl ProfileResolver for RoninRestClient {
    async fn resolve_profile(&self, id_or_address: &str) -> ApiResult<Option<ResolvedProfile>> {
        let call = UpstreamCall::new(UPSTREAM_RONIN_REST, "resolveProfile").about(id_or_address);
        let response = self
            .http_client
            .get(format!("{}/sm/resolveProfile/{id_or_address}", self.base_url))
            .send()
            .await
            .map_err(|e| call.transport_error(&e))?;

        HttpResponseUtils::check_and_parse_optional(response, call).await
    }

    fn provider_name(&self) -> &str {
        "ronin-rest"
    }
}
