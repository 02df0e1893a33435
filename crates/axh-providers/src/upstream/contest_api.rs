//! Contest API client

use super::game_api::trim_base;
use crate::constants::{CONTEST_API_URL, UPSTREAM_CONTEST};
use crate::utils::{HttpResponseUtils, UpstreamCall};
use async_trait::async_trait;
use axh_domain::ApiResult;
use axh_domain::ports::providers::ContestApi;
use axh_domain::value_objects::{Contest, ContestPlayer, Envelope, Page};
use reqwest::Client;

#[derive(Debug, Clone)]
pub struct ContestApiClient {
    http_client: Client,
    base_url: String,
}

impl ContestApiClient {
    pub fn new(http_client: Client, base_url: Option<String>) -> Self {
        Self {
            http_client,
            base_url: trim_base(base_url, CONTEST_API_URL),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Offset of a 1-based page
fn page_offset(limit: u32, page: u32) -> u32 {
    page.saturating_sub(1).saturating_mul(limit)
}

#[async_trait]
impl ContestApi for ContestApiClient {
    async fn fetch_contests(&self, limit: u32, page: u32) -> ApiResult<Vec<Contest>> {
        let call = UpstreamCall::new(UPSTREAM_CONTEST, "getContest");
        let response = self
            .http_client
            .get(format!("{}/contest/v1/public/contests", self.base_url))
            .query(&[("limit", limit), ("page", page)])
            .send()
            .await
            .map_err(|e| call.transport_error(&e))?;

        let envelope: Envelope<Contest> =
            HttpResponseUtils::check_and_parse(response, call).await?;
        Ok(envelope.into_page(limit, page_offset(limit, page)).items)
    }

    async fn fetch_contest_leaderboard(
        &self,
        contest_id: i64,
        limit: u32,
        page: u32,
    ) -> ApiResult<Page<ContestPlayer>> {
        let contest = contest_id.to_string();
        let call = UpstreamCall::new(UPSTREAM_CONTEST, "getContestLeaderboard").about(&contest);
        let response = self
            .http_client
            .get(format!(
                "{}/contest/v1/public/contests/{contest_id}/leaderboard",
                self.base_url
            ))
            .query(&[("limit", limit), ("page", page)])
            .send()
            .await
            .map_err(|e| call.transport_error(&e))?;

        let envelope: Envelope<ContestPlayer> =
            HttpResponseUtils::check_and_parse(response, call).await?;
        Ok(envelope.into_page(limit, page_offset(limit, page)))
    }

    fn provider_name(&self) -> &str {
        "contest-api"
    }
}
