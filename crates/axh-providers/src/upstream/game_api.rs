//! Origins game API client
//!
//! Profiles, leaderboards and seasons come from the game API; battle
//! histories come from the separate battles API, which shares the same
//! error reporting.

use crate::constants::{BATTLE_TYPE_PVP, BATTLES_API_URL, GAME_API_URL, UPSTREAM_GAME};
use crate::utils::{HttpResponseUtils, UpstreamCall};
use async_trait::async_trait;
use axh_domain::ports::providers::GameApi;
use axh_domain::value_objects::{
    ArenaBattle, BattleFeed, Envelope, LeaderboardEntry, Page, PlayerProfile, Season,
};
use axh_domain::ApiResult;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct BattlesResponse {
    #[serde(default)]
    battles: Vec<ArenaBattle>,
}

#[derive(Debug, Clone)]
pub struct GameApiClient {
    http_client: Client,
    base_url: String,
    battles_url: String,
}

impl GameApiClient {
    /// `None` URLs fall back to the public endpoints
    pub fn new(http_client: Client, base_url: Option<String>, battles_url: Option<String>) -> Self {
        Self {
            http_client,
            base_url: trim_base(base_url, GAME_API_URL),
            battles_url: trim_base(battles_url, BATTLES_API_URL),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn battles_url(&self) -> &str {
        &self.battles_url
    }
}

/// Base URL without a trailing slash
pub(crate) fn trim_base(url: Option<String>, default: &str) -> String {
    url.as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(default)
        .trim_end_matches('/')
        .to_string()
}

#[async_trait]
impl GameApi for GameApiClient {
    async fn fetch_profile(&self, user_id: &str) -> ApiResult<Option<PlayerProfile>> {
        let call = UpstreamCall::new(UPSTREAM_GAME, "getPlayerProfile").about(user_id);
        let response = self
            .http_client
            .get(format!("{}/v2/users/{user_id}/profiles", self.base_url))
            .send()
            .await
            .map_err(|e| call.transport_error(&e))?;

        HttpResponseUtils::check_and_parse_optional(response, call).await
    }

    async fn fetch_leaderboard(
        &self,
        limit: u32,
        offset: u32,
        user_id: Option<&str>,
    ) -> ApiResult<Page<LeaderboardEntry>> {
        let operation = if user_id.is_some() { "getPlayerRank" } else { "getLeaderboard" };
        let mut call = UpstreamCall::new(UPSTREAM_GAME, operation);
        let mut query = vec![("limit", limit.to_string()), ("offset", offset.to_string())];
        if let Some(user_id) = user_id {
            call = call.about(user_id);
            query.push(("userID", user_id.to_string()));
        }

        let response = self
            .http_client
            .get(format!("{}/v2/leaderboards", self.base_url))
            .query(&query)
            .send()
            .await
            .map_err(|e| call.transport_error(&e))?;

        let envelope: Envelope<LeaderboardEntry> =
            HttpResponseUtils::check_and_parse(response, call).await?;
        Ok(envelope.into_page(limit, offset))
    }

    async fn fetch_battles(
        &self,
        user_id: &str,
        feed: BattleFeed,
        limit: u32,
    ) -> ApiResult<Vec<ArenaBattle>> {
        let call = UpstreamCall::new(UPSTREAM_GAME, feed.operation()).about(user_id);
        let limit = limit.to_string();
        let mut query = vec![
            ("limit", limit.as_str()),
            ("type", BATTLE_TYPE_PVP),
            ("client_id", user_id),
        ];
        match feed {
            BattleFeed::Ranked => query.push(("page", "1")),
            BattleFeed::Esport => query.push(("offset", "0")),
        }

        let response = self
            .http_client
            .get(format!("{}{}", self.battles_url, feed.path()))
            .query(&query)
            .send()
            .await
            .map_err(|e| call.transport_error(&e))?;

        let body: BattlesResponse = HttpResponseUtils::check_and_parse(response, call).await?;
        debug!(user_id, feed = ?feed, battles = body.battles.len(), "fetched battle history");
        Ok(body.battles)
    }

    async fn fetch_seasons(&self, limit: u32, offset: u32) -> ApiResult<Vec<Season>> {
        let call = UpstreamCall::new(UPSTREAM_GAME, "getSeasons");
        let response = self
            .http_client
            .get(format!("{}/v2/seasons", self.base_url))
            .query(&[("limit", limit), ("offset", offset)])
            .send()
            .await
            .map_err(|e| call.transport_error(&e))?;

        let envelope: Envelope<Season> = HttpResponseUtils::check_and_parse(response, call).await?;
        Ok(envelope.into_page(limit, offset).items)
    }

    fn provider_name(&self) -> &str {
        "game-api"
    }
}
