//! Battle replay storage client
//!
//! Replays are public objects in per-environment buckets:
//! `{storage}/sm-{bucket}-origin-battle-replay/pvp_battle_replay/{battle_id}`.

use super::game_api::trim_base;
use crate::constants::{REPLAY_STORAGE_URL, UPSTREAM_REPLAY};
use crate::utils::{HttpResponseUtils, UpstreamCall};
use async_trait::async_trait;
use axh_domain::ApiResult;
use axh_domain::ports::providers::BattleReplaySource;
use axh_domain::value_objects::BattleFeed;
use reqwest::Client;

#[derive(Debug, Clone)]
pub struct ReplayStorageClient {
    http_client: Client,
    base_url: String,
}

impl ReplayStorageClient {
    pub fn new(http_client: Client, base_url: Option<String>) -> Self {
        Self {
            http_client,
            base_url: trim_base(base_url, REPLAY_STORAGE_URL),
        }
    }

    pub fn replay_url(&self, battle_id: &str, feed: BattleFeed) -> String {
        format!(
            "{}/sm-{}-origin-battle-replay/pvp_battle_replay/{battle_id}",
            self.base_url,
            feed.replay_bucket()
        )
    }
}

#[async_trait]
impl BattleReplaySource for ReplayStorageClient {
    async fn fetch_replay(&self, battle_id: &str, feed: BattleFeed) -> ApiResult<Option<String>> {
        let call = UpstreamCall::new(UPSTREAM_REPLAY, "getBattleReplay").about(battle_id);
        let response = self
            .http_client
            .get(self.replay_url(battle_id, feed))
            .send()
            .await
            .map_err(|e| call.transport_error(&e))?;

        HttpResponseUtils::check_and_read_text(response, call).await
    }

    fn provider_name(&self) -> &str {
        "replay-storage"
    }
}
