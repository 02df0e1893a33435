//! Upstream endpoint configuration types

use axh_domain::constants::DEFAULT_MAX_PAGES;
use axh_providers::constants::{
    BATTLES_API_URL, COINGECKO_API_URL, CONTEST_API_URL, GAME_API_URL, GATEWAY_API_URL,
    HTTP_DEFAULT_TIMEOUT_SECS, MARKETPLACE_GRAPHQL_URL, REPLAY_STORAGE_URL, RONIN_REST_API_URL,
};
use axh_providers::http::HttpClientConfig;
use serde::{Deserialize, Deserializer, Serialize};
use std::time::Duration;

/// Base URLs, credentials and HTTP client settings of the upstream APIs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    pub game_api_url: String,
    pub battles_api_url: String,
    pub gateway_api_url: String,
    pub marketplace_url: String,
    pub coingecko_url: String,
    pub ronin_rest_url: String,
    pub contest_api_url: String,
    pub replay_storage_url: String,

    /// Gateway API keys; one is picked at random per request.
    /// Accepts a list or a comma-separated string (`AXH_UPSTREAM__GATEWAY_API_KEYS=k1,k2`).
    #[serde(deserialize_with = "deserialize_keys")]
    pub gateway_api_keys: Vec<String>,

    /// Total request timeout (seconds)
    pub timeout_secs: u64,

    /// Overrides the default `axh/<version>` user agent
    pub user_agent: Option<String>,

    /// Most pages fetched for one paginated listing
    pub max_pages: u32,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            game_api_url: GAME_API_URL.to_string(),
            battles_api_url: BATTLES_API_URL.to_string(),
            gateway_api_url: GATEWAY_API_URL.to_string(),
            marketplace_url: MARKETPLACE_GRAPHQL_URL.to_string(),
            coingecko_url: COINGECKO_API_URL.to_string(),
            ronin_rest_url: RONIN_REST_API_URL.to_string(),
            contest_api_url: CONTEST_API_URL.to_string(),
            replay_storage_url: REPLAY_STORAGE_URL.to_string(),
            gateway_api_keys: Vec::new(),
            timeout_secs: HTTP_DEFAULT_TIMEOUT_SECS,
            user_agent: None,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }
}

impl UpstreamConfig {
    pub fn http_client_config(&self) -> HttpClientConfig {
        let mut config = HttpClientConfig::with_timeout(Duration::from_secs(self.timeout_secs));
        if let Some(agent) = &self.user_agent {
            config.user_agent = agent.clone();
        }
        config
    }

    /// Every configured base URL with its field name
    pub fn endpoints(&self) -> [(&'static str, &str); 8] {
        [
            ("game_api_url", &self.game_api_url),
            ("battles_api_url", &self.battles_api_url),
            ("gateway_api_url", &self.gateway_api_url),
            ("marketplace_url", &self.marketplace_url),
            ("coingecko_url", &self.coingecko_url),
            ("ronin_rest_url", &self.ronin_rest_url),
            ("contest_api_url", &self.contest_api_url),
            ("replay_storage_url", &self.replay_storage_url),
        ]
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum KeyList {
    Joined(String),
    List(Vec<String>),
}

fn deserialize_keys<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let keys = match KeyList::deserialize(deserializer)? {
        KeyList::Joined(joined) => joined.split(',').map(str::to_string).collect(),
        KeyList::List(list) => list,
    };
    Ok(keys
        .into_iter()
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
        .collect())
}
