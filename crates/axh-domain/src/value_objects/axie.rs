//! Marketplace axie details
//!
//! Only the fields the bot reads are typed; the rest of the GraphQL
//! `AxieDetail` fragment (parts, order, children, ...) is carried through
//! untouched so a cached entry renders exactly like a fresh one.

use crate::constants::MARKETPLACE_URL;
use crate::payload::CachedPayload;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AxieStats {
    pub hp: u32,
    pub speed: u32,
    pub skill: u32,
    pub morale: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxieDetails {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Lowercased before caching
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub stage: Option<u8>,
    #[serde(default)]
    pub breed_count: Option<u32>,
    #[serde(default)]
    pub stats: Option<AxieStats>,
    /// Marketplace page, derived from the id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl AxieDetails {
    pub fn marketplace_url(axie_id: &str) -> String {
        format!("{MARKETPLACE_URL}/marketplace/axies/{axie_id}")
    }
}

impl CachedPayload for AxieDetails {
    fn normalize(&mut self) {
        self.class = self.class.as_deref().map(str::to_lowercase);
        self.url = Some(Self::marketplace_url(&self.id));
    }

    fn is_empty(&self) -> bool {
        self.id.is_empty()
    }
}
