//! Player items, item catalogs and marketplace floor prices

use crate::constants::{CHARM_ITEM_PREFIX, RUNE_ITEM_PREFIX};
use crate::payload::CachedPayload;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One item stack owned by a player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerItem {
    pub user_id: String,
    pub item_id: String,
    pub quantity: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub withdrawable: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_withdraw_time: Option<i64>,
}

impl CachedPayload for PlayerItem {}

/// Charms and runes held by a player
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlayerInventory {
    pub charms: Vec<PlayerItem>,
    pub runes: Vec<PlayerItem>,
}

impl PlayerInventory {
    /// Split raw items into charms and runes, dropping empty stacks
    pub fn from_items(items: &[PlayerItem]) -> Self {
        let held = || items.iter().filter(|item| item.quantity > 0);
        Self {
            charms: held()
                .filter(|item| item.item_id.starts_with(CHARM_ITEM_PREFIX))
                .cloned()
                .collect(),
            runes: held()
                .filter(|item| item.item_id.starts_with(RUNE_ITEM_PREFIX))
                .cloned()
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.charms.is_empty() && self.runes.is_empty()
    }

    /// Number of stacks that can be withdrawn on chain
    pub fn withdrawable_count(&self) -> usize {
        self.charms
            .iter()
            .chain(&self.runes)
            .filter(|item| item.withdrawable.unwrap_or(0) > 0)
            .count()
    }
}

/// Community item catalogs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemCatalogKind {
    Charms,
    Runes,
    Cards,
}

impl ItemCatalogKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Charms => "charms",
            Self::Runes => "runes",
            Self::Cards => "cards",
        }
    }
}

impl fmt::Display for ItemCatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemCatalogKind {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "charms" => Ok(Self::Charms),
            "runes" => Ok(Self::Runes),
            "cards" => Ok(Self::Cards),
            other => Err(crate::Error::invalid_argument(format!(
                "unknown item catalog '{other}', expected charms, runes or cards"
            ))),
        }
    }
}

/// Marketplace ERC-1155 token type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    Charm,
    Rune,
}

impl TokenType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Charm => "Charm",
            Self::Rune => "Rune",
        }
    }
}

impl FromStr for TokenType {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "charm" | "charms" => Ok(Self::Charm),
            "rune" | "runes" => Ok(Self::Rune),
            other => Err(crate::Error::invalid_argument(format!(
                "unknown token type '{other}', expected charm or rune"
            ))),
        }
    }
}

/// Cheapest listing of one marketplace token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemMinimumPrice {
    pub id: String,
    pub token_id: String,
    /// Minimum price in wei, as a decimal string
    #[serde(default)]
    pub min_price: Option<String>,
    pub token_type: TokenType,
}

impl ItemMinimumPrice {
    pub fn is_listed(&self) -> bool {
        self.min_price.as_deref().is_some_and(|p| !p.is_empty())
    }
}
