//! Token market data

use crate::constants::TOKEN_PRICE_TTL_SECS;
use crate::payload::CachedPayload;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Tokens with a known market feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Token {
    Axs,
    Btc,
    Eth,
    Slp,
    Ron,
    Usdc,
}

impl Token {
    pub const ALL: [Self; 6] = [
        Self::Axs,
        Self::Btc,
        Self::Eth,
        Self::Slp,
        Self::Ron,
        Self::Usdc,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Axs => "axs",
            Self::Btc => "btc",
            Self::Eth => "eth",
            Self::Slp => "slp",
            Self::Ron => "ron",
            Self::Usdc => "usdc",
        }
    }

    /// CoinGecko coin id
    pub fn coin_id(self) -> &'static str {
        match self {
            Self::Axs => "axie-infinity",
            Self::Btc => "bitcoin",
            Self::Eth => "ethereum",
            Self::Slp => "smooth-love-potion",
            Self::Ron => "ronin",
            Self::Usdc => "usd-coin",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Token {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|token| token.symbol() == wanted)
            .ok_or_else(|| crate::Error::invalid_argument(format!("unsupported token '{s}'")))
    }
}

/// Market data block of a coin, keyed by lowercase currency
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketData {
    pub current_price: HashMap<String, f64>,
    pub high_24h: HashMap<String, f64>,
    pub low_24h: HashMap<String, f64>,
    pub price_change_percentage_24h_in_currency: HashMap<String, f64>,
}

impl MarketData {
    /// Quote in one currency, `None` when the feed has no price for it
    pub fn quote(&self, currency: &str) -> Option<TokenPrice> {
        let currency = currency.to_lowercase();
        let price = *self.current_price.get(&currency)?;
        let change = self
            .price_change_percentage_24h_in_currency
            .get(&currency)
            .copied()
            .unwrap_or_default();
        let change = (change * 10.0).round() / 10.0;

        Some(TokenPrice {
            price,
            change: format!("{change}%"),
            high: self.high_24h.get(&currency).copied().unwrap_or(price),
            low: self.low_24h.get(&currency).copied().unwrap_or(price),
            source: "COINGECKO_API".to_string(),
        })
    }
}

impl CachedPayload for MarketData {
    fn is_empty(&self) -> bool {
        self.current_price.is_empty()
    }

    fn ttl_override(&self) -> Option<Duration> {
        Some(Duration::from_secs(TOKEN_PRICE_TTL_SECS))
    }
}

/// Token price in one currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenPrice {
    pub price: f64,
    /// 24h change, one decimal, e.g. `-3.2%`
    pub change: String,
    pub high: f64,
    pub low: f64,
    pub source: String,
}
