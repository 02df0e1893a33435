//! Background job configuration types

use crate::constants::{PRICE_MAX_PAGES, PRICE_PAGE_SIZE, PRICE_REFRESH_CRON};
use axh_domain::value_objects::TokenType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobsConfig {
    /// Run the price refresh job in `serve` mode
    pub price_refresh_enabled: bool,

    /// Six-field cron expression (seconds first)
    pub price_refresh_cron: String,

    /// Tokens requested per marketplace window
    pub price_page_size: u32,

    /// Upper bound on windows per token type
    pub price_max_pages: u32,

    /// Token types kept on the price board
    pub price_token_types: Vec<TokenType>,
}

impl Default for JobsConfig {
    fn default() -> Self {
        Self {
            price_refresh_enabled: true,
            price_refresh_cron: PRICE_REFRESH_CRON.to_string(),
            price_page_size: PRICE_PAGE_SIZE,
            price_max_pages: PRICE_MAX_PAGES,
            price_token_types: vec![TokenType::Charm, TokenType::Rune],
        }
    }
}
