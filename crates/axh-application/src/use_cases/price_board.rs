//! Price board
//!
//! Latest marketplace floor prices, owned by a background refresher and read
//! through an accessor. Readers get a consistent snapshot without locking;
//! a refresh swaps the whole snapshot at once.

use super::market::MarketService;
use arc_swap::ArcSwap;
use axh_domain::value_objects::{ItemMinimumPrice, TokenType};
use axh_domain::FetchOutcome;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};

/// Immutable view of the board at one refresh
#[derive(Debug, Clone, Default)]
pub struct PriceSnapshot {
    by_token: HashMap<String, ItemMinimumPrice>,
    updated_at: Option<DateTime<Utc>>,
}

impl PriceSnapshot {
    pub fn new(prices: Vec<ItemMinimumPrice>, updated_at: DateTime<Utc>) -> Self {
        Self {
            by_token: prices
                .into_iter()
                .map(|price| (price.token_id.clone(), price))
                .collect(),
            updated_at: Some(updated_at),
        }
    }

    pub fn get(&self, token_id: &str) -> Option<&ItemMinimumPrice> {
        self.by_token.get(token_id)
    }

    pub fn len(&self) -> usize {
        self.by_token.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_token.is_empty()
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    pub fn prices(&self) -> impl Iterator<Item = &ItemMinimumPrice> {
        self.by_token.values()
    }
}

/// Shared accessor to the latest snapshot
#[derive(Debug, Default)]
pub struct PriceBoard {
    current: ArcSwap<PriceSnapshot>,
}

impl PriceBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Arc<PriceSnapshot> {
        self.current.load_full()
    }

    /// Floor price of one token, if listed at the last refresh
    pub fn price_of(&self, token_id: &str) -> Option<ItemMinimumPrice> {
        self.current.load().get(token_id).cloned()
    }

    pub fn replace(&self, snapshot: PriceSnapshot) {
        self.current.store(Arc::new(snapshot));
    }
}

/// Refreshes a [`PriceBoard`] from the marketplace
#[derive(Debug, Clone)]
pub struct PriceRefresher {
    market: MarketService,
    board: Arc<PriceBoard>,
    token_types: Vec<TokenType>,
}

impl PriceRefresher {
    pub fn new(market: MarketService, board: Arc<PriceBoard>, token_types: Vec<TokenType>) -> Self {
        Self {
            market,
            board,
            token_types,
        }
    }

    pub fn board(&self) -> &Arc<PriceBoard> {
        &self.board
    }

    /// Pull every configured token type and swap the snapshot
    ///
    /// The previous snapshot is kept when nothing could be fetched.
    /// Answers the number of listed tokens now on the board.
    pub async fn refresh(&self) -> FetchOutcome<usize> {
        let mut prices = Vec::new();
        let mut last_error = None;

        for token_type in &self.token_types {
            match self.market.min_prices(*token_type, &[]).await {
                FetchOutcome::Found(found) => prices.extend(found),
                FetchOutcome::Empty => {}
                FetchOutcome::Failed(err) => last_error = Some(err),
            }
        }

        if prices.is_empty() {
            return match last_error {
                Some(err) => {
                    warn!(error = %err, "price refresh failed, keeping previous board");
                    FetchOutcome::Failed(err)
                }
                None => FetchOutcome::Empty,
            };
        }

        let snapshot = PriceSnapshot::new(prices, Utc::now());
        let listed = snapshot.len();
        self.board.replace(snapshot);
        info!(listed, "price board refreshed");
        FetchOutcome::Found(listed)
    }
}
