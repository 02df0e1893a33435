//! Unit tests for token market data

use axh_domain::CachedPayload;
use axh_domain::value_objects::{MarketData, Token};
use std::collections::HashMap;
use std::time::Duration;

fn market() -> MarketData {
    let map = |v: f64| HashMap::from([("usd".to_string(), v)]);
    MarketData {
        current_price: map(6.5),
        high_24h: map(7.0),
        low_24h: map(6.0),
        price_change_percentage_24h_in_currency: map(-3.26),
    }
}

#[test]
fn test_quote_in_currency() {
    let quote = market().quote("USD").expect("usd quote");
    assert!((quote.price - 6.5).abs() < f64::EPSILON);
    assert_eq!(quote.change, "-3.3%");
    assert_eq!(quote.source, "COINGECKO_API");
}

#[test]
fn test_quote_unknown_currency() {
    assert!(market().quote("php").is_none());
}

#[test]
fn test_whole_change_has_no_trailing_zero() {
    let mut data = market();
    data.price_change_percentage_24h_in_currency
        .insert("usd".to_string(), 5.0);
    assert_eq!(data.quote("usd").expect("quote").change, "5%");
}

#[test]
fn test_market_data_lifetime() {
    assert_eq!(market().ttl_override(), Some(Duration::from_secs(60)));
    assert!(MarketData::default().is_empty());
}

#[test]
fn test_token_parse_and_coin_ids() {
    assert_eq!("SLP".parse::<Token>().ok(), Some(Token::Slp));
    assert_eq!(Token::Axs.coin_id(), "axie-infinity");
    assert!("doge".parse::<Token>().is_err());
}
