//! Payload normalization helpers
//!
//! Upstream payloads carry in-game markup in player names and mix address
//! formats. These helpers are applied before anything is cached.

use crate::constants::{ETH_ADDRESS_LENGTH, ETHEREUM_PREFIX, RONIN_PREFIX};
use std::sync::LazyLock;

use regex::Regex;

static LINE_BREAKS: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"\r?\n|\r").expect("valid line break pattern")
});

static COLOR_TAGS: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"(<#.{3,6}>)|(<color=#.{3,6}>)").expect("valid color tag pattern")
});

static UUID: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"(?i)[a-f\d]{8}-[a-f\d]{4}-[a-f\d]{4}-[a-f\d]{4}-[a-f\d]{12}")
        .expect("valid uuid pattern")
});

/// Address rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressFormat {
    /// `ronin:` prefixed
    Ronin,
    /// `0x` prefixed
    Ethereum,
}

/// Remove line breaks and in-game color tags from a display name
pub fn clean_player_name(name: &str) -> String {
    let without_breaks = LINE_BREAKS.replace_all(name, "");
    COLOR_TAGS
        .replace_all(without_breaks.trim(), "")
        .into_owned()
}

/// Format an address as either `ronin:` or `0x`
///
/// Input is lowercased; a bare 40 character hex string gets the `0x` prefix
/// first.
pub fn parse_address(address: &str, format: AddressFormat) -> String {
    let mut address = address.to_lowercase();

    if address.len() == ETH_ADDRESS_LENGTH {
        address = format!("{ETHEREUM_PREFIX}{address}");
    }

    if let Some(rest) = address.strip_prefix(RONIN_PREFIX) {
        address = format!("{ETHEREUM_PREFIX}{rest}");
    }

    match format {
        AddressFormat::Ronin => address.replacen(ETHEREUM_PREFIX, RONIN_PREFIX, 1),
        AddressFormat::Ethereum => address,
    }
}

/// First UUID found in `text`, as written
pub fn extract_uuid(text: &str) -> Option<String> {
    UUID.find(text).map(|found| found.as_str().to_string())
}

/// Round to two decimals, the precision used for win/lose rates
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
