//! Cache key builders
//!
//! Keys are colon-delimited and namespaced by entity type, e.g.
//! `playerItems:<userId>`. Keeping them in one place lets the admin purge
//! command target a whole entity type with `playerItems:*`.

use crate::constants::DEFAULT_PAGE_LIMIT;
use crate::value_objects::{BattleFeed, ItemCatalogKind, Token};

/// Pages of the default size keep the short key; other sizes get their own
fn paged(base: String, limit: u32) -> String {
    if limit == DEFAULT_PAGE_LIMIT {
        base
    } else {
        format!("{base}:{limit}")
    }
}

#[inline]
pub fn player_profile(user_id: &str) -> String {
    format!("profileDetails:{user_id}")
}

#[inline]
pub fn player_rank(user_id: &str) -> String {
    format!("rank:{user_id}")
}

#[inline]
pub fn player_items(user_id: &str) -> String {
    format!("playerItems:{user_id}")
}

/// One leaderboard page; the page size is part of the key unless default
pub fn leaderboard(limit: u32, offset: u32) -> String {
    paged(format!("leaderboard:{offset}"), limit)
}

pub fn player_battles(user_id: &str, feed: BattleFeed) -> String {
    match feed {
        BattleFeed::Ranked => format!("playerBattles:{user_id}"),
        BattleFeed::Esport => format!("playerEsportBattles:{user_id}"),
    }
}

/// Identity lookups share one namespace for user ids and addresses
#[inline]
pub fn resolved_profile(id_or_address: &str) -> String {
    format!("id:{}", id_or_address.to_lowercase())
}

#[inline]
pub fn seasons() -> String {
    "origin_seasons".to_string()
}

#[inline]
pub fn item_catalog(kind: ItemCatalogKind) -> String {
    format!("itemList:{}", kind.as_str())
}

#[inline]
pub fn token_price(token: Token) -> String {
    format!("tokenPrice:{}", token.symbol())
}

#[inline]
pub fn contests() -> String {
    "contests".to_string()
}

/// One page of a contest leaderboard, `page` counting from 1
pub fn contest_leaderboard(contest_id: i64, page: u32, limit: u32) -> String {
    paged(format!("contestLeaderboard:{page}:{contest_id}"), limit)
}

#[inline]
pub fn battle_replay(battle_id: &str) -> String {
    format!("battle_replay:{battle_id}")
}

#[inline]
pub fn axie_details(axie_id: u64) -> String {
    format!("axieDetails:{axie_id}")
}
