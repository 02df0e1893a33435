//! Unit tests for battle history parsing

use axh_domain::CachedPayload;
use axh_domain::value_objects::{ArenaBattle, BattleFeed, BattleResult, PlayerBattles, RpsWinner};
use serde_json::json;

fn fighter(axie_id: i64) -> serde_json::Value {
    json!({ "gene": "0x0", "axie_id": axie_id, "axie_type": "ronin", "runes": [], "charms": {} })
}

fn battle(uuid: &str, winner: u8, player_first: bool, team: i64) -> ArenaBattle {
    let (clients, teams) = if player_first {
        (json!(["me", "them"]), json!([team, 900]))
    } else {
        (json!(["them", "me"]), json!([900, team]))
    };
    let mine = json!([fighter(team), fighter(team + 1), fighter(team + 2)]);
    let theirs = json!([fighter(1), fighter(2), fighter(3)]);
    let (first, second) = if player_first { (mine, theirs) } else { (theirs, mine) };

    serde_json::from_value(json!({
        "battle_uuid": uuid,
        "client_ids": clients,
        "team_ids": teams,
        "created_at": 0,
        "winner": winner,
        "battle_type_string": "ranked_pvp",
        "first_client_fighters": first,
        "second_client_fighters": second,
        "rewards": [],
        "delta_rewards": [
            { "user_id": "me", "new_vstar": 1010, "old_vstar": 1000, "result": "win",
              "items": [
                { "item_id": "slp", "quantity": 3 },
                { "item_id": "moonshard", "quantity": 2 },
                { "item_id": "moonshard", "quantity": 5 }
              ] },
            { "user_id": "them", "new_vstar": 990, "old_vstar": 1000, "result": "lose", "items": [] }
        ],
        "user_ranks": [ { "division": "Wolf", "tier": 2 }, { "division": "Bear", "tier": 1 } ],
        "started_time": 0,
        "ended_time": 100
    }))
    .expect("battle fixture")
}

#[test]
fn test_empty_history_is_none() {
    assert!(PlayerBattles::from_history(&[], "me").is_none());
}

#[test]
fn test_result_follows_winner_index() {
    let history = vec![
        battle("a", 0, true, 10),
        battle("b", 0, false, 10),
        battle("c", 2, true, 10),
    ];
    let parsed = PlayerBattles::from_history(&history, "ME").expect("history");

    assert_eq!(parsed.battles[0].result, BattleResult::Victory);
    assert_eq!(parsed.battles[1].result, BattleResult::Defeated);
    assert_eq!(parsed.battles[2].result, BattleResult::Draw);
    assert_eq!(parsed.match_total, 3);
    assert_eq!(parsed.win_total, 1);
    assert!((parsed.win_rate - 33.33).abs() < f64::EPSILON);
}

#[test]
fn test_player_rewards_are_summed() {
    let parsed = PlayerBattles::from_history(&[battle("a", 0, true, 10)], "me").expect("history");
    let rewards = parsed.battles[0]
        .player
        .rewards
        .clone()
        .expect("player rewards");

    assert_eq!(rewards.vstar_gained, 10);
    assert_eq!(rewards.slp_gained, 3);
    assert_eq!(rewards.moonshard_gained, 7);

    let opponent = parsed.battles[0].opponent.rewards.clone().expect("opponent rewards");
    assert_eq!(opponent.vstar_gained, -10);
}

#[test]
fn test_last_and_most_used_team() {
    let history = vec![
        battle("a", 0, true, 20),
        battle("b", 0, true, 10),
        battle("c", 0, false, 10),
    ];
    let parsed = PlayerBattles::from_history(&history, "me").expect("history");

    assert_eq!(parsed.last_used_team[0].axie_id, 20);
    assert_eq!(parsed.most_used_team[0].axie_id, 10);
}

#[test]
fn test_rps_winner_from_replay() {
    let replay = "header;rps:5F0C9B3A-1D2E-4F60-8A9B-0C1D2E3F4A5B;rest";
    let mut winner = RpsWinner::from_replay(replay).expect("uuid in replay");
    winner.normalize();
    assert_eq!(winner.0, "5f0c9b3a-1d2e-4f60-8a9b-0c1d2e3f4a5b");

    assert!(RpsWinner::from_replay("no ids in here").is_none());
}

#[test]
fn test_replay_buckets() {
    assert_eq!(BattleFeed::Ranked.replay_bucket(), "prod");
    assert_eq!(BattleFeed::Esport.replay_bucket(), "esport");
}
