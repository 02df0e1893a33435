//! Unit tests for the fan-out aggregator

use crate::support::{FakeGame, FakeGateway, Reply, failure, moka, player_data, profile, rank};
use axh_application::use_cases::{PlayerStatsService, SlotFuture, settle_slots};
use axh_domain::value_objects::{SlotValue, StatSlot};
use axh_domain::FetchOutcome;
use futures::FutureExt;
use futures::future::ready;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

const USER: &str = "abc123";

fn stats_service(game: Arc<FakeGame>, gateway: Arc<FakeGateway>) -> PlayerStatsService {
    PlayerStatsService::new(player_data(moka(), game, gateway))
}

#[tokio::test]
async fn test_all_slots_populated() {
    let service = stats_service(
        Arc::new(FakeGame::new(USER)),
        Arc::new(FakeGateway::with_items(USER, 10)),
    );

    let stats = service.overall_stats(USER).await;

    assert_eq!(stats.user_id, USER);
    assert_eq!(
        stats.populated_slots(),
        vec![
            StatSlot::Profile,
            StatSlot::Rank,
            StatSlot::Battles,
            StatSlot::Inventory
        ]
    );
}

#[tokio::test]
async fn test_failed_branches_leave_their_slots_empty() {
    let game = Arc::new(FakeGame::new(USER));
    game.set_profile(Reply::Fail(500));
    game.set_battles(Reply::Fail(429));
    let service = stats_service(game, Arc::new(FakeGateway::with_items(USER, 10)));

    let stats = service.overall_stats(USER).await;

    assert!(stats.profile.is_none());
    assert!(stats.battles.is_none());
    assert_eq!(stats.leaderboard.as_ref().map(|r| r.top_rank), Some(1500));
    assert_eq!(
        stats.inventory.as_ref().map(|i| i.charms.len() + i.runes.len()),
        Some(10)
    );
}

#[tokio::test]
async fn test_everything_failing_still_answers() {
    let game = Arc::new(FakeGame::new(USER));
    game.set_profile(Reply::Fail(503));
    game.set_rank(Reply::Fail(503));
    game.set_battles(Reply::Fail(503));
    let gateway = Arc::new(FakeGateway::with_items(USER, 10));
    gateway.fail_at(0);
    let service = stats_service(game, gateway);

    let stats = service.overall_stats(USER).await;

    assert_eq!(stats.user_id, USER);
    assert!(stats.populated_slots().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_branches_run_concurrently() {
    let delay = Duration::from_millis(100);
    let service = stats_service(
        Arc::new(FakeGame::new(USER).with_delay(delay)),
        Arc::new(FakeGateway::with_items(USER, 10).with_delay(delay)),
    );
    let begin = Instant::now();

    let stats = service.overall_stats(USER).await;

    assert_eq!(stats.populated_slots().len(), 4);
    assert!(
        begin.elapsed() < delay * 2,
        "four branches of {delay:?} each finished in {:?}",
        begin.elapsed()
    );
}

#[tokio::test]
async fn test_slots_are_assigned_by_tag_not_position() {
    let branches: Vec<SlotFuture<'_>> = vec![
        ready(FetchOutcome::Found(SlotValue::Rank(rank(USER)))).boxed(),
        ready(FetchOutcome::Empty).boxed(),
        ready(FetchOutcome::Failed(failure("getPlayerBattles", 500))).boxed(),
        ready(FetchOutcome::Found(SlotValue::Profile(profile(USER)))).boxed(),
    ];

    let stats = settle_slots(USER, branches).await;

    assert_eq!(stats.populated_slots(), vec![StatSlot::Profile, StatSlot::Rank]);
    assert_eq!(stats.profile.map(|p| p.user_id), Some(USER.to_string()));
}
