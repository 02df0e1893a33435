//! Unit tests for contests and the dependent contest leaderboard

use crate::support::{FakeContest, RecordingCache, Reply, moka};
use axh_application::use_cases::{CacheAside, ContestService};
use axh_domain::FetchOutcome;
use std::sync::Arc;
use std::time::Duration;

/// Far enough ahead that the one day cap applies
const FAR_END: i64 = i64::MAX / 2;

fn service(cache: CacheAside, api: Arc<FakeContest>) -> ContestService {
    ContestService::new(cache, api)
}

#[tokio::test]
async fn test_contests_are_cached_for_at_most_a_day() {
    let store = Arc::new(RecordingCache::new());
    let api = Arc::new(FakeContest::new(FAR_END, 3));
    let contests = service(CacheAside::new(store.clone()), api.clone());

    let listed = contests.contests().await.found().expect("contests");
    contests.contests().await;

    assert_eq!(listed.latest().map(|c| c.id), Some(12));
    assert_eq!(api.calls("contests"), 1);
    let writes = store.writes();
    assert_eq!(writes[0].0, "contests");
    assert_eq!(writes[0].1.ttl, Some(Duration::from_secs(86_400)));
}

#[tokio::test]
async fn test_contest_ending_soon_expires_with_it() {
    let store = Arc::new(RecordingCache::new());
    let end = chrono::Utc::now().timestamp() + 600;
    let contests = service(
        CacheAside::new(store.clone()),
        Arc::new(FakeContest::new(end, 3)),
    );

    contests.contests().await;

    let ttl = store.writes()[0].1.ttl.expect("contest ttl");
    assert!(ttl <= Duration::from_secs(600));
    assert!(ttl >= Duration::from_secs(590));
}

#[tokio::test]
async fn test_leaderboard_of_the_latest_contest() {
    let store = Arc::new(RecordingCache::new());
    let api = Arc::new(FakeContest::new(FAR_END, 5));
    let contests = service(CacheAside::new(store.clone()), api.clone());

    let board = contests
        .contest_leaderboard(2, 2)
        .await
        .found()
        .expect("leaderboard");
    contests.contest_leaderboard(2, 2).await;

    assert_eq!(board.contest.id, 12);
    assert_eq!(board.total, 5);
    assert_eq!(
        board.players.iter().map(|p| p.rank).collect::<Vec<_>>(),
        vec![3, 4]
    );
    assert_eq!(board.players[0].user_name, "Player 3", "names are cleaned");
    assert_eq!(api.leaderboard_requests(), vec![(12, 2, 2)]);
    assert!(store.written_keys().contains(&"contestLeaderboard:2:12:2".to_string()));
}

#[tokio::test]
async fn test_leaderboard_pages_count_from_one() {
    let api = Arc::new(FakeContest::new(FAR_END, 5));
    let contests = service(CacheAside::new(moka()), api.clone());

    contests.contest_leaderboard(100, 0).await;

    assert_eq!(api.leaderboard_requests(), vec![(12, 100, 1)]);
}

#[tokio::test]
async fn test_no_contest_means_no_leaderboard() {
    let api = Arc::new(FakeContest::new(FAR_END, 5));
    api.set_contests(Reply::Data(Vec::new()));
    let contests = service(CacheAside::new(moka()), api.clone());

    assert!(contests.contest_leaderboard(100, 1).await.is_empty());
    assert_eq!(api.calls("leaderboard"), 0);
}

#[tokio::test]
async fn test_failed_contest_list_fails_the_leaderboard() {
    let api = Arc::new(FakeContest::new(FAR_END, 5));
    api.set_contests(Reply::Fail(503));
    let contests = service(CacheAside::new(moka()), api.clone());

    let outcome = contests.contest_leaderboard(100, 1).await;

    assert!(matches!(outcome, FetchOutcome::Failed(ref err) if err.operation == "getContest"));
    assert_eq!(api.calls("leaderboard"), 0);
}

#[tokio::test]
async fn test_failed_leaderboard_is_not_cached() {
    let store = Arc::new(RecordingCache::new());
    let api = Arc::new(FakeContest::new(FAR_END, 5));
    api.fail_leaderboard();
    let contests = service(CacheAside::new(store.clone()), api);

    assert!(contests.contest_leaderboard(100, 1).await.is_failed());
    assert_eq!(store.written_keys(), vec!["contests".to_string()]);
}
