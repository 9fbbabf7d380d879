use super::*;
use crate::state::test_helpers;

#[test]
fn thousands_are_grouped() {
    assert_eq!(group_thousands(0), "0");
    assert_eq!(group_thousands(247), "247");
    assert_eq!(group_thousands(15_420), "15,420");
    assert_eq!(group_thousands(1_000_000), "1,000,000");
}

#[test]
fn relative_time_labels() {
    assert_eq!(relative_time(Duration::hours(2)), "2 hours ago");
    assert_eq!(relative_time(Duration::hours(1)), "1 hour ago");
    assert_eq!(relative_time(Duration::days(1)), "1 day ago");
    assert_eq!(relative_time(Duration::hours(49)), "2 days ago");
    assert_eq!(relative_time(Duration::minutes(5)), "just now");
}

#[test]
fn stat_cards_are_fixed() {
    let cards = stats();
    let values: Vec<&str> = cards.iter().map(|c| c.value.as_str()).collect();
    assert_eq!(values, vec!["247", "89", "12.4", "15,420"]);
    assert_eq!(cards[2].change, "-2.1");
    assert!(cards.iter().all(|c| c.change_type == ChangeType::Positive));
}

#[test]
fn performance_series_cover_every_month() {
    let series = performance();
    assert_eq!(series.months.len(), 12);
    assert_eq!(series.average_position.len(), 12);
    assert_eq!(series.local_pack_appearances.len(), 12);
    assert_eq!(series.organic_traffic.last(), Some(&15_800));
}

#[test]
fn activity_and_actions() {
    let feed = activity();
    assert_eq!(feed.len(), 5);
    assert_eq!(feed[0].time, "2 hours ago");
    assert_eq!(feed[4].time, "2 days ago");

    let hrefs: Vec<&str> = quick_actions().iter().map(|a| a.href).collect();
    assert_eq!(hrefs, vec!["/keywords", "/rankings", "/competitors", "/audit"]);
}

#[tokio::test]
async fn ensure_loaded_runs_once() {
    let state = test_helpers::test_app_state();
    ensure_loaded(&state).await.unwrap();
    let first = state.pages.dashboard.data().unwrap();

    ensure_loaded(&state).await.unwrap();
    let second = state.pages.dashboard.data().unwrap();
    assert!(std::sync::Arc::ptr_eq(&first, &second));
}
