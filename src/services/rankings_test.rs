use super::*;
use crate::sampler::SequenceSampler;
use crate::state::test_helpers;

#[test]
fn records_follow_location_city() {
    let rankings = records("Dallas, TX");
    assert_eq!(rankings.len(), 5);
    assert_eq!(rankings[2].keyword, "used cars Dallas");
    assert_eq!(rankings[0].url, "https://yourdealership.com/honda");
}

#[test]
fn resolve_location_defaults_when_blank() {
    assert_eq!(resolve_location(None), DEFAULT_LOCATION);
    assert_eq!(resolve_location(Some("   ")), DEFAULT_LOCATION);
    assert_eq!(resolve_location(Some(" Phoenix, AZ ")), "Phoenix, AZ");
    assert_eq!(city("Phoenix"), "Phoenix");
}

#[test]
fn summary_matches_fixed_records() {
    let summary = summarize(&records(DEFAULT_LOCATION));
    assert!((summary.average_position - 7.8).abs() < f64::EPSILON);
    assert_eq!(summary.local_pack_count, 2);
    assert_eq!(summary.improved, 3);
    assert_eq!(summary.total, 5);
}

#[test]
fn summary_of_nothing_is_zero() {
    let summary = summarize(&[]);
    assert!(summary.average_position.abs() < f64::EPSILON);
    assert_eq!(summary.total, 0);
}

// =============================================================================
// history
// =============================================================================

#[test]
fn history_has_eight_points_ending_at_current() {
    let sampler = SequenceSampler::new(vec![0.1, 0.9, 0.3, 0.7, 0.0, 0.99, 0.5, 0.2, 0.8]);
    for current in [1, 3, 12, 20] {
        let points = history_points(current, &sampler);
        assert_eq!(points.len(), HISTORY_LABELS.len());
        assert!(points.iter().all(|p| (1..=20).contains(p)), "{points:?}");
        assert_eq!(points.last(), Some(&current));
    }
}

#[test]
fn history_is_flat_at_midpoint() {
    let points = history_points(7, &SequenceSampler::constant(0.5));
    assert_eq!(points, vec![7; 8]);
}

#[test]
fn history_clamps_at_bounds() {
    let low = history_points(2, &SequenceSampler::constant(0.0));
    assert_eq!(low, vec![1, 1, 1, 1, 1, 1, 1, 2]);

    let high = history_points(20, &SequenceSampler::constant(0.999));
    assert_eq!(high, vec![20; 8]);
}

#[test]
fn report_charts_first_five_keywords() {
    let report = report("Chicago, IL", &SequenceSampler::constant(0.5));
    assert_eq!(report.history.len(), 5);
    assert_eq!(report.history[2].keyword, "used cars Chicago");
    assert_eq!(report.location, "Chicago, IL");
}

// =============================================================================
// position change
// =============================================================================

#[test]
fn position_change_labels() {
    let rankings = records(DEFAULT_LOCATION);
    assert_eq!(PositionChange::of(&rankings[0]).label(), "+2");
    assert_eq!(PositionChange::of(&rankings[2]).label(), "-2");
    assert_eq!(PositionChange::of(&rankings[3]).label(), "0");
    assert_eq!(PositionChange::of(&rankings[4]), PositionChange::Improved(3));
}

// =============================================================================
// operations
// =============================================================================

#[tokio::test]
async fn ensure_loads_once_per_location() {
    let state = test_helpers::test_app_state();

    let first = ensure_for_location(&state, "").await.unwrap();
    assert_eq!(first.unwrap().data.location, DEFAULT_LOCATION);

    let again = ensure_for_location(&state, DEFAULT_LOCATION).await.unwrap();
    assert!(again.is_none());

    let moved = ensure_for_location(&state, "Houston, TX").await.unwrap();
    assert_eq!(moved.unwrap().data.rankings[2].keyword, "used cars Houston");
}

#[tokio::test]
async fn refresh_replaces_report() {
    let state = test_helpers::test_app_state();
    let a = refresh(&state, "Dallas, TX").await.unwrap();
    let b = refresh(&state, "Dallas, TX").await.unwrap();
    assert_ne!(a.run_id, b.run_id);
    assert_eq!(state.pages.rankings.data().unwrap().location, "Dallas, TX");
}
