use super::*;

#[test]
fn score_tier_thresholds() {
    assert_eq!(score_tier(100.0), Tier::Good);
    assert_eq!(score_tier(90.0), Tier::Good);
    assert_eq!(score_tier(89.9), Tier::Warning);
    assert_eq!(score_tier(70.0), Tier::Warning);
    assert_eq!(score_tier(69.9), Tier::Poor);
    assert_eq!(score_tier(-5.0), Tier::Poor);
}

#[test]
fn score_tier_is_monotonic() {
    let samples: Vec<f64> = (-20..=220).map(|i| f64::from(i) * 0.5).collect();
    for pair in samples.windows(2) {
        assert!(score_tier(pair[0]) <= score_tier(pair[1]), "{} vs {}", pair[0], pair[1]);
    }
}

#[test]
fn nan_maps_to_poor() {
    assert_eq!(score_tier(f64::NAN), Tier::Poor);
    assert_eq!(visibility_tier(f64::NAN), Tier::Poor);
}

#[test]
fn position_tier_rewards_lower_positions() {
    assert_eq!(position_tier(1.0), Tier::Good);
    assert_eq!(position_tier(3.0), Tier::Good);
    assert_eq!(position_tier(4.0), Tier::Warning);
    assert_eq!(position_tier(10.0), Tier::Warning);
    assert_eq!(position_tier(11.0), Tier::Poor);
    for p in 1..40 {
        assert!(position_tier(f64::from(p)) >= position_tier(f64::from(p + 1)));
    }
}

#[test]
fn difficulty_tier_thresholds() {
    assert_eq!(difficulty_tier(29.0), Tier::Good);
    assert_eq!(difficulty_tier(30.0), Tier::Warning);
    assert_eq!(difficulty_tier(59.0), Tier::Warning);
    assert_eq!(difficulty_tier(60.0), Tier::Poor);
}

#[test]
fn visibility_tier_thresholds() {
    assert_eq!(visibility_tier(0.7), Tier::Good);
    assert_eq!(visibility_tier(0.69), Tier::Warning);
    assert_eq!(visibility_tier(0.4), Tier::Warning);
    assert_eq!(visibility_tier(0.39), Tier::Poor);
}

#[test]
fn trend_tier_maps_direction() {
    assert_eq!(trend_tier(Trend::Up), Tier::Good);
    assert_eq!(trend_tier(Trend::Stable), Tier::Warning);
    assert_eq!(trend_tier(Trend::Down), Tier::Poor);
}

#[test]
fn tier_classes_and_icons_are_distinct() {
    assert_eq!(Tier::Good.badge_class(), "text-green-600 bg-green-50");
    assert_eq!(Tier::Poor.text_class(), "text-red-600");
    assert_ne!(Tier::Good.icon(), Tier::Warning.icon());
    assert_ne!(Tier::Warning.icon(), Tier::Poor.icon());
}
