use super::*;

#[test]
fn sequence_sampler_replays_and_wraps() {
    let sampler = SequenceSampler::new(vec![0.1, 0.5]);
    assert!((sampler.next_unit() - 0.1).abs() < f64::EPSILON);
    assert!((sampler.next_unit() - 0.5).abs() < f64::EPSILON);
    assert!((sampler.next_unit() - 0.1).abs() < f64::EPSILON);
}

#[test]
fn sequence_sampler_clamps_out_of_range_values() {
    let sampler = SequenceSampler::new(vec![-3.0, 1.0, f64::NAN]);
    assert!(sampler.next_unit().abs() < f64::EPSILON);
    assert!(sampler.next_unit() < 1.0);
    assert!(sampler.next_unit().abs() < f64::EPSILON);
}

#[test]
fn empty_sequence_yields_zero() {
    let sampler = SequenceSampler::new(Vec::new());
    assert!(sampler.next_unit().abs() < f64::EPSILON);
}

#[test]
fn int_in_stays_below_upper_bound() {
    let high = SequenceSampler::constant(1.0);
    assert_eq!(int_in(&high, 1000, 5000), 5999);
    let low = SequenceSampler::constant(0.0);
    assert_eq!(int_in(&low, 1000, 5000), 1000);
}

#[test]
fn float_in_rounds_to_requested_places() {
    let sampler = SequenceSampler::constant(0.123_456);
    let value = float_in(&sampler, 0.2, 0.8, 2);
    assert!((value - 0.3).abs() < 1e-9);
}

#[test]
fn round_to_handles_zero_decimals() {
    assert!((round_to(12.5, 0) - 13.0).abs() < f64::EPSILON);
    assert!((round_to(12.44, 1) - 12.4).abs() < 1e-9);
}

#[test]
fn seeded_sampler_is_reproducible() {
    let a = SeededSampler::new(42);
    let b = SeededSampler::new(42);
    for _ in 0..16 {
        let (x, y) = (a.next_unit(), b.next_unit());
        assert!((x - y).abs() < f64::EPSILON);
        assert!((0.0..1.0).contains(&x));
    }
}

#[test]
fn thread_sampler_stays_in_unit_interval() {
    let sampler = ThreadRngSampler;
    for _ in 0..64 {
        assert!((0.0..1.0).contains(&sampler.next_unit()));
    }
}
