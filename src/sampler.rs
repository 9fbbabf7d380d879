//! Randomness capability for the mock generators.
//!
//! DESIGN
//! ======
//! Generators never touch `rand` directly. They draw unit floats from a
//! `Sampler` so production uses thread-local randomness, demos can pin a
//! seed, and tests script exact sequences.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform floats in `[0, 1)`.
pub trait Sampler: Send + Sync {
    fn next_unit(&self) -> f64;
}

// =============================================================================
// IMPLEMENTATIONS
// =============================================================================

/// Thread-local RNG; nondeterministic.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngSampler;

impl Sampler for ThreadRngSampler {
    fn next_unit(&self) -> f64 {
        rand::rng().random::<f64>()
    }
}

/// Seeded RNG; reproducible across runs with the same seed.
pub struct SeededSampler {
    rng: Mutex<StdRng>,
}

impl SeededSampler {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { rng: Mutex::new(StdRng::seed_from_u64(seed)) }
    }
}

impl Sampler for SeededSampler {
    fn next_unit(&self) -> f64 {
        self.rng
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .random::<f64>()
    }
}

/// Replays a fixed list of values, wrapping at the end.
///
/// Values are clamped into `[0, 1)`. An empty list always yields `0.0`.
pub struct SequenceSampler {
    values: Vec<f64>,
    cursor: AtomicUsize,
}

impl SequenceSampler {
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, cursor: AtomicUsize::new(0) }
    }

    /// Always returns `value`.
    #[must_use]
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }
}

impl Sampler for SequenceSampler {
    fn next_unit(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let idx = self.cursor.fetch_add(1, Ordering::Relaxed) % self.values.len();
        clamp_unit(self.values[idx])
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0 - f64::EPSILON)
}

// =============================================================================
// DRAW HELPERS
// =============================================================================

/// `floor(r * span) + min`, so the result lies in `[min, min + span)`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn int_in(sampler: &dyn Sampler, min: u32, span: u32) -> u32 {
    let offset = (sampler.next_unit() * f64::from(span)).floor() as u32;
    min + offset.min(span.saturating_sub(1))
}

/// `r * span + min` rounded to `decimals` places.
#[must_use]
pub fn float_in(sampler: &dyn Sampler, min: f64, span: f64, decimals: u32) -> f64 {
    round_to(sampler.next_unit() * span + min, decimals)
}

/// Round half away from zero to `decimals` places.
#[must_use]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(i32::try_from(decimals).unwrap_or(i32::MAX));
    (value * factor).round() / factor
}

#[cfg(test)]
#[path = "sampler_test.rs"]
mod tests;
