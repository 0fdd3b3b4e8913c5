//! Random draws used by every damage roll

use rand::Rng;
use std::collections::VecDeque;

/// Source of uniform randomness for combat rolls
///
/// Every `rand::Rng` is a `RandomSource`, so production code passes a
/// `StdRng`/`ThreadRng` and tests pass a seeded rng or a [`ScriptedRandom`].
pub trait RandomSource {
    /// Uniform draw in `[0, 1)`
    fn value(&mut self) -> f64;

    /// Uniform integer in `min..=max`. Returns `min` if the range is empty.
    fn range_inclusive(&mut self, min: i32, max: i32) -> i32;

    /// Bernoulli trial: true with probability `probability`
    fn chance(&mut self, probability: f64) -> bool {
        self.value() < probability
    }
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn value(&mut self) -> f64 {
        self.gen::<f64>()
    }

    fn range_inclusive(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        self.gen_range(min..=max)
    }
}

/// Replays a fixed sequence of draws (for deterministic testing)
///
/// Each call to [`RandomSource::value`] pops the next scripted value.
/// [`RandomSource::range_inclusive`] also consumes one value `u` and maps it
/// to `min + floor(u * (max - min + 1))`. Once the script runs out every draw
/// returns `fallback`, which defaults to `0.999` so that every remaining
/// Bernoulli trial fails.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    draws: VecDeque<f64>,
    fallback: f64,
    consumed: usize,
}

impl ScriptedRandom {
    /// Create a source that replays `draws` in order
    pub fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        ScriptedRandom {
            draws: draws.into_iter().collect(),
            fallback: 0.999,
            consumed: 0,
        }
    }

    /// Value returned once the script is exhausted
    pub fn with_fallback(mut self, fallback: f64) -> Self {
        self.fallback = fallback;
        self
    }

    /// Append more draws to the end of the script
    pub fn push(&mut self, draw: f64) {
        self.draws.push_back(draw);
    }

    /// Number of scripted draws not yet consumed
    pub fn remaining(&self) -> usize {
        self.draws.len()
    }

    /// Total number of draws taken so far (scripted or fallback)
    pub fn consumed(&self) -> usize {
        self.consumed
    }
}

impl RandomSource for ScriptedRandom {
    fn value(&mut self) -> f64 {
        self.consumed += 1;
        self.draws.pop_front().unwrap_or(self.fallback)
    }

    fn range_inclusive(&mut self, min: i32, max: i32) -> i32 {
        let u = self.value().clamp(0.0, 1.0);
        if min >= max {
            return min;
        }
        let span = (max - min + 1) as f64;
        let offset = (u * span).floor() as i32;
        (min + offset).min(max)
    }
}

/// Round half to even, matching the rounding used for every damage value
pub(crate) fn round_damage(value: f64) -> i32 {
    value.round_ties_even() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_scripted_values_in_order() {
        let mut rng = ScriptedRandom::new([0.1, 0.5, 0.9]);
        assert!((rng.value() - 0.1).abs() < f64::EPSILON);
        assert!((rng.value() - 0.5).abs() < f64::EPSILON);
        assert_eq!(rng.remaining(), 1);
        assert!((rng.value() - 0.9).abs() < f64::EPSILON);
        assert_eq!(rng.consumed(), 3);
    }

    #[test]
    fn test_scripted_fallback_fails_trials() {
        let mut rng = ScriptedRandom::new([]);
        assert!(!rng.chance(0.95));
        assert_eq!(rng.consumed(), 1);

        let mut always = ScriptedRandom::new([]).with_fallback(0.0);
        assert!(always.chance(0.01));
    }

    #[test]
    fn test_scripted_range_mapping() {
        let mut rng = ScriptedRandom::new([0.0, 0.999, 0.5]);
        assert_eq!(rng.range_inclusive(-3, 5), -3);
        assert_eq!(rng.range_inclusive(-3, 5), 5);
        // 0.5 * 9 = 4.5 -> offset 4
        assert_eq!(rng.range_inclusive(-3, 5), 1);
    }

    #[test]
    fn test_rng_range_stays_inclusive() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let v = rng.range_inclusive(-3, 5);
            assert!((-3..=5).contains(&v));
        }
        assert_eq!(rng.range_inclusive(4, 4), 4);
    }

    #[test]
    fn test_round_damage_ties_to_even() {
        assert_eq!(round_damage(22.5), 22);
        assert_eq!(round_damage(23.5), 24);
        assert_eq!(round_damage(11.2), 11);
        assert_eq!(round_damage(30.0), 30);
    }
}
