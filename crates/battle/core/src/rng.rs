//! RNG oracle for reproducible sampling.
//!
//! The combat formulas are deterministic and never touch randomness. The only
//! consumer is the optional [`MonteCarloEstimator`](crate::odds::MonteCarloEstimator),
//! which draws from an injected oracle so tests can pin its output.
//!
//! # Determinism
//!
//! Implementations must be pure functions of the seed: the same seed must
//! always produce the same value.

/// RNG oracle for deterministic random number generation.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Uniform value in `[0, 1)`.
    fn unit(&self, seed: u64) -> f64 {
        f64::from(self.next_u32(seed)) / (f64::from(u32::MAX) + 1.0)
    }

    /// Uniform value in `[min, max)`. Returns `min` for an empty range.
    fn uniform(&self, seed: u64, min: f64, max: f64) -> f64 {
        if min >= max {
            return min;
        }
        min + (max - min) * self.unit(seed)
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR variant: 64-bit state, 32-bit output, one multiply plus a
/// xorshift and a data-dependent rotate.
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    /// `state' = state * multiplier + increment (mod 2^64)`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::pcg_output(Self::pcg_step(seed))
    }
}

/// Derive an independent seed for one draw of a sampling run.
///
/// # Arguments
///
/// * `base_seed` - Seed chosen by the caller for the whole run
/// * `iteration` - Trial index
/// * `round` - Round within the trial (0, 1, 2)
/// * `side` - 0 for the attacker, 1 for the defender
pub fn compute_seed(base_seed: u64, iteration: u64, round: u32, side: u32) -> u64 {
    // SplitMix64 / FxHash style combiners
    let mut hash = base_seed;
    hash ^= iteration.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= u64::from(round).wrapping_mul(0x517cc1b727220a95);
    hash ^= u64::from(side).wrapping_mul(0x85ebca6b);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}
