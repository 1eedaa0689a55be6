//! Sampling-based odds estimate.

use crate::rng::{PcgRng, RngOracle, compute_seed};

use super::VictoryOdds;

/// Rounds fought per trial; the number won is the trial's tier.
const ROUNDS: u32 = 3;
/// Each round a side fields between 40% and 100% of its strength.
const MIN_STRENGTH_RATIO: f64 = 0.4;

const ATTACKER: u32 = 0;
const DEFENDER: u32 = 1;

/// Monte Carlo victory odds.
///
/// Every trial fights three rounds. In each round both sides draw a strength
/// uniformly from `[0.4 * strength, strength)` and the attacker wins the
/// round on a strictly greater draw. The number of rounds won is the tier of
/// that trial, and the histogram over all trials is the estimate.
///
/// Output depends only on the oracle, the seed and the iteration count, so a
/// fixed seed gives reproducible odds.
#[derive(Clone, Debug)]
pub struct MonteCarloEstimator<R: RngOracle = PcgRng> {
    rng: R,
    seed: u64,
    iterations: u32,
}

impl MonteCarloEstimator<PcgRng> {
    pub fn new(seed: u64) -> Self {
        Self::with_rng(PcgRng, seed)
    }
}

impl<R: RngOracle> MonteCarloEstimator<R> {
    pub const DEFAULT_ITERATIONS: u32 = 1_000;

    pub fn with_rng(rng: R, seed: u64) -> Self {
        Self {
            rng,
            seed,
            iterations: Self::DEFAULT_ITERATIONS,
        }
    }

    /// Sets the trial count. Zero is treated as one trial.
    #[must_use]
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations.max(1);
        self
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    pub fn estimate(&self, defending: f64, attacking: f64) -> VictoryOdds {
        let mut histogram = [0u32; 4];

        for iteration in 0..u64::from(self.iterations) {
            let wins = (0..ROUNDS)
                .filter(|&round| {
                    let attack = self.draw(iteration, round, ATTACKER, attacking);
                    let defense = self.draw(iteration, round, DEFENDER, defending);
                    attack > defense
                })
                .count();
            histogram[wins] += 1;
        }

        let total = f64::from(self.iterations);
        VictoryOdds {
            probabilities: histogram.map(|count| f64::from(count) / total),
        }
    }

    fn draw(&self, iteration: u64, round: u32, side: u32, strength: f64) -> f64 {
        let seed = compute_seed(self.seed, iteration, round, side);
        self.rng.uniform(seed, strength * MIN_STRENGTH_RATIO, strength)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::{VictoryType, assert_close};

    /// Always returns the same draw, so every round is decided by strength alone.
    struct FixedRng(u32);

    impl RngOracle for FixedRng {
        fn next_u32(&self, _seed: u64) -> u32 {
            self.0
        }
    }

    #[test]
    fn same_seed_same_odds() {
        let a = MonteCarloEstimator::new(99).estimate(1_000.0, 1_100.0);
        let b = MonteCarloEstimator::new(99).estimate(1_000.0, 1_100.0);
        assert_eq!(a, b);
    }

    #[test]
    fn odds_sum_to_one() {
        let odds = MonteCarloEstimator::new(3)
            .with_iterations(250)
            .estimate(500.0, 450.0);
        assert_close(odds.total(), 1.0);
    }

    #[test]
    fn zero_attack_always_fails() {
        let odds = MonteCarloEstimator::new(1).estimate(100.0, 0.0);
        assert_eq!(odds, VictoryOdds::certain(VictoryType::UtterFailure));
    }

    #[test]
    fn undefended_target_always_falls() {
        let odds = MonteCarloEstimator::new(1).estimate(0.0, 10.0);
        assert_eq!(odds, VictoryOdds::certain(VictoryType::ImmenseTriumph));
    }

    #[test]
    fn disjoint_ranges_are_certain() {
        // Attacker's weakest draw (400) beats the defender's best (< 100).
        let odds = MonteCarloEstimator::new(5).estimate(100.0, 1_000.0);
        assert_eq!(odds, VictoryOdds::certain(VictoryType::ImmenseTriumph));
    }

    #[test]
    fn even_fight_is_roughly_binomial() {
        let odds = MonteCarloEstimator::new(2024)
            .with_iterations(4_000)
            .estimate(1_000.0, 1_000.0);

        let expected = [0.125, 0.375, 0.375, 0.125];
        for (p, e) in odds.probabilities.iter().zip(expected) {
            assert!((p - e).abs() < 0.04, "{:?}", odds.probabilities);
        }
    }

    #[test]
    fn injected_rng_controls_outcome() {
        // Identical draws: the larger side always wins every round.
        let stronger = MonteCarloEstimator::with_rng(FixedRng(u32::MAX / 2), 0)
            .with_iterations(10)
            .estimate(100.0, 101.0);
        assert_eq!(stronger, VictoryOdds::certain(VictoryType::ImmenseTriumph));

        let weaker = MonteCarloEstimator::with_rng(FixedRng(u32::MAX / 2), 0)
            .with_iterations(10)
            .estimate(101.0, 100.0);
        assert_eq!(weaker, VictoryOdds::certain(VictoryType::UtterFailure));
    }

    #[test]
    fn zero_iterations_runs_one_trial() {
        let estimator = MonteCarloEstimator::new(0).with_iterations(0);
        assert_eq!(estimator.iterations(), 1);
        assert_close(estimator.estimate(10.0, 10.0).total(), 1.0);
    }
}
