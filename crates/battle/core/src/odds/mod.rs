//! Pre-attack outcome estimates.
//!
//! Two models are offered and they do not agree:
//!
//! - [`estimate_odds`] (default): closed-form smoothing of a single roll.
//!   Deterministic, used for odds displays.
//! - [`MonteCarloEstimator`]: samples three strength rounds per trial from an
//!   injected [`RngOracle`](crate::rng::RngOracle). Opt-in only.
//!
//! Neither is used by the attack functions themselves.

mod monte_carlo;

pub use monte_carlo::MonteCarloEstimator;

use crate::combat::{MAX_ROLL, VictoryType, roll};

/// Fractional part of a roll below which the lower tier is certain.
const SMOOTHING_LOW: f64 = 0.3;
/// Fractional part of a roll above which the upper tier is certain.
const SMOOTHING_HIGH: f64 = 0.7;

/// Probability of each victory tier, indexed by tier ordinal.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VictoryOdds {
    pub probabilities: [f64; 4],
}

impl VictoryOdds {
    /// All probability mass on one tier.
    pub fn certain(tier: VictoryType) -> Self {
        let mut probabilities = [0.0; 4];
        probabilities[tier.ordinal() as usize] = 1.0;
        Self { probabilities }
    }

    /// Closed-form odds for two army strengths.
    pub fn from_strengths(defending: f64, attacking: f64) -> Self {
        estimate_odds(roll(defending, attacking))
    }

    pub fn get(&self, tier: VictoryType) -> f64 {
        self.probabilities[tier.ordinal() as usize]
    }

    /// Tier with the highest probability; ties favor the better outcome.
    pub fn most_likely(&self) -> VictoryType {
        let mut best = 0;
        for (index, &p) in self.probabilities.iter().enumerate() {
            if p >= self.probabilities[best] {
                best = index;
            }
        }
        VictoryType::from_ordinal(best as u8)
    }

    pub fn total(&self) -> f64 {
        self.probabilities.iter().sum()
    }
}

/// Spread a roll over the four tiers.
///
/// With `base = floor(roll)` and `frac = roll - base`: a fraction below 0.3
/// lands entirely on `base`, above 0.7 entirely on `base + 1`, and in
/// between the mass moves linearly from one to the other. Rolls are clamped
/// to `[0, 3]` first.
pub fn estimate_odds(roll: f64) -> VictoryOdds {
    let roll = if roll.is_nan() {
        0.0
    } else {
        roll.clamp(0.0, MAX_ROLL)
    };
    let base = roll.floor();
    let frac = roll - base;
    let lower = VictoryType::from_ordinal(base as u8);

    if lower == VictoryType::ImmenseTriumph || frac < SMOOTHING_LOW {
        return VictoryOdds::certain(lower);
    }

    let upper = VictoryType::from_ordinal(lower.ordinal() + 1);
    if frac > SMOOTHING_HIGH {
        return VictoryOdds::certain(upper);
    }

    let upper_share = (frac - SMOOTHING_LOW) / (SMOOTHING_HIGH - SMOOTHING_LOW);
    let mut probabilities = [0.0; 4];
    probabilities[lower.ordinal() as usize] = 1.0 - upper_share;
    probabilities[upper.ordinal() as usize] = upper_share;
    VictoryOdds { probabilities }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::{assert_close, tier_from_roll};

    #[test]
    fn odds_always_sum_to_one() {
        for step in 0..=300 {
            let odds = estimate_odds(f64::from(step) / 100.0);
            assert_close(odds.total(), 1.0);
            assert!(odds.probabilities.iter().all(|p| (0.0..=1.0).contains(p)));
        }
    }

    #[test]
    fn outside_window_is_certain() {
        assert_eq!(estimate_odds(0.0), VictoryOdds::certain(VictoryType::UtterFailure));
        assert_eq!(estimate_odds(1.25), VictoryOdds::certain(VictoryType::PyrrhicVictory));
        assert_eq!(estimate_odds(1.75), VictoryOdds::certain(VictoryType::ModerateSuccess));
        assert_eq!(estimate_odds(3.0), VictoryOdds::certain(VictoryType::ImmenseTriumph));
    }

    #[test]
    fn window_splits_linearly() {
        let odds = estimate_odds(1.5);
        assert_close(odds.get(VictoryType::PyrrhicVictory), 0.5);
        assert_close(odds.get(VictoryType::ModerateSuccess), 0.5);

        let odds = estimate_odds(2.4);
        assert_close(odds.get(VictoryType::ModerateSuccess), 0.75);
        assert_close(odds.get(VictoryType::ImmenseTriumph), 0.25);
    }

    #[test]
    fn most_likely_agrees_with_rounding() {
        for step in 0..=300 {
            let roll = f64::from(step) / 100.0;
            assert_eq!(estimate_odds(roll).most_likely(), tier_from_roll(roll), "roll {roll}");
        }
    }

    #[test]
    fn out_of_range_rolls_are_clamped() {
        assert_eq!(estimate_odds(-1.0), VictoryOdds::certain(VictoryType::UtterFailure));
        assert_eq!(estimate_odds(7.0), VictoryOdds::certain(VictoryType::ImmenseTriumph));
        assert_eq!(estimate_odds(f64::NAN), VictoryOdds::certain(VictoryType::UtterFailure));
    }

    #[test]
    fn from_strengths_uses_roll() {
        assert_eq!(
            VictoryOdds::from_strengths(0.0, 10.0),
            VictoryOdds::certain(VictoryType::ImmenseTriumph)
        );
        assert_eq!(
            VictoryOdds::from_strengths(100.0, 100.0),
            estimate_odds(1.5)
        );
    }
}
