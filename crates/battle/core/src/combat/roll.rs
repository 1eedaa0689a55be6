//! Strength comparison and victory tier derivation.

use super::result::VictoryType;

/// Highest possible roll.
pub const MAX_ROLL: f64 = 3.0;

/// Weakest fraction of its strength a side can field on a bad day.
const MIN_STRENGTH_RATIO: f64 = 0.4;

/// Compare two army strengths and produce a continuous roll in `[0, 3]`.
///
/// # Formula
///
/// ```text
/// min_def = defending * 0.4, min_att = attacking * 0.4
/// attacking <= min_def or attacking == 0   -> 0
/// defending < min_att                      -> 3
/// def_mean  = (defending + min_def) / 2
/// greater   = attacking - def_mean
/// less_than = def_mean - min_att
/// greater <= 0 -> 0, less_than <= 0 -> 3
/// otherwise 3 * greater / (greater + less_than)
/// ```
///
/// The early returns guarantee the final division never sees a zero
/// denominator.
pub fn roll(defending: f64, attacking: f64) -> f64 {
    let min_def = defending * MIN_STRENGTH_RATIO;
    let min_att = attacking * MIN_STRENGTH_RATIO;

    if attacking <= min_def || attacking == 0.0 {
        return 0.0;
    }
    if defending < min_att {
        return MAX_ROLL;
    }

    let def_mean = (defending + min_def) / 2.0;
    let greater = attacking - def_mean;
    let less_than = def_mean - min_att;

    if greater <= 0.0 {
        return 0.0;
    }
    if less_than <= 0.0 {
        return MAX_ROLL;
    }

    MAX_ROLL * greater / (greater + less_than)
}

/// Round a roll to its victory tier.
pub fn tier_from_roll(roll: f64) -> VictoryType {
    let rounded = roll.round().clamp(0.0, MAX_ROLL);
    VictoryType::from_ordinal(rounded as u8)
}

/// Victory tier for the given strengths: `clamp(round(roll), 0, 3)`.
pub fn victory_type(defending: f64, attacking: f64) -> VictoryType {
    tier_from_roll(roll(defending, attacking))
}
