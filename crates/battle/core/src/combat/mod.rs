//! Battle resolution.
//!
//! This module provides pure functions for resolving attacks between two
//! [`BattleUnit`](crate::unit::BattleUnit) snapshots. Every function is
//! deterministic and side-effect free.
//!
//! # Core Functions
//!
//! - [`roll`]: continuous `[0, 3]` comparison of two strengths
//! - [`victory_type`]: roll rounded to a [`VictoryType`]
//! - [`calculate_ground_attack`]: soldiers and tanks, with loot
//! - [`calculate_air_attack`]: aircraft against a chosen target
//! - [`calculate_naval_attack`]: ship engagements
//! - [`AttackOrder::resolve`]: dispatch over all three

pub mod air;
pub mod ground;
pub mod naval;
pub mod order;
pub mod result;
pub mod roll;

pub use air::{AirOrder, AirTarget, calculate_air_attack};
pub use ground::{GroundOrder, calculate_ground_attack};
pub use naval::{NavalOrder, calculate_naval_attack};
pub use order::{AttackKind, AttackOrder};
pub use result::{BattleResult, Losses, VictoryType};
pub use roll::{MAX_ROLL, roll, tier_from_roll, victory_type};

/// `max(0, min(value, upper))`.
///
/// Unlike `f64::clamp` this never panics when `upper` is negative, which
/// happens for loot caps of defenders below their protected treasury.
pub(crate) fn clamp_to(value: f64, upper: f64) -> f64 {
    value.min(upper).max(0.0)
}

#[cfg(test)]
pub(crate) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= 1e-9 * expected.abs().max(1.0),
        "expected {expected}, got {actual}"
    );
}
