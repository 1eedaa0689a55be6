//! Deterministic battle resolution shared by every caller.
//!
//! `battle-core` defines the canonical combat formulas (roll, victory tier,
//! ground, air and naval attacks) and exposes them as pure functions over
//! immutable [`BattleUnit`] snapshots. Nothing here mutates caller state;
//! applying a [`BattleResult`] is the job of the runtime crate.
pub mod combat;
pub mod error;
pub mod odds;
pub mod rng;
pub mod tables;
pub mod unit;

pub use combat::{
    AirOrder, AirTarget, AttackKind, AttackOrder, BattleResult, GroundOrder, Losses, NavalOrder,
    VictoryType, calculate_air_attack, calculate_ground_attack, calculate_naval_attack, roll,
    victory_type,
};
pub use error::{BattleError, ErrorSeverity, ValidationError};
pub use odds::{MonteCarloEstimator, VictoryOdds, estimate_odds};
pub use rng::{PcgRng, RngOracle, compute_seed};
pub use tables::{AirLossModel, CombatTables, ConsumptionScaling};
pub use unit::{BattleUnit, UnitKind};
