//! Applies battle outcomes to caller-owned units.
//!
//! `battle-core` computes what a battle does; this crate performs the
//! bookkeeping around it. [`BattleResolver::execute`] validates both sides,
//! charges action points, runs the formula for the order and writes losses,
//! loot, infrastructure damage and control changes back onto the units.
//!
//! Modules are organized by responsibility:
//! - [`resolver`] hosts the entry point and pre-battle checks
//! - [`apply`] mutates units from a [`battle_core::BattleResult`]
//! - [`report`] is the serializable record of one executed attack
pub mod apply;
pub mod error;
pub mod report;
pub mod resolver;

pub use apply::apply_result;
pub use error::{Result, RuntimeError, Side};
pub use report::BattleReport;
pub use resolver::BattleResolver;
