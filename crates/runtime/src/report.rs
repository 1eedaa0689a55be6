//! Record of one executed attack.

use battle_core::{AttackOrder, BattleResult, VictoryOdds, VictoryType, estimate_odds};
use serde::Serialize;

/// What happened when an order was executed.
///
/// `odds` is the closed-form estimate for the same roll, kept so a report can
/// show how likely the outcome was.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BattleReport {
    pub order: AttackOrder,
    pub action_points_spent: u32,
    pub result: BattleResult,
    pub label: &'static str,
    pub odds: VictoryOdds,
}

impl BattleReport {
    pub fn new(order: AttackOrder, action_points_spent: u32, result: BattleResult) -> Self {
        Self {
            order,
            action_points_spent,
            result,
            label: result.victory_type.label(),
            odds: estimate_odds(result.roll),
        }
    }

    pub fn victory_type(&self) -> VictoryType {
        self.result.victory_type
    }
}
