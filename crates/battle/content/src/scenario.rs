//! Scenario definition.

use battle_core::{AttackOrder, BattleUnit, CombatTables};
use serde::{Deserialize, Serialize};

/// A pair of belligerents and the attacks to run between them, in order.
///
/// Scenarios may carry their own [`CombatTables`]; when absent the caller's
/// tables apply.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub name: String,
    pub tables: Option<CombatTables>,
    pub attacker: BattleUnit,
    pub defender: BattleUnit,
    pub orders: Vec<AttackOrder>,
}

impl Scenario {
    pub fn new(attacker: BattleUnit, defender: BattleUnit) -> Self {
        Self {
            attacker,
            defender,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_order(mut self, order: impl Into<AttackOrder>) -> Self {
        self.orders.push(order.into());
        self
    }

    /// Tables to resolve with: the scenario's own, else `fallback`.
    pub fn tables_or(&self, fallback: CombatTables) -> CombatTables {
        self.tables.unwrap_or(fallback)
    }
}
