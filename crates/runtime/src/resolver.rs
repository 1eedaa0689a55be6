//! Executes attack orders against caller-owned units.

use battle_core::{AttackOrder, BattleResult, BattleUnit, CombatTables};

use crate::apply::apply_result;
use crate::error::{Result, RuntimeError, Side};
use crate::report::BattleReport;

/// Runs attacks with a fixed set of [`CombatTables`].
///
/// The resolver holds no battle state; all mutation happens on the units
/// passed to [`execute`](Self::execute).
#[derive(Clone, Copy, Debug, Default)]
pub struct BattleResolver {
    tables: CombatTables,
}

impl BattleResolver {
    pub const fn new(tables: CombatTables) -> Self {
        Self { tables }
    }

    pub const fn tables(&self) -> &CombatTables {
        &self.tables
    }

    /// Execute `order` and write the outcome onto both units.
    ///
    /// Checks run in this order: both units are valid, the attacker owns every
    /// unit the order commits and any munitions it asks to use, the attacker
    /// has the action points. If any check
    /// fails neither unit is modified.
    pub fn execute(
        &self,
        attacker: &mut BattleUnit,
        defender: &mut BattleUnit,
        order: &AttackOrder,
    ) -> Result<BattleReport> {
        let result = self.preview(attacker, defender, order)?;

        let cost = order.action_point_cost();
        attacker.action_points -= cost;
        apply_result(attacker, defender, order, &result);

        tracing::debug!(
            "{} attack resolved: {} (roll {:.3}, loot {:.2}, infra {:.2})",
            order.kind(),
            result.victory_type,
            result.roll,
            result.loot,
            result.infra_destroyed
        );

        Ok(BattleReport::new(*order, cost, result))
    }

    /// Run every check and the formula without touching either unit.
    pub fn preview(
        &self,
        attacker: &BattleUnit,
        defender: &BattleUnit,
        order: &AttackOrder,
    ) -> Result<BattleResult> {
        Self::validate(attacker, defender, order)?;
        Ok(order.resolve(attacker, defender, &self.tables))
    }

    fn validate(attacker: &BattleUnit, defender: &BattleUnit, order: &AttackOrder) -> Result<()> {
        attacker
            .validate()
            .map_err(|source| RuntimeError::InvalidUnit {
                side: Side::Attacker,
                source,
            })?;
        defender
            .validate()
            .map_err(|source| RuntimeError::InvalidUnit {
                side: Side::Defender,
                source,
            })?;

        for (kind, requested) in order.committed() {
            let available = attacker.count(kind);
            if requested > available {
                tracing::warn!(
                    "{} order rejected: {} {} committed, {} available",
                    order.kind(),
                    requested,
                    kind,
                    available
                );
                return Err(RuntimeError::InsufficientUnits {
                    kind,
                    requested,
                    available,
                });
            }
        }

        // Armed soldiers fight at 1.75x and must have munitions to spend.
        let armed = matches!(
            order,
            AttackOrder::Ground(ground) if ground.use_munitions && ground.soldiers > 0
        );
        if armed && attacker.munitions <= 0.0 {
            return Err(RuntimeError::InsufficientResources {
                resource: "munitions",
                available: attacker.munitions,
            });
        }

        let required = order.action_point_cost();
        if attacker.action_points < required {
            return Err(RuntimeError::InsufficientActionPoints {
                required,
                available: attacker.action_points,
            });
        }

        Ok(())
    }
}
