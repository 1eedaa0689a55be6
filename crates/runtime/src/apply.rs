//! Writes a [`BattleResult`] back onto the two units.
//!
//! Every quantity is floored at zero. Unit losses are rounded to whole units
//! before they are removed; stockpile losses are subtracted exactly.

use battle_core::{AttackOrder, BattleResult, BattleUnit, Losses, VictoryType};

/// Apply losses, loot, infrastructure damage and control changes.
///
/// Assumes both units already passed [`BattleUnit::validate`]; with zero
/// cities the infrastructure loss is skipped.
pub fn apply_result(
    attacker: &mut BattleUnit,
    defender: &mut BattleUnit,
    order: &AttackOrder,
    result: &BattleResult,
) {
    apply_losses(attacker, &result.attacker_losses);
    apply_losses(defender, &result.defender_losses);
    transfer_loot(attacker, defender, result.loot);
    destroy_infra(defender, result.infra_destroyed);

    if result.victory_type == VictoryType::ImmenseTriumph {
        propagate_control(attacker, defender, order);
    }
}

pub fn apply_losses(unit: &mut BattleUnit, losses: &Losses) {
    remove_units(&mut unit.soldiers, losses.soldiers);
    remove_units(&mut unit.tanks, losses.tanks);
    remove_units(&mut unit.aircraft, losses.aircraft);
    remove_units(&mut unit.ships, losses.ships);
    unit.munitions = (unit.munitions - losses.munitions).max(0.0);
    unit.gasoline = (unit.gasoline - losses.gasoline).max(0.0);
}

fn remove_units(count: &mut u64, loss: f64) {
    // Saturating float-to-int cast; NaN becomes 0.
    let lost = loss.max(0.0).round() as u64;
    *count = count.saturating_sub(lost);
}

fn transfer_loot(attacker: &mut BattleUnit, defender: &mut BattleUnit, loot: f64) {
    if loot <= 0.0 {
        return;
    }
    let taken = loot.min(defender.money.max(0.0));
    defender.money -= taken;
    attacker.money += taken;
}

/// Infrastructure loss is spread over every city of the defender.
fn destroy_infra(defender: &mut BattleUnit, infra_destroyed: f64) {
    if infra_destroyed <= 0.0 || defender.cities == 0 {
        return;
    }
    let per_city = infra_destroyed / f64::from(defender.cities);
    defender.avg_infra = (defender.avg_infra - per_city).max(0.0);
}

/// Control changes from an immense triumph.
///
/// Ground wins take ground control from the defender, air wins take air
/// superiority, naval wins blockade the defender.
fn propagate_control(attacker: &mut BattleUnit, defender: &mut BattleUnit, order: &AttackOrder) {
    match order {
        AttackOrder::Ground(_) => {
            attacker.is_ground_control = true;
            defender.is_ground_control = false;
        }
        AttackOrder::Air(_) => {
            attacker.is_air_control = true;
            defender.is_air_control = false;
        }
        AttackOrder::Naval(_) => {
            defender.is_blockaded = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::{AirOrder, AirTarget, GroundOrder, NavalOrder};

    fn result(victory_type: VictoryType) -> BattleResult {
        BattleResult {
            victory_type,
            ..BattleResult::default()
        }
    }

    #[test]
    fn losses_round_to_whole_units() {
        let mut unit = BattleUnit::new().with_soldiers(100).with_tanks(10);
        apply_losses(
            &mut unit,
            &Losses {
                soldiers: 10.4,
                tanks: 2.5,
                ..Losses::default()
            },
        );
        assert_eq!(unit.soldiers, 90);
        assert_eq!(unit.tanks, 7);
    }

    #[test]
    fn losses_never_go_negative() {
        let mut unit = BattleUnit::new()
            .with_aircraft(3)
            .with_munitions(5.0)
            .with_gasoline(1.0);
        apply_losses(
            &mut unit,
            &Losses {
                aircraft: 40.0,
                munitions: 12.5,
                gasoline: 0.25,
                ..Losses::default()
            },
        );
        assert_eq!(unit.aircraft, 0);
        assert_eq!(unit.munitions, 0.0);
        assert_eq!(unit.gasoline, 0.75);
    }

    #[test]
    fn loot_moves_money_between_sides() {
        let mut attacker = BattleUnit::new().with_money(100.0);
        let mut defender = BattleUnit::new().with_money(1_000.0);
        let outcome = BattleResult {
            loot: 250.0,
            ..result(VictoryType::ModerateSuccess)
        };

        apply_result(
            &mut attacker,
            &mut defender,
            &GroundOrder::new(1, 0, false).into(),
            &outcome,
        );
        assert_eq!(attacker.money, 350.0);
        assert_eq!(defender.money, 750.0);
    }

    #[test]
    fn infra_loss_is_averaged_over_cities() {
        let mut attacker = BattleUnit::new();
        let mut defender = BattleUnit::new().with_cities(4).with_avg_infra(500.0);
        let outcome = BattleResult {
            infra_destroyed: 100.0,
            ..result(VictoryType::PyrrhicVictory)
        };

        apply_result(
            &mut attacker,
            &mut defender,
            &NavalOrder::new(5).into(),
            &outcome,
        );
        assert_eq!(defender.avg_infra, 475.0);

        let ruin = BattleResult {
            infra_destroyed: 10_000.0,
            ..outcome
        };
        apply_result(&mut attacker, &mut defender, &NavalOrder::new(5).into(), &ruin);
        assert_eq!(defender.avg_infra, 0.0);
    }

    #[test]
    fn triumphs_change_control() {
        let mut attacker = BattleUnit::new();
        let mut defender = BattleUnit::new();
        defender.is_ground_control = true;
        defender.is_air_control = true;
        let triumph = result(VictoryType::ImmenseTriumph);

        apply_result(
            &mut attacker,
            &mut defender,
            &GroundOrder::new(10, 0, false).into(),
            &triumph,
        );
        assert!(attacker.is_ground_control);
        assert!(!defender.is_ground_control);
        assert!(defender.is_air_control);

        apply_result(
            &mut attacker,
            &mut defender,
            &AirOrder::new(5, AirTarget::Soldiers).into(),
            &triumph,
        );
        assert!(attacker.is_air_control);
        assert!(!defender.is_air_control);

        apply_result(&mut attacker, &mut defender, &NavalOrder::new(5).into(), &triumph);
        assert!(defender.is_blockaded);
        assert!(!attacker.is_blockaded);
    }

    #[test]
    fn lesser_wins_leave_control_alone() {
        let mut attacker = BattleUnit::new();
        let mut defender = BattleUnit::new();
        defender.is_ground_control = true;

        apply_result(
            &mut attacker,
            &mut defender,
            &GroundOrder::new(10, 0, false).into(),
            &result(VictoryType::ModerateSuccess),
        );
        assert!(!attacker.is_ground_control);
        assert!(defender.is_ground_control);
    }
}
