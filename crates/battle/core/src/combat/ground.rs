//! Ground attacks with soldiers and tanks.

use crate::tables::CombatTables;
use crate::unit::BattleUnit;

use super::clamp_to;
use super::result::{BattleResult, Losses};
use super::roll::{MAX_ROLL, roll, tier_from_roll};

/// Soldier strength multiplier when munitions are available.
const ARMED_SOLDIER_MULTIPLIER: f64 = 1.75;
/// Strength of a single tank in soldier-equivalents.
const TANK_STRENGTH: f64 = 40.0;
/// A defender never fields less than this much soldier strength.
const MIN_DEFENDING_SOLDIER_STRENGTH: f64 = 50.0;

const SOLDIER_MUNITIONS_PER_UNIT: f64 = 0.0002;
const TANK_MUNITIONS_PER_UNIT: f64 = 0.01;
const TANK_GASOLINE_PER_UNIT: f64 = 0.01;

/// Money left untouchable per defending city.
const PROTECTED_MONEY_PER_CITY: f64 = 50_000.0;

/// Units committed to a ground attack.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GroundOrder {
    pub soldiers: u64,
    pub tanks: u64,
    /// Arm the attacking soldiers with munitions (1.75x strength).
    pub use_munitions: bool,
}

impl GroundOrder {
    pub const fn new(soldiers: u64, tanks: u64, use_munitions: bool) -> Self {
        Self {
            soldiers,
            tanks,
            use_munitions,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.soldiers == 0 && self.tanks == 0
    }
}

/// Army strengths entering the roll.
#[derive(Clone, Copy, Debug, PartialEq)]
struct GroundStrength {
    soldiers: f64,
    tanks: f64,
}

impl GroundStrength {
    fn total(&self) -> f64 {
        self.soldiers + self.tanks
    }
}

/// Resolve a ground attack.
///
/// # Formula
///
/// ```text
/// att = soldiers * (munitions ? 1.75 : 1) + tanks * 40
/// def = max(50, def.soldiers * (def.munitions > 0 ? 1.75 : 1))
///     + min(def.tanks, def.cities * 250) * 40
/// ```
///
/// Losses scale through `att_factor = (1680 * (3 - roll) + 1800 * roll) / 3`
/// and `def_factor = 1680 + (1800 - att_factor)`, and are rounded to whole
/// units. Loot and infrastructure damage only happen when the attack is not
/// an utter failure.
///
/// The attacker snapshot is accepted for symmetry with the other attack
/// types; only the units in `order` fight.
pub fn calculate_ground_attack(
    _attacker: &BattleUnit,
    defender: &BattleUnit,
    order: &GroundOrder,
    tables: &CombatTables,
) -> BattleResult {
    if order.is_empty() {
        return BattleResult::default();
    }

    let attack_soldiers = order.soldiers as f64;
    let attack_tanks = order.tanks as f64;
    let fighting_tanks = defender
        .tanks
        .min(u64::from(defender.cities).saturating_mul(tables.tank_cap_per_city))
        as f64;

    let att = GroundStrength {
        soldiers: attack_soldiers * soldier_multiplier(order.use_munitions),
        tanks: attack_tanks * TANK_STRENGTH,
    };
    let def = GroundStrength {
        soldiers: (defender.soldiers as f64 * soldier_multiplier(defender.munitions > 0.0))
            .max(MIN_DEFENDING_SOLDIER_STRENGTH),
        tanks: fighting_tanks * TANK_STRENGTH,
    };

    let roll = roll(def.total(), att.total());
    let victory_type = tier_from_roll(roll);
    let fortify = tables.fortify_factor(defender.is_fortified);

    let att_factor = (1680.0 * (MAX_ROLL - roll) + 1800.0 * roll) / 3.0;
    let def_factor = 1680.0 + (1800.0 - att_factor);

    let def_tank_loss =
        ((att.tanks * 0.7 + 1.0) / def_factor + (att.soldiers * 0.7 + 1.0) / 2250.0) * 1.33;
    let att_tank_loss = ((def.tanks * 0.7 + 1.0) / att_factor
        + (def.soldiers * 0.7 + 1.0) / 2250.0)
        * fortify
        * 1.33;
    let att_soldier_loss =
        ((def.soldiers * 0.7 + 1.0) / 22.0 + (def.tanks * 0.7 + 1.0) / 7.33) * fortify * 0.3125;
    // Only the tank term is scaled here, and fortification never applies.
    let def_soldier_loss =
        (att.soldiers * 0.7 + 1.0) / 22.0 + (att.tanks * 0.7 + 1.0) / 7.33 * 0.3125;

    let consumption = tables.consumption.factor(victory_type);
    let def_munitions = TANK_MUNITIONS_PER_UNIT * fighting_tanks
        + if defender.munitions > 0.0 {
            SOLDIER_MUNITIONS_PER_UNIT * defender.soldiers as f64
        } else {
            0.0
        };

    let attacker_losses = Losses {
        soldiers: att_soldier_loss.round(),
        tanks: att_tank_loss.round(),
        munitions: (SOLDIER_MUNITIONS_PER_UNIT * attack_soldiers
            + TANK_MUNITIONS_PER_UNIT * attack_tanks)
            * consumption,
        gasoline: TANK_GASOLINE_PER_UNIT * attack_tanks * consumption,
        ..Losses::default()
    };
    let defender_losses = Losses {
        soldiers: def_soldier_loss.round(),
        tanks: def_tank_loss.round(),
        munitions: def_munitions * consumption,
        gasoline: TANK_GASOLINE_PER_UNIT * fighting_tanks * consumption,
        ..Losses::default()
    };

    let (loot, infra_destroyed) = if victory_type.is_success() {
        let tier = victory_type.weight();
        let cities = f64::from(defender.cities);

        let loot_cap = (defender.money * 0.75)
            .min(defender.money - PROTECTED_MONEY_PER_CITY * cities);
        let loot = clamp_to(
            (attack_soldiers * 0.99 + attack_tanks * 22.625) * tier,
            loot_cap,
        );

        let infra = ((attack_soldiers - defender.soldiers as f64 * 0.5) * 0.000606061
            + (attack_tanks - defender.tanks as f64 * 0.5) * 0.01)
            * 0.95
            * (tier / MAX_ROLL);
        let infra_destroyed = clamp_to(infra, defender.avg_infra * 0.2 + 25.0);

        (loot, infra_destroyed)
    } else {
        (0.0, 0.0)
    };

    BattleResult {
        victory_type,
        roll,
        attacker_losses,
        defender_losses,
        loot,
        infra_destroyed,
    }
}

fn soldier_multiplier(armed: bool) -> f64 {
    if armed { ARMED_SOLDIER_MULTIPLIER } else { 1.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::{VictoryType, assert_close};
    use crate::tables::ConsumptionScaling;

    fn attacker() -> BattleUnit {
        BattleUnit::new()
            .with_soldiers(100_000)
            .with_tanks(5_000)
            .with_munitions(10_000.0)
    }

    fn defender() -> BattleUnit {
        BattleUnit::new()
            .with_soldiers(50_000)
            .with_tanks(1_000)
            .with_munitions(5_000.0)
            .with_cities(5)
            .with_money(1_000_000.0)
            .with_avg_infra(1_000.0)
    }

    fn full_order() -> GroundOrder {
        GroundOrder::new(100_000, 5_000, true)
    }

    #[test]
    fn overwhelming_attack_is_immense_triumph() {
        let result =
            calculate_ground_attack(&attacker(), &defender(), &full_order(), &CombatTables::new());

        assert_eq!(result.victory_type, VictoryType::ImmenseTriumph);
        assert_eq!(result.roll, MAX_ROLL);
        assert!(result.loot > 0.0);
        assert!(result.infra_destroyed > 0.0);
    }

    #[test]
    fn losses_match_reference_values() {
        let result =
            calculate_ground_attack(&attacker(), &defender(), &full_order(), &CombatTables::new());

        assert_eq!(result.defender_losses.tanks, 183.0);
        assert_eq!(result.attacker_losses.tanks, 57.0);
        assert_eq!(result.attacker_losses.soldiers, 2_064.0);
        assert_eq!(result.defender_losses.soldiers, 11_537.0);
        assert_eq!(result.attacker_losses.aircraft, 0.0);
        assert_eq!(result.defender_losses.ships, 0.0);
    }

    #[test]
    fn loot_and_infra_match_reference_values() {
        let result =
            calculate_ground_attack(&attacker(), &defender(), &full_order(), &CombatTables::new());

        // (100000 * 0.99 + 5000 * 22.625) * 3
        assert_close(result.loot, 636_375.0);
        assert_close(result.infra_destroyed, 85.931_846_25);
    }

    #[test]
    fn fortification_raises_only_attacker_losses() {
        let tables = CombatTables::new();
        let open = calculate_ground_attack(&attacker(), &defender(), &full_order(), &tables);
        let fortified = calculate_ground_attack(
            &attacker(),
            &defender().with_fortified(true),
            &full_order(),
            &tables,
        );

        assert_eq!(fortified.attacker_losses.tanks, 71.0);
        assert_eq!(fortified.attacker_losses.soldiers, 2_580.0);
        assert!(fortified.attacker_losses.tanks > open.attacker_losses.tanks);
        assert!(fortified.attacker_losses.soldiers > open.attacker_losses.soldiers);
        assert_eq!(fortified.defender_losses, open.defender_losses);
    }

    #[test]
    fn tier_scaled_consumption_at_immense_triumph() {
        let result =
            calculate_ground_attack(&attacker(), &defender(), &full_order(), &CombatTables::new());

        assert_close(result.attacker_losses.munitions, 70.0);
        assert_close(result.attacker_losses.gasoline, 50.0);
        assert_close(result.defender_losses.munitions, 20.0);
        assert_close(result.defender_losses.gasoline, 10.0);
    }

    #[test]
    fn consumption_scaling_modes_diverge_on_failure() {
        let weak = GroundOrder::new(1_000, 100, false);
        let scaled = calculate_ground_attack(&attacker(), &defender(), &weak, &CombatTables::new());
        let flat = calculate_ground_attack(
            &attacker(),
            &defender(),
            &weak,
            &CombatTables::new().with_consumption(ConsumptionScaling::Flat),
        );

        assert_eq!(scaled.victory_type, VictoryType::UtterFailure);
        // 0.0002 * 1000 + 0.01 * 100 = 1.2
        assert_close(flat.attacker_losses.munitions, 1.2);
        assert_close(scaled.attacker_losses.munitions, 1.2 * 0.4);
        assert_close(flat.defender_losses.gasoline, 10.0);
        assert_close(scaled.defender_losses.gasoline, 4.0);
    }

    #[test]
    fn failed_attack_takes_nothing() {
        let weak = GroundOrder::new(1_000, 100, false);
        let result = calculate_ground_attack(&attacker(), &defender(), &weak, &CombatTables::new());

        assert_eq!(result.victory_type, VictoryType::UtterFailure);
        assert_eq!(result.loot, 0.0);
        assert_eq!(result.infra_destroyed, 0.0);
    }

    #[test]
    fn protected_treasury_blocks_loot() {
        // 5 cities protect 250k; a treasury below that yields nothing.
        let poor = defender().with_money(200_000.0);
        let result =
            calculate_ground_attack(&attacker(), &poor, &full_order(), &CombatTables::new());

        assert_eq!(result.victory_type, VictoryType::ImmenseTriumph);
        assert_eq!(result.loot, 0.0);
    }

    #[test]
    fn loot_capped_at_three_quarters_of_treasury() {
        let target = defender().with_cities(1).with_money(400_000.0);
        let result =
            calculate_ground_attack(&attacker(), &target, &full_order(), &CombatTables::new());

        // min(400k * 0.75, 400k - 50k) = 300k
        assert_close(result.loot, 300_000.0);
    }

    #[test]
    fn infra_capped_by_average_infra() {
        let target = defender().with_avg_infra(0.0);
        let result =
            calculate_ground_attack(&attacker(), &target, &full_order(), &CombatTables::new());

        assert_close(result.infra_destroyed, 25.0);
    }

    #[test]
    fn defending_tanks_capped_per_city() {
        let tables = CombatTables::new();
        let order = GroundOrder::new(20_000, 500, true);
        let capped = defender().with_tanks(1_250);
        let surplus = defender().with_tanks(5_000);

        let a = calculate_ground_attack(&attacker(), &capped, &order, &tables);
        let b = calculate_ground_attack(&attacker(), &surplus, &order, &tables);

        assert_eq!(a.roll, b.roll);
        assert_eq!(a.attacker_losses, b.attacker_losses);
    }

    #[test]
    fn unarmed_empty_defense_still_fields_minimum_strength() {
        let empty = BattleUnit::new();
        let result = calculate_ground_attack(
            &attacker(),
            &empty,
            &GroundOrder::new(20, 0, false),
            &CombatTables::new(),
        );

        // 20 soldiers against the 50-strength floor cannot win.
        assert_eq!(result.victory_type, VictoryType::UtterFailure);
    }

    #[test]
    fn losses_are_never_negative() {
        let tables = CombatTables::new();
        let counts = [0, 1, 10, 1_000, 250_000];
        for soldiers in counts {
            for tanks in counts {
                for def_soldiers in counts {
                    let target = defender().with_soldiers(def_soldiers).with_tanks(tanks);
                    let order = GroundOrder::new(soldiers, tanks, soldiers % 2 == 0);
                    let result = calculate_ground_attack(&attacker(), &target, &order, &tables);
                    for losses in [result.attacker_losses, result.defender_losses] {
                        assert!(losses.soldiers >= 0.0 && losses.tanks >= 0.0);
                        assert!(losses.munitions >= 0.0 && losses.gasoline >= 0.0);
                    }
                    assert!(result.loot >= 0.0 && result.infra_destroyed >= 0.0);
                }
            }
        }
    }

    #[test]
    fn more_attackers_never_lower_the_roll() {
        let tables = CombatTables::new();
        let mut previous = 0.0;
        for soldiers in (0..=200_000).step_by(5_000) {
            let order = GroundOrder::new(soldiers, 0, true);
            let r = calculate_ground_attack(&attacker(), &defender(), &order, &tables).roll;
            assert!(r >= previous);
            previous = r;
        }

        let mut previous = 0.0;
        for tanks in (0..=6_000).step_by(250) {
            let order = GroundOrder::new(10_000, tanks, true);
            let r = calculate_ground_attack(&attacker(), &defender(), &order, &tables).roll;
            assert!(r >= previous);
            previous = r;
        }
    }

    #[test]
    fn empty_order_is_a_no_op() {
        let result = calculate_ground_attack(
            &attacker(),
            &defender(),
            &GroundOrder::default(),
            &CombatTables::new(),
        );
        assert_eq!(result, BattleResult::default());
    }

    #[test]
    fn repeated_calls_are_identical() {
        let tables = CombatTables::new();
        let first = calculate_ground_attack(&attacker(), &defender(), &full_order(), &tables);
        let second = calculate_ground_attack(&attacker(), &defender(), &full_order(), &tables);
        assert_eq!(first, second);
    }
}
