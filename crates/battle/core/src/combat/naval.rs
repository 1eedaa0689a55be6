//! Naval attacks between fleets.

use crate::tables::CombatTables;
use crate::unit::BattleUnit;

use super::clamp_to;
use super::result::{BattleResult, Losses};
use super::roll::{MAX_ROLL, roll, tier_from_roll};

const SHIP_LOSS_COEFFICIENT: f64 = 0.44;
const GASOLINE_PER_SHIP: f64 = 2.0;
const MUNITIONS_PER_SHIP: f64 = 3.0;
const INFRA_PER_EXCESS_SHIP: f64 = 2.625;

/// Ships committed to a naval attack.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavalOrder {
    pub ships: u64,
}

impl NavalOrder {
    pub const fn new(ships: u64) -> Self {
        Self { ships }
    }
}

/// Ships sunk by an opposing fleet of `opponent` ships.
fn ship_loss(opponent: f64, fortify: f64) -> f64 {
    SHIP_LOSS_COEFFICIENT * fortify * 12.0 * (opponent * 0.7) / 35.0
}

/// Resolve a naval attack.
///
/// Strengths are raw ship counts with no per-city cap. The attacker's losses
/// carry the defender's fortification multiplier; the defender's do not.
/// Naval attacks never loot.
pub fn calculate_naval_attack(
    _attacker: &BattleUnit,
    defender: &BattleUnit,
    order: &NavalOrder,
    tables: &CombatTables,
) -> BattleResult {
    if order.ships == 0 {
        return BattleResult::default();
    }

    let att_ships = order.ships as f64;
    let def_ships = defender.ships as f64;

    let roll = roll(def_ships, att_ships);
    let victory_type = tier_from_roll(roll);
    let consumption = tables.consumption.factor(victory_type);

    let attacker_losses = Losses {
        ships: ship_loss(def_ships, tables.fortify_factor(defender.is_fortified)),
        gasoline: GASOLINE_PER_SHIP * att_ships * consumption,
        munitions: MUNITIONS_PER_SHIP * att_ships * consumption,
        ..Losses::default()
    };
    let defender_losses = Losses {
        ships: ship_loss(att_ships, 1.0),
        gasoline: GASOLINE_PER_SHIP * def_ships * consumption,
        munitions: MUNITIONS_PER_SHIP * def_ships * consumption,
        ..Losses::default()
    };

    let infra_destroyed = if victory_type.is_success() {
        clamp_to(
            (att_ships - def_ships * 0.5)
                * INFRA_PER_EXCESS_SHIP
                * 0.95
                * (victory_type.weight() / MAX_ROLL),
            defender.avg_infra * 0.5 + 25.0,
        )
    } else {
        0.0
    };

    BattleResult {
        victory_type,
        roll,
        attacker_losses,
        defender_losses,
        loot: 0.0,
        infra_destroyed,
    }
}
