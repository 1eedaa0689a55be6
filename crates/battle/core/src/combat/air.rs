//! Air attacks (airstrikes and dogfights).

use crate::tables::CombatTables;
use crate::unit::BattleUnit;

use super::clamp_to;
use super::result::{BattleResult, Losses};
use super::roll::{MAX_ROLL, roll, tier_from_roll};

/// Gasoline and munitions burned per aircraft per sortie.
const RESOURCES_PER_AIRCRAFT: f64 = 0.25;

/// What an air attack is aimed at.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AirTarget {
    Soldiers,
    Tanks,
    Ships,
    /// Dogfight against the defending air force only.
    #[default]
    Air,
    Infra,
}

/// Aircraft committed to an air attack and their target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AirOrder {
    pub aircraft: u64,
    pub target: AirTarget,
}

impl AirOrder {
    pub const fn new(aircraft: u64, target: AirTarget) -> Self {
        Self { aircraft, target }
    }
}

/// Ground or naval unit cap for an airstrike.
///
/// Damage is `min(count, count * ratio + buffer, excess * multiplier * 0.95)`
/// scaled by `coefficient`.
struct StrikeProfile {
    ratio: f64,
    buffer: f64,
    multiplier: f64,
    coefficient: f64,
}

impl StrikeProfile {
    const SOLDIERS: Self = Self {
        ratio: 0.75,
        buffer: 1_000.0,
        multiplier: 35.0,
        coefficient: 0.58139,
    };
    const TANKS: Self = Self {
        ratio: 0.75,
        buffer: 10.0,
        multiplier: 1.25,
        coefficient: 0.32629,
    };
    const SHIPS: Self = Self {
        ratio: 0.5,
        buffer: 4.0,
        multiplier: 0.0285,
        coefficient: 0.82919,
    };

    fn damage(&self, count: u64, excess: f64) -> f64 {
        let count = count as f64;
        let raw = count
            .min(count * self.ratio + self.buffer)
            .min(excess * self.multiplier * 0.95)
            .max(0.0);
        raw * self.coefficient
    }
}

/// Resolve an air attack.
///
/// Defending strength is `min(def.aircraft, def.cities * 15)`; attacking
/// strength is the committed aircraft. Both air forces always trade losses.
/// On success the chosen ground or naval target takes damage weighted by
/// `roll / 3`, and infrastructure takes collateral damage: the full amount
/// when targeted directly, a third otherwise.
///
/// The attacker snapshot is accepted for symmetry with the other attack
/// types; only the aircraft in `order` fight.
pub fn calculate_air_attack(
    _attacker: &BattleUnit,
    defender: &BattleUnit,
    order: &AirOrder,
    tables: &CombatTables,
) -> BattleResult {
    if order.aircraft == 0 {
        return BattleResult::default();
    }

    let att_strength = order.aircraft as f64;
    let def_strength = defender
        .aircraft
        .min(u64::from(defender.cities).saturating_mul(tables.aircraft_cap_per_city))
        as f64;

    let roll = roll(def_strength, att_strength);
    let victory_type = tier_from_roll(roll);
    let consumption = tables.consumption.factor(victory_type);

    let attacker_losses = Losses {
        aircraft: tables.air_losses.loss(def_strength),
        gasoline: RESOURCES_PER_AIRCRAFT * att_strength * consumption,
        munitions: RESOURCES_PER_AIRCRAFT * att_strength * consumption,
        ..Losses::default()
    };
    let mut defender_losses = Losses {
        aircraft: tables.air_losses.loss(att_strength),
        gasoline: RESOURCES_PER_AIRCRAFT * def_strength * consumption,
        munitions: RESOURCES_PER_AIRCRAFT * def_strength * consumption,
        ..Losses::default()
    };

    let mut infra_destroyed = 0.0;
    if victory_type.is_success() {
        let excess = att_strength - def_strength * 0.5;
        let weight = roll / MAX_ROLL;

        match order.target {
            AirTarget::Soldiers => {
                defender_losses.soldiers =
                    StrikeProfile::SOLDIERS.damage(defender.soldiers, excess) * weight;
            }
            AirTarget::Tanks => {
                defender_losses.tanks =
                    StrikeProfile::TANKS.damage(defender.tanks, excess) * weight;
            }
            AirTarget::Ships => {
                defender_losses.ships =
                    StrikeProfile::SHIPS.damage(defender.ships, excess) * weight;
            }
            AirTarget::Air | AirTarget::Infra => {}
        }

        let infra = clamp_to(
            excess * 0.353_535_35 * 0.95 * (victory_type.weight() / MAX_ROLL),
            defender.avg_infra * 0.5 + 100.0,
        );
        infra_destroyed = match order.target {
            AirTarget::Infra => infra,
            _ => infra / 3.0,
        };
    }

    BattleResult {
        victory_type,
        roll,
        attacker_losses,
        defender_losses,
        loot: 0.0,
        infra_destroyed,
    }
}
