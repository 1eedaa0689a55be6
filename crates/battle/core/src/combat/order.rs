//! Attack directives across all attack categories.

use crate::tables::CombatTables;
use crate::unit::{BattleUnit, UnitKind};

use super::air::{AirOrder, calculate_air_attack};
use super::ground::{GroundOrder, calculate_ground_attack};
use super::naval::{NavalOrder, calculate_naval_attack};
use super::result::BattleResult;

/// Attack category, without the committed units.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AttackKind {
    Ground,
    Air,
    Naval,
}

/// One attack of any category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AttackOrder {
    Ground(GroundOrder),
    Air(AirOrder),
    Naval(NavalOrder),
}

impl AttackOrder {
    pub const GROUND_ACTION_POINTS: u32 = 3;
    pub const AIR_ACTION_POINTS: u32 = 4;
    pub const NAVAL_ACTION_POINTS: u32 = 4;

    pub const fn kind(&self) -> AttackKind {
        match self {
            Self::Ground(_) => AttackKind::Ground,
            Self::Air(_) => AttackKind::Air,
            Self::Naval(_) => AttackKind::Naval,
        }
    }

    /// Action points the attacker must spend. Enforced by the caller.
    pub const fn action_point_cost(&self) -> u32 {
        match self {
            Self::Ground(_) => Self::GROUND_ACTION_POINTS,
            Self::Air(_) => Self::AIR_ACTION_POINTS,
            Self::Naval(_) => Self::NAVAL_ACTION_POINTS,
        }
    }

    /// Units the attacker commits, by kind.
    pub fn committed(&self) -> Vec<(UnitKind, u64)> {
        match self {
            Self::Ground(order) => vec![
                (UnitKind::Soldiers, order.soldiers),
                (UnitKind::Tanks, order.tanks),
            ],
            Self::Air(order) => vec![(UnitKind::Aircraft, order.aircraft)],
            Self::Naval(order) => vec![(UnitKind::Ships, order.ships)],
        }
    }

    /// Dispatch to the matching attack formula.
    pub fn resolve(
        &self,
        attacker: &BattleUnit,
        defender: &BattleUnit,
        tables: &CombatTables,
    ) -> BattleResult {
        match self {
            Self::Ground(order) => calculate_ground_attack(attacker, defender, order, tables),
            Self::Air(order) => calculate_air_attack(attacker, defender, order, tables),
            Self::Naval(order) => calculate_naval_attack(attacker, defender, order, tables),
        }
    }
}

impl From<GroundOrder> for AttackOrder {
    fn from(order: GroundOrder) -> Self {
        Self::Ground(order)
    }
}

impl From<AirOrder> for AttackOrder {
    fn from(order: AirOrder) -> Self {
        Self::Air(order)
    }
}

impl From<NavalOrder> for AttackOrder {
    fn from(order: NavalOrder) -> Self {
        Self::Naval(order)
    }
}
