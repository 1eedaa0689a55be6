//! Force snapshot supplied for each side of a battle.

use crate::error::ValidationError;

/// Military unit categories that can be committed or lost.
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
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum UnitKind {
    Soldiers,
    Tanks,
    Aircraft,
    Ships,
}

/// One side's forces, stockpiles and control state at the moment of an attack.
///
/// The same structure describes attacker and defender. Flags such as
/// `is_ground_control` are produced by earlier battles and copied back onto
/// the unit by the caller; the engine never writes to a `BattleUnit`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleUnit {
    pub soldiers: u64,
    pub tanks: u64,
    pub aircraft: u64,
    pub ships: u64,

    pub munitions: f64,
    pub gasoline: f64,
    pub money: f64,

    /// Average infrastructure level per city.
    pub avg_infra: f64,
    /// Number of cities. Used as a divisor and for per-city caps, so must be >= 1.
    pub cities: u32,

    /// Defensive stance; only meaningful on the defending side.
    pub is_fortified: bool,
    pub is_ground_control: bool,
    pub is_air_control: bool,
    pub is_blockaded: bool,

    pub action_points: u32,
    /// Tracked by the caller, not consumed by any formula.
    pub resistance: f64,
}

impl Default for BattleUnit {
    fn default() -> Self {
        Self {
            soldiers: 0,
            tanks: 0,
            aircraft: 0,
            ships: 0,
            munitions: 0.0,
            gasoline: 0.0,
            money: 0.0,
            avg_infra: 0.0,
            cities: 1,
            is_fortified: false,
            is_ground_control: false,
            is_air_control: false,
            is_blockaded: false,
            action_points: 0,
            resistance: 100.0,
        }
    }
}

impl BattleUnit {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_soldiers(mut self, soldiers: u64) -> Self {
        self.soldiers = soldiers;
        self
    }

    #[must_use]
    pub const fn with_tanks(mut self, tanks: u64) -> Self {
        self.tanks = tanks;
        self
    }

    #[must_use]
    pub const fn with_aircraft(mut self, aircraft: u64) -> Self {
        self.aircraft = aircraft;
        self
    }

    #[must_use]
    pub const fn with_ships(mut self, ships: u64) -> Self {
        self.ships = ships;
        self
    }

    #[must_use]
    pub const fn with_munitions(mut self, munitions: f64) -> Self {
        self.munitions = munitions;
        self
    }

    #[must_use]
    pub const fn with_gasoline(mut self, gasoline: f64) -> Self {
        self.gasoline = gasoline;
        self
    }

    #[must_use]
    pub const fn with_money(mut self, money: f64) -> Self {
        self.money = money;
        self
    }

    #[must_use]
    pub const fn with_avg_infra(mut self, avg_infra: f64) -> Self {
        self.avg_infra = avg_infra;
        self
    }

    #[must_use]
    pub const fn with_cities(mut self, cities: u32) -> Self {
        self.cities = cities;
        self
    }

    #[must_use]
    pub const fn with_fortified(mut self, is_fortified: bool) -> Self {
        self.is_fortified = is_fortified;
        self
    }

    #[must_use]
    pub const fn with_action_points(mut self, action_points: u32) -> Self {
        self.action_points = action_points;
        self
    }

    /// Number of units of the given kind.
    pub const fn count(&self, kind: UnitKind) -> u64 {
        match kind {
            UnitKind::Soldiers => self.soldiers,
            UnitKind::Tanks => self.tanks,
            UnitKind::Aircraft => self.aircraft,
            UnitKind::Ships => self.ships,
        }
    }

    /// Mutable access to the count of the given kind.
    pub fn count_mut(&mut self, kind: UnitKind) -> &mut u64 {
        match kind {
            UnitKind::Soldiers => &mut self.soldiers,
            UnitKind::Tanks => &mut self.tanks,
            UnitKind::Aircraft => &mut self.aircraft,
            UnitKind::Ships => &mut self.ships,
        }
    }

    /// Checks the preconditions the formulas rely on.
    ///
    /// Counts are unsigned so only `cities` and the floating-point fields can
    /// be malformed.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.cities == 0 {
            return Err(ValidationError::NoCities);
        }

        let stockpiles = [
            ("munitions", self.munitions),
            ("gasoline", self.gasoline),
            ("money", self.money),
            ("avg_infra", self.avg_infra),
            ("resistance", self.resistance),
        ];
        for (field, value) in stockpiles {
            if !value.is_finite() {
                return Err(ValidationError::NonFinite { field });
            }
            if value < 0.0 {
                return Err(ValidationError::NegativeStockpile { field, value });
            }
        }

        Ok(())
    }
}
