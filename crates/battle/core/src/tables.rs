//! Balance tables for the combat formulas.
//!
//! Formula coefficients that must never drift live as constants next to the
//! formula that uses them. `CombatTables` only carries the knobs a caller may
//! legitimately change: the two formula variants that exist in the wild and
//! the per-city caps.

use crate::combat::VictoryType;

/// How resource consumption reacts to the outcome of an attack.
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
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ConsumptionScaling {
    /// Base consumption scaled by 0.4 / 0.7 / 0.9 / 1.0 for tiers 0..=3.
    #[default]
    TierScaled,
    /// Base consumption regardless of outcome. Superseded by `TierScaled`.
    Flat,
}

impl ConsumptionScaling {
    /// Consumption multiplier per victory tier, indexed by tier ordinal.
    pub const TIER_FACTORS: [f64; 4] = [0.4, 0.7, 0.9, 1.0];

    /// Multiplier applied to base consumption for the given outcome.
    pub fn factor(&self, victory: VictoryType) -> f64 {
        match self {
            Self::TierScaled => Self::TIER_FACTORS[victory.ordinal() as usize],
            Self::Flat => 1.0,
        }
    }
}

/// Aircraft attrition formula used by air attacks.
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
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AirLossModel {
    /// `(opponent * 0.7 + 1) / 54 * 9`
    #[default]
    Standard,
    /// `(opponent * 0.7 + 1) / 140`
    Legacy,
}

impl AirLossModel {
    /// Aircraft lost against `opponent_strength` defending or attacking aircraft.
    pub fn loss(&self, opponent_strength: f64) -> f64 {
        let engaged = opponent_strength * 0.7 + 1.0;
        match self {
            Self::Standard => engaged / 54.0 * 9.0,
            Self::Legacy => engaged / 140.0,
        }
    }
}

/// Tunable combat parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatTables {
    pub consumption: ConsumptionScaling,
    pub air_losses: AirLossModel,
    /// Defending tanks beyond `cities * tank_cap_per_city` do not fight.
    pub tank_cap_per_city: u64,
    /// Defending aircraft beyond `cities * aircraft_cap_per_city` do not fight.
    pub aircraft_cap_per_city: u64,
    /// Attacker loss multiplier when the defender is fortified.
    pub fortify_multiplier: f64,
}

impl CombatTables {
    pub const DEFAULT_TANK_CAP_PER_CITY: u64 = 250;
    pub const DEFAULT_AIRCRAFT_CAP_PER_CITY: u64 = 15;
    pub const DEFAULT_FORTIFY_MULTIPLIER: f64 = 1.25;

    pub const fn new() -> Self {
        Self {
            consumption: ConsumptionScaling::TierScaled,
            air_losses: AirLossModel::Standard,
            tank_cap_per_city: Self::DEFAULT_TANK_CAP_PER_CITY,
            aircraft_cap_per_city: Self::DEFAULT_AIRCRAFT_CAP_PER_CITY,
            fortify_multiplier: Self::DEFAULT_FORTIFY_MULTIPLIER,
        }
    }

    #[must_use]
    pub const fn with_consumption(mut self, consumption: ConsumptionScaling) -> Self {
        self.consumption = consumption;
        self
    }

    #[must_use]
    pub const fn with_air_losses(mut self, air_losses: AirLossModel) -> Self {
        self.air_losses = air_losses;
        self
    }

    /// Loss multiplier for the attacking side given the defender's stance.
    pub fn fortify_factor(&self, defender_fortified: bool) -> f64 {
        if defender_fortified {
            self.fortify_multiplier
        } else {
            1.0
        }
    }
}

impl Default for CombatTables {
    fn default() -> Self {
        Self::new()
    }
}
