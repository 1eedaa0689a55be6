//! Outcome types produced by every attack.

/// Graded outcome of an attack, ordered from worst to best for the attacker.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
#[repr(u8)]
pub enum VictoryType {
    #[default]
    UtterFailure = 0,
    PyrrhicVictory = 1,
    ModerateSuccess = 2,
    ImmenseTriumph = 3,
}

impl VictoryType {
    /// Tier ordinal in `0..=3`.
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Maps an ordinal back to a tier, saturating above 3.
    pub const fn from_ordinal(ordinal: u8) -> Self {
        match ordinal {
            0 => Self::UtterFailure,
            1 => Self::PyrrhicVictory,
            2 => Self::ModerateSuccess,
            _ => Self::ImmenseTriumph,
        }
    }

    /// Human-readable label used by reports and UIs.
    pub const fn label(self) -> &'static str {
        match self {
            Self::UtterFailure => "Utter Failure",
            Self::PyrrhicVictory => "Pyrrhic Victory",
            Self::ModerateSuccess => "Moderate Success",
            Self::ImmenseTriumph => "Immense Triumph",
        }
    }

    /// Tier as a float, for formulas that scale by `tier` or `tier / 3`.
    pub(crate) fn weight(self) -> f64 {
        f64::from(self.ordinal())
    }

    pub const fn is_success(self) -> bool {
        !matches!(self, Self::UtterFailure)
    }
}

/// Losses suffered by one side in a single attack.
///
/// All fields are non-negative magnitudes. Unit fields an attack type cannot
/// touch stay at zero. Applying them (and clamping at zero) is left to the
/// caller.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Losses {
    pub soldiers: f64,
    pub tanks: f64,
    pub aircraft: f64,
    pub ships: f64,
    pub munitions: f64,
    pub gasoline: f64,
}

impl Losses {
    /// Returns true when nothing was lost or consumed.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Result of a single attack action.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleResult {
    pub victory_type: VictoryType,
    /// Continuous value in `[0, 3]` the tier was rounded from.
    pub roll: f64,
    pub attacker_losses: Losses,
    pub defender_losses: Losses,
    /// Money moved from defender to attacker. Ground attacks only.
    pub loot: f64,
    /// Infrastructure points removed from the defender.
    pub infra_destroyed: f64,
}
