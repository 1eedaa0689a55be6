//! Errors surfaced when an attack cannot be executed.
//!
//! Nothing is mutated when [`BattleResolver::execute`] returns one of these.
//!
//! [`BattleResolver::execute`]: crate::resolver::BattleResolver::execute
use battle_core::{BattleError, ErrorSeverity, UnitKind, ValidationError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

/// Which belligerent an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Side {
    Attacker,
    Defender,
}

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("{side} is not a valid battle unit")]
    InvalidUnit {
        side: Side,
        #[source]
        source: ValidationError,
    },

    #[error("attack needs {required} action points but only {available} remain")]
    InsufficientActionPoints { required: u32, available: u32 },

    #[error("order commits {requested} {kind} but the attacker has {available}")]
    InsufficientUnits {
        kind: UnitKind,
        requested: u64,
        available: u64,
    },

    #[error("order needs {resource} but the attacker has {available}")]
    InsufficientResources {
        resource: &'static str,
        available: f64,
    },
}

impl BattleError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidUnit { .. } => ErrorSeverity::Validation,
            Self::InsufficientActionPoints { .. }
            | Self::InsufficientUnits { .. }
            | Self::InsufficientResources { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidUnit { .. } => "invalid_unit",
            Self::InsufficientActionPoints { .. } => "insufficient_action_points",
            Self::InsufficientUnits { .. } => "insufficient_units",
            Self::InsufficientResources { .. } => "insufficient_resources",
        }
    }
}
