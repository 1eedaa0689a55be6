//! Common error infrastructure for battle-core.
//!
//! The combat formulas themselves are total functions and never fail. Errors
//! only exist for callers that want to reject malformed [`BattleUnit`]
//! snapshots before handing them to the engine.
//!
//! [`BattleUnit`]: crate::unit::BattleUnit

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the request can succeed later or with different inputs
///   (not enough action points, not enough units committed)
/// - **Validation**: the input itself is malformed and must be fixed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry with same or alternative action.
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    Validation,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all battle errors.
///
/// Implemented by [`ValidationError`] here and by the runtime's error type so
/// callers can classify failures uniformly.
pub trait BattleError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for error categorization and testing.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// A [`BattleUnit`](crate::unit::BattleUnit) snapshot the engine must not see.
///
/// The engine itself performs no validation; division by `cities` and the
/// per-city caps assume a well-formed unit.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("unit must control at least one city")]
    NoCities,

    #[error("{field} must be non-negative, got {value}")]
    NegativeStockpile { field: &'static str, value: f64 },

    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
}

impl BattleError for ValidationError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoCities => "no_cities",
            Self::NegativeStockpile { .. } => "negative_stockpile",
            Self::NonFinite { .. } => "non_finite",
        }
    }
}
