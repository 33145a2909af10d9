//! Common error infrastructure for arena-core.
//!
//! Two families of errors exist and they are handled very differently:
//!
//! - [`ConfigError`]: invalid construction input. Raised by [`crate::Team::new`]
//!   and [`crate::Battle::new`] before round 1; a battle never starts with one.
//! - [`ResolutionError`]: a fault while resolving a single action. The round
//!   scheduler records it as a faulted turn and the battle keeps going.

use crate::state::{CharacterId, Side};

/// Severity level of an error, used for categorization and logging priority.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input, should not retry without changes.
    ///
    /// Examples: empty team, captain slot out of range
    Validation,

    /// Unexpected state inconsistency inside the engine.
    ///
    /// Examples: stale character id, arithmetic overflow
    /// These indicate bugs and should be investigated.
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all arena-core errors.
pub trait BattleError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for log filtering and tests.
    fn error_code(&self) -> &'static str;
}

/// Invalid battle construction input.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{side} team has no members")]
    EmptyTeam { side: Side },

    #[error("{side} team has {size} members (maximum {max})")]
    TeamTooLarge { side: Side, size: usize, max: usize },

    #[error("{side} team captain slot {slot} is out of range for {size} members")]
    CaptainOutOfRange { side: Side, slot: usize, size: usize },

    #[error("{name} has {found} actions, expected {expected}")]
    WrongActionCount {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("{name} has no damaging action")]
    NoDamagingAction { name: String },

    #[error("team passed as {expected} was built for {found}")]
    SideMismatch { expected: Side, found: Side },

    #[error("damage roll range is inverted: min {min} > max {max}")]
    InvalidDamageRoll { min: u32, max: u32 },

    #[error("power divisor must be non-zero")]
    ZeroPowerDivisor,

    #[error("damage roll maximum must be non-zero, or zero-power fighters can never land a hit")]
    ZeroDamageRoll,
}

impl BattleError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyTeam { .. } => "EMPTY_TEAM",
            Self::TeamTooLarge { .. } => "TEAM_TOO_LARGE",
            Self::CaptainOutOfRange { .. } => "CAPTAIN_OUT_OF_RANGE",
            Self::WrongActionCount { .. } => "WRONG_ACTION_COUNT",
            Self::NoDamagingAction { .. } => "NO_DAMAGING_ACTION",
            Self::SideMismatch { .. } => "SIDE_MISMATCH",
            Self::InvalidDamageRoll { .. } => "INVALID_DAMAGE_ROLL",
            Self::ZeroPowerDivisor => "ZERO_POWER_DIVISOR",
            Self::ZeroDamageRoll => "ZERO_DAMAGE_ROLL",
        }
    }
}

/// Fault raised while resolving one action.
///
/// Isolated to the turn that produced it.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResolutionError {
    #[error("character {0} does not exist in this battle")]
    UnknownCharacter(CharacterId),

    #[error("character {0} has no actions to choose from")]
    EmptyActionSet(CharacterId),

    #[error("base power of {0} overflowed")]
    PowerOverflow(CharacterId),

    #[error("damage computed by {0} overflowed")]
    DamageOverflow(CharacterId),
}

impl BattleError for ResolutionError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownCharacter(_) => "UNKNOWN_CHARACTER",
            Self::EmptyActionSet(_) => "EMPTY_ACTION_SET",
            Self::PowerOverflow(_) => "POWER_OVERFLOW",
            Self::DamageOverflow(_) => "DAMAGE_OVERFLOW",
        }
    }
}
