//! Deterministic battle rules for speed-ordered team fights.
//!
//! `arena-core` resolves a battle between two teams of characters: turn
//! ordering, action selection and resolution, damage and mitigation, captain
//! boosts and the end-of-round termination check. It performs no I/O; all
//! randomness comes through an injected [`RandomSource`] and all progress is
//! reported through an [`EventSink`]. State mutation flows through
//! [`engine::Battle`].
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod event;
pub mod state;

pub use action::{
    ActionEffect, ActionKind, ActionLabel, ActionReport, Participant, resolve_action,
    resolve_against,
};
pub use config::{BattleConfig, CaptainBoostScope, CaptainRules, DamageRoll};
pub use engine::{
    Battle, BattlePhase, BattleRecap, BattleReport, BoostEffect, CaptainBoost, CharacterRecap,
    Outcome, RoundSummary, TeamRecap, TurnOutcome, turn_order,
};
pub use env::{FixedRandom, RandomSource, RollBias, ScriptedRandom, SeededRandom};
pub use error::{BattleError, ConfigError, ErrorSeverity, ResolutionError};
pub use event::{BattleEvent, EventSink, NullSink, TeamBanner};
pub use state::{Character, CharacterId, CharacterKind, CharacterSpec, Side, Team};
