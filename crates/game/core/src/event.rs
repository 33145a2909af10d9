//! Battle events delivered to narration and reporting consumers.
//!
//! The engine emits events through [`EventSink`] as the battle progresses.
//! It does not decide how they are rendered or paced.

use crate::action::{ActionReport, Participant};
use crate::engine::{BattleRecap, CaptainBoost, Outcome};
use crate::error::ResolutionError;
use crate::state::{CharacterId, Side, Team};

/// Name and strategy of a team as announced at battle start.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamBanner {
    pub side: Side,
    pub label: String,
    pub strategy: String,
    pub captain: String,
}

impl From<&Team> for TeamBanner {
    fn from(team: &Team) -> Self {
        Self {
            side: team.side(),
            label: team.label().to_owned(),
            strategy: team.strategy().to_owned(),
            captain: team.captain().name().to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BattleEvent {
    BattleStarted {
        home: TeamBanner,
        away: TeamBanner,
        captain_boosts: Vec<CaptainBoost>,
    },
    RoundStarted {
        round: u32,
    },
    ActionResolved {
        round: u32,
        report: ActionReport,
    },
    CharacterDefeated {
        round: u32,
        character: Participant,
    },
    /// A turn faulted and was treated as a no-op.
    TurnFaulted {
        round: u32,
        actor: CharacterId,
        error: ResolutionError,
    },
    BattleConcluded {
        outcome: Outcome,
        rounds_played: u32,
    },
    Recap(BattleRecap),
}

/// Consumer of battle events.
pub trait EventSink {
    fn emit(&mut self, event: BattleEvent);
}

impl EventSink for Vec<BattleEvent> {
    fn emit(&mut self, event: BattleEvent) {
        self.push(event);
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn emit(&mut self, event: BattleEvent) {
        (**self).emit(event);
    }
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: BattleEvent) {}
}
