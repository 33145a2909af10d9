//! Round scheduling and the battle state machine.
//!
//! [`Battle`] owns both teams for the battle's lifetime. Construction
//! validates input and applies captain boosts; afterwards the battle advances
//! one full round at a time until a team is defeated.
//!
//! ```text
//! Initializing ──new()──▶ RoundInProgress ──play_round()──▶ RoundInProgress
//!                                   │
//!                                   └── team defeated / round limit ──▶ Concluded
//! ```

mod captain;
mod report;
mod turns;

pub use captain::{BoostEffect, CaptainBoost};
pub use report::{BattleRecap, BattleReport, CharacterRecap, Outcome, TeamRecap};
pub use turns::{TurnOutcome, turn_order};

use crate::config::BattleConfig;
use crate::env::RandomSource;
use crate::error::ConfigError;
use crate::event::{BattleEvent, EventSink, TeamBanner};
use crate::state::{Side, Team};

/// Lifecycle phase of a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BattlePhase {
    Initializing,
    RoundInProgress,
    Concluded(Outcome),
}

/// Result of one completed round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundSummary {
    pub round: u32,
    pub turns: Vec<TurnOutcome>,
    /// Set when this round ended the battle.
    pub outcome: Option<Outcome>,
}

/// Authoritative battle controller.
pub struct Battle<R> {
    teams: [Team; 2],
    config: BattleConfig,
    rng: R,
    round: u32,
    phase: BattlePhase,
    captain_boosts: Vec<CaptainBoost>,
}

impl<R: RandomSource> Battle<R> {
    /// Validates the teams and config, then applies captain boosts.
    ///
    /// `home` must be built for [`Side::Home`] and `away` for [`Side::Away`].
    pub fn new(home: Team, away: Team, config: BattleConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        for (team, expected) in [(&home, Side::Home), (&away, Side::Away)] {
            if team.side() != expected {
                return Err(ConfigError::SideMismatch {
                    expected,
                    found: team.side(),
                });
            }
        }

        let mut battle = Self {
            teams: [home, away],
            config,
            rng,
            round: 1,
            phase: BattlePhase::Initializing,
            captain_boosts: Vec::new(),
        };
        battle.apply_captain_boosts();
        battle.phase = BattlePhase::RoundInProgress;

        tracing::info!(
            home = battle.teams[0].label(),
            away = battle.teams[1].label(),
            "battle initialized"
        );

        Ok(battle)
    }

    fn apply_captain_boosts(&mut self) {
        for side in Side::BOTH {
            if self.config.captain.scope.applies_to(side) {
                let team = &mut self.teams[side.index()];
                let boost = captain::apply_captain_boost(team, &self.config.captain);
                self.captain_boosts.push(boost);
            }
        }
    }

    /// Plays one full round and evaluates termination.
    ///
    /// Returns `None` once the battle has concluded.
    pub fn play_round<S: EventSink + ?Sized>(&mut self, sink: &mut S) -> Option<RoundSummary> {
        if self.phase != BattlePhase::RoundInProgress {
            return None;
        }

        let round = self.round;
        sink.emit(BattleEvent::RoundStarted { round });
        let turns = turns::run_round(round, &mut self.teams, &mut self.rng, &self.config, sink);
        self.round += 1;

        let outcome = self.evaluate();
        if let Some(outcome) = outcome {
            tracing::info!(?outcome, rounds = round, "battle concluded");
            self.phase = BattlePhase::Concluded(outcome);
        }

        Some(RoundSummary {
            round,
            turns,
            outcome,
        })
    }

    fn evaluate(&self) -> Option<Outcome> {
        Outcome::evaluate(&self.teams).or_else(|| {
            self.config
                .round_limit
                .filter(|&limit| self.rounds_played() >= limit)
                .map(|_| Outcome::Stalemate)
        })
    }

    /// Runs the battle to completion and hands back the final report.
    pub fn run<S: EventSink + ?Sized>(mut self, sink: &mut S) -> BattleReport {
        sink.emit(BattleEvent::BattleStarted {
            home: TeamBanner::from(&self.teams[0]),
            away: TeamBanner::from(&self.teams[1]),
            captain_boosts: self.captain_boosts.clone(),
        });

        while self.play_round(sink).is_some() {}

        let outcome = match self.phase {
            BattlePhase::Concluded(outcome) => outcome,
            // play_round only stops once the battle has concluded
            _ => Outcome::Stalemate,
        };
        let report = BattleReport {
            outcome,
            rounds_played: self.rounds_played(),
            recap: self.recap(),
        };

        sink.emit(BattleEvent::BattleConcluded {
            outcome,
            rounds_played: report.rounds_played,
        });
        sink.emit(BattleEvent::Recap(report.recap.clone()));

        report
    }

    /// Current round number: starts at 1, advanced after each full round.
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn rounds_played(&self) -> u32 {
        self.round - 1
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            BattlePhase::Concluded(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn team(&self, side: Side) -> &Team {
        &self.teams[side.index()]
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    pub fn captain_boosts(&self) -> &[CaptainBoost] {
        &self.captain_boosts
    }

    /// Per-character damage dealt and alive status, grouped by team.
    pub fn recap(&self) -> BattleRecap {
        BattleRecap::from_teams(&self.teams)
    }
}
