use crate::action::{ActionReport, resolve_action};
use crate::config::BattleConfig;
use crate::env::RandomSource;
use crate::error::{BattleError, ResolutionError};
use crate::event::{BattleEvent, EventSink};
use crate::state::{Character, CharacterId, Team};

/// Result of one scheduled turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    Resolved(ActionReport),
    /// The character was knocked out earlier in the round.
    Skipped { actor: CharacterId },
    /// Resolution faulted; the turn counted as a no-op.
    Faulted {
        actor: CharacterId,
        error: ResolutionError,
    },
}

/// Computes the turn order for a round.
///
/// Characters alive at round start, home team first then away team, sorted by
/// speed descending. The sort is stable, so equal speeds keep roster order.
pub fn turn_order(teams: &[Team; 2]) -> Vec<CharacterId> {
    let mut order: Vec<&Character> = teams.iter().flat_map(Team::living).collect();
    order.sort_by(|a, b| b.speed().cmp(&a.speed()));
    order.into_iter().map(Character::id).collect()
}

/// Walks the turn order once, resolving one action per character still alive
/// when its turn comes up.
pub(crate) fn run_round<R, S>(
    round: u32,
    teams: &mut [Team; 2],
    rng: &mut R,
    config: &BattleConfig,
    sink: &mut S,
) -> Vec<TurnOutcome>
where
    R: RandomSource,
    S: EventSink + ?Sized,
{
    let order = turn_order(teams);
    let mut outcomes = Vec::with_capacity(order.len());

    for actor in order {
        let alive = teams[actor.side.index()]
            .member(actor.slot)
            .is_some_and(Character::is_alive);
        if !alive {
            tracing::trace!(%actor, round, "skipping defeated character");
            outcomes.push(TurnOutcome::Skipped { actor });
            continue;
        }

        match resolve_action(actor, teams, rng, config) {
            Ok(report) => {
                let defeated = report.defeated().cloned();
                sink.emit(BattleEvent::ActionResolved {
                    round,
                    report: report.clone(),
                });
                if let Some(character) = defeated {
                    tracing::debug!(character = %character.id, round, "character defeated");
                    sink.emit(BattleEvent::CharacterDefeated { round, character });
                }
                outcomes.push(TurnOutcome::Resolved(report));
            }
            Err(error) => {
                tracing::warn!(
                    %actor,
                    round,
                    code = error.error_code(),
                    severity = error.severity().as_str(),
                    "turn faulted, treated as no-op: {error}"
                );
                sink.emit(BattleEvent::TurnFaulted {
                    round,
                    actor,
                    error: error.clone(),
                });
                outcomes.push(TurnOutcome::Faulted { actor, error });
            }
        }
    }

    outcomes
}
