//! Single-action resolution.
//!
//! Order of random draws is part of the contract, since replays depend on it:
//! 1. target among living opponents (skipped entirely when none are alive)
//! 2. action from the actor's action set
//! 3. damage roll (damaging actions only)

use crate::config::BattleConfig;
use crate::env::RandomSource;
use crate::error::ResolutionError;
use crate::state::{Character, CharacterId, Side, Team};

use super::{ActionKind, ActionLabel};

/// Name and id of a character taking part in an action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Participant {
    pub id: CharacterId,
    pub name: String,
}

impl From<&Character> for Participant {
    fn from(character: &Character) -> Self {
        Self {
            id: character.id(),
            name: character.name().to_owned(),
        }
    }
}

/// What a resolved action did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionEffect {
    /// No living opponent was left; nothing happened.
    NoTarget,
    Healed {
        label: ActionLabel,
        /// Configured heal amount.
        amount: u32,
        /// Health actually restored after the cap.
        restored: u32,
        health: u32,
    },
    Boosted {
        label: ActionLabel,
        base_power: u32,
    },
    Shielded {
        label: ActionLabel,
        mitigation: u32,
    },
    Struck {
        label: ActionLabel,
        target: Participant,
        /// Nominal damage, credited to the attacker.
        damage: u32,
        /// Damage left after the target's mitigation.
        effective: u32,
        target_health: u32,
        defeated: bool,
    },
}

/// Outcome of one resolved action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionReport {
    pub actor: Participant,
    pub effect: ActionEffect,
}

impl ActionReport {
    /// The defender knocked out by this action, if any.
    pub fn defeated(&self) -> Option<&Participant> {
        match &self.effect {
            ActionEffect::Struck {
                target,
                defeated: true,
                ..
            } => Some(target),
            _ => None,
        }
    }
}

/// Resolves one action for `actor` against the opposing team.
///
/// Looks the actor up by id and borrows its own team and the opposing team
/// disjointly.
pub fn resolve_action<R: RandomSource>(
    actor: CharacterId,
    teams: &mut [Team; 2],
    rng: &mut R,
    config: &BattleConfig,
) -> Result<ActionReport, ResolutionError> {
    let [home, away] = teams;
    let (own, opposing) = match actor.side {
        Side::Home => (home, away),
        Side::Away => (away, home),
    };
    let character = own
        .member_mut(actor.slot)
        .ok_or(ResolutionError::UnknownCharacter(actor))?;

    resolve_against(character, opposing, rng, config)
}

/// Resolves one action for `actor` against `opposing`.
///
/// A fault leaves both characters untouched.
pub fn resolve_against<R: RandomSource>(
    actor: &mut Character,
    opposing: &mut Team,
    rng: &mut R,
    config: &BattleConfig,
) -> Result<ActionReport, ResolutionError> {
    let living: Vec<u8> = opposing.living().map(|target| target.id().slot).collect();
    let Some(&target_slot) = rng.choose(&living) else {
        tracing::debug!(actor = %actor.id(), "no living opponent, turn skipped");
        return Ok(ActionReport {
            actor: Participant::from(&*actor),
            effect: ActionEffect::NoTarget,
        });
    };

    let label = rng
        .choose(actor.actions())
        .cloned()
        .ok_or(ResolutionError::EmptyActionSet(actor.id()))?;

    let effect = match label.kind() {
        ActionKind::Heal => {
            let restored = actor.heal(config.heal_amount);
            ActionEffect::Healed {
                label,
                amount: config.heal_amount,
                restored,
                health: actor.health(),
            }
        }
        ActionKind::Boost => {
            let base_power = actor.boost(config.boost_increment)?;
            ActionEffect::Boosted { label, base_power }
        }
        ActionKind::Shield => {
            actor.shield(config.shield_value);
            ActionEffect::Shielded {
                label,
                mitigation: actor.mitigation(),
            }
        }
        ActionKind::Damage => {
            let target_id = CharacterId::new(opposing.side(), target_slot);
            let roll = rng.range(config.damage_roll.min, config.damage_roll.max);
            // power_divisor is validated non-zero at battle construction
            let bonus = actor
                .base_power()
                .checked_div(config.power_divisor)
                .unwrap_or(0);
            let damage = roll
                .checked_add(bonus)
                .ok_or(ResolutionError::DamageOverflow(actor.id()))?;

            let target = opposing
                .member_mut(target_slot)
                .ok_or(ResolutionError::UnknownCharacter(target_id))?;
            actor.record_damage(damage)?;
            let effective = target.take_damage(damage);

            ActionEffect::Struck {
                label,
                target: Participant::from(&*target),
                damage,
                effective,
                target_health: target.health(),
                defeated: !target.is_alive(),
            }
        }
    };

    tracing::debug!(actor = %actor.id(), effect = ?effect, "action resolved");

    Ok(ActionReport {
        actor: Participant::from(&*actor),
        effect,
    })
}
