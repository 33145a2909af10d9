//! Per-combatant battle state.

use crate::action::{ActionKind, ActionLabel};
use crate::config::BattleConfig;
use crate::error::{ConfigError, ResolutionError};

use super::CharacterId;

/// Character archetype. Fixed at creation; decides the captain boost.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CharacterKind {
    /// Captain grants teammates speed.
    Strategist,
    /// Captain grants teammates health.
    Tank,
    /// Captain grants teammates base power.
    Energy,
}

/// Roster definition of a character, before it enters a battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterSpec {
    pub name: String,
    pub base_power: u32,
    pub kind: CharacterKind,
    pub actions: Vec<ActionLabel>,
    pub speed: u32,
}

impl CharacterSpec {
    pub fn new<I, L>(
        name: impl Into<String>,
        base_power: u32,
        kind: CharacterKind,
        actions: I,
        speed: u32,
    ) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<ActionLabel>,
    {
        Self {
            name: name.into(),
            base_power,
            kind,
            actions: actions.into_iter().map(Into::into).collect(),
            speed,
        }
    }

    /// Checks the action set: exactly [`BattleConfig::ACTION_SLOTS`] labels,
    /// at least one of them damaging.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.actions.len() != BattleConfig::ACTION_SLOTS {
            return Err(ConfigError::WrongActionCount {
                name: self.name.clone(),
                expected: BattleConfig::ACTION_SLOTS,
                found: self.actions.len(),
            });
        }
        if !self
            .actions
            .iter()
            .any(|action| action.kind() == ActionKind::Damage)
        {
            return Err(ConfigError::NoDamagingAction {
                name: self.name.clone(),
            });
        }
        Ok(())
    }
}

/// Live state of one combatant.
///
/// Invariants:
/// - `health` stays within `0..=MAX_HEALTH`; zero means defeated for good.
/// - `mitigation` is consumed by every [`Character::take_damage`] call.
/// - `damage_dealt` never decreases.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Character {
    pub(crate) id: CharacterId,
    pub(crate) name: String,
    pub(crate) kind: CharacterKind,
    pub(crate) actions: Vec<ActionLabel>,
    pub(crate) base_power: u32,
    pub(crate) health: u32,
    pub(crate) mitigation: u32,
    pub(crate) damage_dealt: u32,
    pub(crate) speed: u32,
}

impl Character {
    pub fn from_spec(id: CharacterId, spec: CharacterSpec) -> Self {
        Self {
            id,
            name: spec.name,
            kind: spec.kind,
            actions: spec.actions,
            base_power: spec.base_power,
            health: BattleConfig::MAX_HEALTH,
            mitigation: 0,
            damage_dealt: 0,
            speed: spec.speed,
        }
    }

    /// Applies one hit. Mitigation absorbs part of it and is reset to zero
    /// whatever the amount. Returns the damage left after mitigation.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let effective = amount.saturating_sub(self.mitigation);
        self.mitigation = 0;
        self.health = self.health.saturating_sub(effective);
        effective
    }

    /// Restores health up to the cap. Returns the amount actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let healed = self
            .health
            .saturating_add(amount)
            .min(BattleConfig::MAX_HEALTH);
        let restored = healed - self.health;
        self.health = healed;
        restored
    }

    /// Permanently raises base power. Returns the new base power.
    pub fn boost(&mut self, increment: u32) -> Result<u32, ResolutionError> {
        self.base_power = self
            .base_power
            .checked_add(increment)
            .ok_or(ResolutionError::PowerOverflow(self.id))?;
        Ok(self.base_power)
    }

    /// Sets mitigation for the next hit, replacing any unspent shield.
    pub fn shield(&mut self, value: u32) {
        self.mitigation = value;
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub(crate) fn record_damage(&mut self, amount: u32) -> Result<(), ResolutionError> {
        self.damage_dealt = self
            .damage_dealt
            .checked_add(amount)
            .ok_or(ResolutionError::DamageOverflow(self.id))?;
        Ok(())
    }

    pub fn id(&self) -> CharacterId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> CharacterKind {
        self.kind
    }

    pub fn actions(&self) -> &[ActionLabel] {
        &self.actions
    }

    pub fn base_power(&self) -> u32 {
        self.base_power
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn mitigation(&self) -> u32 {
        self.mitigation
    }

    pub fn damage_dealt(&self) -> u32 {
        self.damage_dealt
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }
}
