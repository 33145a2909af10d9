use crate::config::BattleConfig;
use crate::error::ConfigError;

use super::{Character, CharacterId, CharacterSpec, Side};

/// A roster of characters fighting on one side.
///
/// Membership is fixed at construction. The captain is addressed by slot and
/// always refers to one of the members.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Team {
    side: Side,
    label: String,
    members: Vec<Character>,
    captain: u8,
    strategy: String,
}

impl Team {
    /// Builds a team, validating every member's action set and the captain slot.
    pub fn new(
        side: Side,
        label: impl Into<String>,
        specs: Vec<CharacterSpec>,
        captain_slot: usize,
        strategy: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        if specs.is_empty() {
            return Err(ConfigError::EmptyTeam { side });
        }
        if specs.len() > BattleConfig::MAX_TEAM_SIZE {
            return Err(ConfigError::TeamTooLarge {
                side,
                size: specs.len(),
                max: BattleConfig::MAX_TEAM_SIZE,
            });
        }
        if captain_slot >= specs.len() {
            return Err(ConfigError::CaptainOutOfRange {
                side,
                slot: captain_slot,
                size: specs.len(),
            });
        }
        for spec in &specs {
            spec.validate()?;
        }

        // Both bounds checked above against MAX_TEAM_SIZE (u8::MAX).
        let members = specs
            .into_iter()
            .enumerate()
            .map(|(slot, spec)| Character::from_spec(CharacterId::new(side, slot as u8), spec))
            .collect();

        Ok(Self {
            side,
            label: label.into(),
            members,
            captain: captain_slot as u8,
            strategy: strategy.into(),
        })
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Display name of the team, e.g. "Ada's Team".
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Free-form strategy descriptor, used only for narration.
    pub fn strategy(&self) -> &str {
        &self.strategy
    }

    pub fn members(&self) -> &[Character] {
        &self.members
    }

    pub fn captain(&self) -> &Character {
        &self.members[usize::from(self.captain)]
    }

    pub fn member(&self, slot: u8) -> Option<&Character> {
        self.members.get(usize::from(slot))
    }

    pub(crate) fn member_mut(&mut self, slot: u8) -> Option<&mut Character> {
        self.members.get_mut(usize::from(slot))
    }

    pub(crate) fn members_mut(&mut self) -> impl Iterator<Item = &mut Character> {
        self.members.iter_mut()
    }

    pub fn living(&self) -> impl Iterator<Item = &Character> {
        self.members.iter().filter(|member| member.is_alive())
    }

    /// A team is defeated once every member is down.
    pub fn is_defeated(&self) -> bool {
        self.members.iter().all(|member| !member.is_alive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::CharacterKind;

    fn spec(name: &str) -> CharacterSpec {
        CharacterSpec::new(
            name,
            80,
            CharacterKind::Energy,
            ["Blast", "Beam", "Boost", "Shield"],
            8,
        )
    }

    #[test]
    fn assigns_ids_by_side_and_slot() {
        let team = Team::new(Side::Away, "AI Team", vec![spec("a"), spec("b")], 1, "Balanced")
            .unwrap();
        assert_eq!(team.members()[1].id(), CharacterId::new(Side::Away, 1));
        assert_eq!(team.captain().name(), "b");
        assert_eq!(team.strategy(), "Balanced");
        assert!(!team.is_defeated());
    }

    #[test]
    fn rejects_empty_team() {
        let err = Team::new(Side::Home, "Empty", Vec::new(), 0, "").unwrap_err();
        assert_eq!(err, ConfigError::EmptyTeam { side: Side::Home });
    }

    #[test]
    fn rejects_captain_outside_roster() {
        let err = Team::new(Side::Home, "Solo", vec![spec("a")], 3, "").unwrap_err();
        assert_eq!(
            err,
            ConfigError::CaptainOutOfRange {
                side: Side::Home,
                slot: 3,
                size: 1
            }
        );
    }

    #[test]
    fn rejects_invalid_member_action_set() {
        let mut broken = spec("broken");
        broken.actions.pop();
        let err = Team::new(Side::Home, "Team", vec![spec("a"), broken], 0, "").unwrap_err();
        assert!(matches!(err, ConfigError::WrongActionCount { .. }));
    }

    #[test]
    fn defeated_when_all_members_are_down() {
        let mut team = Team::new(Side::Home, "Team", vec![spec("a"), spec("b")], 0, "").unwrap();
        for member in team.members_mut() {
            member.take_damage(500);
        }
        assert!(team.is_defeated());
        assert_eq!(team.living().count(), 0);
    }
}
