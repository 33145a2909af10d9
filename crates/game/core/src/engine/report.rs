//! Battle outcome and final per-character statistics.

use crate::state::{Character, CharacterId, Side, Team};

/// How a battle ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Victory { winner: Side },
    /// The configured round limit was reached with both teams standing.
    Stalemate,
}

impl Outcome {
    pub fn winner(&self) -> Option<Side> {
        match self {
            Self::Victory { winner } => Some(*winner),
            Self::Stalemate => None,
        }
    }

    /// Termination predicate evaluated after a completed round.
    ///
    /// The home team is checked first: if it is fully defeated the away team
    /// wins, even when the away team was wiped out in the same round.
    pub fn evaluate(teams: &[Team; 2]) -> Option<Self> {
        if teams[Side::Home.index()].is_defeated() {
            Some(Self::Victory { winner: Side::Away })
        } else if teams[Side::Away.index()].is_defeated() {
            Some(Self::Victory { winner: Side::Home })
        } else {
            None
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharacterRecap {
    pub id: CharacterId,
    pub name: String,
    pub damage_dealt: u32,
    pub health: u32,
    pub alive: bool,
}

impl From<&Character> for CharacterRecap {
    fn from(character: &Character) -> Self {
        Self {
            id: character.id(),
            name: character.name().to_owned(),
            damage_dealt: character.damage_dealt(),
            health: character.health(),
            alive: character.is_alive(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamRecap {
    pub side: Side,
    pub label: String,
    pub members: Vec<CharacterRecap>,
}

impl From<&Team> for TeamRecap {
    fn from(team: &Team) -> Self {
        Self {
            side: team.side(),
            label: team.label().to_owned(),
            members: team.members().iter().map(CharacterRecap::from).collect(),
        }
    }
}

/// Final statistics grouped by team, home first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BattleRecap {
    pub teams: [TeamRecap; 2],
}

impl BattleRecap {
    pub fn from_teams(teams: &[Team; 2]) -> Self {
        Self {
            teams: [TeamRecap::from(&teams[0]), TeamRecap::from(&teams[1])],
        }
    }

    pub fn team(&self, side: Side) -> &TeamRecap {
        &self.teams[side.index()]
    }

    pub fn character(&self, id: CharacterId) -> Option<&CharacterRecap> {
        self.team(id.side).members.get(usize::from(id.slot))
    }
}

/// Everything the reporting layer needs once a battle is over.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BattleReport {
    pub outcome: Outcome,
    pub rounds_played: u32,
    pub recap: BattleRecap,
}

impl BattleReport {
    /// Label of the winning team, `None` on stalemate.
    pub fn winner_label(&self) -> Option<&str> {
        self.outcome
            .winner()
            .map(|side| self.recap.team(side).label.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{CharacterKind, CharacterSpec};

    fn teams() -> [Team; 2] {
        let spec = || {
            CharacterSpec::new(
                "x",
                10,
                CharacterKind::Tank,
                ["Hit", "Heal", "Boost", "Shield"],
                3,
            )
        };
        [
            Team::new(Side::Home, "Home", vec![spec(), spec()], 0, "").unwrap(),
            Team::new(Side::Away, "Away", vec![spec()], 0, "").unwrap(),
        ]
    }

    fn wipe(team: &mut Team) {
        for member in team.members_mut() {
            member.take_damage(100);
        }
    }

    #[test]
    fn undecided_while_both_teams_stand() {
        assert_eq!(Outcome::evaluate(&teams()), None);
    }

    #[test]
    fn surviving_team_wins() {
        let mut t = teams();
        wipe(&mut t[1]);
        assert_eq!(
            Outcome::evaluate(&t),
            Some(Outcome::Victory { winner: Side::Home })
        );
    }

    #[test]
    fn double_knockout_goes_to_away_team() {
        let mut t = teams();
        wipe(&mut t[0]);
        wipe(&mut t[1]);
        assert_eq!(
            Outcome::evaluate(&t),
            Some(Outcome::Victory { winner: Side::Away })
        );
    }

    #[test]
    fn recap_lists_members_by_team() {
        let mut t = teams();
        t[1].members_mut().for_each(|m| {
            m.take_damage(30);
        });
        let recap = BattleRecap::from_teams(&t);
        assert_eq!(recap.team(Side::Home).members.len(), 2);
        let away = recap.character(CharacterId::new(Side::Away, 0)).unwrap();
        assert_eq!(away.health, 70);
        assert!(away.alive);
        assert_eq!(recap.team(Side::Away).label, "Away");
    }
}
