//! Battle state: characters, teams and the identifiers linking them.
//!
//! Every [`Character`] carries a [`CharacterId`] naming its [`Side`] and slot,
//! so the engine finds a character's team (and the opposing team) without
//! scanning rosters.

mod character;
mod team;

pub use character::{Character, CharacterKind, CharacterSpec};
pub use team::Team;

/// One of the two teams in a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Side {
    /// The first team passed to the battle (the player's team in the CLI).
    Home,
    /// The second team passed to the battle.
    Away,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Home, Side::Away];

    pub const fn opponent(self) -> Side {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Side::Home => 0,
            Side::Away => 1,
        }
    }
}

/// Stable identifier of a character within one battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterId {
    pub side: Side,
    pub slot: u8,
}

impl CharacterId {
    pub const fn new(side: Side, slot: u8) -> Self {
        Self { side, slot }
    }
}

impl core::fmt::Display for CharacterId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}#{}", self.side, self.slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_is_involutive() {
        for side in Side::BOTH {
            assert_eq!(side.opponent().opponent(), side);
            assert_ne!(side.opponent(), side);
        }
    }

    #[test]
    fn id_display_names_side_and_slot() {
        assert_eq!(CharacterId::new(Side::Away, 2).to_string(), "away#2");
    }
}
