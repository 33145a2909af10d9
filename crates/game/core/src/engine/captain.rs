//! One-time captain boost applied before round 1.

use crate::config::{BattleConfig, CaptainRules};
use crate::state::{CharacterKind, Side, Team};

/// Stat raised on every teammate by a captain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoostEffect {
    Speed(u32),
    /// Health bonus, capped at [`BattleConfig::MAX_HEALTH`] per member.
    Health(u32),
    Power(u32),
}

impl BoostEffect {
    pub fn for_kind(kind: CharacterKind, rules: &CaptainRules) -> Self {
        match kind {
            CharacterKind::Strategist => Self::Speed(rules.speed_bonus),
            CharacterKind::Tank => Self::Health(rules.health_bonus),
            CharacterKind::Energy => Self::Power(rules.power_bonus),
        }
    }
}

/// Record of a captain boost that was applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaptainBoost {
    pub side: Side,
    pub captain: String,
    pub kind: CharacterKind,
    pub effect: BoostEffect,
    /// Members that received the boost, captain included.
    pub recipients: usize,
}

/// Applies the captain's boost to every member of `team`, captain included.
pub(crate) fn apply_captain_boost(team: &mut Team, rules: &CaptainRules) -> CaptainBoost {
    let captain = team.captain();
    let kind = captain.kind();
    let captain_name = captain.name().to_owned();
    let effect = BoostEffect::for_kind(kind, rules);

    let mut recipients = 0;
    for member in team.members_mut() {
        match effect {
            BoostEffect::Speed(bonus) => member.speed = member.speed.saturating_add(bonus),
            BoostEffect::Health(bonus) => {
                member.health = member
                    .health
                    .saturating_add(bonus)
                    .min(BattleConfig::MAX_HEALTH);
            }
            BoostEffect::Power(bonus) => {
                member.base_power = member.base_power.saturating_add(bonus);
            }
        }
        recipients += 1;
    }

    tracing::debug!(
        side = %team.side(),
        captain = %captain_name,
        ?effect,
        recipients,
        "captain boost applied"
    );

    CaptainBoost {
        side: team.side(),
        captain: captain_name,
        kind,
        effect,
        recipients,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::CharacterSpec;

    fn team(captain_kind: CharacterKind, size: usize) -> Team {
        let specs = (0..size)
            .map(|i| {
                let kind = if i == 0 { captain_kind } else { CharacterKind::Tank };
                CharacterSpec::new(
                    format!("m{i}"),
                    70 + i as u32,
                    kind,
                    ["Hit", "Heal", "Boost", "Shield"],
                    6 + i as u32,
                )
            })
            .collect();
        Team::new(Side::Home, "Team", specs, 0, "Balanced").unwrap()
    }

    #[test]
    fn strategist_adds_speed_to_everyone() {
        for size in [1, 3, 5] {
            let mut t = team(CharacterKind::Strategist, size);
            let before: Vec<u32> = t.members().iter().map(|m| m.speed()).collect();
            let boost = apply_captain_boost(&mut t, &CaptainRules::default());
            assert_eq!(boost.effect, BoostEffect::Speed(3));
            assert_eq!(boost.recipients, size);
            for (member, speed) in t.members().iter().zip(before) {
                assert_eq!(member.speed(), speed + 3);
            }
        }
    }

    #[test]
    fn tank_health_bonus_is_capped() {
        let mut t = team(CharacterKind::Tank, 3);
        t.members_mut().next().unwrap().take_damage(25);
        apply_captain_boost(&mut t, &CaptainRules::default());
        let health: Vec<u32> = t.members().iter().map(|m| m.health()).collect();
        assert_eq!(health, vec![85, 100, 100]);
    }

    #[test]
    fn energy_adds_base_power() {
        let mut t = team(CharacterKind::Energy, 2);
        let boost = apply_captain_boost(&mut t, &CaptainRules::default());
        assert_eq!(boost.captain, "m0");
        assert_eq!(t.members()[0].base_power(), 75);
        assert_eq!(t.members()[1].base_power(), 76);
    }
}
