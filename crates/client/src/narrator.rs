//! Paced battle narration.
//!
//! The engine runs on a blocking thread and pushes [`BattleEvent`]s into a
//! bounded channel through [`ChannelSink`]. The [`Narrator`] drains the channel,
//! renders each event to text and pauses after every announced line.
use std::io::{self, Write};
use std::time::Duration;

use arena_core::{
    ActionEffect, BattleEvent, BattleRecap, BoostEffect, CaptainBoost, EventSink, Outcome, Side,
};
use tokio::sync::mpsc;

/// Forwards engine events into a channel.
///
/// Uses blocking sends, so it must be driven from outside the async runtime
/// (e.g. inside `tokio::task::spawn_blocking`).
pub struct ChannelSink {
    tx: mpsc::Sender<BattleEvent>,
    closed: bool,
}

impl ChannelSink {
    pub fn new(tx: mpsc::Sender<BattleEvent>) -> Self {
        Self { tx, closed: false }
    }
}

impl EventSink for ChannelSink {
    fn emit(&mut self, event: BattleEvent) {
        if self.closed {
            return;
        }
        if self.tx.blocking_send(event).is_err() {
            tracing::warn!("narration channel closed; remaining events dropped");
            self.closed = true;
        }
    }
}

/// Turns battle events into text.
#[derive(Clone, Debug)]
pub struct Narrator {
    delay: Duration,
    labels: [String; 2],
}

impl Narrator {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            labels: [Side::Home.to_string(), Side::Away.to_string()],
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Announcement lines for an event. Recaps are rendered by [`Self::recap`].
    pub fn announce(&mut self, event: &BattleEvent) -> Vec<String> {
        match event {
            BattleEvent::BattleStarted {
                home,
                away,
                captain_boosts,
            } => {
                self.labels = [home.label.clone(), away.label.clone()];
                let mut lines = vec![format!(
                    "{} enters the battlefield, executing a {} strategy!",
                    home.label, home.strategy
                )];
                lines.extend(captain_boosts.iter().map(|boost| self.boost_line(boost)));
                lines
            }
            BattleEvent::RoundStarted { round } => {
                vec![format!("Round {round} begins! Fighters brace themselves.")]
            }
            BattleEvent::ActionResolved { report, .. } => {
                let actor = &report.actor.name;
                let line = match &report.effect {
                    ActionEffect::NoTarget => return Vec::new(),
                    ActionEffect::Healed { label, amount, .. } => {
                        format!("{actor} uses {label}, restoring {amount} health!")
                    }
                    ActionEffect::Boosted { label, .. } => {
                        format!("{actor} uses {label}, increasing attack power!")
                    }
                    ActionEffect::Shielded { label, .. } => {
                        format!("{actor} uses {label}, reducing incoming damage next turn!")
                    }
                    ActionEffect::Struck {
                        label,
                        target,
                        damage,
                        ..
                    } => format!(
                        "{actor} uses {label} on {}, dealing {damage} damage!",
                        target.name
                    ),
                };
                vec![line]
            }
            BattleEvent::CharacterDefeated { character, .. } => {
                vec![format!("{} has been defeated!", character.name)]
            }
            // logged by the engine; a faulted turn is silent on screen
            BattleEvent::TurnFaulted { .. } => Vec::new(),
            BattleEvent::BattleConcluded {
                outcome,
                rounds_played,
            } => match outcome {
                Outcome::Victory { winner } => {
                    vec![format!("{} wins the battle!", self.labels[winner.index()])]
                }
                Outcome::Stalemate => vec![format!(
                    "Neither team yields. Stalemate after {rounds_played} rounds."
                )],
            },
            BattleEvent::Recap(_) => Vec::new(),
        }
    }

    /// Post-battle table: damage dealt and survival per fighter, grouped by team.
    pub fn recap(&self, recap: &BattleRecap) -> Vec<String> {
        let mut lines = vec![String::new(), "Post-Battle Recap:".to_owned()];
        for team in &recap.teams {
            lines.push(String::new());
            lines.push(format!("{}:", team.label));
            for member in &team.members {
                let status = if member.alive { "Survived" } else { "Defeated" };
                lines.push(format!(
                    "  - {}: Damage Dealt: {} | {}",
                    member.name, member.damage_dealt, status
                ));
            }
        }
        lines
    }

    /// Drains `events` until the sender side closes, writing to `out`.
    pub async fn narrate<W: Write>(
        &mut self,
        mut events: mpsc::Receiver<BattleEvent>,
        out: &mut W,
    ) -> io::Result<()> {
        while let Some(event) = events.recv().await {
            if let BattleEvent::Recap(recap) = &event {
                for line in self.recap(recap) {
                    writeln!(out, "{line}")?;
                }
                out.flush()?;
                continue;
            }

            for line in self.announce(&event) {
                writeln!(out, "\n* {line} *")?;
                out.flush()?;
                if !self.delay.is_zero() {
                    tokio::time::sleep(self.delay).await;
                }
            }
        }
        Ok(())
    }

    fn boost_line(&self, boost: &CaptainBoost) -> String {
        let label = &self.labels[boost.side.index()];
        let bonus = match boost.effect {
            BoostEffect::Speed(n) => format!("+{n} speed"),
            BoostEffect::Health(n) => format!("+{n} health"),
            BoostEffect::Power(n) => format!("+{n} attack power"),
        };
        format!(
            "Captain {} ({}) rallies {label}: {bonus} for every fighter!",
            boost.captain, boost.kind
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::{
        ActionLabel, ActionReport, Battle, BattleConfig, CharacterId, CharacterKind,
        CharacterSpec, FixedRandom, Participant, Team, TeamBanner,
    };

    fn participant(side: Side, slot: u8, name: &str) -> Participant {
        Participant {
            id: CharacterId::new(side, slot),
            name: name.to_owned(),
        }
    }

    fn banner(side: Side, label: &str, strategy: &str) -> TeamBanner {
        TeamBanner {
            side,
            label: label.to_owned(),
            strategy: strategy.to_owned(),
            captain: "Hulk".to_owned(),
        }
    }

    #[test]
    fn announces_start_strikes_and_winner_with_team_labels() {
        let mut narrator = Narrator::new(Duration::ZERO);
        let start = narrator.announce(&BattleEvent::BattleStarted {
            home: banner(Side::Home, "Ada's Team", "Offensive"),
            away: banner(Side::Away, "AI Team", "Balanced"),
            captain_boosts: vec![CaptainBoost {
                side: Side::Home,
                captain: "Hulk".to_owned(),
                kind: CharacterKind::Tank,
                effect: BoostEffect::Health(10),
                recipients: 3,
            }],
        });
        assert_eq!(
            start,
            vec![
                "Ada's Team enters the battlefield, executing a Offensive strategy!".to_owned(),
                "Captain Hulk (tank) rallies Ada's Team: +10 health for every fighter!".to_owned(),
            ]
        );

        let strike = narrator.announce(&BattleEvent::ActionResolved {
            round: 1,
            report: ActionReport {
                actor: participant(Side::Home, 0, "Hulk"),
                effect: ActionEffect::Struck {
                    label: ActionLabel::from("Smash"),
                    target: participant(Side::Away, 1, "Batman"),
                    damage: 33,
                    effective: 28,
                    target_health: 0,
                    defeated: true,
                },
            },
        });
        assert_eq!(strike, vec!["Hulk uses Smash on Batman, dealing 33 damage!"]);

        let end = narrator.announce(&BattleEvent::BattleConcluded {
            outcome: Outcome::Victory { winner: Side::Away },
            rounds_played: 4,
        });
        assert_eq!(end, vec!["AI Team wins the battle!"]);
    }

    #[test]
    fn utility_actions_and_empty_turns() {
        let mut narrator = Narrator::new(Duration::ZERO);
        let heal = narrator.announce(&BattleEvent::ActionResolved {
            round: 2,
            report: ActionReport {
                actor: participant(Side::Away, 0, "Cell"),
                effect: ActionEffect::Healed {
                    label: ActionLabel::from(ActionLabel::HEAL),
                    amount: 20,
                    restored: 5,
                    health: 100,
                },
            },
        });
        assert_eq!(heal, vec!["Cell uses Heal, restoring 20 health!"]);

        let nothing = narrator.announce(&BattleEvent::ActionResolved {
            round: 2,
            report: ActionReport {
                actor: participant(Side::Away, 0, "Cell"),
                effect: ActionEffect::NoTarget,
            },
        });
        assert!(nothing.is_empty());
    }

    #[tokio::test]
    async fn narrates_a_full_battle_from_the_channel() {
        let home = Team::new(
            Side::Home,
            "Ada's Team",
            vec![CharacterSpec::new(
                "A",
                50,
                CharacterKind::Tank,
                ["Attack", "Attack", "Heal", "Boost"],
                10,
            )],
            0,
            "Offensive",
        )
        .unwrap();
        let away = Team::new(
            Side::Away,
            "AI Team",
            vec![CharacterSpec::new(
                "B",
                0,
                CharacterKind::Energy,
                ["Boost", "Jab", "Heal", "Shield"],
                1,
            )],
            0,
            "Balanced",
        )
        .unwrap();
        let battle = Battle::new(
            home,
            away,
            BattleConfig::default(),
            FixedRandom::first_and_lowest(),
        )
        .unwrap();

        let (tx, rx) = mpsc::channel(4);
        let engine = tokio::task::spawn_blocking(move || {
            let mut sink = ChannelSink::new(tx);
            battle.run(&mut sink)
        });

        let mut out = Vec::new();
        Narrator::new(Duration::ZERO)
            .narrate(rx, &mut out)
            .await
            .unwrap();
        let report = engine.await.unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(report.rounds_played, 7);
        assert!(
            text.contains("* Ada's Team enters the battlefield, executing a Offensive strategy! *")
        );
        assert!(text.contains("* Round 7 begins! Fighters brace themselves. *"));
        assert!(text.contains("* A uses Attack on B, dealing 15 damage! *"));
        assert!(text.contains("* B has been defeated! *"));
        assert!(text.contains("* Ada's Team wins the battle! *"));
        assert!(text.contains("Post-Battle Recap:"));
        assert!(text.contains("  - A: Damage Dealt: 105 | Survived"));
        assert!(text.contains("  - B: Damage Dealt: 0 | Defeated"));
        assert!(!text.contains("Round 8"));
    }
}
