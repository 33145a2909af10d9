//! Interactive team selection.
//!
//! The player names themselves, drafts fighters from the roster, picks a
//! captain and a strategy. The opposing team is drafted at random.
use std::io::{self, BufRead, Write};

use arena_content::{Roster, random_captain};
use arena_core::{CharacterSpec, RandomSource, Side, Team};

/// Label of the computer-controlled team.
pub const AI_TEAM_LABEL: &str = "AI Team";
/// Strategy used when none is given, and always by the AI team.
pub const DEFAULT_STRATEGY: &str = "Balanced";
const DEFAULT_PLAYER_NAME: &str = "Player";

#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    #[error("input closed before selection finished")]
    InputClosed,

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type SelectionResult<T> = Result<T, SelectionError>;

/// Line-oriented prompt over any reader/writer pair.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    pub fn player_name(&mut self) -> SelectionResult<String> {
        let name = self.ask("Enter your name: ")?;
        if name.is_empty() {
            Ok(DEFAULT_PLAYER_NAME.to_owned())
        } else {
            Ok(name)
        }
    }

    /// Lists the roster and collects `count` distinct 0-based indices from
    /// 1-based answers, in the order they were entered.
    pub fn choose_fighters(
        &mut self,
        roster: &Roster,
        count: usize,
    ) -> SelectionResult<Vec<usize>> {
        writeln!(self.output, "\nChoose {count} fighters from the list below:")?;
        for (idx, spec) in roster.characters().iter().enumerate() {
            writeln!(self.output, "{}. {}", idx + 1, spec.name)?;
        }

        let mut picked: Vec<usize> = Vec::with_capacity(count);
        while picked.len() < count {
            let answer = self.ask(&format!("Enter character number {}: ", picked.len() + 1))?;
            match parse_choice(&answer, roster.len()) {
                Some(index) if !picked.contains(&index) => picked.push(index),
                Some(_) => self.reject("character selection", &answer, "already picked")?,
                None => self.reject("character selection", &answer, "not a roster number")?,
            }
        }
        Ok(picked)
    }

    /// Returns the captain's slot within `members`.
    pub fn choose_captain(&mut self, members: &[CharacterSpec]) -> SelectionResult<usize> {
        writeln!(self.output, "\nSelect your team captain:")?;
        for (idx, spec) in members.iter().enumerate() {
            writeln!(self.output, "{}. {} ({})", idx + 1, spec.name, spec.kind)?;
        }

        loop {
            let answer = self.ask(&format!("Choose captain (1-{}): ", members.len()))?;
            match parse_choice(&answer, members.len()) {
                Some(slot) => return Ok(slot),
                None => self.reject("captain selection", &answer, "out of range")?,
            }
        }
    }

    /// Free-form strategy, capitalised. Blank input means [`DEFAULT_STRATEGY`].
    pub fn choose_strategy(&mut self) -> SelectionResult<String> {
        let answer = self.ask("Choose your battle strategy (Offensive, Defensive, Balanced): ")?;
        if answer.is_empty() {
            return Ok(DEFAULT_STRATEGY.to_owned());
        }
        Ok(capitalize(&answer))
    }

    fn ask(&mut self, prompt: &str) -> SelectionResult<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SelectionError::InputClosed);
        }
        Ok(line.trim().to_owned())
    }

    fn reject(&mut self, stage: &str, answer: &str, reason: &str) -> SelectionResult<()> {
        tracing::warn!(stage, answer, reason, "invalid selection input");
        writeln!(self.output, "Invalid input. Try again.")?;
        Ok(())
    }
}

/// Parses a 1-based menu answer into a 0-based index below `len`.
fn parse_choice(answer: &str, len: usize) -> Option<usize> {
    let number: usize = answer.parse().ok()?;
    (1..=len).contains(&number).then(|| number - 1)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Both teams, ready for [`arena_core::Battle::new`].
#[derive(Debug)]
pub struct Lineup {
    pub player_name: String,
    pub home: Team,
    pub away: Team,
}

/// Runs the player's selection, then drafts the AI team from the full roster.
pub fn assemble_lineup<R, W, G>(
    prompter: &mut Prompter<R, W>,
    roster: &Roster,
    team_size: usize,
    rng: &mut G,
) -> anyhow::Result<Lineup>
where
    R: BufRead,
    W: Write,
    G: RandomSource,
{
    if team_size == 0 {
        anyhow::bail!("Team size must be at least 1");
    }
    if roster.len() < team_size {
        anyhow::bail!(
            "Roster has {} fighters, {} needed per team",
            roster.len(),
            team_size
        );
    }

    let player_name = prompter.player_name()?;
    let picks = prompter.choose_fighters(roster, team_size)?;
    let members = roster.select(&picks)?;
    let captain = prompter.choose_captain(&members)?;
    let strategy = prompter.choose_strategy()?;
    let home = Team::new(
        Side::Home,
        format!("{player_name}'s Team"),
        members,
        captain,
        strategy,
    )?;

    let ai_members = roster.draft_random(team_size, rng)?;
    let ai_captain = random_captain(ai_members.len(), rng);
    let away = Team::new(
        Side::Away,
        AI_TEAM_LABEL,
        ai_members,
        ai_captain,
        DEFAULT_STRATEGY,
    )?;

    tracing::info!(
        player = %player_name,
        home_captain = home.captain().name(),
        away_captain = away.captain().name(),
        strategy = home.strategy(),
        "lineup assembled"
    );
    Ok(Lineup {
        player_name,
        home,
        away,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::{CharacterKind, ScriptedRandom};
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(prompter: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(prompter.into_inner().1).unwrap()
    }

    #[test]
    fn fighters_are_one_based_and_distinct() {
        let roster = Roster::builtin();
        let mut p = prompter("5\n5\nabc\n0\n43\n1\n17\n");
        let picks = p.choose_fighters(&roster, 3).unwrap();
        assert_eq!(picks, vec![4, 0, 16]);

        let out = output(p);
        assert!(out.contains("1. Iron Man"));
        assert!(out.contains("42. Deathstroke"));
        assert_eq!(out.matches("Invalid input. Try again.").count(), 4);
    }

    #[test]
    fn captain_reprompts_until_in_range() {
        let members = Roster::builtin().select(&[0, 1, 4]).unwrap();
        let mut p = prompter("4\n-1\n2\n");
        assert_eq!(p.choose_captain(&members).unwrap(), 1);
        let out = output(p);
        assert!(out.contains("2. Captain America (strategist)"));
        assert!(out.contains("Choose captain (1-3): "));
    }

    #[test]
    fn strategy_is_capitalised_with_default() {
        assert_eq!(prompter("  offensive \n").choose_strategy().unwrap(), "Offensive");
        assert_eq!(prompter("DEFENSIVE\n").choose_strategy().unwrap(), "Defensive");
        assert_eq!(prompter("\n").choose_strategy().unwrap(), "Balanced");
    }

    #[test]
    fn closed_input_is_an_error() {
        let roster = Roster::builtin();
        let err = prompter("1\n").choose_fighters(&roster, 2).unwrap_err();
        assert!(matches!(err, SelectionError::InputClosed));
    }

    #[test]
    fn blank_name_falls_back() {
        assert_eq!(prompter("\n").player_name().unwrap(), "Player");
        assert_eq!(prompter("Ada\n").player_name().unwrap(), "Ada");
    }

    #[test]
    fn lineup_combines_player_choices_and_random_draft() {
        let roster = Roster::builtin();
        let mut p = prompter("Ada\n1\n2\n5\n3\noffensive\n");
        // Goku (16) leaves the pool, so 26 is Superman and then Batman; captain slot 2
        let mut rng = ScriptedRandom::new().with_picks([16, 26, 26, 2]);

        let lineup = assemble_lineup(&mut p, &roster, 3, &mut rng).unwrap();
        assert_eq!(lineup.player_name, "Ada");
        assert_eq!(lineup.home.label(), "Ada's Team");
        assert_eq!(lineup.home.strategy(), "Offensive");
        assert_eq!(lineup.home.captain().name(), "Hulk");
        assert_eq!(lineup.home.captain().kind(), CharacterKind::Tank);

        let away: Vec<&str> = lineup.away.members().iter().map(|m| m.name()).collect();
        assert_eq!(away, ["Goku", "Superman", "Batman"]);
        assert_eq!(lineup.away.captain().name(), "Batman");
        assert_eq!(lineup.away.label(), AI_TEAM_LABEL);
        assert_eq!(lineup.away.strategy(), DEFAULT_STRATEGY);
    }

    #[test]
    fn lineup_rejects_empty_teams_before_prompting() {
        let roster = Roster::builtin();
        let mut p = prompter("Ada\n1\n");
        let err = assemble_lineup(&mut p, &roster, 0, &mut ScriptedRandom::new()).unwrap_err();
        assert!(err.to_string().contains("at least 1"));
        assert!(output(p).is_empty());
    }

    #[test]
    fn lineup_needs_enough_fighters() {
        let roster = Roster::new(Roster::builtin().characters()[..2].to_vec());
        let mut p = prompter("");
        let err = assemble_lineup(&mut p, &roster, 3, &mut ScriptedRandom::new()).unwrap_err();
        assert!(err.to_string().contains("2 fighters"));
    }
}
