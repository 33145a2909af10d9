//! Arena battle client binary.
//!
//! ```bash
//! # Replay a battle with fast narration
//! ARENA_SEED=7 ARENA_NARRATION_DELAY_MS=0 cargo run -p arena-client
//! ```

use std::io;

use anyhow::{Context, Result};
use arena_client::{
    ChannelSink, ClientConfig, Lineup, Narrator, Prompter, assemble_lineup, content, logging,
};
use arena_core::{Battle, SeededRandom};
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = ClientConfig::from_env();
    logging::setup_logging(config.session_id.as_deref(), config.log_dir.as_deref())?;

    tracing::info!("Starting arena client");
    let roster = content::load_roster(&config)?;
    let battle_config = content::load_battle_config(&config)?;

    let mut rng = match config.seed {
        Some(seed) => SeededRandom::from_seed(seed),
        None => SeededRandom::from_entropy(),
    };
    tracing::info!(seed = rng.seed(), "battle seed");

    println!("Welcome to Epic AI Battle!");

    // stdin is blocking; keep it off the async workers
    let team_size = config.team_size;
    let (lineup, rng) = tokio::task::spawn_blocking(move || -> Result<(Lineup, SeededRandom)> {
        let stdin = io::stdin();
        let mut prompter = Prompter::new(stdin.lock(), io::stdout());
        let lineup = assemble_lineup(&mut prompter, &roster, team_size, &mut rng)?;
        Ok((lineup, rng))
    })
    .await
    .context("Selection task panicked")??;

    let battle = Battle::new(lineup.home, lineup.away, battle_config, rng)?;

    let (tx, rx) = mpsc::channel(config.event_buffer);
    let mut narrator = Narrator::new(config.narration_delay);
    let narration = tokio::spawn(async move {
        let mut out = io::stdout();
        narrator.narrate(rx, &mut out).await
    });

    let report = tokio::task::spawn_blocking(move || {
        let mut sink = ChannelSink::new(tx);
        battle.run(&mut sink)
    })
    .await
    .context("Battle task panicked")?;

    narration
        .await
        .context("Narration task panicked")?
        .context("Failed to write narration")?;

    tracing::info!(
        player = %lineup.player_name,
        winner = report.winner_label().unwrap_or("none"),
        rounds = report.rounds_played,
        "battle finished"
    );
    Ok(())
}
