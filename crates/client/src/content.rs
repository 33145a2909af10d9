//! Roster and battle settings for a session.
//!
//! Lookup order: an explicit file path, then the data directory through
//! [`arena_content::ContentFactory`], then the built-in content.
use anyhow::Result;
use arena_content::Roster;
use arena_core::BattleConfig;

use crate::config::ClientConfig;

#[cfg(feature = "loaders")]
pub fn load_roster(config: &ClientConfig) -> Result<Roster> {
    use arena_content::{ContentFactory, RosterLoader};

    match (&config.roster_path, &config.data_dir) {
        (Some(path), _) => RosterLoader::load(path),
        (None, Some(dir)) => ContentFactory::new(dir).load_roster(),
        (None, None) => Ok(Roster::builtin()),
    }
}

#[cfg(not(feature = "loaders"))]
pub fn load_roster(config: &ClientConfig) -> Result<Roster> {
    if config.roster_path.is_some() || config.data_dir.is_some() {
        tracing::warn!("roster files need the `loaders` feature; using built-in roster");
    }
    Ok(Roster::builtin())
}

#[cfg(feature = "loaders")]
pub fn load_battle_config(config: &ClientConfig) -> Result<BattleConfig> {
    use arena_content::{ConfigLoader, ContentFactory};

    match (&config.config_path, &config.data_dir) {
        (Some(path), _) => ConfigLoader::load(path),
        (None, Some(dir)) => ContentFactory::new(dir).load_config(),
        (None, None) => Ok(BattleConfig::default()),
    }
}

#[cfg(not(feature = "loaders"))]
pub fn load_battle_config(config: &ClientConfig) -> Result<BattleConfig> {
    if config.config_path.is_some() || config.data_dir.is_some() {
        tracing::warn!("config files need the `loaders` feature; using defaults");
    }
    Ok(BattleConfig::default())
}
