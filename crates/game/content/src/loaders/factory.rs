//! Content factory for loading a full content set from a data directory.

use std::path::{Path, PathBuf};

use arena_core::BattleConfig;

use crate::loaders::{ConfigLoader, LoadResult, RosterLoader};
use crate::roster::Roster;

/// Content factory that loads arena content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── battle.toml
/// └── roster.ron
/// ```
///
/// Either file may be absent, in which case the built-in content is used.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "battle.toml";
    pub const ROSTER_FILE: &'static str = "roster.ron";

    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load battle configuration from `battle.toml`, or the defaults.
    pub fn load_config(&self) -> LoadResult<BattleConfig> {
        let path = self.data_dir.join(Self::CONFIG_FILE);
        if !path.exists() {
            return Ok(BattleConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the fighter roster from `roster.ron`, or the built-in catalog.
    pub fn load_roster(&self) -> LoadResult<Roster> {
        let path = self.data_dir.join(Self::ROSTER_FILE);
        if !path.exists() {
            return Ok(Roster::builtin());
        }
        RosterLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_directory_yields_builtin_content() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.load_roster().unwrap(), Roster::builtin());
        assert_eq!(factory.load_config().unwrap(), BattleConfig::default());
    }

    #[test]
    fn reads_files_from_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(ContentFactory::CONFIG_FILE), "heal_amount = 7\n").unwrap();
        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.load_config().unwrap().heal_amount, 7);
        assert_eq!(factory.data_dir(), dir.path());
    }
}
