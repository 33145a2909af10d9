//! Battle configuration loader.

use std::path::Path;

use arena_core::BattleConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for battle configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a [`BattleConfig`] from a TOML file.
    ///
    /// Missing keys fall back to the defaults; the result is validated before
    /// it is returned.
    pub fn load(path: &Path) -> LoadResult<BattleConfig> {
        let content = read_file(path)?;
        let config: BattleConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML {}: {}", path.display(), e))?;

        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid battle config in {}: {}", path.display(), e))?;

        tracing::debug!(path = %path.display(), "battle config loaded");
        Ok(config)
    }
}
