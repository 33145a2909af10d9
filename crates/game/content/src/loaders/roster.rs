//! Roster loader.

use std::path::Path;

use arena_core::CharacterSpec;

use crate::loaders::{LoadResult, read_file};
use crate::roster::Roster;

/// Loader for fighter rosters from RON files.
pub struct RosterLoader;

impl RosterLoader {
    /// Load a roster from a RON file.
    ///
    /// RON format: `Vec<CharacterSpec>`. Every entry is validated, and the
    /// file must name at least one fighter.
    pub fn load(path: &Path) -> LoadResult<Roster> {
        let content = read_file(path)?;
        let specs: Vec<CharacterSpec> = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster RON {}: {}", path.display(), e))?;

        if specs.is_empty() {
            anyhow::bail!("Roster {} has no fighters", path.display());
        }
        for spec in &specs {
            spec.validate().map_err(|e| {
                anyhow::anyhow!("Invalid fighter '{}' in {}: {}", spec.name, path.display(), e)
            })?;
        }

        tracing::debug!(path = %path.display(), fighters = specs.len(), "roster loaded");
        Ok(Roster::new(specs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::CharacterKind;
    use std::io::Write;

    fn write_ron(body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_fighters_in_file_order() {
        let file = write_ron(
            r#"[
    (
        name: "Brawler",
        base_power: 60,
        kind: tank,
        actions: ["Punch", "Kick", "Heal", "Shield"],
        speed: 5,
    ),
    (
        name: "Sage",
        base_power: 70,
        kind: strategist,
        actions: ["Bolt", "Boost", "Heal", "Shield"],
        speed: 8,
    ),
]"#,
        );
        let roster = RosterLoader::load(file.path()).unwrap();
        assert_eq!(roster.len(), 2);
        let sage = roster.get(1).unwrap();
        assert_eq!(sage.name, "Sage");
        assert_eq!(sage.kind, CharacterKind::Strategist);
        assert_eq!(sage.actions[0].as_str(), "Bolt");
    }

    #[test]
    fn rejects_fighter_without_damaging_action() {
        let file = write_ron(
            r#"[(
        name: "Pacifist",
        base_power: 10,
        kind: energy,
        actions: ["Heal", "Boost", "Shield", "Heal"],
        speed: 3,
    )]"#,
        );
        let err = RosterLoader::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Pacifist"));
    }

    #[test]
    fn rejects_empty_roster() {
        let file = write_ron("[]");
        assert!(RosterLoader::load(file.path()).is_err());
    }
}
