//! Client configuration read from the process environment.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Settings for one interactive session.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Pause after each narrated line.
    pub narration_delay: Duration,
    /// Seed for the battle's random stream. Drawn from entropy when absent.
    pub seed: Option<u64>,
    /// Fighters per team.
    pub team_size: usize,
    /// RON roster file; the built-in roster is used when absent.
    pub roster_path: Option<PathBuf>,
    /// TOML battle settings; defaults are used when absent.
    pub config_path: Option<PathBuf>,
    /// Directory holding `roster.ron` and `battle.toml`. Explicit paths win.
    pub data_dir: Option<PathBuf>,
    pub session_id: Option<String>,
    /// Overrides the platform cache directory for log files.
    pub log_dir: Option<PathBuf>,
    /// Capacity of the engine-to-narrator event channel.
    pub event_buffer: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            narration_delay: Duration::from_millis(Self::DEFAULT_NARRATION_DELAY_MS),
            seed: None,
            team_size: Self::DEFAULT_TEAM_SIZE,
            roster_path: None,
            config_path: None,
            data_dir: None,
            session_id: None,
            log_dir: None,
            event_buffer: Self::DEFAULT_EVENT_BUFFER,
        }
    }
}

impl ClientConfig {
    pub const DEFAULT_NARRATION_DELAY_MS: u64 = 1000;
    pub const DEFAULT_TEAM_SIZE: usize = 3;
    pub const DEFAULT_EVENT_BUFFER: usize = 64;

    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `ARENA_NARRATION_DELAY_MS` - Pause after each narrated line (default: 1000)
    /// - `ARENA_SEED` - Battle seed (default: random)
    /// - `ARENA_TEAM_SIZE` - Fighters per team (default: 3)
    /// - `ARENA_ROSTER_PATH` - RON roster file (default: built-in roster)
    /// - `ARENA_CONFIG_PATH` - TOML battle settings (default: built-in rules)
    /// - `ARENA_DATA_DIR` - Directory with `roster.ron` / `battle.toml` (default: none)
    /// - `ARENA_SESSION_ID` - Log session name (default: timestamp)
    /// - `ARENA_LOG_DIR` - Log directory (default: platform cache dir)
    /// - `ARENA_EVENT_BUFFER` - Event channel capacity (default: 64)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(ms) = read_env::<u64>("ARENA_NARRATION_DELAY_MS") {
            config.narration_delay = Duration::from_millis(ms);
        }
        config.seed = read_env("ARENA_SEED");
        if let Some(size) = read_env::<usize>("ARENA_TEAM_SIZE") {
            config.team_size = size.max(1);
        }
        config.roster_path = read_env("ARENA_ROSTER_PATH");
        config.config_path = read_env("ARENA_CONFIG_PATH");
        config.data_dir = read_env("ARENA_DATA_DIR");
        config.session_id = read_env::<String>("ARENA_SESSION_ID").filter(|id| !id.is_empty());
        config.log_dir = read_env("ARENA_LOG_DIR");
        if let Some(capacity) = read_env::<usize>("ARENA_EVENT_BUFFER") {
            config.event_buffer = capacity.max(1);
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
