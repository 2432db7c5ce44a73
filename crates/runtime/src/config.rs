//! Session configuration sourced from the environment.

use std::env;

use delve_core::GameConfig;

/// Settings for a single game session.
///
/// The map dimensions feed straight into floor generation; the seed fixes
/// the whole run, so two sessions built from equal configurations replay
/// identically.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub map_width: u32,
    pub map_height: u32,
    /// Fixed seed for reproducible runs; `None` draws one from OS entropy.
    pub seed: Option<u64>,
}

impl SessionConfig {
    /// Smallest map that leaves the generator room for full-size rooms plus
    /// their one-cell wall margin.
    pub const MIN_WIDTH: u32 = 16;
    pub const MIN_HEIGHT: u32 = 12;

    /// Construct session configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DELVE_MAP_WIDTH` - Map width in cells (default: 40)
    /// - `DELVE_MAP_HEIGHT` - Map height in cells (default: 24)
    /// - `DELVE_SEED` - Fixed seed for a reproducible run (default: entropy)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(width) = read_env::<u32>("DELVE_MAP_WIDTH") {
            config.map_width = width;
        }
        if let Some(height) = read_env::<u32>("DELVE_MAP_HEIGHT") {
            config.map_height = height;
        }
        config.seed = read_env::<u64>("DELVE_SEED");

        config
    }

    /// True when the configured map clears the playable minimum.
    pub fn is_playable(&self) -> bool {
        self.map_width >= Self::MIN_WIDTH && self.map_height >= Self::MIN_HEIGHT
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            map_width: GameConfig::DEFAULT_MAP_WIDTH,
            map_height: GameConfig::DEFAULT_MAP_HEIGHT,
            seed: None,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
