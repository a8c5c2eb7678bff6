use std::path::PathBuf;

use figment::{providers::Env, Figment};
use serde::Deserialize;

use crate::constants::{DEFAULT_MAP_PATH, DEFAULT_QUIT_COMMAND, ENV_PREFIX};
use crate::error::GameResult;

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Adjacency file to load
    #[serde(default = "default_map_path")]
    pub map_path: PathBuf,
    /// Room to lay out and start from - if None, the first room in the file
    #[serde(default)]
    pub start_room: Option<String>,
    /// Input line that ends the session
    #[serde(default = "default_quit_command")]
    pub quit_command: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            map_path: default_map_path(),
            start_room: None,
            quit_command: default_quit_command(),
        }
    }
}

impl Config {
    /// Extracts and validates a configuration from any figment.
    pub fn from_figment(figment: Figment) -> GameResult<Config> {
        let config: Config = figment.extract()?;

        if config.quit_command.trim().is_empty() {
            return Err(figment::Error::from("quit_command must not be empty".to_string()).into());
        }

        Ok(config)
    }

    /// Applies command line overrides on top of the loaded values.
    pub fn with_overrides(mut self, map_path: Option<PathBuf>, start_room: Option<String>) -> Self {
        if let Some(map_path) = map_path {
            self.map_path = map_path;
        }
        if start_room.is_some() {
            self.start_room = start_room;
        }
        self
    }
}

fn default_map_path() -> PathBuf {
    PathBuf::from(DEFAULT_MAP_PATH)
}

fn default_quit_command() -> String {
    DEFAULT_QUIT_COMMAND.to_string()
}

/// Loads the configuration from `DUNGEON_`-prefixed environment variables.
pub fn load_config() -> GameResult<Config> {
    Config::from_figment(Figment::new().merge(Env::prefixed(ENV_PREFIX)))
}
