use std::path::Path;

use crate::error::ConfigError;
use crate::game::{Player, SessionConfig, MAX_DIFFICULTY, MIN_DIFFICULTY};

/// Number of board colours the menu cycles through.
pub const PALETTE_SIZE: u8 = 16;

/// Settings chosen on the menu before a game starts.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub player_name: String,
    pub starting_player: Player,
    /// Search depth of the automated player.
    pub difficulty: u8,
    /// 1-based index into the board colour palette.
    pub board_color: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            player_name: "Player".to_string(),
            starting_player: Player::Human,
            difficulty: 1,
            board_color: 1,
        }
    }
}

impl GameConfig {
    /// The immutable settings a [`GameSession`](crate::game::GameSession) runs with.
    pub fn session(&self) -> Result<SessionConfig, ConfigError> {
        SessionConfig::new(self.starting_player, self.difficulty)
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!("Warning: config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&self.game.difficulty) {
            return Err(ConfigError::Validation(format!(
                "game.difficulty must be in {MIN_DIFFICULTY}..={MAX_DIFFICULTY}"
            )));
        }
        if !(1..=PALETTE_SIZE).contains(&self.game.board_color) {
            return Err(ConfigError::Validation(format!(
                "game.board_color must be in 1..={PALETTE_SIZE}"
            )));
        }
        if self.game.player_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "game.player_name must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}
