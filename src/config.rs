use std::path::Path;

use crate::error::ConfigError;
use crate::game::{DEFAULT_COLUMNS, DEFAULT_ROWS};

/// Largest accepted board side, in slots.
pub const MAX_BOARD_DIMENSION: usize = 64;

/// Board dimensions in slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub columns: usize,
    pub rows: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
        }
    }
}

/// One participant. `color` is an opaque token handed to the renderer
/// (`"#FF0000"`, `"yellow"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlayerConfig {
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl PlayerConfig {
    pub fn new(color: impl Into<String>, name: Option<&str>) -> Self {
        PlayerConfig {
            color: color.into(),
            name: name.map(str::to_string),
        }
    }
}

/// Top-level game configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board: BoardConfig,
    pub players: Vec<PlayerConfig>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board: BoardConfig::default(),
            players: vec![
                PlayerConfig::new("#FF0000", Some("Red")),
                PlayerConfig::new("#FFFF00", Some("Yellow")),
            ],
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.players.len() < 2 {
            return Err(ConfigError::TooFewPlayers(self.players.len()));
        }
        let dimension = 1..=MAX_BOARD_DIMENSION;
        if !dimension.contains(&self.board.columns) || !dimension.contains(&self.board.rows) {
            return Err(ConfigError::InvalidBoardSize {
                columns: self.board.columns,
                rows: self.board.rows,
            });
        }
        for (i, player) in self.players.iter().enumerate() {
            if player.color.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "players[{i}].color must not be empty"
                )));
            }
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&GameConfig::default()).expect("default config serializes")
    }
}
