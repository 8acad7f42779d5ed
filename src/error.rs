use std::path::PathBuf;

use crate::game::Phase;

/// Errors that can occur when loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("at least 2 players are required, got {0}")]
    TooFewPlayers(usize),

    #[error("board must be between 1x1 and 64x64, got {columns}x{rows}")]
    InvalidBoardSize { columns: usize, rows: usize },

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Board construction and addressing errors. These indicate a bug upstream,
/// not a bad user action.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("slot ({row}, {col}) is outside the {width}x{height} board")]
    OutOfRange {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },
}

/// Reasons a user action was rejected. The game state is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is outside the board")]
    ColumnOutOfRange { column: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("cannot {action} while the game is {phase}")]
    InvalidPhase { action: &'static str, phase: Phase },

    #[error("there is no move to undo")]
    NothingToUndo,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("the game has not been started")]
    NotStarted,
}
