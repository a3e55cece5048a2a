use std::path::PathBuf;

use crate::game::Player;

/// A move request the board cannot honour. The board is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is out of range")]
    InvalidColumn(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),
}

/// Errors from parsing a board written in its text layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseBoardError {
    #[error("expected 6 rows, found {0}")]
    RowCount(usize),

    #[error("row {row} has {width} cells, expected 7")]
    RowWidth { row: usize, width: usize },

    #[error("unknown cell symbol {0:?}")]
    Symbol(char),
}

/// Errors returned by [`GameSession`](crate::game::GameSession) operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("the game is already over")]
    GameOver,

    #[error("it is not {attempted}'s turn (waiting on {expected})")]
    NotYourTurn { expected: Player, attempted: Player },

    #[error("illegal move: {0}")]
    Move(#[from] MoveError),

    #[error("search returned no column (legal: {legal:?})")]
    NoLegalMove { legal: Vec<usize> },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        assert_eq!(MoveError::ColumnFull(3).to_string(), "column 3 is full");
        assert_eq!(
            MoveError::InvalidColumn(9).to_string(),
            "column 9 is out of range"
        );
    }

    #[test]
    fn test_session_error_wraps_move_error() {
        let err: SessionError = MoveError::ColumnFull(0).into();
        assert_eq!(err.to_string(), "illegal move: column 0 is full");
    }

    #[test]
    fn test_not_your_turn_display() {
        let err = SessionError::NotYourTurn {
            expected: Player::Ai,
            attempted: Player::Human,
        };
        assert_eq!(err.to_string(), "it is not Human's turn (waiting on AI)");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("game.difficulty must be in 1..=5".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: game.difficulty must be in 1..=5"
        );
    }
}
