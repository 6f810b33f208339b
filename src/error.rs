use std::path::PathBuf;

use crate::game::PlayerId;

/// Errors returned when a player tries to take a seat.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    #[error("both player slots are already taken")]
    RegistrationFull,

    #[error("player {0} is already registered")]
    AlreadyRegistered(PlayerId),
}

/// Errors returned when a move is rejected.
///
/// Every variant except [`MoveError::InternalInconsistency`] is a normal,
/// recoverable rejection that leaves the game untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("game has not started: waiting for players")]
    WaitingForPlayers,

    #[error("game is over")]
    GameOver,

    #[error("column {column} is out of range (board has {width} columns)")]
    InvalidColumn { column: usize, width: usize },

    #[error("it is not {0}'s turn")]
    NotYourTurn(PlayerId),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("internal inconsistency: {0}")]
    InternalInconsistency(String),
}

impl MoveError {
    /// Whether the error reflects a bug in the engine rather than a bad request.
    pub fn is_internal(&self) -> bool {
        matches!(self, MoveError::InternalInconsistency(_))
    }
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
