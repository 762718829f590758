use std::path::PathBuf;

use crate::game::{CellId, PocketId};

/// Errors from parsing a textual cell identifier such as "3L" or "1S".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentifierError {
    #[error("'{0}' is not a cell identifier (expected e.g. 3L, 4R or 1S)")]
    WrongLength(String),

    #[error("invalid position '{0}', expected 1-6")]
    InvalidPosition(char),

    #[error("invalid side '{0}', expected L or R")]
    InvalidSide(char),
}

/// Errors from submitting a move. The board is never mutated when one of
/// these is returned, so the caller can simply re-prompt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error(transparent)]
    Identifier(#[from] IdentifierError),

    #[error("{0} is a store, choose one of your pockets")]
    NotAPocket(CellId),

    #[error("pocket {0} belongs to the other player")]
    WrongSide(PocketId),

    #[error("pocket {0} is empty")]
    EmptyPocket(PocketId),

    #[error("the game is already over")]
    GameOver,
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
