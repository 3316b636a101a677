//! Error taxonomy for start-up failures.
//!
//! Game logic itself is infallible. Everything here happens before the first
//! frame is drawn: reading the config, validating it, resolving sprite assets
//! and setting up the terminal.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("could not parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("missing sprite asset '{0}'")]
    MissingAsset(String),
}

pub type GameResult<T> = Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts() {
        let err: GameError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, GameError::Io(_)));
        assert!(err.to_string().contains("gone"));
    }

    #[test]
    fn test_messages_name_the_problem() {
        let err = GameError::MissingAsset("bird_1".to_string());
        assert_eq!(err.to_string(), "missing sprite asset 'bird_1'");

        let err = GameError::InvalidConfig("gap_height must be positive".to_string());
        assert_eq!(err.to_string(), "invalid config: gap_height must be positive");
    }
}
