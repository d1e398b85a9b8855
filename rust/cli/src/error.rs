//! Error types for the CLI application.

use holdem_engine::errors::{GameError, SnapshotError};
use thiserror::Error;

use crate::config::ConfigError;

/// Every failure a command can return. All of them map to exit code `2`.
#[derive(Debug, Error)]
pub enum CliError {
    /// I/O error (file operations, stdout/stderr writes, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid user input or command-line arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    /// Engine-related error, including save files that cannot be used
    #[error("Engine error: {0}")]
    Engine(String),
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::Config(e.to_string())
    }
}

impl From<GameError> for CliError {
    fn from(e: GameError) -> Self {
        CliError::Engine(e.to_string())
    }
}

impl From<SnapshotError> for CliError {
    fn from(e: SnapshotError) -> Self {
        match e {
            SnapshotError::Io(io) => CliError::Io(io),
            other => CliError::Engine(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_the_category() {
        let e = CliError::InvalidInput("hands must be >= 1".into());
        assert_eq!(e.to_string(), "Invalid input: hands must be >= 1");
        let e: CliError = GameError::NotEnoughPlayers { funded: 1 }.into();
        assert!(e.to_string().starts_with("Engine error: "));
    }

    #[test]
    fn snapshot_io_stays_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let e: CliError = SnapshotError::Io(io).into();
        assert!(matches!(e, CliError::Io(_)));
    }
}
