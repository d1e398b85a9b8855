use thiserror::Error;

use crate::cards::Card;

/// Contract violations raised by the engine. Illegal betting actions are not
/// errors: the game ignores them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid card: {0}")]
    InvalidCard(String),
    #[error("Duplicate card in deck: {0}")]
    DuplicateCard(Card),
    #[error("Not enough cards in the deck: requested {requested}, remaining {remaining}")]
    DeckExhausted { requested: usize, remaining: usize },
    #[error("Hand evaluation needs 5 to 7 cards, got {count}")]
    NotEnoughCards { count: usize },
    #[error("Need at least 2 players with chips, found {funded}")]
    NotEnoughPlayers { funded: usize },
    #[error("At most {max} players fit at a table, got {count}")]
    TooManyPlayers { count: usize, max: usize },
    #[error("Blinds must be positive with small blind <= big blind (got {small}/{big})")]
    InvalidBlinds { small: u32, big: u32 },
}

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unsupported snapshot schema version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
    #[error("Inconsistent snapshot: {0}")]
    Inconsistent(String),
}
