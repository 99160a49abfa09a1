//! Error types
//!
//! Every error here is recoverable: the rejected operation leaves state unchanged.

use std::io;
use thiserror::Error;

/// Errors raised by the puzzle board
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("Maximum clues reached ({capacity})")]
    CapacityExceeded { capacity: usize },
    #[error("Clue number {0} not found")]
    NotFound(u32),
}

/// Errors raised when a turn is rejected before reaching the board
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TurnError {
    #[error("Invalid clue number {0}")]
    ClueNotFound(u32),
    #[error("Clue {0} is already solved")]
    AlreadySolved(u32),
    #[error("No player number {0}")]
    UnknownPlayer(usize),
    #[error("Answer must not be empty")]
    EmptyAnswer,
}

/// Errors raised when registering players
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayerError {
    #[error("Player name must not be empty")]
    Empty,
    #[error("Player name '{0}' is too long")]
    TooLong(String),
    #[error("Player name '{0}' must be a single word")]
    Whitespace(String),
    #[error("At most {0} players can take part")]
    TooMany(usize),
    #[error("At least one player is required")]
    NoPlayers,
}

/// Errors raised while reading a puzzle definition
#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("Failed to read puzzle: {0}")]
    Io(#[from] io::Error),
    #[error("Line {line}: {reason}")]
    Parse { line: usize, reason: String },
    #[error(transparent)]
    Board(#[from] BoardError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            BoardError::CapacityExceeded { capacity: 20 }.to_string(),
            "Maximum clues reached (20)"
        );
        assert_eq!(
            BoardError::NotFound(7).to_string(),
            "Clue number 7 not found"
        );
        assert_eq!(
            PuzzleError::Parse {
                line: 3,
                reason: "bad row".to_string()
            }
            .to_string(),
            "Line 3: bad row"
        );
    }

    #[test]
    fn board_error_converts() {
        let err: PuzzleError = BoardError::NotFound(1).into();
        assert!(matches!(err, PuzzleError::Board(BoardError::NotFound(1))));
    }
}
