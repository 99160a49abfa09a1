//! Puzzle definitions
//!
//! A [`Puzzle`] is the setup data for a board: each entry becomes one
//! `add_clue` followed by one `place_word`. The built-in puzzle is embedded at
//! build time; custom puzzles are read from text files with one clue per line:
//!
//! ```text
//! # number|direction|row|col|answer|clue
//! 1|A|0|0|PARIS|Capital of France
//! 4|D|0|0|ICE|Frozen water
//! ```

mod embedded;
pub mod loader;

pub use embedded::{SEED_CLUES, SEED_CLUES_COUNT};
pub use loader::{load_from_file, parse_puzzle};

use crate::board::Board;
use crate::core::{BoardConfig, BoardError, Direction, Position};
use rustc_hash::FxHashSet;

/// One clue of a puzzle definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClueEntry {
    pub number: u32,
    pub direction: Direction,
    pub origin: Position,
    pub answer: String,
    pub text: String,
}

/// Setup data for a board
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Puzzle {
    pub clues: Vec<ClueEntry>,
}

impl Puzzle {
    /// Create a board holding every clue of the puzzle with its span marked
    ///
    /// # Errors
    /// Returns `BoardError::CapacityExceeded` if the puzzle has more clues than
    /// `config.max_clues`.
    pub fn build_board(&self, config: BoardConfig) -> Result<Board, BoardError> {
        let mut board = Board::new(config);
        for entry in &self.clues {
            board.add_clue(
                entry.number,
                entry.text.as_str(),
                entry.answer.as_str(),
                entry.origin,
                entry.direction,
            )?;
            board.place_word(&entry.answer, entry.origin, entry.direction);
        }
        Ok(board)
    }

    /// Clue numbers that appear more than once, in first-repeat order
    #[must_use]
    pub fn duplicate_numbers(&self) -> Vec<u32> {
        let mut seen = FxHashSet::default();
        let mut duplicates = Vec::new();
        for entry in &self.clues {
            if !seen.insert(entry.number) && !duplicates.contains(&entry.number) {
                duplicates.push(entry.number);
            }
        }
        duplicates
    }
}

/// The built-in ten-clue puzzle
#[must_use]
pub fn builtin() -> Puzzle {
    let clues = SEED_CLUES
        .iter()
        .map(|&(number, direction, row, col, answer, text)| ClueEntry {
            number,
            direction: if direction == 'D' {
                Direction::Down
            } else {
                Direction::Across
            },
            origin: Position::new(row, col),
            answer: answer.to_string(),
            text: text.to_string(),
        })
        .collect();
    Puzzle { clues }
}
