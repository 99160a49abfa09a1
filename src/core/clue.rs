//! Clue representation
//!
//! A clue carries its text, its stored answer and where that answer sits on the grid.

use super::{Direction, Position};
use std::fmt;

/// A crossword clue with its answer placement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clue {
    number: u32,
    text: String,
    answer: String,
    origin: Position,
    direction: Direction,
    solved: bool,
}

impl Clue {
    /// Create a new, unsolved clue
    ///
    /// The answer is stored uppercase.
    ///
    /// # Examples
    /// ```
    /// use crossword_engine::core::{Clue, Direction, Position};
    ///
    /// let clue = Clue::new(1, "Capital of France", "paris", Position::new(0, 0), Direction::Across);
    /// assert_eq!(clue.answer(), "PARIS");
    /// assert!(!clue.is_solved());
    /// ```
    pub fn new(
        number: u32,
        text: impl Into<String>,
        answer: impl Into<String>,
        origin: Position,
        direction: Direction,
    ) -> Self {
        Self {
            number,
            text: text.into(),
            answer: answer.into().to_uppercase(),
            origin,
            direction,
            solved: false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn number(&self) -> u32 {
        self.number
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    #[inline]
    #[must_use]
    pub const fn origin(&self) -> Position {
        self.origin
    }

    #[inline]
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.solved
    }

    /// Number of cells the answer occupies
    #[must_use]
    pub fn answer_len(&self) -> usize {
        self.answer.chars().count()
    }

    /// Grid positions covered by the answer, in reading order
    pub fn cells(&self) -> impl Iterator<Item = Position> {
        self.origin.span(self.direction, self.answer_len())
    }

    /// Case-insensitive exact comparison against the stored answer
    #[must_use]
    pub fn matches(&self, guess: &str) -> bool {
        guess.to_uppercase() == self.answer
    }

    pub(crate) fn mark_solved(&mut self) {
        self.solved = true;
    }
}

impl fmt::Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number, self.text)
    }
}
