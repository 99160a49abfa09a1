//! Puzzle board
//!
//! Owns the letter grid and the clue collection, and keeps the two consistent
//! when answers are placed and solved.

mod clues;
mod grid;

pub use clues::ClueList;
pub use grid::Grid;

use crate::core::{BoardConfig, BoardError, Cell, Clue, Direction, Position};
use tracing::{debug, warn};

/// Result of checking a guess against a clue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
}

impl Verdict {
    #[inline]
    #[must_use]
    pub const fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }
}

/// Grid plus clue collection
#[derive(Debug, Clone)]
pub struct Board {
    config: BoardConfig,
    grid: Grid,
    clues: ClueList,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}

impl Board {
    /// Create an empty board
    #[must_use]
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config,
            grid: Grid::new(config.grid_size),
            clues: ClueList::new(config.max_clues),
        }
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mark the span of `answer` as unsolved placeholder cells
    ///
    /// Only the grid changes. Cells falling outside the grid are skipped.
    /// Returns the number of cells written.
    pub fn place_word(&mut self, answer: &str, origin: Position, direction: Direction) -> usize {
        let len = answer.chars().count();
        let written = origin
            .span(direction, len)
            .filter(|&pos| self.grid.set(pos, Cell::Placeholder))
            .count();

        if written < len {
            warn!(answer, %origin, %direction, written, len, "word clipped at grid edge");
        }
        debug!(answer, %origin, %direction, "placed word");
        written
    }

    /// Append a new unsolved clue
    ///
    /// # Errors
    /// Returns `BoardError::CapacityExceeded` when the collection is full.
    ///
    /// # Examples
    /// ```
    /// use crossword_engine::board::Board;
    /// use crossword_engine::core::{Direction, Position};
    ///
    /// let mut board = Board::default();
    /// let clue = board
    ///     .add_clue(1, "Capital of France", "PARIS", Position::new(0, 0), Direction::Across)
    ///     .unwrap();
    /// assert!(!clue.is_solved());
    /// ```
    pub fn add_clue(
        &mut self,
        number: u32,
        text: impl Into<String>,
        answer: impl Into<String>,
        origin: Position,
        direction: Direction,
    ) -> Result<&Clue, BoardError> {
        let clue = Clue::new(number, text, answer, origin, direction);
        debug!(number, answer = clue.answer(), "adding clue");
        self.clues.push(clue)
    }

    /// Remove the first clue numbered `number`
    ///
    /// Grid cells already filled for that clue are left as they are.
    ///
    /// # Errors
    /// Returns `BoardError::NotFound` when no clue has that number.
    pub fn delete_clue(&mut self, number: u32) -> Result<Clue, BoardError> {
        let removed = self.clues.remove(number)?;
        debug!(number, remaining = self.clues.len(), "deleted clue");
        Ok(removed)
    }

    /// First clue numbered `number`
    #[must_use]
    pub fn find_clue(&self, number: u32) -> Option<&Clue> {
        self.clues.find(number)
    }

    /// Check `guess` against clue `number`
    ///
    /// A correct guess marks the clue solved and writes its letters into the grid.
    /// An incorrect guess changes nothing. Solved clues are checked like any other.
    /// Letters that would land outside the grid are skipped.
    ///
    /// # Errors
    /// Returns `BoardError::NotFound` when no clue has that number.
    pub fn check_answer(&mut self, number: u32, guess: &str) -> Result<Verdict, BoardError> {
        let clue = self
            .clues
            .find_mut(number)
            .ok_or(BoardError::NotFound(number))?;

        if !clue.matches(guess) {
            debug!(number, "incorrect answer");
            return Ok(Verdict::Incorrect);
        }

        clue.mark_solved();
        let len = clue.answer_len();
        let written = clue
            .cells()
            .zip(clue.answer().chars())
            .filter(|&(pos, letter)| self.grid.set(pos, Cell::Letter(letter)))
            .count();

        if written < len {
            warn!(number, answer = clue.answer(), written, len, "letters clipped at grid edge");
        }
        debug!(number, answer = clue.answer(), "clue solved");
        Ok(Verdict::Correct)
    }

    /// All clues in insertion order
    #[must_use]
    pub fn clues(&self) -> &[Clue] {
        self.clues.as_slice()
    }

    /// Clues running in `direction`, in insertion order
    pub fn clues_in(&self, direction: Direction) -> impl Iterator<Item = &Clue> {
        self.clues.in_direction(direction)
    }

    #[must_use]
    pub fn unsolved_count(&self) -> usize {
        self.clues.iter().filter(|c| !c.is_solved()).count()
    }

    /// Grid as text with row and column headers
    #[must_use]
    pub fn render_grid(&self) -> String {
        self.grid.to_string()
    }
}
