//! Board sizing and capacity limits

use super::{Direction, Position};

/// Maximum number of players in one session
pub const MAX_PLAYERS: usize = 10;

/// Maximum length of a player name
pub const MAX_PLAYER_NAME_LENGTH: usize = 49;

/// Dimensions and capacity limits of a puzzle board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    /// Side length of the square grid
    pub grid_size: usize,
    /// Capacity of the clue collection
    pub max_clues: usize,
    /// Longest accepted answer
    pub max_word_length: usize,
    /// Longest accepted clue text
    pub max_clue_length: usize,
}

impl BoardConfig {
    /// Same limits with a different clue capacity
    #[must_use]
    pub const fn with_max_clues(self, max_clues: usize) -> Self {
        Self { max_clues, ..self }
    }

    /// Whether a `len`-cell span starting at `origin` stays inside the grid
    #[must_use]
    pub const fn fits(&self, origin: Position, direction: Direction, len: usize) -> bool {
        let last = origin.step(direction, len.saturating_sub(1));
        last.row < self.grid_size && last.col < self.grid_size
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            grid_size: 10,
            max_clues: 20,
            max_word_length: 15,
            max_clue_length: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = BoardConfig::default();
        assert_eq!(config.grid_size, 10);
        assert_eq!(config.max_clues, 20);
        assert_eq!(config.max_word_length, 15);
    }

    #[test]
    fn fits_checks_last_cell() {
        let config = BoardConfig::default();
        assert!(config.fits(Position::new(0, 5), Direction::Across, 5));
        assert!(!config.fits(Position::new(0, 6), Direction::Across, 5));
        assert!(config.fits(Position::new(5, 0), Direction::Down, 5));
        assert!(!config.fits(Position::new(6, 0), Direction::Down, 5));
        assert!(!config.fits(Position::new(10, 0), Direction::Across, 1));
    }

    #[test]
    fn override_capacity() {
        let config = BoardConfig::default().with_max_clues(3);
        assert_eq!(config.max_clues, 3);
        assert_eq!(config.grid_size, 10);
    }
}
