//! Grid coordinates and answer directions

use std::fmt;

/// Direction in which an answer runs from its origin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// One column to the right per letter
    Across,
    /// One row down per letter
    Down,
}

impl Direction {
    /// Both directions, in presentation order
    pub const ALL: [Self; 2] = [Self::Across, Self::Down];

    /// Parse the single-letter code used in puzzle files (`A` or `D`)
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "A" | "a" => Some(Self::Across),
            "D" | "d" => Some(Self::Down),
            _ => None,
        }
    }

    /// Section heading used when clues are listed
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Across => "ACROSS",
            Self::Down => "DOWN",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Across => write!(f, "Across"),
            Self::Down => write!(f, "Down"),
        }
    }
}

/// A (row, column) coordinate on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[inline]
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The position `steps` cells away in `direction`
    #[inline]
    #[must_use]
    pub const fn step(self, direction: Direction, steps: usize) -> Self {
        match direction {
            Direction::Across => Self::new(self.row, self.col + steps),
            Direction::Down => Self::new(self.row + steps, self.col),
        }
    }

    /// Positions of a `len`-cell span starting here
    pub fn span(self, direction: Direction, len: usize) -> impl Iterator<Item = Self> {
        (0..len).map(move |i| self.step(direction, i))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_codes() {
        assert_eq!(Direction::from_code("A"), Some(Direction::Across));
        assert_eq!(Direction::from_code(" d "), Some(Direction::Down));
        assert_eq!(Direction::from_code("X"), None);
        assert_eq!(Direction::from_code(""), None);
    }

    #[test]
    fn span_across_moves_columns() {
        let cells: Vec<_> = Position::new(2, 3).span(Direction::Across, 3).collect();
        assert_eq!(
            cells,
            vec![Position::new(2, 3), Position::new(2, 4), Position::new(2, 5)]
        );
    }

    #[test]
    fn span_down_moves_rows() {
        let cells: Vec<_> = Position::new(0, 4).span(Direction::Down, 4).collect();
        assert_eq!(cells.last(), Some(&Position::new(3, 4)));
        assert!(cells.iter().all(|p| p.col == 4));
    }

    #[test]
    fn empty_span() {
        assert_eq!(Position::new(1, 1).span(Direction::Down, 0).count(), 0);
    }
}
