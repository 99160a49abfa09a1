//! Grid cell state

use std::fmt;

/// State of a single grid cell
///
/// Every cell covered by a clue's span is either `Placeholder` or `Letter`;
/// every other cell stays `Blank`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    /// Unused square
    #[default]
    Blank,
    /// Square belonging to an answer that has not been solved yet
    Placeholder,
    /// Solved square holding an uppercase letter
    Letter(char),
}

impl Cell {
    /// Glyph used when the grid is printed
    #[inline]
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Blank => '.',
            Self::Placeholder => '_',
            Self::Letter(c) => c,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs() {
        assert_eq!(Cell::Blank.glyph(), '.');
        assert_eq!(Cell::Placeholder.glyph(), '_');
        assert_eq!(Cell::Letter('Q').glyph(), 'Q');
    }

    #[test]
    fn default_is_blank() {
        assert_eq!(Cell::default(), Cell::Blank);
    }
}
