//! Square letter grid
//!
//! Cells live in a single row-major buffer. The grid is the only owner of
//! cell state; clues refer to it through coordinates.

use crate::core::{Cell, Direction, Position};
use std::fmt;

/// Fixed-size square grid of cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid of `size × size` blank cells
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Blank; size * size],
        }
    }

    /// Side length
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    #[inline]
    #[must_use]
    pub const fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    #[inline]
    const fn index(&self, pos: Position) -> Option<usize> {
        if self.contains(pos) {
            Some(pos.row * self.size + pos.col)
        } else {
            None
        }
    }

    /// Cell at `pos`, or `None` outside the grid
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Overwrite the cell at `pos`
    ///
    /// Returns `false` and leaves the grid untouched when `pos` is outside it.
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) -> bool {
        match self.index(pos) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Rows in top-to-bottom order
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size.max(1))
    }

    /// The cells under a span, skipping positions outside the grid
    pub fn read_span(
        &self,
        origin: Position,
        direction: Direction,
        len: usize,
    ) -> impl Iterator<Item = Cell> + '_ {
        origin
            .span(direction, len)
            .filter_map(move |pos| self.get(pos))
    }

    /// Count of cells in a given state
    #[must_use]
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }
}

impl fmt::Display for Grid {
    /// Renders the grid with column indices across the top and row indices down the side
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..self.size {
            write!(f, "{col:2} ")?;
        }
        writeln!(f)?;

        for (row, cells) in self.rows().enumerate() {
            write!(f, "{row:2} ")?;
            for cell in cells {
                write!(f, " {cell} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_blank() {
        let grid = Grid::new(10);
        assert_eq!(grid.size(), 10);
        assert_eq!(grid.count(Cell::Blank), 100);
        assert_eq!(grid.rows().count(), 10);
    }

    #[test]
    fn set_and_get() {
        let mut grid = Grid::new(4);
        assert!(grid.set(Position::new(1, 2), Cell::Letter('X')));
        assert_eq!(grid.get(Position::new(1, 2)), Some(Cell::Letter('X')));
        assert_eq!(grid.get(Position::new(2, 1)), Some(Cell::Blank));
    }

    #[test]
    fn out_of_bounds_is_rejected() {
        let mut grid = Grid::new(4);
        assert!(!grid.set(Position::new(4, 0), Cell::Placeholder));
        assert!(!grid.set(Position::new(0, 4), Cell::Placeholder));
        assert_eq!(grid.get(Position::new(0, 4)), None);
        assert_eq!(grid.count(Cell::Blank), 16);
    }

    #[test]
    fn display_has_headers() {
        let mut grid = Grid::new(3);
        grid.set(Position::new(0, 0), Cell::Letter('A'));
        grid.set(Position::new(1, 1), Cell::Placeholder);

        let rendered = grid.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "    0  1  2 ");
        assert_eq!(lines[1], " 0  A  .  . ");
        assert_eq!(lines[2], " 1  .  _  . ");
        assert_eq!(lines[3], " 2  .  .  . ");
    }
}
