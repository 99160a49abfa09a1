//! Puzzle inspection command
//!
//! Builds a board from a puzzle definition so its layout can be checked.

use crate::board::Board;
use crate::core::{BoardConfig, BoardError, Direction};
use crate::puzzles::Puzzle;

/// Result of inspecting a puzzle
pub struct InspectResult {
    pub board: Board,
    pub across: usize,
    pub down: usize,
    pub duplicate_numbers: Vec<u32>,
}

/// Build the puzzle's board, optionally with every answer filled in
///
/// # Errors
///
/// Returns `BoardError::CapacityExceeded` if the puzzle has more clues than
/// the board allows.
pub fn inspect_puzzle(
    puzzle: &Puzzle,
    config: BoardConfig,
    reveal: bool,
) -> Result<InspectResult, BoardError> {
    let mut board = puzzle.build_board(config)?;

    if reveal {
        let answers: Vec<(u32, String)> = board
            .clues()
            .iter()
            .map(|clue| (clue.number(), clue.answer().to_string()))
            .collect();
        for (number, answer) in answers {
            board.check_answer(number, &answer)?;
        }
    }

    let across = board.clues_in(Direction::Across).count();
    let down = board.clues_in(Direction::Down).count();

    Ok(InspectResult {
        board,
        across,
        down,
        duplicate_numbers: puzzle.duplicate_numbers(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Cell, Position};
    use crate::puzzles::builtin;

    #[test]
    fn counts_directions() {
        let result = inspect_puzzle(&builtin(), BoardConfig::default(), false).unwrap();
        assert_eq!(result.across, 6);
        assert_eq!(result.down, 4);
        assert!(result.duplicate_numbers.is_empty());
        assert_eq!(result.board.unsolved_count(), 10);
    }

    #[test]
    fn reveal_fills_every_answer() {
        let result = inspect_puzzle(&builtin(), BoardConfig::default(), true).unwrap();
        let grid = result.board.grid();

        assert_eq!(result.board.unsolved_count(), 0);
        assert_eq!(grid.count(Cell::Placeholder), 0);
        assert_eq!(grid.get(Position::new(6, 0)), Some(Cell::Letter('P')));
        // ICE is revealed after JUPITER and takes the shared square
        assert_eq!(grid.get(Position::new(2, 0)), Some(Cell::Letter('E')));
        assert_eq!(grid.get(Position::new(8, 5)), Some(Cell::Letter('T')));
    }

    #[test]
    fn too_many_clues() {
        let result = inspect_puzzle(&builtin(), BoardConfig::default().with_max_clues(9), false);
        assert!(matches!(
            result,
            Err(BoardError::CapacityExceeded { capacity: 9 })
        ));
    }
}
