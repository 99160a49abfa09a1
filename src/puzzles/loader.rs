//! Puzzle file loading
//!
//! Reads puzzle definitions in the `number|direction|row|col|answer|clue`
//! line format. Blank lines and lines starting with `#` are ignored.

use super::{ClueEntry, Puzzle};
use crate::core::{BoardConfig, Direction, Position, PuzzleError};
use std::fs;
use std::path::Path;
use tracing::warn;

/// Load a puzzle from a file
///
/// # Errors
///
/// Returns `PuzzleError::Io` if the file cannot be read and
/// `PuzzleError::Parse` if a line is malformed.
///
/// # Examples
/// ```no_run
/// use crossword_engine::core::BoardConfig;
/// use crossword_engine::puzzles::load_from_file;
///
/// let puzzle = load_from_file("data/seed.puzzle", &BoardConfig::default()).unwrap();
/// println!("Loaded {} clues", puzzle.clues.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, config: &BoardConfig) -> Result<Puzzle, PuzzleError> {
    let content = fs::read_to_string(path)?;
    parse_puzzle(&content, config)
}

/// Parse puzzle text
///
/// Each answer must be letters only, no longer than `config.max_word_length`,
/// and its span must fit inside a `config.grid_size` grid.
///
/// # Errors
///
/// Returns `PuzzleError::Parse` naming the first offending line.
///
/// # Examples
/// ```
/// use crossword_engine::core::{BoardConfig, Direction};
/// use crossword_engine::puzzles::parse_puzzle;
///
/// let puzzle = parse_puzzle("4|D|0|0|ice|Frozen water", &BoardConfig::default()).unwrap();
/// assert_eq!(puzzle.clues[0].answer, "ICE");
/// assert_eq!(puzzle.clues[0].direction, Direction::Down);
/// ```
pub fn parse_puzzle(content: &str, config: &BoardConfig) -> Result<Puzzle, PuzzleError> {
    let clues = content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line_number, line)| {
            parse_line(line, config).map_err(|reason| PuzzleError::Parse {
                line: line_number,
                reason,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if clues.is_empty() {
        return Err(PuzzleError::Parse {
            line: content.lines().count(),
            reason: "puzzle has no clues".to_string(),
        });
    }

    let puzzle = Puzzle { clues };
    for number in puzzle.duplicate_numbers() {
        warn!(number, "duplicate clue number; lookups use the first one");
    }
    Ok(puzzle)
}

fn parse_line(line: &str, config: &BoardConfig) -> Result<ClueEntry, String> {
    let fields: Vec<&str> = line.splitn(6, '|').map(str::trim).collect();
    let [number, direction, row, col, answer, text] = fields.as_slice() else {
        return Err(format!(
            "expected 6 fields separated by '|', got {}",
            fields.len()
        ));
    };

    let number: u32 = number
        .parse()
        .map_err(|_| format!("invalid clue number '{number}'"))?;
    if number == 0 {
        return Err("clue number must be positive".to_string());
    }

    let direction = Direction::from_code(direction)
        .ok_or_else(|| format!("direction must be A or D, got '{direction}'"))?;

    let row: usize = row.parse().map_err(|_| format!("invalid row '{row}'"))?;
    let col: usize = col.parse().map_err(|_| format!("invalid column '{col}'"))?;
    let origin = Position::new(row, col);

    if answer.is_empty() || !answer.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(format!("answer '{answer}' must be letters only"));
    }
    if answer.len() > config.max_word_length {
        return Err(format!(
            "answer '{answer}' is longer than {} letters",
            config.max_word_length
        ));
    }

    if !config.fits(origin, direction, answer.len()) {
        return Err(format!(
            "answer '{answer}' at {origin} {direction} does not fit a {0}x{0} grid",
            config.grid_size
        ));
    }

    if text.is_empty() {
        return Err("clue text must not be empty".to_string());
    }
    if text.chars().count() > config.max_clue_length {
        return Err(format!(
            "clue text is longer than {} characters",
            config.max_clue_length
        ));
    }

    Ok(ClueEntry {
        number,
        direction,
        origin,
        answer: answer.to_ascii_uppercase(),
        text: (*text).to_string(),
    })
}
