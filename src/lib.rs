//! Crossword Engine
//!
//! A turn-based multiplayer crossword puzzle engine: a fixed-size letter grid
//! with its clue collection, and a score-ordered ledger for ranking players.
//!
//! # Quick Start
//!
//! ```rust
//! use crossword_engine::board::{Board, Verdict};
//! use crossword_engine::core::{Direction, Position};
//! use crossword_engine::ledger::ScoreLedger;
//!
//! let mut board = Board::default();
//! board.add_clue(1, "Capital of France", "PARIS", Position::new(0, 0), Direction::Across).unwrap();
//! board.place_word("PARIS", Position::new(0, 0), Direction::Across);
//!
//! assert_eq!(board.check_answer(1, "paris").unwrap(), Verdict::Correct);
//!
//! let mut ledger = ScoreLedger::new();
//! ledger.insert("ann", 10, 1);
//! ledger.insert("ben", -2, 0);
//! let top = ledger.traverse_descending().next().unwrap();
//! assert_eq!(top.name, "ann");
//! ```

// Core domain types
pub mod core;

// Grid and clue collection
pub mod board;

// Score-ordered leaderboard tree
pub mod ledger;

// Players and turn rules
pub mod session;

// Puzzle definitions
pub mod puzzles;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
