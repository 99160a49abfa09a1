//! Core domain types for the crossword engine
//!
//! This module contains the value types shared by the board, the score ledger
//! and the session layer. Nothing here performs I/O.

mod cell;
mod clue;
mod config;
mod error;
mod geometry;
mod record;

pub use cell::Cell;
pub use clue::Clue;
pub use config::{BoardConfig, MAX_PLAYERS, MAX_PLAYER_NAME_LENGTH};
pub use error::{BoardError, PlayerError, PuzzleError, TurnError};
pub use geometry::{Direction, Position};
pub use record::ScoreRecord;
