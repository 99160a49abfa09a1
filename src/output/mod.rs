//! Terminal output formatting
//!
//! Display utilities for the console front ends.

pub mod display;
pub mod formatters;

pub use display::{print_clues, print_grid, print_inspection, print_leaderboard, print_scores};
