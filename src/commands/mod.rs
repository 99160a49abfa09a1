//! Command implementations

pub mod inspect;
pub mod players;
pub mod prompt;
pub mod simple;

pub use inspect::{InspectResult, inspect_puzzle};
pub use players::{players_from_names, prompt_players};
pub use prompt::Prompt;
pub use simple::{MenuChoice, run_simple};
