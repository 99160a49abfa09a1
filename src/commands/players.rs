//! Player registration

use super::prompt::Prompt;
use crate::core::MAX_PLAYERS;
use crate::session::{Player, register_players};
use anyhow::Result;
use colored::Colorize;
use std::io::BufRead;

/// Build the roster from names given on the command line
///
/// # Errors
///
/// Returns an error if a name is invalid or the count is out of range.
pub fn players_from_names(names: &[String]) -> Result<Vec<Player>> {
    Ok(register_players(names)?)
}

/// Ask for the number of players and each player's name
///
/// # Errors
///
/// Returns an error if the input is closed before the roster is complete.
pub fn prompt_players<R: BufRead>(prompt: &mut Prompt<R>) -> Result<Vec<Player>> {
    let count = prompt.number(
        &format!("Enter number of players (1-{MAX_PLAYERS})"),
        1..=MAX_PLAYERS,
    )?;

    let mut players = Vec::with_capacity(count);
    for i in 1..=count {
        let player = loop {
            let name = prompt.line(&format!("Enter name for Player {i}"))?;
            match Player::new(name) {
                Ok(player) => break player,
                Err(e) => println!("{}", e.to_string().red()),
            }
        };
        players.push(player);
    }

    println!("\n{}", "=== Players Registered ===".bright_cyan().bold());
    for (i, player) in players.iter().enumerate() {
        println!("{}. {}", i + 1, player.name());
    }
    Ok(players)
}
