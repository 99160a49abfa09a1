//! Simple interactive CLI mode
//!
//! Numbered menu on standard input, one action per choice.

use super::prompt::Prompt;
use crate::board::Verdict;
use crate::output::{print_clues, print_grid, print_leaderboard, print_scores};
use crate::session::Session;
use anyhow::Result;
use colored::Colorize;
use std::io::BufRead;

/// Highest clue number accepted at the prompt
const MAX_CLUE_NUMBER: usize = 100;

/// Actions offered by the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    DisplayGrid,
    DisplayClues,
    AnswerClue,
    CurrentScores,
    Leaderboard,
    DeleteClue,
    SaveAndExit,
}

impl MenuChoice {
    pub const ALL: [Self; 7] = [
        Self::DisplayGrid,
        Self::DisplayClues,
        Self::AnswerClue,
        Self::CurrentScores,
        Self::Leaderboard,
        Self::DeleteClue,
        Self::SaveAndExit,
    ];

    /// Choice for a 1-based menu number
    #[must_use]
    pub fn from_number(number: usize) -> Option<Self> {
        number.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::DisplayGrid => "Display Grid",
            Self::DisplayClues => "Display Clues",
            Self::AnswerClue => "Answer a Clue",
            Self::CurrentScores => "View Current Scores",
            Self::Leaderboard => "View Leaderboard",
            Self::DeleteClue => "Delete a Clue (Admin)",
            Self::SaveAndExit => "Save and Exit",
        }
    }
}

/// Run the menu loop until the players save and exit
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or the input
/// is closed before the session ends.
pub fn run_simple<R: BufRead>(session: &mut Session, prompt: &mut Prompt<R>) -> Result<()> {
    println!("\n╔═══════════════════════════════════════════════╗");
    println!("║            CROSSWORD PUZZLE GAME              ║");
    println!("╚═══════════════════════════════════════════════╝");

    loop {
        println!("\n{}", "=".repeat(33).cyan());
        for (i, choice) in MenuChoice::ALL.iter().enumerate() {
            println!("{}. {}", i + 1, choice.label());
        }
        println!("{}", "=".repeat(33).cyan());

        let number = prompt.number("Enter choice", 1..=MenuChoice::ALL.len())?;
        let Some(choice) = MenuChoice::from_number(number) else {
            continue;
        };

        match choice {
            MenuChoice::DisplayGrid => print_grid(session.board()),
            MenuChoice::DisplayClues => print_clues(session.board()),
            MenuChoice::AnswerClue => answer_clue(session, prompt)?,
            MenuChoice::CurrentScores => print_scores(session.players()),
            MenuChoice::Leaderboard => print_leaderboard("LEADERBOARD", &session.leaderboard()),
            MenuChoice::DeleteClue => delete_clue(session, prompt)?,
            MenuChoice::SaveAndExit => {
                println!("\nSaving final scores...");
                let saved = session.save_final_scores();
                print_leaderboard("FINAL LEADERBOARD", saved);
                println!("\n👋 Thank you for playing!\n");
                return Ok(());
            }
        }
    }
}

fn answer_clue<R: BufRead>(session: &mut Session, prompt: &mut Prompt<R>) -> Result<()> {
    print_clues(session.board());
    let number = prompt.number("Enter clue number to answer", 1..=MAX_CLUE_NUMBER)? as u32;

    match session.board().find_clue(number) {
        None => {
            println!("{}", "Invalid clue number!".red());
            return Ok(());
        }
        Some(clue) if clue.is_solved() => {
            println!("{}", "This clue is already solved!".yellow());
            return Ok(());
        }
        Some(_) => {}
    }

    println!("\n{}", "=== Who is answering? ===".bright_cyan().bold());
    for (i, player) in session.players().iter().enumerate() {
        println!(
            "{}. {} (Score: {}, Words: {})",
            i + 1,
            player.name(),
            player.score(),
            player.words_correct()
        );
    }
    let player_count = session.players().len();
    let player_number = prompt.number(
        &format!("Enter player number (1-{player_count})"),
        1..=player_count,
    )?;

    let name = session.players()[player_number - 1].name().to_string();
    let answer = prompt.non_empty(&format!("\n{name}, enter your answer"))?;

    match session.answer(number, player_number, &answer) {
        Ok(outcome) if outcome.verdict == Verdict::Correct => println!(
            "\n{}",
            format!("*** CORRECT! Well done, {}! ***", outcome.player_name)
                .bright_green()
                .bold()
        ),
        Ok(outcome) => println!(
            "\n{}",
            format!(
                "*** WRONG! Better luck next time, {}. ***",
                outcome.player_name
            )
            .red()
            .bold()
        ),
        Err(e) => println!("{}", e.to_string().red()),
    }
    Ok(())
}

fn delete_clue<R: BufRead>(session: &mut Session, prompt: &mut Prompt<R>) -> Result<()> {
    print_clues(session.board());
    let number = prompt.number("Enter clue number to delete", 1..=MAX_CLUE_NUMBER)? as u32;

    match session.delete_clue(number) {
        Ok(_) => println!("{}", format!("Clue {number} deleted successfully!").green()),
        Err(e) => println!("{}", e.to_string().red()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BoardConfig;
    use crate::puzzles::builtin;
    use crate::session::{ScoringRules, register_players};
    use std::io::Cursor;

    fn session() -> Session {
        let board = builtin().build_board(BoardConfig::default()).unwrap();
        let players = register_players(["ann", "ben"]).unwrap();
        Session::new(board, players, ScoringRules::default()).unwrap()
    }

    #[test]
    fn menu_numbers() {
        assert_eq!(MenuChoice::from_number(1), Some(MenuChoice::DisplayGrid));
        assert_eq!(MenuChoice::from_number(7), Some(MenuChoice::SaveAndExit));
        assert_eq!(MenuChoice::from_number(0), None);
        assert_eq!(MenuChoice::from_number(8), None);
    }

    #[test]
    fn scripted_game() {
        let mut session = session();
        // ann answers clue 1 correctly, ben misses clue 3, clue 10 is deleted, then exit.
        let script = "3\n1\n1\nparis\n3\n3\n2\ncat\n6\n10\n5\n7\n";
        let mut prompt = Prompt::new(Cursor::new(script));

        run_simple(&mut session, &mut prompt).unwrap();

        assert_eq!(session.players()[0].score(), 10);
        assert_eq!(session.players()[1].score(), -2);
        assert!(session.board().find_clue(1).unwrap().is_solved());
        assert!(session.board().find_clue(10).is_none());
        assert_eq!(session.saved_scores().len(), 2);
    }

    #[test]
    fn solved_clue_not_reanswered() {
        let mut session = session();
        let script = "3\n4\n2\nice\n3\n4\n7\n";
        let mut prompt = Prompt::new(Cursor::new(script));

        run_simple(&mut session, &mut prompt).unwrap();

        assert_eq!(session.players()[1].score(), 10);
        assert_eq!(session.players()[1].words_correct(), 1);
    }

    #[test]
    fn closed_input_ends_with_error() {
        let mut session = session();
        let mut prompt = Prompt::new(Cursor::new("1\n"));
        assert!(run_simple(&mut session, &mut prompt).is_err());
        assert!(session.saved_scores().is_empty());
    }
}
