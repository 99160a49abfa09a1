//! Printing of boards, clue lists and score tables

use super::formatters::{BANNER_WIDTH, banner, clue_line, grid_header, player_line, score_line};
use crate::board::Board;
use crate::commands::InspectResult;
use crate::core::{Cell, Direction};
use crate::ledger::ScoreLedger;
use crate::session::Player;
use colored::Colorize;

/// Print the grid with row and column headers
pub fn print_grid(board: &Board) {
    let grid = board.grid();

    println!();
    println!("{}", grid_header(grid.size()).bright_black());
    for (row, cells) in grid.rows().enumerate() {
        let line: String = cells
            .iter()
            .map(|&cell| {
                let glyph = format!(" {} ", cell.glyph());
                match cell {
                    Cell::Blank => glyph.bright_black().to_string(),
                    Cell::Placeholder => glyph.yellow().to_string(),
                    Cell::Letter(_) => glyph.bright_green().bold().to_string(),
                }
            })
            .collect();
        println!("{}{line}", format!("{row:2} ").bright_black());
    }
    println!();
}

/// Print the clue list, across clues first
pub fn print_clues(board: &Board) {
    for direction in Direction::ALL {
        println!(
            "\n{}",
            format!("=== {} ===", direction.heading()).bright_cyan().bold()
        );
        for clue in board.clues_in(direction) {
            let line = clue_line(clue);
            if clue.is_solved() {
                println!("{}", line.green());
            } else {
                println!("{line}");
            }
        }
    }
    println!();
}

/// Print every player's current standing in roster order
pub fn print_scores(players: &[Player]) {
    println!("\n{}", "=== CURRENT SCORES ===".bright_cyan().bold());
    for player in players {
        println!("{}", player_line(player));
    }
    println!("{}", "=".repeat(33).cyan());
}

/// Print a ledger from highest to lowest score
pub fn print_leaderboard(title: &str, ledger: &ScoreLedger) {
    let [top, heading, bottom] = banner(title, BANNER_WIDTH);

    println!("\n{}", top.cyan());
    println!("{}", heading.bright_yellow().bold());
    println!("{}", bottom.cyan());

    if ledger.is_empty() {
        println!("No scores recorded yet!");
    } else {
        for (rank, record) in ledger.traverse_descending().enumerate() {
            let line = score_line(record);
            if rank == 0 {
                println!("{}", line.bright_green().bold());
            } else {
                println!("{line}");
            }
        }
    }
    println!("{}", "=".repeat(BANNER_WIDTH).cyan());
}

/// Print the result of inspecting a puzzle
pub fn print_inspection(result: &InspectResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} clues ({} across, {} down)",
        "PUZZLE:".bright_cyan().bold(),
        result.board.clues().len(),
        result.across,
        result.down
    );
    println!("{}", "═".repeat(60).cyan());

    print_grid(&result.board);
    print_clues(&result.board);

    if !result.duplicate_numbers.is_empty() {
        let numbers: Vec<String> = result
            .duplicate_numbers
            .iter()
            .map(ToString::to_string)
            .collect();
        println!(
            "{} duplicate clue numbers: {}",
            "⚠".yellow(),
            numbers.join(", ").yellow()
        );
    }
}
