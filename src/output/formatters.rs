//! Formatting utilities for terminal output

use crate::core::{Clue, ScoreRecord};
use crate::session::Player;

/// Width of the leaderboard banner
pub const BANNER_WIDTH: usize = 49;

/// Format a ledger entry as a fixed-width line
#[must_use]
pub fn score_line(record: &ScoreRecord) -> String {
    format_score(&record.name, record.score, record.words_correct)
}

/// Format a player's current standing as a fixed-width line
#[must_use]
pub fn player_line(player: &Player) -> String {
    format_score(player.name(), player.score(), player.words_correct())
}

fn format_score(name: &str, score: i32, words_correct: u32) -> String {
    format!("Player: {name:<15} | Score: {score:4} | Words Correct: {words_correct}")
}

/// Format a clue for listing, annotating solved clues
#[must_use]
pub fn clue_line(clue: &Clue) -> String {
    if clue.is_solved() {
        format!("{clue} [SOLVED]")
    } else {
        clue.to_string()
    }
}

/// Column index header for a grid of `size` columns
#[must_use]
pub fn grid_header(size: usize) -> String {
    let mut header = String::from("   ");
    for col in 0..size {
        header.push_str(&format!("{col:2} "));
    }
    header
}

/// Centre `title` between two rules of `=`
#[must_use]
pub fn banner(title: &str, width: usize) -> [String; 3] {
    let rule = "=".repeat(width);
    [rule.clone(), format!("{title:^width$}"), rule]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Direction, Position};

    #[test]
    fn score_line_is_aligned() {
        let line = score_line(&ScoreRecord::new("ann", 28, 3));
        assert_eq!(line, "Player: ann             | Score:   28 | Words Correct: 3");
    }

    #[test]
    fn score_line_negative() {
        let line = score_line(&ScoreRecord::new("bob", -4, 0));
        assert_eq!(line, "Player: bob             | Score:   -4 | Words Correct: 0");
    }

    #[test]
    fn player_line_matches_score_line() {
        let player = Player::new("cat").unwrap();
        assert_eq!(player_line(&player), score_line(&player.record()));
    }

    #[test]
    fn clue_line_annotates_solved() {
        let mut board = crate::board::Board::default();
        board
            .add_clue(9, "Hot beverage", "TEA", Position::new(2, 6), Direction::Down)
            .unwrap();
        assert_eq!(clue_line(board.find_clue(9).unwrap()), "9. Hot beverage");

        board.check_answer(9, "tea").unwrap();
        assert_eq!(
            clue_line(board.find_clue(9).unwrap()),
            "9. Hot beverage [SOLVED]"
        );
    }

    #[test]
    fn header_lists_columns() {
        assert_eq!(grid_header(3), "    0  1  2 ");
        assert_eq!(grid_header(0), "   ");
    }

    #[test]
    fn banner_is_centred() {
        let [top, title, bottom] = banner("TOP", 9);
        assert_eq!(top, "=========");
        assert_eq!(title, "   TOP   ");
        assert_eq!(bottom, top);
    }
}
