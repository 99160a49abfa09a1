//! TUI application state and logic

use crate::board::Verdict;
use crate::session::Session;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub session: Session,
    pub input_buffer: String,
    pub input_mode: InputMode,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// `<clue> <player#> <answer>`
    Answer,
    /// `<clue>` to remove
    DeleteClue,
    /// Final scores saved, waiting to exit
    Finished,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// A parsed answer line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnInput {
    pub clue_number: u32,
    pub player_number: usize,
    pub answer: String,
}

/// Parse `<clue> <player#> <answer>`
///
/// # Errors
///
/// Returns a message describing the first missing or malformed field.
pub fn parse_turn(input: &str) -> Result<TurnInput, String> {
    let mut parts = input.split_whitespace();

    let clue_number = parts
        .next()
        .ok_or("Enter: <clue> <player#> <answer>")?
        .parse::<u32>()
        .map_err(|_| "Clue number must be a number".to_string())?;
    let player_number = parts
        .next()
        .ok_or("Missing player number")?
        .parse::<usize>()
        .map_err(|_| "Player number must be a number".to_string())?;
    let answer = parts.next().ok_or("Missing answer")?.to_string();

    if parts.next().is_some() {
        return Err("Answer must be a single word".to_string());
    }

    Ok(TurnInput {
        clue_number,
        player_number,
        answer,
    })
}

impl App {
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self {
            session,
            input_buffer: String::new(),
            input_mode: InputMode::Answer,
            messages: vec![
                Message {
                    text: "Welcome! Type: <clue> <player#> <answer>, e.g. '1 1 paris'".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "TAB: delete a clue | ESC: save and finish".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            should_quit: false,
        }
    }

    /// Submit the input buffer in the current mode
    pub fn submit(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);
        match self.input_mode {
            InputMode::Answer => self.handle_answer(&input),
            InputMode::DeleteClue => self.handle_delete(&input),
            InputMode::Finished => self.should_quit = true,
        }
    }

    pub fn handle_answer(&mut self, input: &str) {
        let turn = match parse_turn(input) {
            Ok(turn) => turn,
            Err(e) => {
                self.add_message(&e, MessageStyle::Error);
                return;
            }
        };

        match self
            .session
            .answer(turn.clue_number, turn.player_number, &turn.answer)
        {
            Ok(outcome) if outcome.verdict == Verdict::Correct => {
                self.add_message(
                    &format!(
                        "✅ CORRECT! Well done, {}! (+{}, now {})",
                        outcome.player_name, outcome.delta, outcome.score
                    ),
                    MessageStyle::Success,
                );
                if self.session.is_complete() {
                    self.add_message(
                        "🎉 Every clue is solved! Press ESC to save final scores.",
                        MessageStyle::Success,
                    );
                }
            }
            Ok(outcome) => self.add_message(
                &format!(
                    "❌ WRONG! Better luck next time, {}. ({}, now {})",
                    outcome.player_name, outcome.delta, outcome.score
                ),
                MessageStyle::Error,
            ),
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn handle_delete(&mut self, input: &str) {
        let Ok(number) = input.trim().parse::<u32>() else {
            self.add_message("Clue number must be a number", MessageStyle::Error);
            return;
        };

        match self.session.delete_clue(number) {
            Ok(_) => {
                self.add_message(
                    &format!("Clue {number} deleted successfully!"),
                    MessageStyle::Success,
                );
                self.input_mode = InputMode::Answer;
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn toggle_delete_mode(&mut self) {
        self.input_buffer.clear();
        self.input_mode = match self.input_mode {
            InputMode::Answer => {
                self.add_message("Admin: enter clue number to delete", MessageStyle::Info);
                InputMode::DeleteClue
            }
            InputMode::DeleteClue => InputMode::Answer,
            InputMode::Finished => InputMode::Finished,
        };
    }

    /// Save final scores and switch to the final leaderboard
    pub fn finish(&mut self) {
        if self.input_mode == InputMode::Finished {
            return;
        }
        self.session.save_final_scores();
        self.input_buffer.clear();
        self.input_mode = InputMode::Finished;
        self.add_message("Final scores saved. Thank you for playing!", MessageStyle::Success);
        self.add_message("Press 'q' or Enter to exit.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 6 messages
        if self.messages.len() > 6 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// Returns the app once the user exits so the caller can report final scores.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<App> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<App> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            } else {
                match app.input_mode {
                    InputMode::Finished => match key.code {
                        KeyCode::Char('q') | KeyCode::Enter | KeyCode::Esc => {
                            app.should_quit = true;
                        }
                        _ => {}
                    },
                    InputMode::Answer => match key.code {
                        KeyCode::Esc => app.finish(),
                        KeyCode::Tab => app.toggle_delete_mode(),
                        KeyCode::Char(c) => app.input_buffer.push(c),
                        KeyCode::Backspace => {
                            app.input_buffer.pop();
                        }
                        KeyCode::Enter => app.submit(),
                        _ => {}
                    },
                    InputMode::DeleteClue => match key.code {
                        KeyCode::Esc | KeyCode::Tab => app.toggle_delete_mode(),
                        KeyCode::Char(c) if c.is_ascii_digit() => app.input_buffer.push(c),
                        KeyCode::Backspace => {
                            app.input_buffer.pop();
                        }
                        KeyCode::Enter => app.submit(),
                        _ => {}
                    },
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BoardConfig;
    use crate::puzzles::builtin;
    use crate::session::{ScoringRules, register_players};

    fn app() -> App {
        let board = builtin().build_board(BoardConfig::default()).unwrap();
        let players = register_players(["ann", "ben"]).unwrap();
        App::new(Session::new(board, players, ScoringRules::default()).unwrap())
    }

    fn last_style(app: &App) -> MessageStyle {
        app.messages.last().unwrap().style
    }

    #[test]
    fn parse_turn_fields() {
        assert_eq!(
            parse_turn(" 3  2 Dog ").unwrap(),
            TurnInput {
                clue_number: 3,
                player_number: 2,
                answer: "Dog".to_string(),
            }
        );
        assert!(parse_turn("").is_err());
        assert!(parse_turn("x 1 dog").is_err());
        assert!(parse_turn("3").is_err());
        assert!(parse_turn("3 one dog").is_err());
        assert!(parse_turn("3 1").is_err());
        assert!(parse_turn("3 1 hot dog").is_err());
    }

    #[test]
    fn correct_answer_through_input() {
        let mut app = app();
        app.input_buffer = "1 2 paris".to_string();
        app.submit();

        assert!(app.input_buffer.is_empty());
        assert_eq!(app.session.players()[1].score(), 10);
        assert_eq!(last_style(&app), MessageStyle::Success);
    }

    #[test]
    fn wrong_and_invalid_answers() {
        let mut app = app();
        app.handle_answer("2 1 saturn");
        assert_eq!(app.session.players()[0].score(), -2);
        assert_eq!(last_style(&app), MessageStyle::Error);

        app.handle_answer("42 1 saturn");
        assert_eq!(app.session.players()[0].score(), -2);
        assert!(app.messages.last().unwrap().text.contains("42"));
    }

    #[test]
    fn delete_mode_round_trip() {
        let mut app = app();
        app.toggle_delete_mode();
        assert_eq!(app.input_mode, InputMode::DeleteClue);

        app.input_buffer = "7".to_string();
        app.submit();

        assert!(app.session.board().find_clue(7).is_none());
        assert_eq!(app.input_mode, InputMode::Answer);
    }

    #[test]
    fn delete_missing_clue_stays_in_mode() {
        let mut app = app();
        app.toggle_delete_mode();
        app.handle_delete("77");
        assert_eq!(app.input_mode, InputMode::DeleteClue);
        assert_eq!(app.session.board().clues().len(), 10);
        assert_eq!(last_style(&app), MessageStyle::Error);
    }

    #[test]
    fn finish_saves_once() {
        let mut app = app();
        app.finish();
        app.finish();
        assert_eq!(app.input_mode, InputMode::Finished);
        assert_eq!(app.session.saved_scores().len(), 2);

        app.submit();
        assert!(app.should_quit);
    }

    #[test]
    fn message_history_is_bounded() {
        let mut app = app();
        for i in 0..20 {
            app.add_message(&format!("m{i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 6);
        assert_eq!(app.messages.last().unwrap().text, "m19");
    }
}
