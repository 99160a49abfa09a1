//! TUI rendering with ratatui
//!
//! Grid, clue list and leaderboard panels for the crossword session.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Cell, Direction};
use crate::ledger::ScoreLedger;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(14),    // Main content
            Constraint::Length(3),  // Input area
            Constraint::Length(1),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(LayoutDirection::Horizontal)
        .constraints([
            Constraint::Length(36),     // Grid
            Constraint::Percentage(40), // Clues
            Constraint::Min(30),        // Scores and messages
        ])
        .split(chunks[1]);

    render_grid(f, app, main_chunks[0]);
    render_clues(f, app, main_chunks[1]);
    render_side_panel(f, app, main_chunks[2]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🧩 CROSSWORD PUZZLE - Interactive Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn cell_span(cell: Cell) -> Span<'static> {
    let style = match cell {
        Cell::Blank => Style::default().fg(Color::DarkGray),
        Cell::Placeholder => Style::default().fg(Color::Yellow),
        Cell::Letter(_) => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    };
    Span::styled(format!(" {} ", cell.glyph()), style)
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let grid = app.session.board().grid();
    let index_style = Style::default().fg(Color::DarkGray);

    let header: String = (0..grid.size()).map(|col| format!("{col:2} ")).collect();
    let mut lines = vec![Line::from(Span::styled(format!("   {header}"), index_style))];

    for (row, cells) in grid.rows().enumerate() {
        let mut spans = vec![Span::styled(format!("{row:2} "), index_style)];
        spans.extend(cells.iter().map(|&cell| cell_span(cell)));
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Grid ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_clues(f: &mut Frame, app: &App, area: Rect) {
    let board = app.session.board();
    let mut lines = Vec::new();

    for direction in Direction::ALL {
        if direction == Direction::Down {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(
            direction.heading(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));

        for clue in board.clues_in(direction) {
            let line = if clue.is_solved() {
                Line::from(vec![
                    Span::styled("✓ ", Style::default().fg(Color::Green)),
                    Span::styled(clue.to_string(), Style::default().fg(Color::DarkGray)),
                    Span::styled(
                        format!(" ({})", clue.answer()),
                        Style::default().fg(Color::Green),
                    ),
                ])
            } else {
                Line::from(vec![
                    Span::raw("  "),
                    Span::raw(clue.to_string()),
                    Span::styled(
                        format!(" ({})", clue.answer_len()),
                        Style::default().fg(Color::DarkGray),
                    ),
                ])
            };
            lines.push(line);
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Clues ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([
            Constraint::Percentage(55), // Leaderboard
            Constraint::Percentage(45), // Messages
        ])
        .split(area);

    if app.input_mode == InputMode::Finished {
        render_leaderboard(f, " Final Leaderboard ", app.session.saved_scores(), chunks[0]);
    } else {
        render_leaderboard(f, " Leaderboard ", &app.session.leaderboard(), chunks[0]);
    }
    render_messages(f, app, chunks[1]);
}

fn render_leaderboard(f: &mut Frame, title: &str, ledger: &ScoreLedger, area: Rect) {
    let items: Vec<ListItem> = if ledger.is_empty() {
        vec![ListItem::new("No scores recorded yet!")]
    } else {
        ledger
            .traverse_descending()
            .enumerate()
            .map(|(rank, record)| {
                let style = if rank == 0 {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(format!(
                    "{:>2}. {:<12} {:>5}  ({} words)",
                    rank + 1,
                    record.name,
                    record.score,
                    record.words_correct
                ))
                .style(style)
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .title(title.to_string())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.input_mode {
        InputMode::Answer => (
            " Answer: <clue> <player#> <answer> | TAB delete clue | ESC save & finish ",
            Color::Yellow,
        ),
        InputMode::DeleteClue => (" Admin: clue number to delete | ESC cancel ", Color::Red),
        InputMode::Finished => (" 🎉 GAME OVER 🎉 | Press 'q' or Enter to exit ", Color::Green),
    };

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let board = app.session.board();
    let players: Vec<String> = app
        .session
        .players()
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{}:{}", i + 1, p.name()))
        .collect();

    let status = format!(
        "Unsolved: {}/{} | Players: {} | Ctrl-C: quit",
        board.unsolved_count(),
        board.clues().len(),
        players.join(" ")
    );
    let paragraph = Paragraph::new(status)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(paragraph, area);
}
