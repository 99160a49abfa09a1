//! Crossword Engine - CLI
//!
//! Multiplayer crossword game with TUI and console menu modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossword_engine::{
    commands::{Prompt, inspect_puzzle, players_from_names, prompt_players, run_simple},
    core::BoardConfig,
    output::{print_inspection, print_leaderboard},
    puzzles::{Puzzle, builtin, load_from_file},
    session::{Player, ScoringRules, Session},
};
use std::io::{self, IsTerminal};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "crossword_engine",
    about = "Turn-based multiplayer crossword puzzle game with a ranked leaderboard",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Puzzle: 'builtin' (default, 10 clues) or path to a puzzle file
    #[arg(short, long, global = true, default_value = "builtin")]
    puzzle: String,

    /// Player names, comma separated (prompted for when omitted)
    #[arg(short = 'n', long, global = true, value_delimiter = ',')]
    players: Vec<String>,

    /// Maximum number of clues the board accepts
    #[arg(long, global = true, default_value = "20")]
    max_clues: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (numbered console menu)
    Simple,

    /// Print a puzzle's grid and clue list
    Inspect {
        /// Fill in every answer
        #[arg(short, long)]
        reveal: bool,
    },
}

/// Load the puzzle selected with -p
fn load_puzzle(puzzle: &str, config: &BoardConfig) -> Result<Puzzle> {
    match puzzle {
        "builtin" => Ok(builtin()),
        path => load_from_file(path, config).with_context(|| format!("loading puzzle {path}")),
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = BoardConfig::default().with_max_clues(cli.max_clues);
    let puzzle = load_puzzle(&cli.puzzle, &config)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Inspect { reveal } => run_inspect_command(&puzzle, config, reveal),
        Commands::Simple => {
            let mut prompt = Prompt::stdin();
            let session = start_session(&puzzle, config, &cli.players, &mut prompt)?;
            run_simple_command(session, &mut prompt)
        }
        Commands::Play => {
            let mut prompt = Prompt::stdin();
            let session = start_session(&puzzle, config, &cli.players, &mut prompt)?;
            run_play_command(session)
        }
    }
}

fn start_session<R: io::BufRead>(
    puzzle: &Puzzle,
    config: BoardConfig,
    names: &[String],
    prompt: &mut Prompt<R>,
) -> Result<Session> {
    let players: Vec<Player> = if names.is_empty() {
        prompt_players(prompt)?
    } else {
        players_from_names(names)?
    };

    println!("\nSetting up crossword puzzle...");
    let board = puzzle.build_board(config)?;
    println!("Crossword ready!");

    Ok(Session::new(board, players, ScoringRules::default())?)
}

fn run_inspect_command(puzzle: &Puzzle, config: BoardConfig, reveal: bool) -> Result<()> {
    let result = inspect_puzzle(puzzle, config, reveal)?;
    print_inspection(&result);
    Ok(())
}

fn run_simple_command<R: io::BufRead>(mut session: Session, prompt: &mut Prompt<R>) -> Result<()> {
    run_simple(&mut session, prompt)
}

fn run_play_command(session: Session) -> Result<()> {
    use crossword_engine::interactive::{App, run_tui};

    let app = run_tui(App::new(session))?;

    let saved = app.session.saved_scores();
    if !saved.is_empty() {
        print_leaderboard("FINAL LEADERBOARD", saved);
    }
    Ok(())
}
