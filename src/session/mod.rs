//! Game session
//!
//! Ties a [`Board`] to a roster of [`Player`]s and applies the turn rules:
//! guesses against solved clues are refused before the board sees them, a
//! correct answer earns points and a solved word, a wrong one costs points.
//! Leaderboards are built from the current player records on demand.

mod player;
mod rules;

pub use player::{Player, register_players};
pub use rules::ScoringRules;

use crate::board::{Board, Verdict};
use crate::core::{BoardError, Clue, MAX_PLAYERS, PlayerError, TurnError};
use crate::ledger::ScoreLedger;
use tracing::{debug, info};

/// Result of one answered turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    pub verdict: Verdict,
    pub clue_number: u32,
    pub player_name: String,
    /// Points gained (positive) or lost (negative)
    pub delta: i32,
    /// Player's score after the turn
    pub score: i32,
}

/// One play session: the board, the players and the saved final scores
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    players: Vec<Player>,
    rules: ScoringRules,
    saved: ScoreLedger,
}

impl Session {
    /// Start a session
    ///
    /// # Errors
    /// Returns `PlayerError` if there are no players or more than [`MAX_PLAYERS`].
    pub fn new(board: Board, players: Vec<Player>, rules: ScoringRules) -> Result<Self, PlayerError> {
        if players.is_empty() {
            return Err(PlayerError::NoPlayers);
        }
        if players.len() > MAX_PLAYERS {
            return Err(PlayerError::TooMany(MAX_PLAYERS));
        }
        info!(players = players.len(), clues = board.clues().len(), "session started");
        Ok(Self {
            board,
            players,
            rules,
            saved: ScoreLedger::new(),
        })
    }

    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[inline]
    #[must_use]
    pub const fn rules(&self) -> &ScoringRules {
        &self.rules
    }

    /// Answer clue `clue_number` on behalf of player `player_number` (1-based)
    ///
    /// # Errors
    /// Returns `TurnError` when the answer is blank, the player or clue does not
    /// exist, or the clue is already solved. Nothing changes in that case.
    ///
    /// # Examples
    /// ```
    /// use crossword_engine::board::{Board, Verdict};
    /// use crossword_engine::core::{Direction, Position};
    /// use crossword_engine::session::{ScoringRules, Session, register_players};
    ///
    /// let mut board = Board::default();
    /// board.add_clue(3, "Man's best friend", "DOG", Position::new(4, 2), Direction::Across).unwrap();
    /// board.place_word("DOG", Position::new(4, 2), Direction::Across);
    ///
    /// let players = register_players(["ann"]).unwrap();
    /// let mut session = Session::new(board, players, ScoringRules::default()).unwrap();
    ///
    /// let outcome = session.answer(3, 1, "dog").unwrap();
    /// assert_eq!(outcome.verdict, Verdict::Correct);
    /// assert_eq!(outcome.score, 10);
    /// ```
    pub fn answer(
        &mut self,
        clue_number: u32,
        player_number: usize,
        raw_answer: &str,
    ) -> Result<TurnOutcome, TurnError> {
        let guess = raw_answer.trim();
        if guess.is_empty() {
            return Err(TurnError::EmptyAnswer);
        }

        let player_index = player_number
            .checked_sub(1)
            .filter(|&i| i < self.players.len())
            .ok_or(TurnError::UnknownPlayer(player_number))?;

        let clue = self
            .board
            .find_clue(clue_number)
            .ok_or(TurnError::ClueNotFound(clue_number))?;
        if clue.is_solved() {
            return Err(TurnError::AlreadySolved(clue_number));
        }

        let verdict = self
            .board
            .check_answer(clue_number, guess)
            .map_err(|_| TurnError::ClueNotFound(clue_number))?;

        let delta = self.rules.delta(verdict);
        let player = &mut self.players[player_index];
        match verdict {
            Verdict::Correct => player.award(delta),
            Verdict::Incorrect => player.penalize(-delta),
        }
        debug!(clue_number, player = player.name(), ?verdict, score = player.score(), "turn played");

        Ok(TurnOutcome {
            verdict,
            clue_number,
            player_name: player.name().to_string(),
            delta,
            score: player.score(),
        })
    }

    /// Admin removal of a clue; player scores are not touched
    ///
    /// # Errors
    /// Returns `BoardError::NotFound` when no clue has that number.
    pub fn delete_clue(&mut self, number: u32) -> Result<Clue, BoardError> {
        self.board.delete_clue(number)
    }

    /// Whether every remaining clue is solved
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.board.unsolved_count() == 0
    }

    /// Ledger built from the current player records
    #[must_use]
    pub fn leaderboard(&self) -> ScoreLedger {
        self.players.iter().map(Player::record).collect()
    }

    /// Record every player's current score in the session's saved ledger
    ///
    /// Each call replaces the previous save, so the ledger holds one entry
    /// per player.
    pub fn save_final_scores(&mut self) -> &ScoreLedger {
        self.saved = self.players.iter().map(Player::record).collect();
        info!(entries = self.saved.len(), "final scores saved");
        &self.saved
    }

    /// Scores recorded so far by [`Session::save_final_scores`]
    #[must_use]
    pub const fn saved_scores(&self) -> &ScoreLedger {
        &self.saved
    }
}
