//! Players taking part in a session

use crate::core::{MAX_PLAYER_NAME_LENGTH, MAX_PLAYERS, PlayerError, ScoreRecord};

/// A named player with a running score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    score: i32,
    words_correct: u32,
}

impl Player {
    /// Create a player with zero score
    ///
    /// # Errors
    /// Returns `PlayerError` if the name is empty, contains whitespace or is too long.
    pub fn new(name: impl Into<String>) -> Result<Self, PlayerError> {
        let name = name.into();

        if name.is_empty() {
            return Err(PlayerError::Empty);
        }
        if name.chars().any(char::is_whitespace) {
            return Err(PlayerError::Whitespace(name));
        }
        if name.chars().count() > MAX_PLAYER_NAME_LENGTH {
            return Err(PlayerError::TooLong(name));
        }

        Ok(Self {
            name,
            score: 0,
            words_correct: 0,
        })
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> i32 {
        self.score
    }

    #[inline]
    #[must_use]
    pub const fn words_correct(&self) -> u32 {
        self.words_correct
    }

    pub(crate) const fn award(&mut self, points: i32) {
        self.score += points;
        self.words_correct += 1;
    }

    pub(crate) const fn penalize(&mut self, points: i32) {
        self.score -= points;
    }

    /// Snapshot for the score ledger
    #[must_use]
    pub fn record(&self) -> ScoreRecord {
        ScoreRecord::new(self.name.clone(), self.score, self.words_correct)
    }
}

/// Build the player roster from a list of names
///
/// # Errors
/// Returns `PlayerError` if the list is empty, longer than [`MAX_PLAYERS`],
/// or contains an invalid name.
pub fn register_players<I, S>(names: I) -> Result<Vec<Player>, PlayerError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let players = names
        .into_iter()
        .map(|name| Player::new(name.as_ref().trim()))
        .collect::<Result<Vec<_>, _>>()?;

    if players.is_empty() {
        return Err(PlayerError::NoPlayers);
    }
    if players.len() > MAX_PLAYERS {
        return Err(PlayerError::TooMany(MAX_PLAYERS));
    }
    Ok(players)
}
