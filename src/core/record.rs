//! Score ledger entries

/// A player's name, score and solved-word count as stored in the ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreRecord {
    pub name: String,
    pub score: i32,
    pub words_correct: u32,
}

impl ScoreRecord {
    pub fn new(name: impl Into<String>, score: i32, words_correct: u32) -> Self {
        Self {
            name: name.into(),
            score,
            words_correct,
        }
    }
}
