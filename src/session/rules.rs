//! Scoring rules applied by the session

use crate::board::Verdict;

/// Points awarded for a correct answer and deducted for a wrong one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringRules {
    pub correct_points: i32,
    pub wrong_penalty: i32,
}

impl ScoringRules {
    /// Score change for a verdict
    #[must_use]
    pub const fn delta(&self, verdict: Verdict) -> i32 {
        match verdict {
            Verdict::Correct => self.correct_points,
            Verdict::Incorrect => -self.wrong_penalty,
        }
    }
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            correct_points: 10,
            wrong_penalty: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_deltas() {
        let rules = ScoringRules::default();
        assert_eq!(rules.delta(Verdict::Correct), 10);
        assert_eq!(rules.delta(Verdict::Incorrect), -2);
    }
}
