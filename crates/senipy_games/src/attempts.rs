//! Attempt tracking shared by the free-text riddle games.

use serde::{Deserialize, Serialize};

/// Attempts allowed per round before the answer is revealed.
pub const MAX_ATTEMPTS: u32 = 3;

/// Normalizes free-text input for comparison: trimmed and lowercased.
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Where a free-text round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RoundStatus {
    /// Accepting answers.
    #[default]
    Open,
    /// Answered correctly.
    Solved,
    /// Attempts exhausted, answer shown.
    Revealed,
}

impl RoundStatus {
    /// Returns true once the round no longer accepts answers.
    pub fn is_over(self) -> bool {
        !matches!(self, RoundStatus::Open)
    }
}
