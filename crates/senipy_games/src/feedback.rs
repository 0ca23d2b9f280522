//! The one error taxonomy the games have: feedback shown to the player.
//!
//! Wrong answers, unparsable numbers and exhausted attempts are not errors
//! in the Rust sense. They become a [`Feedback`] value whose `Display`
//! output is the message the player sees.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// A message produced in response to player input.
#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum Feedback {
    /// Solved a free-text round (word puzzle, brain teaser).
    #[display("🎉 Correct! You earned {points} points!")]
    Earned {
        /// Points added to the session score.
        points: u32,
    },

    /// Correct answer in a scored quick-fire game (number challenge, trivia).
    #[display("🎉 Correct! +{points} points")]
    Scored {
        /// Points added to the session score.
        points: u32,
    },

    /// Correct pattern completion.
    #[display("🎉 Correct! Well done!")]
    WellDone,

    /// Wrong answer with attempts left.
    #[display("❌ Try again! {remaining} attempts remaining.")]
    TryAgain {
        /// Attempts the player still has this round.
        remaining: u32,
    },

    /// Attempts exhausted; the answer is revealed and the round ends.
    #[display("❌ The answer was: {answer}")]
    AnswerRevealed {
        /// The expected answer.
        answer: String,
    },

    /// Wrong answer in a single-shot round; the answer is revealed.
    #[display("❌ Wrong! The correct answer was: {answer}")]
    Wrong {
        /// The expected answer.
        answer: String,
    },

    /// A hint was consumed.
    #[display("💡 Hint: {_0}")]
    Hint(String),

    /// The input could not be parsed as an integer.
    #[display("Please enter a valid number")]
    InvalidNumber,

    /// The input was empty after trimming.
    #[display("Please enter an answer")]
    EmptyAnswer,

    /// The countdown reached zero.
    #[display("⏰ Time's up! Final score: {score}")]
    TimeUp {
        /// Final score of the timed round.
        score: u32,
    },
}

impl Feedback {
    /// Returns true for the feedback variants that mean "that was right".
    pub fn is_correct(&self) -> bool {
        matches!(
            self,
            Feedback::Earned { .. } | Feedback::Scored { .. } | Feedback::WellDone
        )
    }

    /// Returns the points awarded, if this feedback carries any.
    pub fn points(&self) -> Option<u32> {
        match self {
            Feedback::Earned { points } | Feedback::Scored { points } => Some(*points),
            _ => None,
        }
    }
}
