//! SENIPY games - pure brain-training mini-game logic.
//!
//! Every game in this crate is a self-contained state machine owning its
//! own random source. Nothing here sleeps or spawns: when a game wants
//! something to happen later (flip a mismatched pair back, advance to the
//! next question) it hands back a [`Deferred`] request and the host decides
//! how to schedule it.
//!
//! # Games
//!
//! - [`MemoryMatch`] - flip cards, find the eight pairs
//! - [`WordPuzzle`] - guess the word from a clue, with two hints
//! - [`NumberChallenge`] - 30 second arithmetic sprint
//! - [`PatternGame`] - fill the gap in a color, shape or number pattern
//! - [`TriviaQuiz`] - ten general-knowledge questions
//! - [`BrainTeasers`] - riddles with a single hint
//!
//! # Example
//!
//! ```
//! use senipy_games::WordPuzzle;
//!
//! let mut game = WordPuzzle::with_seed(7);
//! let word = game.puzzle().word;
//! let feedback = game.submit_answer(&word.to_lowercase()).expect("round is open");
//! assert!(feedback.is_correct());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod attempts;
mod brain_teasers;
mod deferred;
mod difficulty;
mod feedback;
mod memory;
mod number_challenge;
mod pattern;
mod picker;
mod trivia;
mod word_puzzle;

pub use attempts::{MAX_ATTEMPTS, RoundStatus, normalize};
pub use brain_teasers::{BRAIN_TEASERS, BrainTeaser, BrainTeasers, HINT_BONUS};
pub use deferred::{Deferred, Reaction, Scheduled};
pub use difficulty::Difficulty;
pub use feedback::Feedback;
pub use memory::{
    Card, CardId, FlipError, FlipOutcome, MATCH_POINTS, MemoryEvent, MemoryMatch, MemoryPhase,
    PairResolution, RESOLVE_DELAY, SYMBOLS,
};
pub use number_challenge::{
    ChallengeError, ChallengePhase, CORRECT_ADVANCE_DELAY, Expression, NumberChallenge,
    NumberEvent, Operator, Problem, ROUND_SECONDS, TICK_INTERVAL, WRONG_ADVANCE_DELAY,
};
pub use pattern::{
    COLORS, CORRECT_PATTERN_DELAY, MASK, OPTION_COUNT, Pattern, PatternEvent, PatternFamily,
    PatternGame, SHAPES, WRONG_PATTERN_DELAY,
};
pub use picker::{pick_excluding, pick_uniform};
pub use trivia::{
    ADVANCE_DELAY, QUESTIONS, QUESTIONS_PER_QUIZ, Question, SummaryTier, TriviaEvent, TriviaQuiz,
};
pub use word_puzzle::{MAX_HINTS, PUZZLES, Puzzle, WordPuzzle};
