//! Word Puzzle: guess the word from its clue.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::attempts::{MAX_ATTEMPTS, RoundStatus, normalize};
use crate::{Feedback, pick_uniform};

/// Hints available per round.
pub const MAX_HINTS: u32 = 2;

/// Points for a first-try answer with no hints.
const FULL_POINTS: u32 = 10;

/// A word with its clue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Puzzle {
    /// The answer, uppercase.
    pub word: &'static str,
    /// Clue shown to the player.
    pub clue: &'static str,
    /// Topic shown above the clue.
    pub category: &'static str,
}

/// The fixed puzzle pool.
pub static PUZZLES: [Puzzle; 8] = [
    Puzzle { word: "GARDEN", clue: "A place where flowers and vegetables grow", category: "Nature" },
    Puzzle { word: "FAMILY", clue: "People related to you by blood or marriage", category: "Relationships" },
    Puzzle { word: "MEMORY", clue: "The ability to remember things from the past", category: "Mind" },
    Puzzle { word: "SUNSET", clue: "When the sun goes down in the evening", category: "Nature" },
    Puzzle { word: "WISDOM", clue: "Knowledge gained through experience", category: "Mind" },
    Puzzle { word: "FRIEND", clue: "Someone you like and trust", category: "Relationships" },
    Puzzle { word: "RECIPE", clue: "Instructions for cooking a dish", category: "Food" },
    Puzzle { word: "TRAVEL", clue: "Going from one place to another", category: "Activity" },
];

/// Word Puzzle game state.
#[derive(Debug, Clone)]
pub struct WordPuzzle {
    rng: StdRng,
    current: usize,
    input: String,
    attempts: u32,
    hints_used: u32,
    score: u32,
    status: RoundStatus,
    feedback: Option<Feedback>,
}

impl WordPuzzle {
    /// Creates a game with an OS-seeded puzzle picker.
    #[instrument]
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Creates a game with a deterministic puzzle picker.
    #[instrument]
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(mut rng: StdRng) -> Self {
        let current = pick_uniform(&mut rng, PUZZLES.len());
        Self {
            rng,
            current,
            input: String::new(),
            attempts: 0,
            hints_used: 0,
            score: 0,
            status: RoundStatus::Open,
            feedback: None,
        }
    }

    /// Draws a new puzzle and resets the round. The session score is kept.
    #[instrument(skip(self))]
    pub fn next_round(&mut self) {
        self.current = pick_uniform(&mut self.rng, PUZZLES.len());
        self.input.clear();
        self.attempts = 0;
        self.hints_used = 0;
        self.status = RoundStatus::Open;
        self.feedback = None;
        debug!(category = self.puzzle().category, "New word puzzle");
    }

    /// The puzzle being played.
    pub fn puzzle(&self) -> &Puzzle {
        &PUZZLES[self.current]
    }

    /// The player's typed answer so far.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Attempts used this round.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Hints consumed this round.
    pub fn hints_used(&self) -> u32 {
        self.hints_used
    }

    /// Hints still available this round.
    pub fn hints_left(&self) -> u32 {
        MAX_HINTS - self.hints_used
    }

    /// Cumulative session score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Round status.
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    /// Most recent feedback, if any.
    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    /// Appends a character, capped at the word's length.
    pub fn type_char(&mut self, c: char) {
        if self.status.is_over() || self.input.chars().count() >= self.puzzle().word.len() {
            return;
        }
        self.input.push(c);
    }

    /// Removes the last typed character.
    pub fn backspace(&mut self) {
        self.input.pop();
    }

    /// Replaces the typed answer. Surrounding whitespace is dropped before
    /// truncating to the word's length.
    pub fn set_input(&mut self, text: &str) {
        let max = self.puzzle().word.len();
        self.input = text.trim().chars().take(max).collect();
    }

    /// Convenience: sets the input and submits it.
    pub fn submit_answer(&mut self, answer: &str) -> Option<Feedback> {
        self.set_input(answer);
        self.submit()
    }

    /// Checks the typed answer.
    ///
    /// Returns `None` once the round is over. Blank input is rejected
    /// without consuming an attempt.
    #[instrument(skip(self), fields(attempts = self.attempts))]
    pub fn submit(&mut self) -> Option<Feedback> {
        if self.status.is_over() {
            return None;
        }
        let guess = normalize(&self.input);
        if guess.is_empty() {
            return Some(self.record(Feedback::EmptyAnswer));
        }

        let previous_attempts = self.attempts;
        self.attempts += 1;
        let word = self.puzzle().word;

        let feedback = if guess == word.to_lowercase() {
            let points = FULL_POINTS
                .saturating_sub(previous_attempts + self.hints_used)
                .max(1);
            self.score += points;
            self.status = RoundStatus::Solved;
            info!(word, points, score = self.score, "Word puzzle solved");
            Feedback::Earned { points }
        } else if self.attempts >= MAX_ATTEMPTS {
            self.status = RoundStatus::Revealed;
            info!(word, "Word puzzle attempts exhausted");
            Feedback::AnswerRevealed {
                answer: word.to_string(),
            }
        } else {
            Feedback::TryAgain {
                remaining: MAX_ATTEMPTS - self.attempts,
            }
        };
        Some(self.record(feedback))
    }

    /// Consumes a hint.
    ///
    /// The first hint gives the length and first letter, the second the
    /// vowels. Returns `None` when no hints remain or the round is over.
    #[instrument(skip(self), fields(hints_used = self.hints_used))]
    pub fn hint(&mut self) -> Option<Feedback> {
        if self.status.is_over() || self.hints_used >= MAX_HINTS {
            return None;
        }
        let word = self.puzzle().word;
        let text = if self.hints_used == 0 {
            let first = word.chars().next().unwrap_or_default();
            format!("The word has {} letters and starts with \"{}\"", word.len(), first)
        } else {
            let vowels: Vec<String> = word
                .chars()
                .filter(|c| "AEIOU".contains(*c))
                .map(String::from)
                .collect();
            format!("The word contains these vowels: {}", vowels.join(", "))
        };
        self.hints_used += 1;
        Some(self.record(Feedback::Hint(text)))
    }

    fn record(&mut self, feedback: Feedback) -> Feedback {
        self.feedback = Some(feedback.clone());
        feedback
    }
}

impl Default for WordPuzzle {
    fn default() -> Self {
        Self::new()
    }
}
