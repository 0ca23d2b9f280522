//! Brain Teasers: riddles answered in free text.
//!
//! Answers are accepted if the normalized guess equals or merely contains
//! the expected word, so "a clock!" solves the clock riddle.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::attempts::{MAX_ATTEMPTS, RoundStatus, normalize};
use crate::{Difficulty, Feedback, pick_uniform};

/// Bonus for solving without revealing the hint.
pub const HINT_BONUS: u32 = 5;

/// Points deducted per earlier wrong attempt.
const ATTEMPT_PENALTY: u32 = 2;

/// A riddle with its answer and hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BrainTeaser {
    /// The riddle text.
    pub question: &'static str,
    /// Expected answer, lowercase.
    pub answer: &'static str,
    /// Hint revealed on request.
    pub hint: &'static str,
    /// Kind of teaser.
    pub category: &'static str,
    /// Scoring tier.
    pub difficulty: Difficulty,
}

/// The fixed riddle pool.
pub static BRAIN_TEASERS: [BrainTeaser; 10] = [
    BrainTeaser {
        question: "I have keys but no locks. I have space but no room. You can enter, but you can't go outside. What am I?",
        answer: "keyboard",
        hint: "You use me to type on a computer",
        category: "Riddle",
        difficulty: Difficulty::Medium,
    },
    BrainTeaser {
        question: "What has hands but cannot clap?",
        answer: "clock",
        hint: "I tell time and hang on walls",
        category: "Riddle",
        difficulty: Difficulty::Easy,
    },
    BrainTeaser {
        question: "I'm tall when I'm young, and short when I'm old. What am I?",
        answer: "candle",
        hint: "I provide light and melt as I burn",
        category: "Riddle",
        difficulty: Difficulty::Easy,
    },
    BrainTeaser {
        question: "What comes once in a minute, twice in a moment, but never in a thousand years?",
        answer: "m",
        hint: "Think about the letters in these words",
        category: "Word Play",
        difficulty: Difficulty::Hard,
    },
    BrainTeaser {
        question: "A man lives on the 20th floor of an apartment building. Every morning he takes the elevator down to the ground floor. When he comes home, he takes the elevator to the 10th floor and walks the rest of the way... except on rainy days, when he takes the elevator all the way to the 20th floor. Why?",
        answer: "short",
        hint: "Think about his physical characteristics and what he needs to reach elevator buttons",
        category: "Logic",
        difficulty: Difficulty::Hard,
    },
    BrainTeaser {
        question: "What gets wetter the more it dries?",
        answer: "towel",
        hint: "You use me after a shower",
        category: "Riddle",
        difficulty: Difficulty::Easy,
    },
    BrainTeaser {
        question: "I have cities, but no houses. I have mountains, but no trees. I have water, but no fish. What am I?",
        answer: "map",
        hint: "I show you where places are located",
        category: "Riddle",
        difficulty: Difficulty::Medium,
    },
    BrainTeaser {
        question: "What can travel around the world while staying in a corner?",
        answer: "stamp",
        hint: "I'm small, sticky, and help mail get delivered",
        category: "Riddle",
        difficulty: Difficulty::Medium,
    },
    BrainTeaser {
        question: "The more you take, the more you leave behind. What am I?",
        answer: "footsteps",
        hint: "Think about walking",
        category: "Riddle",
        difficulty: Difficulty::Easy,
    },
    BrainTeaser {
        question: "What has a head, a tail, is brown, and has no legs?",
        answer: "penny",
        hint: "I'm worth one cent",
        category: "Riddle",
        difficulty: Difficulty::Easy,
    },
];

/// Brain Teasers game state.
#[derive(Debug, Clone)]
pub struct BrainTeasers {
    rng: StdRng,
    current: usize,
    input: String,
    attempts: u32,
    hint_shown: bool,
    score: u32,
    status: RoundStatus,
    feedback: Option<Feedback>,
}

impl BrainTeasers {
    /// Creates a game with an OS-seeded riddle picker.
    #[instrument]
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Creates a game with a deterministic riddle picker.
    #[instrument]
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(mut rng: StdRng) -> Self {
        let current = pick_uniform(&mut rng, BRAIN_TEASERS.len());
        Self {
            rng,
            current,
            input: String::new(),
            attempts: 0,
            hint_shown: false,
            score: 0,
            status: RoundStatus::Open,
            feedback: None,
        }
    }

    /// Draws a new riddle and resets the round. The session score is kept.
    #[instrument(skip(self))]
    pub fn next_round(&mut self) {
        self.current = pick_uniform(&mut self.rng, BRAIN_TEASERS.len());
        self.input.clear();
        self.attempts = 0;
        self.hint_shown = false;
        self.status = RoundStatus::Open;
        self.feedback = None;
        debug!(category = self.teaser().category, "New brain teaser");
    }

    /// The riddle being played.
    pub fn teaser(&self) -> &BrainTeaser {
        &BRAIN_TEASERS[self.current]
    }

    /// The player's typed answer so far.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Attempts used this round.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Whether the hint has been revealed this round.
    pub fn hint_shown(&self) -> bool {
        self.hint_shown
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

    /// Appends a character to the answer.
    pub fn type_char(&mut self, c: char) {
        if !self.status.is_over() {
            self.input.push(c);
        }
    }

    /// Removes the last typed character.
    pub fn backspace(&mut self) {
        self.input.pop();
    }

    /// Convenience: replaces the input and submits it.
    pub fn submit_answer(&mut self, answer: &str) -> Option<Feedback> {
        self.input = answer.to_string();
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
            let feedback = Feedback::EmptyAnswer;
            self.feedback = Some(feedback.clone());
            return Some(feedback);
        }

        let previous_attempts = self.attempts;
        self.attempts += 1;
        let teaser = *self.teaser();

        let feedback = if guess.contains(teaser.answer) {
            let points = self.points_for(&teaser, previous_attempts);
            self.score += points;
            self.status = RoundStatus::Solved;
            info!(answer = teaser.answer, points, score = self.score, "Brain teaser solved");
            Feedback::Earned { points }
        } else if self.attempts >= MAX_ATTEMPTS {
            self.status = RoundStatus::Revealed;
            info!(answer = teaser.answer, "Brain teaser attempts exhausted");
            Feedback::AnswerRevealed {
                answer: teaser.answer.to_string(),
            }
        } else {
            Feedback::TryAgain {
                remaining: MAX_ATTEMPTS - self.attempts,
            }
        };
        self.feedback = Some(feedback.clone());
        Some(feedback)
    }

    /// Reveals the hint, forfeiting the no-hint bonus.
    ///
    /// Returns `None` if the hint is already shown or the round is over.
    #[instrument(skip(self))]
    pub fn reveal_hint(&mut self) -> Option<Feedback> {
        if self.status.is_over() || self.hint_shown {
            return None;
        }
        self.hint_shown = true;
        let feedback = Feedback::Hint(self.teaser().hint.to_string());
        self.feedback = Some(feedback.clone());
        Some(feedback)
    }

    fn points_for(&self, teaser: &BrainTeaser, previous_attempts: u32) -> u32 {
        let bonus = if self.hint_shown { 0 } else { HINT_BONUS };
        (teaser.difficulty.question_points() + bonus)
            .saturating_sub(previous_attempts * ATTEMPT_PENALTY)
            .max(1)
    }
}

impl Default for BrainTeasers {
    fn default() -> Self {
        Self::new()
    }
}
