//! Number Challenge: a 30 second arithmetic sprint.
//!
//! The host drives the countdown by calling [`NumberChallenge::tick`] once
//! per [`TICK_INTERVAL`] while the round is active. Answers feed a streak
//! that is added on top of the tier's base points.

use std::time::Duration;

use derive_more::Display;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::{Deferred, Difficulty, Feedback, Reaction, Scheduled};

/// Length of a round in seconds.
pub const ROUND_SECONDS: u32 = 30;

/// Countdown granularity.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Pause after a correct answer before the next problem.
pub const CORRECT_ADVANCE_DELAY: Duration = Duration::from_millis(1500);

/// Pause after a wrong answer before the next problem.
pub const WRONG_ADVANCE_DELAY: Duration = Duration::from_millis(2000);

// ─────────────────────────────────────────────────────────────
//  Problems
// ─────────────────────────────────────────────────────────────

/// An arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Operator {
    /// Addition.
    #[display("+")]
    Add,
    /// Subtraction.
    #[display("-")]
    Subtract,
    /// Multiplication.
    #[display("×")]
    Multiply,
    /// Integer division.
    #[display("÷")]
    Divide,
}

impl Operator {
    /// Operators available inside and outside the parentheses on hard problems.
    const CHAINABLE: [Operator; 3] = [Operator::Add, Operator::Subtract, Operator::Multiply];

    /// Applies the operator. Subtraction never goes below zero; division by
    /// zero yields zero.
    fn apply(self, lhs: u32, rhs: u32) -> u32 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs.saturating_sub(rhs),
            Operator::Multiply => lhs * rhs,
            Operator::Divide => lhs.checked_div(rhs).unwrap_or(0),
        }
    }
}

/// The shape of a generated problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Expression {
    /// `lhs op rhs`
    #[display("{lhs} {op} {rhs}")]
    Binary {
        /// Left operand.
        lhs: u32,
        /// Operator.
        op: Operator,
        /// Right operand.
        rhs: u32,
    },
    /// `(x inner y) outer z`
    #[display("({x} {inner} {y}) {outer} {z}")]
    Chained {
        /// First operand inside the parentheses.
        x: u32,
        /// Operator inside the parentheses.
        inner: Operator,
        /// Second operand inside the parentheses.
        y: u32,
        /// Operator applied to the parenthesized result.
        outer: Operator,
        /// Final operand.
        z: u32,
    },
}

impl Expression {
    /// Evaluates the expression with non-negative subtraction.
    pub fn evaluate(&self) -> u32 {
        match *self {
            Expression::Binary { lhs, op, rhs } => op.apply(lhs, rhs),
            Expression::Chained {
                x,
                inner,
                y,
                outer,
                z,
            } => outer.apply(inner.apply(x, y), z),
        }
    }
}

/// A problem with its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    expression: Expression,
    answer: u32,
    difficulty: Difficulty,
}

impl Problem {
    /// Generates a problem for the given tier.
    ///
    /// - easy: `+`/`-` on 1..=20, subtraction ordered larger minus smaller
    /// - medium: `×`/`÷` on 1..=12, division built from a product so it is exact
    /// - hard: `(x op y) op z` on 1..=10 with `+`, `-`, `×`
    #[instrument(skip(rng))]
    pub fn generate<R: Rng + ?Sized>(difficulty: Difficulty, rng: &mut R) -> Self {
        let expression = match difficulty {
            Difficulty::Easy => {
                let a = rng.random_range(1..=20);
                let b = rng.random_range(1..=20);
                if rng.random_bool(0.5) {
                    Expression::Binary {
                        lhs: a,
                        op: Operator::Add,
                        rhs: b,
                    }
                } else {
                    Expression::Binary {
                        lhs: a.max(b),
                        op: Operator::Subtract,
                        rhs: a.min(b),
                    }
                }
            }
            Difficulty::Medium => {
                let c = rng.random_range(1..=12);
                let d = rng.random_range(1..=12);
                if rng.random_bool(0.5) {
                    Expression::Binary {
                        lhs: c,
                        op: Operator::Multiply,
                        rhs: d,
                    }
                } else {
                    Expression::Binary {
                        lhs: c * d,
                        op: Operator::Divide,
                        rhs: c,
                    }
                }
            }
            Difficulty::Hard => {
                let inner = Operator::CHAINABLE[rng.random_range(0..Operator::CHAINABLE.len())];
                let outer = Operator::CHAINABLE[rng.random_range(0..Operator::CHAINABLE.len())];
                let x: u32 = rng.random_range(1..=10);
                let y: u32 = rng.random_range(1..=10);
                let z = rng.random_range(1..=10);
                let (x, y) = if inner == Operator::Subtract {
                    (x.max(y), x.min(y))
                } else {
                    (x, y)
                };
                Expression::Chained {
                    x,
                    inner,
                    y,
                    outer,
                    z,
                }
            }
        };

        Self {
            expression,
            answer: expression.evaluate(),
            difficulty,
        }
    }

    /// The expression as generated.
    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    /// The correct answer.
    pub fn answer(&self) -> u32 {
        self.answer
    }

    /// The tier the problem was generated for.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Question text, e.g. `"(3 × 4) - 2"`.
    pub fn question(&self) -> String {
        self.expression.to_string()
    }
}

// ─────────────────────────────────────────────────────────────
//  Game
// ─────────────────────────────────────────────────────────────

/// Event delivered after a pause between problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberEvent {
    /// Show the next problem.
    NextProblem,
}

/// Where the challenge stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChallengePhase {
    /// Choosing a difficulty, no round running yet.
    Setup,
    /// Countdown running.
    Active,
    /// Countdown reached zero.
    Finished,
}

/// Requests the challenge refuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, derive_more::Error)]
pub enum ChallengeError {
    /// Difficulty cannot change mid-round.
    #[display("Cannot change difficulty while a round is running")]
    RoundActive,
}

/// Number Challenge game state.
#[derive(Debug, Clone)]
pub struct NumberChallenge {
    rng: StdRng,
    difficulty: Difficulty,
    phase: ChallengePhase,
    time_left: u32,
    score: u32,
    streak: u32,
    problem: Option<Problem>,
    input: String,
    awaiting_next: bool,
    feedback: Option<Feedback>,
}

impl NumberChallenge {
    /// Creates a challenge in setup with an OS-seeded generator.
    #[instrument]
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Creates a challenge in setup with a deterministic generator.
    #[instrument]
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            rng,
            difficulty: Difficulty::Easy,
            phase: ChallengePhase::Setup,
            time_left: ROUND_SECONDS,
            score: 0,
            streak: 0,
            problem: None,
            input: String::new(),
            awaiting_next: false,
            feedback: None,
        }
    }

    /// Selected difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Current phase.
    pub fn phase(&self) -> ChallengePhase {
        self.phase
    }

    /// Returns true while the countdown runs.
    pub fn is_active(&self) -> bool {
        self.phase == ChallengePhase::Active
    }

    /// Seconds remaining.
    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    /// Score for the current (or last) round.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Consecutive correct answers.
    pub fn streak(&self) -> u32 {
        self.streak
    }

    /// The problem on screen.
    pub fn problem(&self) -> Option<&Problem> {
        self.problem.as_ref()
    }

    /// The player's typed answer.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Returns true between an answer and the next problem.
    pub fn is_awaiting_next(&self) -> bool {
        self.awaiting_next
    }

    /// Most recent feedback, if any.
    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    /// Selects the difficulty for the next round.
    ///
    /// # Errors
    ///
    /// Returns [`ChallengeError::RoundActive`] while a round is running.
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> Result<(), ChallengeError> {
        if self.is_active() {
            warn!(?difficulty, "Difficulty change refused mid-round");
            return Err(ChallengeError::RoundActive);
        }
        self.difficulty = difficulty;
        Ok(())
    }

    /// Starts a fresh round: full clock, zero score and streak, new problem.
    #[instrument(skip(self), fields(difficulty = %self.difficulty))]
    pub fn start(&mut self) {
        self.phase = ChallengePhase::Active;
        self.time_left = ROUND_SECONDS;
        self.score = 0;
        self.streak = 0;
        self.next_problem();
        info!("Number challenge started");
    }

    /// Appends a character to the answer. Only digits and a leading minus.
    pub fn type_char(&mut self, c: char) {
        if !self.is_active() || self.awaiting_next {
            return;
        }
        if c.is_ascii_digit() || (c == '-' && self.input.is_empty()) {
            self.input.push(c);
        }
    }

    /// Removes the last typed character.
    pub fn backspace(&mut self) {
        self.input.pop();
    }

    /// Convenience: replaces the input and submits it.
    pub fn submit_answer(&mut self, answer: &str) -> Option<Reaction<NumberEvent>> {
        self.input = answer.to_string();
        self.submit()
    }

    /// Checks the typed answer.
    ///
    /// Returns `None` when no round is running or the next problem is
    /// already on its way. Unparsable input yields
    /// [`Feedback::InvalidNumber`] and changes nothing else.
    #[instrument(skip(self), fields(streak = self.streak))]
    pub fn submit(&mut self) -> Option<Reaction<NumberEvent>> {
        if !self.is_active() || self.awaiting_next {
            return None;
        }
        let problem = self.problem?;

        let Ok(guess) = self.input.trim().parse::<i64>() else {
            self.feedback = Some(Feedback::InvalidNumber);
            return Some(Reaction::immediate(Feedback::InvalidNumber));
        };

        self.awaiting_next = true;
        let reaction = if guess == i64::from(problem.answer()) {
            let points = self.difficulty.base_points() + self.streak;
            self.score += points;
            self.streak += 1;
            debug!(points, score = self.score, streak = self.streak, "Correct answer");
            Reaction::then(
                Feedback::Scored { points },
                Deferred::new(NumberEvent::NextProblem, CORRECT_ADVANCE_DELAY),
            )
        } else {
            self.streak = 0;
            debug!(guess, answer = problem.answer(), "Wrong answer");
            Reaction::then(
                Feedback::Wrong {
                    answer: problem.answer().to_string(),
                },
                Deferred::new(NumberEvent::NextProblem, WRONG_ADVANCE_DELAY),
            )
        };
        self.feedback = Some(reaction.feedback().clone());
        Some(reaction)
    }

    /// Advances the countdown by one second.
    ///
    /// Returns [`Feedback::TimeUp`] on the tick that ends the round.
    #[instrument(skip(self), fields(time_left = self.time_left))]
    pub fn tick(&mut self) -> Option<Feedback> {
        if !self.is_active() {
            return None;
        }
        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left > 0 {
            return None;
        }

        self.phase = ChallengePhase::Finished;
        self.awaiting_next = false;
        let feedback = Feedback::TimeUp { score: self.score };
        self.feedback = Some(feedback.clone());
        info!(score = self.score, "Number challenge finished");
        Some(feedback)
    }

    fn next_problem(&mut self) {
        let problem = Problem::generate(self.difficulty, &mut self.rng);
        debug!(question = %problem.question(), "Next problem");
        self.problem = Some(problem);
        self.input.clear();
        self.feedback = None;
        self.awaiting_next = false;
    }
}

impl Default for NumberChallenge {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduled for NumberChallenge {
    type Event = NumberEvent;

    fn fire(&mut self, event: NumberEvent) {
        match event {
            NumberEvent::NextProblem if self.is_active() && self.awaiting_next => {
                self.next_problem();
            }
            NumberEvent::NextProblem => {
                debug!("Stale next-problem event ignored");
            }
        }
    }
}
