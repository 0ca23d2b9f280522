//! Pattern Recognition: spot the missing element.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::{Deferred, Feedback, Reaction, Scheduled};

/// Placeholder shown at the masked position.
pub const MASK: &str = "❓";

/// Number of answer options offered.
pub const OPTION_COUNT: usize = 4;

/// Color tokens.
pub const COLORS: [&str; 6] = ["🔴", "🟡", "🔵", "🟢", "🟣", "🟠"];

/// Shape tokens.
pub const SHAPES: [&str; 6] = ["⭐", "🔺", "⬜", "🔶", "⭕", "🔸"];

/// Pause after a correct answer before the next pattern.
pub const CORRECT_PATTERN_DELAY: Duration = Duration::from_millis(2000);

/// Pause after a wrong answer (answer revealed) before the next pattern.
pub const WRONG_PATTERN_DELAY: Duration = Duration::from_millis(3000);

/// The three pattern generators.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum PatternFamily {
    /// A repeating cycle of colors.
    Colors,
    /// A repeating cycle of shapes.
    Shapes,
    /// An arithmetic sequence.
    Numbers,
}

impl PatternFamily {
    const ALL: [PatternFamily; 3] = [
        PatternFamily::Colors,
        PatternFamily::Shapes,
        PatternFamily::Numbers,
    ];
}

/// A generated pattern with one masked position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    family: PatternFamily,
    sequence: Vec<String>,
    missing: usize,
    options: Vec<String>,
    answer: String,
}

impl Pattern {
    /// Generates a pattern from a randomly chosen family.
    #[instrument(skip(rng))]
    pub fn generate<R: Rng + ?Sized>(level: u32, rng: &mut R) -> Self {
        let family = PatternFamily::ALL[rng.random_range(0..PatternFamily::ALL.len())];
        Self::generate_family(family, level, rng)
    }

    /// Generates a pattern of a specific family.
    ///
    /// Color cycles have period `min(3 + level, 6)` over six tokens, shape
    /// cycles period `min(2 + level, 4)` over eight tokens. Number patterns
    /// start at 1..=10 and step by 1..=3 for seven terms.
    #[instrument(skip(rng))]
    pub fn generate_family<R: Rng + ?Sized>(family: PatternFamily, level: u32, rng: &mut R) -> Self {
        let level = level as usize;
        let full: Vec<String> = match family {
            PatternFamily::Colors => cycle(&COLORS, (3 + level).min(6), 6),
            PatternFamily::Shapes => cycle(&SHAPES, (2 + level).min(4), 8),
            PatternFamily::Numbers => {
                let start: u32 = rng.random_range(1..=10);
                let step: u32 = rng.random_range(1..=3);
                (0..7).map(|i| (start + i * step).to_string()).collect()
            }
        };

        let missing = rng.random_range(0..full.len());
        let answer = full[missing].clone();
        let mut sequence = full;
        sequence[missing] = MASK.to_string();

        let mut options = vec![answer.clone()];
        while options.len() < OPTION_COUNT {
            let decoy = match family {
                PatternFamily::Colors => COLORS[rng.random_range(0..COLORS.len())].to_string(),
                PatternFamily::Shapes => SHAPES[rng.random_range(0..SHAPES.len())].to_string(),
                PatternFamily::Numbers => rng.random_range(1..=20u32).to_string(),
            };
            if !options.contains(&decoy) {
                options.push(decoy);
            }
        }
        options.shuffle(rng);

        Self {
            family,
            sequence,
            missing,
            options,
            answer,
        }
    }

    /// Which generator produced this pattern.
    pub fn family(&self) -> PatternFamily {
        self.family
    }

    /// Tokens with [`MASK`] at the missing position.
    pub fn sequence(&self) -> &[String] {
        &self.sequence
    }

    /// Index of the masked token.
    pub fn missing(&self) -> usize {
        self.missing
    }

    /// The four shuffled options.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// The masked token.
    pub fn answer(&self) -> &str {
        &self.answer
    }
}

fn cycle(tokens: &[&str], period: usize, len: usize) -> Vec<String> {
    (0..len).map(|i| tokens[i % period].to_string()).collect()
}

/// Event delivered after the pause between patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternEvent {
    /// Generate the next pattern at the current level.
    NextPattern,
}

/// Pattern Recognition game state.
#[derive(Debug, Clone)]
pub struct PatternGame {
    rng: StdRng,
    level: u32,
    score: u32,
    pattern: Pattern,
    selected: Option<usize>,
    revealed: bool,
    pending: bool,
    feedback: Option<Feedback>,
}

impl PatternGame {
    /// Creates a game at level 1 with an OS-seeded generator.
    #[instrument]
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Creates a game at level 1 with a deterministic generator.
    #[instrument]
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(mut rng: StdRng) -> Self {
        let pattern = Pattern::generate(1, &mut rng);
        Self {
            rng,
            level: 1,
            score: 0,
            pattern,
            selected: None,
            revealed: false,
            pending: false,
            feedback: None,
        }
    }

    /// Current level, starting at 1.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Cumulative score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// The pattern on screen.
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Index of the selected option.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Whether the answer is being shown after a wrong pick.
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Whether a new pattern is on its way.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Most recent feedback, if any.
    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    /// Highlights an option. Ignored while a transition is pending.
    pub fn select(&mut self, option: usize) {
        if !self.pending && option < self.pattern.options.len() {
            self.selected = Some(option);
        }
    }

    /// Checks the selected option.
    ///
    /// Returns `None` with nothing selected or while a transition is pending.
    #[instrument(skip(self), fields(level = self.level))]
    pub fn check(&mut self) -> Option<Reaction<PatternEvent>> {
        if self.pending {
            return None;
        }
        let choice = self.pattern.options.get(self.selected?)?;

        self.pending = true;
        let reaction = if *choice == self.pattern.answer {
            let points = self.level * 5;
            self.score += points;
            self.level += 1;
            info!(points, level = self.level, score = self.score, "Pattern solved");
            Reaction::then(
                Feedback::WellDone,
                Deferred::new(PatternEvent::NextPattern, CORRECT_PATTERN_DELAY),
            )
        } else {
            self.revealed = true;
            debug!(choice = %choice, answer = %self.pattern.answer, "Wrong pattern answer");
            Reaction::then(
                Feedback::Wrong {
                    answer: self.pattern.answer.clone(),
                },
                Deferred::new(PatternEvent::NextPattern, WRONG_PATTERN_DELAY),
            )
        };
        self.feedback = Some(reaction.feedback().clone());
        Some(reaction)
    }

    /// Convenience: selects and checks in one step.
    pub fn choose(&mut self, option: usize) -> Option<Reaction<PatternEvent>> {
        self.select(option);
        self.check()
    }

    fn next_pattern(&mut self) {
        self.pattern = Pattern::generate(self.level, &mut self.rng);
        self.selected = None;
        self.revealed = false;
        self.pending = false;
        self.feedback = None;
        debug!(family = %self.pattern.family, level = self.level, "Next pattern");
    }
}

impl Default for PatternGame {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduled for PatternGame {
    type Event = PatternEvent;

    fn fire(&mut self, event: PatternEvent) {
        match event {
            PatternEvent::NextPattern if self.pending => self.next_pattern(),
            PatternEvent::NextPattern => debug!("Stale next-pattern event ignored"),
        }
    }
}
