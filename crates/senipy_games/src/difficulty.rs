//! Difficulty tiers shared by the scored games.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A named difficulty tier.
///
/// Tiers select generation parameters (Number Challenge) and scoring
/// weights (Number Challenge, Trivia Quiz, Brain Teasers).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Difficulty {
    /// Gentle warm-up problems.
    #[default]
    Easy,
    /// Moderate problems.
    Medium,
    /// The hardest tier.
    Hard,
}

impl Difficulty {
    /// All tiers, easiest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Base points for a correct Number Challenge answer (streak is added on top).
    #[instrument]
    pub fn base_points(self) -> u32 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    /// Points awarded for a correct trivia answer or a solved brain teaser.
    #[instrument]
    pub fn question_points(self) -> u32 {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Medium => 15,
            Difficulty::Hard => 20,
        }
    }

    /// Capitalized label for display ("Easy", "Medium", "Hard").
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Cycles to the next tier, wrapping from `Hard` back to `Easy`.
    pub fn next(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }
}
