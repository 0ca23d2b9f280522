//! The game catalogue.

use serde::Serialize;
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};

/// Points for starting a game from the catalogue.
pub const PLAY_POINTS: u32 = 10;

/// The six games, identified by short ids (`memory`, `word`, ...).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GameKind {
    /// Memory Match.
    Memory,
    /// Word Puzzle.
    Word,
    /// Number Challenge.
    Number,
    /// Pattern Recognition.
    Pattern,
    /// Trivia Quiz.
    Trivia,
    /// Brain Teasers.
    Brain,
}

impl GameKind {
    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Memory => "Memory Match",
            Self::Word => "Word Puzzle",
            Self::Number => "Number Challenge",
            Self::Pattern => "Pattern Recognition",
            Self::Trivia => "Trivia Quiz",
            Self::Brain => "Brain Teasers",
        }
    }

    /// One-line description.
    pub fn description(self) -> &'static str {
        match self {
            Self::Memory => "Challenge your memory with card matching",
            Self::Word => "Find words in letter grids",
            Self::Number => "Solve mathematical puzzles",
            Self::Pattern => "Identify and complete patterns",
            Self::Trivia => "Test your knowledge with fun questions",
            Self::Brain => "Solve logic puzzles and riddles",
        }
    }

    /// Icon shown next to the name.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Memory => "🧠",
            Self::Word => "📝",
            Self::Number => "🔢",
            Self::Pattern => "🔷",
            Self::Trivia => "❓",
            Self::Brain => "💡",
        }
    }
}

/// One catalogue card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogueEntry {
    /// Which game.
    pub kind: GameKind,
    /// Display name.
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Whether the card is in its playing state.
    pub playing: bool,
}

/// Catalogue of every game with per-card play toggles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalogue {
    entries: Vec<CatalogueEntry>,
    points: u32,
}

impl Default for Catalogue {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalogue {
    /// Every game, none playing, zero points.
    #[instrument]
    pub fn new() -> Self {
        let entries = GameKind::iter()
            .map(|kind| CatalogueEntry {
                kind,
                name: kind.name(),
                description: kind.description(),
                playing: false,
            })
            .collect();
        Self { entries, points: 0 }
    }

    /// Entries in display order.
    pub fn entries(&self) -> &[CatalogueEntry] {
        &self.entries
    }

    /// Points earned by starting games.
    pub fn points(&self) -> u32 {
        self.points
    }

    /// Whether `kind` is in its playing state.
    pub fn is_playing(&self, kind: GameKind) -> bool {
        self.entries.iter().any(|e| e.kind == kind && e.playing)
    }

    /// Flips the play state of `kind`. Starting a game awards
    /// [`PLAY_POINTS`]; stopping awards nothing. Returns the points awarded.
    #[instrument(skip(self))]
    pub fn toggle(&mut self, kind: GameKind) -> u32 {
        let Some(entry) = self.entries.iter_mut().find(|e| e.kind == kind) else {
            return 0;
        };
        entry.playing = !entry.playing;
        if entry.playing {
            self.points += PLAY_POINTS;
            info!(game = %kind, points = self.points, "Game started from catalogue");
            PLAY_POINTS
        } else {
            debug!(game = %kind, "Game stopped");
            0
        }
    }
}
