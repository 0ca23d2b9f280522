//! Memory Match: find the eight pairs in a shuffled 4×4 grid.
//!
//! The machine moves `Idle -> OneFaceUp -> PairPending -> Idle` and ends in
//! `Complete` once every card is matched. Flipping the second card of a
//! pair does not resolve it; instead a [`Deferred`] is handed back so the
//! player gets a moment to see both symbols before [`MemoryMatch::resolve`]
//! runs.

use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::{Deferred, Scheduled};

/// Card faces. Each appears on exactly two cards.
pub const SYMBOLS: [&str; 8] = ["🌟", "🌸", "🦋", "🌈", "🎵", "🌺", "🍀", "🎨"];

/// Points awarded per matched pair.
pub const MATCH_POINTS: u32 = 10;

/// How long a face-up pair stays visible before it is resolved.
pub const RESOLVE_DELAY: Duration = Duration::from_millis(1000);

/// Identifier of a card, stable across shuffles.
pub type CardId = usize;

/// A single card in the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    symbol: String,
    flipped: bool,
    matched: bool,
}

impl Card {
    /// Returns the card's id.
    pub fn id(&self) -> CardId {
        self.id
    }

    /// Returns the symbol on the card's face.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Returns true while the card is turned face-up and not yet matched.
    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// Returns true once the card's pair has been found.
    pub fn is_matched(&self) -> bool {
        self.matched
    }

    /// Returns true if the face should be shown.
    pub fn is_face_visible(&self) -> bool {
        self.flipped || self.matched
    }
}

/// Event delivered back to the game after [`RESOLVE_DELAY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemoryEvent {
    /// Compare the two face-up cards.
    ResolvePair,
}

/// Observable phase of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemoryPhase {
    /// No unmatched card is face-up.
    Idle,
    /// One card is face-up, waiting for its partner.
    OneFaceUp,
    /// Two cards are face-up, waiting for resolution.
    PairPending,
    /// Every card is matched.
    Complete,
}

/// What happened when a card was flipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipOutcome {
    /// First card of a pair turned over.
    Revealed,
    /// Second card turned over; schedule the resolution.
    PairPending(Deferred<MemoryEvent>),
}

/// How a face-up pair was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairResolution {
    /// Symbols matched; both cards stay face-up for good.
    Matched {
        /// Points awarded.
        points: u32,
    },
    /// Symbols differed; both cards were turned back down.
    Mismatched,
}

/// Reasons a flip is refused. The game state is unchanged in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum FlipError {
    /// No card has this id.
    #[display("No card with id {_0}")]
    UnknownCard(#[error(not(source))] CardId),
    /// The card is already face-up.
    #[display("Card {_0} is already face-up")]
    AlreadyFaceUp(#[error(not(source))] CardId),
    /// The card's pair was already found.
    #[display("Card {_0} is already matched")]
    AlreadyMatched(#[error(not(source))] CardId),
    /// Two cards are face-up and waiting to be resolved.
    #[display("Two cards are already face-up")]
    PairPending,
    /// All pairs have been found.
    #[display("The game is complete")]
    GameComplete,
}

/// Memory Match game state.
#[derive(Debug, Clone)]
pub struct MemoryMatch {
    rng: StdRng,
    cards: Vec<Card>,
    face_up: Vec<CardId>,
    score: u32,
    moves: u32,
}

impl MemoryMatch {
    /// Creates a new game with an OS-seeded shuffle.
    #[instrument]
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Creates a new game with a deterministic shuffle.
    #[instrument]
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        let mut game = Self {
            rng,
            cards: Vec::new(),
            face_up: Vec::new(),
            score: 0,
            moves: 0,
        };
        game.new_game();
        game
    }

    /// Deals a freshly shuffled deck and zeroes score and moves.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        let mut cards: Vec<Card> = SYMBOLS
            .iter()
            .chain(SYMBOLS.iter())
            .enumerate()
            .map(|(id, symbol)| Card {
                id,
                symbol: (*symbol).to_string(),
                flipped: false,
                matched: false,
            })
            .collect();
        cards.shuffle(&mut self.rng);

        self.cards = cards;
        self.face_up.clear();
        self.score = 0;
        self.moves = 0;
        debug!(cards = self.cards.len(), "Dealt new memory deck");
    }

    /// Cards in display order (row-major, four per row).
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Ids of the unmatched cards currently face-up, in flip order.
    pub fn face_up(&self) -> &[CardId] {
        &self.face_up
    }

    /// Current score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Number of resolved pairs, matched or not.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Returns true once every card is matched.
    pub fn is_complete(&self) -> bool {
        !self.cards.is_empty() && self.cards.iter().all(Card::is_matched)
    }

    /// Returns the current phase.
    pub fn phase(&self) -> MemoryPhase {
        if self.is_complete() {
            return MemoryPhase::Complete;
        }
        match self.face_up.len() {
            0 => MemoryPhase::Idle,
            1 => MemoryPhase::OneFaceUp,
            _ => MemoryPhase::PairPending,
        }
    }

    /// Looks up a card by id.
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Turns a card face-up.
    ///
    /// # Errors
    ///
    /// Returns a [`FlipError`] if the card cannot be flipped right now.
    #[instrument(skip(self), fields(face_up = self.face_up.len()))]
    pub fn flip(&mut self, id: CardId) -> Result<FlipOutcome, FlipError> {
        if self.is_complete() {
            return Err(FlipError::GameComplete);
        }
        if self.face_up.len() >= 2 {
            warn!(card = id, "Flip refused while a pair is pending");
            return Err(FlipError::PairPending);
        }

        let card = self
            .cards
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(FlipError::UnknownCard(id))?;
        if card.matched {
            return Err(FlipError::AlreadyMatched(id));
        }
        if card.flipped {
            return Err(FlipError::AlreadyFaceUp(id));
        }

        card.flipped = true;
        self.face_up.push(id);
        debug!(card = id, symbol = %card.symbol, "Card flipped");

        if self.face_up.len() == 2 {
            Ok(FlipOutcome::PairPending(Deferred::new(
                MemoryEvent::ResolvePair,
                RESOLVE_DELAY,
            )))
        } else {
            Ok(FlipOutcome::Revealed)
        }
    }

    /// Resolves the face-up pair.
    ///
    /// Does nothing and returns `None` unless exactly two cards are face-up.
    #[instrument(skip(self))]
    pub fn resolve(&mut self) -> Option<PairResolution> {
        let [first, second] = self.face_up[..] else {
            return None;
        };

        let symbol_of = |id| self.card(id).map(|c| c.symbol.clone());
        let matched = symbol_of(first).is_some() && symbol_of(first) == symbol_of(second);

        for card in self
            .cards
            .iter_mut()
            .filter(|c| c.id == first || c.id == second)
        {
            if matched {
                card.matched = true;
            }
            card.flipped = false;
        }
        self.face_up.clear();
        self.moves += 1;

        if matched {
            self.score += MATCH_POINTS;
            info!(first, second, score = self.score, moves = self.moves, "Pair matched");
            if self.is_complete() {
                info!(score = self.score, moves = self.moves, "All pairs matched");
            }
            Some(PairResolution::Matched {
                points: MATCH_POINTS,
            })
        } else {
            debug!(first, second, moves = self.moves, "Pair mismatched");
            Some(PairResolution::Mismatched)
        }
    }
}

impl Default for MemoryMatch {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduled for MemoryMatch {
    type Event = MemoryEvent;

    fn fire(&mut self, event: MemoryEvent) {
        match event {
            MemoryEvent::ResolvePair => {
                self.resolve();
            }
        }
    }
}
