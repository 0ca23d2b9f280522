//! Rotating word cycler.

use std::time::Duration;

use tracing::{debug, instrument};

use crate::error::{EffectError, require_positive};

/// Cycles through a fixed, non-empty word list on a fixed interval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCycler {
    words: Vec<String>,
    interval: Duration,
    index: usize,
}

impl WordCycler {
    /// Creates a cycler showing the first word.
    ///
    /// # Errors
    ///
    /// Returns an [`EffectError`] if `words` is empty or `interval` is zero.
    #[instrument(skip(words))]
    pub fn new<I, S>(words: I, interval: Duration) -> Result<Self, EffectError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if words.is_empty() {
            return Err(EffectError::new("Word cycler needs at least one word"));
        }
        let interval = require_positive("Cycler interval", interval)?;
        debug!(words = words.len(), ?interval, "Word cycler created");
        Ok(Self {
            words,
            interval,
            index: 0,
        })
    }

    /// The word list.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Time each word stays on screen.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Index of the word on screen.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The word on screen.
    pub fn current(&self) -> &str {
        &self.words[self.index]
    }

    /// Moves to the next word, wrapping to the first after the last.
    pub fn advance(&mut self) -> &str {
        self.index = (self.index + 1) % self.words.len();
        self.current()
    }

    /// The word that would be on screen `elapsed` after the cycle began.
    pub fn word_at(&self, elapsed: Duration) -> &str {
        let steps = elapsed.as_nanos() / self.interval.as_nanos();
        let index = (steps % self.words.len() as u128) as usize;
        &self.words[index]
    }
}
