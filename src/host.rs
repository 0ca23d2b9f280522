//! Hosting a game together with its timers.
//!
//! A [`GameHost`] owns one game, one [`TimerSlot`] for the game's deferred
//! transition chain and one [`Ticker`] for countdowns. Replacing the game
//! or dropping the host cancels both.

use std::time::Duration;

use senipy_games::{Deferred, Scheduled};
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing::{debug, instrument, trace};

use crate::timer::{Tagged, Ticker, TimerSlot};

/// What a hosted game's timers deliver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal<E> {
    /// A deferred game event came due.
    Fire(E),
    /// The countdown ticker ticked.
    Tick,
}

/// A game plus the timers driving its deferred transitions.
#[derive(Debug)]
pub struct GameHost<G: Scheduled> {
    game: G,
    rx: UnboundedReceiver<Tagged<Signal<G::Event>>>,
    slot: TimerSlot<Signal<G::Event>>,
    ticker: Ticker<Signal<G::Event>>,
}

impl<G: Scheduled> GameHost<G> {
    /// Hosts `game` with idle timers.
    pub fn new(game: G) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            game,
            rx,
            slot: TimerSlot::new(tx.clone()),
            ticker: Ticker::new(tx),
        }
    }

    /// The hosted game.
    pub fn game(&self) -> &G {
        &self.game
    }

    /// The hosted game, mutably.
    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }

    /// Whether a deferred transition is waiting.
    pub fn has_pending(&self) -> bool {
        self.slot.is_pending()
    }

    /// Whether the countdown ticker is running.
    pub fn is_ticking(&self) -> bool {
        self.ticker.is_running()
    }

    /// Arms the transition slot with `follow_up`, if any, replacing
    /// whatever was pending.
    #[instrument(skip(self))]
    pub fn schedule(&mut self, follow_up: Option<Deferred<G::Event>>) {
        if let Some(deferred) = follow_up {
            self.slot
                .schedule(Signal::Fire(*deferred.event()), *deferred.delay());
        }
    }

    /// Starts the countdown ticker.
    pub fn start_ticker(&mut self, period: Duration) {
        self.ticker.start(Signal::Tick, period);
    }

    /// Stops the countdown ticker.
    pub fn stop_ticker(&mut self) {
        self.ticker.stop();
    }

    /// Cancels every timer without touching the game.
    pub fn cancel_all(&mut self) {
        self.slot.cancel();
        self.ticker.stop();
    }

    /// Replaces the game, cancelling every timer of the old one.
    #[instrument(skip(self, game))]
    pub fn reset(&mut self, game: G) {
        self.cancel_all();
        self.game = game;
        debug!("Game reset");
    }

    /// Applies every signal that has already arrived, without waiting.
    ///
    /// Fired events are delivered to the game. Returns how many countdown
    /// ticks arrived so the caller can advance its clock.
    pub fn pump(&mut self) -> u32 {
        let mut ticks = 0;
        while let Ok(tagged) = self.rx.try_recv() {
            if let Some(Signal::Tick) = self.apply(tagged) {
                ticks += 1;
            }
        }
        ticks
    }

    /// Waits for the next live signal and applies it.
    ///
    /// Returns `None` only if every sender is gone, which cannot happen
    /// while the host is alive.
    pub async fn wait(&mut self) -> Option<Signal<G::Event>> {
        loop {
            let tagged = self.rx.recv().await?;
            if let Some(signal) = self.apply(tagged) {
                return Some(signal);
            }
        }
    }

    fn apply(&mut self, tagged: Tagged<Signal<G::Event>>) -> Option<Signal<G::Event>> {
        if self.slot.accepts(&tagged) {
            let signal = tagged.into_message();
            if let Signal::Fire(event) = signal {
                debug!(?event, "Deferred event fired");
                self.game.fire(event);
            }
            Some(signal)
        } else if self.ticker.accepts(&tagged) {
            Some(tagged.into_message())
        } else {
            trace!(timer = %tagged.timer(), "Stale timer message dropped");
            None
        }
    }
}
