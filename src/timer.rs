//! Cancellable one-shot and repeating timers.
//!
//! Timers run as tokio tasks that deliver a [`Tagged`] message over an
//! unbounded channel when they fire. Each message carries the id of the
//! timer that sent it and the generation the timer was on when it was
//! armed; the owner checks [`TimerSlot::accepts`] / [`Ticker::accepts`]
//! before acting, so a message that was already queued when its timer was
//! rescheduled or cancelled is discarded.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use derive_getters::Getters;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{Instant, interval_at, sleep};
use tracing::{debug, instrument, trace};

static NEXT_TIMER_ID: AtomicU64 = AtomicU64::new(1);

/// Identifies one timer among those sharing a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("timer#{_0}")]
pub struct TimerId(u64);

impl TimerId {
    fn next() -> Self {
        Self(NEXT_TIMER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// A message delivered by a timer.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Tagged<M> {
    /// Timer that sent the message.
    timer: TimerId,
    /// Generation the timer was on when armed.
    generation: u64,
    /// The payload.
    message: M,
}

impl<M> Tagged<M> {
    /// Unwraps the payload.
    pub fn into_message(self) -> M {
        self.message
    }
}

/// Holds at most one pending one-shot task.
///
/// Scheduling cancels whatever was pending. Dropping the slot cancels its
/// task.
#[derive(Debug)]
pub struct TimerSlot<M> {
    id: TimerId,
    generation: u64,
    tx: UnboundedSender<Tagged<M>>,
    task: Option<JoinHandle<()>>,
}

impl<M: Send + 'static> TimerSlot<M> {
    /// Creates an empty slot delivering into `tx`.
    pub fn new(tx: UnboundedSender<Tagged<M>>) -> Self {
        Self {
            id: TimerId::next(),
            generation: 0,
            tx,
            task: None,
        }
    }

    /// This slot's id.
    pub fn id(&self) -> TimerId {
        self.id
    }

    /// Current generation. Bumps on every schedule or cancel.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a task is armed and has not fired yet.
    pub fn is_pending(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Delivers `message` after `delay`, replacing any pending task.
    ///
    /// Must be called from inside a tokio runtime.
    #[instrument(skip(self, message), fields(timer = %self.id))]
    pub fn schedule(&mut self, message: M, delay: Duration) {
        self.cancel();
        let tagged = Tagged {
            timer: self.id,
            generation: self.generation,
            message,
        };
        let tx = self.tx.clone();
        debug!(generation = self.generation, ?delay, "Timer armed");
        self.task = Some(tokio::spawn(async move {
            sleep(delay).await;
            if tx.send(tagged).is_err() {
                trace!("Timer receiver dropped before firing");
            }
        }));
    }

    /// Cancels the pending task, if any. Messages it already queued become
    /// stale.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            trace!(timer = %self.id, generation = self.generation, "Timer cancelled");
        }
        self.generation += 1;
    }

    /// Whether `tagged` came from the currently armed task of this slot.
    pub fn accepts(&self, tagged: &Tagged<M>) -> bool {
        tagged.timer == self.id && tagged.generation == self.generation
    }
}

impl<M> Drop for TimerSlot<M> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

/// A repeating timer.
///
/// The first message arrives one full period after [`Ticker::start`].
#[derive(Debug)]
pub struct Ticker<M> {
    id: TimerId,
    generation: u64,
    tx: UnboundedSender<Tagged<M>>,
    task: Option<JoinHandle<()>>,
}

impl<M: Clone + Send + 'static> Ticker<M> {
    /// Creates a stopped ticker delivering into `tx`.
    pub fn new(tx: UnboundedSender<Tagged<M>>) -> Self {
        Self {
            id: TimerId::next(),
            generation: 0,
            tx,
            task: None,
        }
    }

    /// This ticker's id.
    pub fn id(&self) -> TimerId {
        self.id
    }

    /// Whether the ticker is running.
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Sends `message` every `period`, restarting if already running.
    ///
    /// Must be called from inside a tokio runtime.
    #[instrument(skip(self, message), fields(ticker = %self.id))]
    pub fn start(&mut self, message: M, period: Duration) {
        self.stop();
        let timer = self.id;
        let generation = self.generation;
        let tx = self.tx.clone();
        debug!(generation, ?period, "Ticker started");
        self.task = Some(tokio::spawn(async move {
            let mut ticks = interval_at(Instant::now() + period, period);
            loop {
                ticks.tick().await;
                let tagged = Tagged {
                    timer,
                    generation,
                    message: message.clone(),
                };
                if tx.send(tagged).is_err() {
                    break;
                }
            }
        }));
    }

    /// Stops the ticker. Ticks already queued become stale.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            trace!(ticker = %self.id, "Ticker stopped");
        }
        self.generation += 1;
    }

    /// Whether `tagged` came from the current run of this ticker.
    pub fn accepts(&self, tagged: &Tagged<M>) -> bool {
        tagged.timer == self.id && tagged.generation == self.generation && self.task.is_some()
    }
}

impl<M> Drop for Ticker<M> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
