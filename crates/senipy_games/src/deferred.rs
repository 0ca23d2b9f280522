//! Deferred transitions requested by game state machines.
//!
//! Games never wait. A transition that should happen "after a moment"
//! (flip a mismatched pair back, show the next question) is returned to the
//! caller as a [`Deferred`] carrying the event to deliver and the delay to
//! wait first. Delivering the event is done through [`Scheduled::fire`].

use std::fmt::Debug;
use std::time::Duration;

use derive_getters::Getters;

use crate::Feedback;

/// A request to deliver `event` back to the game after `delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct Deferred<E> {
    /// Event to deliver when the delay elapses.
    event: E,
    /// How long to wait before delivering.
    delay: Duration,
}

impl<E> Deferred<E> {
    /// Creates a new deferred request.
    pub fn new(event: E, delay: Duration) -> Self {
        Self { event, delay }
    }
}

/// Feedback for a player action plus an optional follow-up transition.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Reaction<E> {
    /// Message to show the player.
    feedback: Feedback,
    /// Transition the host should schedule, if any.
    follow_up: Option<Deferred<E>>,
}

impl<E> Reaction<E> {
    /// Feedback with no follow-up.
    pub fn immediate(feedback: Feedback) -> Self {
        Self {
            feedback,
            follow_up: None,
        }
    }

    /// Feedback followed by a deferred transition.
    pub fn then(feedback: Feedback, follow_up: Deferred<E>) -> Self {
        Self {
            feedback,
            follow_up: Some(follow_up),
        }
    }

    /// Splits the reaction into its parts.
    pub fn into_parts(self) -> (Feedback, Option<Deferred<E>>) {
        (self.feedback, self.follow_up)
    }
}

/// A game that accepts deferred events.
///
/// Hosts hold on to the [`Deferred`] values a game hands out and call
/// [`Scheduled::fire`] once the delay has elapsed. Events that arrive after
/// the game has moved on are ignored by the game itself.
pub trait Scheduled {
    /// The event type this game schedules.
    type Event: Copy + Debug + Send + 'static;

    /// Delivers a previously requested event.
    fn fire(&mut self, event: Self::Event);
}
