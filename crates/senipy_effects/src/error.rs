//! Effect construction errors.

use std::time::Duration;

use derive_more::{Display, Error};
use tracing::{instrument, warn};

/// Rejected effect settings, with the location that rejected them.
#[derive(Debug, Clone, Display, Error)]
#[display("Effect error: {} at {}:{}", message, file, line)]
pub struct EffectError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl EffectError {
    /// Creates a new effect error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        let message = message.into();
        warn!(error_message = %message, "Effect settings rejected");
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Returns `duration` unchanged, or an error naming `what` if it is zero.
#[track_caller]
pub(crate) fn require_positive(what: &str, duration: Duration) -> Result<Duration, EffectError> {
    if duration.is_zero() {
        return Err(EffectError::new(format!("{what} must be greater than zero")));
    }
    Ok(duration)
}
