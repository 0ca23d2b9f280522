//! Mock email verification.
//!
//! There is no backend: the only code that ever verifies is [`DEMO_CODE`].
//! Checking and resending both take a moment, so each returns a
//! [`Deferred`] that the host delivers back through [`Scheduled::fire`].
//! Only one of the two can be in flight at a time.

use std::time::Duration;

use derive_more::{Display, Error};
use senipy_games::{Deferred, Scheduled};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// The one code that verifies.
pub const DEMO_CODE: &str = "123456";

/// Required code length.
pub const CODE_LENGTH: usize = 6;

/// How long a check takes.
pub const CHECK_DELAY: Duration = Duration::from_millis(1500);

/// How long a resend takes.
pub const RESEND_DELAY: Duration = Duration::from_millis(1000);

/// Event delivered when a check or resend finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerificationEvent {
    /// Compare the submitted code.
    FinishCheck,
    /// The resend request completed.
    FinishResend,
}

/// Where the session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VerificationPhase {
    /// Waiting for the user to enter a code.
    Entering,
    /// A check is in flight.
    Verifying,
    /// The demo code was accepted.
    Verified,
}

/// Message shown under the code field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Notice {
    /// The code was checked and rejected.
    #[display("Invalid verification code. Please try again.")]
    Rejected,
    /// A new code was "sent".
    #[display("Verification code resent to your email!")]
    Resent,
}

/// Requests the session refuses outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum VerificationError {
    /// The code is not exactly [`CODE_LENGTH`] characters.
    #[display("Verification code must be {CODE_LENGTH} characters, got {_0}")]
    WrongLength(#[error(not(source))] usize),
    /// A check or resend is already in flight.
    #[display("Please wait for the current request to finish")]
    Busy,
    /// The session is already verified.
    #[display("Email already verified")]
    AlreadyVerified,
}

/// One verification dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationSession {
    email: String,
    code: String,
    phase: VerificationPhase,
    resending: bool,
    attempts: u32,
    notice: Option<Notice>,
}

impl VerificationSession {
    /// Opens a dialog for `email`.
    #[instrument]
    pub fn new(email: &str) -> Self {
        info!("Verification started");
        Self {
            email: email.to_string(),
            code: String::new(),
            phase: VerificationPhase::Entering,
            resending: false,
            attempts: 0,
            notice: None,
        }
    }

    /// Address the code was "sent" to.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Code typed so far.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Current phase.
    pub fn phase(&self) -> VerificationPhase {
        self.phase
    }

    /// Whether the demo code was accepted.
    pub fn is_verified(&self) -> bool {
        self.phase == VerificationPhase::Verified
    }

    /// Whether a check is in flight.
    pub fn is_verifying(&self) -> bool {
        self.phase == VerificationPhase::Verifying
    }

    /// Whether a resend is in flight.
    pub fn is_resending(&self) -> bool {
        self.resending
    }

    /// Checks submitted so far.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Message to show, if any.
    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    /// Whether the submit action should be enabled.
    pub fn can_submit(&self) -> bool {
        self.phase == VerificationPhase::Entering
            && !self.resending
            && self.code.chars().count() == CODE_LENGTH
    }

    /// Appends a character, up to [`CODE_LENGTH`]. Editing clears a
    /// rejection notice.
    pub fn type_char(&mut self, c: char) {
        if self.phase != VerificationPhase::Entering
            || c.is_control()
            || self.code.chars().count() >= CODE_LENGTH
        {
            return;
        }
        self.code.push(c);
        if self.notice == Some(Notice::Rejected) {
            self.notice = None;
        }
    }

    /// Removes the last character.
    pub fn backspace(&mut self) {
        if self.phase == VerificationPhase::Entering {
            self.code.pop();
        }
    }

    /// Convenience: replaces the code and submits it. The code is checked
    /// exactly as given, whitespace included.
    ///
    /// # Errors
    ///
    /// See [`VerificationSession::submit`].
    pub fn submit_code(
        &mut self,
        code: &str,
    ) -> Result<Deferred<VerificationEvent>, VerificationError> {
        if self.phase == VerificationPhase::Entering {
            self.code = code.to_string();
        }
        self.submit()
    }

    /// Starts checking the typed code.
    ///
    /// # Errors
    ///
    /// Refuses codes of the wrong length immediately, and any submit while
    /// a request is in flight or after verification.
    #[instrument(skip(self), fields(attempts = self.attempts))]
    pub fn submit(&mut self) -> Result<Deferred<VerificationEvent>, VerificationError> {
        self.ensure_idle()?;
        let len = self.code.chars().count();
        if len != CODE_LENGTH {
            warn!(len, "Verification code has wrong length");
            return Err(VerificationError::WrongLength(len));
        }
        self.phase = VerificationPhase::Verifying;
        self.attempts += 1;
        self.notice = None;
        debug!("Verifying code");
        Ok(Deferred::new(VerificationEvent::FinishCheck, CHECK_DELAY))
    }

    /// Asks for the code to be sent again.
    ///
    /// # Errors
    ///
    /// Refused while a request is in flight or after verification.
    #[instrument(skip(self))]
    pub fn resend(&mut self) -> Result<Deferred<VerificationEvent>, VerificationError> {
        self.ensure_idle()?;
        self.resending = true;
        self.notice = None;
        debug!("Resending code");
        Ok(Deferred::new(VerificationEvent::FinishResend, RESEND_DELAY))
    }

    fn ensure_idle(&self) -> Result<(), VerificationError> {
        match self.phase {
            VerificationPhase::Verified => Err(VerificationError::AlreadyVerified),
            VerificationPhase::Verifying => Err(VerificationError::Busy),
            VerificationPhase::Entering if self.resending => Err(VerificationError::Busy),
            VerificationPhase::Entering => Ok(()),
        }
    }
}

impl Scheduled for VerificationSession {
    type Event = VerificationEvent;

    fn fire(&mut self, event: VerificationEvent) {
        match event {
            VerificationEvent::FinishCheck if self.is_verifying() => {
                if self.code == DEMO_CODE {
                    self.phase = VerificationPhase::Verified;
                    info!(attempts = self.attempts, "Email verified");
                } else {
                    self.phase = VerificationPhase::Entering;
                    self.notice = Some(Notice::Rejected);
                    warn!(attempts = self.attempts, "Verification code rejected");
                }
            }
            VerificationEvent::FinishResend if self.resending => {
                self.resending = false;
                self.notice = Some(Notice::Resent);
                info!("Verification code resent");
            }
            event => debug!(?event, "Stale verification event ignored"),
        }
    }
}
