//! Tests for the email verification session.

use senipy::{
    CHECK_DELAY, CODE_LENGTH, DEMO_CODE, Notice, VerificationError, VerificationEvent,
    VerificationPhase, VerificationSession,
};
use senipy_games::Scheduled;

fn session() -> VerificationSession {
    VerificationSession::new("ada@example.com")
}

#[test]
fn test_new_session_is_entering() {
    let session = session();
    assert_eq!(session.email(), "ada@example.com");
    assert_eq!(session.phase(), VerificationPhase::Entering);
    assert_eq!(session.code(), "");
    assert_eq!(session.attempts(), 0);
    assert!(session.notice().is_none());
    assert!(!session.can_submit());
}

#[test]
fn test_wrong_length_refused_immediately() {
    let mut session = session();
    let err = session.submit_code("12345").expect_err("Too short");
    assert_eq!(err, VerificationError::WrongLength(5));
    assert_eq!(session.phase(), VerificationPhase::Entering);
    assert_eq!(session.attempts(), 0);

    let err = session.submit_code("").expect_err("Empty");
    assert_eq!(err, VerificationError::WrongLength(0));
}

#[test]
fn test_submit_requests_delayed_check() {
    let mut session = session();
    let deferred = session.submit_code(DEMO_CODE).expect("Valid length");
    assert_eq!(*deferred.event(), VerificationEvent::FinishCheck);
    assert_eq!(*deferred.delay(), CHECK_DELAY);
    assert!(session.is_verifying());
    assert_eq!(session.attempts(), 1);
}

#[test]
fn test_demo_code_verifies() {
    let mut session = session();
    session.submit_code("123456").expect("Valid length");
    session.fire(VerificationEvent::FinishCheck);
    assert!(session.is_verified());
    assert_eq!(
        session.submit_code(DEMO_CODE),
        Err(VerificationError::AlreadyVerified)
    );
}

#[test]
fn test_wrong_code_rejected_and_retry_allowed() {
    let mut session = session();
    session.submit_code("abcdef").expect("Valid length");
    session.fire(VerificationEvent::FinishCheck);
    assert_eq!(session.phase(), VerificationPhase::Entering);
    assert_eq!(session.notice(), Some(Notice::Rejected));

    session.submit_code(DEMO_CODE).expect("Retry allowed");
    session.fire(VerificationEvent::FinishCheck);
    assert!(session.is_verified());
    assert_eq!(session.attempts(), 2);
}

#[test]
fn test_six_chars_with_whitespace_are_checked_and_rejected() {
    for code in ["12345 ", " 23456", "123 56"] {
        let mut session = session();
        let deferred = session.submit_code(code).expect("Six characters");
        assert_eq!(*deferred.event(), VerificationEvent::FinishCheck);

        session.fire(VerificationEvent::FinishCheck);
        assert!(!session.is_verified(), "{code:?} must not verify");
        assert_eq!(session.notice(), Some(Notice::Rejected));
    }
}

#[test]
fn test_padded_demo_code_has_wrong_length() {
    let mut session = session();
    let err = session.submit_code(" 123456 ").expect_err("Eight characters");
    assert_eq!(err, VerificationError::WrongLength(8));
}

#[test]
fn test_typed_space_counts_toward_code() {
    let mut session = session();
    for c in "12345 ".chars() {
        session.type_char(c);
    }
    assert_eq!(session.code(), "12345 ");
    assert!(session.can_submit());

    session.submit().expect("Six characters");
    session.fire(VerificationEvent::FinishCheck);
    assert_eq!(session.notice(), Some(Notice::Rejected));
}

#[test]
fn test_busy_while_checking() {
    let mut session = session();
    session.submit_code(DEMO_CODE).expect("Valid length");
    assert_eq!(session.resend(), Err(VerificationError::Busy));
    assert_eq!(session.submit(), Err(VerificationError::Busy));
}

#[test]
fn test_busy_while_resending() {
    let mut session = session();
    session.resend().expect("Idle");
    assert_eq!(session.submit_code(DEMO_CODE), Err(VerificationError::Busy));

    session.fire(VerificationEvent::FinishResend);
    assert_eq!(session.notice(), Some(Notice::Resent));
    session.submit_code(DEMO_CODE).expect("Idle again");
}

#[test]
fn test_stale_events_ignored() {
    let mut session = session();
    session.fire(VerificationEvent::FinishCheck);
    session.fire(VerificationEvent::FinishResend);
    assert_eq!(session.phase(), VerificationPhase::Entering);
    assert!(session.notice().is_none());
}

#[test]
fn test_typing_caps_length() {
    let mut session = session();
    for c in "1234567890".chars() {
        session.type_char(c);
    }
    assert_eq!(session.code(), "123456");
    assert_eq!(session.code().len(), CODE_LENGTH);
    assert!(session.can_submit());

    session.backspace();
    assert_eq!(session.code(), "12345");
    assert!(!session.can_submit());
}

#[test]
fn test_editing_clears_rejection() {
    let mut session = session();
    session.submit_code("999999").expect("Valid length");
    session.fire(VerificationEvent::FinishCheck);
    assert_eq!(session.notice(), Some(Notice::Rejected));

    session.backspace();
    assert_eq!(session.code(), "99999");
    assert_eq!(session.notice(), Some(Notice::Rejected));

    session.type_char('1');
    assert!(session.notice().is_none());
}

#[test]
fn test_error_messages() {
    assert_eq!(
        VerificationError::WrongLength(3).to_string(),
        "Verification code must be 6 characters, got 3"
    );
}
