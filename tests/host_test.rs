//! Tests for hosting games with their timers.

use std::time::Duration;

use senipy::{CHECK_DELAY, GameHost, Notice, RESEND_DELAY, Signal, VerificationSession};
use senipy_games::{
    ChallengePhase, FlipOutcome, MemoryEvent, MemoryMatch, MemoryPhase, NumberChallenge,
    RESOLVE_DELAY, ROUND_SECONDS, TICK_INTERVAL, TriviaEvent, TriviaQuiz,
};
use tokio::time::{Instant, timeout};

/// Ids of two cards showing different symbols.
fn mismatched_pair(game: &MemoryMatch) -> (usize, usize) {
    let first = &game.cards()[0];
    let second = game
        .cards()
        .iter()
        .find(|c| c.symbol() != first.symbol())
        .expect("Deck has more than one symbol");
    (first.id(), second.id())
}

#[tokio::test(start_paused = true)]
async fn test_mismatched_pair_flips_back_after_delay() {
    let mut host = GameHost::new(MemoryMatch::with_seed(3));
    let (a, b) = mismatched_pair(host.game());

    host.game_mut().flip(a).expect("First flip");
    let outcome = host.game_mut().flip(b).expect("Second flip");
    let FlipOutcome::PairPending(deferred) = outcome else {
        panic!("Second flip should leave a pair pending");
    };
    assert_eq!(*deferred.delay(), RESOLVE_DELAY);

    let start = Instant::now();
    host.schedule(Some(deferred));
    assert!(host.has_pending());

    let signal = host.wait().await.expect("Host alive");
    assert_eq!(signal, Signal::Fire(MemoryEvent::ResolvePair));
    assert!(start.elapsed() >= RESOLVE_DELAY);

    let game = host.game();
    assert_eq!(game.phase(), MemoryPhase::Idle);
    assert_eq!(game.moves(), 1);
    assert!(!game.card(a).expect("Card a").is_flipped());
    assert!(!game.card(b).expect("Card b").is_flipped());
}

#[tokio::test(start_paused = true)]
async fn test_reset_cancels_pending_transition() {
    let mut host = GameHost::new(MemoryMatch::with_seed(3));
    let (a, b) = mismatched_pair(host.game());
    host.game_mut().flip(a).expect("First flip");
    if let Ok(FlipOutcome::PairPending(deferred)) = host.game_mut().flip(b) {
        host.schedule(Some(deferred));
    }

    host.reset(MemoryMatch::with_seed(4));
    assert!(!host.has_pending());

    let nothing = timeout(RESOLVE_DELAY * 3, host.wait()).await;
    assert!(nothing.is_err(), "Old game's timer must not reach the new game");
    assert_eq!(host.game().moves(), 0);
    assert_eq!(host.game().phase(), MemoryPhase::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_pump_without_signals_is_a_no_op() {
    let mut host = GameHost::new(TriviaQuiz::with_seed(1));
    assert_eq!(host.pump(), 0);
    assert_eq!(host.game().question_number(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_pump_applies_arrived_events() {
    let mut host = GameHost::new(TriviaQuiz::with_seed(1));
    let reaction = host.game_mut().answer(0).expect("Question open");
    host.schedule(*reaction.follow_up());

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(host.pump(), 0);
    assert_eq!(host.game().question_number(), 2);
    assert!(!host.game().is_answered());
}

#[tokio::test(start_paused = true)]
async fn test_trivia_advances_via_wait() {
    let mut host = GameHost::new(TriviaQuiz::with_seed(9));
    let reaction = host.game_mut().answer(2).expect("Question open");
    host.schedule(*reaction.follow_up());

    let signal = host.wait().await.expect("Host alive");
    assert_eq!(signal, Signal::Fire(TriviaEvent::Advance));
    assert_eq!(host.game().question_number(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_number_challenge_runs_down_clock() {
    let mut host = GameHost::new(NumberChallenge::with_seed(5));
    host.game_mut().start();
    host.start_ticker(TICK_INTERVAL);
    assert!(host.is_ticking());

    let mut time_up = None;
    for _ in 0..ROUND_SECONDS {
        let signal = host.wait().await.expect("Host alive");
        assert_eq!(signal, Signal::Tick);
        time_up = host.game_mut().tick();
    }

    assert!(time_up.is_some(), "Last tick ends the round");
    assert_eq!(host.game().time_left(), 0);
    assert_eq!(host.game().phase(), ChallengePhase::Finished);

    host.cancel_all();
    assert!(!host.is_ticking());
}

#[tokio::test(start_paused = true)]
async fn test_stopped_ticker_delivers_nothing() {
    let mut host = GameHost::new(NumberChallenge::with_seed(5));
    host.game_mut().start();
    host.start_ticker(TICK_INTERVAL);
    host.wait().await.expect("First tick");
    host.stop_ticker();

    let nothing = timeout(TICK_INTERVAL * 5, host.wait()).await;
    assert!(nothing.is_err());
}

#[tokio::test(start_paused = true)]
async fn test_demo_code_verifies_after_check_delay() {
    let mut host = GameHost::new(VerificationSession::new("ada@example.com"));
    let check = host.game_mut().submit_code("123456").expect("Valid length");
    assert!(host.game().is_verifying());

    let start = Instant::now();
    host.schedule(Some(check));
    host.wait().await.expect("Host alive");

    assert!(start.elapsed() >= CHECK_DELAY);
    assert!(host.game().is_verified());
}

#[tokio::test(start_paused = true)]
async fn test_other_code_is_rejected_after_check_delay() {
    let mut host = GameHost::new(VerificationSession::new("ada@example.com"));
    let check = host.game_mut().submit_code("654321").expect("Valid length");
    host.schedule(Some(check));
    host.wait().await.expect("Host alive");

    let session = host.game();
    assert!(!session.is_verified());
    assert!(!session.is_verifying());
    assert_eq!(session.notice(), Some(Notice::Rejected));
    assert_eq!(
        Notice::Rejected.to_string(),
        "Invalid verification code. Please try again."
    );
}

#[tokio::test(start_paused = true)]
async fn test_resend_reports_after_delay() {
    let mut host = GameHost::new(VerificationSession::new("ada@example.com"));
    let resend = host.game_mut().resend().expect("Idle session");
    assert!(host.game().is_resending());

    let start = Instant::now();
    host.schedule(Some(resend));
    host.wait().await.expect("Host alive");

    assert!(start.elapsed() >= RESEND_DELAY);
    assert!(!host.game().is_resending());
    assert_eq!(host.game().notice(), Some(Notice::Resent));
    assert_eq!(
        Notice::Resent.to_string(),
        "Verification code resent to your email!"
    );
}
