//! Tests for cancellable timers.

use std::time::Duration;

use senipy::{Ticker, TimerSlot};
use tokio::sync::mpsc;
use tokio::time::{Instant, sleep, timeout};

#[tokio::test(start_paused = true)]
async fn test_slot_fires_after_delay() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut slot = TimerSlot::new(tx);
    let start = Instant::now();

    slot.schedule("flip back", Duration::from_millis(1000));
    assert!(slot.is_pending());

    let tagged = rx.recv().await.expect("Timer fired");
    assert!(slot.accepts(&tagged));
    assert_eq!(*tagged.message(), "flip back");
    assert!(start.elapsed() >= Duration::from_millis(1000));
}

#[tokio::test(start_paused = true)]
async fn test_reschedule_cancels_earlier_task() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut slot = TimerSlot::new(tx);

    slot.schedule("first", Duration::from_millis(100));
    slot.schedule("second", Duration::from_millis(500));

    let tagged = rx.recv().await.expect("Timer fired");
    assert_eq!(tagged.into_message(), "second");

    let nothing = timeout(Duration::from_secs(5), rx.recv()).await;
    assert!(nothing.is_err(), "The first task must never fire");
}

#[tokio::test(start_paused = true)]
async fn test_dropping_slot_cancels_task() {
    let (tx, mut rx) = mpsc::unbounded_channel::<senipy::Tagged<&str>>();
    let mut slot = TimerSlot::new(tx);
    slot.schedule("never", Duration::from_millis(100));
    drop(slot);

    // Every sender is gone once the aborted task is torn down.
    assert!(rx.recv().await.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_queued_message_goes_stale_on_cancel() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut slot = TimerSlot::new(tx);
    slot.schedule("late", Duration::from_millis(100));

    sleep(Duration::from_millis(200)).await;
    slot.cancel();

    let tagged = rx.recv().await.expect("Message was already queued");
    assert!(!slot.accepts(&tagged));
}

#[tokio::test(start_paused = true)]
async fn test_slots_do_not_accept_each_other() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut a = TimerSlot::new(tx.clone());
    let b = TimerSlot::<&str>::new(tx);
    assert_ne!(a.id(), b.id());

    a.schedule("mine", Duration::from_millis(10));
    let tagged = rx.recv().await.expect("Timer fired");
    assert!(a.accepts(&tagged));
    assert!(!b.accepts(&tagged));
}

#[tokio::test(start_paused = true)]
async fn test_ticker_ticks_every_period() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut ticker = Ticker::new(tx);
    let start = Instant::now();

    ticker.start("tick", Duration::from_secs(1));
    for _ in 0..3 {
        let tagged = rx.recv().await.expect("Tick");
        assert!(ticker.accepts(&tagged));
    }
    assert!(start.elapsed() >= Duration::from_secs(3));
    assert!(start.elapsed() < Duration::from_secs(4));

    ticker.stop();
    assert!(!ticker.is_running());
    let nothing = timeout(Duration::from_secs(5), rx.recv()).await;
    assert!(nothing.is_err(), "Stopped ticker must stay quiet");
}

#[tokio::test(start_paused = true)]
async fn test_restarted_ticker_rejects_old_ticks() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut ticker = Ticker::new(tx);
    ticker.start(1u32, Duration::from_millis(100));

    sleep(Duration::from_millis(150)).await;
    ticker.start(2u32, Duration::from_millis(100));

    let old = rx.recv().await.expect("Queued tick");
    assert_eq!(*old.message(), 1);
    assert!(!ticker.accepts(&old));

    let fresh = rx.recv().await.expect("New tick");
    assert_eq!(*fresh.message(), 2);
    assert!(ticker.accepts(&fresh));
}
