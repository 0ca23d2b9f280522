//! Tests for the menu showcase effects.

use std::time::Duration;

use senipy::{SenipyConfig, Showcase};

#[test]
fn test_tagline_completion_reported_once() {
    let mut showcase = Showcase::new(&SenipyConfig::default()).expect("Default effects are valid");
    assert!(!showcase.poll_tagline(Duration::from_secs(60)), "Not shown yet");

    let shown = Duration::from_millis(500);
    showcase.show_tagline(shown);
    let done = shown + showcase.tagline().completion_delay();
    assert_eq!(showcase.tagline().completes_at(), Some(done));

    assert!(!showcase.poll_tagline(done - Duration::from_millis(1)));
    assert!(!showcase.is_tagline_done());

    assert!(showcase.poll_tagline(done));
    assert!(showcase.is_tagline_done());
    assert!(!showcase.poll_tagline(done + Duration::from_secs(1)));
    assert!(showcase.is_tagline_done());
}

#[test]
fn test_reduced_motion_still_reveals_tagline() {
    let config = SenipyConfig::from_toml("[ui]\nreduced_motion = true").expect("Valid config");
    let mut showcase = Showcase::new(&config).expect("Valid effects");
    assert!(showcase.logo().is_reduced_motion());

    showcase.show_tagline(Duration::ZERO);
    assert!(showcase.poll_tagline(Duration::from_secs(10)));
}
