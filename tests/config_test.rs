//! Tests for config loading.

use std::path::PathBuf;
use std::time::Duration;

use senipy::SenipyConfig;
use senipy_effects::{RevealDirection, RevealUnit, ShinePreset};

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config =
        SenipyConfig::load(&dir.path().join("senipy.toml")).expect("Missing file is fine");

    assert_eq!(config.ui.tick_rate(), Duration::from_millis(100));
    assert_eq!(config.ui.log_file, PathBuf::from("senipy.log"));
    assert!(!config.ui.reduced_motion);
    assert_eq!(config.effects.reveal_step_ms, 350);
    assert_eq!(config.effects.shine_preset, ShinePreset::Hero);
    assert_eq!(
        config.effects.cycler_words,
        ["Memory", "Focus", "Logic", "Knowledge", "Wisdom"]
    );
    assert_eq!(config.download.dir, PathBuf::from("."));
}

#[test]
fn test_partial_file_overrides_some_values() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("senipy.toml");
    std::fs::write(
        &path,
        r#"
[ui]
reduced_motion = true

[effects]
reveal_unit = "letters"
reveal_direction = "bottom"
cycler_words = ["Focus", "Recall"]

[effects.orb]
hue = 120.0

[download]
dir = "downloads"
"#,
    )
    .expect("Failed to write config");

    let config = SenipyConfig::load(&path).expect("Failed to load config");
    assert!(config.ui.reduced_motion);
    assert_eq!(config.ui.tick_rate_ms, 100);
    assert_eq!(config.effects.reveal_unit, RevealUnit::Letters);
    assert_eq!(config.effects.reveal_direction, RevealDirection::Bottom);
    assert_eq!(config.effects.cycler_words, ["Focus", "Recall"]);
    assert_eq!(config.effects.orb.hue, 120.0);
    assert_eq!(config.effects.orb.hover_intensity, 0.2);
    assert_eq!(config.download.dir, PathBuf::from("downloads"));
}

#[test]
fn test_invalid_toml_is_an_error() {
    let err = SenipyConfig::from_toml("[ui\ntick_rate_ms = ").expect_err("Broken TOML");
    assert!(err.to_string().starts_with("Config error: Failed to parse config"));

    let err = SenipyConfig::from_toml("[effects]\nreveal_unit = \"paragraphs\"")
        .expect_err("Unknown unit");
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_from_file_requires_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let err = SenipyConfig::from_file(&dir.path().join("absent.toml")).expect_err("No file");
    assert!(err.message.starts_with("Failed to read"));
}

#[test]
fn test_effect_builders_use_config() {
    let config = SenipyConfig::from_toml(
        r#"
[effects]
reveal_delay_ms = 0
reveal_step_ms = 100
cycler_interval_ms = 500
"#,
    )
    .expect("Valid config");

    let settings = config.effects.reveal_settings().expect("Valid reveal");
    assert_eq!(*settings.delay(), Duration::ZERO);
    assert_eq!(*settings.step(), Duration::from_millis(100));

    let cycler = config.effects.cycler().expect("Valid cycler");
    assert_eq!(cycler.interval(), Duration::from_millis(500));
    assert_eq!(cycler.current(), "Memory");

    config.effects.shine("SENIPY").expect("Valid shine");
}

#[test]
fn test_effect_builders_reject_bad_values() {
    let config = SenipyConfig::from_toml(
        r#"
[effects]
reveal_step_ms = 0
shine_speed_ms = 0
cycler_words = []
"#,
    )
    .expect("Parses fine");

    assert!(config.effects.reveal_settings().is_err());
    assert!(config.effects.shine("SENIPY").is_err());
    assert!(config.effects.cycler().is_err());
}
