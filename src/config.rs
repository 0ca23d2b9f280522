//! Application configuration loaded from TOML.
//!
//! Every section and key is optional; a missing file yields the defaults.
//!
//! ```toml
//! [ui]
//! tick_rate_ms = 100
//! log_file = "senipy.log"
//!
//! [effects]
//! reveal_delay_ms = 200
//! cycler_words = ["Memory", "Focus"]
//!
//! [effects.orb]
//! hover_intensity = 0.3
//!
//! [download]
//! dir = "downloads"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use derive_more::{Display, Error};
use senipy_effects::{
    EffectError, OrbSettings, RevealDirection, RevealSettings, RevealUnit, ShinePreset, ShineText,
    WordCycler,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Default config file name.
pub const DEFAULT_CONFIG_PATH: &str = "senipy.toml";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SenipyConfig {
    /// Terminal front-end settings.
    pub ui: UiConfig,
    /// Decorative effect settings.
    pub effects: EffectsConfig,
    /// Pseudo-download settings.
    pub download: DownloadConfig,
}

/// Terminal front-end settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// How long the event loop waits for input before redrawing.
    pub tick_rate_ms: u64,
    /// Where the TUI writes its log.
    pub log_file: PathBuf,
    /// Freeze the logo and shine animations.
    pub reduced_motion: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 100,
            log_file: PathBuf::from("senipy.log"),
            reduced_motion: false,
        }
    }
}

impl UiConfig {
    /// Poll timeout for the event loop.
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

/// Decorative effect settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    /// Stagger between revealed segments.
    pub reveal_delay_ms: u64,
    /// Duration of one segment's reveal.
    pub reveal_step_ms: u64,
    /// Words or letters.
    pub reveal_unit: RevealUnit,
    /// Slide in from the top or bottom.
    pub reveal_direction: RevealDirection,
    /// Duration of one shine sweep.
    pub shine_speed_ms: u64,
    /// Shine look for headings.
    pub shine_preset: ShinePreset,
    /// Words the cycler rotates through.
    pub cycler_words: Vec<String>,
    /// Time each cycler word stays up.
    pub cycler_interval_ms: u64,
    /// Orb behaviour.
    pub orb: OrbSettings,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            reveal_delay_ms: 200,
            reveal_step_ms: 350,
            reveal_unit: RevealUnit::Words,
            reveal_direction: RevealDirection::Top,
            shine_speed_ms: 5000,
            shine_preset: ShinePreset::Hero,
            cycler_words: ["Memory", "Focus", "Logic", "Knowledge", "Wisdom"]
                .map(String::from)
                .to_vec(),
            cycler_interval_ms: 2000,
            orb: OrbSettings::default(),
        }
    }
}

impl EffectsConfig {
    /// Reveal settings built from this section.
    ///
    /// # Errors
    ///
    /// Returns an [`EffectError`] if the step is zero.
    #[instrument(skip(self))]
    pub fn reveal_settings(&self) -> Result<RevealSettings, EffectError> {
        RevealSettings::new(
            self.reveal_unit,
            self.reveal_direction,
            Duration::from_millis(self.reveal_delay_ms),
            Duration::from_millis(self.reveal_step_ms),
        )
    }

    /// A shine over `text` using this section's preset and speed.
    ///
    /// # Errors
    ///
    /// Returns an [`EffectError`] if the speed is zero.
    #[instrument(skip(self, text))]
    pub fn shine(&self, text: &str) -> Result<ShineText, EffectError> {
        ShineText::new(
            text,
            self.shine_preset,
            Duration::from_millis(self.shine_speed_ms),
        )
    }

    /// A word cycler over the configured words.
    ///
    /// # Errors
    ///
    /// Returns an [`EffectError`] if the list is empty or the interval zero.
    #[instrument(skip(self))]
    pub fn cycler(&self) -> Result<WordCycler, EffectError> {
        WordCycler::new(
            self.cycler_words.iter().cloned(),
            Duration::from_millis(self.cycler_interval_ms),
        )
    }
}

/// Pseudo-download settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DownloadConfig {
    /// Directory the download is written into.
    pub dir: PathBuf,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
        }
    }
}

impl SenipyConfig {
    /// Parses a config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    #[instrument(fields(path = %path.display()))]
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::new(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&contents)
    }

    /// Parses config from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on invalid TOML or unknown values.
    #[instrument(skip(contents))]
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        debug!(?config, "Parsed config");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file exists but is invalid.
    #[instrument(fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            info!("Loading config file");
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
