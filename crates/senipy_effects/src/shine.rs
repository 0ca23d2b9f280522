//! Shine-sweep text: a bright band slides across the text on a loop.
//!
//! The band lives on a background wider than the text (`background_size`
//! percent of the text width). Its position sweeps linearly from 100% to
//! -100% over `speed`, which moves the band's centre from the left edge
//! to well past the right edge.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::{EffectError, require_positive};

/// Default sweep duration.
pub const DEFAULT_SHINE_SPEED: Duration = Duration::from_secs(5);

/// Named looks for shine text.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ShinePreset {
    /// Neutral white band.
    #[default]
    Plain,
    /// Large headline band.
    Hero,
    /// Feature card titles.
    Feature,
    /// Game card titles.
    Game,
    /// Footer text, narrow and faint.
    Footer,
}

impl ShinePreset {
    /// Background width as a percentage of the text width.
    pub fn background_size(self) -> f32 {
        match self {
            ShinePreset::Plain | ShinePreset::Game => 200.0,
            ShinePreset::Hero => 300.0,
            ShinePreset::Feature => 250.0,
            ShinePreset::Footer => 180.0,
        }
    }

    /// Half the band's width, as a fraction of the background.
    pub fn band_half_width(self) -> f32 {
        match self {
            ShinePreset::Plain | ShinePreset::Footer => 0.10,
            ShinePreset::Feature => 0.15,
            ShinePreset::Hero | ShinePreset::Game => 0.20,
        }
    }

    /// Peak brightness of the band in `0..=1`.
    pub fn peak(self) -> f32 {
        match self {
            ShinePreset::Footer => 0.7,
            ShinePreset::Plain => 0.8,
            ShinePreset::Hero | ShinePreset::Feature | ShinePreset::Game => 0.9,
        }
    }
}

/// Text with a looping shine band.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShineText {
    text: String,
    preset: ShinePreset,
    speed: Duration,
    disabled: bool,
}

impl ShineText {
    /// Creates an enabled shine.
    ///
    /// # Errors
    ///
    /// Returns an [`EffectError`] if `speed` is zero.
    #[instrument(skip(text))]
    pub fn new(
        text: impl Into<String>,
        preset: ShinePreset,
        speed: Duration,
    ) -> Result<Self, EffectError> {
        let speed = require_positive("Shine speed", speed)?;
        Ok(Self {
            text: text.into(),
            preset,
            speed,
            disabled: false,
        })
    }

    /// The text being decorated.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The preset in use.
    pub fn preset(&self) -> ShinePreset {
        self.preset
    }

    /// Duration of one sweep.
    pub fn speed(&self) -> Duration {
        self.speed
    }

    /// Whether the animation is switched off.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Switches the animation on or off.
    pub fn set_disabled(&mut self, disabled: bool) {
        debug!(disabled, "Shine toggled");
        self.disabled = disabled;
    }

    /// Background position in percent at `elapsed`: 100 at the start of
    /// each sweep, -100 at its end. A disabled shine stays at 0.
    pub fn background_position(&self, elapsed: Duration) -> f32 {
        if self.disabled {
            return 0.0;
        }
        let cycle = elapsed.as_secs_f64() / self.speed.as_secs_f64();
        100.0 - 200.0 * cycle.fract() as f32
    }

    /// Centre of the band in text widths (0 is the left edge, 1 the right),
    /// or `None` when disabled.
    pub fn band_center(&self, elapsed: Duration) -> Option<f32> {
        if self.disabled {
            return None;
        }
        let size = self.preset.background_size() / 100.0;
        let offset = (1.0 - size) * self.background_position(elapsed) / 100.0;
        Some(offset + size * 0.5)
    }

    /// Band brightness at `x` (in text widths) at `elapsed`, in `0..=1`.
    pub fn highlight(&self, x: f32, elapsed: Duration) -> f32 {
        let Some(center) = self.band_center(elapsed) else {
            return 0.0;
        };
        let size = self.preset.background_size() / 100.0;
        let half = self.preset.band_half_width() * size;
        let falloff = 1.0 - (x - center).abs() / half;
        falloff.max(0.0) * self.preset.peak()
    }
}
