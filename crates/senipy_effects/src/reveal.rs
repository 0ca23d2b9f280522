//! Progressive text reveal.
//!
//! Text is split into words or letters. Nothing animates until the text is
//! first seen; from then on segment `i` starts `i × delay` later and runs a
//! three-keyframe animation lasting `step`:
//!
//! | keyframe | blur | opacity | offset          |
//! |----------|------|---------|-----------------|
//! | 0%       | 10   | 0.0     | -50 (top) / +50 |
//! | 50%      | 5    | 0.5     | +5 (top) / -5   |
//! | 100%     | 0    | 1.0     | 0               |

use std::time::Duration;

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};
use unicode_width::UnicodeWidthStr;

use crate::easing::{ease_out, lerp, progress};
use crate::error::{EffectError, require_positive};

/// Default stagger between segments.
pub const DEFAULT_REVEAL_DELAY: Duration = Duration::from_millis(200);

/// Default duration of one segment's animation.
pub const DEFAULT_REVEAL_STEP: Duration = Duration::from_millis(350);

/// How the text is split into segments.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RevealUnit {
    /// Split on single spaces.
    #[default]
    Words,
    /// One segment per character.
    Letters,
}

/// Which side segments slide in from.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RevealDirection {
    /// Drop in from above.
    #[default]
    Top,
    /// Rise from below.
    Bottom,
}

/// Visual state of one segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentStyle {
    /// Blur radius.
    pub blur: f32,
    /// Opacity in `0..=1`.
    pub opacity: f32,
    /// Vertical offset; negative is up.
    pub offset: f32,
}

impl SegmentStyle {
    /// Fully revealed.
    pub const VISIBLE: SegmentStyle = SegmentStyle {
        blur: 0.0,
        opacity: 1.0,
        offset: 0.0,
    };

    /// The starting keyframe for `direction`.
    pub fn hidden(direction: RevealDirection) -> Self {
        let offset = match direction {
            RevealDirection::Top => -50.0,
            RevealDirection::Bottom => 50.0,
        };
        Self {
            blur: 10.0,
            opacity: 0.0,
            offset,
        }
    }

    fn halfway(direction: RevealDirection) -> Self {
        let offset = match direction {
            RevealDirection::Top => 5.0,
            RevealDirection::Bottom => -5.0,
        };
        Self {
            blur: 5.0,
            opacity: 0.5,
            offset,
        }
    }

    fn between(from: Self, to: Self, t: f32) -> Self {
        Self {
            blur: lerp(from.blur, to.blur, t),
            opacity: lerp(from.opacity, to.opacity, t),
            offset: lerp(from.offset, to.offset, t),
        }
    }
}

/// Reveal parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct RevealSettings {
    unit: RevealUnit,
    direction: RevealDirection,
    delay: Duration,
    step: Duration,
}

impl RevealSettings {
    /// Builds settings, rejecting a zero step.
    ///
    /// # Errors
    ///
    /// Returns an [`EffectError`] if `step` is zero.
    #[instrument]
    pub fn new(
        unit: RevealUnit,
        direction: RevealDirection,
        delay: Duration,
        step: Duration,
    ) -> Result<Self, EffectError> {
        Ok(Self {
            unit,
            direction,
            delay,
            step: require_positive("Reveal step", step)?,
        })
    }
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self {
            unit: RevealUnit::Words,
            direction: RevealDirection::Top,
            delay: DEFAULT_REVEAL_DELAY,
            step: DEFAULT_REVEAL_STEP,
        }
    }
}

/// A block of text that reveals itself once it comes into view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextReveal {
    segments: Vec<String>,
    settings: RevealSettings,
    entered_at: Option<Duration>,
    completion_reported: bool,
}

impl TextReveal {
    /// Splits `text` according to `settings`.
    #[instrument(skip(text), fields(len = text.len()))]
    pub fn new(text: &str, settings: RevealSettings) -> Self {
        let segments: Vec<String> = match settings.unit {
            RevealUnit::Words => text.split(' ').map(str::to_string).collect(),
            RevealUnit::Letters => text.chars().map(String::from).collect(),
        };
        debug!(segments = segments.len(), unit = %settings.unit, "Text reveal prepared");
        Self {
            segments,
            settings,
            entered_at: None,
            completion_reported: false,
        }
    }

    /// The segments in display order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The settings in use.
    pub fn settings(&self) -> &RevealSettings {
        &self.settings
    }

    /// Terminal columns needed to draw the text on one line.
    pub fn display_width(&self) -> usize {
        let glyphs: usize = self.segments.iter().map(|s| s.width()).sum();
        match self.settings.unit {
            RevealUnit::Words => glyphs + self.segments.len().saturating_sub(1),
            RevealUnit::Letters => glyphs,
        }
    }

    /// Whether the text has been seen.
    pub fn is_in_view(&self) -> bool {
        self.entered_at.is_some()
    }

    /// When the text was first seen.
    pub fn entered_at(&self) -> Option<Duration> {
        self.entered_at
    }

    /// Reports a visibility observation made at `at`.
    ///
    /// The first intersecting observation latches the reveal and returns
    /// true. Every later observation, intersecting or not, is ignored.
    #[instrument(skip(self))]
    pub fn observe(&mut self, intersecting: bool, at: Duration) -> bool {
        if self.entered_at.is_some() || !intersecting {
            return false;
        }
        self.entered_at = Some(at);
        info!(segments = self.segments.len(), "Text reveal started");
        true
    }

    /// Offset of segment `index` from the moment the text was seen.
    pub fn segment_start(&self, index: usize) -> Duration {
        self.settings.delay * index as u32
    }

    /// Time from entering view until the last segment finishes:
    /// `(n - 1) × delay + step`.
    pub fn completion_delay(&self) -> Duration {
        self.segment_start(self.segments.len().saturating_sub(1)) + self.settings.step
    }

    /// Absolute time at which the reveal completes, once in view.
    pub fn completes_at(&self) -> Option<Duration> {
        self.entered_at.map(|at| at + self.completion_delay())
    }

    /// Whether every segment has finished animating at `now`.
    pub fn is_complete(&self, now: Duration) -> bool {
        self.completes_at().is_some_and(|done| now >= done)
    }

    /// Reports completion exactly once.
    ///
    /// Returns true on the first call at or after [`TextReveal::completes_at`];
    /// every other call returns false.
    #[instrument(skip(self))]
    pub fn take_completion(&mut self, now: Duration) -> bool {
        if self.completion_reported || !self.is_complete(now) {
            return false;
        }
        self.completion_reported = true;
        info!(segments = self.segments.len(), "Text reveal complete");
        true
    }

    /// Style of segment `index` at `now`.
    pub fn style(&self, index: usize, now: Duration) -> SegmentStyle {
        let direction = self.settings.direction;
        let Some(entered) = self.entered_at else {
            return SegmentStyle::hidden(direction);
        };
        let start = entered + self.segment_start(index);
        let Some(elapsed) = now.checked_sub(start) else {
            return SegmentStyle::hidden(direction);
        };

        let p = progress(elapsed, self.settings.step);
        if p >= 1.0 {
            SegmentStyle::VISIBLE
        } else if p < 0.5 {
            SegmentStyle::between(
                SegmentStyle::hidden(direction),
                SegmentStyle::halfway(direction),
                ease_out(p * 2.0),
            )
        } else {
            SegmentStyle::between(
                SegmentStyle::halfway(direction),
                SegmentStyle::VISIBLE,
                ease_out((p - 0.5) * 2.0),
            )
        }
    }

    /// Every segment paired with its style at `now`.
    pub fn frame(&self, now: Duration) -> Vec<(&str, SegmentStyle)> {
        self.segments
            .iter()
            .enumerate()
            .map(|(i, s)| (s.as_str(), self.style(i, now)))
            .collect()
    }
}
