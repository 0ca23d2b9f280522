//! Animated SENIPY logo.
//!
//! Three independent infinite cycles start [`LOGO_START_DELAY`] after the
//! logo is mounted: the underline path draws in and out, the word floats
//! up and down, and the glow pulses. Each cycle alternates direction with
//! an ease-in-out curve.

use std::time::Duration;

use tracing::instrument;

use crate::easing::{alternate, ease_in_out, lerp};

/// Delay between mounting the logo and starting its animations.
pub const LOGO_START_DELAY: Duration = Duration::from_millis(500);

/// One pass of the path drawing in.
pub const PATH_PERIOD: Duration = Duration::from_secs(6);

/// One float from top to bottom.
pub const FLOAT_PERIOD: Duration = Duration::from_secs(3);

/// One glow pulse.
pub const GLOW_PERIOD: Duration = Duration::from_secs(4);

/// How far the word floats either side of rest, in pixels.
const FLOAT_AMPLITUDE: f32 = 8.0;

/// Logo state for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogoFrame {
    /// Fraction of the underline drawn, `0..=1`.
    pub path_drawn: f32,
    /// Underline opacity.
    pub path_opacity: f32,
    /// Vertical float offset in pixels; negative is up.
    pub float_offset: f32,
    /// Glow radius in pixels.
    pub glow_radius: f32,
    /// Text gradient position in percent.
    pub gradient_position: f32,
}

impl LogoFrame {
    /// The logo before its animations start, or with motion reduced.
    pub const STATIC: LogoFrame = LogoFrame {
        path_drawn: 1.0,
        path_opacity: 0.8,
        float_offset: 0.0,
        glow_radius: 5.0,
        gradient_position: 0.0,
    };
}

/// The animated logo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnimatedLogo {
    reduced_motion: bool,
}

impl AnimatedLogo {
    /// A logo that animates.
    pub fn new() -> Self {
        Self::default()
    }

    /// A logo that never animates.
    pub fn with_reduced_motion() -> Self {
        Self {
            reduced_motion: true,
        }
    }

    /// Whether motion is suppressed.
    pub fn is_reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    /// Whether the animations are running `since_mount` after mounting.
    pub fn is_started(&self, since_mount: Duration) -> bool {
        !self.reduced_motion && since_mount >= LOGO_START_DELAY
    }

    /// The frame to draw `since_mount` after mounting.
    #[instrument(skip(self))]
    pub fn frame(&self, since_mount: Duration) -> LogoFrame {
        if !self.is_started(since_mount) {
            return LogoFrame::STATIC;
        }
        let t = since_mount - LOGO_START_DELAY;

        let draw = ease_in_out(alternate(t, PATH_PERIOD));
        let path_opacity = if draw < 0.5 {
            lerp(0.3, 1.0, draw * 2.0)
        } else {
            lerp(1.0, 0.8, (draw - 0.5) * 2.0)
        };

        let float = ease_in_out(alternate(t, FLOAT_PERIOD));

        // Glow peaks halfway through each pass.
        let glow = ease_in_out(alternate(t, GLOW_PERIOD));
        let pulse = 1.0 - (2.0 * glow - 1.0).abs();

        LogoFrame {
            path_drawn: draw,
            path_opacity,
            float_offset: lerp(-FLOAT_AMPLITUDE, FLOAT_AMPLITUDE, float),
            glow_radius: lerp(5.0, 25.0, pulse),
            gradient_position: lerp(0.0, 100.0, pulse),
        }
    }
}
