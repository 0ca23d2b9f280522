//! Floating interactive orb.
//!
//! The orb follows the pointer while hovered: the pointer position inside
//! the orb's bounding box is normalized to `[-1, 1]` on each axis and
//! scaled into a translation. When the pointer leaves, the pointer resets
//! to the centre and the transform eases back to rest over
//! [`RELEASE_DURATION`].

use std::time::Duration;

use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::easing::{ease_out, lerp, progress};

/// How long the orb takes to settle after the pointer leaves.
pub const RELEASE_DURATION: Duration = Duration::from_millis(300);

/// Pixels of travel per unit of normalized pointer position and intensity.
const TRAVEL: f32 = 20.0;

/// Orb behaviour knobs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbSettings {
    /// Hue shift applied to the whole palette, in degrees.
    pub hue: f32,
    /// Scales pointer-driven translation.
    pub hover_intensity: f32,
    /// Tilt 45° while hovered.
    pub rotate_on_hover: bool,
    /// Behave as hovered regardless of the pointer.
    pub force_hover: bool,
}

impl Default for OrbSettings {
    fn default() -> Self {
        Self {
            hue: 0.0,
            hover_intensity: 0.2,
            rotate_on_hover: true,
            force_hover: false,
        }
    }
}

/// The orb's bounding box in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, new)]
pub struct Bounds {
    left: f32,
    top: f32,
    width: f32,
    height: f32,
}

impl Bounds {
    /// Maps a screen point to `[-1, 1]` on each axis, clamped. A degenerate
    /// box maps everything to the centre.
    pub fn normalize(&self, x: f32, y: f32) -> (f32, f32) {
        let axis = |value: f32, origin: f32, extent: f32| {
            if extent <= 0.0 {
                0.0
            } else {
                (((value - origin) / extent - 0.5) * 2.0).clamp(-1.0, 1.0)
            }
        };
        (
            axis(x, self.left, self.width),
            axis(y, self.top, self.height),
        )
    }
}

/// Everything needed to draw the orb for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbTransform {
    /// Horizontal translation in pixels.
    pub translate_x: f32,
    /// Vertical translation in pixels.
    pub translate_y: f32,
    /// Rotation in degrees.
    pub rotate_deg: f32,
    /// Scale of the body.
    pub scale: f32,
    /// Brightness multiplier of the body.
    pub brightness: f32,
    /// Blur of the body in pixels.
    pub blur: f32,
    /// Inner glow opacity.
    pub inner_glow: f32,
    /// Outer glow opacity.
    pub outer_glow: f32,
}

impl OrbTransform {
    /// The orb at rest.
    pub const IDLE: OrbTransform = OrbTransform {
        translate_x: 0.0,
        translate_y: 0.0,
        rotate_deg: 0.0,
        scale: 1.0,
        brightness: 1.0,
        blur: 0.0,
        inner_glow: 0.6,
        outer_glow: 0.2,
    };

    fn between(from: Self, to: Self, t: f32) -> Self {
        Self {
            translate_x: lerp(from.translate_x, to.translate_x, t),
            translate_y: lerp(from.translate_y, to.translate_y, t),
            rotate_deg: lerp(from.rotate_deg, to.rotate_deg, t),
            scale: lerp(from.scale, to.scale, t),
            brightness: lerp(from.brightness, to.brightness, t),
            blur: lerp(from.blur, to.blur, t),
            inner_glow: lerp(from.inner_glow, to.inner_glow, t),
            outer_glow: lerp(from.outer_glow, to.outer_glow, t),
        }
    }
}

/// Pointer-tracking orb.
#[derive(Debug, Clone, PartialEq)]
pub struct Orb {
    settings: OrbSettings,
    hovered: bool,
    pointer: (f32, f32),
    released: Option<(Duration, OrbTransform)>,
}

impl Orb {
    /// Creates an orb at rest.
    #[instrument]
    pub fn new(settings: OrbSettings) -> Self {
        Self {
            settings,
            hovered: false,
            pointer: (0.0, 0.0),
            released: None,
        }
    }

    /// The settings in use.
    pub fn settings(&self) -> &OrbSettings {
        &self.settings
    }

    /// Normalized pointer position.
    pub fn pointer(&self) -> (f32, f32) {
        self.pointer
    }

    /// Whether the orb is reacting, either hovered or forced.
    pub fn is_engaged(&self) -> bool {
        self.settings.force_hover || self.hovered
    }

    /// Pointer entered the bounding box.
    pub fn pointer_enter(&mut self) {
        self.hovered = true;
        self.released = None;
    }

    /// Pointer moved to screen point `(x, y)`. Returns the normalized position.
    pub fn pointer_move(&mut self, x: f32, y: f32, bounds: &Bounds) -> (f32, f32) {
        self.pointer = bounds.normalize(x, y);
        self.pointer
    }

    /// Pointer left at time `at`; the transform starts easing back.
    #[instrument(skip(self))]
    pub fn pointer_leave(&mut self, at: Duration) {
        if !self.hovered {
            return;
        }
        let snapshot = self.engaged_transform();
        self.hovered = false;
        self.pointer = (0.0, 0.0);
        if !self.settings.force_hover {
            self.released = Some((at, snapshot));
        }
        debug!(?at, "Orb released");
    }

    /// The transform to draw at `now`.
    pub fn transform(&self, now: Duration) -> OrbTransform {
        if self.is_engaged() {
            return self.engaged_transform();
        }
        match self.released {
            Some((at, from)) => {
                let t = progress(now.saturating_sub(at), RELEASE_DURATION);
                if t >= 1.0 {
                    return OrbTransform::IDLE;
                }
                OrbTransform::between(from, OrbTransform::IDLE, ease_out(t))
            }
            None => OrbTransform::IDLE,
        }
    }

    /// Hues of the body gradient from centre to rim, shifted by the
    /// configured hue and wrapped to `0..360`.
    pub fn palette(&self) -> [f32; 4] {
        [280.0, 200.0, 240.0, 260.0].map(|base| (self.settings.hue + base).rem_euclid(360.0))
    }

    fn engaged_transform(&self) -> OrbTransform {
        let travel = self.settings.hover_intensity * TRAVEL;
        OrbTransform {
            translate_x: self.pointer.0 * travel,
            translate_y: self.pointer.1 * travel,
            rotate_deg: if self.settings.rotate_on_hover { 45.0 } else { 0.0 },
            scale: 1.1,
            brightness: 1.2,
            blur: 2.0,
            inner_glow: 0.8,
            outer_glow: 0.4,
        }
    }
}
