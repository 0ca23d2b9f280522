//! SENIPY effects - decorative animations as pure functions of time.
//!
//! Every effect here is a plain value. Callers pass in how much time has
//! elapsed and get back what to draw; nothing in this crate owns a clock.
//!
//! - [`TextReveal`] - words or letters blur into view once seen
//! - [`ShineText`] - a bright band sweeps across text on a loop
//! - [`WordCycler`] - rotates through a fixed word list
//! - [`Orb`] - follows the pointer while hovered, eases back on leave
//! - [`AnimatedLogo`] - drawing underline, float and glow cycles

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cycler;
mod easing;
mod error;
mod logo;
mod orb;
mod reveal;
mod shine;

pub use cycler::WordCycler;
pub use easing::{alternate, ease_in_out, ease_out, lerp, progress};
pub use error::EffectError;
pub use logo::{AnimatedLogo, FLOAT_PERIOD, GLOW_PERIOD, LOGO_START_DELAY, LogoFrame, PATH_PERIOD};
pub use orb::{Bounds, Orb, OrbSettings, OrbTransform, RELEASE_DURATION};
pub use reveal::{
    DEFAULT_REVEAL_DELAY, DEFAULT_REVEAL_STEP, RevealDirection, RevealSettings, RevealUnit,
    SegmentStyle, TextReveal,
};
pub use shine::{DEFAULT_SHINE_SPEED, ShinePreset, ShineText};
