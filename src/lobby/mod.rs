//! Arcade lobby: main menu, game screens and account forms.

mod arcade;
mod controller;
mod screen;
mod screens;
mod widgets;

pub use arcade::{Arcade, Showcase, TAGLINE};
pub use controller::ArcadeController;
pub use screen::{Screen, ScreenTransition};
