//! Screen trait and transition type for the arcade state machine.

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::Frame;

use crate::catalogue::GameKind;
use crate::lobby::arcade::Arcade;
use crate::verification::VerificationSession;

/// The result of handling an input event on a screen.
///
/// Screens return this from [`Screen::handle_key`] to drive the
/// [`ArcadeController`](crate::ArcadeController) state machine.
#[derive(Debug, Clone)]
pub enum ScreenTransition {
    /// Stay on the current screen.
    Stay,
    /// Back to the main menu.
    GoToMenu,
    /// Start a game.
    GoToGame(GameKind),
    /// Open the sign-in form.
    GoToSignIn,
    /// Open the sign-up form.
    GoToSignUp,
    /// Open the verification dialog for a fresh sign-up.
    GoToVerification(VerificationSession),
    /// Exit the arcade.
    Quit,
}

/// Trait implemented by each screen in the arcade.
///
/// Each screen owns its own state, renders its UI, and handles input. The
/// controller calls [`Screen::update`] once per frame before rendering so
/// screens can apply timer events that arrived in the meantime.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame, arcade: &Arcade);

    /// Handles a key event and returns the resulting [`ScreenTransition`].
    fn handle_key(&mut self, key: KeyEvent, arcade: &mut Arcade) -> ScreenTransition;

    /// Handles a mouse event. Most screens ignore the mouse.
    fn handle_mouse(&mut self, _mouse: MouseEvent, _arcade: &mut Arcade) {}

    /// Applies pending timer events.
    fn update(&mut self, _arcade: &mut Arcade) {}
}
