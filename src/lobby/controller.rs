//! Arcade controller: the state machine driving the multi-screen TUI.

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::Backend, layout::Rect};
use tokio::time::{Duration, sleep};
use tracing::{debug, info, instrument};

use crate::catalogue::GameKind;
use crate::config::SenipyConfig;
use crate::lobby::arcade::Arcade;
use crate::lobby::screen::{Screen, ScreenTransition};
use crate::lobby::screens::{
    BrainTeasersScreen, MainMenuScreen, MemoryScreen, NumberScreen, PatternScreen, SignInScreen,
    SignUpScreen, TriviaScreen, VerificationScreen, WordPuzzleScreen,
};

/// Active screen in the arcade state machine.
#[derive(Debug)]
enum ActiveScreen {
    Menu(MainMenuScreen),
    Memory(MemoryScreen),
    Word(WordPuzzleScreen),
    Number(NumberScreen),
    Pattern(PatternScreen),
    Trivia(TriviaScreen),
    Brain(BrainTeasersScreen),
    SignIn(SignInScreen),
    SignUp(SignUpScreen),
    Verification(VerificationScreen),
}

impl ActiveScreen {
    fn open_game(kind: GameKind) -> Self {
        match kind {
            GameKind::Memory => Self::Memory(MemoryScreen::new()),
            GameKind::Word => Self::Word(WordPuzzleScreen::new()),
            GameKind::Number => Self::Number(NumberScreen::new()),
            GameKind::Pattern => Self::Pattern(PatternScreen::new()),
            GameKind::Trivia => Self::Trivia(TriviaScreen::new()),
            GameKind::Brain => Self::Brain(BrainTeasersScreen::new()),
        }
    }

    /// The game this screen plays, if any.
    fn game(&self) -> Option<GameKind> {
        match self {
            Self::Memory(_) => Some(GameKind::Memory),
            Self::Word(_) => Some(GameKind::Word),
            Self::Number(_) => Some(GameKind::Number),
            Self::Pattern(_) => Some(GameKind::Pattern),
            Self::Trivia(_) => Some(GameKind::Trivia),
            Self::Brain(_) => Some(GameKind::Brain),
            Self::Menu(_) | Self::SignIn(_) | Self::SignUp(_) | Self::Verification(_) => None,
        }
    }

    fn screen(&self) -> &dyn Screen {
        match self {
            Self::Menu(s) => s,
            Self::Memory(s) => s,
            Self::Word(s) => s,
            Self::Number(s) => s,
            Self::Pattern(s) => s,
            Self::Trivia(s) => s,
            Self::Brain(s) => s,
            Self::SignIn(s) => s,
            Self::SignUp(s) => s,
            Self::Verification(s) => s,
        }
    }

    fn screen_mut(&mut self) -> &mut dyn Screen {
        match self {
            Self::Menu(s) => s,
            Self::Memory(s) => s,
            Self::Word(s) => s,
            Self::Number(s) => s,
            Self::Pattern(s) => s,
            Self::Trivia(s) => s,
            Self::Brain(s) => s,
            Self::SignIn(s) => s,
            Self::SignUp(s) => s,
            Self::Verification(s) => s,
        }
    }
}

/// Controller that drives the arcade state machine.
///
/// Call [`ArcadeController::run`] to start the event loop.
#[derive(Debug)]
pub struct ArcadeController {
    arcade: Arcade,
}

impl ArcadeController {
    /// Creates a controller from config.
    ///
    /// # Errors
    ///
    /// Fails if the effect settings in `config` are invalid.
    #[instrument(skip(config))]
    pub fn new(config: SenipyConfig) -> anyhow::Result<Self> {
        info!("Creating ArcadeController");
        Ok(Self {
            arcade: Arcade::new(config)?,
        })
    }

    /// Catalogue points earned so far.
    pub fn points(&self) -> u32 {
        self.arcade.catalogue().points()
    }

    /// Runs the event loop until the player quits.
    ///
    /// Opens `start` directly when given, otherwise the main menu.
    #[instrument(skip(self, terminal))]
    pub async fn run<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        start: Option<GameKind>,
    ) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting arcade event loop");
        let tick_rate = self.arcade.config().ui.tick_rate();

        let mut screen = match start {
            Some(kind) => self.start_game(kind),
            None => ActiveScreen::Menu(MainMenuScreen::new()),
        };

        loop {
            let size = terminal.size()?;
            self.arcade
                .set_viewport(Rect::new(0, 0, size.width, size.height));
            screen.screen_mut().update(&mut self.arcade);

            terminal.draw(|f| screen.screen().render(f, &self.arcade))?;

            // Poll for input with a short timeout so animations keep moving.
            if event::poll(tick_rate)? {
                let transition = match event::read()? {
                    // Skip key release events (crossterm fires both press and release).
                    Event::Key(key) if key.kind != KeyEventKind::Release => {
                        screen.screen_mut().handle_key(key, &mut self.arcade)
                    }
                    Event::Mouse(mouse) => {
                        screen.screen_mut().handle_mouse(mouse, &mut self.arcade);
                        ScreenTransition::Stay
                    }
                    _ => ScreenTransition::Stay,
                };

                screen = match self.apply_transition(transition, screen) {
                    Some(next) => next,
                    None => {
                        info!(points = self.points(), "Arcade quitting");
                        return Ok(());
                    }
                };
            }

            // Let timer tasks run.
            sleep(Duration::from_millis(10)).await;
        }
    }

    fn start_game(&mut self, kind: GameKind) -> ActiveScreen {
        if !self.arcade.catalogue().is_playing(kind) {
            self.arcade.catalogue_mut().toggle(kind);
        }
        info!(game = %kind, "Navigating to game");
        ActiveScreen::open_game(kind)
    }

    /// Applies a screen transition, returning the next screen or `None` to quit.
    #[instrument(skip(self, current))]
    fn apply_transition(
        &mut self,
        transition: ScreenTransition,
        current: ActiveScreen,
    ) -> Option<ActiveScreen> {
        if !matches!(transition, ScreenTransition::Stay) {
            debug!(transition = ?transition, "Applying screen transition");
        }
        match transition {
            ScreenTransition::Stay => Some(current),

            ScreenTransition::GoToMenu => {
                if let Some(kind) = current.game()
                    && self.arcade.catalogue().is_playing(kind)
                {
                    self.arcade.catalogue_mut().toggle(kind);
                }
                info!("Navigating to menu");
                Some(ActiveScreen::Menu(MainMenuScreen::new()))
            }

            ScreenTransition::GoToGame(kind) => Some(self.start_game(kind)),

            ScreenTransition::GoToSignIn => {
                info!("Navigating to sign-in");
                Some(ActiveScreen::SignIn(SignInScreen::new()))
            }

            ScreenTransition::GoToSignUp => {
                info!("Navigating to sign-up");
                Some(ActiveScreen::SignUp(SignUpScreen::new()))
            }

            ScreenTransition::GoToVerification(session) => {
                info!("Navigating to verification");
                Some(ActiveScreen::Verification(VerificationScreen::new(session)))
            }

            ScreenTransition::Quit => None,
        }
    }
}
