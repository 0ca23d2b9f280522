//! SENIPY arcade - brain-training mini-games in the terminal
//!
//! This crate hosts the game logic from `senipy_games` and the effect models
//! from `senipy_effects` behind a ratatui front-end.
//!
//! # Architecture
//!
//! - **Timers**: cancellable one-shot slots and repeating tickers on tokio
//! - **Host**: one game plus the timers that deliver its deferred events
//! - **Verification / auth**: mock sign-up flow ending in a demo code check
//! - **Download**: the fixed text blob behind the "download app" button
//! - **Lobby**: menu, game screens and forms
//!
//! # Example
//!
//! ```no_run
//! use senipy::{GameHost, VerificationSession};
//!
//! # async fn example() {
//! let mut host = GameHost::new(VerificationSession::new("ada@example.com"));
//! let check = host.game_mut().submit_code("123456").ok();
//! host.schedule(check);
//! host.wait().await;
//! assert!(host.game().is_verified());
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod auth;
mod catalogue;
mod config;
mod download;
mod host;
mod lobby;
mod timer;
mod tui;
mod verification;

pub use auth::{AuthError, Field, Form, SignInForm, SignUpForm};
pub use catalogue::{Catalogue, CatalogueEntry, GameKind, PLAY_POINTS};
pub use config::{
    ConfigError, DEFAULT_CONFIG_PATH, DownloadConfig, EffectsConfig, SenipyConfig, UiConfig,
};
pub use download::{DownloadError, FILE_NAME, MIME_TYPE, PAYLOAD, PseudoDownload};
pub use host::{GameHost, Signal};
pub use lobby::{Arcade, ArcadeController, Screen, ScreenTransition, Showcase, TAGLINE};
pub use timer::{Tagged, Ticker, TimerId, TimerSlot};
pub use tui::run_tui;
pub use verification::{
    CHECK_DELAY, CODE_LENGTH, DEMO_CODE, Notice, RESEND_DELAY, VerificationError,
    VerificationEvent, VerificationPhase, VerificationSession,
};
