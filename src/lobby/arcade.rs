//! State shared by every screen: config, catalogue, effects and the clock.

use std::time::{Duration, Instant};

use ratatui::layout::Rect;
use senipy_effects::{AnimatedLogo, Bounds, EffectError, Orb, ShineText, TextReveal, WordCycler};
use tracing::{debug, instrument, warn};

use crate::catalogue::Catalogue;
use crate::config::SenipyConfig;
use crate::download::PseudoDownload;

/// Tagline revealed under the title.
pub const TAGLINE: &str = "Brain training made simple and fun";

/// The menu's decorative effects.
#[derive(Debug, Clone)]
pub struct Showcase {
    logo: AnimatedLogo,
    title: ShineText,
    tagline: TextReveal,
    cycler: WordCycler,
    orb: Orb,
    tagline_done: bool,
}

impl Showcase {
    /// Builds every effect from config.
    ///
    /// # Errors
    ///
    /// Returns an [`EffectError`] if a configured duration is zero or the
    /// cycler word list is empty.
    #[instrument(skip(config))]
    pub fn new(config: &SenipyConfig) -> Result<Self, EffectError> {
        let effects = &config.effects;
        let mut title = effects.shine("SENIPY")?;
        let logo = if config.ui.reduced_motion {
            title.set_disabled(true);
            AnimatedLogo::with_reduced_motion()
        } else {
            AnimatedLogo::new()
        };
        Ok(Self {
            logo,
            title,
            tagline: TextReveal::new(TAGLINE, effects.reveal_settings()?),
            cycler: effects.cycler()?,
            orb: Orb::new(effects.orb),
            tagline_done: false,
        })
    }

    /// The animated logo.
    pub fn logo(&self) -> &AnimatedLogo {
        &self.logo
    }

    /// The shining title.
    pub fn title(&self) -> &ShineText {
        &self.title
    }

    /// The revealed tagline.
    pub fn tagline(&self) -> &TextReveal {
        &self.tagline
    }

    /// The rotating word.
    pub fn cycler(&self) -> &WordCycler {
        &self.cycler
    }

    /// The floating orb.
    pub fn orb(&self) -> &Orb {
        &self.orb
    }

    /// Marks the tagline as seen at `now`.
    pub fn show_tagline(&mut self, now: Duration) {
        self.tagline.observe(true, now);
    }

    /// Whether the tagline reveal has finished.
    pub fn is_tagline_done(&self) -> bool {
        self.tagline_done
    }

    /// Checks the tagline reveal at `now`. Returns true on the frame it
    /// completes.
    pub fn poll_tagline(&mut self, now: Duration) -> bool {
        if self.tagline.take_completion(now) {
            self.tagline_done = true;
            debug!("Tagline revealed");
            return true;
        }
        false
    }

    /// Feeds a pointer position to the orb. `inside` says whether the
    /// pointer is within `bounds`.
    pub fn track_pointer(&mut self, x: f32, y: f32, bounds: &Bounds, inside: bool, now: Duration) {
        match (inside, self.orb.is_engaged()) {
            (true, false) => {
                self.orb.pointer_enter();
                self.orb.pointer_move(x, y, bounds);
            }
            (true, true) => {
                self.orb.pointer_move(x, y, bounds);
            }
            (false, _) => self.orb.pointer_leave(now),
        }
    }
}

/// Everything the screens share.
#[derive(Debug)]
pub struct Arcade {
    config: SenipyConfig,
    catalogue: Catalogue,
    showcase: Showcase,
    started: Instant,
    viewport: Rect,
    status: Option<String>,
}

impl Arcade {
    /// Creates the shared state.
    ///
    /// # Errors
    ///
    /// Returns an [`EffectError`] if the effect settings are invalid.
    #[instrument(skip(config))]
    pub fn new(config: SenipyConfig) -> Result<Self, EffectError> {
        let showcase = Showcase::new(&config)?;
        Ok(Self {
            config,
            catalogue: Catalogue::new(),
            showcase,
            started: Instant::now(),
            viewport: Rect::default(),
            status: None,
        })
    }

    /// The loaded config.
    pub fn config(&self) -> &SenipyConfig {
        &self.config
    }

    /// The game catalogue.
    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    /// The game catalogue, mutably.
    pub fn catalogue_mut(&mut self) -> &mut Catalogue {
        &mut self.catalogue
    }

    /// The menu effects.
    pub fn showcase(&self) -> &Showcase {
        &self.showcase
    }

    /// The menu effects, mutably.
    pub fn showcase_mut(&mut self) -> &mut Showcase {
        &mut self.showcase
    }

    /// Time since the arcade opened.
    pub fn now(&self) -> Duration {
        self.started.elapsed()
    }

    /// Size of the terminal at the last frame.
    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// Records the terminal size for the coming frame.
    pub fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = viewport;
    }

    /// One-line status message for the menu.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Replaces the status message.
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = Some(status.into());
    }

    /// Saves the pseudo-download into the configured directory and reports
    /// the outcome in the status line.
    #[instrument(skip(self))]
    pub fn save_download(&mut self) {
        let download = PseudoDownload::default();
        match download.save_to(&self.config.download.dir) {
            Ok(path) => {
                debug!(path = %path.display(), "Download saved from menu");
                self.set_status(format!("📥 Saved {}", path.display()));
            }
            Err(e) => {
                warn!(error = %e, "Download failed");
                self.set_status(format!("Download failed: {}", e.message));
            }
        }
    }
}
