//! Email verification dialog.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};
use tracing::{debug, instrument};

use crate::host::GameHost;
use crate::lobby::arcade::Arcade;
use crate::lobby::screen::{Screen, ScreenTransition};
use crate::lobby::widgets::{center_rect, help_style};
use crate::verification::{CODE_LENGTH, DEMO_CODE, Notice, VerificationSession};

/// State for the verification dialog.
#[derive(Debug)]
pub struct VerificationScreen {
    host: GameHost<VerificationSession>,
    error: Option<String>,
}

impl VerificationScreen {
    /// Hosts `session`.
    #[instrument(skip(session), fields(email = session.email()))]
    pub fn new(session: VerificationSession) -> Self {
        Self {
            host: GameHost::new(session),
            error: None,
        }
    }

    fn submit(&mut self) {
        match self.host.game_mut().submit() {
            Ok(check) => {
                self.error = None;
                self.host.schedule(Some(check));
            }
            Err(e) => {
                debug!(error = %e, "Submit refused");
                self.error = Some(e.to_string());
            }
        }
    }

    fn resend(&mut self) {
        match self.host.game_mut().resend() {
            Ok(resend) => {
                self.error = None;
                self.host.schedule(Some(resend));
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }
}

impl Screen for VerificationScreen {
    #[instrument(skip_all)]
    fn render(&self, frame: &mut Frame, _arcade: &Arcade) {
        let session = self.host.game();
        let area = center_rect(frame.area(), 60, 14);
        frame.render_widget(Clear, area);

        let slots: String = (0..CODE_LENGTH)
            .map(|i| session.code().chars().nth(i).unwrap_or('_'))
            .map(|c| format!(" {} ", c))
            .collect();

        let mut lines = vec![
            Line::raw(format!("We sent a 6-digit code to {}", session.email())),
            Line::default(),
            Line::styled(
                slots,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::default(),
        ];

        let status = if session.is_verified() {
            Line::styled(
                "✅ Email verified! Press any key to continue",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )
        } else if session.is_verifying() {
            Line::styled("Verifying...", Style::default().fg(Color::Cyan))
        } else if session.is_resending() {
            Line::styled("Resending...", Style::default().fg(Color::Cyan))
        } else if let Some(error) = &self.error {
            Line::styled(error.clone(), Style::default().fg(Color::Red))
        } else {
            match session.notice() {
                Some(notice @ Notice::Rejected) => {
                    Line::styled(notice.to_string(), Style::default().fg(Color::Red))
                }
                Some(notice @ Notice::Resent) => {
                    Line::styled(notice.to_string(), Style::default().fg(Color::Green))
                }
                None if session.can_submit() => Line::raw("Press Enter to verify"),
                None => Line::default(),
            }
        };
        lines.push(status);
        lines.push(Line::default());
        lines.push(Line::styled(format!("Demo code: {}", DEMO_CODE), help_style()));
        lines.push(Line::default());
        lines.push(Line::styled(
            "Enter: Verify | Tab: Resend code | Esc: Back to sign in",
            help_style(),
        ));

        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Verify your email")
                    .title_alignment(Alignment::Center),
            ),
            area,
        );
    }

    #[instrument(skip(self, key, arcade))]
    fn handle_key(&mut self, key: KeyEvent, arcade: &mut Arcade) -> ScreenTransition {
        if self.host.game().is_verified() {
            arcade.set_status(format!("✅ {} verified", self.host.game().email()));
            return ScreenTransition::GoToMenu;
        }
        match key.code {
            KeyCode::Esc => return ScreenTransition::GoToSignIn,
            KeyCode::Enter => self.submit(),
            KeyCode::Tab => self.resend(),
            KeyCode::Backspace => self.host.game_mut().backspace(),
            KeyCode::Char(c) => {
                self.error = None;
                self.host.game_mut().type_char(c);
            }
            _ => {}
        }
        ScreenTransition::Stay
    }

    fn update(&mut self, _arcade: &mut Arcade) {
        self.host.pump();
    }
}
