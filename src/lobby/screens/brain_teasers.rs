//! Brain Teasers screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};
use senipy_games::{BrainTeasers, Feedback, MAX_ATTEMPTS};
use tracing::instrument;

use crate::lobby::arcade::Arcade;
use crate::lobby::screen::{Screen, ScreenTransition};
use crate::lobby::widgets::{feedback_line, help_style};

/// State for the Brain Teasers screen.
#[derive(Debug)]
pub struct BrainTeasersScreen {
    game: BrainTeasers,
}

impl BrainTeasersScreen {
    /// Starts a new session.
    pub fn new() -> Self {
        Self {
            game: BrainTeasers::new(),
        }
    }
}

impl Default for BrainTeasersScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for BrainTeasersScreen {
    #[instrument(skip_all)]
    fn render(&self, frame: &mut Frame, _arcade: &Arcade) {
        let game = &self.game;
        let teaser = game.teaser();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(8),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(frame.area());

        let header = Paragraph::new(format!(
            "💡 Brain Teasers   Score: {}   Attempts: {}/{}",
            game.score(),
            game.attempts(),
            MAX_ATTEMPTS
        ))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(header, chunks[0]);

        let mut body = vec![
            Line::styled(
                format!("{} · {}", teaser.category, teaser.difficulty.label()),
                Style::default().fg(Color::Magenta),
            ),
            Line::default(),
            Line::styled(
                teaser.question,
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Line::default(),
        ];
        if game.hint_shown() && !matches!(game.feedback(), Some(Feedback::Hint(_))) {
            body.push(Line::styled(
                format!("💡 Hint: {}", teaser.hint),
                Style::default().fg(Color::Yellow),
            ));
            body.push(Line::default());
        }
        body.push(feedback_line(game.feedback()));
        frame.render_widget(
            Paragraph::new(body)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL)),
            chunks[1],
        );

        let prompt = if game.status().is_over() {
            "Press Enter for the next teaser".to_string()
        } else {
            format!("Your answer: {}▏", game.input())
        };
        frame.render_widget(
            Paragraph::new(prompt).block(Block::default().borders(Borders::ALL)),
            chunks[2],
        );

        let help = Paragraph::new("Type: Answer | Enter: Submit | Tab: Hint | Esc: Menu")
            .style(help_style())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[3]);
    }

    #[instrument(skip(self, key, _arcade))]
    fn handle_key(&mut self, key: KeyEvent, _arcade: &mut Arcade) -> ScreenTransition {
        match key.code {
            KeyCode::Esc => return ScreenTransition::GoToMenu,
            KeyCode::Enter if self.game.status().is_over() => self.game.next_round(),
            KeyCode::Enter => {
                self.game.submit();
            }
            KeyCode::Tab => {
                self.game.reveal_hint();
            }
            KeyCode::Backspace => self.game.backspace(),
            KeyCode::Char(c) => self.game.type_char(c),
            _ => {}
        }
        ScreenTransition::Stay
    }
}
