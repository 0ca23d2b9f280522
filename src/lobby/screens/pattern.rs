//! Pattern Recognition screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use senipy_games::{MASK, OPTION_COUNT, PatternGame};
use tracing::instrument;

use crate::host::GameHost;
use crate::lobby::arcade::Arcade;
use crate::lobby::screen::{Screen, ScreenTransition};
use crate::lobby::widgets::{feedback_line, help_style};

/// State for the Pattern Recognition screen.
#[derive(Debug)]
pub struct PatternScreen {
    host: GameHost<PatternGame>,
}

impl PatternScreen {
    /// Starts at level 1.
    #[instrument]
    pub fn new() -> Self {
        Self {
            host: GameHost::new(PatternGame::new()),
        }
    }

    fn step_selection(&mut self, forward: bool) {
        let current = self.host.game().selected();
        let next = match (current, forward) {
            (None, _) => 0,
            (Some(i), true) => (i + 1) % OPTION_COUNT,
            (Some(i), false) => (i + OPTION_COUNT - 1) % OPTION_COUNT,
        };
        self.host.game_mut().select(next);
    }

    fn check(&mut self) {
        if let Some(reaction) = self.host.game_mut().check() {
            self.host.schedule(*reaction.follow_up());
        }
    }
}

impl Default for PatternScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for PatternScreen {
    #[instrument(skip_all)]
    fn render(&self, frame: &mut Frame, _arcade: &Arcade) {
        let game = self.host.game();
        let pattern = game.pattern();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(9),
                Constraint::Length(3),
            ])
            .split(frame.area());

        let header = Paragraph::new(format!(
            "🔷 Pattern Recognition   Level: {}   Score: {}",
            game.level(),
            game.score()
        ))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(header, chunks[0]);

        let sequence: Vec<Span> = pattern
            .sequence()
            .iter()
            .enumerate()
            .map(|(i, token)| {
                if i == pattern.missing() && game.is_revealed() {
                    Span::styled(
                        format!(" {} ", pattern.answer()),
                        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                    )
                } else if i == pattern.missing() {
                    Span::styled(format!(" {} ", MASK), Style::default().fg(Color::Yellow))
                } else {
                    Span::raw(format!(" {} ", token))
                }
            })
            .collect();

        let options: Vec<Span> = pattern
            .options()
            .iter()
            .enumerate()
            .map(|(i, option)| {
                let style = if game.selected() == Some(i) {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default()
                };
                Span::styled(format!("  {}. {}  ", i + 1, option), style)
            })
            .collect();

        let body = vec![
            Line::raw(format!("Complete the {} pattern", pattern.family())),
            Line::default(),
            Line::from(sequence),
            Line::default(),
            Line::from(options),
            Line::default(),
            feedback_line(game.feedback()),
        ];
        frame.render_widget(
            Paragraph::new(body)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
            chunks[1],
        );

        let help = Paragraph::new("←→ or 1-4: Select | Enter: Check | Esc: Menu")
            .style(help_style())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);
    }

    #[instrument(skip(self, key, _arcade))]
    fn handle_key(&mut self, key: KeyEvent, _arcade: &mut Arcade) -> ScreenTransition {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => return ScreenTransition::GoToMenu,
            KeyCode::Left => self.step_selection(false),
            KeyCode::Right => self.step_selection(true),
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                self.host.game_mut().select(index);
            }
            KeyCode::Enter => self.check(),
            _ => {}
        }
        ScreenTransition::Stay
    }

    fn update(&mut self, _arcade: &mut Arcade) {
        self.host.pump();
    }
}
