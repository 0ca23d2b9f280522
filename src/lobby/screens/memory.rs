//! Memory Match screen: a 4 × 4 grid of cards.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use senipy_games::{FlipOutcome, MemoryMatch, MemoryPhase};
use tracing::{debug, instrument};

use crate::host::GameHost;
use crate::lobby::arcade::Arcade;
use crate::lobby::screen::{Screen, ScreenTransition};
use crate::lobby::widgets::help_style;

const COLUMNS: usize = 4;

/// State for the Memory Match screen.
#[derive(Debug)]
pub struct MemoryScreen {
    host: GameHost<MemoryMatch>,
    cursor: usize,
    message: Option<String>,
}

impl MemoryScreen {
    /// Deals a fresh game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            host: GameHost::new(MemoryMatch::new()),
            cursor: 0,
            message: None,
        }
    }

    fn move_cursor(&mut self, dx: isize, dy: isize) {
        let count = self.host.game().cards().len();
        let rows = count.div_ceil(COLUMNS);
        let col = (self.cursor % COLUMNS) as isize;
        let row = (self.cursor / COLUMNS) as isize;
        let col = (col + dx).rem_euclid(COLUMNS as isize) as usize;
        let row = (row + dy).rem_euclid(rows as isize) as usize;
        self.cursor = (row * COLUMNS + col).min(count - 1);
    }

    fn flip(&mut self) {
        let Some(card) = self.host.game().cards().get(self.cursor) else {
            return;
        };
        let id = card.id();
        match self.host.game_mut().flip(id) {
            Ok(FlipOutcome::Revealed) => self.message = None,
            Ok(FlipOutcome::PairPending(resolve)) => {
                self.message = None;
                self.host.schedule(Some(resolve));
            }
            Err(e) => {
                debug!(error = %e, "Flip refused");
                self.message = Some(e.to_string());
            }
        }
    }
}

impl Default for MemoryScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for MemoryScreen {
    #[instrument(skip_all)]
    fn render(&self, frame: &mut Frame, _arcade: &Arcade) {
        let game = self.host.game();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(10),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(frame.area());

        let header = Paragraph::new(format!(
            "🧠 Memory Match   Score: {}   Moves: {}",
            game.score(),
            game.moves()
        ))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(header, chunks[0]);

        let mut lines = vec![Line::default()];
        for (r, row) in game.cards().chunks(COLUMNS).enumerate() {
            let spans: Vec<Span> = row
                .iter()
                .enumerate()
                .map(|(c, card)| {
                    let face = if card.is_face_visible() {
                        card.symbol().to_string()
                    } else {
                        "❔".to_string()
                    };
                    let mut style = if card.is_matched() {
                        Style::default().fg(Color::Green)
                    } else if card.is_flipped() {
                        Style::default().fg(Color::Yellow)
                    } else {
                        Style::default().fg(Color::Blue)
                    };
                    if r * COLUMNS + c == self.cursor {
                        style = style.add_modifier(Modifier::REVERSED);
                    }
                    Span::styled(format!(" [ {} ] ", face), style)
                })
                .collect();
            lines.push(Line::from(spans));
            lines.push(Line::default());
        }
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
            chunks[1],
        );

        let status = match (game.phase(), &self.message) {
            (MemoryPhase::Complete, _) => Line::styled(
                format!(
                    "🎉 Congratulations! You completed the game in {} moves!",
                    game.moves()
                ),
                Style::default().fg(Color::Green),
            ),
            (_, Some(message)) => Line::styled(message.clone(), Style::default().fg(Color::Red)),
            (MemoryPhase::PairPending, None) => Line::raw("Checking pair..."),
            _ => Line::raw("Find all the matching pairs"),
        };
        frame.render_widget(
            Paragraph::new(status)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
            chunks[2],
        );

        let help = Paragraph::new("←↑↓→: Move | Enter/Space: Flip | n: New game | Esc: Menu")
            .style(help_style())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[3]);
    }

    #[instrument(skip(self, key, _arcade))]
    fn handle_key(&mut self, key: KeyEvent, _arcade: &mut Arcade) -> ScreenTransition {
        match key.code {
            KeyCode::Left => self.move_cursor(-1, 0),
            KeyCode::Right => self.move_cursor(1, 0),
            KeyCode::Up => self.move_cursor(0, -1),
            KeyCode::Down => self.move_cursor(0, 1),
            KeyCode::Enter | KeyCode::Char(' ') => self.flip(),
            KeyCode::Char('n') | KeyCode::Char('N') => {
                self.host.cancel_all();
                self.host.game_mut().new_game();
                self.cursor = 0;
                self.message = None;
            }
            KeyCode::Esc | KeyCode::Char('q') => return ScreenTransition::GoToMenu,
            _ => {}
        }
        ScreenTransition::Stay
    }

    fn update(&mut self, _arcade: &mut Arcade) {
        self.host.pump();
    }
}
