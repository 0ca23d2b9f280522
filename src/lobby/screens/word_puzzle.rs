//! Word Puzzle screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};
use senipy_games::{MAX_ATTEMPTS, WordPuzzle};
use tracing::instrument;

use crate::lobby::arcade::Arcade;
use crate::lobby::screen::{Screen, ScreenTransition};
use crate::lobby::widgets::{feedback_line, help_style};

/// State for the Word Puzzle screen.
#[derive(Debug)]
pub struct WordPuzzleScreen {
    game: WordPuzzle,
}

impl WordPuzzleScreen {
    /// Starts a new session.
    pub fn new() -> Self {
        Self {
            game: WordPuzzle::new(),
        }
    }
}

impl Default for WordPuzzleScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for WordPuzzleScreen {
    #[instrument(skip_all)]
    fn render(&self, frame: &mut Frame, _arcade: &Arcade) {
        let game = &self.game;
        let puzzle = game.puzzle();
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
            "📝 Word Puzzle   Score: {}   Attempts: {}/{}   Hints left: {}",
            game.score(),
            game.attempts(),
            MAX_ATTEMPTS,
            game.hints_left()
        ))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(header, chunks[0]);

        let typed: Vec<char> = game.input().chars().collect();
        let slots: Vec<String> = (0..puzzle.word.len())
            .map(|i| typed.get(i).map_or("_".to_string(), |c| c.to_uppercase().to_string()))
            .collect();
        let body = vec![
            Line::styled(
                format!("Category: {}", puzzle.category),
                Style::default().fg(Color::Magenta),
            ),
            Line::default(),
            Line::raw(format!("Clue: {}", puzzle.clue)),
            Line::default(),
            Line::styled(
                slots.join(" "),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::default(),
            feedback_line(game.feedback()),
        ];
        frame.render_widget(
            Paragraph::new(body)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL)),
            chunks[1],
        );

        let prompt = if game.status().is_over() {
            "Press Enter for the next word".to_string()
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
                self.game.hint();
            }
            KeyCode::Backspace => self.game.backspace(),
            KeyCode::Char(c) if c.is_alphabetic() => self.game.type_char(c),
            _ => {}
        }
        ScreenTransition::Stay
    }
}
