//! Trivia Quiz screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};
use senipy_games::{QUESTIONS_PER_QUIZ, TriviaQuiz};
use tracing::instrument;

use crate::host::GameHost;
use crate::lobby::arcade::Arcade;
use crate::lobby::screen::{Screen, ScreenTransition};
use crate::lobby::widgets::{feedback_line, help_style};

/// State for the Trivia Quiz screen.
#[derive(Debug)]
pub struct TriviaScreen {
    host: GameHost<TriviaQuiz>,
}

impl TriviaScreen {
    /// Starts a quiz.
    #[instrument]
    pub fn new() -> Self {
        Self {
            host: GameHost::new(TriviaQuiz::new()),
        }
    }

    fn step_selection(&mut self, forward: bool) {
        let next = match (self.host.game().selected(), forward) {
            (None, _) => 0,
            (Some(i), true) => (i + 1) % 4,
            (Some(i), false) => (i + 3) % 4,
        };
        self.host.game_mut().select(next);
    }

    fn check(&mut self) {
        if let Some(reaction) = self.host.game_mut().check() {
            self.host.schedule(*reaction.follow_up());
        }
    }

    fn render_question(&self) -> Vec<Line<'static>> {
        let game = self.host.game();
        let Some(question) = game.question() else {
            return Vec::new();
        };
        let mut lines = vec![
            Line::styled(
                format!(
                    "Question {}/{} · {} · {}",
                    game.question_number(),
                    QUESTIONS_PER_QUIZ,
                    question.category,
                    question.difficulty.label()
                ),
                Style::default().fg(Color::Magenta),
            ),
            Line::default(),
            Line::styled(question.text, Style::default().add_modifier(Modifier::BOLD)),
            Line::default(),
        ];
        for (i, option) in question.options.iter().enumerate() {
            let mut style = Style::default();
            if game.is_answered() && i == question.correct {
                style = style.fg(Color::Green).add_modifier(Modifier::BOLD);
            } else if game.is_answered() && game.selected() == Some(i) {
                style = style.fg(Color::Red);
            } else if game.selected() == Some(i) {
                style = style.fg(Color::Yellow).add_modifier(Modifier::REVERSED);
            }
            lines.push(Line::styled(format!("{}. {}", i + 1, option), style));
        }
        lines.push(Line::default());
        lines.push(feedback_line(game.feedback()));
        lines
    }

    fn render_summary(&self) -> Vec<Line<'static>> {
        let game = self.host.game();
        vec![
            Line::styled(
                "Quiz complete!",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Line::default(),
            Line::raw(format!("Final score: {}", game.score())),
            Line::raw(format!(
                "Correct answers: {}/{}",
                game.correct_answers(),
                QUESTIONS_PER_QUIZ
            )),
            Line::default(),
            Line::styled(
                game.summary().map(|t| t.to_string()).unwrap_or_default(),
                Style::default().fg(Color::Green),
            ),
            Line::default(),
            Line::raw("Press Enter to play again"),
        ]
    }
}

impl Default for TriviaScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for TriviaScreen {
    #[instrument(skip_all)]
    fn render(&self, frame: &mut Frame, _arcade: &Arcade) {
        let game = self.host.game();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(12),
                Constraint::Length(3),
            ])
            .split(frame.area());

        let header = Paragraph::new(format!("❓ Trivia Quiz   Score: {}", game.score()))
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(header, chunks[0]);

        let body = if game.is_complete() {
            self.render_summary()
        } else {
            self.render_question()
        };
        frame.render_widget(
            Paragraph::new(body)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL)),
            chunks[1],
        );

        let help = Paragraph::new("↑↓ or 1-4: Select | Enter: Answer | Esc: Menu")
            .style(help_style())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);
    }

    #[instrument(skip(self, key, _arcade))]
    fn handle_key(&mut self, key: KeyEvent, _arcade: &mut Arcade) -> ScreenTransition {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => return ScreenTransition::GoToMenu,
            KeyCode::Enter if self.host.game().is_complete() => {
                self.host.cancel_all();
                self.host.game_mut().restart();
            }
            KeyCode::Up => self.step_selection(false),
            KeyCode::Down => self.step_selection(true),
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
