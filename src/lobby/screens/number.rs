//! Number Challenge screen: pick a difficulty, then beat the clock.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};
use senipy_games::{ChallengePhase, Difficulty, NumberChallenge, ROUND_SECONDS, TICK_INTERVAL};
use tracing::{info, instrument, warn};

use crate::host::GameHost;
use crate::lobby::arcade::Arcade;
use crate::lobby::screen::{Screen, ScreenTransition};
use crate::lobby::widgets::{feedback_line, help_style};

/// State for the Number Challenge screen.
#[derive(Debug)]
pub struct NumberScreen {
    host: GameHost<NumberChallenge>,
}

impl NumberScreen {
    /// Opens the challenge in setup.
    #[instrument]
    pub fn new() -> Self {
        Self {
            host: GameHost::new(NumberChallenge::new()),
        }
    }

    fn cycle_difficulty(&mut self) {
        let next = self.host.game().difficulty().next();
        if let Err(e) = self.host.game_mut().set_difficulty(next) {
            warn!(error = %e, "Difficulty not changed");
        }
    }

    fn start(&mut self) {
        self.host.cancel_all();
        self.host.game_mut().start();
        self.host.start_ticker(TICK_INTERVAL);
        info!(difficulty = %self.host.game().difficulty(), "Countdown started");
    }

    fn submit(&mut self) {
        if let Some(reaction) = self.host.game_mut().submit() {
            self.host.schedule(*reaction.follow_up());
        }
    }
}

impl Default for NumberScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for NumberScreen {
    #[instrument(skip_all)]
    fn render(&self, frame: &mut Frame, _arcade: &Arcade) {
        let game = self.host.game();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(7),
                Constraint::Length(3),
            ])
            .split(frame.area());

        let header = Paragraph::new(format!(
            "🔢 Number Challenge   Score: {}   Streak: {}",
            game.score(),
            game.streak()
        ))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(header, chunks[0]);

        let ratio = f64::from(game.time_left()) / f64::from(ROUND_SECONDS);
        let clock = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title("Time"))
            .gauge_style(Style::default().fg(if game.time_left() <= 10 {
                Color::Red
            } else {
                Color::Green
            }))
            .ratio(ratio.clamp(0.0, 1.0))
            .label(format!("{}s", game.time_left()));
        frame.render_widget(clock, chunks[1]);

        let body = match game.phase() {
            ChallengePhase::Setup => {
                let tiers: Vec<Span> = Difficulty::ALL
                    .iter()
                    .map(|d| {
                        let style = if *d == game.difficulty() {
                            Style::default()
                                .fg(Color::Yellow)
                                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                        } else {
                            Style::default()
                        };
                        Span::styled(format!("  {}  ", d.label()), style)
                    })
                    .collect();
                vec![
                    Line::raw("Choose a difficulty"),
                    Line::default(),
                    Line::from(tiers),
                    Line::default(),
                    Line::raw(format!(
                        "Answer as many as you can in {} seconds",
                        ROUND_SECONDS
                    )),
                ]
            }
            ChallengePhase::Active => vec![
                Line::styled(
                    game.problem()
                        .map(|p| format!("{} = ?", p.question()))
                        .unwrap_or_default(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Line::default(),
                Line::raw(format!("Your answer: {}▏", game.input())),
                Line::default(),
                feedback_line(game.feedback()),
            ],
            ChallengePhase::Finished => vec![
                feedback_line(game.feedback()),
                Line::default(),
                Line::raw("Press Enter to play again"),
            ],
        };
        frame.render_widget(
            Paragraph::new(body)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
            chunks[2],
        );

        let help_text = match game.phase() {
            ChallengePhase::Active => "Digits: Answer | Enter: Submit | Esc: Menu",
            _ => "←→: Difficulty | Enter: Start | Esc: Menu",
        };
        let help = Paragraph::new(help_text)
            .style(help_style())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[3]);
    }

    #[instrument(skip(self, key, _arcade))]
    fn handle_key(&mut self, key: KeyEvent, _arcade: &mut Arcade) -> ScreenTransition {
        let active = self.host.game().is_active();
        match key.code {
            KeyCode::Esc => return ScreenTransition::GoToMenu,
            KeyCode::Left | KeyCode::Right if !active => self.cycle_difficulty(),
            KeyCode::Enter if active => self.submit(),
            KeyCode::Enter => self.start(),
            KeyCode::Backspace => self.host.game_mut().backspace(),
            KeyCode::Char(c) => self.host.game_mut().type_char(c),
            _ => {}
        }
        ScreenTransition::Stay
    }

    fn update(&mut self, _arcade: &mut Arcade) {
        for _ in 0..self.host.pump() {
            if self.host.game_mut().tick().is_some() {
                self.host.cancel_all();
                break;
            }
        }
    }
}
