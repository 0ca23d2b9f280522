//! Sign-in and sign-up screens.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use tracing::{debug, instrument};

use crate::auth::{Field, Form, SignInForm, SignUpForm};
use crate::lobby::arcade::Arcade;
use crate::lobby::screen::{Screen, ScreenTransition};
use crate::lobby::widgets::{center_rect, help_style};

/// What a key press did to a form.
enum FormKey {
    Edited,
    Submit,
    Back,
}

fn edit_form<F: Form>(form: &mut F, key: KeyEvent) -> FormKey {
    match key.code {
        KeyCode::Esc => return FormKey::Back,
        KeyCode::Enter => return FormKey::Submit,
        KeyCode::Tab | KeyCode::Down => form.next_field(),
        KeyCode::BackTab | KeyCode::Up => form.previous_field(),
        KeyCode::Backspace => form.backspace(),
        KeyCode::Char(c) => form.type_char(c),
        _ => {}
    }
    FormKey::Edited
}

fn label(field: Field) -> &'static str {
    match field {
        Field::Name => "Full name",
        Field::Email => "Email",
        Field::Password => "Password",
    }
}

fn render_form<F: Form>(
    frame: &mut Frame,
    title: &str,
    form: &F,
    error: Option<&str>,
    footer: &str,
) {
    let height = form.fields().len() as u16 * 3 + 6;
    let area = center_rect(frame.area(), 60, height);
    frame.render_widget(Clear, area);
    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .title(title.to_string())
            .title_alignment(Alignment::Center),
        area,
    );

    let mut constraints: Vec<Constraint> =
        form.fields().iter().map(|_| Constraint::Length(3)).collect();
    constraints.push(Constraint::Length(2));
    constraints.push(Constraint::Min(1));
    let inner = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(constraints)
        .split(area);

    for (i, field) in form.fields().iter().enumerate() {
        let value = form.value(*field);
        let shown = match field {
            Field::Password => "•".repeat(value.chars().count()),
            _ => value.to_string(),
        };
        let focused = *field == form.focused();
        let style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let cursor = if focused { "▏" } else { "" };
        frame.render_widget(
            Paragraph::new(format!("{}{}", shown, cursor)).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(style)
                    .title(label(*field)),
            ),
            inner[i],
        );
    }

    let n = form.fields().len();
    let message = match error {
        Some(e) => Line::styled(e.to_string(), Style::default().fg(Color::Red)),
        None => Line::from(Span::styled(footer.to_string(), help_style())),
    };
    frame.render_widget(
        Paragraph::new(message).alignment(Alignment::Center),
        inner[n],
    );
    frame.render_widget(
        Paragraph::new(Line::styled(
            "Tab: Next field | Enter: Submit | Esc: Back",
            help_style(),
        ))
        .alignment(Alignment::Center),
        inner[n + 1],
    );
}

/// State for the sign-in screen.
#[derive(Debug, Default)]
pub struct SignInScreen {
    form: SignInForm,
    error: Option<String>,
    signed_in: Option<String>,
}

impl SignInScreen {
    /// An empty sign-in form.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Screen for SignInScreen {
    #[instrument(skip_all)]
    fn render(&self, frame: &mut Frame, _arcade: &Arcade) {
        if let Some(email) = &self.signed_in {
            let area = center_rect(frame.area(), 50, 5);
            frame.render_widget(Clear, area);
            frame.render_widget(
                Paragraph::new(vec![
                    Line::styled(
                        format!("Welcome back, {}!", email),
                        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                    ),
                    Line::styled("Press any key to continue", help_style()),
                ])
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
                area,
            );
            return;
        }
        render_form(
            frame,
            "Sign in to SENIPY",
            &self.form,
            self.error.as_deref(),
            "No account yet? Esc, then Create account",
        );
    }

    #[instrument(skip(self, key, arcade))]
    fn handle_key(&mut self, key: KeyEvent, arcade: &mut Arcade) -> ScreenTransition {
        if self.signed_in.is_some() {
            return ScreenTransition::GoToMenu;
        }
        match edit_form(&mut self.form, key) {
            FormKey::Back => ScreenTransition::GoToMenu,
            FormKey::Submit => {
                match self.form.submit() {
                    Ok(email) => {
                        arcade.set_status(format!("Signed in as {}", email));
                        self.signed_in = Some(email);
                        self.error = None;
                    }
                    Err(e) => self.error = Some(e.to_string()),
                }
                ScreenTransition::Stay
            }
            FormKey::Edited => {
                self.error = None;
                ScreenTransition::Stay
            }
        }
    }
}

/// State for the sign-up screen.
#[derive(Debug, Default)]
pub struct SignUpScreen {
    form: SignUpForm,
    error: Option<String>,
}

impl SignUpScreen {
    /// An empty sign-up form.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Screen for SignUpScreen {
    #[instrument(skip_all)]
    fn render(&self, frame: &mut Frame, _arcade: &Arcade) {
        render_form(
            frame,
            "Create your SENIPY account",
            &self.form,
            self.error.as_deref(),
            "We'll send a verification code to your email",
        );
    }

    #[instrument(skip(self, key, _arcade))]
    fn handle_key(&mut self, key: KeyEvent, _arcade: &mut Arcade) -> ScreenTransition {
        match edit_form(&mut self.form, key) {
            FormKey::Back => ScreenTransition::GoToMenu,
            FormKey::Submit => match self.form.submit() {
                Ok(session) => {
                    debug!("Opening verification");
                    ScreenTransition::GoToVerification(session)
                }
                Err(e) => {
                    self.error = Some(e.to_string());
                    ScreenTransition::Stay
                }
            },
            FormKey::Edited => {
                self.error = None;
                ScreenTransition::Stay
            }
        }
    }
}
