//! Main menu: the effects showcase plus the catalogue and account actions.

use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use senipy_effects::Bounds;
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};

use crate::catalogue::GameKind;
use crate::lobby::arcade::Arcade;
use crate::lobby::screen::{Screen, ScreenTransition};
use crate::lobby::widgets::{help_style, logo_lines, orb_canvas, reveal_line, shine_line};

/// Menu options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuOption {
    Play(GameKind),
    SignIn,
    SignUp,
    Download,
    Quit,
}

impl MenuOption {
    #[instrument]
    fn all() -> Vec<MenuOption> {
        GameKind::iter()
            .map(Self::Play)
            .chain([Self::SignIn, Self::SignUp, Self::Download, Self::Quit])
            .collect()
    }
}

/// Areas of the menu layout.
#[derive(Debug, Clone, Copy)]
struct MenuLayout {
    logo: Rect,
    title: Rect,
    orb: Rect,
    list: Rect,
    status: Rect,
    help: Rect,
}

impl MenuLayout {
    fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(7),
                Constraint::Min(8),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(area);
        let header = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(16),
                Constraint::Min(20),
                Constraint::Length(16),
            ])
            .split(rows[0]);
        Self {
            logo: header[0],
            title: header[1],
            orb: header[2],
            list: rows[1],
            status: rows[2],
            help: rows[3],
        }
    }
}

/// State for the main menu.
#[derive(Debug)]
pub struct MainMenuScreen {
    options: Vec<MenuOption>,
    list_state: ListState,
}

impl Default for MainMenuScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl MainMenuScreen {
    /// Creates the menu with the first game selected.
    #[instrument]
    pub fn new() -> Self {
        debug!("Initializing MainMenuScreen");
        let mut state = ListState::default();
        state.select(Some(0));
        Self {
            options: MenuOption::all(),
            list_state: state,
        }
    }

    /// Moves selection up.
    #[instrument(skip(self))]
    fn select_previous(&mut self) {
        let count = self.options.len();
        let i = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => count - 1,
        };
        self.list_state.select(Some(i));
    }

    /// Moves selection down.
    #[instrument(skip(self))]
    fn select_next(&mut self) {
        let count = self.options.len();
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % count,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    /// Returns the currently selected option.
    fn selected_option(&self) -> MenuOption {
        let idx = self.list_state.selected().unwrap_or(0);
        self.options[idx.min(self.options.len() - 1)]
    }

    fn option_item(option: MenuOption, arcade: &Arcade) -> ListItem<'static> {
        match option {
            MenuOption::Play(kind) => {
                let state = if arcade.catalogue().is_playing(kind) {
                    " ▶ playing"
                } else {
                    ""
                };
                ListItem::new(Line::from(vec![
                    Span::raw(format!("{} ", kind.icon())),
                    Span::styled(
                        format!("{:<20}", kind.name()),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(kind.description(), Style::default().fg(Color::Gray)),
                    Span::styled(state, Style::default().fg(Color::Green)),
                ]))
            }
            MenuOption::SignIn => ListItem::new("🔑 Sign in"),
            MenuOption::SignUp => ListItem::new("✨ Create account"),
            MenuOption::Download => ListItem::new("📥 Download the app"),
            MenuOption::Quit => ListItem::new("   Quit"),
        }
    }
}

impl Screen for MainMenuScreen {
    #[instrument(skip_all)]
    fn render(&self, frame: &mut Frame, arcade: &Arcade) {
        let layout = MenuLayout::new(frame.area());
        let now = arcade.now();
        let showcase = arcade.showcase();

        let (logo, float_rows) = logo_lines(&showcase.logo().frame(now));
        let logo_area = Rect {
            y: layout.logo.y + 1 + float_rows,
            height: 2,
            ..layout.logo
        };
        frame.render_widget(
            Paragraph::new(logo).alignment(Alignment::Center),
            logo_area.intersection(layout.logo),
        );

        let mut title = vec![
            Line::default(),
            shine_line(showcase.title(), now),
            reveal_line(showcase.tagline(), now),
            Line::default(),
        ];
        // The cycler appears once the tagline has finished revealing.
        if showcase.is_tagline_done() {
            title.push(Line::from(vec![
                Span::raw("Train your "),
                Span::styled(
                    showcase.cycler().word_at(now).to_string(),
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
        }
        frame.render_widget(
            Paragraph::new(title).alignment(Alignment::Center),
            layout.title,
        );

        frame.render_widget(orb_canvas(showcase.orb(), now), layout.orb);

        let items: Vec<ListItem> = self
            .options
            .iter()
            .map(|opt| Self::option_item(*opt, arcade))
            .collect();
        let menu = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Games"))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");
        let mut list_state = self.list_state;
        frame.render_stateful_widget(menu, layout.list, &mut list_state);

        let status = format!(
            "Catalogue points: {}   {}",
            arcade.catalogue().points(),
            arcade.status().unwrap_or_default()
        );
        frame.render_widget(
            Paragraph::new(status)
                .style(Style::default().fg(Color::Green))
                .block(Block::default().borders(Borders::ALL)),
            layout.status,
        );

        let help = Paragraph::new("↑↓: Navigate | Enter: Select | d: Download | q: Quit")
            .style(help_style())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, layout.help);
    }

    #[instrument(skip(self, key, arcade))]
    fn handle_key(&mut self, key: KeyEvent, arcade: &mut Arcade) -> ScreenTransition {
        match key.code {
            KeyCode::Up => {
                self.select_previous();
                ScreenTransition::Stay
            }
            KeyCode::Down => {
                self.select_next();
                ScreenTransition::Stay
            }
            KeyCode::Char('d') | KeyCode::Char('D') => {
                arcade.save_download();
                ScreenTransition::Stay
            }
            KeyCode::Enter => {
                let option = self.selected_option();
                info!(option = ?option, "Menu option selected");
                match option {
                    MenuOption::Play(kind) => ScreenTransition::GoToGame(kind),
                    MenuOption::SignIn => ScreenTransition::GoToSignIn,
                    MenuOption::SignUp => ScreenTransition::GoToSignUp,
                    MenuOption::Download => {
                        arcade.save_download();
                        ScreenTransition::Stay
                    }
                    MenuOption::Quit => ScreenTransition::Quit,
                }
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent, arcade: &mut Arcade) {
        if !matches!(
            mouse.kind,
            MouseEventKind::Moved | MouseEventKind::Drag(_)
        ) {
            return;
        }
        let orb = MenuLayout::new(arcade.viewport()).orb;
        let bounds = Bounds::new(
            f32::from(orb.x),
            f32::from(orb.y),
            f32::from(orb.width),
            f32::from(orb.height),
        );
        let inside = orb.contains((mouse.column, mouse.row).into());
        let now = arcade.now();
        arcade.showcase_mut().track_pointer(
            f32::from(mouse.column),
            f32::from(mouse.row),
            &bounds,
            inside,
            now,
        );
    }

    fn update(&mut self, arcade: &mut Arcade) {
        let now = arcade.now();
        let showcase = arcade.showcase_mut();
        showcase.show_tagline(now);
        showcase.poll_tagline(now);
    }
}
