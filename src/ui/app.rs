use crate::config::{GameConfig, PALETTE_SIZE};
use crate::error::{MoveError, SessionError};
use crate::game::{GameSession, Player, COLS, MAX_DIFFICULTY, MIN_DIFFICULTY};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;

use super::game_view::{self, outcome_text};
use super::menu_view::{self, MenuItem};
use super::palette::{board_color, next_color};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Menu,
    Game,
}

pub struct App {
    config: GameConfig,
    screen: Screen,
    menu_index: usize,
    editing_name: bool,
    session: Option<GameSession>,
    selected_column: usize,
    /// The AI moves on the next loop pass, after the last human move is drawn.
    ai_pending: bool,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: GameConfig) -> Self {
        App {
            config,
            screen: Screen::Menu,
            menu_index: 0,
            editing_name: false,
            session: None,
            selected_column: COLS / 2,
            ai_pending: false,
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.ai_pending {
                self.play_ai();
                continue;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match self.screen {
            Screen::Menu => self.handle_menu_key(key),
            Screen::Game => self.handle_game_key(key),
        }
    }

    fn selected_item(&self) -> MenuItem {
        MenuItem::ALL[self.menu_index]
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        if self.editing_name {
            match key.code {
                KeyCode::Enter | KeyCode::Esc => self.editing_name = false,
                KeyCode::Backspace => {
                    self.config.player_name.pop();
                }
                KeyCode::Char(c) => self.config.player_name.push(c),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up => {
                self.menu_index = self.menu_index.checked_sub(1).unwrap_or(MenuItem::ALL.len() - 1);
            }
            KeyCode::Down => {
                self.menu_index = (self.menu_index + 1) % MenuItem::ALL.len();
            }
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right => {
                self.activate(self.selected_item());
            }
            _ => {}
        }
    }

    fn activate(&mut self, item: MenuItem) {
        match item {
            MenuItem::BoardColor => {
                self.config.board_color = next_color(self.config.board_color.clamp(1, PALETTE_SIZE));
            }
            MenuItem::PlayerName => self.editing_name = true,
            MenuItem::StartingPlayer => {
                self.config.starting_player = self.config.starting_player.other();
            }
            MenuItem::Difficulty => {
                self.config.difficulty = if self.config.difficulty >= MAX_DIFFICULTY {
                    MIN_DIFFICULTY
                } else {
                    self.config.difficulty + 1
                };
            }
            MenuItem::Start => self.start_game(),
        }
    }

    fn start_game(&mut self) {
        if self.config.player_name.trim().is_empty() {
            self.config.player_name = GameConfig::default().player_name;
        }
        match self.config.session() {
            Ok(session_config) => {
                let session = GameSession::new(session_config);
                self.ai_pending = session.turn() == Player::Ai;
                self.session = Some(session);
                self.selected_column = COLS / 2;
                self.message = None;
                self.screen = Screen::Game;
            }
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    fn handle_game_key(&mut self, key: KeyEvent) {
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < COLS {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.drop_piece(),
            KeyCode::Char('r') => {
                self.session = None;
                self.ai_pending = false;
                self.screen = Screen::Menu;
            }
            _ => {}
        }
    }

    /// Drop the human's piece in the selected column
    fn drop_piece(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        match session.play_human(self.selected_column) {
            Ok(Some(_)) => {}
            Ok(None) => self.ai_pending = session.check_draw().is_none(),
            Err(SessionError::GameOver) => {
                self.message = Some("Game over! Press 'r' for the menu.".to_string());
            }
            Err(SessionError::Move(MoveError::ColumnFull(_))) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(e) => self.message = Some(e.to_string()),
        }
        self.announce_outcome();
    }

    fn play_ai(&mut self) {
        self.ai_pending = false;
        let Some(session) = self.session.as_mut() else {
            return;
        };
        match session.play_ai() {
            Ok(_) => {
                session.check_draw();
            }
            Err(SessionError::GameOver) => {}
            Err(e) => self.message = Some(e.to_string()),
        }
        self.announce_outcome();
    }

    fn announce_outcome(&mut self) {
        if let Some(report) = self.session.as_ref().and_then(GameSession::report) {
            self.message = Some(format!(
                "{}  Press 'r' for the menu.",
                outcome_text(report.outcome, &self.config.player_name)
            ));
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        match (&self.screen, &self.session) {
            (Screen::Game, Some(session)) => game_view::render(
                frame,
                session,
                self.selected_column,
                &self.message,
                &self.config.player_name,
                board_color(self.config.board_color),
            ),
            _ => menu_view::render(frame, &self.config, self.selected_item(), self.editing_name),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
