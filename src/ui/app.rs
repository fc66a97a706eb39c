use crate::config::AppConfig;
use crate::game::{DropOutcome, GameState, MoveError};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, style::Color, Terminal};
use std::io;

use super::game_view::{self, PlayerColors};

pub struct App {
    game_state: GameState,
    colors: PlayerColors,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

/// Resolve a configured color name to a terminal color. Config validation
/// already rejects unknown names; the fallback keeps rendering total.
fn parse_color(name: &str, fallback: Color) -> Color {
    name.parse().unwrap_or(fallback)
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let colors = [
            parse_color(&config.game.player1_color, Color::Red),
            parse_color(&config.game.player2_color, Color::Yellow),
        ];
        let game_state = GameState::new(config.game.clone());

        App {
            selected_column: game_state.board().width() / 2, // Start in middle
            game_state,
            colors,
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.game_state.board().width() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                // A new game is a fresh state, never a transition of the old one
                self.game_state = GameState::new(self.game_state.config().clone());
                self.selected_column = self.game_state.board().width() / 2;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        match self.game_state.apply_move_mut(self.selected_column) {
            Ok(DropOutcome::Won(player)) => {
                self.message = Some(format!("Player {} won!", self.game_state.color_of(player)));
            }
            Ok(DropOutcome::Draw) => {
                self.message = Some("Tie!".to_string());
            }
            Ok(DropOutcome::Placed) => {}
            Err(MoveError::ColumnFull) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::InvalidColumn) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game over! Press 'r' for a new game.".to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        game_view::render(
            frame,
            &self.game_state,
            self.selected_column,
            &self.message,
            self.colors,
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}
