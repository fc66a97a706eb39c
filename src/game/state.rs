use serde::{Deserialize, Serialize};

use super::board::{self, Board, Cell, DEFAULT_COLS, DEFAULT_ROWS};
use super::Player;

/// Game setup: board dimensions and each player's display color.
///
/// Color values are the names the terminal understands ("red", "cyan",
/// "#ff8800", ...); the engine treats them as opaque display attributes.
/// Embedded in [`crate::config::AppConfig`] as the `[game]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub height: usize,
    pub width: usize,
    pub player1_color: String,
    pub player2_color: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            height: DEFAULT_ROWS,
            width: DEFAULT_COLS,
            player1_color: "red".to_string(),
            player2_color: "yellow".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

/// What an accepted drop did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    Placed,
    Won(Player),
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
    GameOver,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    config: GameConfig,
    current_player: Player,
    status: GameStatus,
}

impl GameState {
    /// Create the initial state for a new game: cleared board, Player 1 to
    /// move. Dimensions below 4 are accepted; no win is ever detectable on
    /// such a board.
    pub fn new(config: GameConfig) -> Self {
        GameState {
            board: Board::new(config.height, config.width),
            current_player: Player::One, // Player 1 starts
            status: GameStatus::InProgress,
            config,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get the cell at (row, col); row 0 is the top.
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.board.get(row, col)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The configured display color of a player.
    pub fn color_of(&self, player: Player) -> &str {
        match player {
            Player::One => &self.config.player1_color,
            Player::Two => &self.config.player2_color,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Get list of legal columns (not full); empty once the game is over.
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..self.board.width())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Apply a move and return the new state plus outcome (immutable).
    /// A rejected move returns an error and leaves `self` untouched.
    pub fn apply_move(&self, column: usize) -> Result<(GameState, DropOutcome), MoveError> {
        let mut next = self.clone();
        let outcome = next.apply_move_mut(column)?;
        Ok((next, outcome))
    }

    /// Apply a move in place (for UI efficiency).
    ///
    /// After an accepted placement the win scan runs for the mover; on a win
    /// or a full board the state becomes terminal and the turn does not
    /// advance. Only an `InProgress`-preserving move swaps the turn.
    pub fn apply_move_mut(&mut self, column: usize) -> Result<DropOutcome, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        self.board
            .drop_piece(column, self.current_player.to_cell())
            .map_err(|e| match e {
                board::MoveError::ColumnFull => MoveError::ColumnFull,
                board::MoveError::InvalidColumn => MoveError::InvalidColumn,
            })?;

        if self.board.has_winning_run(self.current_player.to_cell()) {
            self.status = GameStatus::Won(self.current_player);
            return Ok(DropOutcome::Won(self.current_player));
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
            return Ok(DropOutcome::Draw);
        }

        self.current_player = self.current_player.other();
        Ok(DropOutcome::Placed)
    }
}
