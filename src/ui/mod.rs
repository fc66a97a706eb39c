//! Terminal UI: the rendering and input collaborator for the game engine.
//! Draws the board, maps key presses to column drops, and surfaces win/draw
//! notifications.

mod app;
mod game_view;

pub use app::App;
