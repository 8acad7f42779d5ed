//! Terminal UI: renders game snapshots with Ratatui and turns keyboard and
//! mouse events into game actions.

mod app;
pub mod board_widget;
mod game_view;
pub mod input;

pub use app::App;
