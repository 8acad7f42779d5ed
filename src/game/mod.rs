//! Core Connect Four game logic: board and slots, player registry, win
//! detection, and the game state machine driven by the presentation layer.

mod board;
mod controller;
mod player;
pub mod snapshot;
mod state;
pub mod win;

pub use board::{Board, Slot, SlotPos, DEFAULT_COLUMNS, DEFAULT_ROWS};
pub use controller::{DropResult, Game};
pub use player::{Player, PlayerId, PlayerRegistry};
pub use snapshot::{PlayerSummary, Snapshot};
pub use state::{MatchState, Outcome, Phase};
pub use win::{find_winner, find_winning_line, winning_line_through, WinLine, WIN_LENGTH};
