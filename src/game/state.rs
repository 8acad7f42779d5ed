use std::fmt;

use super::{PlayerId, SlotPos};

/// Top-level game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Uninitialized,
    Playing,
    Finished,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Uninitialized => "uninitialized",
            Phase::Playing => "playing",
            Phase::Finished => "finished",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Winner {
        player: PlayerId,
        line: Vec<SlotPos>,
    },
    Draw,
}

impl Outcome {
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            Outcome::Winner { player, .. } => Some(*player),
            Outcome::Draw => None,
        }
    }
}

/// Whose turn it is and the single move that can be undone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchState {
    current_player_index: usize,
    last_move: Option<SlotPos>,
}

impl MatchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_player_index(&self) -> usize {
        self.current_player_index
    }

    pub fn last_move(&self) -> Option<SlotPos> {
        self.last_move
    }

    pub(crate) fn record_move(&mut self, pos: SlotPos) {
        self.last_move = Some(pos);
    }

    pub(crate) fn take_last_move(&mut self) -> Option<SlotPos> {
        self.last_move.take()
    }

    pub(crate) fn advance(&mut self, player_count: usize) {
        self.current_player_index = (self.current_player_index + 1) % player_count;
    }

    pub(crate) fn rewind(&mut self, player_count: usize) {
        self.current_player_index =
            (self.current_player_index + player_count - 1) % player_count;
    }
}
