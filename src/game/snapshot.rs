use super::{Outcome, Phase, PlayerId, SlotPos};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSummary {
    pub id: PlayerId,
    pub color: String,
    pub name: String,
    pub score: u32,
}

/// Everything a renderer needs, detached from the live game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub columns: usize,
    pub rows: usize,
    /// Row-major occupants, row 0 at the top.
    pub slots: Vec<Option<PlayerId>>,
    pub hovered_column: Option<usize>,
    /// Where a piece would land in the hovered column.
    pub hint: Option<SlotPos>,
    pub phase: Phase,
    pub current_player: Option<PlayerId>,
    pub outcome: Option<Outcome>,
    pub players: Vec<PlayerSummary>,
    pub undo_available: bool,
}

impl Snapshot {
    pub fn occupant(&self, row: usize, col: usize) -> Option<PlayerId> {
        if row >= self.rows || col >= self.columns {
            return None;
        }
        self.slots[row * self.columns + col]
    }

    pub fn player(&self, id: PlayerId) -> Option<&PlayerSummary> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn current(&self) -> Option<&PlayerSummary> {
        self.current_player.and_then(|id| self.player(id))
    }

    /// Whether `pos` belongs to the winning line.
    pub fn is_winning_slot(&self, pos: SlotPos) -> bool {
        matches!(&self.outcome, Some(Outcome::Winner { line, .. }) if line.contains(&pos))
    }
}
