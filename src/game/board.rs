use crate::error::BoardError;

use super::PlayerId;

pub const DEFAULT_COLUMNS: usize = 7;
pub const DEFAULT_ROWS: usize = 6;

/// Grid coordinates. Row 0 is the top row, so pieces settle toward
/// `height - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotPos {
    pub row: usize,
    pub col: usize,
}

impl SlotPos {
    pub fn new(row: usize, col: usize) -> Self {
        SlotPos { row, col }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pos: SlotPos,
    occupant: Option<PlayerId>,
}

impl Slot {
    pub fn pos(&self) -> SlotPos {
        self.pos
    }

    pub fn row(&self) -> usize {
        self.pos.row
    }

    pub fn col(&self) -> usize {
        self.pos.col
    }

    pub fn occupant(&self) -> Option<PlayerId> {
        self.occupant
    }

    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }
}

/// Fixed-size grid of slots stored row-major in a single vector.
///
/// The board knows nothing about turn order. Occupancy only changes through
/// [`Game`](super::Game), which always fills the lowest empty slot of a
/// column, so occupied slots in a column stay contiguous from the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    slots: Vec<Slot>,
}

impl Board {
    /// Create an empty board
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::InvalidDimensions { width, height });
        }

        let slots = (0..height)
            .flat_map(|row| {
                (0..width).map(move |col| Slot {
                    pos: SlotPos { row, col },
                    occupant: None,
                })
            })
            .collect();

        Ok(Board {
            width,
            height,
            slots,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }

    /// Bounds-checked slot accessor
    pub fn slot_at(&self, row: usize, col: usize) -> Result<&Slot, BoardError> {
        let index = self.index(row, col)?;
        Ok(&self.slots[index])
    }

    /// Occupant of an in-bounds position, `None` when empty or out of bounds.
    pub fn occupant(&self, row: usize, col: usize) -> Option<PlayerId> {
        self.slot_at(row, col).ok().and_then(Slot::occupant)
    }

    /// Lowest unoccupied slot in `col`, or `None` if the column is full or
    /// outside the board.
    pub fn available_slot_in_column(&self, col: usize) -> Option<&Slot> {
        if col >= self.width {
            return None;
        }

        (0..self.height)
            .rev()
            .map(|row| &self.slots[row * self.width + col])
            .find(|slot| slot.is_empty())
    }

    pub fn is_column_full(&self, col: usize) -> bool {
        self.available_slot_in_column(col).is_none()
    }

    /// Check if every slot is occupied
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|slot| !slot.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Slot::is_empty)
    }

    /// All slots, row-major from the top-left corner.
    pub fn slots(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter()
    }

    pub(crate) fn occupy(&mut self, pos: SlotPos, player: PlayerId) -> Result<(), BoardError> {
        let index = self.index(pos.row, pos.col)?;
        self.slots[index].occupant = Some(player);
        Ok(())
    }

    pub(crate) fn vacate(&mut self, pos: SlotPos) -> Result<(), BoardError> {
        let index = self.index(pos.row, pos.col)?;
        self.slots[index].occupant = None;
        Ok(())
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, BoardError> {
        if !self.contains(row, col) {
            return Err(BoardError::OutOfRange {
                row,
                col,
                width: self.width,
                height: self.height,
            });
        }
        Ok(row * self.width + col)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new(DEFAULT_COLUMNS, DEFAULT_ROWS).expect("default dimensions are positive")
    }
}
