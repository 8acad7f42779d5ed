//! Four-in-a-row detection.
//!
//! Both entry points walk outward from a slot along the four axes and stop at
//! the board edge; nothing wraps. Each move places a single piece, so at most
//! one player can own winning lines at any time and the full scan and the
//! incremental check always agree on the winner.

use super::{Board, PlayerId, SlotPos};

/// Contiguous same-owner slots needed to win.
pub const WIN_LENGTH: usize = 4;

/// Horizontal, vertical, diagonal down-right, diagonal down-left.
const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinLine {
    pub player: PlayerId,
    /// Every contiguous slot on the winning axis, ordered along the axis.
    pub slots: Vec<SlotPos>,
}

/// Check whether the piece at `pos` completes a line. Used after each drop.
pub fn winning_line_through(board: &Board, pos: SlotPos) -> Option<WinLine> {
    let player = board.occupant(pos.row, pos.col)?;

    AXES.iter().find_map(|&(dr, dc)| {
        let mut backward = walk(board, pos, -dr, -dc, player);
        backward.reverse();
        let forward = walk(board, pos, dr, dc, player);

        if backward.len() + 1 + forward.len() < WIN_LENGTH {
            return None;
        }

        let mut slots = backward;
        slots.push(pos);
        slots.extend(forward);
        Some(WinLine { player, slots })
    })
}

/// Full-board scan, testing every occupied slot.
pub fn find_winning_line(board: &Board) -> Option<WinLine> {
    board
        .slots()
        .filter(|slot| !slot.is_empty())
        .find_map(|slot| winning_line_through(board, slot.pos()))
}

pub fn find_winner(board: &Board) -> Option<PlayerId> {
    find_winning_line(board).map(|line| line.player)
}

/// Collect same-owner slots stepping from `from` (exclusive) by `(dr, dc)`.
fn walk(board: &Board, from: SlotPos, dr: isize, dc: isize, player: PlayerId) -> Vec<SlotPos> {
    let mut run = Vec::new();
    let mut current = from;

    while let Some(next) = step(board, current, dr, dc) {
        if board.occupant(next.row, next.col) != Some(player) {
            break;
        }
        run.push(next);
        current = next;
    }

    run
}

fn step(board: &Board, pos: SlotPos, dr: isize, dc: isize) -> Option<SlotPos> {
    let row = pos.row.checked_add_signed(dr)?;
    let col = pos.col.checked_add_signed(dc)?;
    board.contains(row, col).then_some(SlotPos { row, col })
}
