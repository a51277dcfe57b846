//! Immediate-win scan.

use super::LINES;
use crate::{Board, Cell, Position};
use tracing::instrument;

/// Returns the empty cell that completes a line of two of this agent's
/// marks, if one exists.
///
/// Lines are scanned rows first, then columns, then diagonals; the first
/// qualifying line decides.
#[instrument(skip(board))]
pub fn winning_move<B: Board + ?Sized>(board: &B) -> Option<Position> {
    LINES.iter().find_map(|line| completing_cell(board, line))
}

fn completing_cell<B: Board + ?Sized>(board: &B, line: &[Position; 3]) -> Option<Position> {
    let mut mine = 0;
    let mut empty = None;
    for &pos in line {
        match board.cell(pos) {
            Cell::Mine => mine += 1,
            Cell::Empty if empty.is_none() => empty = Some(pos),
            _ => return None,
        }
    }
    if mine == 2 { empty } else { None }
}
