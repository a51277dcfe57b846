//! Full-board detection.

use crate::{Board, Position};

/// Checks if the board is full (no empty cell left).
///
/// A full board with no complete line is a tie.
pub fn is_full<B: Board + ?Sized>(board: &B) -> bool {
    Position::ALL.iter().all(|&pos| !board.is_empty_at(pos))
}
