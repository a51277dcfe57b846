//! Game rules for tic-tac-toe.
//!
//! Pure functions over the `Board` trait. Representations may override the
//! matching trait methods with faster versions, but must agree with these.

pub mod draw;
pub mod threat;
pub mod win;

use crate::Position;

pub use draw::is_full;
pub use threat::winning_move;
pub use win::status;

/// The 8 winning lines, in scan order: rows, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];
