//! Tic-tac-toe game logic for the stdio agent.
//!
//! # Architecture
//!
//! - **Position**: the nine cells, addressed row-major (`row * 3 + col`)
//! - **Board**: trait over cell storage, with a weighted numeric grid and a
//!   set-based representation behind it
//! - **Rules**: terminal detection and the immediate-win scan, written once
//!   against the `Board` trait
//! - **Invariants**: properties every board must keep between moves

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod invariants;
mod position;
mod rules;
mod types;

pub use board::{Board, GridBoard, SetBoard};
pub use error::{BoardError, BoardErrorKind};
pub use invariants::{
    BalancedMarksInvariant, BoardInvariants, Invariant, InvariantSet, InvariantViolation,
    PartitionInvariant,
};
pub use position::Position;
pub use rules::{LINES, is_full, status, winning_move};
pub use types::{Cell, Mark, Status};
