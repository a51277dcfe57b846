//! Board invariants.
//!
//! Invariants are logical properties that must hold between moves. The
//! agent checks them in debug builds; tests check them directly.

use crate::{Board, Cell, Position};
use std::collections::HashSet;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: `Mine`, `Theirs` and `Empty` partition the 9 positions.
///
/// The three position lists are pairwise disjoint, cover every coordinate,
/// and agree with `Board::cell`.
pub struct PartitionInvariant;

impl<B: Board> Invariant<B> for PartitionInvariant {
    fn holds(board: &B) -> bool {
        let mut seen = HashSet::new();
        for cell in [Cell::Mine, Cell::Theirs, Cell::Empty] {
            for pos in board.positions_of(cell) {
                if board.cell(pos) != cell || !seen.insert(pos) {
                    return false;
                }
            }
        }
        seen.len() == Position::ALL.len()
    }

    fn description() -> &'static str {
        "Mine, Theirs and Empty must partition the 9 cells"
    }
}

/// Invariant: the two sides' mark counts differ by at most one.
pub struct BalancedMarksInvariant;

impl<B: Board> Invariant<B> for BalancedMarksInvariant {
    fn holds(board: &B) -> bool {
        let mine = board.positions_of(Cell::Mine).len();
        let theirs = board.positions_of(Cell::Theirs).len();
        mine.abs_diff(theirs) <= 1
    }

    fn description() -> &'static str {
        "Players must alternate, so mark counts differ by at most one"
    }
}

/// All board invariants as a composable set.
pub type BoardInvariants = (PartitionInvariant, BalancedMarksInvariant);
