//! Set-based position tracking.

use super::Board;
use crate::rules::LINES;
use crate::{BoardError, BoardErrorKind, Cell, Mark, Position, Status};
use std::collections::HashSet;

/// One set of positions per cell state.
///
/// Iteration order of the empty set is unspecified, so `empty_positions`
/// yields the free cells in arbitrary order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetBoard {
    mine: HashSet<Position>,
    theirs: HashSet<Position>,
    empty: HashSet<Position>,
}

impl SetBoard {
    fn set_for(&self, cell: Cell) -> &HashSet<Position> {
        match cell {
            Cell::Empty => &self.empty,
            Cell::Mine => &self.mine,
            Cell::Theirs => &self.theirs,
        }
    }

    fn contains_line(positions: &HashSet<Position>) -> bool {
        LINES
            .iter()
            .any(|line| positions.is_superset(&HashSet::from(*line)))
    }
}

impl Default for SetBoard {
    fn default() -> Self {
        Self::new_empty()
    }
}

impl Board for SetBoard {
    fn new_empty() -> Self {
        Self {
            mine: HashSet::new(),
            theirs: HashSet::new(),
            empty: HashSet::from(Position::ALL),
        }
    }

    fn cell(&self, pos: Position) -> Cell {
        if self.mine.contains(&pos) {
            Cell::Mine
        } else if self.theirs.contains(&pos) {
            Cell::Theirs
        } else {
            Cell::Empty
        }
    }

    fn place(&mut self, pos: Position, mark: Mark) -> Result<(), BoardError> {
        if !self.empty.remove(&pos) {
            return Err(BoardError::new(BoardErrorKind::Occupied(pos)));
        }
        match mark {
            Mark::Mine => self.mine.insert(pos),
            Mark::Theirs => self.theirs.insert(pos),
        };
        Ok(())
    }

    fn positions_of(&self, cell: Cell) -> Vec<Position> {
        self.set_for(cell).iter().copied().collect()
    }

    fn is_empty_at(&self, pos: Position) -> bool {
        self.empty.contains(&pos)
    }

    fn is_full(&self) -> bool {
        self.empty.is_empty()
    }

    fn status(&self) -> Status {
        if Self::contains_line(&self.mine) {
            Status::Win
        } else if Self::contains_line(&self.theirs) {
            Status::Loss
        } else if self.is_full() {
            Status::Tie
        } else {
            Status::Ongoing
        }
    }

    fn winning_move(&self) -> Option<Position> {
        LINES.iter().find_map(|line| {
            let held = line.iter().filter(|&&pos| self.mine.contains(&pos)).count();
            let mut open = line.iter().filter(|&&pos| self.empty.contains(&pos));
            match (held, open.next()) {
                (2, Some(&pos)) => Some(pos),
                _ => None,
            }
        })
    }
}
