//! Weighted numeric grid.

use super::Board;
use crate::rules::LINES;
use crate::{BoardError, BoardErrorKind, Cell, Mark, Position, Status};
use serde::{Deserialize, Serialize};

const EMPTY: u32 = 0;
const MINE: u32 = 1;
const THEIRS: u32 = 100;

/// 3x3 grid of weights; a line's sum identifies its contents.
///
/// With `MINE = 1` and `THEIRS = 100`, a sum of 3 is a win, 300 a loss and
/// 2 means two of ours next to an empty cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridBoard {
    cells: [[u32; 3]; 3],
}

impl GridBoard {
    fn weight(&self, pos: Position) -> u32 {
        self.cells[pos.row()][pos.col()]
    }

    fn line_sum(&self, line: &[Position; 3]) -> u32 {
        line.iter().map(|&pos| self.weight(pos)).sum()
    }
}

impl Default for GridBoard {
    fn default() -> Self {
        Self::new_empty()
    }
}

impl Board for GridBoard {
    fn new_empty() -> Self {
        Self {
            cells: [[EMPTY; 3]; 3],
        }
    }

    fn cell(&self, pos: Position) -> Cell {
        match self.weight(pos) {
            MINE => Cell::Mine,
            THEIRS => Cell::Theirs,
            _ => Cell::Empty,
        }
    }

    fn place(&mut self, pos: Position, mark: Mark) -> Result<(), BoardError> {
        if self.weight(pos) != EMPTY {
            return Err(BoardError::new(BoardErrorKind::Occupied(pos)));
        }
        self.cells[pos.row()][pos.col()] = match mark {
            Mark::Mine => MINE,
            Mark::Theirs => THEIRS,
        };
        Ok(())
    }

    fn positions_of(&self, cell: Cell) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|&pos| self.cell(pos) == cell)
            .collect()
    }

    fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&w| w != EMPTY)
    }

    fn status(&self) -> Status {
        let sums: Vec<u32> = LINES.iter().map(|line| self.line_sum(line)).collect();
        if sums.contains(&(MINE * 3)) {
            Status::Win
        } else if sums.contains(&(THEIRS * 3)) {
            Status::Loss
        } else if self.is_full() {
            Status::Tie
        } else {
            Status::Ongoing
        }
    }

    fn winning_move(&self) -> Option<Position> {
        LINES
            .iter()
            .find(|line| self.line_sum(line) == MINE * 2)
            .and_then(|line| line.iter().copied().min_by_key(|&pos| self.weight(pos)))
    }
}
