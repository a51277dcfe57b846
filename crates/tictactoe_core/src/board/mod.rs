//! Board storage.
//!
//! Two interchangeable representations sit behind the `Board` trait:
//! `GridBoard` keeps a weighted 3x3 grid and answers rule queries with line
//! sums, `SetBoard` keeps one set of positions per cell state.

mod grid;
mod set;

pub use grid::GridBoard;
pub use set::SetBoard;

use crate::{BoardError, Cell, Mark, Position, Status, rules};

/// A 9-cell tic-tac-toe board seen from the agent's side.
pub trait Board: std::fmt::Debug {
    /// Creates a board with every cell empty.
    fn new_empty() -> Self
    where
        Self: Sized;

    /// State of the cell at `pos`.
    fn cell(&self, pos: Position) -> Cell;

    /// Puts `mark` on an empty cell.
    ///
    /// # Errors
    ///
    /// Returns `BoardErrorKind::Occupied` if the cell already holds a mark;
    /// the board is left unchanged.
    fn place(&mut self, pos: Position, mark: Mark) -> Result<(), BoardError>;

    /// Every position currently in the given state.
    fn positions_of(&self, cell: Cell) -> Vec<Position>;

    /// Empty positions, in the representation's natural order.
    fn empty_positions(&self) -> Vec<Position> {
        self.positions_of(Cell::Empty)
    }

    /// Checks if a cell is empty.
    fn is_empty_at(&self, pos: Position) -> bool {
        self.cell(pos) == Cell::Empty
    }

    /// Checks if no empty cell remains.
    fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Terminal condition of the board.
    fn status(&self) -> Status {
        rules::status(self)
    }

    /// Cell that completes a line of two of this agent's marks.
    fn winning_move(&self) -> Option<Position> {
        rules::winning_move(self)
    }

    /// Formats the board as three rows of `X`, `O` or space.
    fn render(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            let symbols: Vec<String> = (0..3)
                .filter_map(|col| Position::from_row_col(row, col))
                .map(|pos| self.cell(pos).symbol().to_string())
                .collect();
            result.push_str(&symbols.join("|"));
            result.push('\n');
            if row < 2 {
                result.push_str("-----\n");
            }
        }
        result
    }
}
