//! Core domain types for the agent's view of the board.

use serde::{Deserialize, Serialize};

/// Owner of a placed mark, from the agent's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Mark {
    /// Placed by this agent.
    Mine,
    /// Placed by the opponent.
    Theirs,
}

impl Mark {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Mark::Mine => Mark::Theirs,
            Mark::Theirs => Mark::Mine,
        }
    }

    /// Board symbol for this mark.
    pub fn symbol(self) -> char {
        match self {
            Mark::Mine => 'X',
            Mark::Theirs => 'O',
        }
    }
}

/// State of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    Empty,
    /// This agent's mark.
    Mine,
    /// The opponent's mark.
    Theirs,
}

impl Cell {
    /// Board symbol for this cell.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Mine => Mark::Mine.symbol(),
            Cell::Theirs => Mark::Theirs.symbol(),
        }
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::Mine => Cell::Mine,
            Mark::Theirs => Cell::Theirs,
        }
    }
}

/// Result of checking a board for a terminal condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Status {
    /// No line is complete and empty cells remain.
    Ongoing,
    /// Three of this agent's marks in a line.
    Win,
    /// Three of the opponent's marks in a line.
    Loss,
    /// Board full without a complete line.
    Tie,
}

impl Status {
    /// Returns true once no further moves may be made.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Status::Ongoing)
    }

    /// Line reported on the diagnostic stream at the end of the game.
    pub fn message(self) -> Option<&'static str> {
        match self {
            Status::Ongoing => None,
            Status::Win => Some("I won!!"),
            Status::Loss => Some("I lost :("),
            Status::Tie => Some("Tie :o"),
        }
    }
}
