//! Summary of a finished game, logged as JSON.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tictactoe_core::{Mark, Position, Status};

/// One applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedMove {
    /// Who played it.
    pub mark: Mark,
    /// Where it was played.
    pub position: Position,
}

/// Everything that happened in one game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameRecord {
    /// Side that opened the game, once known.
    first_mover: Option<Mark>,
    /// Moves in the order they were applied.
    moves: Vec<PlayedMove>,
    /// Board status when the record was taken.
    outcome: Status,
}

impl GameRecord {
    /// Creates a record.
    pub fn new(first_mover: Option<Mark>, moves: Vec<PlayedMove>, outcome: Status) -> Self {
        Self {
            first_mover,
            moves,
            outcome,
        }
    }

    /// Serializes the record for logging.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
