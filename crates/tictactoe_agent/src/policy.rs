//! Fallback move choice when no immediate win exists.

use rand::Rng;
use tictactoe_core::{Board, Position};
use tracing::{debug, instrument};

/// Picks some empty cell.
///
/// Any empty cell is acceptable; implementations only differ in which one.
pub trait FallbackPolicy {
    /// Returns an empty position, or `None` if the board is full.
    fn choose<B: Board>(&mut self, board: &B) -> Option<Position>;
}

/// Samples coordinates uniformly until one lands on an empty cell.
#[derive(Debug, Clone)]
pub struct RandomResample<R> {
    rng: R,
}

impl<R: Rng> RandomResample<R> {
    /// Creates a policy drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> FallbackPolicy for RandomResample<R> {
    #[instrument(skip_all)]
    fn choose<B: Board>(&mut self, board: &B) -> Option<Position> {
        if board.is_full() {
            return None;
        }
        let mut draws = 0u32;
        loop {
            draws += 1;
            if let Some(pos) = Position::from_index(self.rng.gen_range(0..9))
                && board.is_empty_at(pos)
            {
                debug!(position = pos.to_index(), draws, "Sampled empty cell");
                return Some(pos);
            }
        }
    }
}

/// Takes the first cell the board lists as empty.
///
/// On a `GridBoard` that is the lowest free coordinate; on a `SetBoard` it
/// is whatever the set yields first.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstAvailable;

impl FallbackPolicy for FirstAvailable {
    #[instrument(skip_all)]
    fn choose<B: Board>(&mut self, board: &B) -> Option<Position> {
        board.empty_positions().first().copied()
    }
}
