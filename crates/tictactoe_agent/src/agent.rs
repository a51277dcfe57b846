//! The playing agent and its turn loop.

use crate::{
    AgentError, AgentErrorKind, Diagnostics, FallbackPolicy, GameRecord, LineReader, MoveWriter,
    PlayedMove,
};
use std::io::{BufRead, Write};
use tictactoe_core::{Board, BoardInvariants, InvariantSet, Mark, Position, Status};
use tracing::{debug, info, instrument, warn};

/// Where the turn loop currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum Phase {
    /// Waiting for the first-mover line.
    AwaitingInit,
    /// About to evaluate the board.
    CheckTerminal,
    /// This agent must move.
    MyTurn,
    /// Waiting for the opponent's coordinate.
    TheirTurn,
    /// Game over; no further I/O.
    Terminated,
}

/// A tic-tac-toe agent playing a single game.
///
/// Owns the board and the turn flag for the whole process lifetime.
#[derive(Debug)]
pub struct Agent<B, P> {
    board: B,
    my_turn: bool,
    first_mover: Option<Mark>,
    history: Vec<PlayedMove>,
    policy: P,
}

impl<B: Board, P: FallbackPolicy> Agent<B, P> {
    /// Creates an agent with an empty board.
    pub fn new(policy: P) -> Self {
        Self::with_board(B::new_empty(), policy)
    }

    /// Creates an agent starting from an existing board.
    pub fn with_board(board: B, policy: P) -> Self {
        Self {
            board,
            my_turn: false,
            first_mover: None,
            history: Vec::new(),
            policy,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &B {
        &self.board
    }

    /// Returns true if this agent moves next.
    pub fn my_turn(&self) -> bool {
        self.my_turn
    }

    /// Applied moves, oldest first.
    pub fn history(&self) -> &[PlayedMove] {
        &self.history
    }

    /// Sets who opens the game.
    #[instrument(skip(self))]
    pub fn set_first_mover(&mut self, me_first: bool) {
        self.my_turn = me_first;
        self.first_mover = Some(if me_first { Mark::Mine } else { Mark::Theirs });
    }

    /// Marks the opponent's reported cell and hands the turn back.
    ///
    /// # Errors
    ///
    /// Fails if the cell is not empty; the manager is trusted, so this is a
    /// fatal protocol violation.
    #[instrument(skip(self), fields(position = pos.to_index()))]
    pub fn apply_opponent_move(&mut self, pos: Position) -> Result<(), AgentError> {
        self.board.place(pos, Mark::Theirs)?;
        self.record_move(Mark::Theirs, pos);
        Ok(())
    }

    /// Evaluates the board for a win, loss or tie.
    #[instrument(skip(self))]
    pub fn check_terminal(&self) -> Status {
        self.board.status()
    }

    /// Cell that wins immediately, if any.
    pub fn select_winning_move(&self) -> Option<Position> {
        self.board.winning_move()
    }

    /// Chooses this agent's next cell without playing it.
    ///
    /// An immediate win is always taken; otherwise the fallback policy
    /// picks an empty cell.
    #[instrument(skip(self))]
    pub fn select_move(&mut self) -> Result<Position, AgentError> {
        if let Some(pos) = self.select_winning_move() {
            debug!(position = pos.to_index(), "Taking winning move");
            return Ok(pos);
        }
        self.policy
            .choose(&self.board)
            .ok_or_else(|| AgentError::new(AgentErrorKind::NoEmptyCell))
    }

    /// Chooses a cell, marks it as ours and hands the turn over.
    #[instrument(skip(self))]
    pub fn play_my_move(&mut self) -> Result<Position, AgentError> {
        let pos = self.select_move()?;
        self.board
            .place(pos, Mark::Mine)
            .map_err(|e| AgentError::new(AgentErrorKind::OwnMoveRejected(pos, e)))?;
        self.record_move(Mark::Mine, pos);
        Ok(pos)
    }

    /// Snapshot of the game so far.
    pub fn record(&self) -> GameRecord {
        GameRecord::new(self.first_mover, self.history.clone(), self.check_terminal())
    }

    fn record_move(&mut self, mark: Mark, position: Position) {
        self.history.push(PlayedMove { mark, position });
        self.my_turn = !self.my_turn;
        debug_assert!(
            BoardInvariants::check_all(&self.board).is_ok(),
            "board invariants violated after {:?} at {}",
            mark,
            position
        );
    }

    /// Plays one game to the end.
    ///
    /// Reads the first-mover flag and opponent coordinates from `input`,
    /// writes this agent's coordinates to `output`, and sends board art and
    /// the verdict to `diagnostics`. Returns the terminal status.
    ///
    /// # Errors
    ///
    /// Any protocol violation or stream failure stops the game at once.
    #[instrument(skip_all)]
    pub fn run<R, W, D>(
        &mut self,
        input: R,
        output: W,
        mut diagnostics: Diagnostics<D>,
    ) -> Result<Status, AgentError>
    where
        R: BufRead,
        W: Write,
        D: Write,
    {
        let mut reader = LineReader::new(input);
        let mut writer = MoveWriter::new(output);
        let mut phase = Phase::AwaitingInit;
        let mut outcome = Status::Ongoing;

        while phase != Phase::Terminated {
            debug!(%phase, "Turn loop");
            phase = match phase {
                Phase::AwaitingInit => {
                    let me_first = reader.read_first_mover()?;
                    self.set_first_mover(me_first);
                    Phase::CheckTerminal
                }
                Phase::CheckTerminal => {
                    diagnostics.board(&self.board)?;
                    outcome = self.check_terminal();
                    if outcome.is_terminal() {
                        diagnostics.outcome(outcome)?;
                        Phase::Terminated
                    } else if self.my_turn {
                        Phase::MyTurn
                    } else {
                        Phase::TheirTurn
                    }
                }
                Phase::TheirTurn => {
                    let pos = reader.read_coordinate()?;
                    self.apply_opponent_move(pos)?;
                    Phase::CheckTerminal
                }
                Phase::MyTurn => {
                    let pos = self.play_my_move()?;
                    writer.write_move(pos)?;
                    Phase::CheckTerminal
                }
                Phase::Terminated => Phase::Terminated,
            };
        }

        match self.record().to_json() {
            Ok(json) => info!(%outcome, record = %json, "Game finished"),
            Err(e) => warn!(%outcome, error = %e, "Game finished, record not serializable"),
        }
        Ok(outcome)
    }
}
