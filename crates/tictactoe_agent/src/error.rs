//! Agent error types.
//!
//! Every error here is fatal: the agent trusts the manager, so a bad line or
//! an illegal opponent move ends the process instead of being retried.

use derive_more::{Display, Error};
use tictactoe_core::{BoardError, Position};
use tracing::instrument;

/// What went wrong on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ProtocolErrorKind {
    /// Input closed before the game ended.
    #[display("input closed before the game ended")]
    EndOfInput,
    /// Reading or writing a stream failed.
    #[display("I/O failure: {}", _0)]
    Io(String),
    /// A line did not hold an integer.
    #[display("expected an integer, got {:?}", _0)]
    NotAnInteger(String),
    /// A coordinate outside 0-8.
    #[display("coordinate {} is outside 0-8", _0)]
    OutOfRange(i64),
}

/// Protocol error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Protocol error: {} at {}:{}", kind, file, line)]
pub struct ProtocolError {
    /// Error kind.
    pub kind: ProtocolErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ProtocolError {
    /// Creates a new protocol error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: ProtocolErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for ProtocolError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(ProtocolErrorKind::Io(err.to_string()))
    }
}

/// Why the agent stopped before reaching a terminal board.
#[derive(Debug, Clone, Display)]
pub enum AgentErrorKind {
    /// The opponent reported a move onto a cell that is not empty.
    #[display("illegal opponent move: {}", _0.kind)]
    IllegalOpponentMove(BoardError),
    /// The input or output stream broke the protocol.
    #[display("{}", _0)]
    Protocol(ProtocolError),
    /// Move selection was asked for a move on a full board.
    #[display("no empty cell left to play")]
    NoEmptyCell,
    /// A chosen move could not be placed.
    #[display("own move onto {} rejected: {}", _0, _1.kind)]
    OwnMoveRejected(Position, BoardError),
}

/// Fatal agent error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Agent error: {} at {}:{}", kind, file, line)]
pub struct AgentError {
    /// Error kind.
    pub kind: AgentErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl AgentError {
    /// Creates a new agent error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: AgentErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Board errors only reach the agent through opponent moves; its own
/// moves are wrapped as `OwnMoveRejected` explicitly.
impl From<BoardError> for AgentError {
    #[track_caller]
    fn from(err: BoardError) -> Self {
        Self::new(AgentErrorKind::IllegalOpponentMove(err))
    }
}

impl From<ProtocolError> for AgentError {
    #[track_caller]
    fn from(err: ProtocolError) -> Self {
        Self::new(AgentErrorKind::Protocol(err))
    }
}
