//! Line protocol codec.
//!
//! The manager sends one integer per line: first `1` or `0` for who moves
//! first, then the opponent's coordinates. The agent answers with one
//! coordinate per line. Everything meant for humans goes to a separate
//! diagnostic stream so the manager never has to parse it.

use crate::{ProtocolError, ProtocolErrorKind};
use std::io::{BufRead, Write};
use tictactoe_core::{Board, Position, Status};
use tracing::{debug, instrument, trace};

/// Parses one protocol line as a board coordinate.
///
/// # Errors
///
/// Fails on anything but an integer in 0-8, surrounding whitespace aside.
#[instrument]
pub fn parse_coordinate(line: &str) -> Result<Position, ProtocolError> {
    let value = parse_integer(line)?;
    usize::try_from(value)
        .ok()
        .and_then(Position::from_index)
        .ok_or_else(|| ProtocolError::new(ProtocolErrorKind::OutOfRange(value)))
}

#[track_caller]
fn parse_integer(line: &str) -> Result<i64, ProtocolError> {
    let trimmed = line.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| ProtocolError::new(ProtocolErrorKind::NotAnInteger(trimmed.to_string())))
}

/// Reads protocol lines from the manager.
#[derive(Debug)]
pub struct LineReader<R> {
    inner: R,
    buf: String,
}

impl<R: BufRead> LineReader<R> {
    /// Wraps a buffered input stream.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: String::new(),
        }
    }

    fn next_line(&mut self) -> Result<&str, ProtocolError> {
        self.buf.clear();
        if self.inner.read_line(&mut self.buf)? == 0 {
            return Err(ProtocolError::new(ProtocolErrorKind::EndOfInput));
        }
        trace!(line = %self.buf.trim_end(), "Read line");
        Ok(self.buf.as_str())
    }

    /// Reads the opening line: non-zero means this agent moves first.
    #[instrument(skip(self))]
    pub fn read_first_mover(&mut self) -> Result<bool, ProtocolError> {
        let value = parse_integer(self.next_line()?)?;
        debug!(value, "First mover flag received");
        Ok(value != 0)
    }

    /// Reads the opponent's next coordinate.
    #[instrument(skip(self))]
    pub fn read_coordinate(&mut self) -> Result<Position, ProtocolError> {
        let line = self.next_line()?;
        parse_coordinate(line)
    }
}

/// Writes this agent's moves to the manager.
#[derive(Debug)]
pub struct MoveWriter<W> {
    inner: W,
}

impl<W: Write> MoveWriter<W> {
    /// Wraps the primary output stream.
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Writes one coordinate line and flushes it.
    #[instrument(skip(self), fields(position = pos.to_index()))]
    pub fn write_move(&mut self, pos: Position) -> Result<(), ProtocolError> {
        writeln!(self.inner, "{}", pos.to_index())?;
        self.inner.flush()?;
        Ok(())
    }
}

/// Human-facing output: board renderings and the final verdict.
#[derive(Debug)]
pub struct Diagnostics<D> {
    inner: D,
    show_board: bool,
}

impl<D: Write> Diagnostics<D> {
    /// Wraps the diagnostic stream; `show_board` controls board renderings.
    pub fn new(inner: D, show_board: bool) -> Self {
        Self { inner, show_board }
    }

    /// Renders the board, unless renderings are switched off.
    pub fn board<B: Board>(&mut self, board: &B) -> Result<(), ProtocolError> {
        if self.show_board {
            write!(self.inner, "{}", board.render())?;
            self.inner.flush()?;
        }
        Ok(())
    }

    /// Reports how the game ended.
    pub fn outcome(&mut self, status: Status) -> Result<(), ProtocolError> {
        if let Some(message) = status.message() {
            writeln!(self.inner, "{}", message)?;
            self.inner.flush()?;
        }
        Ok(())
    }
}
