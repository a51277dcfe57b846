//! Tic-tac-toe agent speaking a line protocol over stdin/stdout.
//!
//! # Architecture
//!
//! - **Protocol**: one integer per line in, one integer per line out;
//!   board art and outcome messages go to a separate diagnostic stream
//! - **Agent**: owns the board and turn flag, runs the turn loop
//! - **Policy**: fallback choice when no immediate win exists
//! - **Config**: command-line and environment options
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use tictactoe_agent::{Agent, Diagnostics, FirstAvailable};
//! use tictactoe_core::{GridBoard, Status};
//!
//! # fn main() -> Result<(), tictactoe_agent::AgentError> {
//! let mut agent: Agent<GridBoard, _> = Agent::new(FirstAvailable);
//! let mut moves = Vec::new();
//! let input = Cursor::new("0\n4\n8\n6\n");
//! let status = agent.run(input, &mut moves, Diagnostics::new(std::io::sink(), false))?;
//! assert_eq!(status, Status::Win);
//! assert_eq!(moves, b"0\n1\n2\n");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod agent;
mod config;
mod error;
mod policy;
mod protocol;
mod record;

pub use agent::{Agent, Phase};
pub use config::{BoardKind, Cli};
pub use error::{AgentError, AgentErrorKind, ProtocolError, ProtocolErrorKind};
pub use policy::{FallbackPolicy, FirstAvailable, RandomResample};
pub use protocol::{Diagnostics, LineReader, MoveWriter, parse_coordinate};
pub use record::{GameRecord, PlayedMove};
