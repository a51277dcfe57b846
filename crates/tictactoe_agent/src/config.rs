//! Command-line and environment configuration.
//!
//! Every option has a default, so a bare invocation behaves exactly as the
//! manager expects.

use clap::{Parser, ValueEnum};
use derive_getters::Getters;

/// Tic-tac-toe agent - plays one game over stdin/stdout
#[derive(Parser, Debug, Clone, Getters)]
#[command(name = "tictactoe_agent")]
#[command(about = "Plays one game of tic-tac-toe over a line protocol", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board representation (and matching fallback policy)
    #[arg(long, env = "TTT_BOARD", value_enum, default_value_t = BoardKind::Grid)]
    board: BoardKind,

    /// Seed for the random fallback policy (grid board only)
    #[arg(long, env = "TTT_SEED")]
    seed: Option<u64>,

    /// Do not render the board on stderr
    #[arg(short, long, env = "TTT_QUIET")]
    quiet: bool,
}

/// Which board representation the agent plays on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum BoardKind {
    /// Weighted grid; falls back to random resampling.
    Grid,
    /// Position sets; falls back to an arbitrary empty cell.
    Set,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_arguments() {
        let cli = Cli::try_parse_from(["tictactoe_agent"]).unwrap();
        assert_eq!(*cli.board(), BoardKind::Grid);
        assert_eq!(*cli.seed(), None);
        assert!(!*cli.quiet());
    }

    #[test]
    fn test_explicit_options() {
        let cli = Cli::try_parse_from([
            "tictactoe_agent",
            "--board",
            "set",
            "--seed",
            "42",
            "--quiet",
        ])
        .unwrap();
        assert_eq!(*cli.board(), BoardKind::Set);
        assert_eq!(*cli.seed(), Some(42));
        assert!(*cli.quiet());
    }

    #[test]
    fn test_unknown_board_rejected() {
        assert!(Cli::try_parse_from(["tictactoe_agent", "--board", "hex"]).is_err());
    }

    #[test]
    fn test_board_kind_display_matches_value_names() {
        assert_eq!(BoardKind::Grid.to_string(), "grid");
        assert_eq!(BoardKind::Set.to_string(), "set");
    }
}
