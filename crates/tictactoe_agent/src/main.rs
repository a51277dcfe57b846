//! Tic-tac-toe agent binary.
//!
//! Reads the manager's lines from stdin, writes moves to stdout, and keeps
//! stderr for board art, the verdict and tracing output.

use anyhow::Result;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use tictactoe_agent::{Agent, BoardKind, Cli, Diagnostics, FirstAvailable, RandomResample};
use tictactoe_core::{GridBoard, SetBoard};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    info!(board = %cli.board(), seed = ?cli.seed(), "Starting tic-tac-toe agent");

    let input = io::stdin().lock();
    let output = io::stdout().lock();
    let diagnostics = Diagnostics::new(io::stderr(), !*cli.quiet());

    let result = match cli.board() {
        BoardKind::Grid => {
            let rng = match cli.seed() {
                Some(seed) => StdRng::seed_from_u64(*seed),
                None => StdRng::from_entropy(),
            };
            Agent::<GridBoard, _>::new(RandomResample::new(rng)).run(input, output, diagnostics)
        }
        BoardKind::Set => Agent::<SetBoard, _>::new(FirstAvailable).run(input, output, diagnostics),
    };

    match result {
        Ok(status) => {
            info!(%status, "Agent exiting");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Fatal protocol violation, aborting");
            Err(e.into())
        }
    }
}

/// Logs go to stderr so stdout carries nothing but moves.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}
