//! Tetris Queue - console entry point
//!
//! Shows the next-pieces queue and lets the player play or insert pieces
//! until they choose to quit.

use std::io;

use anyhow::Context;
use clap::Parser;

use tetris_queue::{menu, Config, StdConsole, TetrisQueue};

#[derive(Parser, Debug)]
#[command(name = "tetris-queue", version, about)]
struct Args {
    /// Number of slots in the piece queue.
    #[arg(long, default_value_t = Config::default().capacity)]
    capacity: usize,

    /// Pieces generated into the queue before the menu starts.
    #[arg(long, default_value_t = Config::default().initial_pieces)]
    initial_pieces: usize,
}

fn main() -> anyhow::Result<()> {
    tetris_queue::init_logging();

    let args = Args::parse();
    let config = Config {
        capacity: args.capacity,
        initial_pieces: args.initial_pieces,
    };

    let app = TetrisQueue::with_config(config).context("invalid queue configuration")?;

    let stdin = io::stdin();
    let mut console = StdConsole::new();
    let stats = menu::run(app, stdin.lock(), &mut console)?;

    log::info!("Session finished: {:?}", stats);
    Ok(())
}
