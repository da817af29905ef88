//! # Tetris Queue Demo
//!
//! Plays a scripted session against the menu and prints the screen.
//! It walks through the classic scenario: play once, fill the queue,
//! then try one insert too many.
//!
//! Run with: `cargo run --example demo`

use std::io::Cursor;

use tetris_queue::{menu, BufferConsole, TetrisQueue};

fn main() -> anyhow::Result<()> {
    // Initialize logging so we can see what's happening
    tetris_queue::init_logging();

    println!("╔════════════════════════════════════════════════════════════╗");
    println!("║           Tetris Queue Demo                                ║");
    println!("╠════════════════════════════════════════════════════════════╣");
    println!("║ Play one piece, insert until full, then insert once more.  ║");
    println!("╚════════════════════════════════════════════════════════════╝");

    let app = TetrisQueue::new()?;
    println!("Capacity: {} slots", app.config().capacity);

    // 1 = play, 2 = insert, 0 = quit
    let script = "1\n2\n2\n2\n2\n2\n0\n";
    let mut console = BufferConsole::new();
    let stats = menu::run(app, Cursor::new(script), &mut console)?;

    print!("{}", console.contents());
    println!();
    println!("📊 Final Statistics:");
    println!("   Pieces played: {}", stats.pieces_played);
    println!("   Pieces inserted: {}", stats.pieces_inserted);
    println!("   Rejected inserts: {}", stats.rejected_inserts);

    Ok(())
}
