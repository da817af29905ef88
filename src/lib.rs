//! # Tetris Queue
//!
//! The "next pieces" queue of a Tetris game, played from a text menu.
//!
//! ## Architecture Overview
//!
//! The application is structured into independent modules:
//!
//! - `buffer`: Fixed-capacity ring queue holding upcoming pieces
//! - `piece`: Piece kinds and the round-robin piece generator
//! - `input`: Menu line parsing
//! - `console`: UTF-8 safe text output
//! - `menu`: The interactive play/insert/quit loop
//! - `config`: Application configuration
//! - `error`: Error types

// ============================================
// MODULE DECLARATIONS
// ============================================

pub mod buffer;
pub mod config;
pub mod console;
pub mod error;
pub mod input;
pub mod menu;
pub mod piece;

// ============================================
// RE-EXPORTS
// ============================================

pub use buffer::RingQueue;
pub use config::Config;
pub use console::{BufferConsole, Console, StdConsole};
pub use error::{QueueError, TetrisError, TetrisResult};
pub use input::MenuCommand;
pub use piece::{Piece, PieceGenerator, PieceKind};

// ============================================
// IMPORTS
// ============================================

use log::{debug, info, warn};

// ============================================
// APPLICATION STATE
// ============================================

/// The piece queue application.
///
/// ## Plain English
///
/// This is the "control center" that ties the queue and the generator
/// together:
/// - Pre-loads the first pieces at startup
/// - Plays pieces from the front
/// - Inserts freshly generated pieces at the back, but only when there
///   is room, so no piece number is ever skipped
#[derive(Debug)]
pub struct TetrisQueue {
    /// The circular queue of upcoming pieces
    queue: RingQueue<Piece>,

    /// Hands out pieces in T, O, L, I order
    generator: PieceGenerator,

    /// Application configuration
    config: Config,

    /// What happened so far
    stats: SessionStats,
}

/// Running totals for one session
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionStats {
    /// Pieces dequeued by "play"
    pub pieces_played: u64,
    /// Pieces admitted by "insert" (pre-loaded pieces not included)
    pub pieces_inserted: u64,
    /// Inserts refused because the queue was full
    pub rejected_inserts: u64,
    /// Plays refused because the queue was empty
    pub empty_plays: u64,
    /// Menu lines that didn't match an option
    pub invalid_inputs: u64,
}

impl TetrisQueue {
    /// Creates a new application instance with default configuration.
    pub fn new() -> TetrisResult<Self> {
        Self::with_config(Config::default())
    }

    /// Creates a new application instance with custom configuration.
    ///
    /// The queue is pre-loaded with `config.initial_pieces` pieces.
    pub fn with_config(config: Config) -> TetrisResult<Self> {
        if let Some(error) = config.validate().into_iter().next() {
            return Err(TetrisError::Config(error));
        }

        info!(
            "Initializing piece queue: {} slots, {} pre-loaded pieces",
            config.capacity, config.initial_pieces
        );

        let mut app = Self {
            queue: RingQueue::new(config.capacity),
            generator: PieceGenerator::new(),
            config,
            stats: SessionStats::default(),
        };

        for _ in 0..app.config.initial_pieces {
            app.admit_next()?;
        }

        info!("Piece queue ready: {}", app.render_pieces());
        Ok(app)
    }

    /// Plays (dequeues) the front piece.
    pub fn play(&mut self) -> Result<Piece, QueueError> {
        match self.queue.dequeue() {
            Some(piece) => {
                self.stats.pieces_played += 1;
                debug!("Played {}", piece);
                Ok(piece)
            }
            None => {
                self.stats.empty_plays += 1;
                debug!("Play refused: queue empty");
                Err(QueueError::Empty)
            }
        }
    }

    /// Generates a new piece and inserts it at the back.
    ///
    /// When the queue is full nothing happens, and the generator keeps the
    /// id for the next successful insert.
    pub fn insert(&mut self) -> Result<Piece, QueueError> {
        match self.admit_next() {
            Ok(piece) => {
                self.stats.pieces_inserted += 1;
                debug!("Inserted {}", piece);
                Ok(piece)
            }
            Err(error) => {
                self.stats.rejected_inserts += 1;
                warn!(
                    "Insert refused: queue full ({} of {}), next id stays {}",
                    self.queue.len(),
                    self.queue.capacity(),
                    self.generator.peek_next_id()
                );
                Err(error)
            }
        }
    }

    /// Guard-then-generate: `next()` is only called once there is room.
    fn admit_next(&mut self) -> Result<Piece, QueueError> {
        if self.queue.is_full() {
            return Err(QueueError::Full);
        }

        let piece = self.generator.next();
        self.queue.enqueue(piece).map_err(|_| QueueError::Full)?;
        Ok(piece)
    }

    /// Records a menu line that didn't match any option.
    pub fn record_invalid_input(&mut self) {
        self.stats.invalid_inputs += 1;
    }

    /// Returns the queued pieces, front first.
    pub fn pieces(&self) -> buffer::Iter<'_, Piece> {
        self.queue.iter()
    }

    /// Formats the queue as `[T 0] [O 1] ...`, or `(vazia)` when empty.
    pub fn render_pieces(&self) -> String {
        if self.queue.is_empty() {
            return menu::EMPTY_MARKER.to_string();
        }

        self.pieces()
            .map(Piece::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Returns the number of queued pieces.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Returns true if no piece is queued.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Returns true if an insert would be refused.
    pub fn is_full(&self) -> bool {
        self.queue.is_full()
    }

    /// Returns the id the next admitted piece will get.
    pub fn next_id(&self) -> u32 {
        self.generator.peek_next_id()
    }

    /// Returns a copy of the current statistics.
    pub fn stats(&self) -> SessionStats {
        self.stats.clone()
    }

    /// Returns a reference to the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Releases the queue and ends the session.
    pub fn shutdown(self) -> SessionStats {
        info!("Shutting down piece queue: {:?}", self.stats);
        self.queue.teardown();
        self.stats
    }
}

// ============================================
// LOGGING
// ============================================

/// Initialize logging for the platform.
///
/// Logs go to stderr so they never mix with the menu. The default level
/// is `warn`; set `RUST_LOG` for more.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .try_init();
}

// ============================================
// TESTS
// ============================================
