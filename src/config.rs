//! # Configuration Module
//!
//! This module handles all configurable settings for the piece queue.
//!
//! ## Plain English Explanation
//!
//! There are only two knobs:
//! - How many pieces fit in the queue
//! - How many pieces are already waiting when the game starts
//!
//! The defaults (8 slots, 5 pieces) match the classic menu game.

use thiserror::Error;

/// Largest capacity accepted from the command line.
pub const MAX_CAPACITY: usize = 1024;

// ============================================
// MAIN CONFIGURATION
// ============================================

/// All configuration options for the piece queue
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Number of slots in the ring queue
    ///
    /// ## Limits
    /// - Minimum: 1
    /// - Maximum: [`MAX_CAPACITY`]
    /// - Default: 8
    pub capacity: usize,

    /// Pieces generated into the queue at startup
    ///
    /// Must not exceed `capacity`. Default: 5 (`[T 0]` through `[T 4]`).
    pub initial_pieces: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: 8,
            initial_pieces: 5,
        }
    }
}

impl Config {
    /// A two-slot queue holding a single piece.
    ///
    /// ## When to Use
    /// Demos and tests that want to hit "queue full" and "queue empty"
    /// after a couple of moves.
    pub fn tiny() -> Self {
        Self {
            capacity: 2,
            initial_pieces: 1,
        }
    }

    /// Validates the configuration and returns errors if invalid
    ///
    /// Returns a list of problems, or empty if all is well.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.capacity == 0 {
            errors.push(ConfigError::ZeroCapacity);
        }
        if self.capacity > MAX_CAPACITY {
            errors.push(ConfigError::CapacityTooLarge(self.capacity));
        }
        if self.initial_pieces > self.capacity {
            errors.push(ConfigError::TooManyInitialPieces {
                initial: self.initial_pieces,
                capacity: self.capacity,
            });
        }

        errors
    }
}

// ============================================
// CONFIGURATION ERRORS
// ============================================

/// Errors that can occur with configuration values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The queue needs at least one slot
    #[error("Queue capacity must be at least 1")]
    ZeroCapacity,

    /// Capacity above [`MAX_CAPACITY`]
    #[error("Queue capacity {0} is too large (maximum {max})", max = MAX_CAPACITY)]
    CapacityTooLarge(usize),

    /// Can't pre-load more pieces than there are slots
    #[error("Cannot pre-load {initial} pieces into a queue of {capacity}")]
    TooManyInitialPieces { initial: usize, capacity: usize },
}

// ============================================
// TESTS
// ============================================
