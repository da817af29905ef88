//! # Error Types Module
//!
//! This module defines all the error types used throughout the piece queue.
//!
//! ## Plain English Explanation
//!
//! Nothing in the menu is fatal. Every problem is just a message shown to
//! the player before the menu comes back:
//!
//! - "QueueError::Full: there is no room for another piece"
//! - "QueueError::Empty: there is no piece to play"
//! - "InputError: that is not a menu option"
//!
//! Only setup problems (a bad capacity on the command line) stop the
//! program before the menu starts.

use std::io;

use thiserror::Error;

use crate::config::ConfigError;

// ============================================
// MAIN APPLICATION ERROR
// ============================================

/// The main error type for the piece queue.
#[derive(Debug, Error)]
pub enum TetrisError {
    /// Queue operation refused while pre-loading
    #[error("Queue error: {0}")]
    Queue(#[from] QueueError),

    /// Something went wrong with configuration
    ///
    /// ## Examples
    /// - Capacity of zero
    /// - More pre-loaded pieces than slots
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Generic I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

// ============================================
// QUEUE ERRORS
// ============================================

/// Why a queue operation was refused.
///
/// Neither variant changes any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    /// Every slot is taken; the generator counter was not touched
    #[error("the queue is full")]
    Full,

    /// There is nothing to dequeue
    #[error("the queue is empty")]
    Empty,
}

// ============================================
// INPUT ERRORS
// ============================================

/// Problems with a menu selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Parsed a number, but not one the menu knows
    #[error("unknown menu option {0}")]
    UnknownOption(i64),

    /// Standard input was closed
    #[error("input closed")]
    EndOfInput,
}

// ============================================
// RESULT TYPE ALIAS
// ============================================

/// A Result type that uses TetrisError
pub type TetrisResult<T> = Result<T, TetrisError>;

// ============================================
// TESTS
// ============================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TetrisError::Queue(QueueError::Full);
        let message = format!("{}", err);
        assert!(message.contains("Queue"));
        assert!(message.contains("full"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
        let app_err: TetrisError = io_err.into();

        match app_err {
            TetrisError::Io(_) => {} // Expected
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_queue_error_conversion() {
        fn preload() -> TetrisResult<()> {
            Err::<(), _>(QueueError::Full)?;
            Ok(())
        }

        match preload() {
            Err(TetrisError::Queue(QueueError::Full)) => {} // Expected
            other => panic!("Expected Queue error variant, got {:?}", other),
        }
    }

    #[test]
    fn test_config_error_conversion() {
        let app_err: TetrisError = ConfigError::ZeroCapacity.into();
        assert!(app_err.to_string().starts_with("Configuration error"));
    }
}
