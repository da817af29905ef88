//! # Piece Buffer Module
//!
//! This module provides the circular (ring) queue that holds upcoming pieces.
//!
//! ## Plain English Explanation
//!
//! Imagine the "next pieces" window of a Tetris game with exactly 8 spots.
//! 1. Playing a piece takes it from the front of the line
//! 2. Inserting a piece puts it at the back of the line
//! 3. When all 8 spots are taken, new pieces are refused
//!
//! Nothing is ever shifted around: the front and back positions just
//! walk around the circle.

mod ring_queue;

pub use ring_queue::{Iter, RingQueue};
