//! # Piece Module
//!
//! Piece kinds, piece values and the deterministic piece generator.
//!
//! ## Plain English
//!
//! There is no randomness here. Pieces always come out in the same
//! round-robin order: T, O, L, I, T, O, L, I, ...
//! Each piece carries a number that says in which order it entered the
//! queue.

use std::fmt;

// ============================================
// PIECE KIND
// ============================================

/// The four piece shapes used by the queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    T,
    O,
    L,
    I,
}

/// Generation order. The kind of piece `id` is `ALPHABET[id % 4]`.
pub const ALPHABET: [PieceKind; 4] = [PieceKind::T, PieceKind::O, PieceKind::L, PieceKind::I];

impl PieceKind {
    /// Returns the kind assigned to the piece with the given id.
    pub fn for_id(id: u32) -> Self {
        ALPHABET[id as usize % ALPHABET.len()]
    }

    /// Single-letter symbol shown in the queue listing.
    pub fn glyph(self) -> char {
        match self {
            Self::T => 'T',
            Self::O => 'O',
            Self::L => 'L',
            Self::I => 'I',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

// ============================================
// PIECE
// ============================================

/// One queued piece.
///
/// Only [`PieceGenerator`] creates these, so `id` always matches the
/// admission order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    /// Shape of the piece
    pub kind: PieceKind,
    /// Admission number, starting at 0
    pub id: u32,
}

impl fmt::Display for Piece {
    /// Formats as `[T 0]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.kind, self.id)
    }
}

// ============================================
// PIECE GENERATOR
// ============================================

/// Produces pieces in a fixed round-robin order.
///
/// ## Caller Contract
///
/// `next()` ALWAYS advances the counter. The generator knows nothing about
/// the queue, so whoever calls it must first check that the queue has room
/// (see `TetrisQueue::insert`). Calling `next()` and then failing to
/// enqueue the result burns an id.
///
/// Ids are `u32` and wrap back to 0 after `u32::MAX`.
#[derive(Debug, Default)]
pub struct PieceGenerator {
    /// Id handed to the next generated piece
    next_id: u32,
}

impl PieceGenerator {
    /// Creates a generator whose first piece is `[T 0]`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates the next piece and advances the counter.
    pub fn next(&mut self) -> Piece {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);

        Piece {
            kind: PieceKind::for_id(id),
            id,
        }
    }

    /// Returns the id the next generated piece will get, without
    /// advancing.
    pub fn peek_next_id(&self) -> u32 {
        self.next_id
    }
}

// ============================================
// TESTS
// ============================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_pieces() {
        let mut generator = PieceGenerator::new();
        let pieces: Vec<String> = (0..5).map(|_| generator.next().to_string()).collect();

        assert_eq!(pieces, vec!["[T 0]", "[O 1]", "[L 2]", "[I 3]", "[T 4]"]);
    }

    #[test]
    fn test_kind_cycles_every_four() {
        for id in 0..40 {
            assert_eq!(PieceKind::for_id(id), PieceKind::for_id(id + 4));
        }
        assert_eq!(PieceKind::for_id(9), PieceKind::O);
    }

    #[test]
    fn test_next_always_advances() {
        let mut generator = PieceGenerator::new();
        assert_eq!(generator.peek_next_id(), 0);

        // Discarding the piece still consumes its id
        let _ = generator.next();
        assert_eq!(generator.peek_next_id(), 1);
        assert_eq!(generator.next().id, 1);
    }

    #[test]
    fn test_peek_does_not_advance() {
        let generator = PieceGenerator::new();
        assert_eq!(generator.peek_next_id(), 0);
        assert_eq!(generator.peek_next_id(), 0);
    }

    #[test]
    fn test_counter_wraps_at_max() {
        let mut generator = PieceGenerator { next_id: u32::MAX };

        let last = generator.next();
        assert_eq!(last.id, u32::MAX);
        assert_eq!(last.kind, PieceKind::I);

        assert_eq!(generator.peek_next_id(), 0);
        assert_eq!(generator.next().to_string(), "[T 0]");
    }

    #[test]
    fn test_glyphs() {
        let glyphs: String = ALPHABET.iter().map(|kind| kind.glyph()).collect();
        assert_eq!(glyphs, "TOLI");
    }
}
