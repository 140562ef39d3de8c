//! The capabilities the engine needs from a piece.

use std::fmt::Debug;

use crate::core::Player;

/// Character used for a tile with no piece on it.
pub const EMPTY_CHAR: char = '.';

/// A piece that can be placed on a [`Board`](super::Board).
///
/// Pieces are plain values. Rule sets define what else a piece carries
/// (for example its progress along a path).
pub trait Piece: Clone + Debug + PartialEq {
    /// The player that owns this piece.
    fn owner(&self) -> Player;

    /// Character used to draw this piece in board text.
    fn to_char(&self) -> char {
        self.owner().to_char()
    }
}

/// Character used to draw an optional piece.
pub fn piece_char<P: Piece>(piece: Option<&P>) -> char {
    piece.map_or(EMPTY_CHAR, Piece::to_char)
}
