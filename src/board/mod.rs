//! Board topology and piece placement.
//!
//! - `shape`: which tiles exist and which are rosettes
//! - `piece`: what the engine requires of a piece
//! - `board`: generic piece container addressed against a shape

pub mod board;
pub mod piece;
pub mod shape;

pub use board::{Board, Pieces};
pub use piece::{piece_char, Piece, EMPTY_CHAR};
pub use shape::{BoardShape, BoardType, ShapeKind, CUSTOM_IDENTIFIER, MAX_COORDINATE};
