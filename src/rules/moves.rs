//! Moves of pieces along a player's path.
//!
//! A move either introduces a new piece onto the board (no source tile),
//! moves a piece between two tiles, or scores a piece by moving it off the
//! board (no destination tile). Moves are values: applying one produces a
//! new board and leaves the original untouched.

use smallvec::SmallVec;

use crate::board::{Board, Piece};
use crate::core::{GameError, Player, Result, Tile};

/// The moves available from one position. Rarely more than a handful.
pub type MoveList<P> = SmallVec<[Move<P>; 8]>;

/// A move of a single piece.
#[derive(Clone, Debug, PartialEq)]
pub struct Move<P: Piece> {
    player: Player,
    source: Option<(Tile, P)>,
    dest: Option<(Tile, P)>,
    captured: Option<P>,
}

impl<P: Piece> Move<P> {
    /// Create a move for `player`.
    ///
    /// - `source`: the tile and piece being moved, or `None` to introduce a piece.
    /// - `dest`: the tile and the piece as it will be after the move, or `None`
    ///   when the piece is scored.
    /// - `captured`: the opponent piece on the destination tile, if any.
    pub fn new(
        player: Player,
        source: Option<(Tile, P)>,
        dest: Option<(Tile, P)>,
        captured: Option<P>,
    ) -> Result<Self> {
        if source.is_none() && dest.is_none() {
            return Err(GameError::construction(
                "A move requires a source tile, a destination tile, or both",
            ));
        }
        let foreign = source
            .iter()
            .chain(dest.iter())
            .map(|(_, piece)| piece.owner())
            .find(|&owner| owner != player);
        if let Some(owner) = foreign {
            return Err(GameError::construction(format!(
                "{player} cannot move a piece owned by {owner}"
            )));
        }
        if captured.is_some() && dest.is_none() {
            return Err(GameError::construction("A scoring move cannot capture a piece"));
        }
        if let Some(piece) = captured.as_ref().filter(|piece| piece.owner() == player) {
            return Err(GameError::construction(format!("{player} cannot capture its own piece {piece:?}")));
        }
        Ok(Self { player, source, dest, captured })
    }

    /// The player making this move.
    #[must_use]
    pub fn player(&self) -> Player {
        self.player
    }

    /// Check if this move brings a new piece onto the board.
    #[must_use]
    pub fn is_introducing_piece(&self) -> bool {
        self.source.is_none()
    }

    /// Check if this move takes a piece off the board by scoring it.
    #[must_use]
    pub fn is_scoring_piece(&self) -> bool {
        self.dest.is_none()
    }

    /// Check if this move captures an opponent piece.
    #[must_use]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// The tile the piece moves from.
    #[must_use]
    pub fn source(&self) -> Option<Tile> {
        self.source.as_ref().map(|(tile, _)| *tile)
    }

    /// The piece being moved, as it was before the move.
    #[must_use]
    pub fn source_piece(&self) -> Option<&P> {
        self.source.as_ref().map(|(_, piece)| piece)
    }

    /// The tile the piece moves to.
    #[must_use]
    pub fn dest(&self) -> Option<Tile> {
        self.dest.as_ref().map(|(tile, _)| *tile)
    }

    /// The piece being moved, as it will be after the move.
    #[must_use]
    pub fn dest_piece(&self) -> Option<&P> {
        self.dest.as_ref().map(|(_, piece)| piece)
    }

    /// The opponent piece captured by this move.
    #[must_use]
    pub fn captured_piece(&self) -> Option<&P> {
        self.captured.as_ref()
    }

    /// Apply this move to a copy of `board`.
    pub fn apply(&self, board: &Board<P>) -> Result<Board<P>> {
        let mut next = board.copy();
        if let Some((tile, _)) = &self.source {
            next.set(*tile, None)?;
        }
        if let Some((tile, piece)) = &self.dest {
            next.set(*tile, Some(piece.clone()))?;
        }
        Ok(next)
    }
}

impl<P: Piece> std::fmt::Display for Move<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.source(), self.dest()) {
            (None, Some(dest)) => write!(f, "{} introduces a piece to {dest}", self.player)?,
            (Some(source), None) => write!(f, "{} scores the piece on {source}", self.player)?,
            (Some(source), Some(dest)) => write!(f, "{} moves {source} to {dest}", self.player)?,
            (None, None) => write!(f, "{} makes no move", self.player)?,
        }
        if self.is_capture() {
            f.write_str(", capturing")?;
        }
        Ok(())
    }
}
