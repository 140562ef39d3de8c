//! Pieces, player states, and the providers that create them.
//!
//! Providers are how a rule set builds the per-variant values it stores in
//! game states, without hardcoding their construction into the rules.

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::board::Piece;
use crate::core::Player;
use crate::state::PlayerState;

/// A piece that knows how far along its owner's path it has travelled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StandardPiece {
    owner: Player,
    path_index: usize,
}

impl StandardPiece {
    /// Create a piece of `owner` at `path_index` along its path.
    #[must_use]
    pub const fn new(owner: Player, path_index: usize) -> Self {
        Self { owner, path_index }
    }

    /// Index of this piece's tile along its owner's path.
    #[must_use]
    pub const fn path_index(&self) -> usize {
        self.path_index
    }
}

impl Piece for StandardPiece {
    fn owner(&self) -> Player {
        self.owner
    }
}

/// Pieces waiting to enter the board, and pieces already scored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StandardPlayerState {
    player: Player,
    piece_count: u32,
    score: u32,
}

impl StandardPlayerState {
    /// Create a player state.
    #[must_use]
    pub const fn new(player: Player, piece_count: u32, score: u32) -> Self {
        Self { player, piece_count, score }
    }

    /// Pieces that have not yet entered the board.
    #[must_use]
    pub const fn piece_count(&self) -> u32 {
        self.piece_count
    }

    /// Pieces that have completed the path.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }
}

impl PlayerState for StandardPlayerState {
    fn player(&self) -> Player {
        self.player
    }
}

/// Creates the pieces placed by a rule set.
pub trait PieceProvider<P: Piece>: Debug {
    /// A piece of `owner` standing at `path_index` along its path.
    fn create(&self, owner: Player, path_index: usize) -> P;
}

/// Creates and updates the player states used by a rule set.
///
/// Updates return new states; existing states are never modified.
pub trait PlayerStateProvider<S: PlayerState>: Debug {
    /// The state of `player` at the start of a game.
    fn create_initial(&self, player: Player) -> S;

    /// `state` after one of its pieces entered the board.
    fn apply_piece_introduced(&self, state: &S) -> S;

    /// `state` after one of its pieces was captured and sent back to the start.
    fn apply_piece_captured(&self, state: &S) -> S;

    /// `state` after one of its pieces reached the end of its path.
    fn apply_piece_scored(&self, state: &S) -> S;

    /// Check if `state` has won the game.
    fn has_won(&self, state: &S) -> bool;
}

/// Provider of [`StandardPiece`]s.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StandardPieceProvider;

impl PieceProvider<StandardPiece> for StandardPieceProvider {
    fn create(&self, owner: Player, path_index: usize) -> StandardPiece {
        StandardPiece::new(owner, path_index)
    }
}

/// Provider of [`StandardPlayerState`]s for a given number of starting pieces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StandardPlayerStateProvider {
    starting_piece_count: u32,
}

impl StandardPlayerStateProvider {
    /// Create a provider where each player starts with `starting_piece_count` pieces.
    #[must_use]
    pub const fn new(starting_piece_count: u32) -> Self {
        Self { starting_piece_count }
    }

    /// The number of pieces each player starts with.
    #[must_use]
    pub const fn starting_piece_count(&self) -> u32 {
        self.starting_piece_count
    }
}

impl PlayerStateProvider<StandardPlayerState> for StandardPlayerStateProvider {
    fn create_initial(&self, player: Player) -> StandardPlayerState {
        StandardPlayerState::new(player, self.starting_piece_count, 0)
    }

    fn apply_piece_introduced(&self, state: &StandardPlayerState) -> StandardPlayerState {
        StandardPlayerState::new(state.player, state.piece_count.saturating_sub(1), state.score)
    }

    fn apply_piece_captured(&self, state: &StandardPlayerState) -> StandardPlayerState {
        StandardPlayerState::new(state.player, state.piece_count + 1, state.score)
    }

    fn apply_piece_scored(&self, state: &StandardPlayerState) -> StandardPlayerState {
        StandardPlayerState::new(state.player, state.piece_count, state.score + 1)
    }

    fn has_won(&self, state: &StandardPlayerState) -> bool {
        state.score >= self.starting_piece_count
    }
}
