//! Per-player state carried by every game state.

use std::fmt::Debug;

use crate::core::Player;

/// The state of one player at one point in a game.
///
/// Rule sets decide what a player state holds (pieces waiting to enter,
/// score, ...). The engine only needs to know whose state it is.
pub trait PlayerState: Clone + Debug + PartialEq {
    /// The player this state belongs to.
    fn player(&self) -> Player;
}
