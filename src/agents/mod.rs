//! Agents that play games on behalf of a player.
//!
//! An agent is handed the game whenever it is its player's turn, and must
//! make exactly one decision: roll the dice, or make one move.
//!
//! ## Example
//!
//! ```
//! use royal_ur::agents::{FirstMoveAgent, LastMoveAgent};
//! use royal_ur::game::GameBuilder;
//!
//! let mut game = GameBuilder::standard().build().unwrap();
//! let actions = game
//!     .play_autonomously(&mut FirstMoveAgent, &mut LastMoveAgent)
//!     .unwrap();
//! assert!(game.is_finished());
//! assert!(actions > 0);
//! ```

pub mod policy;

pub use policy::{FirstMoveAgent, LastMoveAgent, RandomAgent};

use crate::board::Piece;
use crate::core::{Player, Result};
use crate::game::Game;
use crate::rules::Roll;
use crate::state::PlayerState;

/// Plays turns for one side of a game.
pub trait Agent<P: Piece, S: PlayerState, R: Roll> {
    /// Make one decision for `player`, who must be the turn player.
    ///
    /// Rolls when the game is waiting for a roll, and makes one move when it
    /// is waiting for a move.
    fn play_turn(&mut self, game: &mut Game<P, S, R>, player: Player) -> Result<()>;
}
