//! Rule set trait for game variants.
//!
//! Variants implement `RuleSet` to define their rules:
//! - The initial state of a game
//! - Which moves are legal for a roll
//! - Which states follow a roll or a move
//!
//! The [`Game`](crate::game::Game) calls into the rule set but never
//! interprets variant-specific concepts directly.

use std::fmt::Debug;
use std::sync::Arc;

use crate::board::{Board, BoardShape, Piece};
use crate::core::Result;
use crate::state::{GameState, PlayerState, WaitingForMoveState, WaitingForRollState};

use super::dice::Roll;
use super::moves::{Move, MoveList};
use super::paths::PathPair;

/// Rule set trait.
///
/// ## Implementation Notes
///
/// - Transitions are pure: they read the given state and return new
///   states. Boards are changed on copies only.
/// - `apply_roll` and `apply_move` must return at least one state. They may
///   return several, for example a record of the roll followed by the next
///   playable state. The last state returned becomes the current state.
/// - Each implementation documents when it returns more than one state.
pub trait RuleSet<P: Piece, S: PlayerState, R: Roll>: Debug {
    /// The shape of the boards used by this rule set.
    fn shape(&self) -> &Arc<BoardShape>;

    /// The paths pieces take across the board.
    fn paths(&self) -> &PathPair;

    /// Roll the dice.
    fn roll_dice(&mut self) -> R;

    /// The state a new game starts in. Always waiting for a roll.
    fn generate_initial_state(&self) -> Result<GameState<P, S, R>>;

    /// The states that follow `roll` being made in `state`.
    fn apply_roll(&self, state: &WaitingForRollState<P, S>, roll: R) -> Result<Vec<GameState<P, S, R>>>;

    /// The states that follow `mv` being made in `state`.
    fn apply_move(&self, state: &WaitingForMoveState<P, S, R>, mv: &Move<P>) -> Result<Vec<GameState<P, S, R>>>;

    /// All moves `player` may make on `board` with `roll`. Empty if there are none.
    fn find_available_moves(&self, board: &Board<P>, player: &S, roll: &R) -> Result<MoveList<P>>;
}
