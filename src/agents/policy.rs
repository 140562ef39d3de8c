//! Built-in agents.
//!
//! All of them roll whenever a roll is due. They differ only in which of the
//! available moves they pick.

use crate::board::Piece;
use crate::core::{GameError, GameRng, Player, Result};
use crate::game::Game;
use crate::rules::{Move, Roll};
use crate::state::PlayerState;

use super::Agent;

// =============================================================================
// Scripted Agents
// =============================================================================

/// Always plays the first available move.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstMoveAgent;

impl<P: Piece, S: PlayerState, R: Roll> Agent<P, S, R> for FirstMoveAgent {
    fn play_turn(&mut self, game: &mut Game<P, S, R>, player: Player) -> Result<()> {
        play_turn_with(game, player, |moves| moves.first())
    }
}

/// Always plays the last available move.
#[derive(Clone, Copy, Debug, Default)]
pub struct LastMoveAgent;

impl<P: Piece, S: PlayerState, R: Roll> Agent<P, S, R> for LastMoveAgent {
    fn play_turn(&mut self, game: &mut Game<P, S, R>, player: Player) -> Result<()> {
        play_turn_with(game, player, |moves| moves.last())
    }
}

// =============================================================================
// Random Agent
// =============================================================================

/// Plays a uniformly random available move.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: GameRng,
}

impl RandomAgent {
    /// Create an agent whose choices are determined by `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { rng: GameRng::new(seed) }
    }
}

impl<P: Piece, S: PlayerState, R: Roll> Agent<P, S, R> for RandomAgent {
    fn play_turn(&mut self, game: &mut Game<P, S, R>, player: Player) -> Result<()> {
        let rng = &mut self.rng;
        play_turn_with(game, player, |moves| rng.choose(moves))
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Roll if a roll is due, otherwise make the move picked by `choose`.
fn play_turn_with<P, S, R, F>(game: &mut Game<P, S, R>, player: Player, choose: F) -> Result<()>
where
    P: Piece,
    S: PlayerState,
    R: Roll,
    F: FnOnce(&[Move<P>]) -> Option<&Move<P>>,
{
    let turn = game.turn()?;
    if turn != player {
        return Err(GameError::protocol_violation(format!(
            "The agent for {player} was asked to play during {turn}'s turn"
        )));
    }

    if game.is_waiting_for_roll() {
        game.roll_dice()?;
        return Ok(());
    }

    let moves = game.find_available_moves()?;
    let Some(mv) = choose(moves.as_slice()).cloned() else {
        return Err(GameError::protocol_violation(format!(
            "The game is waiting for a move from {player}, but no moves are available"
        )));
    };
    game.make_move(&mv)
}
