//! The game state machine.
//!
//! A [`Game`] is a rule set plus the ordered history of states the game has
//! been through. The last state is the current one, and it is the only one
//! that can be acted on:
//!
//! ```text
//! WaitingForRoll --roll_dice()--> [Rolled, ...] --> WaitingForMove | WaitingForRoll | Win
//! WaitingForMove --make_move()--> [Moved, ...]  --> WaitingForRoll | Win
//! ```
//!
//! The rule set decides which states follow an action; the game only checks
//! that the action matches the current state and appends whatever the rule
//! set returns. States are never removed or changed once appended, and a
//! failed action appends nothing.

use tracing::{debug, instrument, warn};

use crate::agents::Agent;
use crate::board::{Board, Piece};
use crate::core::{GameError, Player, PlayerIdentity, Result};
use crate::rules::{Move, MoveList, Roll, RuleSet};
use crate::state::{
    GameState, GameStateKind, PlayerState, WaitingForMoveState, WaitingForRollState, WinState,
};

/// A game: the rules being played, and every state reached so far.
#[derive(Debug)]
pub struct Game<P: Piece, S: PlayerState, R: Roll> {
    rules: Box<dyn RuleSet<P, S, R>>,
    light_identity: PlayerIdentity,
    dark_identity: PlayerIdentity,
    /// Never empty. The last entry is the current state.
    states: Vec<GameState<P, S, R>>,
}

impl<P: Piece, S: PlayerState, R: Roll> Game<P, S, R> {
    /// Create a game that continues from `states`.
    ///
    /// Fails if `states` is empty.
    pub fn new(rules: impl RuleSet<P, S, R> + 'static, states: Vec<GameState<P, S, R>>) -> Result<Self> {
        Self::from_states(rules, states.into_iter().map(Some))
    }

    /// Create a game from a list of states that may have gaps in it.
    ///
    /// Fails if the list is empty or any entry is `None`.
    pub fn from_states(
        rules: impl RuleSet<P, S, R> + 'static,
        states: impl IntoIterator<Item = Option<GameState<P, S, R>>>,
    ) -> Result<Self> {
        let states = states
            .into_iter()
            .enumerate()
            .map(|(index, state)| {
                state.ok_or_else(|| {
                    GameError::construction(format!("The state at index {index} of the initial states is absent"))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        if states.is_empty() {
            return Err(GameError::construction("Games must have at least one state to play from"));
        }

        Ok(Self {
            rules: Box::new(rules),
            light_identity: PlayerIdentity::anonymous(),
            dark_identity: PlayerIdentity::anonymous(),
            states,
        })
    }

    /// Set who is playing each side.
    #[must_use]
    pub fn with_identities(mut self, light: PlayerIdentity, dark: PlayerIdentity) -> Self {
        self.light_identity = light;
        self.dark_identity = dark;
        self
    }

    /// The rules of this game.
    #[must_use]
    pub fn rules(&self) -> &dyn RuleSet<P, S, R> {
        self.rules.as_ref()
    }

    /// Who is playing `player`'s side.
    #[must_use]
    pub fn identity(&self, player: Player) -> &PlayerIdentity {
        match player {
            Player::Light => &self.light_identity,
            Player::Dark => &self.dark_identity,
        }
    }

    /// Every state reached so far. The last one is the current state.
    #[must_use]
    pub fn states(&self) -> &[GameState<P, S, R>] {
        &self.states
    }

    /// The state the game is currently in.
    #[must_use]
    pub fn current_state(&self) -> &GameState<P, S, R> {
        &self.states[self.states.len() - 1]
    }

    /// The kind of state the game is currently in.
    #[must_use]
    pub fn current_kind(&self) -> GameStateKind {
        self.current_state().kind()
    }

    /// The current placement of pieces.
    #[must_use]
    pub fn board(&self) -> &Board<P> {
        self.current_state().board()
    }

    /// Check if the game has been won.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.current_state().is_finished()
    }

    /// Check if the game has been won. Same as [`Game::is_finished`].
    #[must_use]
    pub fn has_ended(&self) -> bool {
        self.is_finished()
    }

    /// Check if a player can act in the current state.
    #[must_use]
    pub fn is_playable(&self) -> bool {
        self.current_state().is_playable()
    }

    /// Check if the game is waiting for a roll.
    #[must_use]
    pub fn is_waiting_for_roll(&self) -> bool {
        matches!(self.current_state(), GameState::WaitingForRoll(_))
    }

    /// Check if the game is waiting for a move.
    #[must_use]
    pub fn is_waiting_for_move(&self) -> bool {
        matches!(self.current_state(), GameState::WaitingForMove(_))
    }

    /// The current state, if the game is waiting for a roll.
    pub fn waiting_for_roll_state(&self) -> Result<&WaitingForRollState<P, S>> {
        match self.current_state() {
            GameState::WaitingForRoll(state) => Ok(state),
            other => Err(unexpected_state("waiting for a roll", other)),
        }
    }

    /// The current state, if the game is waiting for a move.
    pub fn waiting_for_move_state(&self) -> Result<&WaitingForMoveState<P, S, R>> {
        match self.current_state() {
            GameState::WaitingForMove(state) => Ok(state),
            other => Err(unexpected_state("waiting for a move", other)),
        }
    }

    /// The current state, if the game has ended.
    pub fn win_state(&self) -> Result<&WinState<P, S>> {
        match self.current_state() {
            GameState::Win(state) => Ok(state),
            other => Err(unexpected_state("finished", other)),
        }
    }

    /// The current state of the light player.
    #[must_use]
    pub fn light_player(&self) -> &S {
        self.current_state().light_player()
    }

    /// The current state of the dark player.
    #[must_use]
    pub fn dark_player(&self) -> &S {
        self.current_state().dark_player()
    }

    /// The player whose turn it is.
    pub fn turn(&self) -> Result<Player> {
        let state = self.current_state();
        state.turn().ok_or_else(|| unexpected_state("playable", state))
    }

    /// The state of the player whose turn it is.
    pub fn turn_player(&self) -> Result<&S> {
        Ok(self.current_state().snapshot().player(self.turn()?))
    }

    /// The state of the player who is waiting for their turn.
    pub fn waiting_player(&self) -> Result<&S> {
        Ok(self.current_state().snapshot().player(self.turn()?.other()))
    }

    /// The state of the player who won.
    pub fn winner(&self) -> Result<&S> {
        Ok(self.win_state()?.winner())
    }

    /// The state of the player who lost.
    pub fn loser(&self) -> Result<&S> {
        Ok(self.win_state()?.loser())
    }

    /// The roll the turn player has to move with.
    pub fn roll(&self) -> Result<&R> {
        Ok(self.waiting_for_move_state()?.roll())
    }

    /// Roll the dice and advance the game.
    ///
    /// Returns the roll that was made.
    #[instrument(skip(self), fields(history = self.states.len()))]
    pub fn roll_dice(&mut self) -> Result<R> {
        let state = match self.states.last() {
            Some(GameState::WaitingForRoll(state)) => state,
            Some(other) => return Err(unexpected_state("waiting for a roll", other)),
            None => return Err(GameError::illegal_state("The game has no states")),
        };
        let roll = self.rules.roll_dice();
        let next = self.rules.apply_roll(state, roll.clone())?;
        self.append(next)?;
        Ok(roll)
    }

    /// All moves available to the turn player with the current roll.
    pub fn find_available_moves(&self) -> Result<MoveList<P>> {
        let state = self.waiting_for_move_state()?;
        self.rules.find_available_moves(state.snapshot().board(), state.turn_player(), state.roll())
    }

    /// Make `mv` and advance the game.
    ///
    /// The rule set decides whether the move is legal.
    #[instrument(skip(self), fields(history = self.states.len()))]
    pub fn make_move(&mut self, mv: &Move<P>) -> Result<()> {
        let state = match self.states.last() {
            Some(GameState::WaitingForMove(state)) => state,
            Some(other) => return Err(unexpected_state("waiting for a move", other)),
            None => return Err(GameError::illegal_state("The game has no states")),
        };
        let next = self.rules.apply_move(state, mv)?;
        self.append(next)
    }

    /// Play the game to its end, letting `light` and `dark` take turns.
    ///
    /// Each iteration hands exactly one decision (a roll or a move) to the
    /// agent of the turn player. Returns the total number of actions taken
    /// by both agents.
    #[instrument(skip_all)]
    pub fn play_autonomously(
        &mut self,
        light: &mut dyn Agent<P, S, R>,
        dark: &mut dyn Agent<P, S, R>,
    ) -> Result<usize> {
        let mut actions = 0;
        while !self.is_finished() {
            let Some(turn) = self.current_state().turn() else {
                let kind = self.current_kind();
                warn!(%kind, "unplayable state before the end of the game");
                return Err(GameError::protocol_violation(format!(
                    "Encountered an unplayable state that is not the end of the game: {kind}"
                )));
            };

            let history = self.states.len();
            actions += 1;
            match turn {
                Player::Light => light.play_turn(self, Player::Light)?,
                Player::Dark => dark.play_turn(self, Player::Dark)?,
            }

            if self.states.len() == history {
                warn!(%turn, "agent returned without acting");
                return Err(GameError::protocol_violation(format!(
                    "The agent playing {turn} returned without rolling or moving"
                )));
            }
        }
        debug!(actions, "game finished");
        Ok(actions)
    }

    /// Append the states produced by the rule set.
    fn append(&mut self, states: Vec<GameState<P, S, R>>) -> Result<()> {
        if states.is_empty() {
            warn!("rule set produced no states");
            return Err(GameError::protocol_violation("The rule set produced no new states"));
        }
        for state in &states {
            debug!(kind = %state.kind(), turn = ?state.turn(), "appending state");
        }
        self.states.extend(states);
        Ok(())
    }
}

fn unexpected_state<P: Piece, S: PlayerState, R: Roll>(expected: &str, actual: &GameState<P, S, R>) -> GameError {
    GameError::illegal_state(format!("The game is not {expected}, it is in state {}", actual.kind()))
}
