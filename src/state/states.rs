//! Immutable snapshots of a game.
//!
//! ## Playable states
//!
//! - [`WaitingForRollState`]: the turn player must roll the dice.
//! - [`WaitingForMoveState`]: the turn player rolled and must pick a move.
//!
//! ## Action records
//!
//! - [`RolledState`]: a roll that was made, and the moves it allowed.
//! - [`MovedState`]: a move that was made.
//!
//! Rule sets append these records in front of the next playable state so
//! that the history shows what happened. They are never actionable.
//!
//! ## Terminal state
//!
//! - [`WinState`]: the game is over.
//!
//! Every state owns its board and both player states. Nothing hands out
//! mutable access, so a state never changes once it has been created.

use crate::board::{Board, Piece};
use crate::core::{GameError, Player, Result};
use crate::rules::{Move, MoveList, Roll};

use super::player_state::PlayerState;

/// The board and both player states at one point in a game.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot<P: Piece, S: PlayerState> {
    board: Board<P>,
    light_player: S,
    dark_player: S,
}

impl<P: Piece, S: PlayerState> Snapshot<P, S> {
    /// Create a snapshot, checking that each player state sits on its own side.
    pub fn new(board: Board<P>, light_player: S, dark_player: S) -> Result<Self> {
        if light_player.player() != Player::Light || dark_player.player() != Player::Dark {
            return Err(GameError::construction(format!(
                "Player states are in the wrong order: {} then {}",
                light_player.player(),
                dark_player.player()
            )));
        }
        Ok(Self { board, light_player, dark_player })
    }

    /// The placement of pieces.
    #[must_use]
    pub fn board(&self) -> &Board<P> {
        &self.board
    }

    /// The state of the light player.
    #[must_use]
    pub fn light_player(&self) -> &S {
        &self.light_player
    }

    /// The state of the dark player.
    #[must_use]
    pub fn dark_player(&self) -> &S {
        &self.dark_player
    }

    /// The state of `player`.
    #[must_use]
    pub fn player(&self, player: Player) -> &S {
        match player {
            Player::Light => &self.light_player,
            Player::Dark => &self.dark_player,
        }
    }
}

/// Waiting for the turn player to roll the dice.
#[derive(Clone, Debug, PartialEq)]
pub struct WaitingForRollState<P: Piece, S: PlayerState> {
    snapshot: Snapshot<P, S>,
    turn: Player,
}

impl<P: Piece, S: PlayerState> WaitingForRollState<P, S> {
    /// Create a state waiting for `turn` to roll.
    #[must_use]
    pub fn new(snapshot: Snapshot<P, S>, turn: Player) -> Self {
        Self { snapshot, turn }
    }

    /// The board and player states.
    #[must_use]
    pub fn snapshot(&self) -> &Snapshot<P, S> {
        &self.snapshot
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// The state of the player whose turn it is.
    #[must_use]
    pub fn turn_player(&self) -> &S {
        self.snapshot.player(self.turn)
    }

    /// The state of the player waiting for their turn.
    #[must_use]
    pub fn waiting_player(&self) -> &S {
        self.snapshot.player(self.turn.other())
    }
}

/// Waiting for the turn player to move, using a roll they already made.
#[derive(Clone, Debug, PartialEq)]
pub struct WaitingForMoveState<P: Piece, S: PlayerState, R: Roll> {
    snapshot: Snapshot<P, S>,
    turn: Player,
    roll: R,
}

impl<P: Piece, S: PlayerState, R: Roll> WaitingForMoveState<P, S, R> {
    /// Create a state waiting for `turn` to move with `roll`.
    #[must_use]
    pub fn new(snapshot: Snapshot<P, S>, turn: Player, roll: R) -> Self {
        Self { snapshot, turn, roll }
    }

    /// The board and player states.
    #[must_use]
    pub fn snapshot(&self) -> &Snapshot<P, S> {
        &self.snapshot
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// The roll to be used for the move.
    #[must_use]
    pub fn roll(&self) -> &R {
        &self.roll
    }

    /// The state of the player whose turn it is.
    #[must_use]
    pub fn turn_player(&self) -> &S {
        self.snapshot.player(self.turn)
    }

    /// The state of the player waiting for their turn.
    #[must_use]
    pub fn waiting_player(&self) -> &S {
        self.snapshot.player(self.turn.other())
    }
}

/// Record of a roll, and of the moves it made available.
#[derive(Clone, Debug, PartialEq)]
pub struct RolledState<P: Piece, S: PlayerState, R: Roll> {
    snapshot: Snapshot<P, S>,
    turn: Player,
    roll: R,
    available_moves: MoveList<P>,
}

impl<P: Piece, S: PlayerState, R: Roll> RolledState<P, S, R> {
    /// Record that `turn` rolled `roll`.
    #[must_use]
    pub fn new(snapshot: Snapshot<P, S>, turn: Player, roll: R, available_moves: MoveList<P>) -> Self {
        Self { snapshot, turn, roll, available_moves }
    }

    /// The board and player states.
    #[must_use]
    pub fn snapshot(&self) -> &Snapshot<P, S> {
        &self.snapshot
    }

    /// The player who rolled.
    #[must_use]
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// The roll that was made.
    #[must_use]
    pub fn roll(&self) -> &R {
        &self.roll
    }

    /// The moves the roll allowed.
    #[must_use]
    pub fn available_moves(&self) -> &[Move<P>] {
        &self.available_moves
    }
}

/// Record of a move.
#[derive(Clone, Debug, PartialEq)]
pub struct MovedState<P: Piece, S: PlayerState, R: Roll> {
    snapshot: Snapshot<P, S>,
    turn: Player,
    roll: R,
    mv: Move<P>,
}

impl<P: Piece, S: PlayerState, R: Roll> MovedState<P, S, R> {
    /// Record that `turn` made `mv` using `roll`. The snapshot is from before the move.
    #[must_use]
    pub fn new(snapshot: Snapshot<P, S>, turn: Player, roll: R, mv: Move<P>) -> Self {
        Self { snapshot, turn, roll, mv }
    }

    /// The board and player states before the move.
    #[must_use]
    pub fn snapshot(&self) -> &Snapshot<P, S> {
        &self.snapshot
    }

    /// The player who moved.
    #[must_use]
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// The roll used for the move.
    #[must_use]
    pub fn roll(&self) -> &R {
        &self.roll
    }

    /// The move that was made.
    #[must_use]
    pub fn played_move(&self) -> &Move<P> {
        &self.mv
    }
}

/// The game is over.
#[derive(Clone, Debug, PartialEq)]
pub struct WinState<P: Piece, S: PlayerState> {
    snapshot: Snapshot<P, S>,
    winner: Player,
}

impl<P: Piece, S: PlayerState> WinState<P, S> {
    /// Create a finished state won by `winner`.
    #[must_use]
    pub fn new(snapshot: Snapshot<P, S>, winner: Player) -> Self {
        Self { snapshot, winner }
    }

    /// The board and player states.
    #[must_use]
    pub fn snapshot(&self) -> &Snapshot<P, S> {
        &self.snapshot
    }

    /// The player who won.
    #[must_use]
    pub fn winning_player(&self) -> Player {
        self.winner
    }

    /// The state of the winning player.
    #[must_use]
    pub fn winner(&self) -> &S {
        self.snapshot.player(self.winner)
    }

    /// The state of the losing player.
    #[must_use]
    pub fn loser(&self) -> &S {
        self.snapshot.player(self.winner.other())
    }
}

/// The kind of a [`GameState`], without its contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GameStateKind {
    /// See [`WaitingForRollState`].
    #[display("WaitingForRoll")]
    WaitingForRoll,
    /// See [`WaitingForMoveState`].
    #[display("WaitingForMove")]
    WaitingForMove,
    /// See [`RolledState`].
    #[display("Rolled")]
    Rolled,
    /// See [`MovedState`].
    #[display("Moved")]
    Moved,
    /// See [`WinState`].
    #[display("Win")]
    Win,
}

/// One entry in the history of a game.
#[derive(Clone, Debug, PartialEq)]
pub enum GameState<P: Piece, S: PlayerState, R: Roll> {
    /// Waiting for a roll.
    WaitingForRoll(WaitingForRollState<P, S>),
    /// Waiting for a move.
    WaitingForMove(WaitingForMoveState<P, S, R>),
    /// A roll was made.
    Rolled(RolledState<P, S, R>),
    /// A move was made.
    Moved(MovedState<P, S, R>),
    /// The game has been won.
    Win(WinState<P, S>),
}

impl<P: Piece, S: PlayerState, R: Roll> GameState<P, S, R> {
    /// The kind of this state.
    #[must_use]
    pub fn kind(&self) -> GameStateKind {
        match self {
            GameState::WaitingForRoll(_) => GameStateKind::WaitingForRoll,
            GameState::WaitingForMove(_) => GameStateKind::WaitingForMove,
            GameState::Rolled(_) => GameStateKind::Rolled,
            GameState::Moved(_) => GameStateKind::Moved,
            GameState::Win(_) => GameStateKind::Win,
        }
    }

    /// The board and player states.
    #[must_use]
    pub fn snapshot(&self) -> &Snapshot<P, S> {
        match self {
            GameState::WaitingForRoll(state) => state.snapshot(),
            GameState::WaitingForMove(state) => state.snapshot(),
            GameState::Rolled(state) => state.snapshot(),
            GameState::Moved(state) => state.snapshot(),
            GameState::Win(state) => state.snapshot(),
        }
    }

    /// The placement of pieces.
    #[must_use]
    pub fn board(&self) -> &Board<P> {
        self.snapshot().board()
    }

    /// The state of the light player.
    #[must_use]
    pub fn light_player(&self) -> &S {
        self.snapshot().light_player()
    }

    /// The state of the dark player.
    #[must_use]
    pub fn dark_player(&self) -> &S {
        self.snapshot().dark_player()
    }

    /// Check if a player can act in this state.
    #[must_use]
    pub fn is_playable(&self) -> bool {
        matches!(self, GameState::WaitingForRoll(_) | GameState::WaitingForMove(_))
    }

    /// Check if this state ends the game.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self, GameState::Win(_))
    }

    /// The player who has to act, for playable states.
    #[must_use]
    pub fn turn(&self) -> Option<Player> {
        match self {
            GameState::WaitingForRoll(state) => Some(state.turn()),
            GameState::WaitingForMove(state) => Some(state.turn()),
            _ => None,
        }
    }
}

impl<P: Piece, S: PlayerState, R: Roll> From<WaitingForRollState<P, S>> for GameState<P, S, R> {
    fn from(state: WaitingForRollState<P, S>) -> Self {
        GameState::WaitingForRoll(state)
    }
}

impl<P: Piece, S: PlayerState, R: Roll> From<WaitingForMoveState<P, S, R>> for GameState<P, S, R> {
    fn from(state: WaitingForMoveState<P, S, R>) -> Self {
        GameState::WaitingForMove(state)
    }
}

impl<P: Piece, S: PlayerState, R: Roll> From<RolledState<P, S, R>> for GameState<P, S, R> {
    fn from(state: RolledState<P, S, R>) -> Self {
        GameState::Rolled(state)
    }
}

impl<P: Piece, S: PlayerState, R: Roll> From<MovedState<P, S, R>> for GameState<P, S, R> {
    fn from(state: MovedState<P, S, R>) -> Self {
        GameState::Moved(state)
    }
}

impl<P: Piece, S: PlayerState, R: Roll> From<WinState<P, S>> for GameState<P, S, R> {
    fn from(state: WinState<P, S>) -> Self {
        GameState::Win(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardShape;
    use crate::rules::DiceRoll;

    #[derive(Clone, Debug, PartialEq)]
    struct Stone(Player);

    impl Piece for Stone {
        fn owner(&self) -> Player {
            self.0
        }
    }

    #[derive(Clone, Debug, PartialEq)]
    struct Side(Player, u32);

    impl PlayerState for Side {
        fn player(&self) -> Player {
            self.0
        }
    }

    type State = GameState<Stone, Side, DiceRoll>;

    fn snapshot() -> Snapshot<Stone, Side> {
        Snapshot::new(Board::new(BoardShape::standard()), Side(Player::Light, 1), Side(Player::Dark, 2))
            .unwrap()
    }

    #[test]
    fn test_snapshot_checks_sides() {
        let board: Board<Stone> = Board::new(BoardShape::standard());
        let swapped = Snapshot::new(board, Side(Player::Dark, 0), Side(Player::Light, 0));
        assert!(swapped.unwrap_err().is_construction());
    }

    #[test]
    fn test_waiting_for_roll_players() {
        let state = WaitingForRollState::new(snapshot(), Player::Dark);
        assert_eq!(state.turn_player(), &Side(Player::Dark, 2));
        assert_eq!(state.waiting_player(), &Side(Player::Light, 1));

        let state: State = state.into();
        assert_eq!(state.kind(), GameStateKind::WaitingForRoll);
        assert!(state.is_playable());
        assert!(!state.is_finished());
        assert_eq!(state.turn(), Some(Player::Dark));
    }

    #[test]
    fn test_action_records_are_not_playable() {
        let rolled: State = RolledState::new(snapshot(), Player::Light, DiceRoll::new(0), MoveList::new()).into();
        assert!(!rolled.is_playable());
        assert!(!rolled.is_finished());
        assert_eq!(rolled.turn(), None);
        assert_eq!(rolled.kind().to_string(), "Rolled");
    }

    #[test]
    fn test_win_state() {
        let win = WinState::new(snapshot(), Player::Light);
        assert_eq!(win.winner(), &Side(Player::Light, 1));
        assert_eq!(win.loser(), &Side(Player::Dark, 2));

        let state: State = win.into();
        assert!(state.is_finished());
        assert!(!state.is_playable());
        assert_eq!(state.dark_player(), &Side(Player::Dark, 2));
    }
}
