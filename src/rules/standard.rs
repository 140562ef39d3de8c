//! The standard race rules shared by the Royal Game of Ur and Aseb.
//!
//! ## Rules
//!
//! - Each player starts with all of their pieces off the board.
//! - A roll of `n` moves one piece `n` tiles along its owner's path.
//!   A roll of zero never allows a move.
//! - Pieces cannot land on their owner's other pieces, and cannot move
//!   past the end of their path. Reaching the end exactly scores the piece.
//! - Landing on an opponent's piece captures it and sends it back to the
//!   start, unless it sits on a rosette and rosettes are safe.
//! - Landing on a rosette, or capturing, may grant another roll.
//! - The first player to score all of their pieces wins.
//!
//! ## Transitions
//!
//! - `apply_roll` returns `[Rolled, WaitingForMove]` when the roll allows a
//!   move. When it does not, the turn passes automatically and it returns
//!   `[Rolled, WaitingForRoll]` for the other player.
//! - `apply_move` returns `[Moved, WaitingForRoll]`, or `[Moved, Win]` when
//!   the move scores the mover's last piece.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::board::{Board, BoardShape, Piece};
use crate::core::{GameError, Player, Result};
use crate::state::{
    GameState, MovedState, PlayerState, RolledState, Snapshot, WaitingForMoveState, WaitingForRollState,
    WinState,
};

use super::dice::{Dice, Roll};
use super::engine::RuleSet;
use super::moves::{Move, MoveList};
use super::paths::PathPair;
use super::providers::{
    PieceProvider, PlayerStateProvider, StandardPiece, StandardPieceProvider, StandardPlayerState,
    StandardPlayerStateProvider,
};

/// Optional rules that vary between rule sets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RuleFlags {
    /// Pieces on rosettes cannot be captured.
    pub safe_rosettes: bool,
    /// Landing on a rosette grants another roll.
    pub rosettes_grant_extra_rolls: bool,
    /// Capturing a piece grants another roll.
    pub captures_grant_extra_rolls: bool,
}

impl Default for RuleFlags {
    fn default() -> Self {
        Self {
            safe_rosettes: true,
            rosettes_grant_extra_rolls: true,
            captures_grant_extra_rolls: false,
        }
    }
}

/// The standard rules, with dice `D`.
#[derive(Clone, Debug)]
pub struct StandardRuleSet<D: Dice> {
    shape: Arc<BoardShape>,
    paths: PathPair,
    dice: D,
    piece_provider: StandardPieceProvider,
    state_provider: StandardPlayerStateProvider,
    flags: RuleFlags,
}

type State<R> = GameState<StandardPiece, StandardPlayerState, R>;

impl<D: Dice> StandardRuleSet<D> {
    /// Create a rule set, checking that the paths fit the board shape.
    pub fn new(
        shape: impl Into<Arc<BoardShape>>,
        paths: PathPair,
        dice: D,
        piece_provider: StandardPieceProvider,
        state_provider: StandardPlayerStateProvider,
        flags: RuleFlags,
    ) -> Result<Self> {
        let shape = shape.into();
        paths.validate(&shape)?;
        if state_provider.starting_piece_count() == 0 {
            return Err(GameError::construction("Players must start with at least one piece"));
        }
        Ok(Self { shape, paths, dice, piece_provider, state_provider, flags })
    }

    /// The dice used to generate rolls.
    #[must_use]
    pub fn dice(&self) -> &D {
        &self.dice
    }

    /// The optional rules in use.
    #[must_use]
    pub fn flags(&self) -> RuleFlags {
        self.flags
    }

    /// The number of pieces each player starts with.
    #[must_use]
    pub fn starting_piece_count(&self) -> u32 {
        self.state_provider.starting_piece_count()
    }

    /// Build a snapshot, placing each player state on its own side.
    fn snapshot(
        board: Board<StandardPiece>,
        mover: StandardPlayerState,
        other: StandardPlayerState,
    ) -> Result<Snapshot<StandardPiece, StandardPlayerState>> {
        match mover.player() {
            Player::Light => Snapshot::new(board, mover, other),
            Player::Dark => Snapshot::new(board, other, mover),
        }
    }

    /// The move of the piece at `source_index` along `player`'s path, if it is legal.
    fn try_move(
        &self,
        board: &Board<StandardPiece>,
        player: Player,
        source_index: usize,
        distance: usize,
    ) -> Result<Option<Move<StandardPiece>>> {
        let dest_index = source_index + distance;
        let Some(dest_tile) = self.paths.tile(player, dest_index) else {
            return Ok(None);
        };

        let source = match source_index {
            0 => None,
            index => self
                .paths
                .tile(player, index)
                .map(|tile| (tile, self.piece_provider.create(player, index))),
        };
        if dest_index == self.paths.end_index(player) {
            // Pieces cannot score straight from the start tile.
            return source.map(|source| Move::new(player, Some(source), None, None)).transpose();
        }

        let captured = match board.get(dest_tile)? {
            Some(occupant) if occupant.owner() == player => return Ok(None),
            Some(_) if self.flags.safe_rosettes && self.shape.is_rosette_tile(dest_tile) => return Ok(None),
            occupant => occupant.copied(),
        };
        let dest = (dest_tile, self.piece_provider.create(player, dest_index));
        Move::new(player, source, Some(dest), captured).map(Some)
    }
}

impl<D: Dice> RuleSet<StandardPiece, StandardPlayerState, D::Roll> for StandardRuleSet<D> {
    fn shape(&self) -> &Arc<BoardShape> {
        &self.shape
    }

    fn paths(&self) -> &PathPair {
        &self.paths
    }

    fn roll_dice(&mut self) -> D::Roll {
        self.dice.roll()
    }

    fn generate_initial_state(&self) -> Result<State<D::Roll>> {
        let snapshot = Snapshot::new(
            Board::new(Arc::clone(&self.shape)),
            self.state_provider.create_initial(Player::Light),
            self.state_provider.create_initial(Player::Dark),
        )?;
        Ok(WaitingForRollState::new(snapshot, Player::Light).into())
    }

    #[instrument(skip_all, fields(turn = %state.turn(), roll = roll.value()))]
    fn apply_roll(
        &self,
        state: &WaitingForRollState<StandardPiece, StandardPlayerState>,
        roll: D::Roll,
    ) -> Result<Vec<State<D::Roll>>> {
        let snapshot = state.snapshot();
        let moves = self.find_available_moves(snapshot.board(), state.turn_player(), &roll)?;
        let rolled = RolledState::new(snapshot.clone(), state.turn(), roll.clone(), moves.clone());

        if moves.is_empty() {
            debug!("no moves available, passing the turn");
            let next = WaitingForRollState::new(snapshot.clone(), state.turn().other());
            return Ok(vec![rolled.into(), next.into()]);
        }

        debug!(moves = moves.len(), "waiting for a move");
        let next = WaitingForMoveState::new(snapshot.clone(), state.turn(), roll);
        Ok(vec![rolled.into(), next.into()])
    }

    #[instrument(skip_all, fields(turn = %state.turn(), mv = %mv))]
    fn apply_move(
        &self,
        state: &WaitingForMoveState<StandardPiece, StandardPlayerState, D::Roll>,
        mv: &Move<StandardPiece>,
    ) -> Result<Vec<State<D::Roll>>> {
        let snapshot = state.snapshot();
        let turn = state.turn();
        let available = self.find_available_moves(snapshot.board(), state.turn_player(), state.roll())?;
        if mv.player() != turn || !available.contains(mv) {
            return Err(GameError::illegal_state(format!("{mv} is not an available move")));
        }

        let board = mv.apply(snapshot.board())?;
        let mut mover = *state.turn_player();
        let mut other = *state.waiting_player();
        if mv.is_introducing_piece() {
            mover = self.state_provider.apply_piece_introduced(&mover);
        }
        if mv.is_scoring_piece() {
            mover = self.state_provider.apply_piece_scored(&mover);
        }
        if mv.is_capture() {
            other = self.state_provider.apply_piece_captured(&other);
        }

        let moved = MovedState::new(snapshot.clone(), turn, state.roll().clone(), mv.clone());
        let won = self.state_provider.has_won(&mover);
        let next_snapshot = Self::snapshot(board, mover, other)?;

        if won {
            debug!(winner = %turn, "game won");
            return Ok(vec![moved.into(), WinState::new(next_snapshot, turn).into()]);
        }

        let landed_on_rosette = mv.dest().is_some_and(|tile| self.shape.is_rosette_tile(tile));
        let extra_roll = (self.flags.rosettes_grant_extra_rolls && landed_on_rosette)
            || (self.flags.captures_grant_extra_rolls && mv.is_capture());
        let next_turn = if extra_roll { turn } else { turn.other() };
        Ok(vec![moved.into(), WaitingForRollState::new(next_snapshot, next_turn).into()])
    }

    fn find_available_moves(
        &self,
        board: &Board<StandardPiece>,
        player: &StandardPlayerState,
        roll: &D::Roll,
    ) -> Result<MoveList<StandardPiece>> {
        let mut moves = MoveList::new();
        let distance = roll.value() as usize;
        if distance == 0 {
            return Ok(moves);
        }

        let owner = player.player();
        let mut sources: Vec<usize> = board
            .pieces()
            .filter(|piece| piece.owner() == owner)
            .map(StandardPiece::path_index)
            .collect();
        sources.sort_unstable();
        if player.piece_count() > 0 {
            sources.insert(0, 0);
        }

        for source_index in sources {
            if let Some(mv) = self.try_move(board, owner, source_index, distance)? {
                moves.push(mv);
            }
        }
        Ok(moves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Tile;
    use crate::rules::{BinaryDice, DiceRoll, ScriptedDice, ScriptedRoll};

    fn rules() -> StandardRuleSet<ScriptedDice> {
        StandardRuleSet::new(
            BoardShape::standard(),
            PathPair::bell(),
            ScriptedDice::new(vec![1]).unwrap(),
            StandardPieceProvider,
            StandardPlayerStateProvider::new(7),
            RuleFlags::default(),
        )
        .unwrap()
    }

    fn piece(owner: Player, index: usize) -> StandardPiece {
        StandardPiece::new(owner, index)
    }

    fn place(board: &mut Board<StandardPiece>, paths: &PathPair, owner: Player, index: usize) {
        let tile = paths.get(owner)[index];
        board.set(tile, Some(piece(owner, index))).unwrap();
    }

    fn light_state(piece_count: u32) -> StandardPlayerState {
        StandardPlayerState::new(Player::Light, piece_count, 0)
    }

    #[test]
    fn test_new_rejects_mismatched_paths() {
        let result = StandardRuleSet::new(
            BoardShape::standard(),
            PathPair::aseb(),
            ScriptedDice::new(vec![1]).unwrap(),
            StandardPieceProvider,
            StandardPlayerStateProvider::new(7),
            RuleFlags::default(),
        );
        assert!(result.unwrap_err().is_construction());
    }

    #[test]
    fn test_zero_roll_has_no_moves() {
        let rules = rules();
        let board = Board::new(Arc::clone(rules.shape()));
        let moves = rules.find_available_moves(&board, &light_state(7), &ScriptedDice::new(vec![0]).unwrap().roll());
        assert!(moves.unwrap().is_empty());
    }

    #[test]
    fn test_introduce_piece() {
        let rules = rules();
        let board = Board::new(Arc::clone(rules.shape()));
        let roll = ScriptedRoll { value: 2, index: 0 };
        let moves = rules.find_available_moves(&board, &light_state(7), &roll).unwrap();

        assert_eq!(moves.len(), 1);
        assert!(moves[0].is_introducing_piece());
        assert_eq!(moves[0].dest(), Some(Tile::new(0, 2)));
    }

    #[test]
    fn test_cannot_land_on_own_piece() {
        let rules = rules();
        let paths = rules.paths().clone();
        let mut board = Board::new(Arc::clone(rules.shape()));
        place(&mut board, &paths, Player::Light, 2);

        let roll = ScriptedRoll { value: 2, index: 0 };
        let moves = rules.find_available_moves(&board, &light_state(6), &roll).unwrap();
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].source(), Some(Tile::new(0, 2)));
    }

    #[test]
    fn test_capture_and_safe_rosette() {
        let rules = rules();
        let paths = rules.paths().clone();
        let mut board = Board::new(Arc::clone(rules.shape()));
        place(&mut board, &paths, Player::Light, 5);
        // Index 8 is the central rosette at (1, 3).
        place(&mut board, &paths, Player::Dark, 8);
        place(&mut board, &paths, Player::Dark, 7);
        let roll = |value| ScriptedRoll { value, index: 0 };

        let capture = rules.find_available_moves(&board, &light_state(0), &roll(2)).unwrap();
        assert_eq!(capture.len(), 1);
        assert!(capture[0].is_capture());
        assert_eq!(capture[0].captured_piece(), Some(&piece(Player::Dark, 7)));

        let blocked = rules.find_available_moves(&board, &light_state(0), &roll(3)).unwrap();
        assert!(blocked.is_empty());
    }

    #[test]
    fn test_scoring_requires_exact_roll() {
        let rules = rules();
        let paths = rules.paths().clone();
        let mut board = Board::new(Arc::clone(rules.shape()));
        place(&mut board, &paths, Player::Light, 13);
        let roll = |value| ScriptedRoll { value, index: 0 };

        let exact = rules.find_available_moves(&board, &light_state(0), &roll(2)).unwrap();
        assert_eq!(exact.len(), 1);
        assert!(exact[0].is_scoring_piece());

        let overshoot = rules.find_available_moves(&board, &light_state(0), &roll(3)).unwrap();
        assert!(overshoot.is_empty());
    }

    #[test]
    fn test_apply_roll_without_moves_passes_turn() {
        let rules = rules();
        let initial = rules.generate_initial_state().unwrap();
        let GameState::WaitingForRoll(state) = initial else {
            panic!("initial state should wait for a roll");
        };

        let states = rules.apply_roll(&state, ScriptedRoll { value: 0, index: 0 }).unwrap();
        assert_eq!(states.len(), 2);
        assert!(matches!(states[0], GameState::Rolled(_)));
        assert_eq!(states[1].turn(), Some(Player::Dark));
        assert!(matches!(states[1], GameState::WaitingForRoll(_)));
    }

    #[test]
    fn test_apply_move_rosette_grants_extra_roll() {
        let rules = rules();
        let GameState::WaitingForRoll(state) = rules.generate_initial_state().unwrap() else {
            panic!("initial state should wait for a roll");
        };
        let roll = ScriptedRoll { value: 4, index: 0 };
        let states = rules.apply_roll(&state, roll).unwrap();
        let GameState::WaitingForMove(waiting) = &states[1] else {
            panic!("a roll of four should allow a move");
        };

        let moves = rules.find_available_moves(waiting.snapshot().board(), waiting.turn_player(), waiting.roll()).unwrap();
        let next = rules.apply_move(waiting, &moves[0]).unwrap();

        assert!(matches!(next[0], GameState::Moved(_)));
        // (0, 0) is a rosette, so light rolls again.
        assert_eq!(next[1].turn(), Some(Player::Light));
        assert_eq!(next[1].light_player().piece_count(), 6);
        assert_eq!(next[1].board().count_pieces(Player::Light), 1);
        // The state the move was made from is unchanged.
        assert_eq!(waiting.snapshot().board().count_pieces(Player::Light), 0);
    }

    #[test]
    fn test_apply_move_rejects_unavailable_move() {
        let rules = rules();
        let snapshot = Snapshot::new(
            Board::new(Arc::clone(rules.shape())),
            light_state(7),
            StandardPlayerState::new(Player::Dark, 7, 0),
        )
        .unwrap();
        let roll = ScriptedRoll { value: 1, index: 0 };
        let waiting = WaitingForMoveState::new(snapshot, Player::Light, roll);

        let wrong = Move::new(Player::Light, None, Some((Tile::new(0, 1), piece(Player::Light, 3))), None).unwrap();
        assert!(rules.apply_move(&waiting, &wrong).unwrap_err().is_illegal_state());
    }

    #[test]
    fn test_last_piece_scored_wins() {
        let rules = rules();
        let paths = rules.paths().clone();
        let mut board = Board::new(Arc::clone(rules.shape()));
        place(&mut board, &paths, Player::Light, 14);
        let snapshot = Snapshot::new(
            board,
            StandardPlayerState::new(Player::Light, 0, 6),
            StandardPlayerState::new(Player::Dark, 7, 0),
        )
        .unwrap();
        let waiting = WaitingForMoveState::new(snapshot, Player::Light, ScriptedRoll { value: 1, index: 0 });

        let moves = rules.find_available_moves(waiting.snapshot().board(), waiting.turn_player(), waiting.roll()).unwrap();
        let states = rules.apply_move(&waiting, &moves[0]).unwrap();
        let GameState::Win(win) = &states[1] else {
            panic!("scoring the last piece should win");
        };
        assert_eq!(win.winning_player(), Player::Light);
        assert_eq!(win.winner().score(), 7);
    }

    #[test]
    fn test_dice_roll_type_is_generic() {
        let rules = StandardRuleSet::new(
            BoardShape::aseb(),
            PathPair::aseb(),
            BinaryDice::seeded(3),
            StandardPieceProvider,
            StandardPlayerStateProvider::new(5),
            RuleFlags::default(),
        )
        .unwrap();
        let board = Board::new(Arc::clone(rules.shape()));
        let state = StandardPlayerState::new(Player::Dark, 5, 0);
        let moves = rules.find_available_moves(&board, &state, &DiceRoll::new(4)).unwrap();
        assert_eq!(moves[0].dest(), Some(Tile::new(2, 0)));
    }
}
