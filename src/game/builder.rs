//! Fluent configuration of new games.
//!
//! ```
//! use royal_ur::game::GameBuilder;
//! use royal_ur::rules::ScriptedDice;
//!
//! let game = GameBuilder::aseb()
//!     .dice(ScriptedDice::new(vec![2, 3]).unwrap())
//!     .starting_piece_count(3)
//!     .build()
//!     .unwrap();
//! assert!(game.is_waiting_for_roll());
//! ```
//!
//! Every setter returns a new builder and leaves the receiver unchanged, so
//! a preset can be shared and specialized several times.

use std::sync::Arc;

use tracing::debug;

use crate::board::{BoardShape, BoardType, ShapeKind};
use crate::core::{PlayerIdentity, Result};
use crate::rules::{
    BinaryDice, Dice, DiceRoll, PathPair, PathType, RuleFlags, RuleSet, StandardPiece, StandardPieceProvider,
    StandardPlayerState, StandardPlayerStateProvider, StandardRuleSet,
};

use super::game::Game;
use super::settings::GameSettings;

/// A game built by a [`GameBuilder`] with dice `D`.
pub type StandardGame<D> = Game<StandardPiece, StandardPlayerState, <D as Dice>::Roll>;

/// Builder for games played under the standard rules.
#[derive(Clone, Debug)]
pub struct GameBuilder<D: Dice> {
    light_identity: PlayerIdentity,
    dark_identity: PlayerIdentity,
    shape: Arc<BoardShape>,
    paths: PathPair,
    dice: D,
    starting_piece_count: u32,
    flags: RuleFlags,
}

impl GameBuilder<BinaryDice> {
    /// The Royal Game of Ur: standard board, Bell's paths, seven pieces
    /// each and four binary dice.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_settings(&GameSettings::standard())
    }

    /// Aseb: the long board and its paths, five pieces each and four
    /// binary dice.
    #[must_use]
    pub fn aseb() -> Self {
        Self::from_settings(&GameSettings::aseb())
    }

    /// A builder for `settings`, with four binary dice seeded from entropy.
    #[must_use]
    pub fn from_settings(settings: &GameSettings) -> Self {
        Self {
            light_identity: PlayerIdentity::anonymous(),
            dark_identity: PlayerIdentity::anonymous(),
            shape: Arc::new(settings.board.create()),
            paths: settings.paths.create(),
            dice: BinaryDice::from_entropy(),
            starting_piece_count: settings.starting_piece_count,
            flags: settings.flags,
        }
    }
}

impl<D: Dice> GameBuilder<D> {
    /// Use `light` and `dark` as the identities of the two players.
    #[must_use]
    pub fn players(&self, light: PlayerIdentity, dark: PlayerIdentity) -> Self {
        Self { light_identity: light, dark_identity: dark, ..self.clone() }
    }

    /// Play on `shape`.
    #[must_use]
    pub fn board_shape(&self, shape: impl Into<Arc<BoardShape>>) -> Self {
        Self { shape: shape.into(), ..self.clone() }
    }

    /// Play on one of the built-in board shapes.
    #[must_use]
    pub fn board_type(&self, board: BoardType) -> Self {
        self.board_shape(board.create())
    }

    /// Move pieces along `paths`.
    #[must_use]
    pub fn paths(&self, paths: PathPair) -> Self {
        Self { paths, ..self.clone() }
    }

    /// Move pieces along one of the built-in path pairs.
    #[must_use]
    pub fn path_type(&self, paths: PathType) -> Self {
        self.paths(paths.create())
    }

    /// Roll `dice` instead. The roll type of the built game follows the dice.
    #[must_use]
    pub fn dice<ND: Dice>(&self, dice: ND) -> GameBuilder<ND> {
        GameBuilder {
            light_identity: self.light_identity.clone(),
            dark_identity: self.dark_identity.clone(),
            shape: Arc::clone(&self.shape),
            paths: self.paths.clone(),
            dice,
            starting_piece_count: self.starting_piece_count,
            flags: self.flags,
        }
    }

    /// Give each player `count` pieces.
    #[must_use]
    pub fn starting_piece_count(&self, count: u32) -> Self {
        Self { starting_piece_count: count, ..self.clone() }
    }

    /// Use `flags` for the optional rules.
    #[must_use]
    pub fn flags(&self, flags: RuleFlags) -> Self {
        Self { flags, ..self.clone() }
    }

    /// The identity of the light player.
    #[must_use]
    pub fn light_identity(&self) -> &PlayerIdentity {
        &self.light_identity
    }

    /// The identity of the dark player.
    #[must_use]
    pub fn dark_identity(&self) -> &PlayerIdentity {
        &self.dark_identity
    }

    /// The board shape games will be played on.
    #[must_use]
    pub fn shape(&self) -> &Arc<BoardShape> {
        &self.shape
    }

    /// The paths pieces will take.
    #[must_use]
    pub fn path_pair(&self) -> &PathPair {
        &self.paths
    }

    /// The dice games will be played with.
    #[must_use]
    pub fn dice_ref(&self) -> &D {
        &self.dice
    }

    /// The number of pieces each player starts with.
    #[must_use]
    pub fn piece_count(&self) -> u32 {
        self.starting_piece_count
    }

    /// The optional rules in use.
    #[must_use]
    pub fn rule_flags(&self) -> RuleFlags {
        self.flags
    }

    /// The settings this builder was configured with.
    ///
    /// `None` when the board shape or paths are not built-in ones.
    #[must_use]
    pub fn settings(&self) -> Option<GameSettings> {
        let board = match self.shape.kind() {
            ShapeKind::Standard => BoardType::Standard,
            ShapeKind::Aseb => BoardType::Aseb,
            ShapeKind::Custom(_) => return None,
        };
        let paths = [PathType::Bell, PathType::Aseb]
            .into_iter()
            .find(|path_type| path_type.create() == self.paths)?;
        Some(GameSettings {
            board,
            paths,
            starting_piece_count: self.starting_piece_count,
            flags: self.flags,
        })
    }

    /// Build the rule set. Each call gets its own copy of the dice.
    pub fn build_rules(&self) -> Result<StandardRuleSet<D>> {
        StandardRuleSet::new(
            Arc::clone(&self.shape),
            self.paths.clone(),
            self.dice.clone(),
            StandardPieceProvider,
            StandardPlayerStateProvider::new(self.starting_piece_count),
            self.flags,
        )
    }

    /// Build a new game, waiting for the light player's first roll.
    pub fn build(&self) -> Result<StandardGame<D>>
    where
        D: 'static,
    {
        let rules = self.build_rules()?;
        let initial = rules.generate_initial_state()?;
        debug!(
            shape = %self.shape,
            paths = self.paths.name(),
            pieces = self.starting_piece_count,
            "building game"
        );
        Ok(Game::new(rules, vec![initial])?
            .with_identities(self.light_identity.clone(), self.dark_identity.clone()))
    }
}

impl Game<StandardPiece, StandardPlayerState, DiceRoll> {
    /// A new game of the Royal Game of Ur with anonymous players.
    pub fn create_standard() -> Result<Self> {
        GameBuilder::standard().build()
    }

    /// A new game of Aseb with anonymous players.
    pub fn create_aseb() -> Result<Self> {
        GameBuilder::aseb().build()
    }
}
