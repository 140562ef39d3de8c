//! # royal-ur
//!
//! An engine for race games played on tile boards: the Royal Game of Ur,
//! Aseb, and custom variants sharing the same rules.
//!
//! ## Design Principles
//!
//! 1. **Variant-Agnostic**: Board shape, paths, dice, and piece counts are
//!    configured per game. The engine hardcodes none of them.
//!
//! 2. **Append-Only History**: A game is the list of every state it has
//!    been through. States are never modified, and a failed action leaves
//!    the history untouched.
//!
//! 3. **Pluggable Rules**: Legality and transitions live in a `RuleSet`.
//!    The game only checks that actions match the current state.
//!
//! ## Architecture
//!
//! - **Shared Shapes**: Board shapes are immutable and shared through `Arc`,
//!   so copying a board never copies its topology.
//!
//! - **Persistent Boards**: Board slots use `im-rs`, making the board copy
//!   that every move produces cheap.
//!
//! - **Typed Rolls**: The dice fix the roll type of a game at compile time.
//!
//! ## Modules
//!
//! - `core`: Tiles, players, errors, RNG
//! - `board`: Board shapes and piece placement
//! - `state`: Game state snapshots
//! - `rules`: The `RuleSet` trait, dice, paths, and the standard rules
//! - `game`: The game state machine and its builder
//! - `agents`: Automated players

pub mod core;
pub mod board;
pub mod state;
pub mod rules;
pub mod game;
pub mod agents;

// Re-export commonly used types
pub use crate::core::{GameError, GameRng, Player, PlayerIdentity, Result, Tile};

pub use crate::board::{Board, BoardShape, BoardType, Piece, ShapeKind};

pub use crate::state::{
    GameState, GameStateKind, MovedState, PlayerState, RolledState, Snapshot,
    WaitingForMoveState, WaitingForRollState, WinState,
};

pub use crate::rules::{
    BinaryDice, Dice, DiceRoll, Move, MoveList, PathPair, PathType, Roll, RuleFlags, RuleSet,
    ScriptedDice, ScriptedRoll, StandardPiece, StandardPlayerState, StandardRuleSet,
};

pub use crate::game::{Game, GameBuilder, GameSettings, StandardGame};

pub use crate::agents::{Agent, FirstMoveAgent, LastMoveAgent, RandomAgent};
