//! Rule sets and the collaborators they are built from.
//!
//! Variants implement `RuleSet` to define:
//! - The initial state of a game
//! - Legal moves for each roll
//! - How rolls and moves produce new states
//!
//! The engine calls into `RuleSet` but never interprets variant-specific
//! concepts directly. `StandardRuleSet` implements the rules shared by the
//! Royal Game of Ur and Aseb.

pub mod dice;
pub mod engine;
pub mod moves;
pub mod paths;
pub mod providers;
pub mod standard;

pub use dice::{BinaryDice, Dice, DiceRoll, Roll, ScriptedDice, ScriptedRoll, STANDARD_DICE_COUNT};
pub use engine::RuleSet;
pub use moves::{Move, MoveList};
pub use paths::{PathPair, PathType};
pub use providers::{
    PieceProvider, PlayerStateProvider, StandardPiece, StandardPieceProvider, StandardPlayerState,
    StandardPlayerStateProvider,
};
pub use standard::{RuleFlags, StandardRuleSet};
