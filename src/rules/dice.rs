//! Dice and the rolls they produce.
//!
//! A [`Dice`] implementation fixes the roll type of every game that uses it:
//! `Game<P, S, D::Roll>`. Swapping dice with a different roll type therefore
//! changes the type of the game, and the compiler checks the change.

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::core::{GameError, GameRng, Result};

/// A value produced by a dice source.
pub trait Roll: Clone + Debug + PartialEq {
    /// The number of tiles this roll allows a piece to move.
    fn value(&self) -> u32;
}

/// A source of rolls.
pub trait Dice: Clone + Debug {
    /// The type of roll this dice produces.
    type Roll: Roll;

    /// Roll the dice.
    fn roll(&mut self) -> Self::Roll;
}

/// A plain roll value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceRoll {
    value: u32,
}

impl DiceRoll {
    /// Create a roll with the given value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self { value }
    }
}

impl Roll for DiceRoll {
    fn value(&self) -> u32 {
        self.value
    }
}

impl std::fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Number of binary dice used by the standard rules.
pub const STANDARD_DICE_COUNT: u32 = 4;

/// A set of binary (tetrahedral) dice, each showing 0 or 1.
///
/// The roll is the number of dice that show a 1.
#[derive(Clone, Debug)]
pub struct BinaryDice {
    count: u32,
    rng: GameRng,
}

impl BinaryDice {
    /// The standard four dice, seeded for reproducible games.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_count(STANDARD_DICE_COUNT, seed)
    }

    /// The standard four dice, seeded from system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::seeded(rand::random())
    }

    /// `count` binary dice, seeded for reproducible games.
    #[must_use]
    pub fn with_count(count: u32, seed: u64) -> Self {
        Self { count, rng: GameRng::new(seed) }
    }

    /// The number of dice that are rolled together.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }
}

impl Dice for BinaryDice {
    type Roll = DiceRoll;

    fn roll(&mut self) -> DiceRoll {
        let value = (0..self.count).filter(|_| self.rng.flip()).count();
        DiceRoll::new(value as u32)
    }
}

/// A roll produced by [`ScriptedDice`], remembering its place in the script.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScriptedRoll {
    /// The rolled value.
    pub value: u32,
    /// How many rolls the dice had produced before this one.
    pub index: usize,
}

impl Roll for ScriptedRoll {
    fn value(&self) -> u32 {
        self.value
    }
}

/// Dice that cycle through a fixed list of values.
///
/// ```
/// use royal_ur::rules::{Dice, Roll, ScriptedDice};
///
/// let mut dice = ScriptedDice::new(vec![2, 0]).unwrap();
/// assert_eq!(dice.roll().value(), 2);
/// assert_eq!(dice.roll().value(), 0);
/// assert_eq!(dice.roll().value(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptedDice {
    values: Vec<u32>,
    rolled: usize,
}

impl ScriptedDice {
    /// Create dice that repeat `values` forever.
    pub fn new(values: Vec<u32>) -> Result<Self> {
        if values.is_empty() {
            return Err(GameError::construction("Scripted dice require at least one value"));
        }
        Ok(Self { values, rolled: 0 })
    }

    /// How many rolls have been produced so far.
    #[must_use]
    pub fn rolled(&self) -> usize {
        self.rolled
    }
}

impl Dice for ScriptedDice {
    type Roll = ScriptedRoll;

    fn roll(&mut self) -> ScriptedRoll {
        let roll = ScriptedRoll {
            value: self.values[self.rolled % self.values.len()],
            index: self.rolled,
        };
        self.rolled += 1;
        roll
    }
}
