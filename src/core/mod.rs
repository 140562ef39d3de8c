//! Core types: tiles, players, errors, RNG.
//!
//! Everything here is independent of any particular board or rule set.

pub mod error;
pub mod player;
pub mod rng;
pub mod tile;

pub use error::{GameError, Result};
pub use player::{Player, PlayerIdentity};
pub use rng::GameRng;
pub use tile::Tile;
