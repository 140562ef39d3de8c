//! Games: the state machine, its builder, and serializable settings.

pub mod builder;
pub mod game;
pub mod settings;

pub use builder::{GameBuilder, StandardGame};
pub use game::Game;
pub use settings::{GameSettings, ASEB_PIECE_COUNT, STANDARD_PIECE_COUNT};
