//! Game states: immutable snapshots that make up a game's history.
//!
//! - `player_state`: what the engine requires of per-player state
//! - `states`: the playable, record, and terminal state variants

pub mod player_state;
pub mod states;

pub use player_state::PlayerState;
pub use states::{
    GameState, GameStateKind, MovedState, RolledState, Snapshot, WaitingForMoveState,
    WaitingForRollState, WinState,
};
