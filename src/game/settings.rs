//! Serializable game settings.
//!
//! `GameSettings` names the variant being played without carrying any live
//! collaborators, so it can be stored in config files and sent between
//! processes. A [`GameBuilder`](super::GameBuilder) turns it back into rules.

use serde::{Deserialize, Serialize};

use crate::board::BoardType;
use crate::rules::{PathType, RuleFlags};

/// Pieces each player starts with in the Royal Game of Ur.
pub const STANDARD_PIECE_COUNT: u32 = 7;

/// Pieces each player starts with in Aseb.
pub const ASEB_PIECE_COUNT: u32 = 5;

/// The settings of a game variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSettings {
    /// The board shape to play on.
    pub board: BoardType,
    /// The paths pieces take across the board.
    pub paths: PathType,
    /// How many pieces each player starts with.
    pub starting_piece_count: u32,
    /// Optional rules. Missing from older configs, in which case the
    /// standard rules apply.
    #[serde(default)]
    pub flags: RuleFlags,
}

impl GameSettings {
    /// The Royal Game of Ur on the standard board, with Bell's paths.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            board: BoardType::Standard,
            paths: PathType::Bell,
            starting_piece_count: STANDARD_PIECE_COUNT,
            flags: RuleFlags::default(),
        }
    }

    /// Aseb on its long board.
    #[must_use]
    pub fn aseb() -> Self {
        Self {
            board: BoardType::Aseb,
            paths: PathType::Aseb,
            starting_piece_count: ASEB_PIECE_COUNT,
            flags: RuleFlags::default(),
        }
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_standard() {
        assert_eq!(GameSettings::default(), GameSettings::standard());
        assert_ne!(GameSettings::standard(), GameSettings::aseb());
    }

    #[test]
    fn test_json_round_trip() {
        let settings = GameSettings::aseb();
        let json = serde_json::to_string(&settings).unwrap();
        let parsed: GameSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_flags_default_when_missing() {
        let json = r#"{"board":"standard","paths":"bell","starting_piece_count":3}"#;
        let parsed: GameSettings = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.starting_piece_count, 3);
        assert_eq!(parsed.flags, RuleFlags::default());
    }
}
