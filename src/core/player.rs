//! Player identification.
//!
//! ## Player
//!
//! Race games on this engine are always played by exactly two sides,
//! light and dark. Light always moves first.
//!
//! ## PlayerIdentity
//!
//! Optional display information about who is sitting behind each side.
//! Identities never influence the rules.

use serde::{Deserialize, Serialize};

/// One of the two sides of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    /// The light player, who moves first.
    Light,
    /// The dark player.
    Dark,
}

impl Player {
    /// Both players, light first.
    pub const ALL: [Player; 2] = [Player::Light, Player::Dark];

    /// Get the opponent of this player.
    ///
    /// ```
    /// use royal_ur::core::Player;
    ///
    /// assert_eq!(Player::Light.other(), Player::Dark);
    /// assert_eq!(Player::Dark.other(), Player::Light);
    /// ```
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Player::Light => Player::Dark,
            Player::Dark => Player::Light,
        }
    }

    /// Human-readable name of this player.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Player::Light => "Light",
            Player::Dark => "Dark",
        }
    }

    /// Character used for this player's pieces in board text.
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Player::Light => 'L',
            Player::Dark => 'D',
        }
    }

    /// Index of this player (light = 0, dark = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::Light => 0,
            Player::Dark => 1,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Who is playing one side of a game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerIdentity {
    name: Option<String>,
}

impl PlayerIdentity {
    /// An identity with no name attached.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self { name: None }
    }

    /// An identity with a display name.
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: Some(name.into()) }
    }

    /// The display name, if there is one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Check if this identity is anonymous.
    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        self.name.is_none()
    }
}

impl std::fmt::Display for PlayerIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name.as_deref().unwrap_or("Anonymous"))
    }
}
