//! The routes pieces take across the board.
//!
//! Each player has one path. A path starts on a tile just off the board,
//! where pieces wait to be introduced, and ends on a tile just off the
//! board, which pieces reach when they score. Every tile in between must
//! be part of the board shape.

use serde::{Deserialize, Serialize};

use crate::board::BoardShape;
use crate::core::{GameError, Player, Result, Tile};

/// The built-in path pairs, for use in configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathType {
    /// The path proposed by R.C. Bell for the standard board.
    Bell,
    /// The paths used for the game of Aseb.
    Aseb,
}

impl PathType {
    /// Create the path pair of this type.
    #[must_use]
    pub fn create(self) -> PathPair {
        match self {
            PathType::Bell => PathPair::bell(),
            PathType::Aseb => PathPair::aseb(),
        }
    }
}

/// The paths of the light and dark players.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PathPair {
    name: String,
    light: Vec<Tile>,
    dark: Vec<Tile>,
}

impl PathPair {
    /// Create a path pair from full paths, including the off-board start and end tiles.
    pub fn new(name: impl Into<String>, light: Vec<Tile>, dark: Vec<Tile>) -> Result<Self> {
        for (player, path) in [(Player::Light, &light), (Player::Dark, &dark)] {
            if path.len() < 3 {
                return Err(GameError::construction(format!(
                    "The path of {player} needs a start tile, an end tile, and at least one tile between them"
                )));
            }
        }
        Ok(Self { name: name.into(), light, dark })
    }

    /// Bell's paths for the standard board.
    #[must_use]
    pub fn bell() -> Self {
        Self::mirrored("bell", |x| {
            let mut path = vec![Tile::new(x, 4)];
            path.extend((0..4).rev().map(|y| Tile::new(x, y)));
            path.extend((0..8).map(|y| Tile::new(1, y)));
            path.extend([Tile::new(x, 7), Tile::new(x, 6), Tile::new(x, 5)]);
            path
        })
    }

    /// The paths for the Aseb board.
    #[must_use]
    pub fn aseb() -> Self {
        Self::mirrored("aseb", |x| {
            let mut path = vec![Tile::new(x, 4)];
            path.extend((0..4).rev().map(|y| Tile::new(x, y)));
            path.extend((0..12).map(|y| Tile::new(1, y)));
            path.push(Tile::new(1, 12));
            path
        })
    }

    /// Build a pair where light uses column 0 and dark uses column 2 for its private tiles.
    fn mirrored(name: &str, path: impl Fn(u32) -> Vec<Tile>) -> Self {
        Self {
            name: name.to_string(),
            light: path(0),
            dark: path(2),
        }
    }

    /// The name of this path pair.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The full path of `player`, including the off-board start and end tiles.
    #[must_use]
    pub fn get(&self, player: Player) -> &[Tile] {
        match player {
            Player::Light => &self.light,
            Player::Dark => &self.dark,
        }
    }

    /// The tile at `index` along the path of `player`.
    #[must_use]
    pub fn tile(&self, player: Player, index: usize) -> Option<Tile> {
        self.get(player).get(index).copied()
    }

    /// The off-board tile where `player`'s pieces wait to enter.
    #[must_use]
    pub fn start(&self, player: Player) -> Tile {
        self.get(player)[0]
    }

    /// The off-board tile `player`'s pieces reach when they score.
    #[must_use]
    pub fn end(&self, player: Player) -> Tile {
        let path = self.get(player);
        path[path.len() - 1]
    }

    /// Index of the end tile along `player`'s path.
    #[must_use]
    pub fn end_index(&self, player: Player) -> usize {
        self.get(player).len() - 1
    }

    /// Check that the paths fit `shape`: start and end off the board,
    /// everything in between on it.
    pub fn validate(&self, shape: &BoardShape) -> Result<()> {
        for player in Player::ALL {
            let path = self.get(player);
            let (start, end) = (self.start(player), self.end(player));
            if shape.contains_tile(start) || shape.contains_tile(end) {
                return Err(GameError::construction(format!(
                    "The {} path of {player} must start and end off the {shape}",
                    self.name
                )));
            }
            if let Some(tile) = path[1..path.len() - 1].iter().find(|&&tile| !shape.contains_tile(tile)) {
                return Err(GameError::construction(format!(
                    "The {} path of {player} leaves the {shape} at {tile}",
                    self.name
                )));
            }
        }
        Ok(())
    }
}
