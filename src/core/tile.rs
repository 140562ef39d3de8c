//! Board coordinates.
//!
//! A [`Tile`] is a 0-based `(x, y)` coordinate. Tiles are plain values:
//! two tiles are equal when their coordinates are equal. Whether a tile
//! actually exists on a board is answered by the board's shape, not by
//! the tile itself.

use serde::{Deserialize, Serialize};

/// A 0-based coordinate on a board.
///
/// ```
/// use royal_ur::core::Tile;
///
/// let tile = Tile::new(1, 3);
/// assert_eq!(tile.x, 1);
/// assert_eq!(tile.y, 3);
/// assert_eq!(tile, Tile::new(1, 3));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Tile {
    /// The x-index (column) of the tile.
    pub x: u32,
    /// The y-index (row) of the tile.
    pub y: u32,
}

impl Tile {
    /// Create a tile at the 0-based indices `(x, y)`.
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Create a tile from signed indices, if both are non-negative.
    #[must_use]
    pub fn try_from_indices(x: i32, y: i32) -> Option<Self> {
        Some(Self::new(u32::try_from(x).ok()?, u32::try_from(y).ok()?))
    }

    /// The x-index as a signed integer, for arithmetic with out-of-range indices.
    #[must_use]
    pub fn ix(self) -> i32 {
        i32::try_from(self.x).unwrap_or(i32::MAX)
    }

    /// The y-index as a signed integer.
    #[must_use]
    pub fn iy(self) -> i32 {
        i32::try_from(self.y).unwrap_or(i32::MAX)
    }

    /// Key for row-major ordering: by y, then x.
    #[must_use]
    pub const fn row_key(self) -> (u32, u32) {
        (self.y, self.x)
    }

    /// Key for column-major ordering: by x, then y.
    #[must_use]
    pub const fn column_key(self) -> (u32, u32) {
        (self.x, self.y)
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(u32, u32)> for Tile {
    fn from((x, y): (u32, u32)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_equality() {
        assert_eq!(Tile::new(0, 0), Tile::from((0, 0)));
        assert_ne!(Tile::new(0, 1), Tile::new(1, 0));
    }

    #[test]
    fn test_try_from_indices() {
        assert_eq!(Tile::try_from_indices(2, 5), Some(Tile::new(2, 5)));
        assert_eq!(Tile::try_from_indices(-1, 0), None);
        assert_eq!(Tile::try_from_indices(0, -1), None);
    }

    #[test]
    fn test_ordering_keys() {
        let a = Tile::new(2, 0);
        let b = Tile::new(0, 1);
        assert!(a.row_key() < b.row_key());
        assert!(a.column_key() > b.column_key());
    }

    #[test]
    fn test_tile_serialization() {
        let tile = Tile::new(1, 7);
        let json = serde_json::to_string(&tile).unwrap();
        let deserialized: Tile = serde_json::from_str(&json).unwrap();
        assert_eq!(tile, deserialized);
    }
}
