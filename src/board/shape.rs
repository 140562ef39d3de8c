//! Board topology: which tiles exist, and which of them are rosettes.
//!
//! ## Shapes
//!
//! A [`BoardShape`] is an arbitrary, possibly non-rectangular set of tiles
//! plus the subset of those tiles that are rosettes. Shapes are immutable
//! after construction and are shared between boards through `Arc`.
//!
//! The kind of a shape ([`ShapeKind`]) only affects how it is displayed.
//! Equality and hashing consider the tiles and rosettes alone, so a custom
//! shape with the standard layout is equal to [`BoardShape::standard`].
//!
//! ## Built-in shapes
//!
//! ```text
//!  standard        aseb
//!  x: 0 1 2        x: 0 1 2
//!  y0 * . *        y0 . . .
//!  y1 . . .        y1 . . .
//!  y2 . . .        y2 . . .
//!  y3 . * .        y3 * * *
//!  y4   .          y4   .
//!  y5   .           …   (x = 1 only)
//!  y6 * . *        y7   *
//!  y7 . . .        y11  *
//! ```

use std::hash::{Hash, Hasher};

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{GameError, Result, Tile};

/// Identifier used for custom shapes that were not given a name.
pub const CUSTOM_IDENTIFIER: &str = "custom";

/// The largest x or y coordinate a tile may have. Boards address tiles
/// through `i32` indices, so anything beyond it could never be reached.
pub const MAX_COORDINATE: u32 = i32::MAX as u32;

/// The variant identity of a board shape.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// The standard board of the Royal Game of Ur.
    Standard,
    /// The board used for the game of Aseb.
    Aseb,
    /// Any other layout, with a display name.
    Custom(String),
}

impl ShapeKind {
    /// The identifier of shapes of this kind.
    #[must_use]
    pub fn identifier(&self) -> &str {
        match self {
            ShapeKind::Standard => "standard",
            ShapeKind::Aseb => "aseb",
            ShapeKind::Custom(name) => name,
        }
    }
}

/// The built-in board shapes, for use in configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoardType {
    /// The standard board of the Royal Game of Ur.
    Standard,
    /// The board used for the game of Aseb.
    Aseb,
}

impl BoardType {
    /// Create a new shape of this type.
    #[must_use]
    pub fn create(self) -> BoardShape {
        match self {
            BoardType::Standard => BoardShape::standard(),
            BoardType::Aseb => BoardShape::aseb(),
        }
    }
}

/// A set of tiles and rosettes defining the playable area of a board.
///
/// ## Invariants
///
/// - At least one tile.
/// - Every rosette is also a tile.
/// - A single-tile shape must consist of the tile `(0, 0)`.
/// - No coordinate exceeds [`MAX_COORDINATE`], and the bounding rectangle
///   holds at most `u32::MAX` tiles.
///
/// ```
/// use royal_ur::board::BoardShape;
/// use royal_ur::core::Tile;
///
/// let shape = BoardShape::new(
///     [Tile::new(0, 1), Tile::new(1, 0)],
///     [Tile::new(0, 1)],
/// ).unwrap();
///
/// assert_eq!(shape.width(), 2);
/// assert_eq!(shape.height(), 2);
/// assert_eq!(shape.area(), 2);
/// assert!(shape.is_rosette(0, 1));
/// assert!(!shape.contains(0, 0));
/// ```
#[derive(Clone, Debug)]
pub struct BoardShape {
    kind: ShapeKind,
    tiles: FxHashSet<Tile>,
    rosettes: FxHashSet<Tile>,
    width: u32,
    height: u32,
}

impl BoardShape {
    /// Create a custom shape from its tiles and rosettes.
    pub fn new(
        tiles: impl IntoIterator<Item = Tile>,
        rosettes: impl IntoIterator<Item = Tile>,
    ) -> Result<Self> {
        Self::named(CUSTOM_IDENTIFIER, tiles, rosettes)
    }

    /// Create a custom shape with a display name.
    pub fn named(
        name: impl Into<String>,
        tiles: impl IntoIterator<Item = Tile>,
        rosettes: impl IntoIterator<Item = Tile>,
    ) -> Result<Self> {
        let tiles: FxHashSet<Tile> = tiles.into_iter().collect();
        let rosettes: FxHashSet<Tile> = rosettes.into_iter().collect();

        if tiles.is_empty() {
            return Err(GameError::construction("A board shape requires at least one tile"));
        }
        if let Some(stray) = rosettes.iter().find(|rosette| !tiles.contains(rosette)) {
            return Err(GameError::construction(format!(
                "The rosette {stray} is not one of the tiles of the board shape"
            )));
        }
        if tiles.len() == 1 && !tiles.contains(&Tile::new(0, 0)) {
            return Err(GameError::construction(
                "A board shape with a single tile must place that tile at (0, 0)",
            ));
        }
        if let Some(far) = tiles.iter().find(|tile| tile.x > MAX_COORDINATE || tile.y > MAX_COORDINATE) {
            return Err(GameError::construction(format!(
                "The tile {far} lies beyond the largest coordinate {MAX_COORDINATE}"
            )));
        }

        let shape = Self::from_valid(ShapeKind::Custom(name.into()), tiles, rosettes);
        if shape.width.checked_mul(shape.height).is_none() {
            return Err(GameError::construction(format!(
                "A {}x{} board shape spans too many tiles",
                shape.width, shape.height
            )));
        }
        Ok(shape)
    }

    /// The standard 3×8 board of the Royal Game of Ur.
    #[must_use]
    pub fn standard() -> Self {
        const HOLES: [Tile; 4] = [Tile::new(0, 4), Tile::new(0, 5), Tile::new(2, 4), Tile::new(2, 5)];
        const ROSETTES: [Tile; 5] = [
            Tile::new(0, 0),
            Tile::new(2, 0),
            Tile::new(1, 3),
            Tile::new(0, 6),
            Tile::new(2, 6),
        ];

        let tiles = grid(3, 8).filter(|tile| !HOLES.contains(tile)).collect();
        Self::from_valid(ShapeKind::Standard, tiles, ROSETTES.into_iter().collect())
    }

    /// The 3×12 board used for the game of Aseb.
    #[must_use]
    pub fn aseb() -> Self {
        const ROSETTES: [Tile; 5] = [
            Tile::new(0, 3),
            Tile::new(2, 3),
            Tile::new(1, 3),
            Tile::new(1, 7),
            Tile::new(1, 11),
        ];

        let tiles = grid(3, 12).filter(|tile| tile.x == 1 || tile.y < 4).collect();
        Self::from_valid(ShapeKind::Aseb, tiles, ROSETTES.into_iter().collect())
    }

    /// Build a shape from sets that are already known to be valid.
    fn from_valid(kind: ShapeKind, tiles: FxHashSet<Tile>, rosettes: FxHashSet<Tile>) -> Self {
        let width = tiles.iter().map(|tile| tile.x + 1).max().unwrap_or(0);
        let height = tiles.iter().map(|tile| tile.y + 1).max().unwrap_or(0);
        Self { kind, tiles, rosettes, width, height }
    }

    /// The number of coordinates in the bounding rectangle of this shape.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Convert this shape into a custom shape with the same tiles and rosettes.
    ///
    /// The result is still equal to `self`; only the variant identity is lost.
    #[must_use]
    pub fn generalize(&self) -> Self {
        Self {
            kind: ShapeKind::Custom(CUSTOM_IDENTIFIER.to_string()),
            ..self.clone()
        }
    }

    /// The variant identity of this shape.
    #[must_use]
    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    /// The identifier used when displaying this shape.
    #[must_use]
    pub fn identifier(&self) -> &str {
        self.kind.identifier()
    }

    /// The number of x-coordinates spanned by this shape.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// The number of y-coordinates spanned by this shape.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The number of tiles in this shape.
    #[must_use]
    pub fn area(&self) -> usize {
        self.tiles.len()
    }

    /// Iterate over the tiles of this shape, in no particular order.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.tiles.iter().copied()
    }

    /// Iterate over the rosettes of this shape, in no particular order.
    pub fn rosettes(&self) -> impl Iterator<Item = Tile> + '_ {
        self.rosettes.iter().copied()
    }

    /// The number of rosettes in this shape.
    #[must_use]
    pub fn rosette_count(&self) -> usize {
        self.rosettes.len()
    }

    /// Check whether the tile at the 0-based indices `(x, y)` is part of this shape.
    ///
    /// Negative and oversized indices are simply not contained.
    #[must_use]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        Tile::try_from_indices(x, y).is_some_and(|tile| self.tiles.contains(&tile))
    }

    /// Check whether `tile` is part of this shape.
    #[must_use]
    pub fn contains_tile(&self, tile: Tile) -> bool {
        self.tiles.contains(&tile)
    }

    /// Check whether the tile at the 0-based indices `(x, y)` is a rosette.
    #[must_use]
    pub fn is_rosette(&self, x: i32, y: i32) -> bool {
        Tile::try_from_indices(x, y).is_some_and(|tile| self.rosettes.contains(&tile))
    }

    /// Check whether `tile` is a rosette of this shape.
    #[must_use]
    pub fn is_rosette_tile(&self, tile: Tile) -> bool {
        self.rosettes.contains(&tile)
    }

    /// All tiles, ordered by row (y), then by column (x).
    #[must_use]
    pub fn tiles_by_row(&self) -> Vec<Tile> {
        let mut tiles: Vec<Tile> = self.tiles().collect();
        tiles.sort_unstable_by_key(|tile| tile.row_key());
        tiles
    }

    /// All tiles, ordered by column (x), then by row (y).
    #[must_use]
    pub fn tiles_by_column(&self) -> Vec<Tile> {
        let mut tiles: Vec<Tile> = self.tiles().collect();
        tiles.sort_unstable_by_key(|tile| tile.column_key());
        tiles
    }

    fn rosettes_by_row(&self) -> Vec<Tile> {
        let mut rosettes: Vec<Tile> = self.rosettes().collect();
        rosettes.sort_unstable_by_key(|tile| tile.row_key());
        rosettes
    }
}

/// Every tile of a `width`×`height` rectangle, row by row.
fn grid(width: u32, height: u32) -> impl Iterator<Item = Tile> {
    (0..height).flat_map(move |y| (0..width).map(move |x| Tile::new(x, y)))
}

impl PartialEq for BoardShape {
    fn eq(&self, other: &Self) -> bool {
        self.tiles == other.tiles && self.rosettes == other.rosettes
    }
}

impl Eq for BoardShape {}

impl Hash for BoardShape {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Sets have no hash of their own; hash them in a canonical order.
        self.tiles_by_row().hash(state);
        self.rosettes_by_row().hash(state);
    }
}

impl std::fmt::Display for BoardShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} Board Shape", self.identifier())
    }
}
