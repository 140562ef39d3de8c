//! Piece placement on a shaped board.
//!
//! A [`Board`] stores at most one piece per tile of its [`BoardShape`].
//! Addressing a tile that the shape does not contain is always an error;
//! coordinates are never clamped.
//!
//! Slots are kept in an `im::Vector`, so copying a board is O(1) and the
//! copy shares storage with the original until either of them is changed.

use std::sync::Arc;

use im::Vector;

use super::piece::{piece_char, Piece};
use super::shape::BoardShape;
use crate::core::{GameError, Player, Result, Tile};

/// Placement of pieces on the tiles of a board shape.
///
/// ```
/// use royal_ur::board::{Board, BoardShape, Piece};
/// use royal_ur::core::{Player, Tile};
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Stone(Player);
///
/// impl Piece for Stone {
///     fn owner(&self) -> Player {
///         self.0
///     }
/// }
///
/// let mut board = Board::new(BoardShape::standard());
/// assert_eq!(board.set(Tile::new(1, 4), Some(Stone(Player::Light))).unwrap(), None);
/// assert_eq!(board.get(Tile::new(1, 4)).unwrap(), Some(&Stone(Player::Light)));
/// assert!(board.get(Tile::new(0, 4)).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct Board<P: Piece> {
    shape: Arc<BoardShape>,
    width: u32,
    height: u32,
    /// One slot per coordinate of the bounding rectangle, row by row.
    /// Slots outside of the shape always stay empty.
    slots: Vector<Option<P>>,
}

impl<P: Piece> Board<P> {
    /// Create an empty board with the given shape.
    pub fn new(shape: impl Into<Arc<BoardShape>>) -> Self {
        let shape = shape.into();
        let width = shape.width();
        let height = shape.height();
        let slots = std::iter::repeat(None).take(shape.slot_count()).collect();
        Self { shape, width, height, slots }
    }

    /// Create an empty board over an anonymous custom shape.
    ///
    /// Useful for building a board from another board's raw layout:
    /// `Board::from_tiles(board.shape().tiles(), board.shape().rosettes())`.
    pub fn from_tiles(
        tiles: impl IntoIterator<Item = Tile>,
        rosettes: impl IntoIterator<Item = Tile>,
    ) -> Result<Self> {
        Ok(Self::new(BoardShape::new(tiles, rosettes)?))
    }

    /// Create a copy of this board.
    ///
    /// The copy shares the shape, but changes to its pieces do not affect
    /// this board, and vice versa.
    #[must_use]
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// The shape of this board.
    #[must_use]
    pub fn shape(&self) -> &Arc<BoardShape> {
        &self.shape
    }

    /// The number of x-coordinates on this board.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// The number of y-coordinates on this board.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Check whether the tile at `(x, y)` is on this board.
    #[must_use]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.shape.contains(x, y)
    }

    /// Check whether `tile` is on this board.
    #[must_use]
    pub fn contains_tile(&self, tile: Tile) -> bool {
        self.shape.contains_tile(tile)
    }

    /// Slot index of the tile at `(x, y)`, if the shape contains it.
    fn index(&self, x: i32, y: i32) -> Result<usize> {
        if !self.shape.contains(x, y) {
            return Err(GameError::out_of_bounds(x, y));
        }
        // Contained coordinates are non-negative and within width × height.
        Ok(y as usize * self.width as usize + x as usize)
    }

    /// Get the piece on `tile`, if there is one.
    pub fn get(&self, tile: Tile) -> Result<Option<&P>> {
        self.get_at(tile.ix(), tile.iy())
    }

    /// Get the piece on the tile at the 0-based indices `(x, y)`, if there is one.
    pub fn get_at(&self, x: i32, y: i32) -> Result<Option<&P>> {
        let index = self.index(x, y)?;
        Ok(self.slots[index].as_ref())
    }

    /// Place `piece` on `tile`, or clear the tile if `piece` is `None`.
    ///
    /// Returns the piece that was previously on the tile.
    pub fn set(&mut self, tile: Tile, piece: Option<P>) -> Result<Option<P>> {
        self.set_at(tile.ix(), tile.iy(), piece)
    }

    /// Place `piece` on the tile at `(x, y)`, or clear it if `piece` is `None`.
    ///
    /// Returns the piece that was previously on the tile.
    pub fn set_at(&mut self, x: i32, y: i32, piece: Option<P>) -> Result<Option<P>> {
        let index = self.index(x, y)?;
        Ok(self.slots.set(index, piece))
    }

    /// Count the pieces on this board that belong to `owner`.
    #[must_use]
    pub fn count_pieces(&self, owner: Player) -> usize {
        self.pieces().filter(|piece| piece.owner() == owner).count()
    }

    /// Iterate over the pieces on this board in raster order
    /// (x fastest, then y). Empty tiles are skipped.
    pub fn pieces(&self) -> Pieces<'_, P> {
        Pieces { inner: self.slots.iter() }
    }

    /// Iterate over the occupied tiles of this board and their pieces,
    /// in the same order as [`Board::pieces`].
    pub fn occupied(&self) -> impl Iterator<Item = (Tile, &P)> + '_ {
        let width = self.width as usize;
        self.slots.iter().enumerate().filter_map(move |(index, slot)| {
            let tile = Tile::new((index % width) as u32, (index / width) as u32);
            slot.as_ref().map(|piece| (tile, piece))
        })
    }

    /// Write the contents of this board as text, one column of characters
    /// per x-coordinate.
    ///
    /// Columns are separated by `column_delimiter`. When `include_off_board`
    /// is set, tiles that are not part of the shape are written as spaces so
    /// that all columns have the same length.
    #[must_use]
    pub fn render(&self, column_delimiter: char, include_off_board: bool) -> String {
        let mut text = String::with_capacity((self.height as usize + 1) * self.width as usize);
        for ix in 0..self.width {
            if ix > 0 {
                text.push(column_delimiter);
            }
            for iy in 0..self.height {
                let tile = Tile::new(ix, iy);
                if self.shape.contains_tile(tile) {
                    let index = iy as usize * self.width as usize + ix as usize;
                    text.push(piece_char(self.slots[index].as_ref()));
                } else if include_off_board {
                    text.push(' ');
                }
            }
        }
        text
    }
}

impl<P: Piece> PartialEq for Board<P> {
    fn eq(&self, other: &Self) -> bool {
        // Slots outside of the shape are always empty, so comparing every
        // slot is the same as comparing every in-shape tile.
        self.shape == other.shape && self.slots == other.slots
    }
}

impl<P: Piece> std::fmt::Display for Board<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render('\n', true))
    }
}

/// Iterator over the pieces of a board. See [`Board::pieces`].
pub struct Pieces<'a, P: Piece> {
    inner: im::vector::Iter<'a, Option<P>>,
}

impl<'a, P: Piece> Iterator for Pieces<'a, P> {
    type Item = &'a P;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.by_ref().find_map(Option::as_ref)
    }
}

impl<'a, P: Piece> IntoIterator for &'a Board<P> {
    type Item = &'a P;
    type IntoIter = Pieces<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.pieces()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Stone(Player, u8);

    impl Piece for Stone {
        fn owner(&self) -> Player {
            self.0
        }
    }

    fn light(id: u8) -> Stone {
        Stone(Player::Light, id)
    }

    fn dark(id: u8) -> Stone {
        Stone(Player::Dark, id)
    }

    #[test]
    fn test_set_returns_previous() {
        let mut board = Board::new(BoardShape::standard());
        let tile = Tile::new(1, 1);

        assert_eq!(board.set(tile, Some(light(0))).unwrap(), None);
        assert_eq!(board.set(tile, Some(dark(1))).unwrap(), Some(light(0)));
        assert_eq!(board.get(tile).unwrap(), Some(&dark(1)));
        assert_eq!(board.set(tile, None).unwrap(), Some(dark(1)));
        assert_eq!(board.get(tile).unwrap(), None);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut board: Board<Stone> = Board::new(BoardShape::standard());

        for (x, y) in [(-1, 0), (0, -1), (3, 0), (0, 8), (0, 4), (2, 5)] {
            assert_eq!(board.get_at(x, y).unwrap_err(), GameError::out_of_bounds(x, y));
            assert!(board.set_at(x, y, Some(light(0))).unwrap_err().is_out_of_bounds());
        }
    }

    #[test]
    fn test_iteration_is_raster_order() {
        let mut board = Board::new(BoardShape::standard());
        board.set(Tile::new(0, 2), Some(light(2))).unwrap();
        board.set(Tile::new(2, 0), Some(light(1))).unwrap();
        board.set(Tile::new(1, 0), Some(dark(0))).unwrap();
        board.set(Tile::new(1, 7), Some(dark(3))).unwrap();

        let ids: Vec<u8> = board.pieces().map(|piece| piece.1).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);

        // Iteration can be restarted.
        assert_eq!((&board).into_iter().count(), 4);

        let tiles: Vec<Tile> = board.occupied().map(|(tile, _)| tile).collect();
        assert_eq!(tiles, vec![Tile::new(1, 0), Tile::new(2, 0), Tile::new(0, 2), Tile::new(1, 7)]);
    }

    #[test]
    fn test_count_pieces() {
        let mut board = Board::new(BoardShape::aseb());
        board.set(Tile::new(1, 11), Some(light(0))).unwrap();
        board.set(Tile::new(1, 5), Some(light(1))).unwrap();
        board.set(Tile::new(2, 3), Some(dark(0))).unwrap();

        assert_eq!(board.count_pieces(Player::Light), 2);
        assert_eq!(board.count_pieces(Player::Dark), 1);
    }

    #[test]
    fn test_copy_is_independent() {
        let mut original = Board::new(BoardShape::standard());
        original.set(Tile::new(1, 3), Some(light(0))).unwrap();

        let mut copy = original.copy();
        assert_eq!(copy, original);
        assert!(Arc::ptr_eq(copy.shape(), original.shape()));

        copy.set(Tile::new(1, 3), None).unwrap();
        copy.set(Tile::new(0, 0), Some(dark(0))).unwrap();
        assert_ne!(copy, original);
        assert_eq!(original.get(Tile::new(1, 3)).unwrap(), Some(&light(0)));
        assert_eq!(original.get(Tile::new(0, 0)).unwrap(), None);
    }

    #[test]
    fn test_equality_requires_same_shape() {
        let standard: Board<Stone> = Board::new(BoardShape::standard());
        let aseb: Board<Stone> = Board::new(BoardShape::aseb());
        let generalized: Board<Stone> = Board::new(BoardShape::standard().generalize());

        assert_ne!(standard, aseb);
        assert_eq!(standard, generalized);
    }

    #[test]
    fn test_render() {
        let mut board = Board::new(BoardShape::standard());
        board.set(Tile::new(0, 0), Some(light(0))).unwrap();
        board.set(Tile::new(2, 7), Some(dark(0))).unwrap();

        assert_eq!(board.render('|', false), "L.....|........|.....D");
        assert_eq!(board.to_string(), "L...  ..\n........\n....  .D");
    }

    #[test]
    fn test_from_tiles() {
        let board: Board<Stone> =
            Board::from_tiles([Tile::new(0, 0), Tile::new(1, 0)], [Tile::new(1, 0)]).unwrap();
        assert_eq!(board.width(), 2);
        assert_eq!(board.height(), 1);
        assert!(board.shape().is_rosette(1, 0));

        let invalid: Result<Board<Stone>> = Board::from_tiles([Tile::new(1, 1)], []);
        assert!(invalid.unwrap_err().is_construction());
    }

    #[test]
    fn test_sparse_shape_slots() {
        let board: Board<Stone> =
            Board::from_tiles([Tile::new(0, 0), Tile::new(0, 40_000)], []).unwrap();
        assert_eq!(board.slots.len(), board.shape().slot_count());
        assert_eq!(board.get_at(0, 40_000).unwrap(), None);

        let oversized: Result<Board<Stone>> =
            Board::from_tiles([Tile::new(0, 0), Tile::new(70_000, 70_000)], []);
        assert!(oversized.unwrap_err().is_construction());
    }
}
