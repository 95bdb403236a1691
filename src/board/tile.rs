//! Tile identity and state.
//!
//! ## ID Layout
//!
//! A `TileId` is the tile's index in the row-major grid it was created in:
//! `id = row * cols + col`. IDs are assigned once at generation and never
//! reused, even when the regenerating variant gives a tile a new value.
//!
//! ```
//! use fruitbox::board::TileId;
//!
//! let cols = 17;
//! let id = TileId::at(2, 3, cols);
//!
//! assert_eq!(id.raw(), 37);
//! assert_eq!(id.row(cols), 2);
//! assert_eq!(id.col(cols), 3);
//! ```

use serde::{Deserialize, Serialize};

use crate::core::Point;

/// Stable identifier for a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileId(pub u32);

impl TileId {
    /// ID of the tile in `row`, `col` of a grid with `cols` columns.
    #[must_use]
    pub const fn at(row: usize, col: usize, cols: usize) -> Self {
        Self((row * cols + col) as u32)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Index into the board's tile sequence.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[must_use]
    pub const fn row(self, cols: usize) -> usize {
        self.index() / cols
    }

    #[must_use]
    pub const fn col(self, cols: usize) -> usize {
        self.index() % cols
    }
}

impl From<u32> for TileId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// A numbered tile on the board.
///
/// The center is fixed at creation. Only the value and the cleared flag
/// change, and only the owning `Board` changes them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    id: TileId,
    center: Point,
    value: u8,
    cleared: bool,
}

impl Tile {
    pub(crate) fn new(id: TileId, center: Point, value: u8) -> Self {
        Self {
            id,
            center,
            value,
            cleared: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> TileId {
        self.id
    }

    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    #[must_use]
    pub fn value(&self) -> u8 {
        self.value
    }

    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.cleared
    }

    /// Not cleared.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.cleared
    }

    pub(crate) fn clear(&mut self) {
        self.cleared = true;
    }

    pub(crate) fn refill(&mut self, value: u8) {
        self.value = value;
        self.cleared = false;
    }
}
