//! The tile grid.
//!
//! `Board` owns every tile of a session in row-major order. It supports:
//! - Generation from a seeded RNG, or from explicit values
//! - Region queries (which active tiles lie in a rectangle)
//! - Bulk clearing and, for the regenerating variant, replacement
//!
//! Tiles live in an `im::Vector`, so cloning a board for a renderer
//! snapshot is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::config::{checked_tile_count, ValueRange};
use crate::core::error::{ConfigError, Result};
use crate::core::geometry::{Point, SelectionRect};
use crate::core::rng::GameRng;

use super::tile::{Tile, TileId};

/// A `rows × cols` grid of tiles with a fixed cell size.
///
/// ## Usage
///
/// ```
/// use fruitbox::board::Board;
/// use fruitbox::core::SelectionRect;
///
/// let board = Board::from_values(2, 2, 35.0, &[4, 6, 3, 7]).unwrap();
///
/// // The top row: centers at y = 17.5
/// let row = SelectionRect::new(0.0, 0.0, 70.0, 35.0);
/// let values: Vec<u8> = board.tiles_in(&row).iter().map(|t| t.value()).collect();
/// assert_eq!(values, vec![4, 6]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    cell_size: f64,
    tiles: Vector<Tile>,
}

impl Board {
    /// Generate a board with values drawn uniformly from `values`.
    ///
    /// Layout is deterministic; only the values come from `rng`. Dimensions
    /// and cell size are expected to have passed `GameConfig::validate`.
    pub fn generate(
        rows: usize,
        cols: usize,
        cell_size: f64,
        values: ValueRange,
        rng: &mut GameRng,
    ) -> Self {
        Self::build(rows, cols, cell_size, |_| rng.gen_value(values))
    }

    /// A board with no cells, shown while no game is running.
    #[must_use]
    pub fn empty(cell_size: f64) -> Self {
        Self::build(0, 0, cell_size, |_| 0)
    }

    /// Build a board with explicit row-major values.
    ///
    /// Fails if the grid is too large, the cell size is not a positive
    /// finite number, or `values.len() != rows * cols`.
    pub fn from_values(rows: usize, cols: usize, cell_size: f64, values: &[u8]) -> Result<Self> {
        let expected =
            checked_tile_count(rows, cols).ok_or(ConfigError::GridTooLarge { rows, cols })?;
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(ConfigError::InvalidCellSize(cell_size));
        }
        if values.len() != expected {
            return Err(ConfigError::ValueCountMismatch {
                rows,
                cols,
                expected,
                actual: values.len(),
            });
        }
        Ok(Self::build(rows, cols, cell_size, |i| values[i]))
    }

    fn build(rows: usize, cols: usize, cell_size: f64, mut value_at: impl FnMut(usize) -> u8) -> Self {
        let tiles = (0..rows * cols)
            .map(|i| {
                let center = Self::center_of(i / cols, i % cols, cell_size);
                Tile::new(TileId(i as u32), center, value_at(i))
            })
            .collect();

        Self {
            rows,
            cols,
            cell_size,
            tiles,
        }
    }

    fn center_of(row: usize, col: usize, cell_size: f64) -> Point {
        Point::new(
            col as f64 * cell_size + cell_size / 2.0,
            row as f64 * cell_size + cell_size / 2.0,
        )
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Horizontal extent of the grid.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.cols as f64 * self.cell_size
    }

    /// Vertical extent of the grid.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.rows as f64 * self.cell_size
    }

    /// Total number of tiles, cleared or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// True for a board with no cells at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Look up a tile by ID.
    #[must_use]
    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id.index())
    }

    /// Look up the tile in a grid cell.
    #[must_use]
    pub fn tile_at(&self, row: usize, col: usize) -> Option<&Tile> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.tile(TileId::at(row, col, self.cols))
    }

    /// Grid cell under a point, if it is on the board.
    #[must_use]
    pub fn cell_of(&self, p: Point) -> Option<(usize, usize)> {
        if !(p.x >= 0.0 && p.y >= 0.0) {
            return None;
        }
        let col = (p.x / self.cell_size) as usize;
        let row = (p.y / self.cell_size) as usize;
        (row < self.rows && col < self.cols).then_some((row, col))
    }

    /// Every tile in index order, cleared or not.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// All non-cleared tiles, in index order.
    #[must_use]
    pub fn active_tiles(&self) -> Vec<&Tile> {
        self.tiles.iter().filter(|t| t.is_active()).collect()
    }

    /// Number of non-cleared tiles.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_active()).count()
    }

    /// Active tiles whose centers lie in `rect`, edges inclusive.
    ///
    /// Returned in index order. A degenerate rectangle yields nothing.
    #[must_use]
    pub fn tiles_in(&self, rect: &SelectionRect) -> Vec<&Tile> {
        self.tiles
            .iter()
            .filter(|t| t.is_active() && rect.contains(t.center()))
            .collect()
    }

    /// Sum of active tile values in `rect`, same membership as `tiles_in`.
    #[must_use]
    pub fn sum_in(&self, rect: &SelectionRect) -> u32 {
        self.tiles
            .iter()
            .filter(|t| t.is_active() && rect.contains(t.center()))
            .map(|t| u32::from(t.value()))
            .sum()
    }

    /// Mark tiles cleared. Unknown IDs and already-cleared tiles are ignored.
    pub fn clear(&mut self, ids: &[TileId]) {
        for id in ids {
            if let Some(tile) = self.tiles.get_mut(id.index()) {
                tile.clear();
            }
        }
    }

    /// Give tiles a fresh random value and make them active again.
    ///
    /// Identity and position are untouched. Unknown IDs are ignored.
    pub fn replace(&mut self, ids: &[TileId], values: ValueRange, rng: &mut GameRng) {
        for id in ids {
            if let Some(tile) = self.tiles.get_mut(id.index()) {
                tile.refill(rng.gen_value(values));
            }
        }
    }
}
