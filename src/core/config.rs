//! Game configuration types.
//!
//! A session is configured once, at start, by providing:
//! - Grid shape and cell size (the coordinate scale of the board)
//! - `ValueRange`: which tile values can be generated
//! - Target sum, time budget, and the pool variant
//! - `MoveSearch`: how the no-valid-move check searches the board
//!
//! `GameConfig::validate` rejects malformed values up front so that no
//! per-move logic ever sees them.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, Result};

/// Inclusive range of tile values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValueRange {
    min: u8,
    max: u8,
}

impl ValueRange {
    /// Create a new range. Bounds are not checked here; see `GameConfig::validate`.
    #[must_use]
    pub const fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub const fn min(self) -> u8 {
        self.min
    }

    #[must_use]
    pub const fn max(self) -> u8 {
        self.max
    }

    /// True if no value satisfies `min <= v <= max`.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.min > self.max
    }

    #[must_use]
    pub const fn contains(self, value: u8) -> bool {
        value >= self.min && value <= self.max
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        Self::new(1, 9)
    }
}

impl std::fmt::Display for ValueRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.min, self.max)
    }
}

/// Difficulty presets. They only differ in time budget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// All presets, easiest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Countdown for this preset.
    #[must_use]
    pub const fn time_budget(self) -> Duration {
        match self {
            Difficulty::Easy => Duration::from_secs(150),
            Difficulty::Medium => Duration::from_secs(120),
            Difficulty::Hard => Duration::from_secs(90),
        }
    }
}

/// Strategy used by the no-valid-move check (and by hints).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveSearch {
    /// Test the bounding box of every pair of active tiles.
    #[default]
    PairwiseBounds,
    /// Test every grid-aligned sub-rectangle.
    ExhaustiveScan,
}

/// Largest grid a board can hold: every tile needs a distinct `u32` ID.
pub const MAX_TILES: usize = u32::MAX as usize;

/// `rows * cols`, or `None` if it overflows or exceeds [`MAX_TILES`].
pub(crate) fn checked_tile_count(rows: usize, cols: usize) -> Option<usize> {
    rows.checked_mul(cols).filter(|&n| n <= MAX_TILES)
}

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of grid rows.
    pub rows: usize,

    /// Number of grid columns.
    pub cols: usize,

    /// Width and height of one grid cell in board coordinates.
    pub cell_size: f64,

    /// Values tiles are drawn from.
    pub value_range: ValueRange,

    /// Sum a selection must hit exactly to match.
    pub target_sum: u32,

    /// Countdown length.
    pub time_budget: Duration,

    /// Regenerating variant when true, fixed-pool when false.
    pub replenish_on_match: bool,

    /// Terminal-check strategy.
    pub move_search: MoveSearch,

    /// Board seed. `None` draws a fresh seed per session.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 17,
            cell_size: 35.0,
            value_range: ValueRange::default(),
            target_sum: 10,
            time_budget: Difficulty::default().time_budget(),
            replenish_on_match: false,
            move_search: MoveSearch::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Default configuration with the preset's time budget.
    #[must_use]
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        Self::default().with_time_budget(difficulty.time_budget())
    }

    /// Set grid dimensions.
    #[must_use]
    pub fn with_grid(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    #[must_use]
    pub fn with_cell_size(mut self, cell_size: f64) -> Self {
        self.cell_size = cell_size;
        self
    }

    #[must_use]
    pub fn with_value_range(mut self, range: ValueRange) -> Self {
        self.value_range = range;
        self
    }

    #[must_use]
    pub fn with_target_sum(mut self, target: u32) -> Self {
        self.target_sum = target;
        self
    }

    #[must_use]
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = budget;
        self
    }

    /// Switch to the regenerating variant.
    #[must_use]
    pub fn regenerating(mut self) -> Self {
        self.replenish_on_match = true;
        self
    }

    #[must_use]
    pub fn with_move_search(mut self, search: MoveSearch) -> Self {
        self.move_search = search;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Total number of tiles on the board, `None` if the grid is too large.
    #[must_use]
    pub fn tile_count(&self) -> Option<usize> {
        checked_tile_count(self.rows, self.cols)
    }

    /// Check the configuration before a session starts.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::EmptyGrid {
                rows: self.rows,
                cols: self.cols,
            });
        }

        let tiles = self.tile_count().ok_or(ConfigError::GridTooLarge {
            rows: self.rows,
            cols: self.cols,
        })?;

        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(ConfigError::InvalidCellSize(self.cell_size));
        }

        let range = self.value_range;
        if range.is_empty() || range.min() == 0 {
            return Err(ConfigError::InvalidValueRange {
                min: range.min(),
                max: range.max(),
            });
        }

        let ceiling = (tiles as u64).saturating_mul(u64::from(range.max()));
        if self.target_sum < u32::from(range.min()) || u64::from(self.target_sum) > ceiling {
            return Err(ConfigError::UnreachableTarget {
                target: self.target_sum,
                min: range.min(),
                max: range.max(),
                tiles,
            });
        }

        if self.time_budget.is_zero() {
            return Err(ConfigError::ZeroTimeBudget);
        }

        Ok(())
    }
}
