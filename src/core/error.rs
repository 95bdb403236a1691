//! Configuration errors.
//!
//! Engine operations themselves are total. Only session setup can fail, and
//! it fails before the first move is played.

/// Errors raised while validating a game configuration or building a board.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("grid must have at least one row and one column, got {rows}x{cols}")]
    EmptyGrid { rows: usize, cols: usize },

    #[error("a {rows}x{cols} grid has more tiles than tile IDs can address")]
    GridTooLarge { rows: usize, cols: usize },

    #[error("cell size must be a positive finite number, got {0}")]
    InvalidCellSize(f64),

    #[error("tile value range {min}..={max} is empty or contains zero")]
    InvalidValueRange { min: u8, max: u8 },

    #[error("target sum {target} is unreachable with values {min}..={max} on {tiles} tiles")]
    UnreachableTarget {
        target: u32,
        min: u8,
        max: u8,
        tiles: usize,
    },

    #[error("time budget must be greater than zero")]
    ZeroTimeBudget,

    #[error("a {rows}x{cols} board needs {expected} tile values, got {actual}")]
    ValueCountMismatch {
        rows: usize,
        cols: usize,
        expected: usize,
        actual: usize,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
