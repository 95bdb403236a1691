//! Tile grid: tiles, their identities, and the board that owns them.
//!
//! ## Key Types
//!
//! - `TileId`: Stable row-major index, never reused
//! - `Tile`: Fixed center, mutable value and cleared flag
//! - `Board`: Generation, region queries, clearing and replacement

pub mod grid;
pub mod tile;

pub use grid::Board;
pub use tile::{Tile, TileId};
