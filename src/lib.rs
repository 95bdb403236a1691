//! # fruitbox
//!
//! Game-logic engine for a sum-to-ten tile puzzle.
//!
//! The board is a grid of numbered tiles. The player drags a rectangle; if
//! the active tiles inside sum to exactly the target (10 by default) they
//! are cleared and score one point each. The game ends when no move is
//! left or the countdown runs out.
//!
//! ## Design Principles
//!
//! 1. **Engine only**: No rendering, input handling, audio or storage.
//!    A UI feeds rectangles and time in, and reads state back.
//!
//! 2. **Explicit sequencing**: Resolve the selection, mutate the board, run
//!    the terminal check, all inside one call. Nothing recomputes behind
//!    the caller's back.
//!
//! 3. **Deterministic**: Tile values come from a seeded ChaCha8 stream, so
//!    boards are reproducible in tests and replays.
//!
//! ## Modules
//!
//! - `core`: Geometry, RNG, configuration, errors
//! - `board`: Tiles and the grid that owns them
//! - `rules`: Match resolution and move search
//! - `session`: Lifecycle, score, countdown

pub mod board;
pub mod core;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, Difficulty, GameConfig, GameRng, GameRngState, MoveSearch, Point, SelectionRect,
    ValueRange,
};

pub use crate::board::{Board, Tile, TileId};

pub use crate::rules::{ExhaustiveScan, MatchEngine, MatchResult, MoveFinder, PairwiseBounds};

pub use crate::session::{
    GameOver, GameSession, RoundTimer, ScoreRating, SelectionOutcome, SessionPhase,
    SessionSnapshot, TerminalCause,
};
