//! Game rules: match resolution and move search.
//!
//! - `MatchEngine` applies the sum-to-target rule to selections
//! - `MoveFinder` strategies decide whether any move is left
//!
//! The session calls into these; neither knows about time or score.

pub mod engine;
pub mod search;

pub use engine::{MatchEngine, MatchResult};
pub use search::{ExhaustiveScan, MoveFinder, PairwiseBounds};
