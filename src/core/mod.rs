//! Core engine types: geometry, RNG, configuration, errors.
//!
//! These are the building blocks every other module depends on.
//! Nothing here knows about tiles or sessions.

pub mod config;
pub mod error;
pub mod geometry;
pub mod rng;

pub use config::{Difficulty, GameConfig, MoveSearch, ValueRange, MAX_TILES};
pub use error::{ConfigError, Result};
pub use geometry::{Point, SelectionRect};
pub use rng::{GameRng, GameRngState};
