//! Deterministic random number generation for tile values.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical boards
//! - **Seedable**: Tests and replays pin the seed, live play draws one
//! - **Serializable**: O(1) state capture and restore
//!
//! ```
//! use fruitbox::core::{GameRng, ValueRange};
//!
//! let mut rng = GameRng::new(42);
//! let mut again = GameRng::new(42);
//!
//! let range = ValueRange::new(1, 9);
//! assert_eq!(rng.gen_value(range), again.gen_value(range));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::config::ValueRange;

/// Deterministic RNG backing board generation and tile replacement.
///
/// Uses ChaCha8 for speed while keeping a reproducible stream per seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG from a freshly drawn seed.
    ///
    /// The seed is still recorded, so a game started this way can be
    /// reproduced by passing `seed()` back to `new`.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw a tile value uniformly from an inclusive range.
    ///
    /// An empty range yields its lower bound rather than panicking;
    /// configuration validation rejects empty ranges before play.
    pub fn gen_value(&mut self, range: ValueRange) -> u8 {
        if range.is_empty() {
            return range.min();
        }
        self.inner.gen_range(range.min()..=range.max())
    }

    /// Get the current state for checkpointing.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state.
///
/// Uses the ChaCha8 word position, so capture is O(1) regardless of how
/// many values have been drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
