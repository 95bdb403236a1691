//! Match resolution and terminal detection.
//!
//! `MatchEngine` turns a selection rectangle into either a scored match or a
//! no-op, and decides whether the board still has a move:
//! - `evaluate`: what a selection would match, without touching the board
//! - `resolve_selection`: evaluate, then clear (or clear and refill) the match
//! - `is_terminal`: no move left, according to the configured `MoveSearch`

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{Board, TileId};
use crate::core::{GameConfig, GameRng, MoveSearch, SelectionRect, ValueRange};

use super::search::MoveFinder;

/// Outcome of resolving one selection.
///
/// A no-match carries no tiles and no score, but still reports what the
/// selection covered so a UI can show the failed sum.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Tiles cleared by this match. Empty for a no-match.
    pub ids: SmallVec<[TileId; 8]>,
    /// Sum of the active tiles the selection covered.
    pub sum: u32,
    /// Number of active tiles the selection covered.
    pub selected: usize,
}

impl MatchResult {
    /// A no-match covering `selected` tiles summing to `sum`.
    #[must_use]
    pub fn no_match(selected: usize, sum: u32) -> Self {
        Self {
            ids: SmallVec::new(),
            sum,
            selected,
        }
    }

    /// True if the selection matched.
    #[must_use]
    pub fn is_match(&self) -> bool {
        !self.ids.is_empty()
    }

    /// Matched tile IDs in index order.
    #[must_use]
    pub fn matched(&self) -> &[TileId] {
        &self.ids
    }

    /// Points earned: one per cleared tile, regardless of tile values.
    #[must_use]
    pub fn score_delta(&self) -> u32 {
        self.ids.len() as u32
    }
}

/// Applies the sum-to-target rule to a board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchEngine {
    target_sum: u32,
    /// Refill range for the regenerating variant; `None` for fixed-pool.
    replenish: Option<ValueRange>,
    search: MoveSearch,
}

impl MatchEngine {
    /// Fixed-pool engine with pairwise move search.
    #[must_use]
    pub fn new(target_sum: u32) -> Self {
        Self {
            target_sum,
            replenish: None,
            search: MoveSearch::default(),
        }
    }

    /// Engine configured from a session config.
    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            target_sum: config.target_sum,
            replenish: config.replenish_on_match.then_some(config.value_range),
            search: config.move_search,
        }
    }

    /// Refill matched tiles with values from `values` instead of leaving
    /// them cleared.
    #[must_use]
    pub fn regenerating(mut self, values: ValueRange) -> Self {
        self.replenish = Some(values);
        self
    }

    #[must_use]
    pub fn with_move_search(mut self, search: MoveSearch) -> Self {
        self.search = search;
        self
    }

    #[must_use]
    pub fn target_sum(&self) -> u32 {
        self.target_sum
    }

    #[must_use]
    pub fn is_regenerating(&self) -> bool {
        self.replenish.is_some()
    }

    #[must_use]
    pub fn move_search(&self) -> MoveSearch {
        self.search
    }

    /// What `rect` would match on `board`, without changing it.
    #[must_use]
    pub fn evaluate(&self, board: &Board, rect: &SelectionRect) -> MatchResult {
        let tiles = board.tiles_in(rect);
        let sum: u32 = tiles.iter().map(|t| u32::from(t.value())).sum();

        if tiles.is_empty() || sum != self.target_sum {
            return MatchResult::no_match(tiles.len(), sum);
        }

        MatchResult {
            ids: tiles.iter().map(|t| t.id()).collect(),
            sum,
            selected: tiles.len(),
        }
    }

    /// Resolve a selection and apply it.
    ///
    /// On a match exactly the matched tiles are cleared, then refilled from
    /// `rng` in the regenerating variant. A no-match leaves the board as is.
    pub fn resolve_selection(
        &self,
        board: &mut Board,
        rect: &SelectionRect,
        rng: &mut GameRng,
    ) -> MatchResult {
        let result = self.evaluate(board, rect);

        if result.is_match() {
            board.clear(result.matched());
            if let Some(values) = self.replenish {
                board.replace(result.matched(), values, rng);
            }
        }

        result
    }

    /// A selection that would currently match, if the search finds one.
    #[must_use]
    pub fn find_move(&self, board: &Board) -> Option<SelectionRect> {
        self.search.find_move(board, self.target_sum)
    }

    /// True when the configured search finds no move.
    #[must_use]
    pub fn is_terminal(&self, board: &Board) -> bool {
        !self.search.has_move(board, self.target_sum)
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new(10)
    }
}
