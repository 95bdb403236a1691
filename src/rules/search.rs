//! Move search: does any selection on the board still hit the target?
//!
//! Search is trait-based so the terminal check can be swapped:
//! - `PairwiseBounds`: bounding box of every pair of active tiles
//! - `ExhaustiveScan`: every grid-aligned sub-rectangle
//!
//! Both return the rectangle they found, which doubles as a hint: passing
//! it to `MatchEngine::resolve_selection` produces a valid match.

use crate::board::Board;
use crate::core::{MoveSearch, SelectionRect};

/// Strategy for finding a selection whose active tiles sum to `target`.
pub trait MoveFinder {
    /// Find one matching rectangle, or `None` if the strategy sees no move.
    fn find_move(&self, board: &Board, target: u32) -> Option<SelectionRect>;

    /// True if the strategy sees at least one move.
    fn has_move(&self, board: &Board, target: u32) -> bool {
        self.find_move(board, target).is_some()
    }
}

impl MoveFinder for MoveSearch {
    fn find_move(&self, board: &Board, target: u32) -> Option<SelectionRect> {
        match self {
            MoveSearch::PairwiseBounds => PairwiseBounds.find_move(board, target),
            MoveSearch::ExhaustiveScan => ExhaustiveScan.find_move(board, target),
        }
    }
}

/// Pairwise bounding-box search.
///
/// For every unordered pair of active tiles, the box spanning their centers
/// is grown by half a cell on each side (so both tiles sit well inside it)
/// and its active sum is compared against the target. O(k²) pairs for `k`
/// active tiles, each costing one board scan.
///
/// Only boxes whose extremes are set by two tiles are tried. A selection
/// whose left, right, top and bottom extremes come from four different tiles
/// (e.g. a plus shape with cleared corners) is not found, and neither is a
/// single tile that alone equals the target.
#[derive(Clone, Copy, Debug, Default)]
pub struct PairwiseBounds;

impl MoveFinder for PairwiseBounds {
    fn find_move(&self, board: &Board, target: u32) -> Option<SelectionRect> {
        let active = board.active_tiles();
        let margin = board.cell_size() / 2.0;

        for (i, a) in active.iter().enumerate() {
            for b in &active[i + 1..] {
                let rect = SelectionRect::bounding(a.center(), b.center()).expand(margin);
                if board.sum_in(&rect) == target {
                    return Some(rect);
                }
            }
        }

        None
    }
}

/// Complete search over grid-aligned rectangles.
///
/// Any selection picks out the active tiles of some block of whole cells, so
/// scanning every block `[r0..=r1] × [c0..=c1]` is exhaustive. Block sums come
/// from 2-D prefix sums over active values, and a row of candidate blocks is
/// abandoned once its sum passes the target (values are non-negative).
#[derive(Clone, Copy, Debug, Default)]
pub struct ExhaustiveScan;

impl ExhaustiveScan {
    /// Prefix tables of active values and active counts, `(rows+1) × (cols+1)`.
    fn prefix_tables(board: &Board) -> (Vec<u32>, Vec<u32>) {
        let (rows, cols) = (board.rows(), board.cols());
        let stride = cols + 1;
        let mut sums = vec![0u32; (rows + 1) * stride];
        let mut counts = vec![0u32; (rows + 1) * stride];

        for r in 0..rows {
            for c in 0..cols {
                let (value, present) = match board.tile_at(r, c) {
                    Some(t) if t.is_active() => (u32::from(t.value()), 1),
                    _ => (0, 0),
                };
                let at = (r + 1) * stride + (c + 1);
                let up = r * stride + (c + 1);
                let left = (r + 1) * stride + c;
                let diag = r * stride + c;
                sums[at] = value + sums[up] + sums[left] - sums[diag];
                counts[at] = present + counts[up] + counts[left] - counts[diag];
            }
        }

        (sums, counts)
    }
}

impl MoveFinder for ExhaustiveScan {
    fn find_move(&self, board: &Board, target: u32) -> Option<SelectionRect> {
        let (rows, cols) = (board.rows(), board.cols());
        let stride = cols + 1;
        let (sums, counts) = Self::prefix_tables(board);
        let block = |table: &[u32], r0: usize, c0: usize, r1: usize, c1: usize| {
            table[(r1 + 1) * stride + (c1 + 1)] + table[r0 * stride + c0]
                - table[r0 * stride + (c1 + 1)]
                - table[(r1 + 1) * stride + c0]
        };
        let cell = board.cell_size();

        for r0 in 0..rows {
            for r1 in r0..rows {
                for c0 in 0..cols {
                    for c1 in c0..cols {
                        let sum = block(&sums[..], r0, c0, r1, c1);
                        if sum > target {
                            break;
                        }
                        if sum == target && block(&counts[..], r0, c0, r1, c1) > 0 {
                            return Some(SelectionRect::new(
                                c0 as f64 * cell,
                                r0 as f64 * cell,
                                (c1 - c0 + 1) as f64 * cell,
                                (r1 - r0 + 1) as f64 * cell,
                            ));
                        }
                    }
                }
            }
        }

        None
    }
}
