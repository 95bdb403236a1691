//! What a session reports back to its UI.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::rules::MatchResult;

/// Why a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerminalCause {
    /// The move search found no selection summing to the target.
    BoardExhausted,
    /// The countdown reached zero.
    TimeExpired,
}

impl std::fmt::Display for TerminalCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminalCause::BoardExhausted => write!(f, "board exhausted"),
            TerminalCause::TimeExpired => write!(f, "time expired"),
        }
    }
}

/// Session lifecycle: `Idle → Active → Terminal`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionPhase {
    /// No game running (menu).
    #[default]
    Idle,
    /// Accepting selections and ticks.
    Active,
    /// Finished; ignores input until restarted.
    Terminal(TerminalCause),
}

/// Coarse grading of a final score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ScoreRating {
    KeepPracticing,
    WellDone,
    Excellent,
    Master,
}

impl ScoreRating {
    /// Grade a score: below 50, below 100, below 150, and the rest.
    #[must_use]
    pub fn from_score(score: u32) -> Self {
        match score {
            0..=49 => ScoreRating::KeepPracticing,
            50..=99 => ScoreRating::WellDone,
            100..=149 => ScoreRating::Excellent,
            _ => ScoreRating::Master,
        }
    }
}

/// Result of one selection on a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionOutcome {
    /// What the selection matched. A no-match when the session isn't active.
    pub result: MatchResult,
    /// Score after the selection.
    pub score: u32,
    /// Set if this selection ended the session.
    pub terminal: Option<TerminalCause>,
}

/// Final report handed to persistence and the game-over screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOver {
    pub cause: TerminalCause,
    pub score: u32,
    /// Best score including this game.
    pub best_score: u32,
    /// True if this game beat the previous best.
    pub new_record: bool,
    pub rating: ScoreRating,
}

/// Read-only view of a session for renderers.
///
/// The board is an O(1) structural-sharing clone.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub phase: SessionPhase,
    pub score: u32,
    pub best_score: u32,
    pub time_left: Duration,
    pub remaining_tiles: usize,
    pub board: Board,
}
