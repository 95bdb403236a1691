//! Session orchestration: lifecycle, score, countdown, game-over reporting.
//!
//! ## Key Types
//!
//! - `GameSession`: The single mutation entry point for a UI
//! - `SessionPhase` / `TerminalCause`: `Idle → Active → Terminal(cause)`
//! - `RoundTimer`: Caller-driven countdown
//! - `SelectionOutcome`, `GameOver`, `SessionSnapshot`: What the UI reads back

pub mod game;
pub mod outcome;
pub mod timer;

pub use game::GameSession;
pub use outcome::{GameOver, ScoreRating, SelectionOutcome, SessionPhase, SessionSnapshot, TerminalCause};
pub use timer::RoundTimer;
