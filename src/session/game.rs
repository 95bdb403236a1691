//! The game session: board, score, and countdown behind one object.
//!
//! A UI drives the session with exactly three kinds of input:
//! - lifecycle calls (`start`, `restart`, `return_to_menu`)
//! - selections (`select`)
//! - time (`tick`, or `expire` for clocks that only report zero)
//!
//! Every call finishes its work before returning: a selection is resolved,
//! the board mutated, and the terminal check run, in that order. Renderers
//! read the results through accessors or `snapshot`.

use std::time::Duration;

use tracing::{debug, info, trace};

use crate::board::Board;
use crate::core::{GameConfig, GameRng, Result, SelectionRect};
use crate::rules::{MatchEngine, MatchResult};

use super::outcome::{GameOver, ScoreRating, SelectionOutcome, SessionPhase, SessionSnapshot, TerminalCause};
use super::timer::RoundTimer;

/// One player's game, from menu through game over and back.
///
/// ## Usage
///
/// ```
/// use std::time::Duration;
/// use fruitbox::core::{GameConfig, SelectionRect};
/// use fruitbox::board::Board;
/// use fruitbox::session::{GameSession, SessionPhase};
///
/// let mut session = GameSession::new(GameConfig::default().with_grid(2, 2)).unwrap();
/// session.start_on(Board::from_values(2, 2, 35.0, &[4, 6, 3, 7]).unwrap());
///
/// let outcome = session.select(&SelectionRect::new(0.0, 0.0, 70.0, 35.0));
/// assert_eq!(outcome.result.score_delta(), 2);
/// assert_eq!(session.score(), 2);
///
/// session.tick(Duration::from_secs(1));
/// assert_eq!(session.phase(), SessionPhase::Active);
/// ```
#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    engine: MatchEngine,
    rng: GameRng,
    board: Board,
    timer: RoundTimer,
    score: u32,
    phase: SessionPhase,
    best_score: u32,
    game_over: Option<GameOver>,
}

impl GameSession {
    /// Create an idle session. Fails if the configuration is malformed.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;

        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let board = Board::empty(config.cell_size);

        Ok(Self {
            engine: MatchEngine::from_config(&config),
            timer: RoundTimer::new(config.time_budget),
            rng,
            board,
            config,
            score: 0,
            phase: SessionPhase::Idle,
            best_score: 0,
            game_over: None,
        })
    }

    /// Seed the best score, e.g. with a value the UI persisted earlier.
    #[must_use]
    pub fn with_best_score(mut self, best: u32) -> Self {
        self.best_score = best;
        self
    }

    /// Start a game on a freshly generated board.
    ///
    /// Any game in progress is discarded. Returns the resulting phase, which
    /// is already terminal if the new board has no move.
    pub fn start(&mut self) -> SessionPhase {
        let board = Board::generate(
            self.config.rows,
            self.config.cols,
            self.config.cell_size,
            self.config.value_range,
            &mut self.rng,
        );
        self.start_on(board)
    }

    /// Switch to a new configuration, then start.
    ///
    /// The current session is left untouched if the configuration is rejected.
    pub fn start_with(&mut self, config: GameConfig) -> Result<SessionPhase> {
        config.validate()?;

        if let Some(seed) = config.seed {
            self.rng = GameRng::new(seed);
        }
        self.engine = MatchEngine::from_config(&config);
        self.timer = RoundTimer::new(config.time_budget);
        self.config = config;

        Ok(self.start())
    }

    /// Start a game on a prepared board (puzzles, replays, tests).
    ///
    /// The board is used as given: its own dimensions and cell size win over
    /// the configured ones. Build it with `Board::from_values`, which rejects
    /// malformed grids.
    pub fn start_on(&mut self, board: Board) -> SessionPhase {
        self.board = board;
        self.score = 0;
        self.timer.reset();
        self.game_over = None;
        self.phase = SessionPhase::Active;

        info!(
            seed = self.rng.seed(),
            rows = self.board.rows(),
            cols = self.board.cols(),
            time_budget_secs = self.timer.limit().as_secs(),
            regenerating = self.engine.is_regenerating(),
            "session started"
        );

        if self.engine.is_terminal(&self.board) {
            self.finish(TerminalCause::BoardExhausted);
        }
        self.phase
    }

    /// Play again with the same configuration.
    pub fn restart(&mut self) -> SessionPhase {
        self.start()
    }

    /// Abandon any game and go back to idle.
    pub fn return_to_menu(&mut self) {
        self.board = Board::empty(self.config.cell_size);
        self.phase = SessionPhase::Idle;
        self.score = 0;
        self.timer.reset();
        self.game_over = None;
    }

    /// Resolve one drag selection.
    ///
    /// Ignored (no match, no state change) unless the session is active.
    /// After a match the terminal check runs against the updated board.
    pub fn select(&mut self, rect: &SelectionRect) -> SelectionOutcome {
        if self.phase != SessionPhase::Active {
            return SelectionOutcome {
                result: MatchResult::default(),
                score: self.score,
                terminal: None,
            };
        }

        let result = self.engine.resolve_selection(&mut self.board, rect, &mut self.rng);

        let mut terminal = None;
        if result.is_match() {
            self.score = self.score.saturating_add(result.score_delta());
            debug!(
                cleared = result.score_delta(),
                score = self.score,
                remaining = self.board.remaining(),
                "match"
            );

            if self.engine.is_terminal(&self.board) {
                self.finish(TerminalCause::BoardExhausted);
                terminal = Some(TerminalCause::BoardExhausted);
            }
        } else {
            trace!(sum = result.sum, selected = result.selected, "selection rejected");
        }

        SelectionOutcome {
            result,
            score: self.score,
            terminal,
        }
    }

    /// Advance the countdown. Returns `TimeExpired` on the tick that ends the game.
    pub fn tick(&mut self, dt: Duration) -> Option<TerminalCause> {
        if self.phase != SessionPhase::Active {
            return None;
        }
        if self.timer.advance(dt) {
            self.finish(TerminalCause::TimeExpired);
            return Some(TerminalCause::TimeExpired);
        }
        None
    }

    /// The external clock reached zero.
    pub fn expire(&mut self) -> Option<TerminalCause> {
        if self.phase != SessionPhase::Active {
            return None;
        }
        self.timer.expire();
        self.finish(TerminalCause::TimeExpired);
        Some(TerminalCause::TimeExpired)
    }

    /// A selection that would match right now, if the move search sees one.
    #[must_use]
    pub fn hint(&self) -> Option<SelectionRect> {
        if self.phase != SessionPhase::Active {
            return None;
        }
        self.engine.find_move(&self.board)
    }

    fn finish(&mut self, cause: TerminalCause) {
        let new_record = self.score > self.best_score;
        self.best_score = self.best_score.max(self.score);
        self.phase = SessionPhase::Terminal(cause);
        self.game_over = Some(GameOver {
            cause,
            score: self.score,
            best_score: self.best_score,
            new_record,
            rating: ScoreRating::from_score(self.score),
        });

        info!(%cause, score = self.score, new_record, "session over");
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase == SessionPhase::Active
    }

    #[must_use]
    pub fn terminal_cause(&self) -> Option<TerminalCause> {
        match self.phase {
            SessionPhase::Terminal(cause) => Some(cause),
            _ => None,
        }
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    #[must_use]
    pub fn time_left(&self) -> Duration {
        self.timer.remaining()
    }

    /// Share of the time budget left, for a progress bar.
    #[must_use]
    pub fn time_fraction(&self) -> f64 {
        self.timer.fraction_remaining()
    }

    /// Active tiles left on the board.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.board.remaining()
    }

    /// Final report, once the session is terminal.
    #[must_use]
    pub fn game_over(&self) -> Option<GameOver> {
        self.game_over
    }

    /// Cheap copy of everything a renderer shows.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase,
            score: self.score,
            best_score: self.best_score,
            time_left: self.time_left(),
            remaining_tiles: self.remaining(),
            board: self.board.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::TileId;
    use crate::core::{ConfigError, MoveSearch};

    fn small_config() -> GameConfig {
        GameConfig::default()
            .with_grid(2, 2)
            .with_time_budget(Duration::from_secs(10))
            .with_seed(42)
    }

    fn two_by_two() -> Board {
        Board::from_values(2, 2, 35.0, &[4, 6, 3, 7]).unwrap()
    }

    #[test]
    fn test_new_session_is_idle() {
        let session = GameSession::new(small_config()).unwrap();

        assert_eq!(session.phase(), SessionPhase::Idle);
        assert_eq!(session.score(), 0);
        assert!(session.board().is_empty());
        assert!(session.game_over().is_none());
    }

    #[test]
    fn test_new_rejects_bad_config() {
        let err = GameSession::new(GameConfig::default().with_grid(0, 0)).unwrap_err();
        assert_eq!(err, ConfigError::EmptyGrid { rows: 0, cols: 0 });
    }

    #[test]
    fn test_start_generates_configured_board() {
        let mut session = GameSession::new(GameConfig::default().with_seed(7)).unwrap();
        session.start();

        assert_eq!(session.board().len(), 170);
        assert_eq!(session.time_left(), Duration::from_secs(120));
        assert_eq!(session.time_fraction(), 1.0);
    }

    #[test]
    fn test_seeded_sessions_match() {
        let mut a = GameSession::new(small_config()).unwrap();
        let mut b = GameSession::new(small_config()).unwrap();
        a.start();
        b.start();
        assert_eq!(a.board(), b.board());
    }

    #[test]
    fn test_idle_session_ignores_input() {
        let mut session = GameSession::new(small_config()).unwrap();

        let outcome = session.select(&SelectionRect::new(0.0, 0.0, 70.0, 35.0));
        assert!(!outcome.result.is_match());
        assert_eq!(session.tick(Duration::from_secs(60)), None);
        assert_eq!(session.expire(), None);
        assert!(session.hint().is_none());
        assert_eq!(session.phase(), SessionPhase::Idle);
    }

    #[test]
    fn test_match_then_exhaustion() {
        let mut session = GameSession::new(small_config()).unwrap();
        session.start_on(two_by_two());

        let first = session.select(&SelectionRect::new(0.0, 0.0, 70.0, 35.0));
        assert_eq!(first.result.score_delta(), 2);
        assert_eq!(first.terminal, None);
        assert!(session.is_active());

        let second = session.select(&SelectionRect::new(0.0, 35.0, 70.0, 35.0));
        assert_eq!(second.result.score_delta(), 2);
        assert_eq!(second.terminal, Some(TerminalCause::BoardExhausted));
        assert_eq!(second.score, 4);
        assert_eq!(session.terminal_cause(), Some(TerminalCause::BoardExhausted));
        assert_eq!(session.remaining(), 0);
    }

    #[test]
    fn test_terminal_session_ignores_input() {
        let mut session = GameSession::new(small_config()).unwrap();
        session.start_on(two_by_two());
        session.expire();

        let outcome = session.select(&SelectionRect::new(0.0, 0.0, 70.0, 35.0));
        assert!(!outcome.result.is_match());
        assert_eq!(session.score(), 0);
        assert_eq!(session.board().remaining(), 4);
    }

    #[test]
    fn test_start_on_dead_board_is_terminal() {
        let mut session = GameSession::new(small_config()).unwrap();
        let phase = session.start_on(Board::from_values(2, 2, 35.0, &[9, 9, 9, 9]).unwrap());

        assert_eq!(phase, SessionPhase::Terminal(TerminalCause::BoardExhausted));
    }

    #[test]
    fn test_tick_expires_once() {
        let mut session = GameSession::new(small_config()).unwrap();
        session.start_on(two_by_two());

        assert_eq!(session.tick(Duration::from_secs(9)), None);
        assert_eq!(session.time_left(), Duration::from_secs(1));
        assert_eq!(session.tick(Duration::from_secs(1)), Some(TerminalCause::TimeExpired));
        assert_eq!(session.tick(Duration::from_secs(1)), None);
        assert_eq!(session.terminal_cause(), Some(TerminalCause::TimeExpired));
    }

    #[test]
    fn test_best_score_and_record() {
        let mut session = GameSession::new(small_config()).unwrap().with_best_score(3);

        session.start_on(two_by_two());
        session.select(&SelectionRect::new(0.0, 0.0, 70.0, 35.0));
        session.expire();

        let report = session.game_over().unwrap();
        assert_eq!(report.score, 2);
        assert_eq!(report.best_score, 3);
        assert!(!report.new_record);

        session.start_on(two_by_two());
        session.select(&SelectionRect::new(0.0, 0.0, 70.0, 35.0));
        session.select(&SelectionRect::new(0.0, 35.0, 70.0, 35.0));

        let report = session.game_over().unwrap();
        assert_eq!(report.cause, TerminalCause::BoardExhausted);
        assert_eq!(report.best_score, 4);
        assert!(report.new_record);
        assert_eq!(report.rating, ScoreRating::KeepPracticing);
        assert_eq!(session.best_score(), 4);
    }

    #[test]
    fn test_restart_resets_round() {
        let mut session = GameSession::new(small_config()).unwrap();
        session.start_on(two_by_two());
        session.select(&SelectionRect::new(0.0, 0.0, 70.0, 35.0));
        session.tick(Duration::from_secs(4));

        session.restart();

        assert_eq!(session.score(), 0);
        assert_eq!(session.time_left(), Duration::from_secs(10));
        assert_eq!(session.board().len(), 4);
        assert!(session.game_over().is_none());
    }

    #[test]
    fn test_return_to_menu() {
        let mut session = GameSession::new(small_config()).unwrap();
        session.start_on(two_by_two());
        session.select(&SelectionRect::new(0.0, 0.0, 70.0, 35.0));

        session.return_to_menu();

        assert_eq!(session.phase(), SessionPhase::Idle);
        assert_eq!(session.score(), 0);

        let snapshot = session.snapshot();
        assert_eq!(snapshot.remaining_tiles, 0);
        assert!(snapshot.board.is_empty());
        assert_eq!(snapshot.time_left, Duration::from_secs(10));
    }

    #[test]
    fn test_start_with_switches_config() {
        let mut session = GameSession::new(small_config()).unwrap();
        session.start();

        let phase = session
            .start_with(
                GameConfig::default()
                    .with_grid(3, 3)
                    .with_move_search(MoveSearch::ExhaustiveScan)
                    .with_time_budget(Duration::from_secs(30))
                    .with_seed(1),
            )
            .unwrap();

        assert_ne!(phase, SessionPhase::Idle);
        assert_eq!(session.board().len(), 9);
        assert_eq!(session.time_left(), Duration::from_secs(30));
        assert_eq!(session.engine().move_search(), MoveSearch::ExhaustiveScan);

        let err = session
            .start_with(GameConfig::default().with_time_budget(Duration::ZERO))
            .unwrap_err();
        assert_eq!(err, ConfigError::ZeroTimeBudget);
        assert_eq!(session.board().len(), 9);
    }

    #[test]
    fn test_hint_is_playable() {
        let mut session = GameSession::new(small_config()).unwrap();
        session.start_on(two_by_two());

        let hint = session.hint().unwrap();
        let outcome = session.select(&hint);

        assert!(outcome.result.is_match());
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut session = GameSession::new(small_config()).unwrap();
        session.start_on(two_by_two());

        let before = session.snapshot();
        session.select(&SelectionRect::new(0.0, 0.0, 70.0, 35.0));

        assert_eq!(before.remaining_tiles, 4);
        assert!(before.board.tile(TileId(0)).unwrap().is_active());
        assert_eq!(session.snapshot().remaining_tiles, 2);
        assert_eq!(session.snapshot().score, 2);
    }
}
