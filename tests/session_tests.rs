//! End-to-end session scenarios.
//!
//! These drive `GameSession` the way a UI would: start, feed rectangles
//! and clock ticks, and read the results back.

use std::time::Duration;

use fruitbox::board::{Board, TileId};
use fruitbox::core::{GameConfig, Point, SelectionRect};
use fruitbox::session::{GameSession, SessionPhase, TerminalCause};

const CELL: f64 = 35.0;

fn session(config: GameConfig) -> GameSession {
    GameSession::new(config.with_seed(42)).unwrap()
}

fn two_by_two() -> Board {
    Board::from_values(2, 2, CELL, &[4, 6, 3, 7]).unwrap()
}

/// Rectangle covering whole cells `[r0..=r1] × [c0..=c1]`.
fn cells(r0: usize, c0: usize, r1: usize, c1: usize) -> SelectionRect {
    SelectionRect::new(
        c0 as f64 * CELL,
        r0 as f64 * CELL,
        (c1 - c0 + 1) as f64 * CELL,
        (r1 - r0 + 1) as f64 * CELL,
    )
}

// =============================================================================
// Scenarios
// =============================================================================

/// Whole 2x2 board sums to 20 and is rejected; the top row (4, 6) matches.
#[test]
fn test_two_by_two_selection() {
    let mut game = session(GameConfig::default().with_grid(2, 2));
    game.start_on(two_by_two());

    let all = game.select(&cells(0, 0, 1, 1));
    assert!(!all.result.is_match());
    assert_eq!(all.result.sum, 20);
    assert_eq!(game.score(), 0);
    assert_eq!(game.remaining(), 4);

    let top = game.select(&cells(0, 0, 0, 1));
    assert!(top.result.is_match());
    assert_eq!(top.result.score_delta(), 2);
    assert_eq!(game.score(), 2);
}

/// A lone tile can never form a match on its own.
#[test]
fn test_single_tile_is_terminal() {
    let mut game = session(GameConfig::default().with_grid(1, 2));
    let mut board = Board::from_values(1, 2, CELL, &[5, 5]).unwrap();
    board.clear(&[TileId(1)]);

    let phase = game.start_on(board);

    assert_eq!(phase, SessionPhase::Terminal(TerminalCause::BoardExhausted));
    assert!(game.engine().is_terminal(game.board()));
}

/// Regenerating keeps matched identities alive with fresh values.
#[test]
fn test_regenerating_variant_refills() {
    let mut game = session(GameConfig::default().with_grid(2, 2).regenerating());
    game.start_on(two_by_two());

    let outcome = game.select(&cells(0, 0, 0, 1));
    assert!(outcome.result.is_match());

    for id in [TileId(0), TileId(1)] {
        let tile = game.board().tile(id).unwrap();
        assert!(tile.is_active());
        assert!((1..=9).contains(&tile.value()));
    }
    assert_eq!(game.remaining(), 4);
}

/// Fixed-pool leaves matched identities cleared for good.
#[test]
fn test_fixed_pool_variant_stays_cleared() {
    let mut game = session(GameConfig::default().with_grid(2, 2));
    game.start_on(two_by_two());

    game.select(&cells(0, 0, 0, 1));
    for _ in 0..5 {
        game.tick(Duration::from_secs(1));
    }

    for id in [TileId(0), TileId(1)] {
        assert!(game.board().tile(id).unwrap().is_cleared());
    }
    assert_eq!(game.remaining(), 2);
}

/// Running out of time ends the game even with moves on the board.
#[test]
fn test_timeout_with_moves_left() {
    let mut game = session(
        GameConfig::default()
            .with_grid(2, 2)
            .with_time_budget(Duration::from_secs(3)),
    );
    game.start_on(two_by_two());

    assert_eq!(game.tick(Duration::from_secs(1)), None);
    assert_eq!(game.tick(Duration::from_secs(1)), None);
    assert_eq!(game.tick(Duration::from_secs(1)), Some(TerminalCause::TimeExpired));

    assert_eq!(game.terminal_cause(), Some(TerminalCause::TimeExpired));
    assert_ne!(game.terminal_cause(), Some(TerminalCause::BoardExhausted));
    assert!(!game.engine().is_terminal(game.board()));
    assert_eq!(game.game_over().unwrap().cause, TerminalCause::TimeExpired);
}

/// Clearing every tile ends the game as exhausted, not timed out.
#[test]
fn test_clearing_board_is_exhaustion() {
    let mut game = session(GameConfig::default().with_grid(2, 2));
    game.start_on(two_by_two());

    game.select(&cells(0, 0, 0, 1));
    let last = game.select(&cells(1, 0, 1, 1));

    assert_eq!(last.terminal, Some(TerminalCause::BoardExhausted));
    assert_eq!(game.game_over().unwrap().cause, TerminalCause::BoardExhausted);
    assert!(game.time_left() > Duration::ZERO);
}

// =============================================================================
// Drag gestures
// =============================================================================

/// A drag from bottom-right to top-left selects the same tiles as the reverse.
#[test]
fn test_drag_direction_is_irrelevant() {
    let mut game = session(GameConfig::default().with_grid(2, 2));
    game.start_on(two_by_two());

    let rect = SelectionRect::from_drag(Point::new(68.0, 30.0), Point::new(2.0, 4.0));
    let outcome = game.select(&rect);

    assert_eq!(outcome.result.matched(), &[TileId(0), TileId(1)]);
}

/// A click without movement selects nothing.
#[test]
fn test_click_is_no_match() {
    let mut game = session(GameConfig::default().with_grid(2, 2));
    game.start_on(two_by_two());

    let here = Point::new(17.5, 17.5);
    let outcome = game.select(&SelectionRect::from_drag(here, here));

    assert!(!outcome.result.is_match());
    assert_eq!(outcome.result.selected, 0);
    assert_eq!(game.remaining(), 4);
}

// =============================================================================
// Full games
// =============================================================================

/// Playing hints to the end never lowers the score and always terminates.
#[test]
fn test_full_game_score_monotonic() {
    let mut game = session(GameConfig::default());
    game.start();

    let mut last_score = 0;
    let mut moves = 0;
    while game.is_active() && moves < 500 {
        let hint = game.hint().expect("active session has a move");
        let outcome = game.select(&hint);

        assert!(outcome.result.is_match());
        assert!(outcome.score >= last_score);
        assert_eq!(outcome.score, last_score + outcome.result.score_delta());
        last_score = outcome.score;
        moves += 1;
    }

    assert!(!game.is_active());
    assert_eq!(game.terminal_cause(), Some(TerminalCause::BoardExhausted));
    assert_eq!(game.score() as usize, 170 - game.remaining());
}

/// A regenerating game keeps the board full while scoring.
#[test]
fn test_regenerating_game_keeps_board_full() {
    let mut game = session(GameConfig::default().regenerating());
    game.start();

    for _ in 0..20 {
        let Some(hint) = game.hint() else { break };
        game.select(&hint);
        assert_eq!(game.remaining(), 170);
    }
    assert!(game.score() > 0);
}

/// Starting again after game over begins from a clean slate.
#[test]
fn test_play_again_after_game_over() {
    let mut game = session(GameConfig::default());
    game.start();
    game.expire();
    assert_eq!(game.terminal_cause(), Some(TerminalCause::TimeExpired));

    let phase = game.restart();

    assert_eq!(phase, SessionPhase::Active);
    assert_eq!(game.score(), 0);
    assert_eq!(game.remaining(), 170);
    assert_eq!(game.time_left(), Duration::from_secs(120));
}
