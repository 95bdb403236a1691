//! Plays one game by always taking the engine's hint, and logs the result.
//!
//! ```text
//! autoplay --difficulty hard --seed 7 --move-secs 2 --exhaustive
//! RUST_LOG=fruitbox=debug autoplay
//! ```

use std::time::Duration;

use clap::{Parser, ValueEnum};
use fruitbox::{Difficulty, GameConfig, GameSession, MoveSearch};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Level {
    Easy,
    Medium,
    Hard,
}

impl From<Level> for Difficulty {
    fn from(level: Level) -> Self {
        match level {
            Level::Easy => Difficulty::Easy,
            Level::Medium => Difficulty::Medium,
            Level::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "autoplay", about = "Play a fruitbox game with the built-in hint")]
struct Args {
    /// Time budget preset
    #[arg(long, value_enum, default_value = "medium")]
    difficulty: Level,

    /// Board seed; drawn at random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Simulated seconds spent on each move
    #[arg(long, default_value_t = 1)]
    move_secs: u64,

    /// Refill matched tiles instead of removing them
    #[arg(long)]
    regenerate: bool,

    /// Use the complete rectangle scan for the terminal check
    #[arg(long)]
    exhaustive: bool,

    /// Debug-level logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let default = if verbose { "fruitbox=debug,autoplay=debug" } else { "fruitbox=info,autoplay=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logger(args.verbose);

    let mut config = GameConfig::for_difficulty(args.difficulty.into());
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if args.regenerate {
        config = config.regenerating();
    }
    if args.exhaustive {
        config = config.with_move_search(MoveSearch::ExhaustiveScan);
    }

    let mut session = GameSession::new(config)?;
    session.start();

    let step = Duration::from_secs(args.move_secs);
    let mut moves = 0u32;
    while session.is_active() {
        let Some(rect) = session.hint() else {
            tracing::warn!("active session without a hint");
            break;
        };
        let outcome = session.select(&rect);
        moves += 1;
        tracing::debug!(moves, score = outcome.score, remaining = session.remaining(), "played");

        session.tick(step);
    }

    match session.game_over() {
        Some(report) => {
            tracing::info!(
                moves,
                score = report.score,
                cause = %report.cause,
                rating = ?report.rating,
                time_left_secs = session.time_left().as_secs(),
                "game over"
            );
            println!("{} points in {} moves ({})", report.score, moves, report.cause);
        }
        None => println!("{} points in {} moves (unfinished)", session.score(), moves),
    }

    Ok(())
}
