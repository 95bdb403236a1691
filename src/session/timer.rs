//! The round clock, advanced by the caller.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Countdown for a time-boxed session.
///
/// Time only moves when the caller pushes it in; the timer never reads a
/// clock itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundTimer {
    elapsed: Duration,
    limit: Duration,
}

impl RoundTimer {
    /// A fresh countdown with `limit` to go.
    #[must_use]
    pub fn new(limit: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            limit,
        }
    }

    /// Back to the full budget.
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    /// Time consumed so far, never past the limit.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    #[must_use]
    pub fn limit(&self) -> Duration {
        self.limit
    }

    /// Time left before expiry.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.limit.saturating_sub(self.elapsed)
    }

    /// Share of the budget still left, from 1.0 down to 0.0.
    #[must_use]
    pub fn fraction_remaining(&self) -> f64 {
        if self.limit.is_zero() {
            return 0.0;
        }
        self.remaining().as_secs_f64() / self.limit.as_secs_f64()
    }

    /// True once the whole budget is used.
    #[must_use]
    pub fn is_up(&self) -> bool {
        self.elapsed >= self.limit
    }

    /// Advance by `dt`. Returns true on the tick that runs the timer out.
    pub fn advance(&mut self, dt: Duration) -> bool {
        if self.is_up() {
            return false;
        }
        self.elapsed = self.elapsed.saturating_add(dt).min(self.limit);
        self.is_up()
    }

    /// Jump straight to zero, for clocks that only report expiry.
    pub fn expire(&mut self) {
        self.elapsed = self.limit;
    }
}
