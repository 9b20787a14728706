//! Match clock: elapsed and remaining time, advanced by an external tick.

use super::error::ConfigurationError;
use std::time::Duration;
use tracing::{debug, instrument};

/// Remaining time at or below which the clock reports it is running low.
pub const LOW_TIME_THRESHOLD: Duration = Duration::from_secs(10);

/// Tracks elapsed time against a fixed limit.
///
/// The clock is frame-driven: it only moves when [`MatchClock::tick`] is
/// called. It stops advancing once expired or halted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchClock {
    time_limit: Duration,
    elapsed: Duration,
    halted: bool,
}

impl MatchClock {
    /// Creates a clock with the given limit.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidTimeLimit`] for a zero limit.
    pub fn new(time_limit: Duration) -> Result<Self, ConfigurationError> {
        if time_limit.is_zero() {
            return Err(ConfigurationError::InvalidTimeLimit { seconds: 0.0 });
        }
        Ok(Self {
            time_limit,
            elapsed: Duration::ZERO,
            halted: false,
        })
    }

    /// Creates a clock from a limit in seconds.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidTimeLimit`] unless `seconds` is
    /// finite and positive.
    pub fn from_secs_f64(seconds: f64) -> Result<Self, ConfigurationError> {
        if !seconds.is_finite() || seconds <= 0.0 {
            return Err(ConfigurationError::InvalidTimeLimit { seconds });
        }
        let limit = Duration::try_from_secs_f64(seconds)
            .map_err(|_| ConfigurationError::InvalidTimeLimit { seconds })?;
        Self::new(limit)
    }

    /// Advances the clock by `delta`. Ignored once expired or halted.
    #[instrument(skip(self), fields(elapsed = ?self.elapsed))]
    pub fn tick(&mut self, delta: Duration) {
        if self.halted || self.is_expired() {
            return;
        }
        self.elapsed = self.elapsed.saturating_add(delta);
        if self.is_expired() {
            debug!(elapsed = ?self.elapsed, "Clock expired");
        }
    }

    /// Freezes the clock for the rest of the match.
    pub fn halt(&mut self) {
        self.halted = true;
    }

    /// True once halted.
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// The fixed time limit.
    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }

    /// Time spent so far.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Time left, never negative.
    pub fn remaining(&self) -> Duration {
        self.time_limit.saturating_sub(self.elapsed)
    }

    /// True once `elapsed >= time_limit`.
    pub fn is_expired(&self) -> bool {
        self.elapsed >= self.time_limit
    }

    /// Share of the limit still available, in `[0, 1]`.
    pub fn remaining_fraction(&self) -> f64 {
        self.remaining().as_secs_f64() / self.time_limit.as_secs_f64()
    }

    /// True when little time is left.
    pub fn is_running_low(&self) -> bool {
        self.remaining() <= LOW_TIME_THRESHOLD
    }

    /// Remaining time formatted for display.
    pub fn formatted(&self) -> String {
        format_duration(self.remaining())
    }
}

/// Formats a duration as `"MMm SSs"`, omitting minutes when zero.
///
/// ```
/// use std::time::Duration;
/// use strictly_hanoi::format_duration;
///
/// assert_eq!(format_duration(Duration::from_secs(125)), "02m 05s");
/// assert_eq!(format_duration(Duration::from_secs(9)), "09s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let total = duration.as_secs();
    let minutes = total / 60;
    let seconds = total % 60;
    if minutes == 0 {
        format!("{seconds:02}s")
    } else {
        format!("{minutes:02}m {seconds:02}s")
    }
}
