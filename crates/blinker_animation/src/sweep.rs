//! Ping-pong sweep
//!
//! A [`Sweep`] drives a phase value from 0.0 to 1.0 and back again, forever.
//! Each half takes the configured duration and is shaped by an [`Easing`].
//! Time is fed in explicitly through [`Sweep::tick`], so the sweep has no
//! notion of wall-clock time and is fully deterministic.

use crate::easing::Easing;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Which half of the sweep is playing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SweepDirection {
    /// Phase rising from 0.0 toward 1.0
    #[default]
    Forward,
    /// Phase falling from 1.0 toward 0.0
    Reverse,
}

impl SweepDirection {
    pub fn flipped(self) -> Self {
        match self {
            SweepDirection::Forward => SweepDirection::Reverse,
            SweepDirection::Reverse => SweepDirection::Forward,
        }
    }
}

fn millis(duration: Duration) -> f32 {
    duration.as_nanos() as f32 / 1_000_000.0
}

/// An infinitely repeating, eased 0 -> 1 -> 0 sweep
#[derive(Clone, Copy, Debug)]
pub struct Sweep {
    /// Length of one half (0 -> 1 or 1 -> 0) in milliseconds
    half_ms: f32,
    easing: Easing,
    /// Time spent in the current half, always below `half_ms`
    elapsed_ms: f32,
    direction: SweepDirection,
}

impl Sweep {
    /// Create a sweep at phase 0.0, heading forward
    ///
    /// `half` is clamped to at least one millisecond.
    pub fn new(half: Duration, easing: Easing) -> Self {
        Self {
            half_ms: millis(half).max(1.0),
            easing,
            elapsed_ms: 0.0,
            direction: SweepDirection::Forward,
        }
    }

    /// Duration of one half of the sweep
    pub fn half_duration(&self) -> Duration {
        Duration::from_secs_f32(self.half_ms / 1000.0)
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    pub fn direction(&self) -> SweepDirection {
        self.direction
    }

    /// Linear progress through the current half (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        self.elapsed_ms / self.half_ms
    }

    /// Eased phase in `[0, 1]`
    ///
    /// The reverse half replays the forward curve backwards, so the phase is
    /// continuous at every turnaround.
    pub fn phase(&self) -> f32 {
        match self.direction {
            SweepDirection::Forward => self.easing.apply(self.progress()),
            SweepDirection::Reverse => self.easing.apply(1.0 - self.progress()),
        }
    }

    /// Advance the sweep by `dt`
    ///
    /// Large steps may cross several turnarounds; only the parity of the
    /// number of halves crossed affects the resulting direction.
    pub fn tick(&mut self, dt: Duration) {
        let total = self.elapsed_ms + millis(dt);
        if total < self.half_ms {
            self.elapsed_ms = total;
            return;
        }

        let halves = (total / self.half_ms).floor();
        self.elapsed_ms = (total - halves * self.half_ms).clamp(0.0, self.half_ms);
        if self.elapsed_ms >= self.half_ms {
            self.elapsed_ms = 0.0;
        }
        if (halves as u64) % 2 == 1 {
            self.direction = self.direction.flipped();
        }
    }
}
