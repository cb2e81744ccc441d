//! Tick sources for FlexID generation
//!
//! A tick is one discrete clock unit (milliseconds for both built-in
//! clocks). Generators read ticks through the `TickSource` trait so tests
//! can substitute a controllable clock.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;

/// A clock returning an unsigned tick count since the configured epoch
pub trait TickSource: Send + Sync + fmt::Debug {
    /// Current tick count. Must never fail; implementations saturate at
    /// zero if the epoch lies in the future.
    fn tick(&self) -> u64;
}

impl<T: TickSource + ?Sized> TickSource for Arc<T> {
    fn tick(&self) -> u64 {
        (**self).tick()
    }
}

/// Wall-clock milliseconds since a custom epoch
///
/// Subject to system clock adjustments; a backward adjustment shows up as a
/// backward tick, which the generator treats as an ordinary tick change.
#[derive(Debug, Clone, Copy)]
pub struct WallClock {
    epoch: u64,
}

impl WallClock {
    pub fn new(epoch: u64) -> Self {
        Self { epoch }
    }
}

impl TickSource for WallClock {
    #[inline]
    fn tick(&self) -> u64 {
        let now = Utc::now().timestamp_millis().max(0) as u64;
        now.saturating_sub(self.epoch)
    }
}

/// Monotonic milliseconds anchored to the wall clock at construction
///
/// Immune to wall-clock adjustments after construction: ticks only move
/// forward, at the cost of drifting from wall time across restarts.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    anchor: u64,
    started: Instant,
}

impl MonotonicClock {
    pub fn new(epoch: u64) -> Self {
        let wall = Utc::now().timestamp_millis().max(0) as u64;
        Self {
            anchor: wall.saturating_sub(epoch),
            started: Instant::now(),
        }
    }
}

impl TickSource for MonotonicClock {
    #[inline]
    fn tick(&self) -> u64 {
        self.anchor + self.started.elapsed().as_millis() as u64
    }
}
