//! Wait and backoff strategies for sequence exhaustion
//!
//! When the sequence space for one tick is spent, the generator waits for
//! the clock to advance: a bounded spin phase (yielding periodically), then
//! sleeps with exponential backoff. The wait has no timeout; it holds the
//! calling thread until the tick source moves past the exhausted tick.

use std::thread;
use std::time::Duration;

use crate::config::FlexIdConfig;

/// Maximum backoff duration in milliseconds
pub const MAX_BACKOFF_MS: u64 = 100;

/// Perform spin-wait loop, checking for tick advancement
///
/// Returns Some(new_tick) if the tick advanced, None if spin loops exhausted
#[inline]
pub fn spin_wait<F>(from_tick: u64, config: &FlexIdConfig, get_tick: F) -> Option<u64>
where
    F: Fn() -> u64,
{
    if !config.spin_enabled() || config.spin_loops() == 0 {
        return None;
    }

    let yield_every = config.spin_yield_every();

    for i in 0..config.spin_loops() {
        let new_tick = get_tick();
        if new_tick > from_tick {
            return Some(new_tick);
        }

        std::hint::spin_loop();

        if yield_every != 0 && i % yield_every == yield_every - 1 {
            thread::yield_now();
        }
    }

    None
}

/// Sleep with exponential backoff, returning the new tick once advanced
#[inline]
pub fn sleep_until_next_tick<F>(from_tick: u64, mut backoff_ms: u64, get_tick: F) -> u64
where
    F: Fn() -> u64,
{
    loop {
        thread::sleep(Duration::from_millis(backoff_ms));
        let new_tick = get_tick();
        if new_tick > from_tick {
            return new_tick;
        }
        backoff_ms = next_backoff(backoff_ms);
    }
}

/// Calculate next backoff duration with exponential growth capped at MAX_BACKOFF_MS
#[inline(always)]
pub const fn next_backoff(current: u64) -> u64 {
    let next = current.saturating_mul(2);
    if next > MAX_BACKOFF_MS {
        MAX_BACKOFF_MS
    } else {
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_backoff() {
        assert_eq!(next_backoff(1), 2);
        assert_eq!(next_backoff(50), 100);
        assert_eq!(next_backoff(100), 100); // Capped at MAX_BACKOFF_MS
        assert_eq!(next_backoff(200), 100); // Already over, still capped
    }

    #[test]
    fn test_spin_wait_disabled() {
        let config = FlexIdConfig::builder().enable_spin(false).build().unwrap();
        let result = spin_wait(100, &config, || 200);
        assert!(result.is_none());
    }

    #[test]
    fn test_spin_wait_immediate_advance() {
        let config = FlexIdConfig::builder()
            .enable_spin(true)
            .spin_loops(10)
            .build()
            .unwrap();
        let result = spin_wait(100, &config, || 200);
        assert_eq!(result, Some(200));
    }

    #[test]
    fn test_spin_wait_exhausts_on_frozen_tick() {
        let config = FlexIdConfig::builder()
            .enable_spin(true)
            .spin_loops(5)
            .spin_yield_every(0)
            .build()
            .unwrap();
        let result = spin_wait(100, &config, || 100);
        assert!(result.is_none());
    }
}
