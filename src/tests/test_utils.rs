//! Shared test utilities for FlexID tests

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use crate::TickSource;

/// A tick source fully controlled by the test
#[derive(Debug)]
pub struct ManualClock {
    tick: AtomicU64,
}

impl ManualClock {
    pub fn new(tick: u64) -> Self {
        Self {
            tick: AtomicU64::new(tick),
        }
    }

    pub fn set(&self, tick: u64) {
        self.tick.store(tick, Ordering::SeqCst);
    }

    pub fn advance(&self, delta: u64) {
        self.tick.fetch_add(delta, Ordering::SeqCst);
    }
}

impl TickSource for ManualClock {
    fn tick(&self) -> u64 {
        self.tick.load(Ordering::SeqCst)
    }
}

/// A tick source frozen for a fixed number of reads, then stepping forward
///
/// Lets exhaustion tests drive the wait loop deterministically: the clock
/// stays frozen long enough to spend the sequence space, then advances once
/// the wait loop has re-read it `budget` times.
#[derive(Debug)]
pub struct SteppingClock {
    state: Mutex<SteppingState>,
    budget: u64,
}

#[derive(Debug)]
struct SteppingState {
    tick: u64,
    reads_left: u64,
    steps: u64,
}

impl SteppingClock {
    pub fn new(tick: u64, budget: u64) -> Self {
        Self {
            state: Mutex::new(SteppingState {
                tick,
                reads_left: budget,
                steps: 0,
            }),
            budget,
        }
    }

    /// Number of times the clock has stepped to a new tick
    pub fn steps(&self) -> u64 {
        self.state.lock().unwrap().steps
    }
}

impl TickSource for SteppingClock {
    fn tick(&self) -> u64 {
        let mut state = self.state.lock().unwrap();
        if state.reads_left == 0 {
            state.tick += 1;
            state.reads_left = self.budget;
            state.steps += 1;
        } else {
            state.reads_left -= 1;
        }
        state.tick
    }
}

/// A listener recording every event it receives
#[derive(Debug, Default)]
pub struct CapturingListener {
    events: Mutex<Vec<(String, u128)>>,
}

impl CapturingListener {
    pub fn events(&self) -> Vec<(String, u128)> {
        self.events.lock().unwrap().clone()
    }
}

impl crate::IdListener for CapturingListener {
    fn on_id(&self, event: &str, id: u128) {
        self.events.lock().unwrap().push((event.to_string(), id));
    }
}

/// Assert that all IDs in the collection are unique
pub fn assert_unique_ids(ids: &[u128], expected_count: usize) {
    let set: HashSet<_> = ids.iter().copied().collect();
    assert_eq!(
        set.len(),
        expected_count,
        "Expected {} unique IDs, but got {} (duplicates detected)",
        expected_count,
        set.len()
    );
}

/// Assert that IDs are monotonically increasing when sorted
pub fn assert_monotonic_sorted(ids: &mut [u128]) {
    ids.sort_unstable();
    for i in 1..ids.len() {
        assert!(
            ids[i] > ids[i - 1],
            "ID at position {} ({}) is not greater than previous ID ({})",
            i,
            ids[i],
            ids[i - 1]
        );
    }
}

/// Assert collection has expected unique count and is monotonically increasing
pub fn assert_unique_and_monotonic(mut ids: Vec<u128>, expected_count: usize) {
    assert_unique_ids(&ids, expected_count);
    assert_monotonic_sorted(&mut ids);
}
