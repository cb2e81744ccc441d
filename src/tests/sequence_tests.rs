use std::sync::Arc;

use super::test_utils::{assert_unique_ids, ManualClock, SteppingClock};
use crate::{FlexId, FlexIdConfig};

fn generator_with_clock(clock: Arc<ManualClock>) -> FlexId {
    FlexId::new(1)
        .unwrap()
        .with_tick_source(Box::new(clock))
}

#[test]
fn test_sequence_increments_within_tick() {
    let clock = Arc::new(ManualClock::new(100));
    let mut generator = generator_with_clock(clock.clone());

    let ids: Vec<u128> = (0..3).map(|_| generator.next_id()).collect();
    for (i, id) in ids.iter().enumerate() {
        assert_eq!(generator.extract.timestamp(*id), 100);
        assert_eq!(generator.extract.sequence(*id), i as u64);
    }
}

#[test]
fn test_sequence_resets_on_tick_change() {
    let clock = Arc::new(ManualClock::new(100));
    let mut generator = generator_with_clock(clock.clone());

    generator.next_id();
    generator.next_id();

    clock.set(101);
    let id = generator.next_id();
    assert_eq!(generator.extract.timestamp(id), 101);
    assert_eq!(generator.extract.sequence(id), 0);
}

#[test]
fn test_backward_clock_treated_as_tick_change() {
    let clock = Arc::new(ManualClock::new(100));
    let mut generator = generator_with_clock(clock.clone());

    generator.next_id();
    generator.next_id();

    // A backward jump is an ordinary tick change: sequence resets, no error
    clock.set(99);
    let id = generator.next_id();
    assert_eq!(generator.extract.timestamp(id), 99);
    assert_eq!(generator.extract.sequence(id), 0);
}

#[test]
fn test_exhaustion_waits_for_next_tick() {
    // 4 sequence bits: 16 identifiers per tick before the wait kicks in
    let config = FlexIdConfig::builder().sequence_bits(4).unwrap().build().unwrap();
    let clock = Arc::new(SteppingClock::new(100, 50));
    let mut generator = FlexId::with_config(1, config)
        .unwrap()
        .with_tick_source(Box::new(clock.clone()));

    let ids = generator.next_ids(17).unwrap();
    assert_unique_ids(&ids, 17);

    // The 17th identifier exhausted tick 100 and had to wait it out
    assert!(clock.steps() >= 1, "No tick-wait cycle was triggered");
    let last = *ids.last().unwrap();
    assert!(generator.extract.timestamp(last) > 100);
    assert_eq!(generator.extract.sequence(last), 0);
}

#[test]
fn test_exhaustion_across_multiple_ticks() {
    let config = FlexIdConfig::builder().sequence_bits(4).unwrap().build().unwrap();
    let clock = Arc::new(SteppingClock::new(100, 50));
    let mut generator = FlexId::with_config(1, config)
        .unwrap()
        .with_tick_source(Box::new(clock.clone()));

    let ids = generator.next_ids(40).unwrap();
    assert_unique_ids(&ids, 40);

    let max_sequence: u64 = ids.iter().map(|&id| generator.extract.sequence(id)).max().unwrap();
    assert_eq!(max_sequence, 15, "Sequence space was never fully used");

    let ticks: std::collections::HashSet<u64> =
        ids.iter().map(|&id| generator.extract.timestamp(id)).collect();
    assert!(ticks.len() >= 3, "Expected at least 3 distinct ticks, got {}", ticks.len());

    // Every tick boundary restarts the sequence at zero
    for pair in ids.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if generator.extract.timestamp(b) != generator.extract.timestamp(a) {
            assert_eq!(generator.extract.sequence(b), 0);
        } else {
            assert_eq!(
                generator.extract.sequence(b),
                generator.extract.sequence(a) + 1
            );
        }
    }
}

#[test]
fn test_batch_order_is_call_order() {
    let clock = Arc::new(ManualClock::new(500));
    let mut generator = generator_with_clock(clock);

    let ids = generator.next_ids(10).unwrap();
    let sequences: Vec<u64> = ids.iter().map(|&id| generator.extract.sequence(id)).collect();
    assert_eq!(sequences, (0..10).collect::<Vec<u64>>());
}
