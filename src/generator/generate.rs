//! ID generation logic
//!
//! The sequence/clock arbitration state machine and the batch path.

use tracing::trace;

use super::wait::{sleep_until_next_tick, spin_wait};
use super::FlexId;
use crate::error::FlexIdError;
use crate::listener::EVENT_ID_GENERATED;

impl FlexId {
    /// Generate a new FlexID
    ///
    /// Blocks only when the sequence space for the current tick is
    /// exhausted, in which case it waits for the clock to advance.
    pub fn next_id(&mut self) -> u128 {
        let (tick, sequence) = self.arbitrate();
        self.last_timestamp = Some(tick);
        self.sequence = sequence;

        let entropy = self.rng.next_bits(self.config.entropy_bits());
        let random = self.rng.next_bits(self.config.random_bits());
        let timestamp_field = if self.config.mask_timestamp() {
            self.masked_tick(tick)
        } else {
            tick
        };

        let id = self.assemble_id(timestamp_field, entropy, random, sequence);

        if self.config.emit_events() {
            if let Some(listener) = &self.listener {
                listener.on_id(EVENT_ID_GENERATED, id);
            }
        }

        id
    }

    /// Generate a batch of identifiers in strict call order
    ///
    /// Runs the single-ID path `count` times over the same instance state;
    /// there is no parallelism within a batch.
    pub fn next_ids(&mut self, count: usize) -> Result<Vec<u128>, FlexIdError> {
        if count == 0 {
            return Err(FlexIdError::InvalidArgument(count));
        }
        Ok((0..count).map(|_| self.next_id()).collect())
    }

    /// Decide the (tick, sequence) pair for the next identifier
    ///
    /// Same tick as the previous identifier: increment the sequence, and on
    /// wrap-around wait out the tick. Any other tick, including a backward
    /// clock movement, resets the sequence to zero.
    fn arbitrate(&mut self) -> (u64, u64) {
        let tick = self.current_tick();
        match self.last_timestamp {
            Some(last) if tick == last => {
                let sequence = (self.sequence + 1) & self.config.sequence_mask();
                if sequence == 0 {
                    (self.wait_for_next_tick(last), 0)
                } else {
                    (tick, sequence)
                }
            }
            _ => (tick, 0),
        }
    }

    /// Block until the clock advances past the exhausted tick
    #[cold]
    #[inline(never)]
    fn wait_for_next_tick(&self, from_tick: u64) -> u64 {
        trace!(from_tick, "sequence exhausted, waiting for next tick");
        if let Some(new_tick) = spin_wait(from_tick, &self.config, || self.current_tick()) {
            return new_tick;
        }
        sleep_until_next_tick(from_tick, 1, || self.current_tick())
    }
}
