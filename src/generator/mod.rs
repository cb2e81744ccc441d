//! Core FlexID generator implementation
//!
//! Split into modules for testability:
//! - `generate` - sequence/clock arbitration and ID generation
//! - `wait` - spin and backoff strategies for sequence exhaustion
//! - `inspect` - candidate validation, info, expiry
//! - `codec_methods` - text-encoding convenience methods

mod codec_methods;
mod generate;
mod inspect;
mod wait;

use std::fmt;
use std::sync::Arc;

use sha2::{Digest, Sha256};

use crate::clock::{MonotonicClock, TickSource, WallClock};
use crate::config::FlexIdConfig;
use crate::error::FlexIdError;
use crate::extractor::FlexIdExtractor;
use crate::listener::IdListener;
use crate::machine_id::{
    self, EnvReader, HardwareAddressSource, MachineIdStrategy, PnetInterfaces, StdEnv,
};
use crate::random::RandomSource;

pub use inspect::{IdCandidate, IdInfo};

/// Main FlexID generator
///
/// Holds the per-instance mutable state (last timestamp, sequence counter)
/// behind `&mut self`, so exclusive use per logical thread is enforced by
/// the borrow checker; wrap the generator in a mutex to share it.
///
/// The field-width configuration is not embedded in generated identifiers:
/// validation and decoding only make sense against a generator configured
/// with the same widths as the one that produced the identifier.
pub struct FlexId {
    // === Hot path fields ===
    last_timestamp: Option<u64>,
    sequence: u64,
    machine_prefix: u128,
    rng: RandomSource,

    // === Cold path fields ===
    pub machine_id: u64,
    pub config: FlexIdConfig,
    pub extract: FlexIdExtractor,
    clock: Box<dyn TickSource>,
    listener: Option<Arc<dyn IdListener>>,
}

impl FlexId {
    /// Create with an explicit machine ID and default configuration
    pub fn new(machine_id: u64) -> Result<Self, FlexIdError> {
        Self::with_config(machine_id, FlexIdConfig::default())
    }

    /// Create with an explicit machine ID and custom configuration
    pub fn with_config(machine_id: u64, config: FlexIdConfig) -> Result<Self, FlexIdError> {
        Self::from_strategy(MachineIdStrategy::Explicit(machine_id), config)
    }

    /// Create with a machine-ID resolution strategy, using the real
    /// environment and network-interface table for derived strategies
    pub fn from_strategy(
        strategy: MachineIdStrategy,
        config: FlexIdConfig,
    ) -> Result<Self, FlexIdError> {
        Self::from_strategy_with(strategy, config, &StdEnv, &PnetInterfaces)
    }

    /// Create with a machine-ID resolution strategy and explicit
    /// environment/interface collaborators
    ///
    /// Resolution happens once, here; the result is cached for the
    /// instance's lifetime. A resolution failure is fatal to construction.
    pub fn from_strategy_with(
        strategy: MachineIdStrategy,
        config: FlexIdConfig,
        env: &dyn EnvReader,
        interfaces: &dyn HardwareAddressSource,
    ) -> Result<Self, FlexIdError> {
        let machine_id =
            machine_id::resolve(&strategy, config.max_machine_id(), env, interfaces)?;
        Ok(Self::build(machine_id, config))
    }

    /// Replace the tick source (used by tests and embedders with their own
    /// notion of time)
    pub fn with_tick_source(mut self, clock: Box<dyn TickSource>) -> Self {
        self.clock = clock;
        self
    }

    /// Register a listener notified per generated identifier. Only consulted
    /// when the `emit_events` option is enabled.
    pub fn with_listener(mut self, listener: Arc<dyn IdListener>) -> Self {
        self.listener = Some(listener);
        self
    }

    fn build(machine_id: u64, config: FlexIdConfig) -> Self {
        let clock: Box<dyn TickSource> = if config.use_wall_clock() {
            Box::new(WallClock::new(config.epoch()))
        } else {
            Box::new(MonotonicClock::new(config.epoch()))
        };
        Self {
            last_timestamp: None,
            sequence: 0,
            machine_prefix: Self::compute_machine_prefix(machine_id, &config),
            rng: RandomSource::new(config.use_crypto()),
            machine_id,
            config,
            extract: FlexIdExtractor::new(config),
            clock,
            listener: None,
        }
    }

    #[inline(always)]
    fn compute_machine_prefix(machine_id: u64, config: &FlexIdConfig) -> u128 {
        ((machine_id & config.machine_id_mask()) as u128) << config.machine_id_shift()
    }

    /// Current tick, masked to the timestamp field width
    #[inline(always)]
    pub(crate) fn current_tick(&self) -> u64 {
        self.clock.tick() & self.config.timestamp_mask()
    }

    /// Pack one identifier from the timestamp field value, fresh
    /// entropy/random draws, and the arbitrated sequence
    #[inline(always)]
    pub(crate) fn assemble_id(
        &self,
        timestamp: u64,
        entropy: u64,
        random: u64,
        sequence: u64,
    ) -> u128 {
        (((timestamp & self.config.timestamp_mask()) as u128) << self.config.timestamp_shift())
            | self.machine_prefix
            | ((entropy as u128) << self.config.entropy_shift())
            | ((random as u128) << self.config.random_shift())
            | (sequence as u128)
    }

    /// Non-reversible timestamp field value: the top `timestamp_bits` bits
    /// of a SHA-256 digest of the true tick
    pub(crate) fn masked_tick(&self, tick: u64) -> u64 {
        let digest = Sha256::digest(tick.to_be_bytes());
        let mut head = [0u8; 8];
        head.copy_from_slice(&digest[..8]);
        let raw = u64::from_be_bytes(head);
        let bits = self.config.timestamp_bits();
        if bits == 64 {
            raw
        } else {
            raw >> (64 - bits)
        }
    }
}

impl fmt::Debug for FlexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlexId")
            .field("machine_id", &self.machine_id)
            .field("last_timestamp", &self.last_timestamp)
            .field("sequence", &self.sequence)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
