//! FlexIdConfig builder for constructing configuration

use super::{FlexIdConfig, FlexIdConfigError};
use crate::codec::Base;

/// Default configuration values
pub(super) const DEFAULT_TIMESTAMP_BITS: u8 = 42;
pub(super) const DEFAULT_MACHINE_ID_BITS: u8 = 12;
pub(super) const DEFAULT_ENTROPY_BITS: u8 = 5;
pub(super) const DEFAULT_RANDOM_BITS: u8 = 10;
pub(super) const DEFAULT_SEQUENCE_BITS: u8 = 12;
pub(super) const DEFAULT_CUSTOM_EPOCH: u64 = 1704067200000; // January 1, 2024 UTC
pub(super) const DEFAULT_SPIN_ENABLED: bool = true;
pub(super) const DEFAULT_SPIN_LOOPS: u32 = 64;
pub(super) const DEFAULT_SPIN_YIELD_EVERY: u32 = 16;

/// Supported range per field, (min, max) bits
pub(super) const TIMESTAMP_BITS_RANGE: (u8, u8) = (32, 64);
pub(super) const MACHINE_ID_BITS_RANGE: (u8, u8) = (0, 24);
pub(super) const ENTROPY_BITS_RANGE: (u8, u8) = (0, 16);
pub(super) const RANDOM_BITS_RANGE: (u8, u8) = (0, 32);
pub(super) const SEQUENCE_BITS_RANGE: (u8, u8) = (1, 20);

/// Builder for FlexIdConfig
#[derive(Debug)]
pub struct FlexIdConfigBuilder {
    pub(super) timestamp_bits: u8,
    pub(super) machine_id_bits: u8,
    pub(super) entropy_bits: u8,
    pub(super) random_bits: u8,
    pub(super) sequence_bits: u8,
    pub(super) custom_epoch: u64,
    pub(super) use_crypto: bool,
    pub(super) mask_timestamp: bool,
    pub(super) use_wall_clock: bool,
    pub(super) emit_events: bool,
    pub(super) text_base: Base,
    pub(super) spin_enabled: bool,
    pub(super) spin_loops: u32,
    pub(super) spin_yield_every: u32,
}

fn check_bits(
    field: &'static str,
    bits: u8,
    (min, max): (u8, u8),
) -> Result<u8, FlexIdConfigError> {
    if bits < min || bits > max {
        return Err(FlexIdConfigError::InvalidFieldBits { field, bits, min, max });
    }
    Ok(bits)
}

impl FlexIdConfigBuilder {
    /// Create a new FlexIdConfigBuilder with default values
    pub fn new() -> Self {
        Self {
            timestamp_bits: DEFAULT_TIMESTAMP_BITS,
            machine_id_bits: DEFAULT_MACHINE_ID_BITS,
            entropy_bits: DEFAULT_ENTROPY_BITS,
            random_bits: DEFAULT_RANDOM_BITS,
            sequence_bits: DEFAULT_SEQUENCE_BITS,
            custom_epoch: DEFAULT_CUSTOM_EPOCH,
            use_crypto: false,
            mask_timestamp: false,
            use_wall_clock: true,
            emit_events: false,
            text_base: Base::Base62,
            spin_enabled: DEFAULT_SPIN_ENABLED,
            spin_loops: DEFAULT_SPIN_LOOPS,
            spin_yield_every: DEFAULT_SPIN_YIELD_EVERY,
        }
    }

    /// Set the number of bits for the timestamp field (32-64)
    pub fn timestamp_bits(mut self, bits: u8) -> Result<Self, FlexIdConfigError> {
        self.timestamp_bits = check_bits("timestamp", bits, TIMESTAMP_BITS_RANGE)?;
        Ok(self)
    }

    /// Set the number of bits for the machine ID field (0-24)
    pub fn machine_id_bits(mut self, bits: u8) -> Result<Self, FlexIdConfigError> {
        self.machine_id_bits = check_bits("machine_id", bits, MACHINE_ID_BITS_RANGE)?;
        Ok(self)
    }

    /// Set the number of bits for the entropy field (0-16)
    pub fn entropy_bits(mut self, bits: u8) -> Result<Self, FlexIdConfigError> {
        self.entropy_bits = check_bits("entropy", bits, ENTROPY_BITS_RANGE)?;
        Ok(self)
    }

    /// Set the number of bits for the random field (0-32)
    pub fn random_bits(mut self, bits: u8) -> Result<Self, FlexIdConfigError> {
        self.random_bits = check_bits("random", bits, RANDOM_BITS_RANGE)?;
        Ok(self)
    }

    /// Set the number of bits for the sequence field (1-20)
    pub fn sequence_bits(mut self, bits: u8) -> Result<Self, FlexIdConfigError> {
        self.sequence_bits = check_bits("sequence", bits, SEQUENCE_BITS_RANGE)?;
        Ok(self)
    }

    /// Set a custom epoch timestamp in milliseconds
    pub const fn epoch(mut self, epoch: u64) -> Self {
        self.custom_epoch = epoch;
        self
    }

    /// Draw entropy/random fields from a cryptographically secure source
    pub const fn use_crypto(mut self, enable: bool) -> Self {
        self.use_crypto = enable;
        self
    }

    /// Replace the packed timestamp with a non-reversible digest of the tick.
    /// Masked identifiers lose timestamp extraction and expiry checking.
    pub const fn mask_timestamp(mut self, enable: bool) -> Self {
        self.mask_timestamp = enable;
        self
    }

    /// Use wall-clock time (true) or a monotonic clock anchored at
    /// construction (false) as the tick source
    pub const fn use_wall_clock(mut self, enable: bool) -> Self {
        self.use_wall_clock = enable;
        self
    }

    /// Notify a registered listener for every generated identifier
    pub const fn emit_events(mut self, enable: bool) -> Self {
        self.emit_events = enable;
        self
    }

    /// Set the numeral base used by the text convenience methods
    pub const fn text_base(mut self, base: Base) -> Self {
        self.text_base = base;
        self
    }

    /// Enable or disable micro spin before sleep on sequence exhaustion
    pub const fn enable_spin(mut self, enable: bool) -> Self {
        self.spin_enabled = enable;
        self
    }

    /// Set number of spin loops attempted before falling back to sleep
    pub const fn spin_loops(mut self, loops: u32) -> Self {
        self.spin_loops = loops;
        self
    }

    /// Set spin yield cadence. Yield every N spin iterations; 0 disables yielding
    pub const fn spin_yield_every(mut self, n: u32) -> Self {
        self.spin_yield_every = n;
        self
    }

    /// Build the final FlexIdConfig
    ///
    /// Fails with `WidthOverflow` if the five field widths sum to more than
    /// 128 bits.
    pub fn build(self) -> Result<FlexIdConfig, FlexIdConfigError> {
        FlexIdConfig::from_builder(self)
    }
}

impl Default for FlexIdConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
