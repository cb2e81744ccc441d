//! Configuration for FlexID generator

mod builder;

use std::error::Error;
use std::fmt;

pub use builder::FlexIdConfigBuilder;
use builder::{
    DEFAULT_CUSTOM_EPOCH, DEFAULT_ENTROPY_BITS, DEFAULT_MACHINE_ID_BITS, DEFAULT_RANDOM_BITS,
    DEFAULT_SEQUENCE_BITS, DEFAULT_SPIN_ENABLED, DEFAULT_SPIN_LOOPS, DEFAULT_SPIN_YIELD_EVERY,
    DEFAULT_TIMESTAMP_BITS,
};

use crate::codec::Base;

/// Maximum total width of an identifier in bits
pub const MAX_TOTAL_BITS: u8 = 128;

/// Errors related to `FlexIdConfig` builder validation
#[derive(Debug, Clone, PartialEq)]
pub enum FlexIdConfigError {
    /// Provided bits for one field are out of its supported range
    InvalidFieldBits {
        field: &'static str,
        bits: u8,
        min: u8,
        max: u8,
    },
    /// The five field widths sum to more than 128 bits
    WidthOverflow { total: u16 },
}

impl fmt::Display for FlexIdConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlexIdConfigError::InvalidFieldBits { field, bits, min, max } => {
                write!(f, "{} bits {} must be between {} and {}", field, bits, min, max)
            }
            FlexIdConfigError::WidthOverflow { total } => {
                write!(f, "Total field width {} exceeds {} bits", total, MAX_TOTAL_BITS)
            }
        }
    }
}

impl Error for FlexIdConfigError {}

/// Configuration for FlexID generator
///
/// Field widths and behavior flags are fixed once built; shifts and masks
/// are precomputed so the hot packing path does no arithmetic on widths.
///
/// The width configuration is not embedded in generated identifiers. A
/// decoder configured with different widths than the encoder silently
/// misinterprets an otherwise valid identifier; matching configurations
/// are a caller responsibility.
#[derive(Debug, Clone, Copy)]
pub struct FlexIdConfig {
    timestamp_bits: u8,
    machine_id_bits: u8,
    entropy_bits: u8,
    random_bits: u8,
    sequence_bits: u8,
    custom_epoch: u64,
    use_crypto: bool,
    mask_timestamp: bool,
    use_wall_clock: bool,
    emit_events: bool,
    text_base: Base,
    spin_enabled: bool,
    spin_loops: u32,
    spin_yield_every: u32,

    // Precomputed layout
    timestamp_shift: u8,
    machine_id_shift: u8,
    entropy_shift: u8,
    random_shift: u8,
    timestamp_mask: u64,
    machine_id_mask: u64,
    entropy_mask: u64,
    random_mask: u64,
    sequence_mask: u64,
}

impl FlexIdConfig {
    /// Calculate mask for given number of bits (0-64)
    #[inline]
    pub(crate) const fn calculate_mask(bits: u8) -> u64 {
        if bits == 0 {
            0
        } else {
            (((1u128) << bits) - 1) as u64
        }
    }

    /// Create new FlexIdConfig from validated field widths
    fn new(
        timestamp_bits: u8,
        machine_id_bits: u8,
        entropy_bits: u8,
        random_bits: u8,
        sequence_bits: u8,
        custom_epoch: u64,
    ) -> Self {
        let random_shift = sequence_bits;
        let entropy_shift = random_shift + random_bits;
        let machine_id_shift = entropy_shift + entropy_bits;
        let timestamp_shift = machine_id_shift + machine_id_bits;

        Self {
            timestamp_bits,
            machine_id_bits,
            entropy_bits,
            random_bits,
            sequence_bits,
            custom_epoch,
            use_crypto: false,
            mask_timestamp: false,
            use_wall_clock: true,
            emit_events: false,
            text_base: Base::Base62,
            spin_enabled: DEFAULT_SPIN_ENABLED,
            spin_loops: DEFAULT_SPIN_LOOPS,
            spin_yield_every: DEFAULT_SPIN_YIELD_EVERY,
            timestamp_shift,
            machine_id_shift,
            entropy_shift,
            random_shift,
            timestamp_mask: Self::calculate_mask(timestamp_bits),
            machine_id_mask: Self::calculate_mask(machine_id_bits),
            entropy_mask: Self::calculate_mask(entropy_bits),
            random_mask: Self::calculate_mask(random_bits),
            sequence_mask: Self::calculate_mask(sequence_bits),
        }
    }

    /// Create config from builder
    pub(crate) fn from_builder(b: FlexIdConfigBuilder) -> Result<Self, FlexIdConfigError> {
        let total = b.timestamp_bits as u16
            + b.machine_id_bits as u16
            + b.entropy_bits as u16
            + b.random_bits as u16
            + b.sequence_bits as u16;
        if total > MAX_TOTAL_BITS as u16 {
            return Err(FlexIdConfigError::WidthOverflow { total });
        }

        let mut cfg = Self::new(
            b.timestamp_bits,
            b.machine_id_bits,
            b.entropy_bits,
            b.random_bits,
            b.sequence_bits,
            b.custom_epoch,
        );
        cfg.use_crypto = b.use_crypto;
        cfg.mask_timestamp = b.mask_timestamp;
        cfg.use_wall_clock = b.use_wall_clock;
        cfg.emit_events = b.emit_events;
        cfg.text_base = b.text_base;
        cfg.spin_enabled = b.spin_enabled;
        cfg.spin_loops = b.spin_loops;
        cfg.spin_yield_every = b.spin_yield_every;
        Ok(cfg)
    }

    /// Create a new configuration builder
    pub fn builder() -> FlexIdConfigBuilder {
        FlexIdConfigBuilder::new()
    }

    #[inline(always)]
    pub const fn epoch(&self) -> u64 {
        self.custom_epoch
    }

    #[inline(always)]
    pub const fn timestamp_bits(&self) -> u8 {
        self.timestamp_bits
    }

    #[inline(always)]
    pub const fn machine_id_bits(&self) -> u8 {
        self.machine_id_bits
    }

    #[inline(always)]
    pub const fn entropy_bits(&self) -> u8 {
        self.entropy_bits
    }

    #[inline(always)]
    pub const fn random_bits(&self) -> u8 {
        self.random_bits
    }

    #[inline(always)]
    pub const fn sequence_bits(&self) -> u8 {
        self.sequence_bits
    }

    /// Total identifier width in bits
    #[inline(always)]
    pub const fn total_bits(&self) -> u8 {
        self.timestamp_bits
            + self.machine_id_bits
            + self.entropy_bits
            + self.random_bits
            + self.sequence_bits
    }

    #[inline(always)]
    pub const fn max_timestamp(&self) -> u64 {
        self.timestamp_mask
    }

    #[inline(always)]
    pub const fn max_machine_id(&self) -> u64 {
        self.machine_id_mask
    }

    #[inline(always)]
    pub const fn max_sequence(&self) -> u64 {
        self.sequence_mask
    }

    #[inline(always)]
    pub const fn use_crypto(&self) -> bool {
        self.use_crypto
    }

    #[inline(always)]
    pub const fn mask_timestamp(&self) -> bool {
        self.mask_timestamp
    }

    #[inline(always)]
    pub const fn use_wall_clock(&self) -> bool {
        self.use_wall_clock
    }

    #[inline(always)]
    pub const fn emit_events(&self) -> bool {
        self.emit_events
    }

    #[inline(always)]
    pub const fn text_base(&self) -> Base {
        self.text_base
    }

    #[inline(always)]
    pub const fn spin_enabled(&self) -> bool {
        self.spin_enabled
    }

    #[inline(always)]
    pub const fn spin_loops(&self) -> u32 {
        self.spin_loops
    }

    #[inline(always)]
    pub const fn spin_yield_every(&self) -> u32 {
        self.spin_yield_every
    }

    #[inline(always)]
    pub(crate) const fn timestamp_shift(&self) -> u8 {
        self.timestamp_shift
    }

    #[inline(always)]
    pub(crate) const fn machine_id_shift(&self) -> u8 {
        self.machine_id_shift
    }

    #[inline(always)]
    pub(crate) const fn entropy_shift(&self) -> u8 {
        self.entropy_shift
    }

    #[inline(always)]
    pub(crate) const fn random_shift(&self) -> u8 {
        self.random_shift
    }

    #[inline(always)]
    pub(crate) const fn timestamp_mask(&self) -> u64 {
        self.timestamp_mask
    }

    #[inline(always)]
    pub(crate) const fn machine_id_mask(&self) -> u64 {
        self.machine_id_mask
    }

    #[inline(always)]
    pub(crate) const fn entropy_mask(&self) -> u64 {
        self.entropy_mask
    }

    #[inline(always)]
    pub(crate) const fn random_mask(&self) -> u64 {
        self.random_mask
    }

    #[inline(always)]
    pub(crate) const fn sequence_mask(&self) -> u64 {
        self.sequence_mask
    }
}

impl Default for FlexIdConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_TIMESTAMP_BITS,
            DEFAULT_MACHINE_ID_BITS,
            DEFAULT_ENTROPY_BITS,
            DEFAULT_RANDOM_BITS,
            DEFAULT_SEQUENCE_BITS,
            DEFAULT_CUSTOM_EPOCH,
        )
    }
}
