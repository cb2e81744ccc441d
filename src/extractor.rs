use crate::config::FlexIdConfig;

/// The five logical fields of an identifier, unpacked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdParts {
    pub timestamp: u64,
    pub machine_id: u64,
    pub entropy: u64,
    pub random: u64,
    pub sequence: u64,
}

/// FlexID component extractor
///
/// Unpacking is total over the u128 domain: every field is recovered by
/// right-shift and mask, so `decompose` never fails. Structural rejection
/// of out-of-width values is the facade's validation step, not this one.
#[derive(Debug, Copy, Clone)]
pub struct FlexIdExtractor {
    config: FlexIdConfig,
}

impl FlexIdExtractor {
    /// Create a new FlexID extractor with the given configuration
    pub(crate) fn new(config: FlexIdConfig) -> Self {
        Self { config }
    }

    /// Extract timestamp component from a FlexID
    #[inline(always)]
    pub fn timestamp(&self, id: u128) -> u64 {
        ((id >> self.config.timestamp_shift()) as u64) & self.config.timestamp_mask()
    }

    /// Extract machine ID component from a FlexID
    #[inline(always)]
    pub fn machine_id(&self, id: u128) -> u64 {
        ((id >> self.config.machine_id_shift()) as u64) & self.config.machine_id_mask()
    }

    /// Extract entropy component from a FlexID
    #[inline(always)]
    pub fn entropy(&self, id: u128) -> u64 {
        ((id >> self.config.entropy_shift()) as u64) & self.config.entropy_mask()
    }

    /// Extract random component from a FlexID
    #[inline(always)]
    pub fn random(&self, id: u128) -> u64 {
        ((id >> self.config.random_shift()) as u64) & self.config.random_mask()
    }

    /// Extract sequence component from a FlexID
    #[inline(always)]
    pub fn sequence(&self, id: u128) -> u64 {
        (id as u64) & self.config.sequence_mask()
    }

    /// Decompose a FlexID into its five components in a single pass
    #[inline]
    pub fn decompose(&self, id: u128) -> IdParts {
        IdParts {
            timestamp: self.timestamp(id),
            machine_id: self.machine_id(id),
            entropy: self.entropy(id),
            random: self.random(id),
            sequence: self.sequence(id),
        }
    }

    /// Compose the five components into a FlexID
    ///
    /// Masking-on-write policy: each input is masked to its field width, so
    /// an oversized value is silently truncated rather than corrupting
    /// neighboring fields.
    #[inline]
    pub fn compose(&self, parts: IdParts) -> u128 {
        (((parts.timestamp & self.config.timestamp_mask()) as u128)
            << self.config.timestamp_shift())
            | (((parts.machine_id & self.config.machine_id_mask()) as u128)
                << self.config.machine_id_shift())
            | (((parts.entropy & self.config.entropy_mask()) as u128)
                << self.config.entropy_shift())
            | (((parts.random & self.config.random_mask()) as u128)
                << self.config.random_shift())
            | ((parts.sequence & self.config.sequence_mask()) as u128)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decompose() {
        let config = FlexIdConfig::default();
        let extractor = FlexIdExtractor::new(config);

        let parts = IdParts {
            timestamp: 0x1234567,
            machine_id: 42,
            entropy: 17,
            random: 513,
            sequence: 123,
        };
        let id = extractor.compose(parts);

        assert_eq!(extractor.timestamp(id), parts.timestamp);
        assert_eq!(extractor.machine_id(id), parts.machine_id);
        assert_eq!(extractor.entropy(id), parts.entropy);
        assert_eq!(extractor.random(id), parts.random);
        assert_eq!(extractor.sequence(id), parts.sequence);

        assert_eq!(extractor.decompose(id), parts);
    }

    #[test]
    fn test_component_boundaries() {
        let config = FlexIdConfig::default();
        let extractor = FlexIdExtractor::new(config);

        let parts = IdParts {
            timestamp: config.max_timestamp(),
            machine_id: config.max_machine_id(),
            entropy: (1 << config.entropy_bits()) - 1,
            random: (1 << config.random_bits()) - 1,
            sequence: config.max_sequence(),
        };
        let id = extractor.compose(parts);

        assert_eq!(extractor.decompose(id), parts);
        // Max everything fills exactly the configured width
        assert_eq!(id, (1u128 << config.total_bits()) - 1);
    }

    #[test]
    fn test_compose_masks_oversized_inputs() {
        let config = FlexIdConfig::default();
        let extractor = FlexIdExtractor::new(config);

        // A sequence wider than 12 bits must not leak into the random field
        let id = extractor.compose(IdParts {
            timestamp: 0,
            machine_id: 0,
            entropy: 0,
            random: 0,
            sequence: (1 << 12) | 5,
        });
        assert_eq!(extractor.sequence(id), 5);
        assert_eq!(extractor.random(id), 0);
    }

    #[test]
    fn test_roundtrip_alternate_widths() {
        let config = FlexIdConfig::builder()
            .timestamp_bits(64)
            .unwrap()
            .machine_id_bits(24)
            .unwrap()
            .entropy_bits(16)
            .unwrap()
            .random_bits(4)
            .unwrap()
            .sequence_bits(20)
            .unwrap()
            .build()
            .unwrap();
        let extractor = FlexIdExtractor::new(config);

        let parts = IdParts {
            timestamp: u64::MAX,
            machine_id: 0xAB_CDEF,
            entropy: 0xBEEF,
            random: 0xF,
            sequence: 0xF_FFFF,
        };
        assert_eq!(extractor.decompose(extractor.compose(parts)), parts);
    }
}
