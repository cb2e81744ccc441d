//! Random sources for the entropy and random fields
//!
//! Two variants per the `use_crypto` option: a fast non-cryptographic
//! `SmallRng` and a cryptographically secure `StdRng`, both seeded from the
//! operating system.

use rand::rngs::{SmallRng, StdRng};
use rand::{RngCore, SeedableRng};

/// Random-byte source backing the entropy and random fields
#[derive(Debug)]
pub(crate) enum RandomSource {
    /// Fast, non-cryptographic generator
    Fast(SmallRng),
    /// Cryptographically secure generator
    Crypto(StdRng),
}

impl RandomSource {
    pub(crate) fn new(use_crypto: bool) -> Self {
        if use_crypto {
            Self::Crypto(StdRng::from_os_rng())
        } else {
            Self::Fast(SmallRng::from_os_rng())
        }
    }

    /// Draw a fresh value masked to the given field width (0-63 bits)
    #[inline]
    pub(crate) fn next_bits(&mut self, bits: u8) -> u64 {
        if bits == 0 {
            return 0;
        }
        let raw = match self {
            Self::Fast(rng) => rng.next_u64(),
            Self::Crypto(rng) => rng.next_u64(),
        };
        raw & ((1u64 << bits) - 1)
    }
}
