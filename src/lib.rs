//! # FlexID
//!
//! A Rust implementation of a configurable-width, time-sorted distributed
//! unique identifier.
//!
//! Generate identifiers of up to 128 bits (81 by default) that are:
//! - ⚡️ Fast
//! - 📈 Time-sorted
//! - 🔄 Monotonic per instance
//! - 🎲 Collision-resistant (entropy + random anti-collision fields)
//! - 🌐 Distributed-ready
//!
//! Each identifier packs five fields, most significant first: timestamp,
//! machine ID, entropy, random, sequence. One generator instance owns its
//! sequence state exclusively (`&mut self`); distinct machine IDs across a
//! fleet are the caller's responsibility.

#![forbid(unsafe_code)]

pub mod codec;
mod clock;
mod config;
mod error;
mod extractor;
mod generator;
mod listener;
mod machine_id;
mod random;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use clock::{MonotonicClock, TickSource, WallClock};
pub use config::{FlexIdConfig, FlexIdConfigBuilder, FlexIdConfigError, MAX_TOTAL_BITS};
pub use error::FlexIdError;
pub use extractor::{FlexIdExtractor, IdParts};
pub use generator::{FlexId, IdCandidate, IdInfo};
pub use listener::{IdListener, EVENT_ID_GENERATED};
pub use machine_id::{
    EnvReader, HardwareAddressSource, MachineIdStrategy, PnetInterfaces, StdEnv,
};

// Re-export codec types at crate root
pub use codec::Base;
pub use codec::DecodeError;
pub use codec::MAX_LEN as TEXT_MAX_LEN;
pub use codec::{decode as base62_decode, encode as base62_encode};
pub use codec::{decode_in, encode_in};
