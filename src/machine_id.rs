//! Machine-ID resolution strategies
//!
//! The machine ID is resolved exactly once, at generator construction, via
//! one of four strategies. Explicit and environment-derived values are
//! rejected when out of range (a caller configuration error); derived
//! values (network hash, random draw) are folded into range via modulo.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rand::Rng;
use tracing::debug;

use crate::error::FlexIdError;

/// Strategy for resolving the machine/shard identifier at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MachineIdStrategy {
    /// Caller-supplied value, rejected if out of range
    Explicit(u64),
    /// Read and parse the named environment variable
    Env(String),
    /// Hash the first non-zero hardware address found on a network interface
    Network,
    /// Uniform random draw over the configured range
    Random,
}

/// Environment-variable reader collaborator
pub trait EnvReader {
    fn get(&self, name: &str) -> Option<String>;
}

/// Reads the real process environment
#[derive(Debug, Default, Clone, Copy)]
pub struct StdEnv;

impl EnvReader for StdEnv {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Network-interface enumerator collaborator, yielding hardware addresses
pub trait HardwareAddressSource {
    fn hardware_addresses(&self) -> Vec<[u8; 6]>;
}

/// Enumerates real interfaces via `pnet::datalink`
#[derive(Debug, Default, Clone, Copy)]
pub struct PnetInterfaces;

impl HardwareAddressSource for PnetInterfaces {
    fn hardware_addresses(&self) -> Vec<[u8; 6]> {
        pnet::datalink::interfaces()
            .into_iter()
            .filter_map(|iface| iface.mac.map(|mac| mac.octets()))
            .collect()
    }
}

/// Resolve a machine ID in `0..=max` using the given strategy
pub(crate) fn resolve(
    strategy: &MachineIdStrategy,
    max: u64,
    env: &dyn EnvReader,
    interfaces: &dyn HardwareAddressSource,
) -> Result<u64, FlexIdError> {
    match strategy {
        MachineIdStrategy::Explicit(value) => {
            if *value > max {
                return Err(FlexIdError::InvalidMachineId(format!(
                    "{} exceeds maximum {}",
                    value, max
                )));
            }
            Ok(*value)
        }
        MachineIdStrategy::Env(var) => {
            let raw = env.get(var).ok_or_else(|| {
                FlexIdError::InvalidMachineId(format!("environment variable {} is not set", var))
            })?;
            let value: u64 = raw.trim().parse().map_err(|_| {
                FlexIdError::InvalidMachineId(format!(
                    "environment variable {} holds non-numeric value {:?}",
                    var, raw
                ))
            })?;
            if value > max {
                return Err(FlexIdError::InvalidMachineId(format!(
                    "environment variable {} value {} exceeds maximum {}",
                    var, value, max
                )));
            }
            debug!(var = %var, value, "resolved machine ID from environment");
            Ok(value)
        }
        MachineIdStrategy::Network => {
            let address = interfaces
                .hardware_addresses()
                .into_iter()
                .find(|octets| octets.iter().any(|&b| b != 0))
                .ok_or(FlexIdError::MachineIdUnavailable)?;
            let mut hasher = DefaultHasher::new();
            address.hash(&mut hasher);
            let value = hasher.finish() % (max + 1);
            debug!(value, "resolved machine ID from hardware address");
            Ok(value)
        }
        MachineIdStrategy::Random => {
            let value = rand::rng().random_range(0..=max);
            debug!(value, "resolved machine ID randomly");
            Ok(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeEnv(Option<&'static str>);

    impl EnvReader for FakeEnv {
        fn get(&self, _name: &str) -> Option<String> {
            self.0.map(str::to_string)
        }
    }

    struct FakeInterfaces(Vec<[u8; 6]>);

    impl HardwareAddressSource for FakeInterfaces {
        fn hardware_addresses(&self) -> Vec<[u8; 6]> {
            self.0.clone()
        }
    }

    const MAX: u64 = 4095;

    fn no_net() -> FakeInterfaces {
        FakeInterfaces(vec![])
    }

    #[test]
    fn test_explicit_in_range() {
        let strategy = MachineIdStrategy::Explicit(4095);
        assert_eq!(resolve(&strategy, MAX, &FakeEnv(None), &no_net()), Ok(4095));
    }

    #[test]
    fn test_explicit_out_of_range() {
        let strategy = MachineIdStrategy::Explicit(4096);
        let err = resolve(&strategy, MAX, &FakeEnv(None), &no_net()).unwrap_err();
        assert!(matches!(err, FlexIdError::InvalidMachineId(_)));
    }

    #[test]
    fn test_env_parses_and_caches_nothing_here() {
        let strategy = MachineIdStrategy::Env("FLEXID_MACHINE_ID".to_string());
        assert_eq!(
            resolve(&strategy, MAX, &FakeEnv(Some("42")), &no_net()),
            Ok(42)
        );
        // Leading/trailing whitespace tolerated
        assert_eq!(
            resolve(&strategy, MAX, &FakeEnv(Some(" 7 ")), &no_net()),
            Ok(7)
        );
    }

    #[test]
    fn test_env_absent_non_numeric_or_out_of_range() {
        let strategy = MachineIdStrategy::Env("FLEXID_MACHINE_ID".to_string());
        for env in [FakeEnv(None), FakeEnv(Some("banana")), FakeEnv(Some("4096")), FakeEnv(Some("-1"))] {
            let err = resolve(&strategy, MAX, &env, &no_net()).unwrap_err();
            assert!(matches!(err, FlexIdError::InvalidMachineId(_)));
        }
    }

    #[test]
    fn test_network_hashes_first_nonzero_address() {
        let interfaces = FakeInterfaces(vec![
            [0, 0, 0, 0, 0, 0],
            [0xDE, 0xAD, 0xBE, 0xEF, 0x00, 0x01],
            [0x02, 0x42, 0xAC, 0x11, 0x00, 0x02],
        ]);
        let id = resolve(&MachineIdStrategy::Network, MAX, &FakeEnv(None), &interfaces).unwrap();
        assert!(id <= MAX);

        // Deterministic for the same address table
        let again =
            resolve(&MachineIdStrategy::Network, MAX, &FakeEnv(None), &interfaces).unwrap();
        assert_eq!(id, again);

        // The all-zero address must be skipped: dropping it changes nothing
        let trimmed = FakeInterfaces(interfaces.0[1..].to_vec());
        let skipped =
            resolve(&MachineIdStrategy::Network, MAX, &FakeEnv(None), &trimmed).unwrap();
        assert_eq!(id, skipped);
    }

    #[test]
    fn test_network_unavailable() {
        for interfaces in [FakeInterfaces(vec![]), FakeInterfaces(vec![[0; 6]])] {
            let err = resolve(&MachineIdStrategy::Network, MAX, &FakeEnv(None), &interfaces)
                .unwrap_err();
            assert_eq!(err, FlexIdError::MachineIdUnavailable);
        }
    }

    #[test]
    fn test_random_in_range() {
        for _ in 0..100 {
            let id = resolve(&MachineIdStrategy::Random, MAX, &FakeEnv(None), &no_net()).unwrap();
            assert!(id <= MAX);
        }
        // Degenerate zero-bit range still resolves
        let id = resolve(&MachineIdStrategy::Random, 0, &FakeEnv(None), &no_net()).unwrap();
        assert_eq!(id, 0);
    }
}
