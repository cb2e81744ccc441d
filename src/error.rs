use thiserror::Error;

/// Represents errors that can occur during FlexID operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FlexIdError {
    /// Error when a batch size of zero is requested
    #[error("Batch size {0} is invalid. Must be at least 1")]
    InvalidArgument(usize),
    /// Error when an explicit or environment-derived machine ID is out of
    /// range or unparsable
    #[error("Invalid machine ID: {0}")]
    InvalidMachineId(String),
    /// Error when the network strategy finds no interface with a usable
    /// hardware address
    #[error("Machine ID unavailable: no network interface exposes a non-zero hardware address")]
    MachineIdUnavailable,
    /// Error when decoding text containing a character outside the alphabet
    #[error("Invalid character in encoded identifier: {0:?}")]
    InvalidCharacter(char),
    /// Error when a candidate fails structural validation
    #[error("Value is not a valid identifier for this field-width configuration")]
    InvalidIdentifier,
}

impl From<crate::codec::DecodeError> for FlexIdError {
    fn from(err: crate::codec::DecodeError) -> Self {
        match err {
            crate::codec::DecodeError::InvalidCharacter(c) => FlexIdError::InvalidCharacter(c),
            crate::codec::DecodeError::EmptyString | crate::codec::DecodeError::Overflow => {
                FlexIdError::InvalidIdentifier
            }
        }
    }
}
