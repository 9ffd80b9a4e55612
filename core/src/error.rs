//! Error types for address decoding and validation.

use thiserror::Error;

/// Result type for meshaddr-core operations
pub type Result<T> = std::result::Result<T, AddressError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// Byte sequence the fixed-width decoder cannot consume (only 2 or 4 bytes are accepted).
    #[error("unsupported byte length {0}, expected 2 or 4 bytes")]
    UnsupportedLength(usize),

    /// Value is not a legal address of the requested class.
    #[error("{value:#06X} is not a valid {expected} address")]
    InvalidAddress { value: i32, expected: &'static str },

    /// Text that is not a hexadecimal address.
    #[error("invalid hex address '{0}'")]
    InvalidHex(String),

    /// Hex text that does not fit in 16 bits.
    #[error("'{0}' does not fit in a 16-bit address")]
    OutOfRange(String),

    #[error("unknown byte order '{0}'")]
    UnknownByteOrder(String),
}

impl AddressError {
    pub fn invalid(value: impl Into<i32>, expected: &'static str) -> Self {
        AddressError::InvalidAddress {
            value: value.into(),
            expected,
        }
    }
}
