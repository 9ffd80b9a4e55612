//! Byte-level conversions for address values.
//!
//! Two fixed conventions coexist here and must not be merged:
//! * [`unsigned_bytes_to_int`] takes the **low** byte first.
//! * [`crate::address::is_address_bytes_in_range`] and [`address_to_bytes`] use the
//!   **high** byte first.
//!
//! [`bytes_to_int`] takes the order explicitly.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{AddressError, Result};

/// Byte order of a multi-byte value on the wire.
///
/// For the 32-bit value `0x12345678`:
/// - `BigEndian`: [0x12, 0x34, 0x56, 0x78]
/// - `LittleEndian`: [0x78, 0x56, 0x34, 0x12]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ByteOrder {
    /// Most significant byte first (network byte order).
    #[default]
    BigEndian,
    /// Least significant byte first.
    LittleEndian,
}

impl ByteOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BigEndian => "big-endian",
            Self::LittleEndian => "little-endian",
        }
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ByteOrder {
    type Err = AddressError;

    /// Accepts "be", "big", "big-endian", "AB" and the little-endian equivalents
    /// ("le", "little", "little_endian", "BA"), case-insensitive.
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', '_'], "");
        match normalized.as_str() {
            "be" | "big" | "bigendian" | "ab" => Ok(Self::BigEndian),
            "le" | "little" | "littleendian" | "ba" => Ok(Self::LittleEndian),
            _ => Err(AddressError::UnknownByteOrder(s.to_string())),
        }
    }
}

/// Reinterprets a byte as an unsigned value in `0..=255`.
pub fn unsigned_byte_to_int(b: u8) -> i32 {
    i32::from(b)
}

/// Combines two bytes into an unsigned 16-bit value, `b0` being the **low** byte.
///
/// `unsigned_bytes_to_int(0x34, 0x12) == 0x1234`
pub fn unsigned_bytes_to_int(b0: u8, b1: u8) -> i32 {
    unsigned_byte_to_int(b0) + (unsigned_byte_to_int(b1) << 8)
}

/// Decodes a signed integer from `bytes` in the given order.
///
/// Four bytes decode as a signed 32-bit value, two bytes as a signed 16-bit value
/// widened to `i32`. Any other length is rejected with
/// [`AddressError::UnsupportedLength`].
pub fn bytes_to_int(bytes: &[u8], order: ByteOrder) -> Result<i32> {
    match *bytes {
        [a, b, c, d] => Ok(match order {
            ByteOrder::BigEndian => i32::from_be_bytes([a, b, c, d]),
            ByteOrder::LittleEndian => i32::from_le_bytes([a, b, c, d]),
        }),
        [a, b] => Ok(i32::from(match order {
            ByteOrder::BigEndian => i16::from_be_bytes([a, b]),
            ByteOrder::LittleEndian => i16::from_le_bytes([a, b]),
        })),
        _ => {
            debug!(len = bytes.len(), %order, "rejecting byte sequence");
            Err(AddressError::UnsupportedLength(bytes.len()))
        }
    }
}

/// Splits an address into its two bytes, high byte first.
pub fn address_to_bytes(address: u16) -> [u8; 2] {
    address.to_be_bytes()
}

/// Parses a hex byte string such as `"0C 00"`, `"0x0c00"` or `"00:00:01:00"`.
///
/// Whitespace, `:` and `-` separators are ignored.
pub fn parse_hex_bytes(input: &str) -> Result<Vec<u8>> {
    let trimmed = input.trim();
    let body = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let digits: String = body
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':' && *c != '-')
        .collect();

    hex::decode(&digits).map_err(|_| AddressError::InvalidHex(input.to_string()))
}
