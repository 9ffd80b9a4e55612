//! Hexadecimal text form of addresses.

use crate::error::{AddressError, Result};

/// Renders `address` as at least four uppercase hex digits, zero padded.
///
/// No range validation is done: a value wider than 16 bits prints all of its digits and
/// a negative value prints its 32-bit two's-complement pattern.
///
/// ```
/// use meshaddr_core::format::format_address;
///
/// assert_eq!(format_address(0x1A, false), "001A");
/// assert_eq!(format_address(0x1A, true), "0x001A");
/// ```
pub fn format_address(address: i32, add_0x_prefix: bool) -> String {
    if add_0x_prefix {
        format!("0x{address:04X}")
    } else {
        format!("{address:04X}")
    }
}

/// Parses a hex address such as `"C000"`, `"0xc000"` or `"1"`.
pub fn parse_address(input: &str) -> Result<u16> {
    let trimmed = input.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(AddressError::InvalidHex(input.to_string()));
    }

    let value = u32::from_str_radix(digits, 16)
        .map_err(|_| AddressError::OutOfRange(input.to_string()))?;

    u16::try_from(value).map_err(|_| AddressError::OutOfRange(input.to_string()))
}
