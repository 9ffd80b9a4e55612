use colored::*;
use meshaddr_common::config::Config;
use meshaddr_core::format::format_address;
use meshaddr_core::{AddressKind, MeshAddress};

use crate::terminal::colors;

pub type Detail = (String, ColoredString);

pub fn address_str(value: i32, cfg: &Config) -> ColoredString {
    format_address(value, cfg.prefix).color(colors::ADDRESS)
}

pub fn kind_detail(kind: AddressKind) -> Detail {
    ("Kind".to_string(), kind.as_str().color(colors::PRIMARY))
}

pub fn flag_detail(key: &str, flag: bool) -> Detail {
    let value: ColoredString = if flag {
        "yes".color(colors::VALID)
    } else {
        "no".color(colors::INVALID)
    };
    (key.to_string(), value)
}

pub fn bytes_str(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<String>>()
        .join(" ")
}

pub fn bytes_detail(key: &str, bytes: &[u8]) -> Detail {
    (key.to_string(), bytes_str(bytes).color(colors::BYTES))
}

/// Byte layouts of an address in both conventions.
pub fn byte_details(address: MeshAddress) -> Vec<Detail> {
    vec![
        bytes_detail("Bytes BE", &address.to_be_bytes()),
        bytes_detail("Bytes LE", &address.to_le_bytes()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_str() {
        assert_eq!(bytes_str(&[0x0C, 0x00, 0xFF]), "0C 00 FF");
        assert_eq!(bytes_str(&[]), "");
    }
}
