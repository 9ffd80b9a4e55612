use anyhow::Context;
use colored::*;
use meshaddr_common::config::Config;
use meshaddr_core::address::is_address_bytes_in_range;
use meshaddr_core::bytes::{bytes_to_int, parse_hex_bytes, unsigned_bytes_to_int};
use meshaddr_core::{ByteOrder, MeshAddress};
use tracing::debug;

use crate::terminal::detail::{self, Detail};
use crate::terminal::{colors, print};

pub fn decode(input: &str, order: ByteOrder, cfg: &Config) -> anyhow::Result<()> {
    let (bytes, value) = decode_bytes(input, order)?;

    if cfg.quiet > 1 {
        print::print(&value.to_string());
        return Ok(());
    }

    print::tree_head(0, &detail::bytes_str(&bytes));
    print::as_tree_one_level(decode_details(&bytes, value, order, cfg));
    Ok(())
}

fn decode_bytes(input: &str, order: ByteOrder) -> anyhow::Result<(Vec<u8>, i32)> {
    let bytes: Vec<u8> = parse_hex_bytes(input).context("parsing byte string")?;
    debug!(len = bytes.len(), %order, "decoding");

    let value: i32 = bytes_to_int(&bytes, order)
        .with_context(|| format!("decoding {} as {order}", detail::bytes_str(&bytes)))?;
    Ok((bytes, value))
}

fn decode_details(bytes: &[u8], value: i32, order: ByteOrder, cfg: &Config) -> Vec<Detail> {
    let mut details: Vec<Detail> = vec![
        ("Order".to_string(), order.as_str().color(colors::TEXT_DEFAULT)),
        ("Signed".to_string(), value.to_string().color(colors::TEXT_DEFAULT)),
        ("Hex".to_string(), detail::address_str(value, cfg)),
    ];

    if let &[b0, b1] = bytes {
        // The two fixed conventions, independent of --order.
        let low_first: i32 = unsigned_bytes_to_int(b0, b1);
        details.push(("LE pair".to_string(), detail::address_str(low_first, cfg)));
        details.push(detail::flag_detail(
            "BE in range",
            is_address_bytes_in_range(bytes),
        ));
        let high_first = MeshAddress::from_be_bytes([b0, b1]);
        details.push(detail::kind_detail(high_first.kind()));
    }

    details
}

#[cfg(test)]
mod tests {
    use super::*;
    use meshaddr_core::AddressError;

    fn lookup<'a>(details: &'a [Detail], key: &str) -> Option<&'a str> {
        details
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| &**value)
    }

    #[test]
    fn test_decode_two_bytes_little_endian() {
        let cfg = Config::default();
        let (bytes, value) = decode_bytes("34 12", ByteOrder::LittleEndian).unwrap();
        assert_eq!(value, 0x1234);

        let details = decode_details(&bytes, value, ByteOrder::LittleEndian, &cfg);
        assert_eq!(lookup(&details, "Order"), Some("little-endian"));
        assert_eq!(lookup(&details, "Signed"), Some("4660"));
        assert_eq!(lookup(&details, "Hex"), Some("0x1234"));
        assert_eq!(lookup(&details, "LE pair"), Some("0x1234"));
        assert_eq!(lookup(&details, "BE in range"), Some("yes"));
        // High byte first: 0x3412
        assert_eq!(lookup(&details, "Kind"), Some("unicast"));
    }

    #[test]
    fn test_decode_two_bytes_big_endian_is_signed() {
        let cfg = Config { prefix: false, ..Config::default() };
        let (bytes, value) = decode_bytes("C0 00", ByteOrder::BigEndian).unwrap();
        assert_eq!(value, -0x4000);

        let details = decode_details(&bytes, value, ByteOrder::BigEndian, &cfg);
        assert_eq!(lookup(&details, "Hex"), Some("FFFFC000"));
        assert_eq!(lookup(&details, "LE pair"), Some("00C0"));
        assert_eq!(lookup(&details, "Kind"), Some("group"));
    }

    #[test]
    fn test_decode_four_bytes_has_no_pair_details() {
        let cfg = Config::default();
        let (bytes, value) = decode_bytes("00000100", ByteOrder::BigEndian).unwrap();
        assert_eq!(value, 256);

        let details = decode_details(&bytes, value, ByteOrder::BigEndian, &cfg);
        assert_eq!(details.len(), 3);
        assert_eq!(lookup(&details, "LE pair"), None);
    }

    #[test]
    fn test_decode_rejects_bad_input() {
        let err = decode_bytes("01 02 03", ByteOrder::BigEndian).unwrap_err();
        assert_eq!(
            err.downcast_ref::<AddressError>(),
            Some(&AddressError::UnsupportedLength(3))
        );
        assert!(decode_bytes("zz", ByteOrder::BigEndian).is_err());
        assert!(decode_bytes("", ByteOrder::LittleEndian).is_err());
    }
}
