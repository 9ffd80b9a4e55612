#![cfg(test)]
use meshaddr_core::bytes::{bytes_to_int, parse_hex_bytes, unsigned_bytes_to_int};
use meshaddr_core::format::{format_address, parse_address};
use meshaddr_core::{AddressError, ByteOrder, MeshAddress, PublishableAddress};

#[test]
fn pair_and_array_orders_are_opposite() {
    let from_pair = unsigned_bytes_to_int(0x34, 0x12);
    let from_array = MeshAddress::from_be_bytes([0x12, 0x34]);
    assert_eq!(from_pair, 0x1234);
    assert_eq!(from_pair, i32::from(from_array.value()));
}

#[test]
fn bytes_to_int_honours_order() {
    assert_eq!(bytes_to_int(&[0x00, 0x00, 0x01, 0x00], ByteOrder::BigEndian), Ok(256));
    assert_eq!(bytes_to_int(&[0x00, 0x01], ByteOrder::LittleEndian), Ok(256));
    assert_eq!(
        bytes_to_int(&[0x00, 0x01, 0x02], ByteOrder::BigEndian),
        Err(AddressError::UnsupportedLength(3))
    );
}

#[test]
fn hex_text_to_decoded_value() {
    let bytes = parse_hex_bytes("00 00 01 00").unwrap();
    assert_eq!(bytes_to_int(&bytes, ByteOrder::BigEndian), Ok(256));

    let bytes = parse_hex_bytes("0xE000").unwrap();
    assert_eq!(
        PublishableAddress::from_bytes(&bytes).map(|a| a.value()),
        Ok(0xE000)
    );
}

#[test]
fn formatting_round_trips() {
    assert_eq!(format_address(0x1A, false), "001A");
    assert_eq!(format_address(0x1A, true), "0x001A");
    for a in (0..=u16::MAX).step_by(7) {
        let text = format_address(i32::from(a), true);
        assert_eq!(parse_address(&text), Ok(a));
        assert_eq!(text.parse::<MeshAddress>(), Ok(MeshAddress::new(a)));
    }
}
