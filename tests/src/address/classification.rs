#![cfg(test)]
use meshaddr_core::address::{
    is_address_bytes_in_range, is_address_in_range, is_valid_group_address,
    is_valid_unicast_address, is_valid_virtual_address,
};
use meshaddr_core::{AddressKind, AddressSpaceSummary, MeshAddress};

/*************************************************************
                  Range and class predicates
**************************************************************/

#[test]
fn bits_above_fifteen_are_out_of_range() {
    for bit in 16..31 {
        let value: i32 = 1 << bit;
        assert!(!is_address_in_range(value), "{value:#X} reported in range");
        assert!(!is_address_in_range(value | 0x0001));
    }
    assert!(!is_address_in_range(i32::MIN));
}

#[test]
fn unicast_and_virtual_ranges_are_exact() {
    for a in 0..=0xFFFF {
        assert_eq!(is_valid_unicast_address(a), (0x0001..=0x7FFF).contains(&a));
        assert_eq!(is_valid_virtual_address(a), (0x8000..=0xBFFF).contains(&a));
    }
}

#[test]
fn group_boundary_table() {
    let cases: [(i32, bool); 8] = [
        (0xC000, true),
        (0xFEFF, true),
        (0xFF00, false),
        (0xFFFB, false),
        (0xFFFC, true),
        (0xFFFE, true),
        (0xFFFF, false),
        (0xBFFF, false),
    ];
    for (address, expected) in cases {
        assert_eq!(
            is_valid_group_address(address),
            expected,
            "group check for {address:#06X}"
        );
    }
}

#[test]
fn byte_array_form_is_high_byte_first() {
    assert!(is_address_bytes_in_range(&[0x12, 0x34]));
    assert_eq!(MeshAddress::from_be_bytes([0x12, 0x34]).value(), 0x1234);
    assert_eq!(MeshAddress::from_le_bytes([0x12, 0x34]).value(), 0x3412);
}

/*************************************************************
                     Space partition
**************************************************************/

#[test]
fn every_address_has_exactly_one_kind() {
    let summary = AddressSpaceSummary::compute();
    assert_eq!(summary.total(), 65_536);
    assert_eq!(summary.iter().count(), AddressKind::ALL.len());
}

#[test]
fn fixed_addresses_are_named_and_mostly_group() {
    assert_eq!(MeshAddress::new(0xFFFC).kind(), AddressKind::AllProxies);
    assert!(AddressKind::AllProxies.is_valid_group());
    assert!(AddressKind::AllRelays.is_valid_group());
    assert!(!AddressKind::AllNodes.is_valid_group());
    assert!(AddressKind::AllNodes.is_fixed_group());
}
