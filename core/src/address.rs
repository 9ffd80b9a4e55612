//! # Address Ranges
//!
//! Range constants of the mesh address space and the validity checks for each class.
//!
//! The raw predicates take an `i32` so that callers holding a wider host integer
//! (for example a value decoded with [`crate::bytes::bytes_to_int`]) can ask whether it
//! is an address at all. They never fail: anything outside the class evaluates to `false`.
//!
//! | Range           | Class                                   |
//! |-----------------|-----------------------------------------|
//! | `0x0000`        | Unassigned                              |
//! | `0x0001-0x7FFF` | Unicast                                 |
//! | `0x8000-0xBFFF` | Virtual                                 |
//! | `0xC000-0xFEFF` | Group                                   |
//! | `0xFF00-0xFFFB` | Reserved                                |
//! | `0xFFFC-0xFFFF` | Fixed group (proxies, friends, relays, nodes) |

/// Unassigned address
pub const UNASSIGNED_ADDRESS: u16 = 0x0000;

pub const START_UNICAST_ADDRESS: u16 = 0x0001;
pub const END_UNICAST_ADDRESS: u16 = 0x7FFF;

/// First address usable for creating groups
pub const START_GROUP_ADDRESS: u16 = 0xC000;
/// Last address usable for creating groups
pub const END_GROUP_ADDRESS: u16 = 0xFEFF;

pub const ALL_PROXIES_ADDRESS: u16 = 0xFFFC;
pub const ALL_FRIENDS_ADDRESS: u16 = 0xFFFD;
pub const ALL_RELAYS_ADDRESS: u16 = 0xFFFE;
pub const ALL_NODES_ADDRESS: u16 = 0xFFFF;

pub const START_VIRTUAL_ADDRESS: u16 = 0x8000;
pub const END_VIRTUAL_ADDRESS: u16 = 0xBFFF;
/// Bits of a virtual address carrying the label UUID hash.
pub const UUID_HASH_BIT_MASK: u16 = 0x3FFF;

/// Returns `true` if `address` fits exactly in an unsigned 16-bit value.
///
/// Negative values and values with any bit above bit 15 are out of range.
pub fn is_address_in_range(address: i32) -> bool {
    address == (address & 0xFFFF)
}

/// Checks a 2-byte address given high byte first.
///
/// Any other length is out of range. Note that this is the opposite byte order of
/// [`crate::bytes::unsigned_bytes_to_int`].
pub fn is_address_bytes_in_range(address: &[u8]) -> bool {
    match address {
        [high, low] => is_address_in_range(i32::from(*high) << 8 | i32::from(*low)),
        _ => false,
    }
}

/// Validates a unicast address (`0x0001..=0x7FFF`).
pub fn is_valid_unicast_address(address: i32) -> bool {
    is_address_in_range(address)
        && (i32::from(START_UNICAST_ADDRESS)..=i32::from(END_UNICAST_ADDRESS)).contains(&address)
}

/// Validates a virtual address (`0x8000..=0xBFFF`).
pub fn is_valid_virtual_address(address: i32) -> bool {
    if !is_address_in_range(address) {
        return false;
    }
    (i32::from(START_VIRTUAL_ADDRESS)..=i32::from(END_VIRTUAL_ADDRESS)).contains(&address)
}

/// Validates a group address.
///
/// The group block spans `0xC000..=0xFFFF` but excludes the reserved block
/// `0xFF00..=0xFFFB` and the all-nodes address `0xFFFF`. The all-proxies, all-friends
/// and all-relays addresses (`0xFFFC..=0xFFFE`) remain valid group addresses.
pub fn is_valid_group_address(address: i32) -> bool {
    if !is_address_in_range(address) {
        return false;
    }
    let b0 = (address >> 8) & 0xFF;
    let b1 = address & 0xFF;

    let group_range = (0xC0..=0xFF).contains(&b0);
    // Upper bound is 0xFB, not 0xFC.
    let reserved = b0 == 0xFF && (0x00..=0xFB).contains(&b1);
    let all_nodes = b0 == 0xFF && b1 == 0xFF;

    group_range && !reserved && !all_nodes
}

/// Returns `true` for one of the four fixed broadcast addresses (`0xFFFC..=0xFFFF`).
pub fn is_fixed_group_address(address: i32) -> bool {
    is_address_in_range(address) && address >= i32::from(ALL_PROXIES_ADDRESS)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
