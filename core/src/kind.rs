//! The disjoint partition of the 16-bit address space.

use std::fmt;

use crate::address::{
    ALL_FRIENDS_ADDRESS, ALL_NODES_ADDRESS, ALL_PROXIES_ADDRESS, ALL_RELAYS_ADDRESS,
    END_GROUP_ADDRESS, END_UNICAST_ADDRESS, END_VIRTUAL_ADDRESS, UNASSIGNED_ADDRESS,
};

/// Category of a 16-bit mesh address.
///
/// Exactly one kind applies to every `u16`. The fixed addresses get their own kind even
/// though all-proxies, all-friends and all-relays are also valid group addresses
/// (see [`AddressKind::is_valid_group`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AddressKind {
    Unassigned,
    Unicast,
    Virtual,
    Group,
    /// `0xFF00..=0xFFFB`, reserved for future use.
    Reserved,
    AllProxies,
    AllFriends,
    AllRelays,
    AllNodes,
}

impl AddressKind {
    /// All kinds in address order.
    pub const ALL: [AddressKind; 9] = [
        AddressKind::Unassigned,
        AddressKind::Unicast,
        AddressKind::Virtual,
        AddressKind::Group,
        AddressKind::Reserved,
        AddressKind::AllProxies,
        AddressKind::AllFriends,
        AddressKind::AllRelays,
        AddressKind::AllNodes,
    ];

    pub fn of(address: u16) -> Self {
        match address {
            UNASSIGNED_ADDRESS => Self::Unassigned,
            a if a <= END_UNICAST_ADDRESS => Self::Unicast,
            a if a <= END_VIRTUAL_ADDRESS => Self::Virtual,
            a if a <= END_GROUP_ADDRESS => Self::Group,
            ALL_PROXIES_ADDRESS => Self::AllProxies,
            ALL_FRIENDS_ADDRESS => Self::AllFriends,
            ALL_RELAYS_ADDRESS => Self::AllRelays,
            ALL_NODES_ADDRESS => Self::AllNodes,
            _ => Self::Reserved,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unassigned => "unassigned",
            Self::Unicast => "unicast",
            Self::Virtual => "virtual",
            Self::Group => "group",
            Self::Reserved => "reserved",
            Self::AllProxies => "all-proxies",
            Self::AllFriends => "all-friends",
            Self::AllRelays => "all-relays",
            Self::AllNodes => "all-nodes",
        }
    }

    /// One of the four fixed broadcast addresses.
    pub fn is_fixed_group(&self) -> bool {
        matches!(
            self,
            Self::AllProxies | Self::AllFriends | Self::AllRelays | Self::AllNodes
        )
    }

    /// Whether addresses of this kind pass [`crate::address::is_valid_group_address`].
    pub fn is_valid_group(&self) -> bool {
        matches!(
            self,
            Self::Group | Self::AllProxies | Self::AllFriends | Self::AllRelays
        )
    }
}

impl fmt::Display for AddressKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<u16> for AddressKind {
    fn from(address: u16) -> Self {
        Self::of(address)
    }
}
