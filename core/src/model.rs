//! # Address Models
//!
//! Typed wrappers around raw 16-bit values. A [`MeshAddress`] is any 16-bit value; the
//! class newtypes ([`UnicastAddress`], [`GroupAddress`], [`VirtualAddress`]) can only be
//! built from a value that passes the matching validity check.
//!
//! The class newtypes serialize as four uppercase hex digits (`"C000"`), the form used
//! in mesh network configuration files, and so does [`SubscriptionAddress`].
//! [`PublishableAddress`] serializes as a plain integer.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::address::{
    self, END_VIRTUAL_ADDRESS, START_VIRTUAL_ADDRESS, UNASSIGNED_ADDRESS, UUID_HASH_BIT_MASK,
};
use crate::bytes::{self, ByteOrder};
use crate::error::{AddressError, Result};
use crate::format::{format_address, parse_address};
use crate::kind::AddressKind;

/// Any 16-bit mesh address, whatever its class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct MeshAddress(u16);

pub const UNASSIGNED: MeshAddress = MeshAddress(UNASSIGNED_ADDRESS);

impl MeshAddress {
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u16 {
        self.0
    }

    pub fn kind(&self) -> AddressKind {
        AddressKind::of(self.0)
    }

    pub fn is_unassigned(&self) -> bool {
        self.0 == UNASSIGNED_ADDRESS
    }

    /// High byte first.
    pub fn to_be_bytes(&self) -> [u8; 2] {
        bytes::address_to_bytes(self.0)
    }

    pub fn from_be_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_be_bytes(bytes))
    }

    /// Low byte first.
    pub fn to_le_bytes(&self) -> [u8; 2] {
        self.0.to_le_bytes()
    }

    pub fn from_le_bytes([low, high]: [u8; 2]) -> Self {
        // Always fits: both inputs are single bytes.
        Self(bytes::unsigned_bytes_to_int(low, high) as u16)
    }
}

impl From<u16> for MeshAddress {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl From<MeshAddress> for u16 {
    fn from(address: MeshAddress) -> Self {
        address.0
    }
}

impl TryFrom<i32> for MeshAddress {
    type Error = AddressError;

    fn try_from(value: i32) -> Result<Self> {
        if address::is_address_in_range(value) {
            Ok(Self(value as u16))
        } else {
            Err(AddressError::invalid(value, "16-bit"))
        }
    }
}

impl fmt::Display for MeshAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_address(i32::from(self.0), true))
    }
}

impl FromStr for MeshAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self> {
        parse_address(s).map(Self)
    }
}

/// Serde support for the hex string form shared by every address newtype.
macro_rules! hex_string_serde {
    ($name:ident) => {
        impl Serialize for $name {
            fn serialize<S: Serializer>(
                &self,
                serializer: S,
            ) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(&format_address(i32::from(self.value()), false))
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(
                deserializer: D,
            ) -> std::result::Result<Self, D::Error> {
                let text = String::deserialize(deserializer)?;
                let value = parse_address(&text).map_err(D::Error::custom)?;
                $name::try_from(value).map_err(D::Error::custom)
            }
        }
    };
}

hex_string_serde!(MeshAddress);

/// Declares a newtype that only holds values accepted by `$check`.
macro_rules! validated_address {
    ($(#[$meta:meta])* $name:ident, $check:path, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(u16);

        impl $name {
            pub fn new(value: u16) -> Result<Self> {
                Self::try_from(i32::from(value))
            }

            pub fn value(&self) -> u16 {
                self.0
            }
        }

        impl TryFrom<i32> for $name {
            type Error = AddressError;

            fn try_from(value: i32) -> Result<Self> {
                if $check(value) {
                    Ok(Self(value as u16))
                } else {
                    Err(AddressError::invalid(value, $label))
                }
            }
        }

        impl TryFrom<u16> for $name {
            type Error = AddressError;

            fn try_from(value: u16) -> Result<Self> {
                Self::new(value)
            }
        }

        impl From<$name> for MeshAddress {
            fn from(address: $name) -> Self {
                MeshAddress(address.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&format_address(i32::from(self.0), true))
            }
        }

        hex_string_serde!($name);
    };
}

validated_address!(
    /// Address of a single element of a node (`0x0001..=0x7FFF`).
    UnicastAddress,
    address::is_valid_unicast_address,
    "unicast"
);

validated_address!(
    /// Multicast address, including the all-proxies, all-friends and all-relays addresses.
    GroupAddress,
    address::is_valid_group_address,
    "group"
);

validated_address!(
    /// Address derived from a label UUID hash (`0x8000..=0xBFFF`).
    VirtualAddress,
    address::is_valid_virtual_address,
    "virtual"
);

impl VirtualAddress {
    /// Builds the virtual address carrying `hash`; only the low 14 bits are kept.
    pub fn from_label_hash(hash: u16) -> Self {
        Self(START_VIRTUAL_ADDRESS | (hash & UUID_HASH_BIT_MASK))
    }

    pub fn label_hash(&self) -> u16 {
        self.0 & UUID_HASH_BIT_MASK
    }
}

/// An address a model may publish to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PublishableAddress {
    Unicast(UnicastAddress),
    Group(GroupAddress),
}

impl PublishableAddress {
    pub fn value(&self) -> u16 {
        match self {
            Self::Unicast(address) => address.value(),
            Self::Group(address) => address.value(),
        }
    }

    /// Decodes a publish address from its wire bytes.
    ///
    /// Two bytes are read as an unsigned value, high byte first; four bytes as a
    /// big-endian signed integer.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let value = match *bytes {
            [high, low] => i32::from(u16::from_be_bytes([high, low])),
            _ => bytes::bytes_to_int(bytes, ByteOrder::BigEndian)?,
        };
        Self::try_from(value)
    }
}

impl TryFrom<i32> for PublishableAddress {
    type Error = AddressError;

    fn try_from(value: i32) -> Result<Self> {
        if let Ok(group) = GroupAddress::try_from(value) {
            return Ok(Self::Group(group));
        }
        if let Ok(unicast) = UnicastAddress::try_from(value) {
            return Ok(Self::Unicast(unicast));
        }
        Err(AddressError::invalid(value, "publishable"))
    }
}

impl From<UnicastAddress> for PublishableAddress {
    fn from(address: UnicastAddress) -> Self {
        Self::Unicast(address)
    }
}

impl From<GroupAddress> for PublishableAddress {
    fn from(address: GroupAddress) -> Self {
        Self::Group(address)
    }
}

impl Serialize for PublishableAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.value())
    }
}

impl<'de> Deserialize<'de> for PublishableAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = i32::deserialize(deserializer)?;
        Self::try_from(value).map_err(D::Error::custom)
    }
}

/// An address a model may subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubscriptionAddress {
    Group(GroupAddress),
    Virtual(VirtualAddress),
}

impl SubscriptionAddress {
    /// Virtual range values become [`SubscriptionAddress::Virtual`], anything else must
    /// be a valid group address.
    pub fn from_value(value: u16) -> Result<Self> {
        if (START_VIRTUAL_ADDRESS..=END_VIRTUAL_ADDRESS).contains(&value) {
            return VirtualAddress::new(value).map(Self::Virtual);
        }
        GroupAddress::new(value)
            .map(Self::Group)
            .map_err(|_| AddressError::invalid(value, "subscription"))
    }

    pub fn value(&self) -> u16 {
        match self {
            Self::Group(address) => address.value(),
            Self::Virtual(address) => address.value(),
        }
    }
}

impl Serialize for SubscriptionAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_address(i32::from(self.value()), false))
    }
}

impl<'de> Deserialize<'de> for SubscriptionAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        let value = parse_address(&text).map_err(D::Error::custom)?;
        Self::from_value(value).map_err(D::Error::custom)
    }
}
