//! # meshaddr core
//!
//! Classification and formatting of 16-bit Bluetooth mesh network addresses.
//!
//! ## Module Overview
//! * **[`address`]**: Range constants and the validity predicates for every address class.
//! * **[`bytes`]**: Conversion between raw byte pairs and integer address values.
//! * **[`format`]**: Fixed-width hexadecimal rendering and parsing.
//! * **[`kind`]**: The disjoint [`AddressKind`] partition of the address space.
//! * **[`model`]**: Validated address newtypes (unicast, group, virtual, publishable, subscription).
//! * **[`summary`]**: Per-kind counts over the full 16-bit space.
//!
//! Every operation is a pure function of its inputs.

pub mod address;
pub mod bytes;
pub mod error;
pub mod format;
pub mod kind;
pub mod model;
pub mod summary;

pub use bytes::ByteOrder;
pub use error::{AddressError, Result};
pub use kind::AddressKind;
pub use model::{
    GroupAddress, MeshAddress, PublishableAddress, SubscriptionAddress, UnicastAddress,
    VirtualAddress,
};
pub use summary::AddressSpaceSummary;
