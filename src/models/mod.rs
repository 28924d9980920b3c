//! Domain models for the address list converter.
//!
//! This module contains the core data structures used throughout the
//! application:
//! - [`Ipv4`] - IPv4 subnet in CIDR notation with usable-host arithmetic
//! - [`AddressDocument`], [`Region`], [`IpRange`] - parsed input document

mod document;
mod ipv4;

// Re-export public types
pub use document::{AddressDocument, IpRange, Region};
pub use ipv4::{broadcast_addr, cut_addr, get_cidr_mask, Ipv4, MAX_LENGTH};
