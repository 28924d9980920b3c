//! IPv4 address and CIDR notation utilities.
//!
//! Provides [`Ipv4`] struct for representing IPv4 subnets in CIDR notation,
//! along with the mask arithmetic behind first/last usable host addresses.

use crate::error::{Error, Result};
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use azure_allowlist_csv::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32> {
    if len > MAX_LENGTH {
        Err(Error::PrefixTooLong(len))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr> {
    if len > MAX_LENGTH {
        Err(Error::PrefixTooLong(len))
    } else {
        let right_len = MAX_LENGTH - len;
        let bits = u32::from(addr) as u64;
        let new_bits = (bits >> right_len) << right_len;

        Ok(Ipv4Addr::from(new_bits as u32))
    }
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr> {
    if len > MAX_LENGTH {
        Err(Error::PrefixTooLong(len))
    } else {
        let mask = get_cidr_mask(len)?;
        let addr_bits = u32::from(addr);
        let network_bits = addr_bits & mask;
        let broadcast_bits = network_bits | (!mask);
        Ok(Ipv4Addr::from(broadcast_bits))
    }
}

/// IPv4 subnet in CIDR notation.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The IPv4 address.
    pub addr: Ipv4Addr,
    /// The subnet mask length (0-32).
    pub mask: u8,
}

impl Ipv4 {
    /// Create a new [`Ipv4`] from a CIDR string (e.g., "10.0.0.0/24").
    pub fn new(addr_cidr: &str) -> Result<Ipv4> {
        let addr_cidr = addr_cidr.trim();
        let parts: Vec<&str> = addr_cidr.split('/').collect();
        if parts.len() != 2 {
            return Err(Error::InvalidSubnet {
                value: addr_cidr.to_string(),
                reason: "expected address/prefix".to_string(),
            });
        }
        let addr: Ipv4Addr = parts[0].parse().map_err(|_| Error::InvalidSubnet {
            value: addr_cidr.to_string(),
            reason: format!("invalid address {}", parts[0]),
        })?;
        let mask: u8 = parts[1].parse().map_err(|_| Error::InvalidSubnet {
            value: addr_cidr.to_string(),
            reason: format!("invalid prefix length {}", parts[1]),
        })?;
        if mask > MAX_LENGTH {
            return Err(Error::InvalidSubnet {
                value: addr_cidr.to_string(),
                reason: format!("Network length is too long: /{mask}"),
            });
        }
        Ok(Ipv4 { addr, mask })
    }

    /// Get the highest (broadcast) address in the subnet.
    pub fn hi(&self) -> Ipv4Addr {
        broadcast_addr(self.addr, self.mask)
            .unwrap_or_else(|e| panic!("Error calculating broadcast address: {e}"))
    }

    /// Get the lowest (network) address in the subnet.
    pub fn lo(&self) -> Ipv4Addr {
        cut_addr(self.addr, self.mask)
            .unwrap_or_else(|e| panic!("Error calculating minimum address for {self}: {e}"))
    }

    /// First host address available for assignment.
    ///
    /// Excludes the network address for prefixes up to /30; for /31 both
    /// addresses count as hosts, and a /32 is its own single host.
    pub fn first_usable(&self) -> Ipv4Addr {
        if self.mask >= MAX_LENGTH - 1 {
            self.lo()
        } else {
            Ipv4Addr::from(u32::from(self.lo()) + 1)
        }
    }

    /// Last host address available for assignment.
    ///
    /// Excludes the broadcast address for prefixes up to /30, mirroring
    /// [`Ipv4::first_usable`] for the degenerate /31 and /32 cases.
    pub fn last_usable(&self) -> Ipv4Addr {
        if self.mask >= MAX_LENGTH - 1 {
            self.hi()
        } else {
            Ipv4Addr::from(u32::from(self.hi()) - 1)
        }
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}
