//! Address family and CIDR bit arithmetic.
//!
//! Addresses of both families are carried as a right-aligned `u128` in host
//! order. The helpers here mirror the classic IPv4 subnet calculations but take
//! the address width as a parameter.

use super::PrefixError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Maximum prefix length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH_V4: u8 = 32;
/// Maximum prefix length for an IPv6 prefix (128 bits).
pub const MAX_LENGTH_V6: u8 = 128;

/// The address family of a prefix.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AddressFamily {
    V4,
    V6,
}

impl AddressFamily {
    /// Number of bits in an address of this family.
    pub fn width(self) -> u8 {
        match self {
            AddressFamily::V4 => MAX_LENGTH_V4,
            AddressFamily::V6 => MAX_LENGTH_V6,
        }
    }

    /// Family of a parsed address.
    pub fn of(addr: &IpAddr) -> AddressFamily {
        match addr {
            IpAddr::V4(_) => AddressFamily::V4,
            IpAddr::V6(_) => AddressFamily::V6,
        }
    }

    /// Convert right-aligned bits back into an address of this family.
    ///
    /// For IPv4 only the low 32 bits are used.
    pub fn to_ip(self, bits: u128) -> IpAddr {
        match self {
            AddressFamily::V4 => IpAddr::V4(Ipv4Addr::from(bits as u32)),
            AddressFamily::V6 => IpAddr::V6(Ipv6Addr::from(bits)),
        }
    }

    /// Parse presentation-form text as an address of this family.
    pub fn parse_ip(self, text: &str) -> Option<IpAddr> {
        match self {
            AddressFamily::V4 => text.parse::<Ipv4Addr>().ok().map(IpAddr::V4),
            AddressFamily::V6 => text.parse::<Ipv6Addr>().ok().map(IpAddr::V6),
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AddressFamily::V4 => write!(f, "IPv4"),
            AddressFamily::V6 => write!(f, "IPv6"),
        }
    }
}

/// Right-aligned bits of an address.
pub fn ip_bits(addr: &IpAddr) -> u128 {
    match addr {
        IpAddr::V4(v4) => u32::from(*v4) as u128,
        IpAddr::V6(v6) => u128::from(*v6),
    }
}

/// All `width` bits set.
pub fn all_ones(width: u8) -> u128 {
    if width >= MAX_LENGTH_V6 {
        u128::MAX
    } else {
        (1u128 << width) - 1
    }
}

/// Convert a CIDR prefix length to a subnet mask of `width` bits.
///
/// # Examples
/// ```
/// use acrs::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(32, 24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(width: u8, len: u8) -> Result<u128, PrefixError> {
    if len > width {
        return Err(PrefixError::PrefixLengthOutOfRange { len: len as u32, max: width });
    }
    if len == 0 {
        return Ok(0);
    }
    let right_len = width - len;
    Ok((all_ones(width) >> right_len) << right_len)
}

/// Get the network address for the given bits and prefix length.
pub fn cut_addr(width: u8, bits: u128, len: u8) -> Result<u128, PrefixError> {
    Ok(bits & get_cidr_mask(width, len)?)
}

/// Calculate the broadcast (highest) address for the given bits and prefix length.
pub fn broadcast_addr(width: u8, bits: u128, len: u8) -> Result<u128, PrefixError> {
    let mask = get_cidr_mask(width, len)?;
    Ok((bits & mask) | (!mask & all_ones(width)))
}

/// Prefix length expressed by a subnet mask, if the mask is contiguous.
///
/// A mask is valid when its inverse within `width` bits is one less than a
/// power of two, i.e. all one-bits precede all zero-bits.
pub fn mask_to_len(width: u8, mask: u128) -> Option<u8> {
    let inverse = !mask & all_ones(width);
    if inverse & inverse.wrapping_add(1) != 0 {
        return None;
    }
    Some(width - inverse.count_ones() as u8)
}
