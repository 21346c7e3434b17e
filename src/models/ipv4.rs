//! IPv4 network parsing in CIDR notation.
//!
//! Provides [`Network`] for a normalized IPv4 network with its prefix length,
//! along with the mask helpers used to normalize it.

use super::classification::{classify, Classification};
use crate::error::{ParseError, ParseReason};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// Lengths above [`MAX_LENGTH`] are clamped to a full mask.
///
/// # Examples
/// ```
/// use ip_count::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> u32 {
    let right_len = MAX_LENGTH - len.min(MAX_LENGTH);
    let all_bits = u32::MAX as u64;

    let mask = (all_bits >> right_len) << right_len;

    mask as u32
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(addr) & get_cidr_mask(len))
}

/// IPv4 network with host bits cleared.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Network {
    addr: Ipv4Addr,
    prefix: u8,
}

impl Network {
    /// Build a network from any address inside it, clearing the host bits.
    pub fn new(addr: Ipv4Addr, prefix: u8) -> Result<Network, ParseReason> {
        if prefix > MAX_LENGTH {
            return Err(ParseReason::PrefixOutOfRange(prefix.to_string()));
        }
        Ok(Network {
            addr: cut_addr(addr, prefix),
            prefix,
        })
    }

    /// Parse `a.b.c.d/p`, tolerating surrounding whitespace.
    ///
    /// A bare address without a prefix is taken as a `/32` host network.
    pub fn parse(input: &str) -> Result<Network, ParseError> {
        parse_cidr(input.trim()).map_err(|reason| ParseError::new(input, reason))
    }

    /// Network address.
    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    /// Network address as a 32-bit unsigned value.
    pub fn address(&self) -> u32 {
        u32::from(self.addr)
    }

    pub fn prefix_len(&self) -> u8 {
        self.prefix
    }

    /// Total number of addresses in the network.
    pub fn num_addresses(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.prefix)
    }

    /// Assignable host addresses: the total less network and broadcast.
    ///
    /// `/31` and `/32` have no room for both and count as 0.
    pub fn size(&self) -> u64 {
        self.num_addresses().saturating_sub(2)
    }

    pub fn classification(&self) -> Classification {
        classify(self.addr)
    }
}

fn parse_cidr(text: &str) -> Result<Network, ParseReason> {
    if text.is_empty() {
        return Err(ParseReason::Empty);
    }
    let (addr_part, prefix) = match text.split_once('/') {
        Some((addr_part, prefix_part)) => (addr_part, parse_prefix(prefix_part)?),
        None => (text, MAX_LENGTH),
    };

    let parts: Vec<&str> = addr_part.split('.').collect();
    if parts.len() != 4 {
        return Err(ParseReason::OctetCount(parts.len()));
    }
    let mut octets = [0u8; 4];
    for (octet, part) in octets.iter_mut().zip(parts) {
        *octet = parse_octet(part)?;
    }

    Network::new(Ipv4Addr::from(octets), prefix)
}

fn is_decimal(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

fn parse_octet(text: &str) -> Result<u8, ParseReason> {
    if !is_decimal(text) {
        return Err(ParseReason::InvalidOctet(text.to_string()));
    }
    text.parse::<u8>()
        .map_err(|_| ParseReason::OctetOutOfRange(text.to_string()))
}

fn parse_prefix(text: &str) -> Result<u8, ParseReason> {
    if !is_decimal(text) {
        return Err(ParseReason::InvalidPrefix(text.to_string()));
    }
    match text.parse::<u8>() {
        Ok(prefix) if prefix <= MAX_LENGTH => Ok(prefix),
        _ => Err(ParseReason::PrefixOutOfRange(text.to_string())),
    }
}

impl FromStr for Network {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Network::parse(s)
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}
