//! Domain models for counting assignable addresses.
//!
//! - [`Network`] - IPv4 network parsed from CIDR notation
//! - [`Classification`] - private or public address space

mod classification;
mod ipv4;

// Re-export public types
pub use classification::{classify, Classification};
pub use ipv4::{cut_addr, get_cidr_mask, Network, MAX_LENGTH};
