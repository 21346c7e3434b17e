//! Private (RFC1918) versus public address space.

use std::net::Ipv4Addr;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Classification {
    Private,
    Public,
}

/// Classify an address by its first two octets.
///
/// 10.0.0.0/8, 172.16.0.0/12 and 192.168.0.0/16 are private, all else is public.
pub fn classify(addr: Ipv4Addr) -> Classification {
    match addr.octets() {
        [10, ..] => Classification::Private,
        [172, 16..=31, ..] => Classification::Private,
        [192, 168, ..] => Classification::Private,
        _ => Classification::Public,
    }
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Private => "private",
            Classification::Public => "public",
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
