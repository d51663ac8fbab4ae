//! Mixed-family prefix set and textual emission.

use std::io::{Read, Write};
use std::net::IpAddr;

use crate::error::Result;
use crate::ipv4::Ipv4Set;
use crate::ipv6::Ipv6Set;

/// A set of IPv4 and IPv6 prefixes behind a single [`IpAddr`] surface.
///
/// Composes one [`Ipv4Set`] and one [`Ipv6Set`] and dispatches on the
/// address family; IPv4-mapped IPv6 addresses (`::ffff:a.b.c.d`) are
/// routed to the IPv4 tree.
///
/// # Example
///
/// ```rust
/// use cidrset::IpSet;
/// use std::net::IpAddr;
///
/// let mut set = IpSet::new();
/// set.add("10.0.0.0".parse::<IpAddr>().unwrap(), 8);
/// set.add("2001:db8::".parse::<IpAddr>().unwrap(), 32);
///
/// assert!(set.contains("10.1.2.3".parse::<IpAddr>().unwrap()));
/// assert!(set.contains("2001:db8::42".parse::<IpAddr>().unwrap()));
/// assert!(!set.contains("192.0.2.1".parse::<IpAddr>().unwrap()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct IpSet {
    v4: Ipv4Set,
    v6: Ipv6Set,
}

impl IpSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `addr/prefix_len`, clamping the length to the family
    /// width (32 or 128).
    pub fn add(&mut self, addr: IpAddr, prefix_len: u8) {
        match addr {
            IpAddr::V4(v4) => self.v4.add(u32::from(v4), prefix_len),
            IpAddr::V6(v6) => match v6.to_ipv4_mapped() {
                Some(mapped) => self.v4.add(u32::from(mapped), prefix_len),
                None => self.v6.add(v6, prefix_len),
            },
        }
    }

    /// True iff `addr` falls within one of the stored prefixes of its
    /// family.
    pub fn contains(&self, addr: IpAddr) -> bool {
        match addr {
            IpAddr::V4(v4) => self.v4.contains(u32::from(v4)),
            IpAddr::V6(v6) => match v6.to_ipv4_mapped() {
                Some(mapped) => self.v4.contains(u32::from(mapped)),
                None => self.v6.contains(v6),
            },
        }
    }

    /// Compacts both family trees.
    pub fn compact(&mut self) {
        self.v4.compact();
        self.v6.compact();
    }

    /// Writes the IPv4 blob followed by the IPv6 blob.
    pub fn serialize<W: Write>(&mut self, writer: &mut W) -> Result<()> {
        self.v4.serialize(writer)?;
        self.v6.serialize(writer)
    }

    /// Reads the IPv4 blob followed by the IPv6 blob, replacing both
    /// trees.
    pub fn deserialize<R: Read>(&mut self, reader: &mut R) -> Result<()> {
        self.v4.deserialize(reader)?;
        self.v6.deserialize(reader)
    }

    /// Calls `step` for each stored prefix, IPv4 first. The step closure
    /// must not modify the set. Returns true iff `step` never returned
    /// false.
    pub fn iterate<F>(&self, mut step: F) -> bool
    where
        F: FnMut(IpAddr, u8) -> bool,
    {
        self.v4.iterate(|addr, len| step(IpAddr::V4(addr), len))
            && self.v6.iterate(|addr, len| step(IpAddr::V6(addr), len))
    }

    /// Writes a textual representation of the set: one `addr/len` line
    /// per prefix, IPv4 lines first. The order is otherwise unspecified
    /// and contiguous prefixes may have been merged. One write call is
    /// issued per prefix, so a buffered writer is advisable.
    pub fn write_text_to<W: Write>(&self, writer: &mut W) -> std::io::Result<u64> {
        let written = self.v4.write_text_to(writer)?;
        Ok(written + self.v6.write_text_to(writer)?)
    }

    /// The IPv4 half of the set.
    pub fn ipv4(&self) -> &Ipv4Set {
        &self.v4
    }

    /// The IPv6 half of the set.
    pub fn ipv6(&self) -> &Ipv6Set {
        &self.v6
    }
}
