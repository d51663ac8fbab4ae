//! IPv6 prefix set.

use std::io::{Read, Write};
use std::net::Ipv6Addr;

use crate::error::Result;
use crate::tree::{BitKey, PrefixTree};
use crate::validation::{self, TreeReport};

/// A set of IPv6 prefixes answering longest-match containment queries.
///
/// The full 128 bits run through the same engine as IPv4, so worst-case
/// lookups are bounded by a handful of path-compressed nodes rather than
/// 128 branch steps.
///
/// # Example
///
/// ```rust
/// use cidrset::Ipv6Set;
/// use std::net::Ipv6Addr;
///
/// let mut set = Ipv6Set::new();
/// set.add("2001:db8::".parse::<Ipv6Addr>().unwrap(), 32);
/// assert!(set.contains("2001:db8::1".parse::<Ipv6Addr>().unwrap()));
/// assert!(!set.contains("2001:db9::1".parse::<Ipv6Addr>().unwrap()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Ipv6Set {
    pub(crate) tree: PrefixTree,
}

impl Ipv6Set {
    /// Creates an empty set. No memory is allocated until the first
    /// insertion.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `addr/prefix_len` into the set. Lengths beyond 128 are
    /// clamped; length 0 makes the set cover every address.
    pub fn add(&mut self, addr: Ipv6Addr, prefix_len: u8) {
        self.add_octets(addr.octets(), prefix_len);
    }

    /// [`add`](Self::add) taking the raw network-byte-order octets.
    pub fn add_octets(&mut self, octets: [u8; 16], prefix_len: u8) {
        self.tree
            .add(BitKey::from_v6(octets), u32::from(prefix_len.min(128)));
    }

    /// True iff `addr` falls within one of the stored prefixes.
    #[inline]
    pub fn contains(&self, addr: Ipv6Addr) -> bool {
        self.contains_octets(addr.octets())
    }

    /// [`contains`](Self::contains) taking the raw network-byte-order
    /// octets.
    #[inline]
    pub fn contains_octets(&self, octets: [u8; 16]) -> bool {
        self.tree.contains_key(BitKey::from_v6(octets))
    }

    /// Rebuilds the node arena without free-list holes or spare capacity.
    pub fn compact(&mut self) {
        self.tree.compact();
    }

    /// Number of 32-bit arena cells currently allocated, including any
    /// recycled ones.
    pub fn cell_count(&self) -> usize {
        self.tree.cell_count()
    }

    /// Calls `step` for each stored prefix; see
    /// [`Ipv4Set::iterate`](crate::Ipv4Set::iterate) for the merging
    /// caveats. Returns true iff `step` never returned false.
    pub fn iterate<F>(&self, mut step: F) -> bool
    where
        F: FnMut(Ipv6Addr, u8) -> bool,
    {
        self.tree
            .iterate(&mut |key: BitKey, len| step(Ipv6Addr::from(key.octets()), len as u8))
    }

    /// Writes one `addr/len` line per stored prefix, returning the number
    /// of bytes written.
    pub fn write_text_to<W: Write>(&self, writer: &mut W) -> std::io::Result<u64> {
        use std::fmt::Write as _;

        let mut line = String::with_capacity(44);
        let mut written = 0u64;
        let mut result = Ok(());
        self.iterate(|addr, len| {
            line.clear();
            let _ = writeln!(line, "{}/{}", addr, len);
            match writer.write_all(line.as_bytes()) {
                Ok(()) => {
                    written += line.len() as u64;
                    true
                }
                Err(err) => {
                    result = Err(err);
                    false
                }
            }
        });
        result.map(|()| written)
    }

    /// Writes the set in the binary format described in the crate docs.
    /// Compacts the arena first.
    pub fn serialize<W: Write>(&mut self, writer: &mut W) -> Result<()> {
        self.tree.serialize(writer)
    }

    /// Replaces the set with one read from `reader`.
    pub fn deserialize<R: Read>(&mut self, reader: &mut R) -> Result<()> {
        self.tree.deserialize(reader)
    }

    /// Walks the tree checking structural invariants and collecting node
    /// statistics. See [`TreeReport`].
    pub fn audit(&self) -> TreeReport {
        validation::audit_tree(&self.tree)
    }
}
