//! IPv4 prefix set.

use std::io::{Read, Write};
use std::net::Ipv4Addr;

use crate::error::Result;
use crate::tree::{BitKey, PrefixTree};
use crate::validation::{self, TreeReport};

/// A set of IPv4 prefixes answering longest-match containment queries.
///
/// Addresses are passed as `u32` in their natural big-endian integer
/// form (`u32::from(Ipv4Addr)`); `_addr` variants accept the standard
/// library type directly.
///
/// # Example
///
/// ```rust
/// use cidrset::Ipv4Set;
///
/// let mut set = Ipv4Set::new();
/// set.add(0x0A00_0000, 8); // 10.0.0.0/8
/// assert!(set.contains(0x0A01_0203));
/// assert!(!set.contains(0x0B01_0203));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Ipv4Set {
    pub(crate) tree: PrefixTree,
}

impl Ipv4Set {
    /// Creates an empty set. No memory is allocated until the first
    /// insertion.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `addr/prefix_len` into the set. Lengths beyond 32 are
    /// clamped; length 0 makes the set cover every address.
    pub fn add(&mut self, addr: u32, prefix_len: u8) {
        self.tree
            .add(BitKey::from_v4(addr), u32::from(prefix_len.min(32)));
    }

    /// [`add`](Self::add) taking a standard library address.
    pub fn add_addr(&mut self, addr: Ipv4Addr, prefix_len: u8) {
        self.add(u32::from(addr), prefix_len);
    }

    /// True iff `addr` falls within one of the stored prefixes.
    #[inline]
    pub fn contains(&self, addr: u32) -> bool {
        self.tree.contains_v4(addr)
    }

    /// [`contains`](Self::contains) taking a standard library address.
    #[inline]
    pub fn contains_addr(&self, addr: Ipv4Addr) -> bool {
        self.contains(u32::from(addr))
    }

    /// Rebuilds the node arena without free-list holes or spare capacity.
    pub fn compact(&mut self) {
        self.tree.compact();
    }

    /// Number of 32-bit arena cells currently allocated, including any
    /// recycled ones. Two cells per node plus the two-cell header.
    pub fn cell_count(&self) -> usize {
        self.tree.cell_count()
    }

    /// Calls `step` for each stored prefix. Covered or merged prefixes
    /// appear in their collapsed form, so the yielded multiset may be
    /// smaller than what was added. Returns true iff `step` never
    /// returned false.
    pub fn iterate<F>(&self, mut step: F) -> bool
    where
        F: FnMut(Ipv4Addr, u8) -> bool,
    {
        self.tree
            .iterate(&mut |key: BitKey, len| step(Ipv4Addr::from(key.top32()), len as u8))
    }

    /// Writes one `addr/len` line per stored prefix, returning the number
    /// of bytes written. One write call is issued per prefix, so a
    /// buffered writer is advisable.
    pub fn write_text_to<W: Write>(&self, writer: &mut W) -> std::io::Result<u64> {
        use std::fmt::Write as _;

        let mut line = String::with_capacity(21);
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
