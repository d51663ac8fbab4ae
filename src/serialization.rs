//! File-level save and load for prefix sets.
//!
//! Thin glue over [`IpSet::serialize`] and [`IpSet::deserialize`]: `save`
//! writes and fsyncs a file, `load` memory-maps it and decodes from the
//! mapping, so country-scale sets come in without an intermediate read
//! buffer. The byte format itself is documented on the crate root.

use std::fs::File;
use std::path::Path;

use memmap2::Mmap;

use crate::error::Result;
use crate::set::IpSet;

/// Writes `set` to a file at `path`, creating or truncating it. The set
/// is compacted as a side effect of serialization.
///
/// # Example
///
/// ```no_run
/// use cidrset::{serialization, IpSet};
/// use std::net::IpAddr;
///
/// let mut set = IpSet::new();
/// set.add("10.0.0.0".parse::<IpAddr>().unwrap(), 8);
/// serialization::save(&mut set, "allowlist.bin").unwrap();
/// ```
pub fn save<P: AsRef<Path>>(set: &mut IpSet, path: P) -> Result<()> {
    let mut file = File::create(path)?;
    set.serialize(&mut file)?;
    file.sync_all()?;
    Ok(())
}

/// Loads a set previously written by [`save`].
///
/// # Example
///
/// ```no_run
/// use cidrset::serialization;
/// use std::net::IpAddr;
///
/// let set = serialization::load("allowlist.bin").unwrap();
/// assert!(set.contains("10.1.2.3".parse::<IpAddr>().unwrap()));
/// ```
pub fn load<P: AsRef<Path>>(path: P) -> Result<IpSet> {
    let file = File::open(path)?;
    // SAFETY: the mapping only lives for the duration of the decode; the
    // decoded set owns its arena and keeps nothing borrowed from it.
    let mmap = unsafe { Mmap::map(&file)? };
    let mut bytes: &[u8] = &mmap;
    let mut set = IpSet::new();
    set.deserialize(&mut bytes)?;
    Ok(set)
}
