//! cidrset - Compact IP Prefix Sets with Longest-Match Queries
//!
//! cidrset stores hundreds of thousands of IPv4/IPv6 prefixes in a
//! cache-friendly arena and answers "does this address fall inside the
//! set?" in a handful of memory reads. Typical uses are GeoIP filters,
//! access-control lists, and routing-table membership tests running in
//! tight loops.
//!
//! # Quick Start
//!
//! ```rust
//! use cidrset::IpSet;
//! use std::net::IpAddr;
//!
//! let mut set = IpSet::new();
//! set.add("10.0.0.0".parse::<IpAddr>().unwrap(), 8);
//! set.add("2001:db8::".parse::<IpAddr>().unwrap(), 32);
//!
//! assert!(set.contains("10.1.2.3".parse::<IpAddr>().unwrap()));
//! assert!(set.contains("2001:db8::1".parse::<IpAddr>().unwrap()));
//! assert!(!set.contains("192.0.2.1".parse::<IpAddr>().unwrap()));
//!
//! // Shrink to the minimal footprint once the set is built.
//! set.compact();
//! ```
//!
//! # Key Features
//!
//! - **Arena storage**: every node is a pair of 32-bit cells in one
//!   contiguous allocation; no per-node boxes, no pointer chasing
//!   across the heap
//! - **Path compression**: runs of single-child levels collapse into
//!   skip nodes carrying up to 31 bits each
//! - **Automatic merging**: adjacent sibling prefixes fold into their
//!   covering prefix on insertion
//! - **Node recycling**: subtrees subsumed by a shorter prefix return to
//!   a free list and are reused by later insertions
//! - **Portable serialization**: a little-endian binary format with a
//!   zero-copy write path on little-endian hosts
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  IpSet (family dispatch on IpAddr)          │
//! ├──────────────────────┬──────────────────────┤
//! │  Ipv4Set (32-bit)    │  Ipv6Set (128-bit)   │
//! ├──────────────────────┴──────────────────────┤
//! │  Radix tree engine                          │
//! │  arena of u32 cells · tagged pointers ·     │
//! │  skip nodes · free list · merge pass        │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Binary Format
//!
//! Each family serializes to one blob: a little-endian `u32` byte length
//! (including itself, always a multiple of 4, `0` for an empty set)
//! followed by one little-endian `u32` per arena cell. Cell 0 duplicates
//! the length header; cell 1 is the root pointer. [`IpSet`] writes the
//! IPv4 blob then the IPv6 blob. The format is host-independent:
//! big-endian hosts byte-swap on the fly through a small buffer.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod endian;
mod tree;

/// Error types for serialization paths
pub mod error;
/// IPv4 prefix set
pub mod ipv4;
/// IPv6 prefix set
pub mod ipv6;
/// File-level save/load helpers
pub mod serialization;
/// Mixed-family wrapper
pub mod set;
/// Structural tree audit
pub mod validation;

pub use crate::error::{Error, Result};
pub use crate::ipv4::Ipv4Set;
pub use crate::ipv6::Ipv6Set;
pub use crate::serialization::{load, save};
pub use crate::set::IpSet;
pub use crate::validation::TreeReport;

/// Library version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
