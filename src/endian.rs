//! Endianness handling for the serialized arena.
//!
//! The on-disk format is little-endian (native to x86/ARM). On
//! little-endian hosts the arena's `u32` cells are written through a
//! zerocopy byte view with no conversion at all; the portable fallback
//! converts cell by cell through a small intermediate buffer. The
//! dispatch is decided at compile time so the fast path inlines to a
//! single `write_all`.
//!
//! The read side always normalizes with `u32::from_le`, which compiles
//! away entirely on little-endian targets and becomes an in-place byte
//! swap on big-endian ones.

use std::io::{self, Read, Write};

use zerocopy::IntoBytes;

/// Upper bound on the intermediate buffer used by the portable paths.
const CHUNK_BYTES: usize = 4096;

/// Writes `cells` as little-endian u32 values.
pub(crate) fn write_cells<W: Write>(writer: &mut W, cells: &[u32]) -> io::Result<()> {
    if cfg!(target_endian = "little") {
        writer.write_all(cells.as_bytes())
    } else {
        write_cells_chunked(writer, cells)
    }
}

/// Portable write path: converts cells to little-endian through a stack
/// buffer, at most [`CHUNK_BYTES`] at a time. Works on any host; only
/// big-endian ones route normal writes through it.
pub(crate) fn write_cells_chunked<W: Write>(writer: &mut W, cells: &[u32]) -> io::Result<()> {
    let mut buf = [0u8; CHUNK_BYTES];
    for cells_chunk in cells.chunks(CHUNK_BYTES / 4) {
        let filled = &mut buf[..cells_chunk.len() * 4];
        for (slot, &cell) in filled.chunks_exact_mut(4).zip(cells_chunk) {
            slot.copy_from_slice(&cell.to_le_bytes());
        }
        writer.write_all(filled)?;
    }
    Ok(())
}

/// Fills `cells` from a little-endian byte stream, leaving the first
/// `skip` destination bytes zeroed (the serialized arena duplicates the
/// length header in cell 0, which the caller discards).
pub(crate) fn read_cells<R: Read>(reader: &mut R, cells: &mut [u32], skip: usize) -> io::Result<()> {
    reader.read_exact(&mut cells.as_mut_bytes()[skip..])?;
    for cell in cells.iter_mut() {
        *cell = u32::from_le(*cell);
    }
    Ok(())
}
