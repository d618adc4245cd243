//! Streaming offset-index construction.
//!
//! One pass over the resource in fixed-size chunks records where every
//! record starts. Memory stays bounded: one chunk buffer plus at most
//! `capacity + 1` offsets, regardless of resource size.

use crate::resource::Resource;

/// Chunk size used by [`build_index`], in bytes.
pub const CHUNK_SIZE: usize = 1024;

/// Ordered table of record start offsets.
///
/// Entry `i` is the first byte of record `i`; the final entry is a
/// sentinel marking one past the last record. Entries are strictly
/// increasing and the first is always `0`. Built once, immutable after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffsetTable {
    offsets: Vec<u32>,
}

impl OffsetTable {
    /// Number of complete records represented: one less than the entry
    /// count. Zero for an empty resource.
    #[must_use]
    pub fn total(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Returns `true` if the table represents no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// The raw offset entries, including the final sentinel.
    #[must_use]
    pub fn offsets(&self) -> &[u32] {
        &self.offsets
    }

    /// Byte span `[start, next)` of record `which`, where `next` is the
    /// following record's start (or the end sentinel). The span includes
    /// the record's trailing newline when it has one. `None` when `which`
    /// is out of range.
    #[must_use]
    pub fn span(&self, which: usize) -> Option<(u32, u32)> {
        if which >= self.total() {
            return None;
        }
        Some((self.offsets[which], self.offsets[which + 1]))
    }
}

/// Builds the offset table for `resource`, recording at most `capacity`
/// records. Reads [`CHUNK_SIZE`]-byte chunks; see [`build_index_chunked`].
pub fn build_index<R: Resource>(resource: &R, capacity: usize) -> OffsetTable {
    build_index_chunked(resource, capacity, CHUNK_SIZE)
}

/// Builds the offset table reading `chunk_size` bytes per request.
///
/// Truncation at `capacity` is decided per newline, not per chunk, so the
/// resulting table is identical for any chunk size. Once full, the scan
/// stops immediately and the tail pass is skipped. A failed read is
/// treated as end-of-data: indexing finishes with whatever was
/// accumulated, and the caller decides whether an empty table is fatal.
///
/// # Panics
///
/// Panics if `capacity` or `chunk_size` is zero.
pub fn build_index_chunked<R: Resource>(
    resource: &R,
    capacity: usize,
    chunk_size: usize,
) -> OffsetTable {
    assert!(capacity > 0, "capacity must be > 0");
    assert!(chunk_size > 0, "chunk_size must be > 0");

    let mut offsets = Vec::with_capacity(capacity + 1);
    offsets.push(0u32);

    let mut buf = vec![0u8; chunk_size];
    let mut start: u32 = 0;
    let mut filled = false;

    while !filled {
        let read = match resource.read_range(start, &mut buf) {
            Ok(0) | Err(_) => break,
            Ok(n) => n,
        };
        for (j, &byte) in buf[..read].iter().enumerate() {
            if byte == b'\n' {
                offsets.push(start + j as u32 + 1);
                if offsets.len() >= capacity + 1 {
                    filled = true;
                    break;
                }
            }
        }
        start += read as u32;
    }

    // Unterminated tail: make the last partial record addressable by
    // appending the end-of-resource position as the sentinel.
    if !filled && offsets.last().copied() != Some(start) {
        offsets.push(start);
    }

    OffsetTable { offsets }
}
