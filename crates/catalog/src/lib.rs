//! # Catalog — offset-indexed record store over a flat text resource
//!
//! A catalog is a newline-delimited, tab-separated resource of
//! `label\tdefinition` records, addressed through a compact table of byte
//! offsets built in one streaming pass.
//!
//! ## Resource layout
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │ label 0 \t definition 0 \n                    │
//! │ label 1 \t definition 1 \n                    │
//! │ ...                                           │
//! │ label n-1 \t definition n-1 [\n]              │  final newline optional
//! └───────────────────────────────────────────────┘
//! ```
//!
//! The offset table records the starting byte of every record plus one
//! final sentinel (the start the next record would have, or the resource
//! length for an unterminated tail), so record `i` spans
//! `[offsets[i], offsets[i+1])` and loads with a single bounded read.
//!
//! Indexing is chunked and capacity-bounded: the resource is never held in
//! memory in full, and a resource with more lines than the capacity is
//! silently truncated to the first `capacity` records. Records themselves
//! are transient — re-read from the resource on every load, never cached.

mod index;
mod loader;
mod resource;

pub use index::{build_index, build_index_chunked, OffsetTable, CHUNK_SIZE};
pub use loader::{load_record, Catalog, Record};
pub use resource::{MemResource, Resource};

use thiserror::Error;

/// Errors surfaced by catalog loads.
///
/// Indexing never errors — a failed read ends the scan with a partial
/// table. Loads can fail on a dead read channel or a bad record index.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// An underlying read failed mid-load.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The requested record index is not in `[0, total)`.
    #[error("record {index} out of range (total {total})")]
    OutOfRange {
        /// The index that was requested.
        index: usize,
        /// Number of records actually in the catalog.
        total: usize,
    },
}
