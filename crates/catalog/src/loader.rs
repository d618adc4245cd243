//! Record loading: bounded reads through the offset table plus the
//! label/body split.

use crate::index::{build_index, OffsetTable};
use crate::resource::Resource;
use crate::CatalogError;

/// One loaded record: the `label` and its `body` definition.
///
/// Transient by design — records are re-read from the resource on every
/// load and never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Text before the first tab (or the whole line when no tab exists).
    pub label: String,
    /// Text after the first tab; empty when suppressed or when the record
    /// has no tab.
    pub body: String,
}

/// Loads record `which` from `resource` through `table`.
///
/// The read is bounded: at most `max_len + 1` bytes are requested (the one
/// extra byte holds the record's trailing newline before it is stripped),
/// and never from outside the record's span. Content beyond `max_len`
/// bytes is silently dropped.
///
/// The label/body split always runs against the full loaded content;
/// `show_def == false` empties `body` only after the split, so the label
/// comes out identical in both modes.
pub fn load_record<R: Resource>(
    resource: &R,
    table: &OffsetTable,
    which: usize,
    max_len: usize,
    show_def: bool,
) -> Result<Record, CatalogError> {
    let (start, next) = table.span(which).ok_or(CatalogError::OutOfRange {
        index: which,
        total: table.total(),
    })?;

    let raw = (next - start) as usize;
    let mut buf = vec![0u8; raw.min(max_len + 1)];
    let read = resource.read_range(start, &mut buf)?;
    buf.truncate(read);

    // Terminated records carry their newline; an unterminated tail does not.
    if buf.last() == Some(&b'\n') {
        buf.pop();
    }
    buf.truncate(max_len);

    let (label, body) = split_on_tab(&buf);
    Ok(Record {
        label: String::from_utf8_lossy(label).into_owned(),
        body: if show_def {
            String::from_utf8_lossy(body).into_owned()
        } else {
            String::new()
        },
    })
}

/// Splits record content on its first tab byte.
///
/// Returns `(label, body)`; content with no tab yields the whole span as
/// `label` and an empty `body`.
fn split_on_tab(content: &[u8]) -> (&[u8], &[u8]) {
    match content.iter().position(|&b| b == b'\t') {
        Some(tab) => (&content[..tab], &content[tab + 1..]),
        None => (content, &[][..]),
    }
}

/// An indexed catalog: resource, offset table and load limits bundled
/// behind one handle, built once and read-only afterwards.
pub struct Catalog<R: Resource> {
    resource: R,
    index: OffsetTable,
    max_record_len: usize,
}

impl<R: Resource> Catalog<R> {
    /// Indexes `resource` and returns the ready-to-serve catalog.
    ///
    /// Indexing never fails: read errors end the scan early, and a
    /// resource with more than `capacity` lines is truncated. Callers
    /// decide whether `total() == 0` is fatal.
    pub fn open(resource: R, capacity: usize, max_record_len: usize) -> Self {
        let index = build_index(&resource, capacity);
        Self {
            resource,
            index,
            max_record_len,
        }
    }

    /// Number of records reachable through the index.
    #[must_use]
    pub fn total(&self) -> usize {
        self.index.total()
    }

    /// Returns `true` when the catalog holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// The underlying offset table.
    #[must_use]
    pub fn index(&self) -> &OffsetTable {
        &self.index
    }

    /// Loads record `which`. With `show_def == false` the record is still
    /// parsed in full but comes back with an empty body.
    pub fn load(&self, which: usize, show_def: bool) -> Result<Record, CatalogError> {
        load_record(
            &self.resource,
            &self.index,
            which,
            self.max_record_len,
            show_def,
        )
    }
}

impl<R: Resource> std::fmt::Debug for Catalog<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("total", &self.total())
            .field("max_record_len", &self.max_record_len)
            .finish()
    }
}
