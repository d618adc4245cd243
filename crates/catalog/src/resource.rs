//! Byte-addressable resource abstraction.
//!
//! The catalog core never touches the filesystem; it reads from an opaque
//! [`Resource`] handle supporting absolute-offset range reads, the way a
//! constrained host exposes a pre-embedded blob.

use std::io;

/// A byte-addressable, read-only resource.
pub trait Resource {
    /// Reads up to `buf.len()` bytes starting at absolute `offset`.
    ///
    /// Returns the number of bytes read. Partial reads are allowed near
    /// end-of-data; `Ok(0)` signals exhaustion.
    fn read_range(&self, offset: u32, buf: &mut [u8]) -> io::Result<usize>;
}

/// An in-memory resource: the whole blob held as owned bytes.
///
/// This is the embedded-blob shape the engine is designed around. The CLI
/// reads a definitions file into one of these at startup; tests build them
/// from string literals.
#[derive(Debug, Clone)]
pub struct MemResource {
    bytes: Vec<u8>,
}

impl MemResource {
    /// Wraps owned bytes as a resource.
    #[must_use]
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Resource length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the resource holds no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl From<&str> for MemResource {
    fn from(text: &str) -> Self {
        Self::new(text.as_bytes().to_vec())
    }
}

impl Resource for MemResource {
    fn read_range(&self, offset: u32, buf: &mut [u8]) -> io::Result<usize> {
        let offset = offset as usize;
        if offset >= self.bytes.len() {
            return Ok(0);
        }
        let n = buf.len().min(self.bytes.len() - offset);
        buf[..n].copy_from_slice(&self.bytes[offset..offset + n]);
        Ok(n)
    }
}
