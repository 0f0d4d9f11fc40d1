//! The Chunk type - describes a content-defined chunk.

use std::fmt;

use super::ChunkHash;

/// A content-defined chunk descriptor.
///
/// A chunk names a contiguous byte range of its stream and the strong hash of
/// those bytes. It does not own the bytes; [`Diff`](crate::Diff) carries them
/// when they are needed.
///
/// # Example
///
/// ```
/// use chunkdelta::{Chunk, ChunkHash};
///
/// let chunk = Chunk::new(40, 31, ChunkHash::from_slice(b"digest"));
///
/// assert_eq!(chunk.end(), 71);
/// assert_eq!(chunk.range(), 40..71);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Chunk {
    /// The offset of the first byte in the stream.
    pub offset: u64,

    /// The number of bytes in the chunk.
    pub len: u64,

    /// The strong hash of the chunk bytes.
    pub hash: ChunkHash,
}

impl Chunk {
    /// Creates a new chunk descriptor.
    pub fn new(offset: u64, len: u64, hash: ChunkHash) -> Self {
        Self { offset, len, hash }
    }

    /// Returns the length of the chunk.
    pub fn len(&self) -> u64 {
        self.len
    }

    /// Returns true if the chunk covers no bytes.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the hash.
    pub fn hash(&self) -> &ChunkHash {
        &self.hash
    }

    /// Returns the start offset.
    pub fn start(&self) -> u64 {
        self.offset
    }

    /// Returns the end offset (exclusive).
    pub fn end(&self) -> u64 {
        self.offset + self.len
    }

    /// Returns the chunk as a range.
    pub fn range(&self) -> std::ops::Range<u64> {
        self.start()..self.end()
    }
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Chunk({} bytes @ {}, hash={})",
            self.len, self.offset, self.hash
        )
    }
}
