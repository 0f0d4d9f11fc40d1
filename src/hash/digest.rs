//! Adapter for RustCrypto `digest` hash functions.

use digest::Digest;

use super::StrongHasher;
use crate::chunk::ChunkHash;

/// A [`StrongHasher`] backed by any [`Digest`] implementation.
///
/// ```
/// use chunkdelta::{ChunkConfig, Chunker, DigestHasher};
///
/// let hasher = DigestHasher::<sha1::Sha1>::new();
/// let chunks = Chunker::new(ChunkConfig::new(4, 16, 7)?, hasher).chunk_bytes(b"hello world")?;
/// assert_eq!(chunks[0].hash.len(), 20);
/// # Ok::<(), chunkdelta::ChunkError>(())
/// ```
#[derive(Debug, Clone)]
pub struct DigestHasher<D> {
    state: D,
}

impl<D: Digest> DigestHasher<D> {
    /// Creates a new hasher.
    pub fn new() -> Self {
        Self { state: D::new() }
    }
}

impl<D: Digest> Default for DigestHasher<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Digest> StrongHasher for DigestHasher<D> {
    fn reset(&mut self) {
        self.state = D::new();
    }

    fn update(&mut self, data: &[u8]) {
        Digest::update(&mut self.state, data);
    }

    fn finalize(&mut self) -> ChunkHash {
        let state = std::mem::replace(&mut self.state, D::new());
        ChunkHash::from_slice(&state.finalize())
    }
}
