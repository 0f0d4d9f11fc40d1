//! BLAKE3-based chunk hashing implementation.

use super::StrongHasher;
use crate::chunk::ChunkHash;

/// A hasher that computes BLAKE3 hashes.
#[derive(Debug, Clone)]
pub struct Blake3Hasher {
    state: blake3::Hasher,
}

impl Blake3Hasher {
    /// Creates a new hasher.
    pub fn new() -> Self {
        Self {
            state: blake3::Hasher::new(),
        }
    }

    /// Convenience method to hash data in one shot.
    pub fn hash(data: &[u8]) -> ChunkHash {
        ChunkHash::from_slice(blake3::hash(data).as_bytes())
    }
}

impl Default for Blake3Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl StrongHasher for Blake3Hasher {
    fn reset(&mut self) {
        self.state.reset();
    }

    fn update(&mut self, data: &[u8]) {
        self.state.update(data);
    }

    fn finalize(&mut self) -> ChunkHash {
        ChunkHash::from_slice(self.state.finalize().as_bytes())
    }
}
