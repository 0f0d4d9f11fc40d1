//! Strong hash implementations for chunk identity.
//!
//! The chunker only talks to [`StrongHasher`]. Two implementations ship with
//! the crate:
//!
//! - [`Blake3Hasher`] - BLAKE3 (requires `hash-blake3` feature)
//! - [`DigestHasher`] - any RustCrypto `Digest`, e.g. SHA-1 or SHA-256
//!   (requires `hash-digest` feature)

use crate::chunk::ChunkHash;

#[cfg(feature = "hash-blake3")]
mod blake3;
#[cfg(feature = "hash-digest")]
mod digest;

#[cfg(feature = "hash-blake3")]
pub use self::blake3::Blake3Hasher;
#[cfg(feature = "hash-digest")]
pub use self::digest::DigestHasher;

/// A resettable, incremental strong hash.
///
/// The chunker calls [`reset`](StrongHasher::reset) at the start of every
/// chunk, feeds every byte of the chunk through
/// [`update`](StrongHasher::update), then calls
/// [`finalize`](StrongHasher::finalize) once. After `finalize` the state is
/// unspecified until the next `reset`.
pub trait StrongHasher {
    /// Returns the hasher to its initial state.
    fn reset(&mut self);

    /// Feeds more bytes into the hash.
    fn update(&mut self, data: &[u8]);

    /// Returns the digest of everything fed since the last reset.
    fn finalize(&mut self) -> ChunkHash;
}

impl<H: StrongHasher + ?Sized> StrongHasher for &mut H {
    fn reset(&mut self) {
        (**self).reset();
    }

    fn update(&mut self, data: &[u8]) {
        (**self).update(data);
    }

    fn finalize(&mut self) -> ChunkHash {
        (**self).finalize()
    }
}

impl<H: StrongHasher + ?Sized> StrongHasher for Box<H> {
    fn reset(&mut self) {
        (**self).reset();
    }

    fn update(&mut self, data: &[u8]) {
        (**self).update(data);
    }

    fn finalize(&mut self) -> ChunkHash {
        (**self).finalize()
    }
}
