//! Chunk types.
//!
//! - [`Chunk`] - Content-defined chunk descriptor with offset, length, hash
//! - [`ChunkHash`] - Strong-hash digest of the chunk bytes

mod data;
mod hash;

pub use data::Chunk;
pub use hash::ChunkHash;
