//! Chunking engine for processing byte streams.
//!
//! - [`Chunker`] - Configuration plus strong hasher, consumed to start chunking
//! - [`ChunkIter`] - Lazy iterator of chunks over a [`std::io::Read`] source

mod iter;

pub use iter::{ChunkIter, Chunker};
