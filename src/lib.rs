//! chunkdelta
//!
//! Content-defined chunking and chunk-level deltas for Rust.
//!
//! `chunkdelta` splits byte streams into content-defined chunks, compares two
//! chunk sequences, and produces self-contained diff records that turn one
//! stream into the other. It is a small primitive for:
//!
//! - delta synchronization
//! - incremental backups
//! - change detection between file versions
//!
//! The pipeline has four stages:
//!
//! 1. a polynomial rolling fingerprint ([`fingerprint`], [`slide`]) locates
//!    breakpoints;
//! 2. the [`Chunker`] turns a [`std::io::Read`] into [`Chunk`]s identified by
//!    a [`StrongHasher`];
//! 3. [`reconcile`] turns two chunk sequences into [`Delta`]s, following
//!    chunks that shifted because of insertions or removals;
//! 4. [`compute_diffs`] attaches the payload bytes to each delta, and
//!    [`apply_diffs`] replays them.
//!
//! The crate intentionally:
//! - does NOT manage files or paths
//! - does NOT manage concurrency
//! - does NOT persist chunks or diffs
//!
//! # Chunking
//!
//! ```no_run
//! use std::fs::File;
//! use chunkdelta::{Blake3Hasher, ChunkConfig, Chunker};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let file = File::open("data.bin")?;
//!     let chunker = Chunker::new(ChunkConfig::default(), Blake3Hasher::new());
//!
//!     for chunk in chunker.chunk(file) {
//!         let chunk = chunk?;
//!         println!("chunk {} bytes, hash {}", chunk.len, chunk.hash);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Diffing
//!
//! ```no_run
//! use std::fs::File;
//! use chunkdelta::{Blake3Hasher, ChunkConfig, compute_diffs};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut original = File::open("v1.bin")?;
//!     let mut updated = File::open("v2.bin")?;
//!
//!     let diffs = compute_diffs(
//!         &mut original,
//!         &mut updated,
//!         Blake3Hasher::new,
//!         &ChunkConfig::default(),
//!     )?;
//!
//!     for diff in &diffs {
//!         println!("{} ({} bytes)", diff.delta, diff.payload.len());
//!     }
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod chunk;
mod chunker;
mod config;
mod delta;
mod diff;
mod error;

mod buffer; // internal (thread-local reuse)
mod cdc; // rolling fingerprint
mod hash; // strong hash sinks

//
// Public surface
//

pub use cdc::{RabinWindow, fingerprint, is_breakpoint, slide};
pub use chunk::{Chunk, ChunkHash};
pub use chunker::{ChunkIter, Chunker};
pub use config::{ChunkConfig, DEFAULT_BASE, DEFAULT_DIVISOR, DEFAULT_MIN_CHUNK_SIZE};
pub use delta::{Delta, DeltaKind, reconcile};
pub use diff::{Diff, ReadAt, apply_diffs, compute_diffs};
pub use error::{ChunkError, IoPhase, Side};
pub use hash::StrongHasher;

#[cfg(feature = "hash-blake3")]
pub use hash::Blake3Hasher;
#[cfg(feature = "hash-digest")]
pub use hash::DigestHasher;
