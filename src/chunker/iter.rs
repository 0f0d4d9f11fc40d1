//! Core chunking engine - Chunker and ChunkIter.
//!
//! This module implements the breakpoint-driven chunk scanner. It provides two
//! main types:
//!
//! - [`Chunker`] - Configures and initiates chunking operations
//! - [`ChunkIter`] - Iterator that yields chunks from a [`std::io::Read`] source
//!
//! # Example
//!
//! ```no_run
//! use chunkdelta::{Chunker, ChunkConfig, Blake3Hasher};
//! use std::fs::File;
//!
//! let file = File::open("data.bin")?;
//! let chunker = Chunker::new(ChunkConfig::default(), Blake3Hasher::new());
//!
//! for chunk in chunker.chunk(file) {
//!     let chunk = chunk?;
//!     println!("Chunk: {} bytes @ {}", chunk.len, chunk.offset);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::io::Read;

use tracing::{debug, trace};

use crate::buffer::Buffer;
use crate::cdc::RabinWindow;
use crate::chunk::Chunk;
use crate::config::ChunkConfig;
use crate::error::{ChunkError, IoPhase};
use crate::hash::StrongHasher;

#[cfg(feature = "hash-blake3")]
use crate::hash::Blake3Hasher;

/// A chunker that splits byte streams into content-defined chunks.
///
/// `Chunker` pairs a [`ChunkConfig`] with the [`StrongHasher`] that will
/// identify each chunk. Chunking consumes the chunker, since the hasher is
/// driven by the resulting iterator.
///
/// # Example
///
/// ```
/// use chunkdelta::{Chunker, ChunkConfig, DigestHasher};
/// use std::io::Cursor;
///
/// let data = b"some data to chunk";
/// let chunker = Chunker::new(ChunkConfig::new(4, 16, 7)?, DigestHasher::<sha1::Sha1>::new());
/// let chunks = chunker.chunk_all(Cursor::new(&data[..]))?;
///
/// let total: u64 = chunks.iter().map(|c| c.len).sum();
/// assert_eq!(total, data.len() as u64);
/// # Ok::<(), chunkdelta::ChunkError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Chunker<H> {
    config: ChunkConfig,
    hasher: H,
}

impl<H: StrongHasher> Chunker<H> {
    /// Creates a new chunker with the given configuration and strong hasher.
    pub fn new(config: ChunkConfig, hasher: H) -> Self {
        Self { config, hasher }
    }

    /// Returns the configuration used by this chunker.
    pub fn config(&self) -> &ChunkConfig {
        &self.config
    }

    /// Creates a chunking iterator from a reader.
    ///
    /// The iterator lazily reads from the reader and yields chunks as
    /// breakpoints are found. An invalid configuration is reported as the
    /// first item.
    pub fn chunk<R: Read>(self, reader: R) -> ChunkIter<R, H> {
        ChunkIter::new(reader, self.config, self.hasher)
    }

    /// Chunks a whole stream, returning every chunk or the first error.
    pub fn chunk_all<R: Read>(self, reader: R) -> Result<Vec<Chunk>, ChunkError> {
        self.chunk(reader).collect()
    }

    /// Chunks an in-memory buffer.
    ///
    /// Reading from a slice cannot fail, so the only possible error is
    /// [`ChunkError::InvalidConfig`].
    ///
    /// # Example
    ///
    /// ```
    /// use chunkdelta::{Chunker, ChunkConfig, Blake3Hasher};
    ///
    /// let chunker = Chunker::new(ChunkConfig::default(), Blake3Hasher::new());
    /// let chunks = chunker.chunk_bytes(b"hello world")?;
    ///
    /// assert_eq!(chunks.len(), 1);
    /// assert_eq!(chunks[0].len, 11);
    /// # Ok::<(), chunkdelta::ChunkError>(())
    /// ```
    pub fn chunk_bytes(self, data: &[u8]) -> Result<Vec<Chunk>, ChunkError> {
        self.chunk_all(data)
    }
}

#[cfg(feature = "hash-blake3")]
impl Default for Chunker<Blake3Hasher> {
    fn default() -> Self {
        Self::new(ChunkConfig::default(), Blake3Hasher::new())
    }
}

/// An iterator that yields chunks from a reader.
///
/// For every chunk, `ChunkIter` resets the strong hasher, fills the
/// fingerprint window with `min_size` bytes, then slides the window one byte
/// at a time until the fingerprint hits a breakpoint or the input ends. Every
/// consumed byte goes to the strong hasher, so a chunk's hash covers all of
/// its bytes, not only the final window.
///
/// Input is read through a pooled 64 KiB read-ahead buffer. After an error the
/// iterator is fused and yields `None`.
pub struct ChunkIter<R, H> {
    reader: R,
    hasher: H,
    buffer: Buffer,
    window: RabinWindow,
    offset: u64,
    emitted: usize,
    invalid_config: Option<ChunkError>,
    eof: bool,
    finished: bool,
}

impl<R: Read, H: StrongHasher> ChunkIter<R, H> {
    /// Creates a new chunk iterator.
    fn new(reader: R, config: ChunkConfig, hasher: H) -> Self {
        Self {
            reader,
            hasher,
            buffer: Buffer::take(),
            window: RabinWindow::from_config(&config),
            offset: 0,
            emitted: 0,
            invalid_config: config.validate().err(),
            eof: false,
            finished: false,
        }
    }

    /// Returns the offset at which the next chunk will start.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Scans the next chunk, or returns `None` once the stream is exhausted.
    fn next_chunk(&mut self) -> Result<Option<Chunk>, ChunkError> {
        if self.eof {
            return Ok(None);
        }

        self.hasher.reset();
        self.window.reset();
        let mut len = 0u64;

        // Fill the initial window
        while !self.window.is_full() {
            let available = self
                .buffer
                .fill_buf(&mut self.reader)
                .map_err(|e| ChunkError::io(IoPhase::WindowFill, e))?;
            if available.is_empty() {
                self.eof = true;
                break;
            }
            let taken = self.window.fill(available);
            self.hasher.update(&available[..taken]);
            self.buffer.consume(taken);
            len += taken as u64;
        }

        if len == 0 {
            return Ok(None);
        }

        self.window.init();

        // Slide until a breakpoint or the end of input
        while !self.eof && !self.window.is_breakpoint() {
            let available = self
                .buffer
                .fill_buf(&mut self.reader)
                .map_err(|e| ChunkError::io(IoPhase::Slide, e))?;
            if available.is_empty() {
                self.eof = true;
                break;
            }

            let mut used = 0;
            for &byte in available {
                used += 1;
                if self.window.roll(byte) {
                    break;
                }
            }
            self.hasher.update(&available[..used]);
            self.buffer.consume(used);
            len += used as u64;
        }

        Ok(Some(self.emit_chunk(len)))
    }

    /// Closes the current chunk and advances the stream offset.
    fn emit_chunk(&mut self, len: u64) -> Chunk {
        let chunk = Chunk::new(self.offset, len, self.hasher.finalize());
        trace!(offset = chunk.offset, len = chunk.len, hash = %chunk.hash, "chunk emitted");

        self.offset += len;
        self.emitted += 1;
        chunk
    }
}

impl<R: Read, H: StrongHasher> Iterator for ChunkIter<R, H> {
    type Item = Result<Chunk, ChunkError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        if let Some(err) = self.invalid_config.take() {
            self.finished = true;
            return Some(Err(err));
        }

        match self.next_chunk() {
            Ok(Some(chunk)) => Some(Ok(chunk)),
            Ok(None) => {
                self.finished = true;
                debug!(
                    chunks = self.emitted,
                    bytes = self.offset,
                    "finished chunking stream"
                );
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}
