//! Self-contained diff records and patch application.
//!
//! - [`compute_diffs`] - Chunks two sources, reconciles them and fetches payloads
//! - [`apply_diffs`] - Rebuilds the updated data from the original and a diff list
//! - [`ReadAt`] - Random-access source used for payload fetches

mod read_at;

use std::fmt;

use bytes::Bytes;
use tracing::debug;

use crate::chunk::Chunk;
use crate::chunker::Chunker;
use crate::config::ChunkConfig;
use crate::delta::{Delta, DeltaKind, reconcile};
use crate::error::{ChunkError, IoPhase, Side};
use crate::hash::StrongHasher;

pub use read_at::ReadAt;
use read_at::ReadAtReader;

/// A delta together with the bytes it removes or adds.
///
/// `payload.len()` always equals `delta.chunk.len`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diff {
    /// The delta this payload belongs to.
    pub delta: Delta,
    /// The chunk's bytes, read from the original (Remove) or updated (Add) data.
    pub payload: Bytes,
}

impl fmt::Display for Diff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.delta, String::from_utf8_lossy(&self.payload))
    }
}

/// Computes the diff records that turn `original` into `updated`.
///
/// Both sources are chunked from offset 0 with a fresh hasher from
/// `new_hasher`, the chunk sequences are reconciled, and each delta's payload
/// is read back from its source. The result keeps the reconciler's order.
///
/// Any failure aborts the run. I/O errors are tagged with the [`Side`] they
/// came from.
///
/// # Example
///
/// ```
/// use chunkdelta::{Blake3Hasher, ChunkConfig, compute_diffs};
/// use std::io::Cursor;
///
/// let mut original = Cursor::new(b"the quick brown fox jumps over the lazy dog".to_vec());
/// let mut updated = Cursor::new(b"the quick brown cat jumps over the lazy dog".to_vec());
/// let config = ChunkConfig::new(4, 8, 7)?;
///
/// let diffs = compute_diffs(&mut original, &mut updated, Blake3Hasher::new, &config)?;
/// for diff in &diffs {
///     assert_eq!(diff.payload.len() as u64, diff.delta.chunk.len);
/// }
/// # Ok::<(), chunkdelta::ChunkError>(())
/// ```
pub fn compute_diffs<O, U, H, F>(
    original: &mut O,
    updated: &mut U,
    mut new_hasher: F,
    config: &ChunkConfig,
) -> Result<Vec<Diff>, ChunkError>
where
    O: ReadAt + ?Sized,
    U: ReadAt + ?Sized,
    H: StrongHasher,
    F: FnMut() -> H,
{
    config.validate()?;

    let original_chunks =
        chunk_source(original, new_hasher(), config).map_err(|e| e.on(Side::Original))?;
    let updated_chunks =
        chunk_source(updated, new_hasher(), config).map_err(|e| e.on(Side::Updated))?;

    let deltas = reconcile(&original_chunks, &updated_chunks);

    let mut diffs = Vec::with_capacity(deltas.len());
    let mut payload_bytes = 0u64;
    for delta in deltas {
        let payload = match delta.kind {
            DeltaKind::Remove => {
                fetch(original, &delta.chunk).map_err(|e| e.on(Side::Original))?
            }
            DeltaKind::Add => fetch(updated, &delta.chunk).map_err(|e| e.on(Side::Updated))?,
        };
        payload_bytes += payload.len() as u64;
        diffs.push(Diff { delta, payload });
    }

    debug!(
        original_chunks = original_chunks.len(),
        updated_chunks = updated_chunks.len(),
        diffs = diffs.len(),
        payload_bytes,
        "computed diffs"
    );

    Ok(diffs)
}

/// Rebuilds the updated data by applying `diffs` to `original`.
///
/// `diffs` must be in the order produced by [`compute_diffs`]: removals by
/// descending original position, then additions by ascending updated
/// position. Each removal's payload must match the bytes it removes.
///
/// # Example
///
/// ```
/// use chunkdelta::{Blake3Hasher, ChunkConfig, apply_diffs, compute_diffs};
/// use std::io::Cursor;
///
/// let original = b"one two three four five six seven".to_vec();
/// let updated = b"one two 3 four five six seven eight".to_vec();
/// let config = ChunkConfig::new(4, 8, 7)?;
///
/// let diffs = compute_diffs(
///     &mut Cursor::new(&original),
///     &mut Cursor::new(&updated),
///     Blake3Hasher::new,
///     &config,
/// )?;
///
/// assert_eq!(apply_diffs(&original, &diffs)?, updated);
/// # Ok::<(), chunkdelta::ChunkError>(())
/// ```
pub fn apply_diffs(original: &[u8], diffs: &[Diff]) -> Result<Vec<u8>, ChunkError> {
    let mut data = original.to_vec();

    for diff in diffs {
        let chunk = &diff.delta.chunk;
        if diff.payload.len() as u64 != chunk.len {
            return Err(ChunkError::invalid_diff(format!(
                "payload of {} is {} bytes",
                diff.delta,
                diff.payload.len()
            )));
        }

        match diff.delta.kind {
            DeltaKind::Remove => {
                if chunk.end() > data.len() as u64 {
                    return Err(ChunkError::invalid_diff(format!(
                        "{} ends past the data ({} bytes)",
                        diff.delta,
                        data.len()
                    )));
                }
                let range = chunk.offset as usize..chunk.end() as usize;
                if data[range.clone()] != diff.payload[..] {
                    return Err(ChunkError::invalid_diff(format!(
                        "{} does not match the data at offset {}",
                        diff.delta, chunk.offset
                    )));
                }
                data.drain(range);
            }
            DeltaKind::Add => {
                if chunk.offset > data.len() as u64 {
                    return Err(ChunkError::invalid_diff(format!(
                        "{} starts past the data ({} bytes)",
                        diff.delta,
                        data.len()
                    )));
                }
                let at = chunk.offset as usize;
                data.splice(at..at, diff.payload.iter().copied());
            }
        }
    }

    Ok(data)
}

fn chunk_source<S, H>(
    source: &mut S,
    hasher: H,
    config: &ChunkConfig,
) -> Result<Vec<Chunk>, ChunkError>
where
    S: ReadAt + ?Sized,
    H: StrongHasher,
{
    Chunker::new(*config, hasher).chunk_all(ReadAtReader::new(source))
}

fn fetch<S: ReadAt + ?Sized>(source: &mut S, chunk: &Chunk) -> Result<Bytes, ChunkError> {
    let mut buf = vec![0u8; chunk.len as usize];
    source.read_exact_at(chunk.offset, &mut buf).map_err(|e| {
        ChunkError::io(
            IoPhase::PayloadFetch {
                offset: chunk.offset,
                len: chunk.len,
            },
            e,
        )
    })?;
    Ok(Bytes::from(buf))
}
