// Integration tests for diff materialization and patch application
// Tests cover: payload fetch, file-backed sources, round trips, error tagging

#![cfg(feature = "hash-blake3")]

use std::fs::{self, File};
use std::io::{self, Cursor, Read, Seek, SeekFrom};

use chunkdelta::{
    Blake3Hasher, ChunkConfig, ChunkError, DeltaKind, IoPhase, Side, apply_diffs, compute_diffs,
};
use proptest::prelude::*;

#[cfg(feature = "hash-digest")]
use chunkdelta::{Diff, DigestHasher};

const LOREM_ORIGINAL: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat. Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur. Excepteur sint occaecat cupidatat non proident, sunt in culpa qui officia deserunt mollit anim id est laborum.";

const LOREM_UPDATED: &str = "Lorem ipsum dolor sit amet, xxxxxxxxxxx adipiscing elit, sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniamexercitation ullamco laboris nisi ut aliquip ex ea commodo consequat. Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur. Excepteur sint occaecat cupidatat non proident, sunt in culpa qui officia deserunt mollit anim id est laborum.";

fn small_config() -> ChunkConfig {
    ChunkConfig::new(4, 16, 7).unwrap()
}

// ============================================================================
// Reference Scenario (SHA-1)
// ============================================================================

#[cfg(feature = "hash-digest")]
fn summary(diffs: &[Diff]) -> Vec<(DeltaKind, usize, u64, u64, String, &str)> {
    diffs
        .iter()
        .map(|d| {
            (
                d.delta.kind,
                d.delta.position,
                d.delta.chunk.offset,
                d.delta.chunk.len,
                d.delta.chunk.hash.to_hex(),
                std::str::from_utf8(&d.payload).unwrap(),
            )
        })
        .collect()
}

#[cfg(feature = "hash-digest")]
fn assert_lorem_diffs(diffs: &[Diff]) {
    assert_eq!(
        summary(diffs),
        vec![
            (
                DeltaKind::Remove,
                6,
                147,
                15,
                "7aa83cbbc6a76004f1f1e72644434e26ff635c2c".to_string(),
                ", quis nostrud ",
            ),
            (
                DeltaKind::Remove,
                1,
                40,
                31,
                "d78f5778d5b6a19fe3e8273e9575e781796ba8f2".to_string(),
                "adipiscing elit, sed do eiusmod",
            ),
            (
                DeltaKind::Remove,
                0,
                0,
                40,
                "922474181e529d97307d8df727fc5cd18d7e3508".to_string(),
                "Lorem ipsum dolor sit amet, consectetur ",
            ),
            (
                DeltaKind::Add,
                0,
                0,
                71,
                "1eb611d7c6d236c622273d0c6d02d148fd70f7fb".to_string(),
                "Lorem ipsum dolor sit amet, xxxxxxxxxxx adipiscing elit, sed do eiusmod",
            ),
        ]
    );
}

#[test]
#[cfg(feature = "hash-digest")]
fn test_lorem_diffs_from_memory() {
    let diffs = compute_diffs(
        &mut Cursor::new(LOREM_ORIGINAL),
        &mut Cursor::new(LOREM_UPDATED),
        DigestHasher::<sha1::Sha1>::new,
        &small_config(),
    )
    .unwrap();

    assert_lorem_diffs(&diffs);
}

#[test]
#[cfg(feature = "hash-digest")]
fn test_lorem_diffs_from_files() {
    let dir = tempfile::tempdir().unwrap();
    let original_path = dir.path().join("original.txt");
    let updated_path = dir.path().join("updated.txt");
    fs::write(&original_path, LOREM_ORIGINAL).unwrap();
    fs::write(&updated_path, LOREM_UPDATED).unwrap();

    let mut original = File::open(&original_path).unwrap();
    let mut updated = File::open(&updated_path).unwrap();

    let diffs = compute_diffs(
        &mut original,
        &mut updated,
        DigestHasher::<sha1::Sha1>::new,
        &small_config(),
    )
    .unwrap();

    assert_lorem_diffs(&diffs);
}

#[test]
fn test_lorem_round_trip() {
    let diffs = compute_diffs(
        &mut Cursor::new(LOREM_ORIGINAL),
        &mut Cursor::new(LOREM_UPDATED),
        Blake3Hasher::new,
        &small_config(),
    )
    .unwrap();

    let rebuilt = apply_diffs(LOREM_ORIGINAL.as_bytes(), &diffs).unwrap();
    assert_eq!(rebuilt, LOREM_UPDATED.as_bytes());

    let reverse = compute_diffs(
        &mut Cursor::new(LOREM_UPDATED),
        &mut Cursor::new(LOREM_ORIGINAL),
        Blake3Hasher::new,
        &small_config(),
    )
    .unwrap();

    let restored = apply_diffs(LOREM_UPDATED.as_bytes(), &reverse).unwrap();
    assert_eq!(restored, LOREM_ORIGINAL.as_bytes());
}

// ============================================================================
// Edge Cases
// ============================================================================

#[test]
fn test_identical_inputs_produce_no_diffs() {
    let diffs = compute_diffs(
        &mut Cursor::new(LOREM_ORIGINAL),
        &mut Cursor::new(LOREM_ORIGINAL),
        Blake3Hasher::new,
        &small_config(),
    )
    .unwrap();

    assert!(diffs.is_empty());
}

#[test]
fn test_empty_original() {
    let diffs = compute_diffs(
        &mut Cursor::new(Vec::new()),
        &mut Cursor::new(LOREM_UPDATED),
        Blake3Hasher::new,
        &small_config(),
    )
    .unwrap();

    assert!(diffs.iter().all(|d| d.delta.kind == DeltaKind::Add));
    let total: usize = diffs.iter().map(|d| d.payload.len()).sum();
    assert_eq!(total, LOREM_UPDATED.len());
    assert_eq!(apply_diffs(b"", &diffs).unwrap(), LOREM_UPDATED.as_bytes());
}

#[test]
fn test_diffs_rejected_by_wrong_base() {
    let diffs = compute_diffs(
        &mut Cursor::new(LOREM_ORIGINAL),
        &mut Cursor::new(LOREM_UPDATED),
        Blake3Hasher::new,
        &small_config(),
    )
    .unwrap();

    let err = apply_diffs(LOREM_UPDATED.as_bytes(), &diffs).unwrap_err();
    assert!(matches!(err, ChunkError::InvalidDiff { .. }));
}

// ============================================================================
// Error Propagation
// ============================================================================

/// A seekable source that shrinks after it has been chunked.
struct Shrinking {
    inner: Cursor<Vec<u8>>,
    truncate_after: usize,
    reads: usize,
}

impl Read for Shrinking {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.reads += 1;
        if self.reads == self.truncate_after {
            self.inner.get_mut().clear();
        }
        self.inner.read(buf)
    }
}

impl Seek for Shrinking {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.inner.seek(pos)
    }
}

#[test]
fn test_payload_fetch_failure_is_tagged() {
    // Chunking takes two reads (data, then end of input); the payload read
    // finds the source truncated.
    let mut updated = Shrinking {
        inner: Cursor::new(LOREM_UPDATED.as_bytes().to_vec()),
        truncate_after: 3,
        reads: 0,
    };

    let err = compute_diffs(
        &mut Cursor::new(LOREM_ORIGINAL),
        &mut updated,
        Blake3Hasher::new,
        &small_config(),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        ChunkError::Side {
            side: Side::Updated,
            ..
        }
    ));
    assert!(matches!(err.phase(), Some(IoPhase::PayloadFetch { .. })));
    assert_eq!(
        err.io_error().map(|e| e.kind()),
        Some(io::ErrorKind::UnexpectedEof)
    );
}

#[test]
fn test_invalid_config_rejected() {
    let config = ChunkConfig::default().with_divisor(1);
    let err = compute_diffs(
        &mut Cursor::new(LOREM_ORIGINAL),
        &mut Cursor::new(LOREM_UPDATED),
        Blake3Hasher::new,
        &config,
    )
    .unwrap_err();

    assert!(matches!(err, ChunkError::InvalidConfig { .. }));
}

// ============================================================================
// Properties
// ============================================================================

#[derive(Debug, Clone)]
enum Edit {
    Insert(usize, Vec<u8>),
    Delete(usize, usize),
    Replace(usize, Vec<u8>),
}

fn apply_edit(data: &[u8], edit: &Edit) -> Vec<u8> {
    let mut out = data.to_vec();
    let clamp = |at: usize| at % (data.len() + 1);
    match edit {
        Edit::Insert(at, bytes) => {
            let at = clamp(*at);
            out.splice(at..at, bytes.iter().copied());
        }
        Edit::Delete(at, len) => {
            let at = clamp(*at);
            let end = (at + len).min(out.len());
            out.drain(at..end);
        }
        Edit::Replace(at, bytes) => {
            let at = clamp(*at);
            let end = (at + bytes.len()).min(out.len());
            out.splice(at..end, bytes.iter().copied());
        }
    }
    out
}

fn edit() -> impl Strategy<Value = Edit> {
    let bytes = proptest::collection::vec(any::<u8>(), 1..64);
    prop_oneof![
        (any::<usize>(), bytes.clone()).prop_map(|(at, b)| Edit::Insert(at, b)),
        (any::<usize>(), 1usize..64).prop_map(|(at, len)| Edit::Delete(at, len)),
        (any::<usize>(), bytes).prop_map(|(at, b)| Edit::Replace(at, b)),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_apply_rebuilds_updated(
        original in proptest::collection::vec(any::<u8>(), 0..2048),
        edits in proptest::collection::vec(edit(), 1..4),
    ) {
        let updated = edits.iter().fold(original.clone(), |data, e| apply_edit(&data, e));

        let diffs = compute_diffs(
            &mut Cursor::new(&original),
            &mut Cursor::new(&updated),
            Blake3Hasher::new,
            &ChunkConfig::new(8, 32, 7).unwrap(),
        )
        .unwrap();

        for diff in &diffs {
            prop_assert_eq!(diff.payload.len() as u64, diff.delta.chunk.len);
        }
        prop_assert_eq!(apply_diffs(&original, &diffs).unwrap(), updated);
    }
}
