#![no_main]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;
use chunkdelta::{Blake3Hasher, ChunkConfig, apply_diffs, compute_diffs};

fuzz_target!(|input: (Vec<u8>, Vec<u8>)| {
    let (original, updated) = input;
    let config = ChunkConfig::new(4, 16, 7).unwrap();

    let diffs = compute_diffs(
        &mut Cursor::new(&original),
        &mut Cursor::new(&updated),
        Blake3Hasher::new,
        &config,
    )
    .unwrap();

    // Verify: payloads match their chunk descriptors
    for diff in &diffs {
        assert_eq!(diff.payload.len() as u64, diff.delta.chunk.len);
    }

    // Verify: replaying the diffs rebuilds the updated data
    assert_eq!(apply_diffs(&original, &diffs).unwrap(), updated);
});
