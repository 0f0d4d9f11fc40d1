#![no_main]

use libfuzzer_sys::fuzz_target;
use chunkdelta::{Blake3Hasher, ChunkConfig, Chunker};

fuzz_target!(|data: Vec<u8>| {
    // Test with various chunk configurations
    let configs = [
        // Small chunks
        ChunkConfig::new(4, 16, 7).unwrap(),
        // Large base wraps the fingerprint
        ChunkConfig::new(48, 256, 257).unwrap(),
        // Default config
        ChunkConfig::default(),
    ];

    for config in configs {
        let chunks = Chunker::new(config, Blake3Hasher::new()).chunk_bytes(&data).unwrap();

        // Verify: only the last chunk may be shorter than the window
        for chunk in chunks.iter().rev().skip(1) {
            assert!(chunk.len >= config.min_size() as u64);
        }

        // Verify: chunks tile the input and hash their own bytes
        let mut expected_offset = 0u64;
        for chunk in &chunks {
            assert_eq!(chunk.offset, expected_offset);
            let bytes = &data[chunk.offset as usize..chunk.end() as usize];
            assert_eq!(chunk.hash, Blake3Hasher::hash(bytes));
            expected_offset += chunk.len;
        }
        assert_eq!(expected_offset, data.len() as u64);

        // Verify: determinism - same input produces same chunks
        let again = Chunker::new(config, Blake3Hasher::new()).chunk_bytes(&data).unwrap();
        assert_eq!(chunks, again);
    }
});
