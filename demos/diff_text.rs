//! Diff two versions of a text.
//!
//! Chunks both versions, prints the chunk lists and the diff records, then
//! rebuilds the updated text from the original and the diffs.
//!
//! Run with:
//!     cargo run --example diff_text
//!     cargo run --example diff_text -- old.txt new.txt

use std::env;
use std::fs;
use std::io::Cursor;

use chunkdelta::{Blake3Hasher, ChunkConfig, Chunker, apply_diffs, compute_diffs};

const ORIGINAL: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat.";

const UPDATED: &str = "Lorem ipsum dolor sit amet, xxxxxxxxxxx adipiscing elit, sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniamexercitation ullamco laboris nisi ut aliquip ex ea commodo consequat.";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().skip(1).collect();
    let (original, updated) = match args.as_slice() {
        [old, new] => (fs::read(old)?, fs::read(new)?),
        _ => (ORIGINAL.as_bytes().to_vec(), UPDATED.as_bytes().to_vec()),
    };

    // Small chunks so a short text splits into several pieces
    let config = ChunkConfig::new(4, 16, 7)?;

    for (name, data) in [("original", &original), ("updated", &updated)] {
        let chunks = Chunker::new(config, Blake3Hasher::new()).chunk_bytes(data)?;
        println!("{} ({} bytes, {} chunks)", name, data.len(), chunks.len());
        for chunk in &chunks {
            println!(
                "  offset={:>6}, len={:>5}, hash={}",
                chunk.offset,
                chunk.len,
                &chunk.hash.to_hex()[..16]
            );
        }
        println!();
    }

    let diffs = compute_diffs(
        &mut Cursor::new(&original),
        &mut Cursor::new(&updated),
        Blake3Hasher::new,
        &config,
    )?;

    println!("{} diffs:", diffs.len());
    for diff in &diffs {
        println!("  {}", diff);
    }

    let rebuilt = apply_diffs(&original, &diffs)?;
    assert_eq!(rebuilt, updated, "diffs must rebuild the updated text");
    println!("\nRebuilt {} bytes from the original and the diffs.", rebuilt.len());

    Ok(())
}
