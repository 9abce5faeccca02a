//! File chunking example: prints every chunk with its BLAKE3 digest.
//!
//! Run with:
//!     RUST_LOG=gearcut=debug cargo run --example sync_file -- /path/to/file

use std::env;
use std::fs::File;
use std::io::BufReader;

use gearcut::{ChunkConfig, Chunker};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "Cargo.toml".to_string());

    println!("Chunking file: {}\n", path);

    let file = File::open(&path)?;
    let metadata = file.metadata()?;
    println!("File size: {} bytes\n", metadata.len());

    let config = ChunkConfig::new(
        8 * 1024,   // min: 8 KiB
        32 * 1024,  // normal: 32 KiB
        128 * 1024, // max: 128 KiB
    )?;

    let mut chunker = Chunker::new(BufReader::new(file), config)?;

    let mut total_chunks = 0;
    let mut total_bytes = 0;

    while let Some(chunk) = chunker.next_chunk()? {
        total_chunks += 1;
        total_bytes += chunk.size();

        let hash = blake3::hash(&chunk.data);
        println!(
            "Chunk {}: offset={:>10}, len={:>8}, blake3={}",
            total_chunks,
            chunk.offset,
            chunk.size(),
            hash.to_hex()
        );
    }

    println!("\nTotal: {} chunks, {} bytes", total_chunks, total_bytes);
    if total_chunks > 0 {
        println!("Average chunk size: {} bytes", total_bytes / total_chunks);
    }

    Ok(())
}
