//! Basic synchronous chunking example with the pull API.
//!
//! Run with:
//!     cargo run --example sync_basic

use std::io::Cursor;

use gearcut::{ChunkConfig, Chunker};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let text = b"hello hello hello world";

    // A stricter mask that accepts a cut right after every "hello "
    let config = ChunkConfig::new(1, 32, 32)?.with_mask_s_override(0xc);
    let mut chunker = Chunker::new(&text[..], config)?;

    println!("Chunking {:?}\n", String::from_utf8_lossy(text));
    while let Some(chunk) = chunker.next_chunk()? {
        println!(
            "  offset={:>2} len={:>2} data={:?}",
            chunk.offset,
            chunk.size(),
            String::from_utf8_lossy(&chunk.data)
        );
    }

    // Some larger pseudo-random data with the default sizes
    let data: Vec<u8> = (0..1024 * 1024u32)
        .map(|i| (i.wrapping_mul(2_654_435_761) >> 24) as u8)
        .collect();
    println!("\nChunking {} bytes of data...\n", data.len());

    let mut total_chunks = 0;
    let mut total_bytes = 0;
    for chunk in Chunker::new(Cursor::new(&data), ChunkConfig::default())? {
        let chunk = chunk?;
        total_chunks += 1;
        total_bytes += chunk.size();
        println!("Chunk {}: {}", total_chunks, chunk);
    }

    println!("\nTotal: {} chunks, {} bytes", total_chunks, total_bytes);
    if total_chunks > 0 {
        println!("Average chunk size: {} bytes", total_bytes / total_chunks);
    }

    Ok(())
}
