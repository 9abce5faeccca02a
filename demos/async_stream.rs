//! Concurrent async chunking example.
//!
//! Every stream gets its own `ChunkStream`; sessions share nothing, so they
//! can run side by side on one runtime.
//!
//! Run with:
//!     cargo run --example async_stream --features async-io

use futures_util::StreamExt;
use gearcut::{ChunkConfig, ChunkError, chunk_async};

async fn process_stream(
    stream_id: usize,
    data: Vec<u8>,
    config: ChunkConfig,
) -> Result<(usize, usize, usize), ChunkError> {
    let mut stream = chunk_async(&data[..], config)?;
    let mut chunk_count = 0;
    let mut total_bytes = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        chunk_count += 1;
        total_bytes += chunk.size();
    }

    Ok((stream_id, chunk_count, total_bytes))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let streams: Vec<Vec<u8>> = vec![
        (0..50_000u32).map(|i| (i.wrapping_mul(2_654_435_761) >> 24) as u8).collect(),
        (0..100_000u32).map(|i| (i.wrapping_mul(40_503) >> 7) as u8).collect(),
        vec![0u8; 150_000],
    ];

    println!("Processing {} streams concurrently...\n", streams.len());

    let config = ChunkConfig::new(
        4 * 1024,  // min: 4 KiB
        16 * 1024, // normal: 16 KiB
        64 * 1024, // max: 64 KiB
    )?;

    let handles: Vec<_> = streams
        .into_iter()
        .enumerate()
        .map(|(stream_id, data)| tokio::spawn(process_stream(stream_id, data, config)))
        .collect();

    for handle in handles {
        let (stream_id, chunk_count, total_bytes) = handle.await??;
        println!(
            "Stream {}: {} chunks, {} bytes",
            stream_id, chunk_count, total_bytes
        );
    }

    Ok(())
}
