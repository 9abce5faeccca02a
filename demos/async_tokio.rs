//! Async file chunking with tokio.
//!
//! Tokio readers implement `tokio::io::AsyncRead`; `tokio_util::compat`
//! adapts them to the `futures_io::AsyncRead` the stream expects.
//!
//! Run with:
//!     cargo run --example async_tokio --features async-io -- /path/to/file

use std::env;

use futures_util::StreamExt;
use gearcut::{ChunkConfig, chunk_async};
use tokio_util::compat::TokioAsyncReadCompatExt;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "Cargo.toml".to_string());

    let file = tokio::fs::File::open(&path).await?;
    let mut stream = chunk_async(file.compat(), ChunkConfig::default())?;

    let mut total_chunks = 0;
    let mut total_bytes = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        total_chunks += 1;
        total_bytes += chunk.size();
        println!(
            "Chunk {}: offset={:>10}, len={:>8}, blake3={}",
            total_chunks,
            chunk.offset,
            chunk.size(),
            &blake3::hash(&chunk.data).to_hex()[..16]
        );
    }

    println!("\n{}: {} chunks, {} bytes", path, total_chunks, total_bytes);
    Ok(())
}
