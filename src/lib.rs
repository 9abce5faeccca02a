//! gearcut
//!
//! Streaming normalized Content-Defined Chunking (CDC) for Rust.
//!
//! `gearcut` splits a byte stream into variable-size chunks whose boundaries
//! depend on the content itself, so a local edit only disturbs the chunks
//! near it. It is meant as a small primitive for:
//!
//! - delta synchronization
//! - deduplication
//! - backup systems
//! - content-addressable storage
//!
//! The crate does not:
//! - hash, persist or index chunks
//! - manage files, paths or concurrency
//! - assume anything about the source beyond sequential reads
//!
//! It only does one thing: **Read bytes → yield chunks**
//!
//! Boundaries are found with a Gear rolling hash and two cut masks: a strict
//! one below the normal size and a loose one above it, which pulls chunk
//! sizes toward the normal size. Every chunk is between `min_size` and
//! `max_size` bytes long, except that the last one may be shorter.
//!
//! # Sync
//!
//! ```no_run
//! use std::fs::File;
//! use gearcut::{Chunker, ChunkConfig, ChunkError};
//!
//! fn main() -> Result<(), ChunkError> {
//!     let file = File::open("data.bin")?;
//!     let mut chunker = Chunker::new(file, ChunkConfig::default())?;
//!
//!     while let Some(chunk) = chunker.next_chunk()? {
//!         println!("chunk {} bytes @ {}", chunk.size(), chunk.offset);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Async (feature = "async-io")
//!
//! ```ignore
//! use futures_util::StreamExt;
//! use gearcut::{chunk_async, ChunkConfig};
//! use futures_io::AsyncRead;
//!
//! async fn demo<R: AsyncRead + Unpin>(reader: R) -> Result<(), gearcut::ChunkError> {
//!     let mut stream = chunk_async(reader, ChunkConfig::default())?;
//!
//!     while let Some(chunk) = stream.next().await {
//!         let chunk = chunk?;
//!         println!("chunk {}", chunk.size());
//!     }
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod chunk;
mod chunker;
mod config;
mod error;

mod buffer; // internal read buffer
mod cdc; // internal gear hash + cut policy

#[cfg(feature = "async-io")]
mod async_stream;

//
// Public surface
//

pub use chunk::Chunk;
pub use chunker::{ChunkIter, Chunker};
pub use config::{
    ChunkConfig, DEFAULT_MAX_CHUNK_SIZE, DEFAULT_MIN_CHUNK_SIZE, DEFAULT_NORMAL_CHUNK_SIZE,
    DEFAULT_NORMALIZATION_LEVEL,
};
pub use error::ChunkError;

#[cfg(feature = "async-io")]
pub use async_stream::{ChunkStream, chunk_async};
