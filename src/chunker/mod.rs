//! Chunking engine for processing byte streams.
//!
//! - [`Chunker`] - Pull-based CDC session over a [`std::io::Read`] source
//! - [`ChunkIter`] - Lazy sequence of chunks wrapping a `Chunker`

mod engine;
mod iter;

pub use engine::Chunker;
#[cfg(feature = "async-io")]
pub(crate) use engine::{Session, State};
pub use iter::ChunkIter;
