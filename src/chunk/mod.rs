//! Chunk types.
//!
//! - [`Chunk`] - Content-defined chunk with its offset and bytes

mod data;

pub use data::Chunk;
