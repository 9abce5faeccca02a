//! Lazy iteration over a [`Chunker`].
//!
//! # Example
//!
//! ```no_run
//! use gearcut::{ChunkConfig, Chunker};
//! use std::fs::File;
//!
//! let file = File::open("data.bin")?;
//!
//! for chunk in Chunker::new(file, ChunkConfig::default())? {
//!     let chunk = chunk?;
//!     println!("Chunk: {} bytes @ {}", chunk.size(), chunk.offset);
//! }
//! # Ok::<(), gearcut::ChunkError>(())
//! ```

use std::io::Read;
use std::iter::FusedIterator;

use super::Chunker;
use crate::chunk::Chunk;
use crate::error::ChunkError;

/// An iterator that yields chunks from a reader.
///
/// Each item is the result of one [`Chunker::next_chunk`] call. A source
/// error is yielded once as `Some(Err(_))`, after which the iterator ends;
/// end of input ends it as well.
///
/// Dropping the iterator early is fine: it only owns the read buffer. Use
/// [`into_inner`](Self::into_inner) to get the [`Chunker`] (and through it
/// the reader) back.
#[derive(Debug)]
pub struct ChunkIter<R> {
    chunker: Chunker<R>,
    finished: bool,
}

impl<R> ChunkIter<R> {
    /// Returns the wrapped chunker.
    pub fn get_ref(&self) -> &Chunker<R> {
        &self.chunker
    }

    /// Unwraps this iterator, returning the chunker.
    pub fn into_inner(self) -> Chunker<R> {
        self.chunker
    }
}

impl<R: Read> Iterator for ChunkIter<R> {
    type Item = Result<Chunk, ChunkError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.chunker.next_chunk() {
            Ok(Some(chunk)) => Some(Ok(chunk)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

impl<R: Read> FusedIterator for ChunkIter<R> {}

impl<R: Read> IntoIterator for Chunker<R> {
    type Item = Result<Chunk, ChunkError>;
    type IntoIter = ChunkIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        ChunkIter {
            finished: self.is_finished(),
            chunker: self,
        }
    }
}
