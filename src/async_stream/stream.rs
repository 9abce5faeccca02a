//! Async stream adapter for chunking.
//!
//! This module provides asynchronous chunking using the `futures-io::AsyncRead`
//! trait, making it runtime-agnostic and compatible with tokio, async-std,
//! smol, and other async runtimes.
//!
//! The stream shares the buffer manager, cut-point policy and state machine
//! with [`Chunker`](crate::Chunker), so both produce identical boundaries for
//! identical input.
//!
//! # Example
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
//!         println!("Chunk: {} bytes", chunk.len());
//!     }
//!     Ok(())
//! }
//! ```

use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::{FusedStream, Stream};
use futures_io::AsyncRead;
use pin_project_lite::pin_project;

use crate::chunk::Chunk;
use crate::chunker::{Session, State};
use crate::config::ChunkConfig;
use crate::error::ChunkError;

pin_project! {
    /// A stream that yields chunks from an async reader.
    ///
    /// This uses `futures_io::AsyncRead` which is runtime-agnostic.
    /// A source error is yielded once, then the stream ends.
    #[derive(Debug)]
    pub struct ChunkStream<R> {
        #[pin]
        reader: R,
        session: Session,
        config: ChunkConfig,
    }
}

impl<R: AsyncRead> ChunkStream<R> {
    /// Creates a new chunk stream from an async reader.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkError::InvalidConfig`] if `config` does not validate.
    pub fn new(reader: R, config: ChunkConfig) -> Result<Self, ChunkError> {
        Ok(Self {
            reader,
            session: Session::new(&config)?,
            config,
        })
    }
}

impl<R> ChunkStream<R> {
    /// Returns the stream position where the next chunk starts.
    pub fn offset(&self) -> u64 {
        self.session.offset
    }

    /// Returns the configuration used by this stream.
    pub fn config(&self) -> &ChunkConfig {
        &self.config
    }

    /// Gets a reference to the underlying reader.
    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Unwraps this stream, returning the reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: AsyncRead> Stream for ChunkStream<R> {
    type Item = Result<Chunk, ChunkError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        if this.session.state != State::Active {
            return Poll::Ready(None);
        }

        while this.session.needs_fill() {
            this.session.buffer.compact();
            match this
                .reader
                .as_mut()
                .poll_read(cx, this.session.buffer.spare_mut())
            {
                Poll::Pending => return Poll::Pending,
                Poll::Ready(Ok(n)) => this.session.buffer.commit(n),
                Poll::Ready(Err(e)) if e.kind() == io::ErrorKind::Interrupted => continue,
                Poll::Ready(Err(e)) => return Poll::Ready(Some(Err(this.session.fail(e)))),
            }
        }

        Poll::Ready(this.session.cut().map(Ok))
    }
}

impl<R: AsyncRead> FusedStream for ChunkStream<R> {
    fn is_terminated(&self) -> bool {
        self.session.state != State::Active
    }
}

/// Creates a chunk stream from an async reader.
///
/// Uses `futures_io::AsyncRead` for runtime-agnostic async I/O.
///
/// # Runtime Compatibility
///
/// For tokio users, you can use `tokio_util::compat` to convert
/// `tokio::io::AsyncRead` to `futures_io::AsyncRead`:
///
/// ```ignore
/// use tokio_util::compat::TokioAsyncReadCompatExt;
/// use gearcut::{chunk_async, ChunkConfig};
///
/// let tokio_reader = tokio::fs::File::open("file").await?;
/// let stream = chunk_async(tokio_reader.compat(), ChunkConfig::default())?;
/// ```
pub fn chunk_async<R: AsyncRead>(
    reader: R,
    config: ChunkConfig,
) -> Result<ChunkStream<R>, ChunkError> {
    ChunkStream::new(reader, config)
}
