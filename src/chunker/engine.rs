//! Core chunking engine - pull-based Chunker over a reader.
//!
//! Each call to [`Chunker::next_chunk`] tops up the read buffer, runs the
//! cut-point scan over at most `max_size` bytes and returns the chunk.
//!
//! # Example
//!
//! ```
//! use gearcut::{ChunkConfig, Chunker};
//!
//! let config = ChunkConfig::new(1, 6, 6)?;
//! let mut chunker = Chunker::new(&b"hello world"[..], config)?;
//!
//! let first = chunker.next_chunk()?.unwrap();
//! assert_eq!((first.offset, &first.data[..]), (0, &b"hello "[..]));
//!
//! let second = chunker.next_chunk()?.unwrap();
//! assert_eq!((second.offset, &second.data[..]), (6, &b"world"[..]));
//!
//! assert!(chunker.next_chunk()?.is_none());
//! # Ok::<(), gearcut::ChunkError>(())
//! ```

use std::io::{self, Read};

use bytes::Bytes;
use tracing::{debug, trace};

use crate::buffer::StreamBuffer;
use crate::cdc::FastCdc;
use crate::chunk::Chunk;
use crate::config::ChunkConfig;
use crate::error::ChunkError;

/// Lifecycle of a chunking session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum State {
    Active,
    Exhausted,
    Failed(io::ErrorKind),
}

/// Reader-independent part of a session, shared with the async stream.
#[derive(Debug)]
pub(crate) struct Session {
    pub(crate) cdc: FastCdc,
    pub(crate) buffer: StreamBuffer,
    pub(crate) offset: u64,
    pub(crate) chunks: u64,
    pub(crate) state: State,
}

impl Session {
    pub(crate) fn new(config: &ChunkConfig) -> Result<Self, ChunkError> {
        config.validate()?;

        let session = Self {
            cdc: FastCdc::new(config),
            buffer: StreamBuffer::for_max_size(config.max_size()),
            offset: 0,
            chunks: 0,
            state: State::Active,
        };
        debug!(
            min_size = config.min_size(),
            normal_size = config.normal_size(),
            max_size = config.max_size(),
            mask_s = config.mask_s(),
            mask_l = config.mask_l(),
            buffer = session.buffer.capacity(),
            "chunking session started"
        );
        Ok(session)
    }

    /// True while the buffer must be topped up before the next cut.
    pub(crate) fn needs_fill(&self) -> bool {
        self.buffer.needs_fill(self.cdc.max_size())
    }

    /// Cuts the next chunk from buffered bytes.
    ///
    /// Must only be called once [`needs_fill`](Self::needs_fill) is false.
    /// Returns `None` and moves to `Exhausted` when nothing is left.
    pub(crate) fn cut(&mut self) -> Option<Chunk> {
        debug_assert!(!self.needs_fill());

        let window = self.buffer.window(self.cdc.max_size());
        if window.is_empty() {
            debug!(
                bytes = self.offset,
                chunks = self.chunks,
                "end of input"
            );
            self.state = State::Exhausted;
            return None;
        }

        let len = self.cdc.cut(window);
        let chunk = Chunk::new(self.offset, Bytes::copy_from_slice(&window[..len]));
        self.buffer.consume(len);
        self.offset += len as u64;
        self.chunks += 1;

        trace!(offset = chunk.offset, size = len, "chunk");
        Some(chunk)
    }

    /// Records a read failure; the session never reads again.
    pub(crate) fn fail(&mut self, err: io::Error) -> ChunkError {
        debug!(
            offset = self.offset,
            kind = %err.kind(),
            "source read failed"
        );
        self.state = State::Failed(err.kind());
        ChunkError::Io(err)
    }
}

/// A content-defined chunking session over a [`Read`] source.
///
/// `Chunker` owns its buffer and cursor state exclusively. It is not meant
/// to be shared between threads; chunk independent streams with one
/// `Chunker` each.
///
/// # States
///
/// - active: every [`next_chunk`](Self::next_chunk) call returns one chunk
/// - exhausted: the input was fully partitioned; `next_chunk` returns `Ok(None)`
/// - failed: the source returned an error; the first call returns it as
///   [`ChunkError::Io`], every later call returns [`ChunkError::Poisoned`]
///   without touching the source
///
/// The reader is never closed by the engine. Use
/// [`into_inner`](Self::into_inner) to take it back at any point.
///
/// # Example
///
/// ```
/// use gearcut::{ChunkConfig, Chunker};
/// use std::io::Cursor;
///
/// let data = vec![7u8; 100_000];
/// let chunker = Chunker::new(Cursor::new(&data), ChunkConfig::default())?;
///
/// let mut total = 0;
/// for chunk in chunker {
///     let chunk = chunk?;
///     assert!(chunk.size() <= 64 * 1024);
///     total += chunk.size();
/// }
/// assert_eq!(total, data.len());
/// # Ok::<(), gearcut::ChunkError>(())
/// ```
#[derive(Debug)]
pub struct Chunker<R> {
    reader: R,
    session: Session,
    config: ChunkConfig,
}

impl<R: Read> Chunker<R> {
    /// Creates a new chunker reading from `reader`.
    ///
    /// No bytes are read until the first [`next_chunk`](Self::next_chunk).
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

    /// Returns the next chunk, `Ok(None)` at end of input, or the source error.
    ///
    /// A short final chunk is returned before end of input is reported; an
    /// empty input produces no chunk at all.
    pub fn next_chunk(&mut self) -> Result<Option<Chunk>, ChunkError> {
        match self.session.state {
            State::Active => {}
            State::Exhausted => return Ok(None),
            State::Failed(kind) => return Err(ChunkError::Poisoned { kind }),
        }

        let max_size = self.session.cdc.max_size();
        if let Err(err) = self.session.buffer.fill(&mut self.reader, max_size) {
            return Err(self.session.fail(err));
        }

        Ok(self.session.cut())
    }
}

impl<R> Chunker<R> {
    /// Returns the stream position where the next chunk starts.
    pub fn offset(&self) -> u64 {
        self.session.offset
    }

    /// True once the session reached end of input or failed.
    pub fn is_finished(&self) -> bool {
        self.session.state != State::Active
    }

    /// Returns the configuration used by this chunker.
    pub fn config(&self) -> &ChunkConfig {
        &self.config
    }

    /// Gets a reference to the underlying reader.
    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Gets a mutable reference to the underlying reader.
    ///
    /// Reading from it directly skips those bytes for the chunker.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.reader
    }

    /// Unwraps this chunker, returning the reader.
    ///
    /// Bytes that were buffered but not yet emitted are lost.
    pub fn into_inner(self) -> R {
        self.reader
    }
}
