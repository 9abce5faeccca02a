//! Error types for gearcut.

use std::io;

use thiserror::Error;

/// Errors that can occur during chunking operations.
///
/// Reaching the end of the input is not an error: it is reported as
/// `Ok(None)` by [`Chunker::next_chunk`](crate::Chunker::next_chunk) and as
/// the end of iteration by the lazy sequences.
#[derive(Debug, Error)]
pub enum ChunkError {
    /// An I/O error occurred while reading input data.
    ///
    /// The reader's own error is carried unchanged.
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    /// The session already failed on an earlier read and will not read again.
    #[error("chunker is poisoned by an earlier read failure ({kind})")]
    Poisoned {
        /// Kind of the error that ended the session.
        kind: io::ErrorKind,
    },

    /// Invalid configuration parameter.
    #[error("invalid config: {message}")]
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },
}

impl ChunkError {
    /// Returns the I/O error kind behind this error, if it came from the source.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            ChunkError::Io(e) => Some(e.kind()),
            ChunkError::Poisoned { kind } => Some(*kind),
            ChunkError::InvalidConfig { .. } => None,
        }
    }
}
