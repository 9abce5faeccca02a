//! Bounded read buffer with compaction.

use std::fmt;
use std::io::{self, Read};

/// Buffer capacity as a multiple of the maximum chunk size.
pub(crate) const BUFFER_FACTOR: usize = 2;

/// A reusable byte buffer over a sequential source.
///
/// Layout: `data[..start]` is consumed, `data[start..end]` is buffered but
/// not yet emitted, `data[end..]` is free space for the next read.
pub(crate) struct StreamBuffer {
    data: Vec<u8>,
    start: usize,
    end: usize,
    eof: bool,
}

impl StreamBuffer {
    /// Creates a buffer sized for chunks of at most `max_size` bytes.
    pub(crate) fn for_max_size(max_size: usize) -> Self {
        Self::with_capacity(max_size.saturating_mul(BUFFER_FACTOR))
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            data: vec![0u8; capacity],
            start: 0,
            end: 0,
            eof: false,
        }
    }

    /// Number of buffered bytes not yet consumed.
    pub(crate) fn available(&self) -> usize {
        self.end - self.start
    }

    /// True once the source has reported end of data.
    pub(crate) fn is_eof(&self) -> bool {
        self.eof
    }

    /// True if fewer than `want` bytes are buffered and the source may have more.
    pub(crate) fn needs_fill(&self, want: usize) -> bool {
        !self.is_eof() && self.available() < want
    }

    /// Moves the unconsumed bytes to the front, discarding consumed ones.
    pub(crate) fn compact(&mut self) {
        if self.start == 0 {
            return;
        }
        self.data.copy_within(self.start..self.end, 0);
        self.end -= self.start;
        self.start = 0;
    }

    /// Free space after the buffered bytes.
    pub(crate) fn spare_mut(&mut self) -> &mut [u8] {
        &mut self.data[self.end..]
    }

    /// Records the outcome of a read into [`spare_mut`](Self::spare_mut).
    ///
    /// A zero-length read into non-empty space is end of data.
    pub(crate) fn commit(&mut self, n: usize) {
        debug_assert!(self.end + n <= self.data.len());
        if n == 0 {
            self.eof = true;
        } else {
            self.end += n;
        }
    }

    /// Reads until at least `want` bytes are buffered or the source ends.
    ///
    /// Short reads are fine. `Interrupted` is re-issued as `Read::read_exact`
    /// does; any other error is returned as is and bytes read before it stay
    /// buffered. Returns the number of bytes read by this call.
    pub(crate) fn fill<R: Read>(&mut self, reader: &mut R, want: usize) -> io::Result<usize> {
        debug_assert!(want <= self.data.len());
        if !self.needs_fill(want) {
            return Ok(0);
        }

        self.compact();
        let mut total = 0;
        while self.needs_fill(want) {
            match reader.read(self.spare_mut()) {
                Ok(n) => {
                    self.commit(n);
                    total += n;
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(total)
    }

    /// Unconsumed bytes, capped at `max` bytes.
    pub(crate) fn window(&self, max: usize) -> &[u8] {
        let end = self.end.min(self.start.saturating_add(max));
        &self.data[self.start..end]
    }

    /// Marks `n` buffered bytes as consumed.
    pub(crate) fn consume(&mut self, n: usize) {
        debug_assert!(n <= self.available());
        self.start += n;
        if self.start == self.end {
            self.start = 0;
            self.end = 0;
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.data.len()
    }
}

impl fmt::Debug for StreamBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamBuffer")
            .field("capacity", &self.data.len())
            .field("start", &self.start)
            .field("end", &self.end)
            .field("eof", &self.eof)
            .finish()
    }
}
