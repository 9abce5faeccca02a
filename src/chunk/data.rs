//! The Chunk type - represents a content-defined chunk.

use bytes::Bytes;
use std::fmt;

/// A content-defined chunk cut from a byte stream.
///
/// `data` is uniquely owned by the chunk: the engine copies it out of its
/// read buffer, so chunks can be moved to other threads and kept for as long
/// as the caller likes.
///
/// # Example
///
/// ```
/// use gearcut::Chunk;
/// use bytes::Bytes;
///
/// let chunk = Chunk::new(6, Bytes::from_static(b"world"));
///
/// assert_eq!(chunk.size(), 5);
/// assert_eq!(chunk.range(), 6..11);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Chunk {
    /// Absolute position of the first byte in the source stream.
    pub offset: u64,

    /// The chunk bytes.
    pub data: Bytes,
}

impl Chunk {
    /// Creates a new chunk at `offset`.
    pub fn new(offset: u64, data: impl Into<Bytes>) -> Self {
        Self {
            offset,
            data: data.into(),
        }
    }

    /// Returns the chunk size in bytes.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Returns the length of the chunk data.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the chunk has no data.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns a reference to the chunk data.
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    /// Returns the start offset.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Returns the end offset (exclusive).
    pub fn end(&self) -> u64 {
        self.offset + self.data.len() as u64
    }

    /// Returns the chunk as a range of stream positions.
    pub fn range(&self) -> std::ops::Range<u64> {
        self.offset..self.end()
    }

    /// Consumes the chunk and returns the underlying data.
    pub fn into_data(self) -> Bytes {
        self.data
    }
}

impl AsRef<[u8]> for Chunk {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Chunk({} bytes @ {})", self.len(), self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let chunk = Chunk::new(0, &b"hello"[..]);
        assert_eq!(chunk.size(), 5);
        assert_eq!(chunk.len(), 5);
        assert!(!chunk.is_empty());
        assert_eq!(chunk.offset(), 0);
    }

    #[test]
    fn test_from_vec() {
        let chunk = Chunk::new(3, vec![1u8, 2, 3]);
        assert_eq!(chunk.data(), &Bytes::from_static(&[1, 2, 3]));
        assert_eq!(chunk.as_ref(), &[1, 2, 3]);
    }

    #[test]
    fn test_end_and_range() {
        let chunk = Chunk::new(100, &b"hello"[..]);
        assert_eq!(chunk.end(), 105);
        assert_eq!(chunk.range(), 100..105);
    }

    #[test]
    fn test_display() {
        let chunk = Chunk::new(100, &b"hello"[..]);
        assert_eq!(chunk.to_string(), "Chunk(5 bytes @ 100)");
    }

    #[test]
    fn test_into_data() {
        let chunk = Chunk::new(0, Bytes::from_static(b"test"));
        assert_eq!(chunk.into_data(), Bytes::from_static(b"test"));
    }
}
