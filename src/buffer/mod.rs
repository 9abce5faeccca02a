//! Streaming buffer management.
//!
//! [`StreamBuffer`] owns one reusable byte buffer, tracks the consumed and
//! unconsumed regions, and refills from a [`std::io::Read`] source on
//! demand. The async stream drives the same buffer through
//! `compact`/`spare_mut`/`commit`. It is an implementation detail and not
//! part of the public API.

mod stream;

pub(crate) use stream::StreamBuffer;
