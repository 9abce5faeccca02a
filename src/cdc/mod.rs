//! Content-Defined Chunking (CDC) implementation.
//!
//! This module contains the core algorithm for identifying chunk boundaries
//! based on content patterns rather than fixed sizes.
//!
//! - `gear` - Gear table and rolling hash step
//! - `FastCdc` - Normalized two-mask cut-point policy

mod fastcdc;
mod gear;

pub(crate) use fastcdc::{FastCdc, derive_masks};
