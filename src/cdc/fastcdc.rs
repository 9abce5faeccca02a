//! Normalized cut-point policy.
//!
//! Each byte is folded into the gear hash, then the chunk length `n` since
//! the last cut selects one of four regimes:
//!
//! - `n < min_size`: never a cut
//! - `min_size <= n < normal_size`: cut iff `hash & mask_s == 0` (stricter)
//! - `normal_size <= n < max_size`: cut iff `hash & mask_l == 0` (looser)
//! - `n == max_size`: forced cut
//!
//! # References
//!
//! Based on "FastCDC: A Fast and Efficient Content-Defined Chunking Approach for Data Deduplication"
//! by Wen Xia et al., USENIX ATC 2016.

use super::gear;
use crate::config::ChunkConfig;

/// Returns a mask with the `bits` low bits set.
const fn low_bits(bits: u32) -> u64 {
    if bits >= u64::BITS {
        u64::MAX
    } else {
        (1u64 << bits) - 1
    }
}

/// Derives `(mask_s, mask_l)` for a normal chunk size.
///
/// `b = round(log2(normal_size))`; `mask_s` has `b + level` low bits set and
/// `mask_l` has `b - level` (saturating at zero).
pub(crate) fn derive_masks(normal_size: usize, level: u8) -> (u64, u64) {
    let bits = if normal_size <= 1 {
        0
    } else {
        (normal_size as f64).log2().round() as u32
    };
    let level = u32::from(level);
    (
        low_bits(bits.saturating_add(level)),
        low_bits(bits.saturating_sub(level)),
    )
}

/// Cut-point state for one chunking session.
///
/// Holds only the immutable thresholds; the rolling hash lives on the stack
/// of [`FastCdc::cut`] and restarts at zero for every chunk.
#[derive(Debug, Clone)]
pub(crate) struct FastCdc {
    min_size: usize,
    normal_size: usize,
    max_size: usize,

    /// Applied below `normal_size`. More bits set, so matches are rarer.
    mask_s: u64,

    /// Applied from `normal_size` on. Fewer bits set, so matches are likelier.
    mask_l: u64,
}

impl FastCdc {
    pub(crate) fn new(config: &ChunkConfig) -> Self {
        Self {
            min_size: config.min_size(),
            normal_size: config.normal_size(),
            max_size: config.max_size(),
            mask_s: config.mask_s(),
            mask_l: config.mask_l(),
        }
    }

    /// Decides whether a chunk of `len` bytes ending with `hash` is cut here.
    #[inline(always)]
    pub(crate) fn is_cut_point(&self, len: usize, hash: u64) -> bool {
        if len < self.min_size {
            false
        } else if len >= self.max_size {
            true
        } else if len < self.normal_size {
            hash & self.mask_s == 0
        } else {
            hash & self.mask_l == 0
        }
    }

    /// Returns the length of the chunk starting at `window[0]`.
    ///
    /// `window` holds the unconsumed bytes, at most `max_size` of them. If no
    /// cut point is found the whole window is the chunk: either it is
    /// `max_size` long or the source ended inside it.
    pub(crate) fn cut(&self, window: &[u8]) -> usize {
        debug_assert!(window.len() <= self.max_size);

        let mut hash = 0u64;
        for (i, &byte) in window.iter().enumerate() {
            hash = gear::roll(hash, byte);
            if self.is_cut_point(i + 1, hash) {
                return i + 1;
            }
        }
        window.len()
    }

    pub(crate) fn max_size(&self) -> usize {
        self.max_size
    }
}
