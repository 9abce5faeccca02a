//! Configuration for chunking behavior.
//!
//! [`ChunkConfig`] holds the three size bounds and the normalization level,
//! and derives the two cut-point masks from them.
//!
//! # Example
//!
//! ```
//! use gearcut::ChunkConfig;
//!
//! // Custom chunk sizes
//! let config = ChunkConfig::new(2048, 8192, 32768)?;
//! assert_eq!(config.mask_s(), (1 << 15) - 1);
//! assert_eq!(config.mask_l(), (1 << 11) - 1);
//!
//! // Builder pattern, checked later
//! let config = ChunkConfig::default().with_normal_size(64 * 1024);
//! config.validate()?;
//! # Ok::<(), gearcut::ChunkError>(())
//! ```

use crate::cdc::derive_masks;
use crate::error::ChunkError;

/// Default minimum chunk size (4 KiB).
pub const DEFAULT_MIN_CHUNK_SIZE: usize = 4 * 1024;

/// Default normal (target) chunk size (16 KiB).
pub const DEFAULT_NORMAL_CHUNK_SIZE: usize = 16 * 1024;

/// Default maximum chunk size (64 KiB).
pub const DEFAULT_MAX_CHUNK_SIZE: usize = 64 * 1024;

/// Default normalization level (masks differ from the normal size by ±2 bits).
pub const DEFAULT_NORMALIZATION_LEVEL: u8 = 2;

/// Configuration for content-defined chunking.
///
/// Size constraints: `min_size <= normal_size <= max_size` and
/// `max_size > 0`. Sizes do not have to be powers of two; the mask width is
/// `round(log2(normal_size))` bits.
///
/// Normalization level `k` controls the chunk size distribution:
/// - below `normal_size` the cut test uses `b + k` mask bits (stricter)
/// - from `normal_size` on it uses `b - k` mask bits (looser)
///
/// `min_size == max_size` is allowed and yields fixed-size chunking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChunkConfig {
    min_size: usize,
    normal_size: usize,
    max_size: usize,
    normalization_level: u8,
    mask_s_override: Option<u64>,
}

impl ChunkConfig {
    /// Creates a new configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkError::InvalidConfig`] if `max_size` is zero or the
    /// sizes are out of order.
    ///
    /// # Example
    ///
    /// ```
    /// use gearcut::ChunkConfig;
    ///
    /// let config = ChunkConfig::new(1, 6, 6)?;
    /// assert_eq!(config.max_size(), 6);
    /// assert!(ChunkConfig::new(8, 4, 16).is_err());
    /// # Ok::<(), gearcut::ChunkError>(())
    /// ```
    pub fn new(min_size: usize, normal_size: usize, max_size: usize) -> Result<Self, ChunkError> {
        let config = Self {
            min_size,
            normal_size,
            max_size,
            normalization_level: DEFAULT_NORMALIZATION_LEVEL,
            mask_s_override: None,
        };
        config.validate()?;
        Ok(config)
    }

    /// Sets the minimum chunk size.
    ///
    /// Note: setters do not validate. Use [`ChunkConfig::validate`].
    pub fn with_min_size(mut self, size: usize) -> Self {
        self.min_size = size;
        self
    }

    /// Sets the normal (target) chunk size.
    pub fn with_normal_size(mut self, size: usize) -> Self {
        self.normal_size = size;
        self
    }

    /// Sets the maximum chunk size.
    pub fn with_max_size(mut self, size: usize) -> Self {
        self.max_size = size;
        self
    }

    /// Sets the normalization level.
    ///
    /// Level 0 uses a single mask for both regimes.
    pub fn with_normalization_level(mut self, level: u8) -> Self {
        self.normalization_level = level;
        self
    }

    /// Replaces the derived stricter-regime mask with a fixed value.
    ///
    /// This is a determinism hook for tests that need a cut at a known
    /// position. Chunk boundaries produced with an override are not
    /// comparable with boundaries produced without one.
    ///
    /// ```
    /// use gearcut::ChunkConfig;
    ///
    /// let config = ChunkConfig::new(1, 32, 32)?.with_mask_s_override(0xc);
    /// assert_eq!(config.mask_s(), 0xc);
    /// # Ok::<(), gearcut::ChunkError>(())
    /// ```
    pub fn with_mask_s_override(mut self, mask: u64) -> Self {
        self.mask_s_override = Some(mask);
        self
    }

    /// Returns the minimum chunk size.
    pub fn min_size(&self) -> usize {
        self.min_size
    }

    /// Returns the normal (target) chunk size.
    pub fn normal_size(&self) -> usize {
        self.normal_size
    }

    /// Returns the maximum chunk size.
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Returns the normalization level.
    pub fn normalization_level(&self) -> u8 {
        self.normalization_level
    }

    /// Returns the stricter mask applied while a chunk is shorter than `normal_size`.
    pub fn mask_s(&self) -> u64 {
        self.mask_s_override
            .unwrap_or_else(|| derive_masks(self.normal_size, self.normalization_level).0)
    }

    /// Returns the looser mask applied once a chunk reaches `normal_size`.
    pub fn mask_l(&self) -> u64 {
        derive_masks(self.normal_size, self.normalization_level).1
    }

    /// Validates the current configuration.
    pub fn validate(&self) -> Result<(), ChunkError> {
        if self.max_size == 0 {
            return Err(ChunkError::InvalidConfig {
                message: "max_size must be non-zero",
            });
        }

        if self.min_size > self.normal_size {
            return Err(ChunkError::InvalidConfig {
                message: "min_size cannot be greater than normal_size",
            });
        }

        if self.normal_size > self.max_size {
            return Err(ChunkError::InvalidConfig {
                message: "normal_size cannot be greater than max_size",
            });
        }

        Ok(())
    }
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            min_size: DEFAULT_MIN_CHUNK_SIZE,
            normal_size: DEFAULT_NORMAL_CHUNK_SIZE,
            max_size: DEFAULT_MAX_CHUNK_SIZE,
            normalization_level: DEFAULT_NORMALIZATION_LEVEL,
            mask_s_override: None,
        }
    }
}
