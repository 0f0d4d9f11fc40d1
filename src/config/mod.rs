//! Configuration for chunking behavior.
//!
//! - [`ChunkConfig`] - Fingerprint window, breakpoint divisor and rolling-hash base
//!
//! # Example
//!
//! ```
//! use chunkdelta::ChunkConfig;
//!
//! // Small chunks, as used by the reference vectors
//! let config = ChunkConfig::new(4, 16, 7)?;
//!
//! // Builder pattern
//! let config = ChunkConfig::default().with_divisor(8192);
//! assert!(config.validate().is_ok());
//! # Ok::<(), chunkdelta::ChunkError>(())
//! ```

use crate::error::ChunkError;

/// Default minimum chunk size, which is also the fingerprint window (16 bytes).
pub const DEFAULT_MIN_CHUNK_SIZE: usize = 16;

/// Default breakpoint divisor (average chunk size around 4 KiB).
pub const DEFAULT_DIVISOR: i64 = 4096;

/// Default rolling-hash base.
///
/// `7^15 * 255` summed over a 16-byte window stays well inside `i64`, so the
/// default configuration never wraps.
pub const DEFAULT_BASE: i64 = 7;

/// Configuration for content-defined chunking.
///
/// - `min_size` - Minimum chunk size; doubles as the fingerprint window length
/// - `divisor` - A breakpoint is declared where `fingerprint % divisor == divisor - 1`,
///   so boundaries occur with probability of roughly `1 / divisor`
/// - `base` - Multiplier of the polynomial rolling hash, ideally a small prime
///
/// Two chunkings are only comparable when they use the same configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkConfig {
    min_size: usize,
    divisor: i64,
    base: i64,
}

impl ChunkConfig {
    /// Creates a new configuration.
    ///
    /// Returns error if `min_size` is zero or `divisor` is not greater than 1.
    pub fn new(min_size: usize, divisor: i64, base: i64) -> Result<Self, ChunkError> {
        if min_size == 0 {
            return Err(ChunkError::InvalidConfig {
                message: "min_size must be non-zero",
            });
        }

        if divisor <= 1 {
            return Err(ChunkError::InvalidConfig {
                message: "divisor must be greater than 1",
            });
        }

        Ok(Self {
            min_size,
            divisor,
            base,
        })
    }

    /// Sets the minimum chunk size (and fingerprint window length).
    pub fn with_min_size(mut self, size: usize) -> Self {
        self.min_size = size;
        self
    }

    /// Sets the breakpoint divisor.
    pub fn with_divisor(mut self, divisor: i64) -> Self {
        self.divisor = divisor;
        self
    }

    /// Sets the rolling-hash base.
    pub fn with_base(mut self, base: i64) -> Self {
        self.base = base;
        self
    }

    /// Returns the minimum chunk size.
    pub fn min_size(&self) -> usize {
        self.min_size
    }

    /// Returns the breakpoint divisor.
    pub fn divisor(&self) -> i64 {
        self.divisor
    }

    /// Returns the rolling-hash base.
    pub fn base(&self) -> i64 {
        self.base
    }

    /// Validates the current configuration.
    pub fn validate(&self) -> Result<(), ChunkError> {
        Self::new(self.min_size, self.divisor, self.base).map(|_| ())
    }
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            min_size: DEFAULT_MIN_CHUNK_SIZE,
            divisor: DEFAULT_DIVISOR,
            base: DEFAULT_BASE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_config_default() {
        let config = ChunkConfig::default();
        assert_eq!(config.min_size(), 16);
        assert_eq!(config.divisor(), 4096);
        assert_eq!(config.base(), 7);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_chunk_config_builder() {
        let config = ChunkConfig::default()
            .with_min_size(32)
            .with_divisor(1024)
            .with_base(31);
        assert_eq!(config.min_size(), 32);
        assert_eq!(config.divisor(), 1024);
        assert_eq!(config.base(), 31);
    }

    #[test]
    fn test_chunk_config_valid() {
        let config = ChunkConfig::new(4, 16, 7).unwrap();
        assert_eq!(config.min_size(), 4);
        assert_eq!(config.divisor(), 16);
        assert_eq!(config.base(), 7);
    }

    #[test]
    fn test_chunk_config_invalid_zero_window() {
        assert!(ChunkConfig::new(0, 16, 7).is_err());
    }

    #[test]
    fn test_chunk_config_invalid_divisor() {
        assert!(ChunkConfig::new(4, 1, 7).is_err());
        assert!(ChunkConfig::new(4, 0, 7).is_err());
        assert!(ChunkConfig::new(4, -16, 7).is_err());
        assert!(ChunkConfig::new(4, 2, 7).is_ok());
    }

    #[test]
    fn test_chunk_config_validate() {
        let config = ChunkConfig::default().with_min_size(0);
        assert!(config.validate().is_err());

        let config = ChunkConfig::default().with_divisor(1);
        assert!(config.validate().is_err());
    }
}
