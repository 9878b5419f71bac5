//! Watermark configuration

use crate::error::{Error, Result};

/// Population watermarks controlling automatic eviction.
///
/// When both bounds are non-zero the cache runs in bounded mode: inserting a
/// new key while the population is at or above `upper_bound` first evicts
/// `upper_bound - lower_bound` entries. A zero in either bound disables
/// automatic eviction entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CacheConfig {
    /// High-water mark that triggers an eviction pass
    pub upper_bound: usize,

    /// Target population after an eviction pass
    pub lower_bound: usize,
}

impl CacheConfig {
    /// Configuration with automatic eviction disabled
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Configuration with the given high and low watermarks
    pub fn bounded(upper_bound: usize, lower_bound: usize) -> Self {
        Self {
            upper_bound,
            lower_bound,
        }
    }

    /// Whether automatic eviction is enabled
    pub fn is_bounded(&self) -> bool {
        self.upper_bound != 0 && self.lower_bound != 0
    }

    /// Number of entries removed by one automatic eviction pass
    pub fn eviction_batch(&self) -> usize {
        self.upper_bound.saturating_sub(self.lower_bound)
    }

    /// Whether inserting a new key at `population` must evict first
    pub(crate) fn should_evict(&self, population: usize) -> bool {
        self.is_bounded() && population >= self.upper_bound
    }

    /// Check that a bounded configuration leaves room between its watermarks
    pub fn validate(&self) -> Result<()> {
        if self.is_bounded() && self.upper_bound <= self.lower_bound {
            return Err(Error::InvalidWatermarks {
                upper_bound: self.upper_bound,
                lower_bound: self.lower_bound,
            });
        }
        Ok(())
    }
}
