//! Error types for lfucache

use std::fmt;

/// Result type alias for fallible lfucache calls
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while configuring a cache.
///
/// Cache operations themselves never fail; only a rejected configuration does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Bounded watermarks where the upper bound is not above the lower bound
    InvalidWatermarks {
        /// Configured high-water mark
        upper_bound: usize,
        /// Configured low-water mark
        lower_bound: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidWatermarks {
                upper_bound,
                lower_bound,
            } => write!(
                f,
                "Invalid watermarks: upper bound {} must be greater than lower bound {}",
                upper_bound, lower_bound
            ),
        }
    }
}

impl std::error::Error for Error {}
