//! # lfucache
//!
//! Thread-safe, in-memory approximate LFU cache keyed by strings.
//!
//! ## Architecture
//! - **Index**: AHash map from key to value + access frequency (O(1))
//! - **Eviction**: batch pass that sorts by frequency, drops the coldest
//!   entries and resets survivors to frequency 1
//! - **Synchronization**: one `parking_lot::Mutex` around the whole index
//!
//! ## Watermarks
//! With both `upper_bound` and `lower_bound` non-zero, inserting a new key
//! while the population is at `upper_bound` first evicts
//! `upper_bound - lower_bound` entries. A zero in either bound disables
//! automatic eviction.
//!
//! ```
//! use lfucache::LfuCache;
//!
//! let cache = LfuCache::with_watermarks(4, 2);
//! for key in ["a", "b", "c", "d"] {
//!     cache.set(key, 0u32);
//! }
//! cache.get("a");
//! cache.set("e", 1);
//!
//! assert_eq!(cache.len(), 3);
//! assert!(cache.has("a"));
//! ```

#![warn(missing_docs)]

mod cache;
mod config;
mod error;
mod index;
mod stats;

pub use cache::LfuCache;
pub use config::CacheConfig;
pub use error::{Error, Result};
pub use stats::CacheStats;
