//! LfuCache: thread-safe shell around the frequency index

use parking_lot::Mutex;
use tracing::{debug, trace, warn};

use crate::config::CacheConfig;
use crate::error::Result;
use crate::index::FrequencyIndex;
use crate::stats::CacheStats;

/// Thread-safe approximate LFU cache keyed by strings.
///
/// Every operation runs under one cache-wide mutex, so concurrent callers
/// observe a single serial order. Share it between threads with `Arc`.
pub struct LfuCache<V> {
    /// Entries and their access frequencies
    index: Mutex<FrequencyIndex<V>>,

    /// Watermarks, fixed while the cache is shared
    config: CacheConfig,

    /// Cache statistics
    stats: CacheStats,
}

impl<V> LfuCache<V> {
    /// Create an empty, unbounded cache
    pub fn new() -> Self {
        Self::with_config(CacheConfig::unbounded())
    }

    /// Create an empty cache with the given watermarks
    ///
    /// # Arguments
    /// * `upper_bound` - Population that triggers an eviction pass
    /// * `lower_bound` - Population left after the pass
    pub fn with_watermarks(upper_bound: usize, lower_bound: usize) -> Self {
        Self::with_config(CacheConfig::bounded(upper_bound, lower_bound))
    }

    /// Create an empty cache from a configuration.
    ///
    /// Inverted bounded watermarks are accepted; each automatic pass then
    /// removes nothing and only resets frequencies.
    pub fn with_config(config: CacheConfig) -> Self {
        if config.validate().is_err() {
            warn!(
                upper_bound = config.upper_bound,
                lower_bound = config.lower_bound,
                "Upper bound is not above lower bound, automatic eviction will not shrink the cache"
            );
        }

        Self {
            index: Mutex::new(FrequencyIndex::new()),
            config,
            stats: CacheStats::new(),
        }
    }

    /// Create an empty cache, rejecting inverted bounded watermarks
    ///
    /// # Returns
    /// * `Result<LfuCache<V>>` - Cache, or `Error::InvalidWatermarks`
    pub fn try_with_config(config: CacheConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_config(config))
    }

    /// Current watermarks
    pub fn config(&self) -> CacheConfig {
        self.config
    }

    /// Replace the watermarks.
    ///
    /// Takes `&mut self`, so it can only happen before the cache is shared.
    /// Does not evict; the new bounds apply from the next insert on.
    pub fn set_config(&mut self, config: CacheConfig) {
        self.config = config;
    }

    /// Get cache statistics
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Whether `key` is present. Does not change its frequency.
    pub fn has(&self, key: &str) -> bool {
        self.index.lock().contains(key)
    }

    /// Store `value` under `key`.
    ///
    /// An existing key keeps its frequency. A new key starts at frequency 1;
    /// in bounded mode, inserting it at or above the upper bound first runs
    /// an eviction pass of `upper_bound - lower_bound` entries. The check,
    /// the pass and the insert share one lock acquisition.
    pub fn set(&self, key: impl Into<String>, value: V) {
        let key = key.into();
        let mut index = self.index.lock();

        let value = match index.update(&key, value) {
            Ok(()) => return,
            Err(value) => value,
        };

        if self.config.should_evict(index.len()) {
            trace!(
                population = index.len(),
                upper_bound = self.config.upper_bound,
                lower_bound = self.config.lower_bound,
                "Population reached upper bound"
            );
            self.evict_locked(&mut index, self.config.eviction_batch());
        }

        index.insert(key, value);
        self.stats.record_insert();
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.index.lock().len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Access frequency of `key`, or 0 if absent. Does not change it.
    pub fn frequency(&self, key: &str) -> u64 {
        self.index.lock().frequency(key)
    }

    /// Snapshot of every key, in no particular order
    pub fn keys(&self) -> Vec<String> {
        self.index.lock().keys()
    }

    /// Remove up to `count` of the least frequently used entries.
    ///
    /// Every surviving entry has its frequency reset to 1 afterwards.
    ///
    /// # Returns
    /// * `usize` - Entries removed, `min(count, len())`
    pub fn evict(&self, count: usize) -> usize {
        let mut index = self.index.lock();
        self.evict_locked(&mut index, count)
    }

    /// Remove one entry, returning its value. Other frequencies are untouched.
    pub fn remove(&self, key: &str) -> Option<V> {
        self.index.lock().remove(key)
    }

    /// Drop every entry (statistics remain)
    pub fn clear(&self) {
        self.index.lock().clear();
    }

    fn evict_locked(&self, index: &mut FrequencyIndex<V>, count: usize) -> usize {
        let evicted = index.evict(count);
        self.stats.record_eviction_pass(evicted);

        debug!(
            requested = count,
            evicted,
            remaining = index.len(),
            "Eviction pass complete"
        );

        evicted
    }
}

impl<V: Clone> LfuCache<V> {
    /// Get a copy of the value for `key`, bumping its frequency.
    ///
    /// Store `Arc<T>` to share values instead of copying them.
    pub fn get(&self, key: &str) -> Option<V> {
        let mut index = self.index.lock();
        match index.get(key) {
            Some(value) => {
                self.stats.record_hit();
                Some(value.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }
}

impl<V> Default for LfuCache<V> {
    fn default() -> Self {
        Self::new()
    }
}
