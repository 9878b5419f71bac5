//! Frequency index and batch eviction
//!
//! Unsynchronized key → entry map. Every entry carries an access counter;
//! eviction sorts the whole population by that counter, drops the coldest
//! entries and resets the survivors back to 1.

use std::collections::HashMap;

use ahash::RandomState;

/// Stored value plus its access frequency
struct Entry<V> {
    value: V,
    freq: u64,
}

/// Key → entry map with approximate LFU eviction
pub(crate) struct FrequencyIndex<V> {
    entries: HashMap<String, Entry<V>, RandomState>,
}

impl<V> FrequencyIndex<V> {
    /// Create an empty index
    pub fn new() -> Self {
        Self {
            entries: HashMap::with_hasher(RandomState::new()),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Look up a value, bumping its frequency
    pub fn get(&mut self, key: &str) -> Option<&V> {
        self.entries.get_mut(key).map(|entry| {
            entry.freq = entry.freq.saturating_add(1);
            &entry.value
        })
    }

    /// Frequency of `key`, or 0 when absent
    pub fn frequency(&self, key: &str) -> u64 {
        self.entries.get(key).map_or(0, |entry| entry.freq)
    }

    /// Overwrite the value of an existing key, keeping its frequency.
    ///
    /// Hands the value back when the key is absent.
    pub fn update(&mut self, key: &str, value: V) -> std::result::Result<(), V> {
        match self.entries.get_mut(key) {
            Some(entry) => {
                entry.value = value;
                Ok(())
            }
            None => Err(value),
        }
    }

    /// Insert a new key at frequency 1
    pub fn insert(&mut self, key: String, value: V) {
        self.entries.insert(key, Entry { value, freq: 1 });
    }

    pub fn remove(&mut self, key: &str) -> Option<V> {
        self.entries.remove(key).map(|entry| entry.value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Owned snapshot of every key
    pub fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    /// Remove up to `count` of the least frequently used entries.
    ///
    /// Survivors are reset to frequency 1 even when nothing is removed.
    /// Returns the number of entries removed.
    pub fn evict(&mut self, count: usize) -> usize {
        let count = count.min(self.entries.len());

        if count > 0 {
            let mut ranked: Vec<(&String, u64)> = self
                .entries
                .iter()
                .map(|(key, entry)| (key, entry.freq))
                .collect();

            // Stable: ties keep map iteration order for this pass
            ranked.sort_by(|a, b| b.1.cmp(&a.1));

            let victims: Vec<String> = ranked[ranked.len() - count..]
                .iter()
                .map(|(key, _)| (*key).clone())
                .collect();

            for key in &victims {
                self.entries.remove(key);
            }
        }

        for entry in self.entries.values_mut() {
            entry.freq = 1;
        }

        count
    }
}
