//! Cache Store Module
//!
//! Unsynchronized map of entries. Callers hold the owning lock around every call.

use std::collections::HashMap;

use tokio::time::Instant;

use crate::cache::{CacheEntry, Expiration};

// == Cache Store ==
/// Key-value storage with per-entry expiration.
#[derive(Debug, Default)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Expiration used when an insert asks for `Expiration::Default`
    default_expiration: Expiration,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store.
    ///
    /// `Expiration::Default` passed here is treated as `Never`.
    pub fn new(default_expiration: Expiration) -> Self {
        let default_expiration = match default_expiration {
            Expiration::Default => Expiration::Never,
            other => other,
        };

        Self {
            entries: HashMap::new(),
            default_expiration,
        }
    }

    // == Insert ==
    /// Stores a value, unconditionally replacing any previous entry for `key`.
    pub fn insert(&mut self, key: String, value: String, expiration: Expiration, now: Instant) {
        let entry = CacheEntry::new(value, expiration, self.default_expiration, now);
        self.entries.insert(key, entry);
    }

    // == Add ==
    /// Stores a value only if `key` is absent or expired.
    ///
    /// Returns false, leaving the store untouched, when a live entry exists.
    pub fn add(&mut self, key: String, value: String, expiration: Expiration, now: Instant) -> bool {
        if self.lookup(&key, now).is_some() {
            return false;
        }
        self.insert(key, value, expiration, now);
        true
    }

    // == Lookup ==
    /// Returns the live entry for `key` at `now`, skipping expired ones.
    pub fn lookup(&self, key: &str, now: Instant) -> Option<&CacheEntry> {
        self.entries
            .get(key)
            .filter(|entry| !entry.is_expired_at(now))
    }

    // == Remove ==
    /// Removes an entry by key. Returns true if an entry was present.
    pub fn remove(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    // == Remove Expired ==
    /// Removes all entries expired at `now`.
    ///
    /// Returns the number of entries removed.
    pub fn remove_expired(&mut self, now: Instant) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired_at(now));
        before - self.entries.len()
    }

    // == Snapshot ==
    /// Copies every entry still live at `now`.
    pub fn snapshot(&self, now: Instant) -> HashMap<String, CacheEntry> {
        self.entries
            .iter()
            .filter(|(_, entry)| !entry.is_expired_at(now))
            .map(|(key, entry)| (key.clone(), entry.clone()))
            .collect()
    }

    // == Clear ==
    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    // == Length ==
    /// Returns the number of stored entries, including expired ones not yet removed.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
