//! Bounded fetch cache
//!
//! Memoizes successful API reads by username. Entries are evicted least
//! recently used first once the cache is full, and expire after a TTL.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// A cached value and the moment it was stored.
#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    stored_at: Instant,
}

/// Size and age bounded cache keyed by string.
///
/// A capacity of zero disables caching entirely.
#[derive(Debug, Clone)]
pub struct FetchCache<V> {
    /// Cached values indexed by key
    entries: HashMap<String, CacheEntry<V>>,
    /// Keys ordered most recently used first
    order: Vec<String>,
    /// Maximum number of entries
    capacity: usize,
    /// Age after which an entry is treated as absent
    ttl: Option<Duration>,
}

impl<V: Clone> FetchCache<V> {
    /// Create an empty cache.
    pub fn new(capacity: usize, ttl: Option<Duration>) -> Self {
        Self {
            entries: HashMap::new(),
            order: Vec::new(),
            capacity,
            ttl,
        }
    }

    /// Look up a key, refreshing its recency.
    ///
    /// Expired entries are removed and reported as a miss.
    pub fn get(&mut self, key: &str) -> Option<V> {
        let expired = match self.entries.get(key) {
            Some(entry) => self.is_expired(entry),
            None => return None,
        };

        if expired {
            tracing::debug!(key, "cache entry expired");
            self.invalidate(key);
            return None;
        }

        self.touch(key);
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    /// Store a value, evicting the least recently used entry when full.
    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        if self.capacity == 0 {
            return;
        }

        let key = key.into();
        if !self.entries.contains_key(&key) {
            while self.entries.len() >= self.capacity {
                let Some(oldest) = self.order.pop() else {
                    break;
                };
                tracing::debug!(key = %oldest, "cache full, evicting least recently used");
                self.entries.remove(&oldest);
            }
        }

        self.entries.insert(
            key.clone(),
            CacheEntry {
                value,
                stored_at: Instant::now(),
            },
        );
        self.touch(&key);
    }

    /// Whether a live (unexpired) entry exists, without refreshing recency.
    pub fn contains(&self, key: &str) -> bool {
        self.entries
            .get(key)
            .is_some_and(|entry| !self.is_expired(entry))
    }

    /// Remove a single key. Returns `true` if it was present.
    pub fn invalidate(&mut self, key: &str) -> bool {
        self.order.retain(|k| k != key);
        self.entries.remove(key).is_some()
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    /// Number of stored entries, including ones that have expired but not
    /// yet been looked up.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn is_expired(&self, entry: &CacheEntry<V>) -> bool {
        self.ttl
            .is_some_and(|ttl| entry.stored_at.elapsed() >= ttl)
    }

    fn touch(&mut self, key: &str) {
        self.order.retain(|k| k != key);
        self.order.insert(0, key.to_string());
    }
}
