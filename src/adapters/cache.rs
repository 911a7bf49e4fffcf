//! Response Cache
//!
//! TTL cache for HTTP responses keyed by request (URL or query).
//! Expired entries are skipped on read and dropped on cleanup.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Cache entry with TTL tracking
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    pub value: V,
    pub inserted_at: Instant,
    pub ttl: Duration,
}

impl<V> CacheEntry<V> {
    pub fn new(value: V, ttl: Duration) -> Self {
        Self {
            value,
            inserted_at: Instant::now(),
            ttl,
        }
    }

    /// Check if entry is still valid
    pub fn is_valid(&self) -> bool {
        self.inserted_at.elapsed() < self.ttl
    }
}

#[derive(Debug)]
pub struct TtlCache<V> {
    entries: HashMap<String, CacheEntry<V>>,
    default_ttl: Duration,
    max_entries: usize,
}

impl<V: Clone> TtlCache<V> {
    /// Search results (1 minute)
    pub const SEARCH_TTL: Duration = Duration::from_secs(60);
    /// Pump feed (30 seconds)
    pub const PUMP_TTL: Duration = Duration::from_secs(30);
    /// Security reports (5 minutes)
    pub const REPORT_TTL: Duration = Duration::from_secs(300);
    pub const DEFAULT_MAX_ENTRIES: usize = 500;

    pub fn new(default_ttl: Duration) -> Self {
        Self::with_capacity(default_ttl, Self::DEFAULT_MAX_ENTRIES)
    }

    pub fn with_capacity(default_ttl: Duration, max_entries: usize) -> Self {
        Self {
            entries: HashMap::new(),
            default_ttl,
            max_entries: max_entries.max(1),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        let ttl = self.default_ttl;
        self.insert_with_ttl(key, value, ttl);
    }

    pub fn insert_with_ttl(&mut self, key: impl Into<String>, value: V, ttl: Duration) {
        if self.entries.len() >= self.max_entries {
            self.cleanup();
        }

        // Still at capacity after cleanup? Remove oldest entry
        if self.entries.len() >= self.max_entries {
            self.remove_oldest();
        }

        self.entries.insert(key.into(), CacheEntry::new(value, ttl));
    }

    /// Cloned value if present and unexpired
    pub fn get(&self, key: &str) -> Option<V> {
        self.entries
            .get(key)
            .filter(|entry| entry.is_valid())
            .map(|entry| entry.value.clone())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.get(key).is_some_and(|entry| entry.is_valid())
    }

    pub fn remove(&mut self, key: &str) -> Option<V> {
        self.entries.remove(key).map(|e| e.value)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Remove expired entries
    pub fn cleanup(&mut self) {
        self.entries.retain(|_, entry| entry.is_valid());
    }

    fn remove_oldest(&mut self) {
        if let Some(oldest_key) = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.inserted_at)
            .map(|(key, _)| key.clone())
        {
            self.entries.remove(&oldest_key);
        }
    }

    /// Number of entries (including expired)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn valid_count(&self) -> usize {
        self.entries.values().filter(|e| e.is_valid()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut cache = TtlCache::new(Duration::from_secs(60));
        cache.insert("bonk", vec![1, 2, 3]);

        assert_eq!(cache.get("bonk"), Some(vec![1, 2, 3]));
        assert!(cache.contains("bonk"));
        assert_eq!(cache.get("wif"), None);
    }

    #[test]
    fn test_expired_entry_is_skipped() {
        let mut cache = TtlCache::new(Duration::from_secs(60));
        cache.insert_with_ttl("bonk", 1u32, Duration::ZERO);

        assert_eq!(cache.get("bonk"), None);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.valid_count(), 0);

        cache.cleanup();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut cache = TtlCache::with_capacity(Duration::from_secs(60), 2);
        cache.insert("a", 1u32);
        std::thread::sleep(Duration::from_millis(2));
        cache.insert("b", 2u32);
        std::thread::sleep(Duration::from_millis(2));
        cache.insert("c", 3u32);

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.get("b"), Some(2));
        assert_eq!(cache.get("c"), Some(3));
    }

    #[test]
    fn test_remove_and_clear() {
        let mut cache = TtlCache::new(TtlCache::<u32>::SEARCH_TTL);
        cache.insert("a", 1u32);
        cache.insert("b", 2u32);

        assert_eq!(cache.remove("a"), Some(1));
        cache.clear();
        assert!(cache.is_empty());
    }
}
