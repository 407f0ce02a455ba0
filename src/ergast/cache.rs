//! In-memory LRU cache of raw upstream response bodies, keyed by request URL.

use lru::LruCache;
use std::{
    num::NonZeroUsize,
    sync::{Arc, Mutex},
};

#[derive(Clone)]
pub struct ResponseCache {
    entries: Arc<Mutex<LruCache<String, String>>>,
}

impl ResponseCache {
    /// A cache holding up to `capacity` bodies, or `None` when `capacity` is 0.
    pub fn with_capacity(capacity: usize) -> Option<Self> {
        NonZeroUsize::new(capacity).map(|cap| Self {
            entries: Arc::new(Mutex::new(LruCache::new(cap))),
        })
    }

    pub fn get(&self, url: &str) -> Option<String> {
        // A poisoned lock only means another request panicked mid-update; treat as a miss.
        let mut entries = self.entries.lock().ok()?;
        entries.get(url).cloned()
    }

    pub fn put(&self, url: String, body: String) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.put(url, body);
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_capacity_disables_cache() {
        assert!(ResponseCache::with_capacity(0).is_none());
    }

    #[test]
    fn test_get_and_put() {
        let cache = ResponseCache::with_capacity(4).unwrap();
        assert!(cache.get("http://x/2008/results.json").is_none());

        cache.put("http://x/2008/results.json".to_string(), "{}".to_string());
        assert_eq!(cache.get("http://x/2008/results.json").as_deref(), Some("{}"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_least_recently_used_is_evicted() {
        let cache = ResponseCache::with_capacity(2).unwrap();
        cache.put("a".to_string(), "1".to_string());
        cache.put("b".to_string(), "2".to_string());

        // Touch "a" so "b" becomes the eviction candidate.
        assert!(cache.get("a").is_some());
        cache.put("c".to_string(), "3".to_string());

        assert!(cache.get("a").is_some());
        assert!(cache.get("b").is_none());
        assert!(cache.get("c").is_some());
    }

    #[test]
    fn test_clones_share_entries() {
        let cache = ResponseCache::with_capacity(2).unwrap();
        let other = cache.clone();
        other.put("a".to_string(), "1".to_string());
        assert_eq!(cache.get("a").as_deref(), Some("1"));

        assert_eq!(other.len(), 1);
    }
}
