use std::collections::HashMap;
use std::time::{Duration, Instant};

use serde_json::Value;

/// Short-lived cache of resolved dot-paths.
///
/// Any write to the state clears the whole cache, so an entry can only go
/// stale by age. A zero TTL disables caching.
#[derive(Debug)]
pub(crate) struct PathCache {
    ttl: Duration,
    entries: HashMap<String, (Instant, Value)>,
}

impl PathCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
        }
    }

    pub fn get(&mut self, path: &str) -> Option<Value> {
        let (stored_at, value) = self.entries.get(path)?;
        if stored_at.elapsed() < self.ttl {
            return Some(value.clone());
        }
        self.entries.remove(path);
        None
    }

    pub fn insert(&mut self, path: &str, value: Value) {
        if self.ttl.is_zero() {
            return;
        }
        self.entries.insert(path.to_string(), (Instant::now(), value));
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_zero_ttl_disables_cache() {
        let mut cache = PathCache::new(Duration::ZERO);
        cache.insert("a", json!(1));
        assert_eq!(cache.len(), 0);
        assert!(cache.get("a").is_none());
    }

    #[test]
    fn test_entries_expire() {
        let mut cache = PathCache::new(Duration::from_millis(20));
        cache.insert("a", json!(1));
        assert_eq!(cache.get("a"), Some(json!(1)));

        std::thread::sleep(Duration::from_millis(40));
        assert!(cache.get("a").is_none());
        assert_eq!(cache.len(), 0);
    }
}
