//! Map whose entries expire after a number of idle ticks.

use std::hash::Hash;

use rustc_hash::FxHashMap;

#[derive(Clone, Debug)]
struct Entry<V> {
    value: V,
    ttl: u32,
}

/// A map with a per-entry time-to-live, counted in `prune` calls.
///
/// Inserting or reading an entry resets its ttl to the maximum. `prune`
/// evicts entries whose ttl has already run out and decrements the rest, so
/// an entry untouched for `max_ttl + 1` ticks is gone.
#[derive(Clone, Debug)]
pub struct TtlCache<K, V> {
    contents: FxHashMap<K, Entry<V>>,
    max_ttl: u32,
}

impl<K: Eq + Hash, V> TtlCache<K, V> {
    /// Create an empty cache.
    #[must_use]
    pub fn new(max_ttl: u32) -> Self {
        Self {
            contents: FxHashMap::default(),
            max_ttl,
        }
    }

    /// The ttl given to touched entries.
    #[must_use]
    pub fn max_ttl(&self) -> u32 {
        self.max_ttl
    }

    /// Look up an entry and refresh its ttl.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let max_ttl = self.max_ttl;
        self.contents.get_mut(key).map(|entry| {
            entry.ttl = max_ttl;
            &entry.value
        })
    }

    /// Check for an entry without refreshing it.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.contents.contains_key(key)
    }

    /// Insert an entry with a fresh ttl, returning the value it replaced.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.contents
            .insert(
                key,
                Entry {
                    value,
                    ttl: self.max_ttl,
                },
            )
            .map(|old| old.value)
    }

    /// The entry for `key`, inserted from `make` if absent; refreshed either way.
    pub fn get_or_insert_with(&mut self, key: K, make: impl FnOnce() -> V) -> &V {
        let max_ttl = self.max_ttl;
        let entry = self.contents.entry(key).or_insert_with(|| Entry {
            value: make(),
            ttl: max_ttl,
        });
        entry.ttl = max_ttl;
        &entry.value
    }

    /// Advance one tick. Returns the number of evicted entries.
    pub fn prune(&mut self) -> usize {
        let before = self.contents.len();
        self.contents.retain(|_, entry| {
            if entry.ttl == 0 {
                false
            } else {
                entry.ttl -= 1;
                true
            }
        });
        before - self.contents.len()
    }

    /// Number of live entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.contents.len()
    }

    /// True when no entries are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.contents.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_ttl_lives_one_tick() {
        let mut cache = TtlCache::new(0);
        cache.insert("a", 1);
        assert_eq!(cache.get(&"a"), Some(&1));

        assert_eq!(cache.prune(), 1);
        assert!(cache.get(&"a").is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_access_refreshes_ttl() {
        let mut cache = TtlCache::new(1);
        cache.insert("a", 1);
        cache.insert("b", 2);

        assert_eq!(cache.prune(), 0);
        assert_eq!(cache.get(&"a"), Some(&1));

        // "b" ran out, "a" was refreshed
        assert_eq!(cache.prune(), 1);
        assert!(cache.contains_key(&"a"));
        assert!(!cache.contains_key(&"b"));

        assert_eq!(cache.prune(), 1);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_get_or_insert_with() {
        let mut cache = TtlCache::new(0);
        assert_eq!(*cache.get_or_insert_with(7, || "seven"), "seven");
        assert_eq!(*cache.get_or_insert_with(7, || "other"), "seven");
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.insert(7, "again"), Some("seven"));
        cache.clear();
        assert!(cache.is_empty());
    }
}
