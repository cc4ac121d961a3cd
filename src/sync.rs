use crate::symmetric_cache::SymmetricPairCache;

use parking_lot::Mutex;
use std::hash::Hash;

/// A `SymmetricPairCache` that can be shared between threads.
///
/// Every operation takes the lock once. `get_or_compute` holds it for the whole
/// get-miss-compute-put sequence, so a value is computed at most once per unordered pair even
/// when many threads ask for it at the same time. The price is that computations never overlap.
#[derive(Debug)]
pub struct SharedSymmetricCache<K, V> {
    cache: Mutex<SymmetricPairCache<K, V>>,
}

impl<K, V> Default for SharedSymmetricCache<K, V> {
    fn default() -> Self {
        SharedSymmetricCache {
            cache: Mutex::new(SymmetricPairCache::default()),
        }
    }
}

impl<K: Hash + Eq, V> SharedSymmetricCache<K, V> {
    pub fn new() -> Self {
        Self::from_cache(SymmetricPairCache::new())
    }

    pub fn from_cache(cache: SymmetricPairCache<K, V>) -> Self {
        SharedSymmetricCache {
            cache: Mutex::new(cache),
        }
    }

    pub fn put(&self, a: K, b: K, value: V) {
        self.cache.lock().put(a, b, value);
    }

    pub fn remove(&self, a: &K, b: &K) -> bool {
        self.cache.lock().remove(a, b)
    }

    pub fn clear(&self) {
        self.cache.lock().clear();
    }

    pub fn size(&self) -> usize {
        self.cache.lock().size()
    }

    pub fn into_inner(self) -> SymmetricPairCache<K, V> {
        self.cache.into_inner()
    }
}

impl<K: Hash + Eq, V: Clone> SharedSymmetricCache<K, V> {
    pub fn get(&self, a: &K, b: &K) -> Option<V> {
        self.cache.lock().get(a, b).cloned()
    }

    pub fn get_or_compute(&self, a: K, b: K, compute: impl FnOnce() -> V) -> V {
        self.cache.lock().get_or_insert_with(a, b, compute).clone()
    }
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝

#[cfg(test)]
mod tests {
    use super::*;

    use std::panic::{self, AssertUnwindSafe};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_compute_at_most_once_per_pair() {
        let cache = Arc::new(SharedSymmetricCache::new());
        let evaluations = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let cache = Arc::clone(&cache);
                let evaluations = Arc::clone(&evaluations);
                thread::spawn(move || {
                    for i in 0..10u32 {
                        for j in 0..10u32 {
                            // Half the threads ask in the reverse orientation.
                            let (a, b) = if t % 2 == 0 { (i, j) } else { (j, i) };
                            let d = cache.get_or_compute(a, b, || {
                                evaluations.fetch_add(1, Ordering::SeqCst);
                                i.max(j) - i.min(j)
                            });
                            assert_eq!(d, i.max(j) - i.min(j));
                        }
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        // 10 self pairs plus 45 distinct unordered pairs.
        assert_eq!(evaluations.load(Ordering::SeqCst), 55);
        assert_eq!(cache.size(), 55);
    }

    #[test]
    fn test_cache_usable_after_panicking_compute() {
        let cache = SharedSymmetricCache::new();
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            cache.get_or_compute(1u32, 2u32, || -> u32 { panic!("distance failed") })
        }));

        assert!(result.is_err());
        assert_eq!(cache.size(), 0);
        assert_eq!(cache.get_or_compute(2, 1, || 1), 1);
        assert_eq!(cache.into_inner().as_pair_cache().size(), 1);
    }

    #[test]
    fn test_basic_operations() {
        let cache = SharedSymmetricCache::new();
        cache.put("a", "b", 1);

        assert_eq!(cache.get(&"b", &"a"), Some(1));
        assert!(cache.remove(&"b", &"a"));
        assert_eq!(cache.get(&"a", &"b"), None);

        cache.put("a", "c", 2);
        cache.clear();
        assert_eq!(cache.size(), 0);
        assert!(cache.into_inner().is_empty());
    }
}
