use crate::pair_cache::PairCache;

use std::hash::Hash;

/// Memoizes a commutative two-argument computation. `(a, b)` and `(b, a)` resolve to the same
/// entry for every operation.
///
/// Operations here never store a second orientation of a pair. Lookups and removals try
/// `(a, b)` before `(b, a)`; `put` writes into whichever orientation is already stored, or
/// `(a, b)` for a new pair. No ordering on `K` is needed.
#[derive(Clone, Debug)]
pub struct SymmetricPairCache<K, V> {
    cache: PairCache<K, K, V>,
}

impl<K, V> Default for SymmetricPairCache<K, V> {
    fn default() -> Self {
        SymmetricPairCache {
            cache: PairCache::default(),
        }
    }
}

impl<K: Hash + Eq, V> SymmetricPairCache<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        SymmetricPairCache {
            cache: PairCache::with_capacity(capacity),
        }
    }

    /// Wraps an existing ordered cache. Pairs already stored in both orientations stay that way
    /// until one of them is removed.
    pub fn from_pair_cache(cache: PairCache<K, K, V>) -> Self {
        SymmetricPairCache { cache }
    }

    /// True iff only the reversed orientation of `(a, b)` is stored.
    fn stored_reversed(&self, a: &K, b: &K) -> bool {
        !self.cache.contains(a, b) && self.cache.contains(b, a)
    }

    pub fn get(&self, a: &K, b: &K) -> Option<&V> {
        self.cache.get(a, b).or_else(|| self.cache.get(b, a))
    }

    pub fn contains(&self, a: &K, b: &K) -> bool {
        self.get(a, b).is_some()
    }

    /// Inserts or overwrites the entry for the unordered pair `{a, b}`.
    pub fn put(&mut self, a: K, b: K, value: V) {
        if self.stored_reversed(&a, &b) {
            self.cache.put(b, a, value);
        } else {
            self.cache.put(a, b, value);
        }
    }

    /// Returns the value for `{a, b}`, storing the result of `compute` first on a miss.
    pub fn get_or_insert_with(&mut self, a: K, b: K, compute: impl FnOnce() -> V) -> &V {
        if self.stored_reversed(&a, &b) {
            self.cache.get_or_insert_with(b, a, compute)
        } else {
            self.cache.get_or_insert_with(a, b, compute)
        }
    }

    /// Returns true iff an entry was removed in either orientation.
    pub fn remove(&mut self, a: &K, b: &K) -> bool {
        self.cache.remove(a, b) || self.cache.remove(b, a)
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }

    /// Number of physically stored entries. A pair wrapped by `from_pair_cache` in both
    /// orientations counts twice.
    pub fn size(&self) -> usize {
        self.cache.size()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn as_pair_cache(&self) -> &PairCache<K, K, V> {
        &self.cache
    }

    pub fn into_inner(self) -> PairCache<K, K, V> {
        self.cache
    }
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝
