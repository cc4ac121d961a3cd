use fnv::FnvHashMap;
use std::hash::Hash;

/// Memoizes values keyed by an ordered pair of keys. `(k1, k2)` and `(k2, k1)` are distinct
/// entries.
///
/// Entries are stored in a map of maps, so `K1` and `K2` only need `Hash + Eq`, and all entries
/// sharing a first key can be dropped at once. There is no eviction; scope an instance to the
/// work that fills it and drop it afterwards.
#[derive(Clone, Debug)]
pub struct PairCache<K1, K2, V> {
    map: FnvHashMap<K1, FnvHashMap<K2, V>>,
    num_entries: usize,
}

impl<K1, K2, V> Default for PairCache<K1, K2, V> {
    fn default() -> Self {
        PairCache {
            map: FnvHashMap::default(),
            num_entries: 0,
        }
    }
}

impl<K1, K2, V> PairCache<K1, K2, V>
where
    K1: Hash + Eq,
    K2: Hash + Eq,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// `capacity` is a hint for the number of distinct first keys.
    pub fn with_capacity(capacity: usize) -> Self {
        PairCache {
            map: FnvHashMap::with_capacity_and_hasher(capacity, Default::default()),
            num_entries: 0,
        }
    }

    pub fn get(&self, k1: &K1, k2: &K2) -> Option<&V> {
        self.map.get(k1).and_then(|inner| inner.get(k2))
    }

    pub fn get_mut(&mut self, k1: &K1, k2: &K2) -> Option<&mut V> {
        self.map.get_mut(k1).and_then(|inner| inner.get_mut(k2))
    }

    pub fn contains(&self, k1: &K1, k2: &K2) -> bool {
        self.get(k1, k2).is_some()
    }

    /// Inserts or overwrites the entry for `(k1, k2)`.
    pub fn put(&mut self, k1: K1, k2: K2, value: V) {
        if self.map.entry(k1).or_default().insert(k2, value).is_none() {
            self.num_entries += 1;
        }
    }

    /// Returns the value for `(k1, k2)`, storing the result of `compute` first on a miss. Nothing
    /// is stored if `compute` panics.
    pub fn get_or_insert_with(&mut self, k1: K1, k2: K2, compute: impl FnOnce() -> V) -> &V {
        if self.contains(&k1, &k2) {
            // Both keys exist, so this neither allocates nor calls `compute`.
            self.map.entry(k1).or_default().entry(k2).or_insert_with(compute)
        } else {
            let value = compute();
            log::trace!("Pair cache miss");
            self.num_entries += 1;
            self.map.entry(k1).or_default().entry(k2).or_insert(value)
        }
    }

    /// Returns true iff an entry was actually removed.
    pub fn remove(&mut self, k1: &K1, k2: &K2) -> bool {
        let (removed, now_empty) = match self.map.get_mut(k1) {
            Some(inner) => (inner.remove(k2).is_some(), inner.is_empty()),
            None => return false,
        };
        if now_empty {
            self.map.remove(k1);
        }
        if removed {
            self.num_entries -= 1;
        }

        removed
    }

    /// Drops every entry whose first key is `k1`. Returns the number of entries dropped.
    pub fn remove_first_key(&mut self, k1: &K1) -> usize {
        let dropped = self.map.remove(k1).map_or(0, |inner| inner.len());
        self.num_entries -= dropped;
        log::debug!("Dropped {} entries sharing a first key", dropped);

        dropped
    }

    pub fn clear(&mut self) {
        log::debug!("Clearing {} pair cache entries", self.num_entries);
        self.map.clear();
        self.num_entries = 0;
    }

    /// Number of ordered-pair entries currently stored.
    pub fn size(&self) -> usize {
        self.num_entries
    }

    pub fn is_empty(&self) -> bool {
        self.num_entries == 0
    }
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝
