use crate::{neighbors::CachedDistance, pair_cache::PairCache, symmetric_cache::SymmetricPairCache};

use serde::{Deserialize, Serialize};
use std::hash::Hash;

/// Settings for the caches built by an experiment, usually read from a RON file, e.g.
///
/// ```text
/// (initial_capacity: 128)
/// ```
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct CacheSpec {
    /// Capacity hint for the number of distinct first keys.
    pub initial_capacity: usize,
}

impl CacheSpec {
    pub fn from_ron(s: &str) -> Result<Self, ron::Error> {
        ron::de::from_str(s)
    }

    pub fn make_pair<K1: Hash + Eq, K2: Hash + Eq, V>(&self) -> PairCache<K1, K2, V> {
        PairCache::with_capacity(self.initial_capacity)
    }

    pub fn make_symmetric<K: Hash + Eq, V>(&self) -> SymmetricPairCache<K, V> {
        SymmetricPairCache::with_capacity(self.initial_capacity)
    }

    pub fn make_distance_cache<'a, T, F>(
        &self,
        instances: &'a [T],
        distance_fn: F,
    ) -> CachedDistance<'a, T, F>
    where
        F: Fn(&T, &T) -> f64,
    {
        CachedDistance::with_cache(instances, distance_fn, self.make_symmetric())
    }
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝
