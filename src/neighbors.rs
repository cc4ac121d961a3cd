use crate::symmetric_cache::SymmetricPairCache;

use petgraph::stable_graph::StableGraph;

/// Memoizes a commutative distance function over `instances`, keyed by instance index.
pub struct CachedDistance<'a, T, F> {
    instances: &'a [T],
    distance_fn: F,
    cache: SymmetricPairCache<usize, f64>,
    evaluations: usize,
    hits: usize,
}

impl<'a, T, F> CachedDistance<'a, T, F>
where
    F: Fn(&T, &T) -> f64,
{
    pub fn new(instances: &'a [T], distance_fn: F) -> Self {
        Self::with_cache(instances, distance_fn, SymmetricPairCache::new())
    }

    /// Reuses `cache`, e.g. one filled during an earlier phase over the same `instances`.
    pub fn with_cache(
        instances: &'a [T],
        distance_fn: F,
        cache: SymmetricPairCache<usize, f64>,
    ) -> Self {
        CachedDistance {
            instances,
            distance_fn,
            cache,
            evaluations: 0,
            hits: 0,
        }
    }

    pub fn num_instances(&self) -> usize {
        self.instances.len()
    }

    /// Panics if `i` or `j` is out of range.
    pub fn distance(&mut self, i: usize, j: usize) -> f64 {
        let n = self.instances.len();
        assert!(i < n && j < n, "Instance pair ({}, {}) out of range", i, j);

        if let Some(d) = self.cache.get(&i, &j) {
            self.hits += 1;
            return *d;
        }

        let d = (self.distance_fn)(&self.instances[i], &self.instances[j]);
        self.evaluations += 1;
        log::trace!("Evaluated distance({}, {}) = {}", i, j, d);
        self.cache.put(i, j, d);

        d
    }

    /// The closest other instance to `i`. Ties go to the lowest index.
    pub fn nearest_neighbor(&mut self, i: usize) -> Option<(usize, f64)> {
        self.k_nearest(i, 1).into_iter().next()
    }

    /// Up to `k` other instances closest to `i`, sorted by distance and then by index.
    pub fn k_nearest(&mut self, i: usize, k: usize) -> Vec<(usize, f64)> {
        assert!(
            i < self.instances.len(),
            "Instance index {} out of range",
            i
        );

        let mut neighbors: Vec<_> = (0..self.instances.len())
            .filter(|j| *j != i)
            .map(|j| (j, self.distance(i, j)))
            .collect();
        neighbors.sort_by(|(j1, d1), (j2, d2)| d1.total_cmp(d2).then(j1.cmp(j2)));
        neighbors.truncate(k);

        neighbors
    }

    /// Directed k-NN graph. Node weights are instance indices and edge `i -> j` means `j` is one
    /// of the `k` nearest neighbors of `i`, weighted by their distance.
    pub fn neighbor_graph(&mut self, k: usize) -> StableGraph<usize, f64> {
        let mut graph = StableGraph::default();
        let nodes: Vec<_> = (0..self.instances.len())
            .map(|i| graph.add_node(i))
            .collect();
        for i in 0..self.instances.len() {
            for (j, d) in self.k_nearest(i, k) {
                graph.add_edge(nodes[i], nodes[j], d);
            }
        }
        log::debug!(
            "Built {}-NN graph over {} instances with {} distance evaluations",
            k,
            graph.node_count(),
            self.evaluations
        );

        graph
    }

    /// Number of times the distance function actually ran.
    pub fn evaluations(&self) -> usize {
        self.evaluations
    }

    /// Number of distance requests answered from the cache.
    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn cache(&self) -> &SymmetricPairCache<usize, f64> {
        &self.cache
    }

    pub fn into_cache(self) -> SymmetricPairCache<usize, f64> {
        self.cache
    }
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝
