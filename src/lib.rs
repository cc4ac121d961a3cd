pub mod neighbors;
pub mod pair_cache;
pub mod spec;
pub mod symmetric_cache;
pub mod sync;

pub use neighbors::CachedDistance;
pub use pair_cache::PairCache;
pub use spec::CacheSpec;
pub use symmetric_cache::SymmetricPairCache;
pub use sync::SharedSymmetricCache;
