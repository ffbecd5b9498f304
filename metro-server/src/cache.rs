//! Caching layer for single-source shortest path results.
//!
//! One shortest-path tree answers every route query from the same start
//! station, so trees are cached per source. Keys carry the snapshot
//! generation: after a reload, trees computed on the old network are never
//! handed out again and simply age out.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::trace;

use crate::domain::StationId;
use crate::planner::ShortestPaths;

/// Cache key: (snapshot generation, source station).
type RouteKey = (u64, StationId);

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(10 * 60),
            max_capacity: 256,
        }
    }
}

impl CacheConfig {
    /// Default TTL with the given capacity.
    pub fn with_capacity(max_capacity: u64) -> Self {
        Self {
            max_capacity,
            ..Self::default()
        }
    }
}

/// Cache of shortest-path trees.
pub struct RouteCache {
    trees: MokaCache<RouteKey, Arc<ShortestPaths>>,
}

impl RouteCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let trees = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { trees }
    }

    /// Get a cached tree.
    pub async fn get(&self, generation: u64, source: StationId) -> Option<Arc<ShortestPaths>> {
        self.trees.get(&(generation, source)).await
    }

    /// Insert a tree computed on snapshot `generation`.
    pub async fn insert(&self, generation: u64, paths: Arc<ShortestPaths>) {
        self.trees.insert((generation, paths.source()), paths).await;
    }

    /// Return the cached tree for `source`, computing and caching it on a miss.
    ///
    /// Errors from `compute` are returned as-is and nothing is cached.
    pub async fn get_or_compute<E, F>(
        &self,
        generation: u64,
        source: StationId,
        compute: F,
    ) -> Result<Arc<ShortestPaths>, E>
    where
        F: FnOnce() -> Result<ShortestPaths, E>,
    {
        if let Some(cached) = self.get(generation, source).await {
            trace!(generation, station = %source, "route cache hit");
            return Ok(cached);
        }

        let entry = Arc::new(compute()?);
        self.insert(generation, entry.clone()).await;
        Ok(entry)
    }

    /// Get cache statistics (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.trees.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.trees.invalidate_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::test_support::{id, network};
    use crate::planner::{Algorithm, PathError, compute_distances};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn compute(source: u32) -> Result<ShortestPaths, PathError> {
        let net = network(&[(1, "A", "1"), (2, "B", "1")], &[(1, 2, 60)]);
        compute_distances(&net, id(source), Algorithm::Dijkstra)
    }

    #[test]
    fn default_config() {
        let config = CacheConfig::default();
        assert_eq!(config.ttl, Duration::from_secs(600));
        assert_eq!(config.max_capacity, 256);
        assert_eq!(CacheConfig::with_capacity(8).max_capacity, 8);
    }

    #[tokio::test]
    async fn computes_once_per_source() {
        let cache = RouteCache::new(&CacheConfig::default());
        let calls = AtomicUsize::new(0);

        for _ in 0..3 {
            let paths = cache
                .get_or_compute(1, id(1), || {
                    calls.fetch_add(1, Ordering::SeqCst);
                    compute(1)
                })
                .await
                .unwrap();
            assert_eq!(paths.distance(id(2)), Some(60));
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn new_generation_misses() {
        let cache = RouteCache::new(&CacheConfig::default());
        cache.get_or_compute(1, id(1), || compute(1)).await.unwrap();

        assert!(cache.get(1, id(1)).await.is_some());
        assert!(cache.get(2, id(1)).await.is_none());
        assert!(cache.get(1, id(2)).await.is_none());
    }

    #[tokio::test]
    async fn errors_are_not_cached() {
        let cache = RouteCache::new(&CacheConfig::default());
        let err = cache
            .get_or_compute(1, id(9), || compute(9))
            .await
            .unwrap_err();
        assert_eq!(err, PathError::UnknownStation(id(9)));
        assert!(cache.get(1, id(9)).await.is_none());
    }

    #[tokio::test]
    async fn invalidate_clears_entries() {
        let cache = RouteCache::new(&CacheConfig::default());
        cache.get_or_compute(1, id(1), || compute(1)).await.unwrap();
        cache.invalidate_all();
        assert!(cache.get(1, id(1)).await.is_none());
    }
}
