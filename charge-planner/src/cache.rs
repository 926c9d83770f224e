//! Caching layer for station lookups.
//!
//! Station availability changes slowly relative to a planning session, so
//! repeated queries near the same spot can share a result. Queries are
//! keyed on a geographic grid (0.01°, roughly two-thirds of a mile) which
//! bounds cache cardinality while keeping nearby queries distinct.
//!
//! The cache is advisory only: entries never block correctness if stale
//! or absent, and failed lookups are never cached, so an outage cannot
//! poison later queries.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache as MokaCache;

use crate::directory::{DirectoryError, RawStationRecord, StationFilter, StationSource};
use crate::domain::GeoPoint;

/// Grid resolution: coordinates are quantized to 0.01 degrees.
const GRID_SCALE: f64 = 100.0;

/// Cache key: quantized (latitude, longitude), whole-mile radius, result
/// limit, and connector filter.
type QueryKey = (i32, i32, u32, usize, Option<String>);

/// Cached lookup result.
type QueryEntry = Arc<Vec<RawStationRecord>>;

/// Configuration for the station cache.
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
            ttl: Duration::from_secs(300),
            max_capacity: 500,
        }
    }
}

/// Station source with caching.
///
/// Wraps any [`StationSource`] and caches successful lookups. Because it
/// is itself a `StationSource`, it slots between the real client and a
/// [`StationDirectory`](crate::directory::StationDirectory) without
/// either knowing. Concurrent readers and writers are safe; the backing
/// cache is a concurrent map.
pub struct CachedSource<S> {
    source: S,
    cache: MokaCache<QueryKey, QueryEntry>,
}

impl<S> CachedSource<S> {
    /// Create a new cached source with the given configuration.
    pub fn new(source: S, config: &CacheConfig) -> Self {
        let cache = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { source, cache }
    }

    /// Compute the cache key for a query.
    fn query_key(point: &GeoPoint, radius_miles: f64, filter: &StationFilter) -> QueryKey {
        (
            (point.latitude() * GRID_SCALE).round() as i32,
            (point.longitude() * GRID_SCALE).round() as i32,
            radius_miles.round() as u32,
            filter.limit,
            filter.connector.clone(),
        )
    }

    /// Number of cached entries (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }
}

#[async_trait]
impl<S: StationSource> StationSource for CachedSource<S> {
    async fn query_near(
        &self,
        point: &GeoPoint,
        radius_miles: f64,
        filter: &StationFilter,
    ) -> Result<Vec<RawStationRecord>, DirectoryError> {
        let key = Self::query_key(point, radius_miles, filter);

        if let Some(cached) = self.cache.get(&key).await {
            return Ok(cached.as_ref().clone());
        }

        // Errors propagate uncached so the next query retries the source.
        let records = self.source.query_near(point, radius_miles, filter).await?;

        self.cache
            .insert(key, Arc::new(records.clone()))
            .await;

        Ok(records)
    }
}
