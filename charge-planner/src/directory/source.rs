//! Station source seam and the degrade-not-fail directory.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::GeoPoint;

use super::error::DirectoryError;
use super::fallback::fallback_stations;
use super::types::{RawStationRecord, StationFilter};

/// Trait for looking up raw station records near a point.
///
/// This abstraction allows the directory and planner to be tested with
/// mock data, and lets the cache layer wrap any source transparently.
#[async_trait]
pub trait StationSource: Send + Sync {
    /// Fetch stations within `radius_miles` of `point` matching `filter`.
    ///
    /// An empty result is a legitimate answer; errors indicate the lookup
    /// itself failed.
    async fn query_near(
        &self,
        point: &GeoPoint,
        radius_miles: f64,
        filter: &StationFilter,
    ) -> Result<Vec<RawStationRecord>, DirectoryError>;
}

/// Station directory with degrade-not-fail semantics.
///
/// Wraps a [`StationSource`] and absorbs every lookup failure: a network
/// error, a non-success response, or a timeout all produce the fixed
/// fallback station set instead of an error. The substitution is logged.
/// An empty result from a healthy source passes through unchanged.
///
/// Lookups are never retried here; retries are a caller concern.
#[derive(Debug, Clone)]
pub struct StationDirectory<S> {
    source: S,
}

impl<S: StationSource> StationDirectory<S> {
    /// Create a directory over the given source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Fetch stations near a point, falling back to the static set on
    /// any source failure. Never fails.
    pub async fn query_near(
        &self,
        point: &GeoPoint,
        radius_miles: f64,
        filter: &StationFilter,
    ) -> Vec<RawStationRecord> {
        match self.source.query_near(point, radius_miles, filter).await {
            Ok(records) => {
                debug!(
                    latitude = point.latitude(),
                    longitude = point.longitude(),
                    radius_miles,
                    results = records.len(),
                    "station lookup succeeded"
                );
                records
            }
            Err(e) => {
                warn!(
                    latitude = point.latitude(),
                    longitude = point.longitude(),
                    radius_miles,
                    error = %e,
                    "station lookup failed, serving fallback set"
                );
                fallback_stations()
            }
        }
    }
}
