//! Mock station sources for testing without provider access.
//!
//! [`StaticSource`] serves canned records as if they were live results;
//! [`FailingSource`] fails every lookup, for exercising the fallback
//! path. Both are also useful for development without an API key.

use async_trait::async_trait;

use crate::domain::GeoPoint;

use super::error::DirectoryError;
use super::source::StationSource;
use super::types::{RawStationRecord, StationFilter};

/// Station source that serves a fixed record list.
///
/// Mimics the real client's interface. The query point, radius, and
/// connector filter are ignored; mock data is static. The filter's
/// result limit is honored.
#[derive(Debug, Clone)]
pub struct StaticSource {
    records: Vec<RawStationRecord>,
}

impl StaticSource {
    /// Create a source serving the given records.
    pub fn new(records: Vec<RawStationRecord>) -> Self {
        Self { records }
    }

    /// A small sample set near the I-5 corridor, with provider-reported
    /// distances, for tests that need ready-made data.
    pub fn sample() -> Self {
        Self::new(vec![
            sample_record(101, "Coalinga Supercharger", 36.14, -120.36, 3.4),
            sample_record(102, "Harris Ranch Supercharger", 36.25, -120.24, 8.9),
            sample_record(103, "Avenal Plaza", 36.00, -120.12, 12.6),
        ])
    }
}

/// Build a Tesla-network sample record at the given distance.
pub fn sample_record(
    id: i64,
    name: &str,
    latitude: f64,
    longitude: f64,
    distance: f64,
) -> RawStationRecord {
    RawStationRecord {
        id,
        station_name: name.to_string(),
        street_address: None,
        city: None,
        state: Some("CA".to_string()),
        latitude,
        longitude,
        ev_network: Some("Tesla".to_string()),
        ev_connector_types: Some(vec!["TESLA".to_string()]),
        ev_dc_fast_num: Some(12),
        ev_level2_evse_num: None,
        ev_pricing: Some("$0.30/kWh".to_string()),
        access_code: Some("public".to_string()),
        access_days_time: Some("24 hours daily".to_string()),
        facility_type: Some("TRAVEL_CENTER".to_string()),
        status_code: Some("E".to_string()),
        distance: Some(distance),
    }
}

#[async_trait]
impl StationSource for StaticSource {
    async fn query_near(
        &self,
        _point: &GeoPoint,
        _radius_miles: f64,
        filter: &StationFilter,
    ) -> Result<Vec<RawStationRecord>, DirectoryError> {
        let mut records = self.records.clone();
        records.truncate(filter.limit);
        Ok(records)
    }
}

/// Station source that fails every lookup.
#[derive(Debug, Clone, Copy)]
pub struct FailingSource;

#[async_trait]
impl StationSource for FailingSource {
    async fn query_near(
        &self,
        _point: &GeoPoint,
        _radius_miles: f64,
        _filter: &StationFilter,
    ) -> Result<Vec<RawStationRecord>, DirectoryError> {
        Err(DirectoryError::Api {
            status: 503,
            message: "provider unavailable".to_string(),
        })
    }
}
