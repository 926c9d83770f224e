//! Station provider response DTOs.
//!
//! These types map directly to the provider's nearest-stations JSON
//! responses (NREL alternative-fuel-stations shape). They use `Option`
//! liberally because the provider omits fields rather than sending null
//! in many cases.

use serde::{Deserialize, Serialize};

/// Filter parameters for a nearest-stations query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StationFilter {
    /// Restrict results to a connector type (e.g. "TESLA", "CCS").
    pub connector: Option<String>,

    /// Maximum number of results to request.
    pub limit: usize,
}

impl StationFilter {
    /// Restrict the filter to a connector type.
    pub fn with_connector(mut self, connector: impl Into<String>) -> Self {
        self.connector = Some(connector.into());
        self
    }
}

impl Default for StationFilter {
    fn default() -> Self {
        Self {
            connector: None,
            limit: 20,
        }
    }
}

/// Response from the nearest-stations endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct StationsNearResponse {
    /// Total matches before the result limit was applied.
    pub total_results: Option<u32>,

    /// The stations, nearest first.
    pub fuel_stations: Option<Vec<RawStationRecord>>,
}

/// A raw station record as returned by the provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawStationRecord {
    /// Provider station id.
    pub id: i64,

    /// Station display name.
    pub station_name: String,

    /// Street address.
    pub street_address: Option<String>,

    /// City.
    pub city: Option<String>,

    /// Two-letter state code.
    pub state: Option<String>,

    /// Station latitude in decimal degrees.
    pub latitude: f64,

    /// Station longitude in decimal degrees.
    pub longitude: f64,

    /// Charging network name.
    pub ev_network: Option<String>,

    /// Connector types offered (may contain duplicates).
    pub ev_connector_types: Option<Vec<String>>,

    /// Number of DC fast ports.
    pub ev_dc_fast_num: Option<u32>,

    /// Number of Level 2 ports.
    pub ev_level2_evse_num: Option<u32>,

    /// Pricing display string.
    pub ev_pricing: Option<String>,

    /// Access code ("public" / "private").
    pub access_code: Option<String>,

    /// Operating hours display string.
    pub access_days_time: Option<String>,

    /// Facility type (e.g. "TRAVEL_CENTER", "HOTEL").
    pub facility_type: Option<String>,

    /// Status code: "E" open, "P" planned, "T" temporarily unavailable.
    pub status_code: Option<String>,

    /// Distance from the query point in miles, when the provider
    /// computed it.
    pub distance: Option<f64>,
}
