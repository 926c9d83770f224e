//! Normalized charging-station representation.

use serde::Serialize;

use super::GeoPoint;

/// Operational status of a charging station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StationStatus {
    /// Open and believed usable.
    Available,
    /// Temporarily occupied or not yet open.
    Busy,
    /// Out of service.
    Offline,
}

/// A charging station, normalized from a raw provider record.
///
/// This is the shape handed to the surrounding application; field names
/// are stable and camelCase on the wire.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargingStation {
    /// Provider station id.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Station coordinates.
    pub location: GeoPoint,

    /// Charging network name (e.g. "Tesla", "Electrify America").
    pub network: String,

    /// Connector types offered, deduplicated.
    pub connector_types: Vec<String>,

    /// Number of DC fast ports.
    pub dc_fast_count: u32,

    /// Number of Level 2 ports.
    pub level2_count: u32,

    /// Pricing display string.
    pub pricing: String,

    /// Access code ("public" / "private").
    pub access_code: String,

    /// Operating hours display string.
    pub hours: String,

    /// Facility type display string (e.g. "TRAVEL_CENTER").
    pub facility_type: String,

    /// Operational status.
    pub status: StationStatus,

    /// Distance from the query point in miles.
    pub distance_from_query_miles: f64,

    /// Charging speed class display string.
    pub charging_speed_class: String,

    /// Catalog-level 20→80% charge-time estimate in minutes. Not specific
    /// to any trip's actual starting charge.
    pub estimated_charge_time_minutes: u32,

    /// Nearby amenities, deduplicated.
    pub amenities: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&StationStatus::Available).unwrap(),
            r#""available""#
        );
        assert_eq!(
            serde_json::to_string(&StationStatus::Busy).unwrap(),
            r#""busy""#
        );
        assert_eq!(
            serde_json::to_string(&StationStatus::Offline).unwrap(),
            r#""offline""#
        );
    }

    #[test]
    fn station_serializes_camel_case() {
        let station = ChargingStation {
            id: "151631".to_string(),
            name: "Harris Ranch Supercharger".to_string(),
            location: GeoPoint::new(36.2540, -120.2380).unwrap(),
            network: "Tesla".to_string(),
            connector_types: vec!["TESLA".to_string()],
            dc_fast_count: 18,
            level2_count: 0,
            pricing: "$0.36/kWh".to_string(),
            access_code: "public".to_string(),
            hours: "24 hours daily".to_string(),
            facility_type: "TRAVEL_CENTER".to_string(),
            status: StationStatus::Available,
            distance_from_query_miles: 4.2,
            charging_speed_class: "250 kW Supercharger".to_string(),
            estimated_charge_time_minutes: 17,
            amenities: vec!["Restrooms".to_string(), "WiFi".to_string()],
        };

        let json = serde_json::to_value(&station).unwrap();
        assert_eq!(json["distanceFromQueryMiles"], 4.2);
        assert_eq!(json["estimatedChargeTimeMinutes"], 17);
        assert_eq!(json["chargingSpeedClass"], "250 kW Supercharger");
        assert_eq!(json["dcFastCount"], 18);
        assert_eq!(json["status"], "available");
    }
}
