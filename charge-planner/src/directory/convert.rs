//! Conversion from raw provider records to normalized stations.

use crate::charging::ChargeCurve;
use crate::domain::{ChargingStation, GeoPoint, StationStatus, VehicleProfile};

use super::types::RawStationRecord;

/// Starting state of charge for the catalog-level charge-time estimate.
const CATALOG_START_PERCENT: f64 = 20.0;

/// Target state of charge for the catalog-level charge-time estimate.
const CATALOG_TARGET_PERCENT: f64 = 80.0;

/// Normalizes raw provider records into [`ChargingStation`] values.
///
/// The formatter owns a charging curve and a reference vehicle profile;
/// every normalized station carries a fixed 20→80% charge-time estimate
/// against that reference profile. This is a catalog-level figure for
/// display, independent of any particular trip's starting charge.
#[derive(Debug, Clone)]
pub struct StationFormatter {
    curve: ChargeCurve,
    reference_profile: VehicleProfile,
}

impl StationFormatter {
    /// Create a formatter with an explicit curve and reference profile.
    pub fn new(curve: ChargeCurve, reference_profile: VehicleProfile) -> Self {
        Self {
            curve,
            reference_profile,
        }
    }

    /// Normalize a raw provider record.
    ///
    /// Returns `None` when the record's coordinates are out of range;
    /// such records are dropped rather than poisoning the result set.
    /// When the provider did not report a distance (the fallback set
    /// never does), it is computed from `query_point`.
    pub fn normalize(
        &self,
        raw: &RawStationRecord,
        query_point: &GeoPoint,
    ) -> Option<ChargingStation> {
        let location = GeoPoint::new(raw.latitude, raw.longitude).ok()?;

        let network = raw
            .ev_network
            .clone()
            .unwrap_or_else(|| "Non-Networked".to_string());
        let is_tesla = network.to_ascii_lowercase().contains("tesla");
        let dc_fast_count = raw.ev_dc_fast_num.unwrap_or(0);

        let charging_speed_class = if is_tesla && dc_fast_count > 0 {
            "250 kW Supercharger".to_string()
        } else {
            "DC Fast".to_string()
        };

        let status = match raw.status_code.as_deref() {
            Some("T") => StationStatus::Offline,
            Some("P") => StationStatus::Busy,
            _ => StationStatus::Available,
        };

        let distance_from_query_miles = raw
            .distance
            .unwrap_or_else(|| location.distance_miles(query_point));

        let mut connector_types = Vec::new();
        if let Some(connectors) = &raw.ev_connector_types {
            for connector in connectors {
                push_unique(&mut connector_types, connector);
            }
        }

        Some(ChargingStation {
            id: raw.id.to_string(),
            name: raw.station_name.clone(),
            location,
            network,
            connector_types,
            dc_fast_count,
            level2_count: raw.ev_level2_evse_num.unwrap_or(0),
            pricing: raw
                .ev_pricing
                .clone()
                .unwrap_or_else(|| "Pricing unavailable".to_string()),
            access_code: raw
                .access_code
                .clone()
                .unwrap_or_else(|| "public".to_string()),
            hours: raw
                .access_days_time
                .clone()
                .unwrap_or_else(|| "24 hours daily".to_string()),
            facility_type: raw.facility_type.clone().unwrap_or_default(),
            status,
            distance_from_query_miles,
            charging_speed_class,
            estimated_charge_time_minutes: self.curve.estimate_minutes(
                CATALOG_START_PERCENT,
                CATALOG_TARGET_PERCENT,
                &self.reference_profile,
            ),
            amenities: amenities_for(raw.facility_type.as_deref(), is_tesla),
        })
    }
}

impl Default for StationFormatter {
    fn default() -> Self {
        Self::new(ChargeCurve::default(), VehicleProfile::default())
    }
}

/// Build the amenity list for a station.
///
/// Every station gets the base set; facility-type keywords and the Tesla
/// network add more. The result is deduplicated, insertion-ordered.
fn amenities_for(facility_type: Option<&str>, is_tesla: bool) -> Vec<String> {
    let mut amenities = vec!["Restrooms".to_string(), "WiFi".to_string()];

    let facility = facility_type.unwrap_or_default().to_ascii_lowercase();

    if facility.contains("grocery") || facility.contains("retail") {
        push_unique(&mut amenities, "Shopping");
        push_unique(&mut amenities, "Food");
    }
    if facility.contains("hotel") || facility.contains("lodging") {
        push_unique(&mut amenities, "Hotel");
        push_unique(&mut amenities, "Dining");
    }
    if facility.contains("restaurant") || facility.contains("dining") {
        push_unique(&mut amenities, "Restaurant");
        push_unique(&mut amenities, "Coffee");
    }
    if facility.contains("gas") || facility.contains("travel") {
        push_unique(&mut amenities, "Convenience Store");
        push_unique(&mut amenities, "Food");
    }

    if is_tesla {
        push_unique(&mut amenities, "Tesla Lounge");
    }

    amenities
}

fn push_unique(items: &mut Vec<String>, item: &str) {
    if !items.iter().any(|existing| existing == item) {
        items.push(item.to_string());
    }
}
