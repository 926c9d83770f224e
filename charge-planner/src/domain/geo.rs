//! Geographic point type and great-circle distance.

use serde::Serialize;

/// Mean Earth radius in miles, used for great-circle distance.
const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Error returned when constructing an invalid geographic point.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid coordinate: {reason}")]
pub struct InvalidCoordinate {
    reason: &'static str,
}

/// A validated latitude/longitude pair in decimal degrees.
///
/// Latitude is within [-90, 90] and longitude within [-180, 180]; neither
/// is NaN. This type guarantees that any `GeoPoint` value is valid by
/// construction.
///
/// # Examples
///
/// ```
/// use charge_planner::domain::GeoPoint;
///
/// let la = GeoPoint::new(34.0522, -118.2437).unwrap();
/// let sf = GeoPoint::new(37.7749, -122.4194).unwrap();
///
/// let miles = la.distance_miles(&sf);
/// assert!(miles > 300.0 && miles < 400.0);
///
/// // Out-of-range coordinates are rejected
/// assert!(GeoPoint::new(91.0, 0.0).is_err());
/// assert!(GeoPoint::new(0.0, 200.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    /// Construct a point from latitude and longitude in decimal degrees.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinate> {
        if latitude.is_nan() || longitude.is_nan() {
            return Err(InvalidCoordinate {
                reason: "coordinate must not be NaN",
            });
        }

        if !(-90.0..=90.0).contains(&latitude) {
            return Err(InvalidCoordinate {
                reason: "latitude must be within [-90, 90]",
            });
        }

        if !(-180.0..=180.0).contains(&longitude) {
            return Err(InvalidCoordinate {
                reason: "longitude must be within [-180, 180]",
            });
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in decimal degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Great-circle distance to another point in miles (haversine).
    ///
    /// Identical points are exactly zero. The `asin` argument is clamped
    /// so that floating-point noise near antipodal points cannot produce
    /// NaN.
    pub fn distance_miles(&self, other: &GeoPoint) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let dlat = (other.latitude - self.latitude).to_radians();
        let dlng = (other.longitude - self.longitude).to_radians();

        let h = (dlat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);

        2.0 * EARTH_RADIUS_MILES * h.sqrt().clamp(0.0, 1.0).asin()
    }

    /// Midpoint with another point, as the arithmetic mean of coordinates.
    ///
    /// This is not the geodesic midpoint, but at road-trip leg lengths the
    /// error is far smaller than a charging-station search radius.
    pub fn midpoint(&self, other: &GeoPoint) -> GeoPoint {
        GeoPoint {
            latitude: (self.latitude + other.latitude) / 2.0,
            longitude: (self.longitude + other.longitude) / 2.0,
        }
    }
}
