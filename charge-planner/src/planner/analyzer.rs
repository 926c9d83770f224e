//! Leg-by-leg battery depletion analysis.

use serde::Serialize;

use crate::domain::{GeoPoint, InvalidProfile, VehicleProfile};

use super::config::PlannerConfig;

/// Trip-end state of charge below which the trip needs charging.
const NEEDS_CHARGING_BELOW_PERCENT: f64 = 10.0;

/// Trip-end state of charge below which the trip has range anxiety.
const RANGE_ANXIETY_BELOW_PERCENT: f64 = 20.0;

/// One leg of the route with its simulated battery cost.
///
/// Segments are ordered by route traversal; each leg's remaining charge
/// feeds the next. Stored distance and percentages are rounded to the
/// nearest whole unit for display.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSegment {
    /// Leg start.
    pub from: GeoPoint,

    /// Leg end.
    pub to: GeoPoint,

    /// Leg distance in miles, rounded.
    pub distance_miles: f64,

    /// Battery consumed by this leg in percentage points, rounded.
    pub battery_used_percent: f64,

    /// State of charge on arrival, rounded, clamped to [0, 100].
    pub battery_remaining_percent: f64,

    /// Whether this leg ends below the low-battery threshold and needs a
    /// charging stop before the next leg.
    pub needs_charge_stop: bool,
}

/// Result of analyzing a route against a vehicle profile.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatteryAnalysis {
    /// Per-leg simulation results, in route order.
    pub segments: Vec<RouteSegment>,

    /// Trip ends below 10% charge.
    pub needs_charging: bool,

    /// Trip ends below 20% charge.
    pub range_anxiety: bool,

    /// Projected state of charge at trip end, rounded.
    pub estimated_remaining_percent: f64,
}

/// Simulates battery depletion over a route, leg by leg.
///
/// When a non-final leg ends below the low-battery threshold, the leg is
/// flagged and the simulation continues from the configured post-charge
/// level. That reset is a planning assumption — it models the driver
/// actually stopping at the suggested station — not a guarantee.
///
/// A single leg longer than the vehicle's full range still produces one
/// flagged segment with remaining charge clamped to zero; splitting a leg
/// into multiple intermediate stops is not supported.
#[derive(Debug, Clone)]
pub struct RouteBatteryAnalyzer {
    low_battery_threshold_percent: f64,
    post_charge_percent: f64,
}

impl RouteBatteryAnalyzer {
    /// Create an analyzer with the thresholds of the given configuration.
    pub fn new(config: &PlannerConfig) -> Self {
        Self {
            low_battery_threshold_percent: config.low_battery_threshold_percent,
            post_charge_percent: config.post_charge_percent,
        }
    }

    /// Simulate battery depletion across consecutive waypoint pairs.
    ///
    /// Fewer than two waypoints is not an error: the result has no
    /// segments and leaves the starting charge unchanged. An invalid
    /// profile is a configuration defect and fails immediately.
    ///
    /// The running state of charge is carried unrounded between legs;
    /// only the stored segment fields and the final estimate are rounded.
    pub fn analyze(
        &self,
        waypoints: &[GeoPoint],
        start_percent: f64,
        profile: &VehicleProfile,
    ) -> Result<BatteryAnalysis, InvalidProfile> {
        if waypoints.len() < 2 {
            return Ok(BatteryAnalysis {
                segments: Vec::new(),
                needs_charging: false,
                range_anxiety: false,
                estimated_remaining_percent: start_percent,
            });
        }

        profile.validate()?;

        let mut current_percent = start_percent;
        let mut segments = Vec::with_capacity(waypoints.len() - 1);
        let last_leg = waypoints.len() - 2;

        for (index, pair) in waypoints.windows(2).enumerate() {
            let (from, to) = (pair[0], pair[1]);

            let distance = from.distance_miles(&to);
            let used = distance / profile.range_miles * 100.0;
            let remaining = (current_percent - used).max(0.0);

            let needs_charge_stop =
                remaining < self.low_battery_threshold_percent && index != last_leg;

            segments.push(RouteSegment {
                from,
                to,
                distance_miles: distance.round(),
                battery_used_percent: used.round(),
                battery_remaining_percent: remaining.round(),
                needs_charge_stop,
            });

            current_percent = if needs_charge_stop {
                self.post_charge_percent
            } else {
                remaining
            };
        }

        Ok(BatteryAnalysis {
            segments,
            needs_charging: current_percent < NEEDS_CHARGING_BELOW_PERCENT,
            range_anxiety: current_percent < RANGE_ANXIETY_BELOW_PERCENT,
            estimated_remaining_percent: current_percent.round(),
        })
    }
}

impl Default for RouteBatteryAnalyzer {
    fn default() -> Self {
        Self::new(&PlannerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A point the given number of miles due north of the equator origin.
    ///
    /// Along a meridian the haversine distance is exact, so these give
    /// legs of precisely known length.
    fn miles_north(miles: f64) -> GeoPoint {
        GeoPoint::new((miles / 3959.0).to_degrees(), 0.0).unwrap()
    }

    fn profile_280() -> VehicleProfile {
        VehicleProfile {
            battery_capacity_kwh: 80.0,
            usable_capacity_kwh: 76.0,
            range_miles: 280.0,
            max_charge_rate_kw: 250.0,
        }
    }

    #[test]
    fn comfortable_single_leg() {
        let analyzer = RouteBatteryAnalyzer::default();
        let route = [miles_north(0.0), miles_north(200.0)];

        let analysis = analyzer.analyze(&route, 100.0, &profile_280()).unwrap();

        assert_eq!(analysis.segments.len(), 1);
        let segment = &analysis.segments[0];
        assert_eq!(segment.distance_miles, 200.0);
        // 200 / 280 * 100 = 71.43% used, 28.57% remaining -> 29 rounded.
        assert_eq!(segment.battery_used_percent, 71.0);
        assert_eq!(segment.battery_remaining_percent, 29.0);
        assert!(!segment.needs_charge_stop);

        assert!(!analysis.needs_charging);
        assert!(!analysis.range_anxiety);
        assert_eq!(analysis.estimated_remaining_percent, 29.0);
    }

    #[test]
    fn leg_beyond_range_clamps_to_zero() {
        let analyzer = RouteBatteryAnalyzer::default();
        let route = [miles_north(0.0), miles_north(300.0)];

        let analysis = analyzer.analyze(&route, 100.0, &profile_280()).unwrap();

        assert_eq!(analysis.segments.len(), 1);
        assert_eq!(analysis.segments[0].battery_remaining_percent, 0.0);
        assert!(analysis.needs_charging);
        assert!(analysis.range_anxiety);
        assert_eq!(analysis.estimated_remaining_percent, 0.0);
    }

    #[test]
    fn low_non_final_leg_is_flagged_and_resets() {
        let analyzer = RouteBatteryAnalyzer::default();
        // First leg drains to ~10.7%, second is short.
        let route = [miles_north(0.0), miles_north(250.0), miles_north(280.0)];

        let analysis = analyzer.analyze(&route, 100.0, &profile_280()).unwrap();

        assert_eq!(analysis.segments.len(), 2);
        assert!(analysis.segments[0].needs_charge_stop);

        // Second leg starts from the assumed 80% post-charge level:
        // 30 miles uses ~10.7%, leaving ~69.3%.
        assert!(!analysis.segments[1].needs_charge_stop);
        assert_eq!(analysis.segments[1].battery_remaining_percent, 69.0);
        assert!(!analysis.range_anxiety);
    }

    #[test]
    fn final_leg_is_never_flagged() {
        let analyzer = RouteBatteryAnalyzer::default();
        let route = [miles_north(0.0), miles_north(250.0)];

        let analysis = analyzer.analyze(&route, 100.0, &profile_280()).unwrap();

        // Ends at ~10.7%: anxious, but a stop after arrival helps nobody.
        assert!(!analysis.segments[0].needs_charge_stop);
        assert!(analysis.range_anxiety);
        assert!(!analysis.needs_charging);
    }

    #[test]
    fn consecutive_low_legs_each_flagged() {
        let analyzer = RouteBatteryAnalyzer::default();
        // Three 240-mile legs: each drains ~85.7% of range.
        let route = [
            miles_north(0.0),
            miles_north(240.0),
            miles_north(480.0),
            miles_north(720.0),
        ];

        let analysis = analyzer.analyze(&route, 100.0, &profile_280()).unwrap();

        assert!(analysis.segments[0].needs_charge_stop);
        assert!(analysis.segments[1].needs_charge_stop);
        assert!(!analysis.segments[2].needs_charge_stop);
        // 80% - 85.7% clamps to zero at trip end.
        assert!(analysis.needs_charging);
    }

    #[test]
    fn leg_longer_than_full_range_gets_single_flag() {
        let analyzer = RouteBatteryAnalyzer::default();
        // A 600-mile leg cannot be covered even from a full charge; it
        // still yields exactly one flagged segment.
        let route = [miles_north(0.0), miles_north(600.0), miles_north(620.0)];

        let analysis = analyzer.analyze(&route, 100.0, &profile_280()).unwrap();

        assert_eq!(analysis.segments.len(), 2);
        assert!(analysis.segments[0].needs_charge_stop);
        assert_eq!(analysis.segments[0].battery_remaining_percent, 0.0);
    }

    #[test]
    fn no_waypoints_is_trivial() {
        let analyzer = RouteBatteryAnalyzer::default();

        let analysis = analyzer.analyze(&[], 65.0, &profile_280()).unwrap();

        assert!(analysis.segments.is_empty());
        assert!(!analysis.needs_charging);
        assert!(!analysis.range_anxiety);
        assert_eq!(analysis.estimated_remaining_percent, 65.0);
    }

    #[test]
    fn single_waypoint_is_trivial() {
        let analyzer = RouteBatteryAnalyzer::default();

        let analysis = analyzer
            .analyze(&[miles_north(10.0)], 42.5, &profile_280())
            .unwrap();

        assert!(analysis.segments.is_empty());
        assert_eq!(analysis.estimated_remaining_percent, 42.5);
    }

    #[test]
    fn trivial_input_skips_profile_validation() {
        let analyzer = RouteBatteryAnalyzer::default();
        let broken = VehicleProfile {
            range_miles: 0.0,
            ..profile_280()
        };

        // No legs means no division; the degenerate path returns before
        // the profile is consulted.
        assert!(analyzer.analyze(&[], 50.0, &broken).is_ok());
    }

    #[test]
    fn invalid_profile_is_an_error() {
        let analyzer = RouteBatteryAnalyzer::default();
        let route = [miles_north(0.0), miles_north(100.0)];
        let broken = VehicleProfile {
            range_miles: 0.0,
            ..profile_280()
        };

        assert_eq!(
            analyzer.analyze(&route, 50.0, &broken).unwrap_err(),
            InvalidProfile::NonPositiveRange
        );
    }

    #[test]
    fn running_charge_is_not_rounded_between_legs() {
        let analyzer = RouteBatteryAnalyzer::default();
        // Two 100-mile legs: each uses 35.714...%. If the running value
        // were rounded per leg the end state would drift.
        let route = [miles_north(0.0), miles_north(100.0), miles_north(200.0)];

        let analysis = analyzer.analyze(&route, 100.0, &profile_280()).unwrap();

        // 100 - 2 * 35.714 = 28.57 -> 29, same as one 200-mile leg.
        assert_eq!(analysis.estimated_remaining_percent, 29.0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn valid_point() -> impl Strategy<Value = GeoPoint> {
        (-90.0f64..=90.0, -180.0f64..=180.0)
            .prop_map(|(lat, lng)| GeoPoint::new(lat, lng).unwrap())
    }

    proptest! {
        /// Remaining charge is always within [0, 100] for any route.
        #[test]
        fn remaining_always_in_range(
            waypoints in proptest::collection::vec(valid_point(), 0..8),
            start in 0.0f64..=100.0,
        ) {
            let analyzer = RouteBatteryAnalyzer::default();
            let analysis = analyzer
                .analyze(&waypoints, start, &VehicleProfile::default())
                .unwrap();

            for segment in &analysis.segments {
                prop_assert!((0.0..=100.0).contains(&segment.battery_remaining_percent));
                prop_assert!(segment.battery_used_percent >= 0.0);
                prop_assert!(segment.distance_miles >= 0.0);
            }
            prop_assert!((0.0..=100.0).contains(&analysis.estimated_remaining_percent));
        }

        /// Segment count is always one less than the waypoint count.
        #[test]
        fn segment_count_matches(
            waypoints in proptest::collection::vec(valid_point(), 2..8),
        ) {
            let analyzer = RouteBatteryAnalyzer::default();
            let analysis = analyzer
                .analyze(&waypoints, 100.0, &VehicleProfile::default())
                .unwrap();

            prop_assert_eq!(analysis.segments.len(), waypoints.len() - 1);
        }
    }
}
