//! Charging-plan assembly.

use std::cmp::Ordering;

use futures::future::join_all;
use serde::Serialize;
use tracing::debug;

use crate::directory::{StationDirectory, StationFormatter, StationSource};
use crate::domain::{ChargingStation, GeoPoint, InvalidProfile, VehicleProfile};

use super::analyzer::{BatteryAnalysis, RouteBatteryAnalyzer};
use super::config::PlannerConfig;

/// A complete charging plan for a route.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargingPlan {
    /// Every candidate station returned for any flagged leg.
    pub stations: Vec<ChargingStation>,

    /// One suggested stop per flagged leg, in route order: the nearest
    /// candidate to that leg's midpoint.
    pub suggested_stops: Vec<ChargingStation>,

    /// The battery simulation behind the suggestions.
    pub battery_analysis: BatteryAnalysis,
}

/// Plans charging stops along a route.
///
/// Runs the battery analysis, then looks up stations around the midpoint
/// of each flagged leg through the injected [`StationDirectory`]. The
/// directory absorbs provider failures, so the only error a plan can
/// fail with is an invalid vehicle profile.
pub struct ChargingStopPlanner<S> {
    directory: StationDirectory<S>,
    formatter: StationFormatter,
    config: PlannerConfig,
}

impl<S: StationSource> ChargingStopPlanner<S> {
    /// Create a planner over the given directory and configuration.
    pub fn new(directory: StationDirectory<S>, config: PlannerConfig) -> Self {
        Self {
            directory,
            formatter: StationFormatter::default(),
            config,
        }
    }

    /// Replace the station formatter (for a non-default charge curve or
    /// reference profile).
    pub fn with_formatter(mut self, formatter: StationFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Build a charging plan for the given waypoints.
    ///
    /// Fewer than two waypoints yields a trivial plan with no segments
    /// and no stops. Station lookups for flagged legs run concurrently;
    /// results are matched back to their legs by position in the route,
    /// never by completion order, so `suggested_stops` stays in route
    /// order. A flagged leg with zero candidates contributes no stop but
    /// does not abort the plan.
    pub async fn plan(
        &self,
        waypoints: &[GeoPoint],
        start_percent: f64,
        profile: &VehicleProfile,
    ) -> Result<ChargingPlan, InvalidProfile> {
        let analyzer = RouteBatteryAnalyzer::new(&self.config);
        let analysis = analyzer.analyze(waypoints, start_percent, profile)?;

        let filter = self.config.station_filter();

        let flagged: Vec<(usize, GeoPoint)> = analysis
            .segments
            .iter()
            .enumerate()
            .filter(|(_, segment)| segment.needs_charge_stop)
            .map(|(index, segment)| (index, segment.from.midpoint(&segment.to)))
            .collect();

        // join_all yields results in input order, which is route order;
        // completion order never reorders the stops.
        let lookups = flagged.iter().map(|(_, midpoint)| {
            self.directory
                .query_near(midpoint, self.config.search_radius_miles, &filter)
        });
        let results = join_all(lookups).await;

        let mut stations = Vec::new();
        let mut suggested_stops = Vec::new();

        for ((segment_index, midpoint), records) in flagged.iter().zip(results) {
            let candidates: Vec<ChargingStation> = records
                .iter()
                .filter_map(|record| self.formatter.normalize(record, midpoint))
                .collect();

            if candidates.is_empty() {
                debug!(segment = *segment_index, "no stations for flagged leg");
                continue;
            }

            let nearest = candidates
                .iter()
                .min_by(|a, b| {
                    a.distance_from_query_miles
                        .partial_cmp(&b.distance_from_query_miles)
                        .unwrap_or(Ordering::Equal)
                })
                .cloned();

            stations.extend(candidates);
            if let Some(stop) = nearest {
                suggested_stops.push(stop);
            }
        }

        debug!(
            segments = analysis.segments.len(),
            flagged = flagged.len(),
            stops = suggested_stops.len(),
            "charging plan assembled"
        );

        Ok(ChargingPlan {
            stations,
            suggested_stops,
            battery_analysis: analysis,
        })
    }
}
