//! Planner configuration.

use crate::directory::StationFilter;

/// Configuration parameters for charging-stop planning.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// State of charge below which a non-final leg is flagged for a
    /// charging stop (percent).
    pub low_battery_threshold_percent: f64,

    /// Assumed state of charge after a flagged stop (percent).
    pub post_charge_percent: f64,

    /// Search radius around a flagged leg's midpoint (miles).
    pub search_radius_miles: f64,

    /// Connector type requested from the station provider.
    pub connector_filter: Option<String>,

    /// Maximum stations requested per lookup.
    pub station_limit: usize,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        low_battery_threshold_percent: f64,
        post_charge_percent: f64,
        search_radius_miles: f64,
        connector_filter: Option<String>,
        station_limit: usize,
    ) -> Self {
        Self {
            low_battery_threshold_percent,
            post_charge_percent,
            search_radius_miles,
            connector_filter,
            station_limit,
        }
    }

    /// The station filter for this configuration.
    pub fn station_filter(&self) -> StationFilter {
        StationFilter {
            connector: self.connector_filter.clone(),
            limit: self.station_limit,
        }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            low_battery_threshold_percent: 20.0,
            post_charge_percent: 80.0,
            search_radius_miles: 30.0,
            connector_filter: Some("TESLA".to_string()),
            station_limit: 20,
        }
    }
}
