//! Charging-stop planning.
//!
//! This module implements the core planning pipeline that answers:
//! "given this route and this starting charge, where does the battery
//! run low, and where should the driver stop?"
//!
//! The battery simulation is pure; only the station lookups touch I/O,
//! and those degrade to fallback data rather than failing.

mod analyzer;
mod config;
mod plan;

pub use analyzer::{BatteryAnalysis, RouteBatteryAnalyzer, RouteSegment};
pub use config::PlannerConfig;
pub use plan::{ChargingPlan, ChargingStopPlanner};
