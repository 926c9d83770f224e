//! Charging-station directory.
//!
//! This module wraps an external alternative-fuel-station provider behind
//! a degrade-not-fail boundary:
//!
//! - [`FuelStationClient`] issues the nearest-stations HTTP query.
//! - [`StationSource`] is the seam that lets tests (and the cache layer)
//!   stand in for the real client.
//! - [`StationDirectory`] absorbs any lookup failure by serving a fixed
//!   fallback set, so a flaky provider never prevents a plan from being
//!   produced. Failures are logged, not raised.
//! - [`StationFormatter`] normalizes raw provider records into the
//!   application's [`ChargingStation`](crate::domain::ChargingStation)
//!   shape.
//!
//! Lookups are never retried here; retrying on a latency-sensitive
//! planning path is a caller decision.

mod client;
mod convert;
mod error;
mod fallback;
pub mod mock;
mod source;
mod types;

pub use client::{DirectoryConfig, FuelStationClient};
pub use convert::StationFormatter;
pub use error::DirectoryError;
pub use fallback::fallback_stations;
pub use source::{StationDirectory, StationSource};
pub use types::{RawStationRecord, StationFilter, StationsNearResponse};
