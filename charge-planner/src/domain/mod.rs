//! Domain types for the charging-stop planner.
//!
//! This module contains the core domain model types. Types that enforce
//! invariants do so at construction time, so code that receives these
//! types can trust their validity.

mod geo;
mod station;
mod vehicle;

pub use geo::{GeoPoint, InvalidCoordinate};
pub use station::{ChargingStation, StationStatus};
pub use vehicle::{InvalidProfile, VehicleProfile};
