//! EV charging-stop planner.
//!
//! A library that answers: "on this road trip, where will the battery
//! run low, and where should the driver stop to charge?"

pub mod cache;
pub mod charging;
pub mod directory;
pub mod domain;
pub mod planner;
