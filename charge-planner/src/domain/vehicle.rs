//! Vehicle energy profile.

use serde::{Deserialize, Serialize};

/// Errors for a vehicle profile that cannot be planned against.
///
/// These indicate a caller or configuration defect, not a transient
/// condition, and are surfaced to the caller rather than guessed around.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidProfile {
    /// `range_miles` must be positive; it is a divisor in per-leg
    /// battery-use calculations.
    #[error("rangeMiles must be positive")]
    NonPositiveRange,

    /// Usable capacity must be positive for charge-time estimates.
    #[error("usableCapacityKWh must be positive")]
    NonPositiveUsableCapacity,

    /// Usable capacity cannot exceed the total pack capacity.
    #[error("usableCapacityKWh must not exceed batteryCapacityKWh")]
    UsableExceedsCapacity,
}

/// The energy characteristics of a vehicle.
///
/// Serialized field names follow the application's wire convention
/// (`batteryCapacityKWh`, `usableCapacityKWh`, `rangeMiles`,
/// `maxChargeRateKW`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleProfile {
    /// Total pack capacity in kWh.
    #[serde(rename = "batteryCapacityKWh")]
    pub battery_capacity_kwh: f64,

    /// Usable (buffered) capacity in kWh.
    #[serde(rename = "usableCapacityKWh")]
    pub usable_capacity_kwh: f64,

    /// EPA-style rated range on a full charge, in miles.
    #[serde(rename = "rangeMiles")]
    pub range_miles: f64,

    /// Peak DC charge rate the vehicle accepts, in kW. Caps the charging
    /// curve's power buckets when positive.
    #[serde(rename = "maxChargeRateKW")]
    pub max_charge_rate_kw: f64,
}

impl VehicleProfile {
    /// Validate the profile for use in planning.
    ///
    /// Rejects non-positive range (a divisor), non-positive usable
    /// capacity, and usable capacity exceeding the pack capacity. NaN
    /// values fail the same checks.
    pub fn validate(&self) -> Result<(), InvalidProfile> {
        if !(self.range_miles > 0.0) {
            return Err(InvalidProfile::NonPositiveRange);
        }

        if !(self.usable_capacity_kwh > 0.0) {
            return Err(InvalidProfile::NonPositiveUsableCapacity);
        }

        if self.usable_capacity_kwh > self.battery_capacity_kwh {
            return Err(InvalidProfile::UsableExceedsCapacity);
        }

        Ok(())
    }
}

impl Default for VehicleProfile {
    /// A typical long-range EV, used as the catalog reference profile for
    /// station-level charge-time estimates.
    fn default() -> Self {
        Self {
            battery_capacity_kwh: 75.0,
            usable_capacity_kwh: 70.0,
            range_miles: 260.0,
            max_charge_rate_kw: 250.0,
        }
    }
}
