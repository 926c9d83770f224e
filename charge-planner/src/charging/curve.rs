//! Charge-time estimation from a bucketed charging curve.
//!
//! DC fast charging is non-linear: power is high at a low state of charge
//! and tapers sharply past 80%. The model here collapses that curve into
//! three discrete power buckets keyed on the target state of charge,
//! which is coarse but matches how drivers actually plan stops.

use crate::domain::VehicleProfile;

/// Target state of charge at or below which the fast bucket applies.
const FAST_BUCKET_MAX_TARGET: f64 = 50.0;

/// Target state of charge at or below which the middle bucket applies.
const MID_BUCKET_MAX_TARGET: f64 = 80.0;

/// Starting state of charge that splits the middle bucket.
const MID_BUCKET_START_SPLIT: f64 = 50.0;

/// Average charging power per state-of-charge bucket.
///
/// The buckets are configuration, not per-vehicle data; a vehicle's own
/// limit is applied through [`VehicleProfile::max_charge_rate_kw`].
#[derive(Debug, Clone)]
pub struct ChargeCurve {
    /// Average power when charging to at most 50%.
    pub fast_power_kw: f64,

    /// Average power when charging into 50-80% from below 50%.
    pub mid_power_low_start_kw: f64,

    /// Average power when charging into 50-80% from at or above 50%.
    pub mid_power_high_start_kw: f64,

    /// Average power when charging past 80% (taper region).
    pub taper_power_kw: f64,
}

impl Default for ChargeCurve {
    fn default() -> Self {
        Self {
            fast_power_kw: 200.0,
            mid_power_low_start_kw: 150.0,
            mid_power_high_start_kw: 100.0,
            taper_power_kw: 50.0,
        }
    }
}

impl ChargeCurve {
    /// Estimate minutes to charge from `current_percent` to
    /// `target_percent` on the given profile.
    ///
    /// Returns 0 when the target is at or below the current charge. The
    /// target is clamped to 100%. Bucket power is capped by the profile's
    /// `max_charge_rate_kw` when that is positive.
    pub fn estimate_minutes(
        &self,
        current_percent: f64,
        target_percent: f64,
        profile: &VehicleProfile,
    ) -> u32 {
        let target = target_percent.min(100.0);

        if target <= current_percent {
            return 0;
        }

        let energy_kwh = (target - current_percent) / 100.0 * profile.usable_capacity_kwh;

        let bucket_kw = if target <= FAST_BUCKET_MAX_TARGET {
            self.fast_power_kw
        } else if target <= MID_BUCKET_MAX_TARGET {
            if current_percent < MID_BUCKET_START_SPLIT {
                self.mid_power_low_start_kw
            } else {
                self.mid_power_high_start_kw
            }
        } else {
            self.taper_power_kw
        };

        let power_kw = if profile.max_charge_rate_kw > 0.0 {
            bucket_kw.min(profile.max_charge_rate_kw)
        } else {
            bucket_kw
        };

        (energy_kwh / power_kw * 60.0).round() as u32
    }
}
