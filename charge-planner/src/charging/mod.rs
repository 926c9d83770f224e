//! Battery charging models.

mod curve;

pub use curve::ChargeCurve;
