use crate::types::speed::SpeedUnit;

/// Fixed by convention, not derived from the length of a nautical mile.
pub const KNOTS_TO_METERS_PER_SECOND: f64 = 0.514444;
pub const FULL_CIRCLE_DEGREES: f64 = 360.0;

/// Converts a speed given in `unit` into meters per second.
pub fn to_canonical(value: f64, unit: SpeedUnit) -> f64 {
    match unit {
        SpeedUnit::Knots => value * KNOTS_TO_METERS_PER_SECOND,
        SpeedUnit::MetersPerSecond => value,
    }
}

/// Converts a speed in meters per second into `unit`.
pub fn from_canonical(value_ms: f64, unit: SpeedUnit) -> f64 {
    match unit {
        SpeedUnit::Knots => value_ms / KNOTS_TO_METERS_PER_SECOND,
        SpeedUnit::MetersPerSecond => value_ms,
    }
}

/// Wraps any angle in degrees into `[0, 360)`.
///
/// The outer modulo folds inputs that round up to exactly 360 back to 0, so
/// tiny negative angles never come out as 360.
pub fn normalize_degrees(degrees: f64) -> f64 {
    ((degrees % FULL_CIRCLE_DEGREES) + FULL_CIRCLE_DEGREES) % FULL_CIRCLE_DEGREES
}
