use std::{
    fmt::Display,
    ops::{Add, Sub},
};

use serde::{Deserialize, Serialize};

use crate::conversions::{FULL_CIRCLE_DEGREES, normalize_degrees};

/// Tolerance used when comparing a bearing against a raw degree value.
pub const BEARING_TOLERANCE_DEGREES: f64 = 1e-6;

/// Degrees true, clockwise from north, always in `[0, 360)`.
///
/// Every constructor and every arithmetic result goes through
/// [`normalize_degrees`], deserialization included.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(from = "f64", into = "f64")]
pub struct Bearing(f64);

// Compares on the circle, so 359.9999999 equals 0
impl PartialEq<f64> for Bearing {
    fn eq(&self, other: &f64) -> bool {
        self.shortest_turn(Bearing::new(*other)).abs() < BEARING_TOLERANCE_DEGREES
    }
}

impl From<f64> for Bearing {
    fn from(value: f64) -> Self {
        Bearing::new(value)
    }
}

impl From<Bearing> for f64 {
    fn from(value: Bearing) -> Self {
        value.0
    }
}

impl Add<f64> for Bearing {
    type Output = Bearing;

    fn add(self, rhs: f64) -> Self::Output {
        Bearing::new(self.0 + rhs)
    }
}

impl Sub<f64> for Bearing {
    type Output = Bearing;

    fn sub(self, rhs: f64) -> Self::Output {
        Bearing::new(self.0 - rhs)
    }
}

impl Bearing {
    pub const NORTH: Bearing = Bearing(0.);
    pub const EAST: Bearing = Bearing(90.);
    pub const SOUTH: Bearing = Bearing(180.);
    pub const WEST: Bearing = Bearing(270.);

    pub fn new(val: f64) -> Self {
        Bearing(normalize_degrees(val))
    }

    /// Signed turn in degrees from `self` to `target`, in `[-180, 180)`.
    /// Positive turns are clockwise.
    pub fn shortest_turn(self, target: Bearing) -> f64 {
        let distance = normalize_degrees(self.0 - target.0);
        if distance <= FULL_CIRCLE_DEGREES / 2. {
            -distance
        } else {
            FULL_CIRCLE_DEGREES - distance
        }
    }

    pub fn get(&self) -> f64 {
        self.0
    }
}

/// Formats with three decimals unless a precision is given. Rounding happens
/// before wrapping, so 359.9996 shows as `0.000°` rather than `360.000°`.
impl Display for Bearing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let precision = f.precision().unwrap_or(3);
        let rounded = format!("{:.*}", precision, self.0);
        if rounded.parse::<f64>().is_ok_and(|value| value >= FULL_CIRCLE_DEGREES) {
            return write!(f, "{:.*}°", precision, 0.0);
        }
        write!(f, "{rounded}°")
    }
}
