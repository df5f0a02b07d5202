//! Polar (speed, true bearing) and Cartesian (east, north) forms of a motion
//! vector.
//!
//! Bearings run clockwise from north, the mirror image of the mathematical
//! convention, so `sin` yields the east component and `cos` the north one.

use std::ops::Add;

use serde::{Deserialize, Serialize};

use crate::{
    conversions::{from_canonical, normalize_degrees},
    types::{bearing::Bearing, speed::SpeedUnit},
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Components {
    pub east: f64,
    pub north: f64,
}

impl Add for Components {
    type Output = Components;

    fn add(self, rhs: Self) -> Self::Output {
        Components {
            east: self.east + rhs.east,
            north: self.north + rhs.north,
        }
    }
}

impl Components {
    pub fn new(east: f64, north: f64) -> Self {
        Components { east, north }
    }

    pub fn magnitude(self) -> f64 {
        self.east.hypot(self.north)
    }

    /// Expresses canonical (m/s) components in `unit`.
    pub fn in_unit(self, unit: SpeedUnit) -> Self {
        Components {
            east: from_canonical(self.east, unit),
            north: from_canonical(self.north, unit),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct MotionVector {
    pub speed_ms: f64,
    pub bearing: Bearing,
}

impl Add for MotionVector {
    type Output = MotionVector;

    fn add(self, rhs: Self) -> Self::Output {
        MotionVector::from_components(self.components() + rhs.components())
    }
}

impl MotionVector {
    pub fn new(speed_ms: f64, bearing: impl Into<Bearing>) -> Self {
        MotionVector {
            speed_ms,
            bearing: bearing.into(),
        }
    }

    pub fn from_components(components: Components) -> Self {
        cartesian_to_polar(components.east, components.north)
    }

    pub fn components(self) -> Components {
        polar_to_cartesian(self.speed_ms, self.bearing.get())
    }

    /// False for a zero vector, whose bearing must not be relied on.
    pub fn has_direction(self) -> bool {
        self.speed_ms > 0.0
    }
}

/// Splits a speed and a bearing in degrees into east and north components.
/// The bearing does not have to be normalized.
pub fn polar_to_cartesian(speed_ms: f64, bearing_deg: f64) -> Components {
    let (sin, cos) = bearing_deg.to_radians().sin_cos();
    Components {
        east: speed_ms * sin,
        north: speed_ms * cos,
    }
}

/// Recomposes east and north components into a non-negative speed and a
/// bearing in `[0, 360)`. A zero vector yields bearing 0.
pub fn cartesian_to_polar(east: f64, north: f64) -> MotionVector {
    let speed_ms = Components::new(east, north).magnitude();
    let bearing = normalize_degrees(east.atan2(north).to_degrees());
    MotionVector {
        speed_ms,
        bearing: Bearing::new(bearing),
    }
}
