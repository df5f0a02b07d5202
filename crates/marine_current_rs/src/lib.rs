//! Marine Current Library
//!
//! Derives the true water current from a towed fish's apparent motion and the
//! vessel's motion over ground: unit conversion, polar/Cartesian transforms
//! and the vector sum of the two. Everything here is a pure function of its
//! inputs.

pub mod conversions;
pub mod errors;
pub mod query;
pub mod solver;
pub mod vector;
pub mod types {
    pub mod bearing;
    pub mod speed;
}

pub use conversions::{from_canonical, normalize_degrees, to_canonical};
pub use errors::Error;
pub use query::{CurrentQuery, CurrentReport, Observation};
pub use solver::{CurrentResult, solve};
pub use types::{
    bearing::Bearing,
    speed::{Speed, SpeedUnit},
};
pub use vector::{Components, MotionVector, cartesian_to_polar, polar_to_cartesian};
