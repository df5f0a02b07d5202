use std::fmt::Display;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};

use crate::{
    conversions::{from_canonical, to_canonical},
    errors::Error,
};

/// Speed units a caller may enter or display. Meters per second is the
/// canonical unit every computation runs in.
#[derive(
    Debug,
    Clone,
    Copy,
    Hash,
    PartialEq,
    Eq,
    Deserialize,
    Serialize,
    AsRefStr,
    EnumIter,
    EnumString,
    strum::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum SpeedUnit {
    #[strum(to_string = "knots")]
    Knots,
    // `m/s` is the label the unit is displayed with
    #[strum(to_string = "meters_per_second", serialize = "m/s")]
    #[serde(alias = "m/s")]
    MetersPerSecond,
}

impl SpeedUnit {
    /// Parses a unit tag exactly as given, rejecting anything outside the
    /// supported set.
    pub fn from_tag(tag: &str) -> Result<Self, Error> {
        tag.parse()
            .map_err(|_| Error::InvalidUnit(tag.to_owned()))
    }

    pub fn alternate(self) -> Self {
        match self {
            SpeedUnit::Knots => SpeedUnit::MetersPerSecond,
            SpeedUnit::MetersPerSecond => SpeedUnit::Knots,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SpeedUnit::Knots => "knots",
            SpeedUnit::MetersPerSecond => "m/s",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Speed {
    pub value: f64,
    pub unit: SpeedUnit,
}

impl Speed {
    pub fn new(value: f64, unit: SpeedUnit) -> Self {
        Speed { value, unit }
    }

    pub fn from_canonical(value_ms: f64, unit: SpeedUnit) -> Self {
        Speed::new(from_canonical(value_ms, unit), unit)
    }

    pub fn to_canonical(self) -> f64 {
        to_canonical(self.value, self.unit)
    }
}

/// Formats as `<value> <label>`, three decimals unless a precision is given.
impl Display for Speed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let precision = f.precision().unwrap_or(3);
        write!(f, "{:.*} {}", precision, self.value, self.unit.label())
    }
}
