//! Raw readings as a caller enters them, and the report handed back for
//! display.

use serde::{Deserialize, Serialize};

use crate::{
    errors::Error,
    solver::solve,
    types::{
        bearing::Bearing,
        speed::{Speed, SpeedUnit},
    },
    vector::{Components, polar_to_cartesian},
};
#[cfg(feature = "fs")]
use std::{fs::File, io::BufReader, path::Path};

/// A speed in the query's unit and a bearing in degrees true, as entered.
#[derive(Debug, Default, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Observation {
    pub speed: f64,
    pub bearing: f64,
}

impl Observation {
    pub fn new(speed: f64, bearing: f64) -> Self {
        Observation { speed, bearing }
    }
}

/// Fish and vessel readings sharing one speed unit.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct CurrentQuery {
    pub unit: SpeedUnit,
    pub fish: Observation,
    pub ship: Observation,
}

impl CurrentQuery {
    pub fn new(unit: SpeedUnit, fish: Observation, ship: Observation) -> Self {
        CurrentQuery { unit, fish, ship }
    }

    pub fn from_raw(
        fish_speed: f64,
        fish_bearing: f64,
        ship_speed: f64,
        ship_bearing: f64,
        unit: &str,
    ) -> Result<Self, Error> {
        let unit = SpeedUnit::from_tag(unit)?;
        Ok(CurrentQuery::new(
            unit,
            Observation::new(fish_speed, fish_bearing),
            Observation::new(ship_speed, ship_bearing),
        ))
    }

    pub fn load_ron<R>(reader: R) -> Result<Self, Error>
    where
        R: std::io::Read,
    {
        let res = ron::de::from_reader(reader)?;
        Ok(res)
    }

    #[cfg(feature = "fs")]
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let file = File::open(path)?;
        Self::load_ron(BufReader::new(file))
    }

    pub fn solve(&self) -> CurrentReport {
        let unit = self.unit;
        let fish_ms = Speed::new(self.fish.speed, unit).to_canonical();
        let ship_ms = Speed::new(self.ship.speed, unit).to_canonical();
        let result = solve(fish_ms, self.fish.bearing, ship_ms, self.ship.bearing);

        CurrentReport {
            unit,
            speed: Speed::from_canonical(result.speed_ms, unit),
            alternate_speed: Speed::from_canonical(result.speed_ms, unit.alternate()),
            bearing: result.bearing,
            has_direction: result.has_direction,
            fish: polar_to_cartesian(fish_ms, self.fish.bearing).in_unit(unit),
            ship: polar_to_cartesian(ship_ms, self.ship.bearing).in_unit(unit),
            current: result.components.in_unit(unit),
        }
    }
}

/// Result of a [`CurrentQuery`], every speed and component in the query's
/// unit except `alternate_speed`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct CurrentReport {
    pub unit: SpeedUnit,
    pub speed: Speed,
    pub alternate_speed: Speed,
    pub bearing: Bearing,
    pub has_direction: bool,
    pub fish: Components,
    pub ship: Components,
    pub current: Components,
}
