use std::{env, path::PathBuf, sync::LazyLock};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::{debug, info, warn};
use marine_current_rs::{CurrentQuery, Observation, SpeedUnit};
use strum::{Display, EnumString};

mod render;

pub static APP_CONFIG: LazyLock<AppConfig> = LazyLock::new(AppConfig::from_env);

#[derive(Debug, Clone)]
pub struct AppConfig {
    default_unit: SpeedUnit,
    default_format: OutputFormat,
}

impl AppConfig {
    fn from_env() -> Self {
        let default_unit = env::var("TRUE_CURRENT_UNIT")
            .ok()
            .and_then(|tag| match SpeedUnit::from_tag(&tag) {
                Ok(unit) => Some(unit),
                Err(err) => {
                    warn!("Ignoring TRUE_CURRENT_UNIT: {err}");
                    None
                }
            })
            .unwrap_or(SpeedUnit::Knots);
        let default_format = env::var("TRUE_CURRENT_FORMAT")
            .ok()
            .and_then(|tag| match tag.parse::<OutputFormat>() {
                Ok(format) => Some(format),
                Err(_) => {
                    warn!("Ignoring TRUE_CURRENT_FORMAT: unknown format {tag}");
                    None
                }
            })
            .unwrap_or(OutputFormat::Text);
        Self {
            default_unit,
            default_format,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, EnumString, Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OutputFormat {
    /// Human readable summary
    Text,
    /// The full report as JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "true-current",
    about = "Compute the TRUE water current from fish apparent motion and vessel motion",
    long_about = "Bearings are TRUE (0° = North, clockwise) and may be given outside 0..360.",
    allow_negative_numbers = true
)]
struct Args {
    /// Fish apparent speed, in the selected unit
    #[arg(long, default_value_t = 0.0)]
    fish_speed: f64,

    /// Fish bearing in degrees TRUE
    #[arg(long, default_value_t = 0.0)]
    fish_bearing: f64,

    /// Vessel speed over ground, in the selected unit
    #[arg(long, default_value_t = 0.0)]
    ship_speed: f64,

    /// Vessel course in degrees TRUE
    #[arg(long, default_value_t = 0.0)]
    ship_course: f64,

    /// Speed unit: knots or meters_per_second (default from TRUE_CURRENT_UNIT, else knots)
    #[arg(short, long, value_parser = SpeedUnit::from_tag)]
    unit: Option<SpeedUnit>,

    /// RON readings file, replaces the speed and bearing arguments
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output format (default from TRUE_CURRENT_FORMAT, else text)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,
}

fn build_query(args: &Args) -> anyhow::Result<CurrentQuery> {
    let Some(path) = &args.input else {
        return Ok(CurrentQuery::new(
            args.unit.unwrap_or(APP_CONFIG.default_unit),
            Observation::new(args.fish_speed, args.fish_bearing),
            Observation::new(args.ship_speed, args.ship_course),
        ));
    };

    debug!("Loading readings from {}", path.display());
    let mut query = CurrentQuery::load_from_file(path)
        .with_context(|| format!("Could not load readings from {}", path.display()))?;
    if let Some(unit) = args.unit {
        debug!("Overriding readings unit {} with {unit}", query.unit);
        query.unit = unit;
    }
    Ok(query)
}

fn main() -> anyhow::Result<()> {
    #[cfg(debug_assertions)]
    dotenvy::dotenv().ok();
    env_logger::init();

    let args = Args::parse();
    let query = build_query(&args)?;
    debug!("Solving {query:?}");

    let report = query.solve();
    if !report.has_direction {
        info!("Fish and vessel motion cancel out, current has no direction");
    }

    let format = args.format.unwrap_or(APP_CONFIG.default_format);
    let output = match format {
        OutputFormat::Text => render::text(&report),
        OutputFormat::Json => render::json(&report).context("Could not serialize report")?,
    };
    println!("{output}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("true-current").chain(args.iter().copied()))
            .expect("Failed to parse args")
    }

    #[test]
    fn test_query_from_arguments() {
        let args = parse(&[
            "--fish-speed",
            "3",
            "--fish-bearing",
            "-10",
            "--ship-speed",
            "4",
            "--ship-course",
            "370",
            "--unit",
            "m/s",
        ]);
        let query = build_query(&args).unwrap();
        assert_eq!(query.unit, SpeedUnit::MetersPerSecond);
        assert_eq!(query.fish, Observation::new(3.0, -10.0));
        assert_eq!(query.ship, Observation::new(4.0, 370.0));
    }

    #[test]
    fn test_invalid_unit_is_rejected() {
        for tag in ["mph", "kt", "Knots", "ms", " knots"] {
            let res = Args::try_parse_from(["true-current", "--unit", tag]);
            assert!(res.is_err(), "--unit {tag:?} should be rejected");
        }
    }

    #[test]
    fn test_format_argument() {
        let args = parse(&["--format", "json"]);
        assert_eq!(args.format, Some(OutputFormat::Json));
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::Text.to_string(), "text");
    }

    #[test]
    fn test_query_from_readings_file() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/resources/readings.ron");
        let args = parse(&["--input", path]);
        let query = build_query(&args).unwrap();
        assert_eq!(query.unit, SpeedUnit::Knots);
        assert_eq!(query.fish, Observation::new(1.2, 45.0));
        assert_eq!(query.ship, Observation::new(4.5, 310.0));

        let args = parse(&["--input", path, "--unit", "meters_per_second"]);
        let query = build_query(&args).unwrap();
        assert_eq!(query.unit, SpeedUnit::MetersPerSecond);
    }

    #[test]
    fn test_missing_readings_file() {
        let args = parse(&["--input", "/nonexistent/readings.ron"]);
        let err = build_query(&args).unwrap_err();
        assert!(err.to_string().contains("Could not load readings"));
    }
}
