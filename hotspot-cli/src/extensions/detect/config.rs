//! Hotspot detection configuration.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/detect/config_test.rs"]
mod config_test;

use hotspot_core::models::{ClusteringParams, DEFAULT_GRID_PRECISION, DEFAULT_MIN_COUNT, DEFAULT_RADIUS_KM};
use hotspot_core::utils::{Float, GenericResult};
use serde::Deserialize;
use std::io::{BufReader, Read};

/// A default radius of a rendered hotspot circle in meters.
pub const DEFAULT_DISPLAY_RADIUS: Float = 1000.;

/// A detection configuration.
#[derive(Clone, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Specifies clustering configuration.
    pub clustering: Option<ClusteringConfig>,
    /// Specifies output configuration.
    pub output: Option<OutputConfig>,
    /// Specifies logging configuration.
    pub logging: Option<LoggingConfig>,
}

/// A clustering method configuration.
#[derive(Clone, Deserialize, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum ClusteringConfig {
    /// Seeded first-fit clustering within a radius.
    #[serde(rename(deserialize = "seeded"))]
    #[serde(rename_all = "camelCase")]
    Seeded {
        /// Clustering radius in kilometers. Default is 2.
        radius_km: Option<Float>,
        /// Minimum hotspot size. Default is 5.
        min_count: Option<usize>,
    },

    /// Bucketing by rounded coordinates.
    #[serde(rename(deserialize = "grid"))]
    #[serde(rename_all = "camelCase")]
    Grid {
        /// Amount of decimal places. Default is 2.
        precision: Option<u32>,
        /// Minimum hotspot size. Default is 5.
        min_count: Option<usize>,
    },
}

/// An output configuration.
#[derive(Clone, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct OutputConfig {
    /// A radius of rendered hotspot circles in meters. Default is 1000.
    pub display_radius: Option<Float>,
}

/// A logging configuration.
#[derive(Clone, Deserialize, Debug, Default)]
pub struct LoggingConfig {
    /// Specifies whether logging is enabled. Default is false.
    pub enabled: bool,
}

/// Overrides config values, typically, specified from command line.
#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    /// A clustering method name: `seeded` or `grid`.
    pub method: Option<String>,
    /// Clustering radius in kilometers.
    pub radius_km: Option<Float>,
    /// Minimum hotspot size.
    pub min_count: Option<usize>,
    /// Grid precision.
    pub precision: Option<u32>,
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> Result<Config, String> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'"))
}

/// Creates validated clustering parameters from config and overrides. Overrides have priority.
pub fn create_params(config: &Config, overrides: &ConfigOverrides) -> GenericResult<ClusteringParams> {
    let (config_method, radius_km, precision, min_count) = match config.clustering.as_ref() {
        Some(ClusteringConfig::Seeded { radius_km, min_count }) => ("seeded", *radius_km, None, *min_count),
        Some(ClusteringConfig::Grid { precision, min_count }) => ("grid", None, *precision, *min_count),
        None => ("seeded", None, None, None),
    };

    let method = overrides.method.as_deref().unwrap_or(config_method);
    let min_count = overrides.min_count.or(min_count).unwrap_or(DEFAULT_MIN_COUNT);

    match method {
        "seeded" => ClusteringParams::seeded(overrides.radius_km.or(radius_km).unwrap_or(DEFAULT_RADIUS_KM), min_count),
        "grid" => ClusteringParams::grid(overrides.precision.or(precision).unwrap_or(DEFAULT_GRID_PRECISION), min_count),
        _ => Err(format!("unknown clustering method: '{method}'").into()),
    }
}

/// Returns display radius of hotspot circles in meters.
pub fn get_display_radius(config: &Config, display_radius: Option<Float>) -> GenericResult<Float> {
    let display_radius = display_radius
        .or_else(|| config.output.as_ref().and_then(|output| output.display_radius))
        .unwrap_or(DEFAULT_DISPLAY_RADIUS);

    if display_radius.is_finite() && display_radius > 0. {
        Ok(display_radius)
    } else {
        Err(format!("display radius should be a positive number of meters, got: '{display_radius}'").into())
    }
}

/// Returns true if logging is enabled in config.
pub fn is_logging_enabled(config: &Config) -> bool {
    config.logging.as_ref().is_some_and(|logging| logging.enabled)
}
