#[cfg(test)]
#[path = "../../tests/unit/models/params_test.rs"]
mod params_test;

use crate::algorithms::clustering::grid::MAX_GRID_PRECISION;
use crate::utils::{Float, GenericResult};

/// A default clustering radius in kilometers.
pub const DEFAULT_RADIUS_KM: Float = 2.;

/// A default minimum amount of points in a hotspot.
pub const DEFAULT_MIN_COUNT: usize = 5;

/// A default amount of decimal places used by grid clustering.
pub const DEFAULT_GRID_PRECISION: u32 = 2;

/// Specifies how points are grouped into clusters.
#[derive(Clone, Debug, PartialEq)]
pub enum ClusteringMethod {
    /// Greedy first-fit clustering around static seeds within a radius in kilometers.
    Seeded {
        /// A clustering distance threshold.
        radius_km: Float,
    },
    /// Bucketing by coordinates rounded to a number of decimal places.
    Grid {
        /// Amount of decimal places.
        precision: u32,
    },
}

/// Validated hotspot detection parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct ClusteringParams {
    method: ClusteringMethod,
    min_count: usize,
}

impl ClusteringParams {
    /// Creates parameters for seeded clustering.
    pub fn seeded(radius_km: Float, min_count: usize) -> GenericResult<Self> {
        if !radius_km.is_finite() || radius_km <= 0. {
            return Err(format!("radius should be a positive number of kilometers, got: '{radius_km}'").into());
        }

        Self::new(ClusteringMethod::Seeded { radius_km }, min_count)
    }

    /// Creates parameters for grid clustering.
    pub fn grid(precision: u32, min_count: usize) -> GenericResult<Self> {
        if precision > MAX_GRID_PRECISION {
            return Err(format!("grid precision should not exceed {MAX_GRID_PRECISION}, got: '{precision}'").into());
        }

        Self::new(ClusteringMethod::Grid { precision }, min_count)
    }

    fn new(method: ClusteringMethod, min_count: usize) -> GenericResult<Self> {
        if min_count < 1 {
            return Err(format!("min count should be at least 1, got: '{min_count}'").into());
        }

        Ok(Self { method, min_count })
    }

    /// Returns clustering method.
    pub fn method(&self) -> &ClusteringMethod {
        &self.method
    }

    /// Returns minimum amount of points in a reported cluster.
    pub fn min_count(&self) -> usize {
        self.min_count
    }
}

impl Default for ClusteringParams {
    fn default() -> Self {
        Self { method: ClusteringMethod::Seeded { radius_km: DEFAULT_RADIUS_KM }, min_count: DEFAULT_MIN_COUNT }
    }
}
