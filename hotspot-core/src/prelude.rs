//! This module reimports commonly used types.

pub use crate::algorithms::geometry::{EARTH_RADIUS_KM, GeoPoint, create_circle, find_nearest};
pub use crate::detection::{detect_clusters, detect_hotspots, detect_many, validate_points};
pub use crate::models::{
    Cluster, ClusteringMethod, ClusteringParams, DEFAULT_GRID_PRECISION, DEFAULT_MIN_COUNT, DEFAULT_RADIUS_KM,
    Hotspots, RawPoint,
};
pub use crate::utils::{Float, GenericError, GenericResult, InfoLogger, compare_floats, create_noop_logger};
