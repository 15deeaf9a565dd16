//! A collection of models to represent hotspot detection inputs and results.

mod cluster;
pub use self::cluster::{Cluster, Hotspots};

mod params;
pub use self::params::{ClusteringMethod, ClusteringParams, DEFAULT_GRID_PRECISION, DEFAULT_MIN_COUNT, DEFAULT_RADIUS_KM};

mod point;
pub use self::point::RawPoint;
