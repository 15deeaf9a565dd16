//! Hotspot detection entry points.
//!
//! Every call is pure: clusters are built from scratch over the supplied points and nothing is
//! kept between calls, so detections can run concurrently without synchronization.

#[cfg(test)]
#[path = "../../tests/unit/detection/detection_test.rs"]
mod detection_test;

use crate::algorithms::clustering::{grid, seeded};
use crate::algorithms::geometry::GeoPoint;
use crate::models::{Cluster, ClusteringMethod, ClusteringParams, Hotspots, RawPoint};
use crate::utils::{Float, GenericResult, parallel_collect};

/// Detects hotspots using seeded clustering and returns their centers in order of creation.
/// Malformed points are skipped. Returns an error when `radius_km` is not positive or when
/// `min_count` is zero.
pub fn detect_hotspots(points: &[RawPoint], radius_km: Float, min_count: usize) -> GenericResult<Vec<GeoPoint>> {
    let params = ClusteringParams::seeded(radius_km, min_count)?;

    Ok(detect_clusters(points, &params).centers())
}

/// Detects hotspots with their members using given parameters.
pub fn detect_clusters(points: &[RawPoint], params: &ClusteringParams) -> Hotspots {
    let (valid, skipped) = validate_points(points);

    let clusters = match params.method() {
        ClusteringMethod::Seeded { radius_km } => {
            seeded::create_clusters(valid.iter(), *radius_km, |a: &GeoPoint, b: &GeoPoint| a.distance_to_point(b))
                .into_iter()
                .map(|members| Cluster {
                    center: members[0].clone(),
                    members: members.into_iter().cloned().collect(),
                })
                .collect::<Vec<_>>()
        }
        ClusteringMethod::Grid { precision } => grid::create_clusters(valid.iter(), *precision, |point: &GeoPoint| point)
            .into_iter()
            .map(|cluster| Cluster { center: cluster.cell, members: cluster.items.into_iter().cloned().collect() })
            .collect::<Vec<_>>(),
    };

    let formed = clusters.len();
    let clusters = clusters.into_iter().filter(|cluster| cluster.size() >= params.min_count()).collect();

    Hotspots { clusters, total: points.len(), skipped, formed }
}

/// Runs independent detections over multiple point sets in parallel. Results are returned in
/// the order of point sets.
pub fn detect_many(point_sets: &[Vec<RawPoint>], params: &ClusteringParams) -> Vec<Hotspots> {
    parallel_collect(point_sets, |points| detect_clusters(points.as_slice(), params))
}

/// Converts raw records into valid points preserving their order. Returns valid points and an
/// amount of skipped records.
pub fn validate_points(points: &[RawPoint]) -> (Vec<GeoPoint>, usize) {
    let valid = points.iter().filter_map(|point| point.to_geo_point()).collect::<Vec<_>>();
    let skipped = points.len() - valid.len();

    (valid, skipped)
}
