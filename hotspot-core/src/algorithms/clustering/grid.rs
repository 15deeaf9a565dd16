//! This module contains grid based clustering: items are bucketed by their coordinates rounded
//! to a fixed number of decimal places.

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/clustering/grid_test.rs"]
mod grid_test;

use crate::algorithms::geometry::GeoPoint;
use crate::utils::Float;
use rustc_hash::FxHashMap;

/// Max supported amount of decimal places for grid cells.
pub const MAX_GRID_PRECISION: u32 = 10;

/// Represents a grid cell with items which fall into it.
#[derive(Clone, Debug)]
pub struct GridCluster<'a, T> {
    /// A cell location: item coordinates rounded to the grid precision.
    pub cell: GeoPoint,
    /// Items in their original order.
    pub items: Vec<&'a T>,
}

/// Creates clusters by rounding item coordinates to `precision` decimal places. Rounding is half
/// up (towards positive infinity on ties). Clusters are returned in order of the first item seen
/// in each cell.
///
/// # Panics
///
/// Panics if `precision` exceeds `MAX_GRID_PRECISION`.
pub fn create_clusters<'a, T, IS, FN>(items: IS, precision: u32, location_fn: FN) -> Vec<GridCluster<'a, T>>
where
    IS: IntoIterator<Item = &'a T>,
    FN: Fn(&T) -> &GeoPoint,
{
    assert!(precision <= MAX_GRID_PRECISION);

    let scale = (10_i64.pow(precision)) as Float;
    let to_key = |value: Float| (value * scale + 0.5).floor() as i64;

    let mut index = FxHashMap::<(i64, i64), usize>::default();
    let mut clusters = Vec::<GridCluster<'a, T>>::new();

    for item in items {
        let location = location_fn(item);
        let key = (to_key(location.lat), to_key(location.lng));

        let cluster_idx = *index.entry(key).or_insert_with(|| {
            clusters.push(GridCluster { cell: GeoPoint::new(key.0 as Float / scale, key.1 as Float / scale), items: vec![] });
            clusters.len() - 1
        });

        clusters[cluster_idx].items.push(item);
    }

    clusters
}
