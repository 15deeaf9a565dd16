#[cfg(test)]
#[path = "../../../tests/unit/algorithms/geometry/nearest_test.rs"]
mod nearest_test;

use super::GeoPoint;
use crate::utils::{Float, compare_floats};

/// Finds the item closest to `target` by haversine distance together with the distance in km.
/// Items further than `max_distance_km` (when specified) are ignored. When several items share
/// the minimal distance, the first one encountered is returned.
pub fn find_nearest<'a, T, IS, FN>(
    target: &GeoPoint,
    items: IS,
    location_fn: FN,
    max_distance_km: Option<Float>,
) -> Option<(&'a T, Float)>
where
    IS: IntoIterator<Item = &'a T>,
    FN: Fn(&T) -> &GeoPoint,
{
    items
        .into_iter()
        .map(|item| (item, target.distance_to_point(location_fn(item))))
        .filter(|(_, distance)| max_distance_km.is_none_or(|max_distance| *distance <= max_distance))
        .min_by(|(_, a), (_, b)| compare_floats(*a, *b))
}
