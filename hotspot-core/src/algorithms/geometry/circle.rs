#[cfg(test)]
#[path = "../../../tests/unit/algorithms/geometry/circle_test.rs"]
mod circle_test;

use super::GeoPoint;
use crate::utils::Float;

/// Approximates a circle around `center` with a closed ring of `segments` vertices, each one is
/// `radius_km` away from the center. The first vertex is repeated at the end of the ring.
pub fn create_circle(center: &GeoPoint, radius_km: Float, segments: usize) -> Vec<GeoPoint> {
    assert!(segments >= 3, "circle requires at least 3 segments");

    let step = 360. / segments as Float;

    let mut ring = (0..segments).map(|idx| center.destination_point(idx as Float * step, radius_km)).collect::<Vec<_>>();

    if let Some(first) = ring.first().cloned() {
        ring.push(first);
    }

    ring
}
