#[cfg(test)]
#[path = "../../tests/unit/models/point_test.rs"]
mod point_test;

use crate::algorithms::geometry::GeoPoint;
use crate::utils::Float;

/// Represents an unvalidated location record as it comes from upstream sources. Any of the
/// coordinates can be missing when the source record was incomplete or malformed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawPoint {
    /// Latitude, if present and numeric.
    pub lat: Option<Float>,
    /// Longitude, if present and numeric.
    pub lng: Option<Float>,
}

impl RawPoint {
    /// Creates a new instance of `RawPoint`.
    pub fn new(lat: Option<Float>, lng: Option<Float>) -> Self {
        Self { lat, lng }
    }

    /// Validates the record and returns a well-typed point, if possible.
    pub fn to_geo_point(&self) -> Option<GeoPoint> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => GeoPoint::try_new(lat, lng),
            _ => None,
        }
    }
}

impl From<GeoPoint> for RawPoint {
    fn from(point: GeoPoint) -> Self {
        Self { lat: Some(point.lat), lng: Some(point.lng) }
    }
}

impl From<(Float, Float)> for RawPoint {
    fn from((lat, lng): (Float, Float)) -> Self {
        Self { lat: Some(lat), lng: Some(lng) }
    }
}
