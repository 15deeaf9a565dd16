use crate::algorithms::geometry::GeoPoint;
use crate::models::RawPoint;
use crate::utils::Float;

/// Length of one degree of longitude on the equator in kilometers.
pub const KM_PER_DEGREE: Float = 111.19492664455873;

pub fn p(lat: Float, lng: Float) -> GeoPoint {
    GeoPoint { lat, lng }
}

pub fn raw(lat: Float, lng: Float) -> RawPoint {
    RawPoint { lat: Some(lat), lng: Some(lng) }
}

/// Creates a point on the equator shifted east from zero meridian by `km` kilometers.
pub fn equator_km(km: Float) -> RawPoint {
    raw(0., km / KM_PER_DEGREE)
}
