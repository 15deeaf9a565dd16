#[cfg(test)]
#[path = "../../../tests/unit/algorithms/geometry/point_test.rs"]
mod point_test;

use crate::utils::Float;

/// Earth's mean radius in kilometers.
pub const EARTH_RADIUS_KM: Float = 6371.;

/// Represents a valid geographic location in degrees.
#[derive(Clone, Debug)]
pub struct GeoPoint {
    /// Latitude.
    pub lat: Float,
    /// Longitude.
    pub lng: Float,
}

impl GeoPoint {
    /// Creates a new instance of `GeoPoint` without any checks.
    pub fn new(lat: Float, lng: Float) -> Self {
        Self { lat, lng }
    }

    /// Creates a new instance of `GeoPoint` if both coordinates are finite and within valid
    /// ranges: latitude in [-90, 90], longitude in [-180, 180].
    pub fn try_new(lat: Float, lng: Float) -> Option<Self> {
        let is_valid = lat.is_finite() && lng.is_finite() && lat.abs() <= 90. && lng.abs() <= 180.;

        if is_valid { Some(Self { lat, lng }) } else { None }
    }

    /// Computes great-circle distance in kilometers to `other` using haversine formula.
    pub fn distance_to_point(&self, other: &GeoPoint) -> Float {
        let d_lat = degree_rad(other.lat - self.lat);
        let d_lng = degree_rad(other.lng - self.lng);

        let lat1 = degree_rad(self.lat);
        let lat2 = degree_rad(other.lat);

        let a = (d_lat / 2.).sin() * (d_lat / 2.).sin() + lat1.cos() * lat2.cos() * (d_lng / 2.).sin() * (d_lng / 2.).sin();
        // rounding can push `a` slightly above 1 for antipodal points
        let a = a.clamp(0., 1.);
        let c = 2. * a.sqrt().atan2((1. - a).sqrt());

        EARTH_RADIUS_KM * c
    }

    /// Returns a point reached by travelling `distance_km` from this point along a great circle
    /// with initial `bearing` (degrees clockwise from north).
    pub fn destination_point(&self, bearing: Float, distance_km: Float) -> GeoPoint {
        let delta = distance_km / EARTH_RADIUS_KM;
        let theta = degree_rad(bearing);

        let lat1 = degree_rad(self.lat);
        let lng1 = degree_rad(self.lng);

        let lat2 = (lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * theta.cos()).asin();
        let lng2 = lng1 + (theta.sin() * delta.sin() * lat1.cos()).atan2(delta.cos() - lat1.sin() * lat2.sin());

        GeoPoint::new(rad_degree(lat2), normalize_lng(rad_degree(lng2)))
    }
}

/// Converts degrees to radians.
#[inline(always)]
fn degree_rad(degrees: Float) -> Float {
    std::f64::consts::PI * degrees / 180.
}

/// Converts radians to degrees.
#[inline(always)]
fn rad_degree(radians: Float) -> Float {
    radians * 180. / std::f64::consts::PI
}

/// Wraps longitude into [-180, 180).
fn normalize_lng(lng: Float) -> Float {
    (lng + 540.).rem_euclid(360.) - 180.
}

impl GeoPoint {
    fn transmute(&self) -> (i64, i64) {
        let lat = self.lat.to_bits() as i64;
        let lng = self.lng.to_bits() as i64;

        (lat, lng)
    }
}

impl Eq for GeoPoint {}

impl PartialEq for GeoPoint {
    fn eq(&self, other: &Self) -> bool {
        self.transmute() == other.transmute()
    }
}
