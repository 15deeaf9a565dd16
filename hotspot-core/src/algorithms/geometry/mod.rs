//! Geodesic primitives on a spherical Earth model.

mod circle;
pub use self::circle::create_circle;

mod nearest;
pub use self::nearest::find_nearest;

mod point;
pub use self::point::{EARTH_RADIUS_KM, GeoPoint};
