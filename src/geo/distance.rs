use crate::lat_long::LatitudeLongitude;

pub const EARTH_RADIUS_NM: f64 = 3440.1;
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in nautical miles.
pub fn distance(a: LatitudeLongitude, b: LatitudeLongitude) -> f64 {
    distance_with_radius(a, b, EARTH_RADIUS_NM)
}

pub fn distance_with_radius(a: LatitudeLongitude, b: LatitudeLongitude, radius: f64) -> f64 {
    radius * a.central_angle(&b)
}
