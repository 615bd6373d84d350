use crate::airport::Airport;

/// Mean Earth radius in kilometers, used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6_371.0;

/// Great-circle distance between two airports in kilometers (haversine).
///
/// Symmetric, and zero when both arguments are the same airport.
pub fn distance_km(a: &Airport, b: &Airport) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

/// Initial bearing in degrees from `from` toward `to`, in [-180, 180).
///
/// Display-only: the map draws route arrows with this, nothing in the
/// simulation depends on it.
pub fn bearing_degrees(from: &Airport, to: &Airport) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let d_lon = (to.longitude - from.longitude).to_radians();

    let y = d_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();
    let bearing = y.atan2(x).to_degrees();

    // atan2 yields (-180, 180]; fold the single out-of-range value.
    if bearing >= 180.0 {
        bearing - 360.0
    } else {
        bearing
    }
}
