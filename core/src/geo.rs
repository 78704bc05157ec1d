// core/src/geo.rs

pub const EARTH_RADIUS_M: f64 = 6_371_000.0; // mean Earth radius (m)

/// Great-circle distance in meters between two points given in degrees.
///
/// a = sin²(Δlat/2) + cos(lat1)·cos(lat2)·sin²(Δlon/2)
/// c = 2·atan2(√a, √(1−a))
#[inline]
pub fn haversine_m(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    // avrunding kan gi a litt over 1 for nesten antipodale punkter
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_M * c
}

/// 0.0 in either coordinate is treated as "no fix" downstream.
#[inline]
pub fn has_fix(lat: f64, lon: f64) -> bool {
    lat != 0.0 && lon != 0.0 && lat.is_finite() && lon.is_finite()
}
