//! Conversions between meters and degrees at a given latitude.
//!
//! Degrees of latitude span a (near) constant number of meters anywhere on the
//! globe. Degrees of longitude shrink towards the poles as the meridians
//! converge, corrected here with a cosine factor. None of these functions guard
//! against latitudes of exactly ±90°; at the poles the cosine correction
//! divides by zero and Infinity/NaN propagate naturally to the caller.

/// Meters spanned by one degree of latitude.
pub const METERS_PER_DEGREE_LAT: f64 = 110_574.235;

/// Meters spanned by one degree of longitude at the equator.
pub const METERS_PER_DEGREE_LON_EQUATOR: f64 = 111_319.458;

pub fn meters_to_degrees_lat(meters: f64) -> f64 {
    meters / METERS_PER_DEGREE_LAT
}

pub fn degrees_lat_to_meters(degrees: f64) -> f64 {
    degrees * METERS_PER_DEGREE_LAT
}

/// Meters to degrees of longitude at latitude `lat_degrees`.
/// Blows up at the poles (`cos(±90°) == 0`).
pub fn meters_to_degrees_lon_at_lat(meters: f64, lat_degrees: f64) -> f64 {
    meters / (METERS_PER_DEGREE_LON_EQUATOR * lat_degrees.to_radians().cos())
}

/// Degrees of longitude to meters at latitude `lat_degrees`.
pub fn degrees_lon_to_meters_at_lat(degrees: f64, lat_degrees: f64) -> f64 {
    degrees * METERS_PER_DEGREE_LON_EQUATOR * lat_degrees.to_radians().cos()
}

/// Normalizes a longitude into `(-180, 180]`, congruent to the input modulo 360.
/// Wrap-around semantics: `-180` maps to `180`.
pub fn normalize_lon(lon: f64) -> f64 {
    let lon = lon % 360.0;
    if lon > 180.0 {
        lon - 360.0
    } else if lon <= -180.0 {
        lon + 360.0
    } else {
        lon
    }
}
