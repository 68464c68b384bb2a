use std::hash::{Hash, Hasher};

use anyhow::{Result, ensure};

use crate::geometry::conversions::{
    degrees_lat_to_meters, degrees_lon_to_meters_at_lat, normalize_lon,
};
use crate::geometry::geo_traits::Translate;
use crate::geometry::primitives::GeoVector;

/// Immutable geodetic coordinate: latitude/longitude in degrees, with an optional
/// elevation in meters.
///
/// Invariants, established at construction: latitude lies in `[-90, 90]`,
/// longitude is normalized into `(-180, 180]` (wrap-around, `-180` becomes `180`).
/// Absent elevation is encoded as NaN, canonicalized to `f64::NAN`.
#[derive(Debug, Clone, Copy)]
pub struct GeoPoint {
    lat: f64,
    lon: f64,
    elevation: f64,
}

impl GeoPoint {
    /// Creates a point without elevation. Fails on non-finite input or a
    /// latitude outside `[-90, 90]`; any finite longitude is accepted and wrapped.
    pub fn try_new(lat: f64, lon: f64) -> Result<Self> {
        ensure!(
            lat.is_finite() && (-90.0..=90.0).contains(&lat),
            "latitude out of range [-90, 90]: {lat}"
        );
        ensure!(lon.is_finite(), "longitude must be finite: {lon}");
        Ok(GeoPoint {
            lat,
            lon: normalize_lon(lon),
            elevation: f64::NAN,
        })
    }

    /// Creates a point with an elevation in meters. NaN elevation means "absent".
    pub fn try_with_elevation(lat: f64, lon: f64, elevation_meters: f64) -> Result<Self> {
        ensure!(
            elevation_meters.is_finite() || elevation_meters.is_nan(),
            "elevation must be finite or NaN: {elevation_meters}"
        );
        Ok(GeoPoint::try_new(lat, lon)?.with_elevation_meters(elevation_meters))
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Elevation in meters, `None` when absent.
    pub fn elevation_meters(&self) -> Option<f64> {
        if self.elevation.is_nan() {
            None
        } else {
            Some(self.elevation)
        }
    }

    /// Raw elevation, NaN when absent. Internal NaN-arithmetic convenience.
    pub(crate) fn elevation_raw(&self) -> f64 {
        self.elevation
    }

    /// Returns a new point with the given latitude. Fails if out of range.
    pub fn with_lat(&self, lat: f64) -> Result<Self> {
        ensure!(
            lat.is_finite() && (-90.0..=90.0).contains(&lat),
            "latitude out of range [-90, 90]: {lat}"
        );
        Ok(GeoPoint { lat, ..*self })
    }

    /// Returns a new point with the given longitude, normalized into `(-180, 180]`.
    pub fn with_lon(&self, lon: f64) -> Self {
        GeoPoint {
            lon: normalize_lon(lon),
            ..*self
        }
    }

    /// Returns a new point with the given elevation. NaN clears the elevation.
    pub fn with_elevation_meters(&self, elevation_meters: f64) -> Self {
        let elevation = if elevation_meters.is_nan() {
            f64::NAN
        } else {
            elevation_meters
        };
        GeoPoint { elevation, ..*self }
    }

    /// Returns a new point without elevation.
    pub fn without_elevation(&self) -> Self {
        GeoPoint {
            elevation: f64::NAN,
            ..*self
        }
    }

    /// Shortest-path displacement from `self` to `other`.
    /// The easting component is the signed longitude difference wrapped into `(-180, 180]`.
    pub fn vector_to(&self, other: &GeoPoint) -> GeoVector {
        GeoVector::new(other.lat - self.lat, normalize_lon(other.lon - self.lon))
    }

    /// Approximate distance in meters between two points, using a local
    /// equirectangular projection at the mean latitude. Accurate for the short
    /// ranges this library deals in, not for transcontinental distances.
    pub fn distance_meters(&self, other: &GeoPoint) -> f64 {
        let northing_meters = degrees_lat_to_meters(other.lat - self.lat);
        let easting_degrees = normalize_lon(other.lon - self.lon);
        let mean_lat = (self.lat + other.lat) / 2.0;
        let easting_meters = degrees_lon_to_meters_at_lat(easting_degrees, mean_lat);
        (northing_meters.powi(2) + easting_meters.powi(2)).sqrt()
    }
}

impl Translate for GeoPoint {
    fn translate(&self, vector: &GeoVector) -> Self {
        GeoPoint {
            lat: (self.lat + vector.northing()).clamp(-90.0, 90.0),
            lon: normalize_lon(self.lon + vector.easting()),
            elevation: self.elevation,
        }
    }
}

impl PartialEq for GeoPoint {
    fn eq(&self, other: &Self) -> bool {
        self.lat == other.lat
            && self.lon == other.lon
            && (self.elevation == other.elevation
                || (self.elevation.is_nan() && other.elevation.is_nan()))
    }
}

// lat/lon are validated finite; NaN elevation compares equal to itself.
impl Eq for GeoPoint {}

impl Hash for GeoPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.lat.to_bits().hash(state);
        self.lon.to_bits().hash(state);
        // canonicalized to f64::NAN at construction, so bits are stable
        self.elevation.to_bits().hash(state);
    }
}
