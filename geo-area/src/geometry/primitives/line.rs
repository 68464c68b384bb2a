use crate::geometry::conversions::{
    degrees_lat_to_meters, degrees_lon_to_meters_at_lat, normalize_lon,
};
use crate::geometry::geo_traits::{Contains, GeoShape, Overlaps, Translate};
use crate::geometry::primitives::{GeoPoint, GeoRectangle, GeoVector};

/// Line segment between two points, running eastward from `south_west` to `north_east`.
///
/// The field names follow the wire contract; the endpoints are *not* required
/// to be ordered south-west/north-east. The eastward direction is resolved at
/// query time: the easting is the non-negative angle in `[0, 360)` traveled
/// east from the first point to reach the second. A line specified "the long
/// way around" (easting > 180°) is kept that way, see
/// [`GeoLine::is_wrapped_on_long_side`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeoLine {
    south_west: GeoPoint,
    north_east: GeoPoint,
}

impl GeoLine {
    pub fn new(south_west: GeoPoint, north_east: GeoPoint) -> Self {
        GeoLine {
            south_west,
            north_east,
        }
    }

    pub fn south_west(&self) -> GeoPoint {
        self.south_west
    }

    pub fn north_east(&self) -> GeoPoint {
        self.north_east
    }

    /// Signed latitude difference in degrees (negative when the line runs south).
    pub fn northing_degrees(&self) -> f64 {
        self.north_east.lat() - self.south_west.lat()
    }

    /// Eastward angular span in `[0, 360)`: traveling east from the first point
    /// by this amount reaches the second point.
    pub fn easting_degrees(&self) -> f64 {
        (self.north_east.lon() - self.south_west.lon()).rem_euclid(360.0)
    }

    /// True when the line was specified via the longer way around the globe.
    pub fn is_wrapped_on_long_side(&self) -> bool {
        self.easting_degrees() > 180.0
    }

    /// Length in meters, measured along the eastward arc the line describes.
    pub fn length_meters(&self) -> f64 {
        let northing_meters = degrees_lat_to_meters(self.northing_degrees());
        let mean_lat = (self.south_west.lat() + self.north_east.lat()) / 2.0;
        let easting_meters = degrees_lon_to_meters_at_lat(self.easting_degrees(), mean_lat);
        (northing_meters.powi(2) + easting_meters.powi(2)).sqrt()
    }

    /// Point at fraction `f` along the line: `0` is the first endpoint, `1` the
    /// second. Values outside `[0, 1]` extrapolate along the line's bearing
    /// (latitude clamps at the poles). Elevation is not interpolated here.
    pub(crate) fn point_at_fraction(&self, f: f64) -> GeoPoint {
        let lat = (self.south_west.lat() + self.northing_degrees() * f).clamp(-90.0, 90.0);
        let lon = normalize_lon(self.south_west.lon() + self.easting_degrees() * f);
        GeoPoint::try_new(lat, lon).expect("interpolated point is within range")
    }
}

impl Contains<GeoPoint> for GeoLine {
    fn contains(&self, point: &GeoPoint) -> bool {
        self.bounding_box().contains(point)
    }
}

impl Overlaps<GeoRectangle> for GeoLine {
    fn overlaps(&self, other: &GeoRectangle) -> bool {
        self.bounding_box().overlaps(other)
    }
}

impl Translate for GeoLine {
    fn translate(&self, vector: &GeoVector) -> Self {
        GeoLine {
            south_west: self.south_west.translate(vector),
            north_east: self.north_east.translate(vector),
        }
    }
}

impl GeoShape for GeoLine {
    /// Midpoint along the arc the line actually describes. Never the naive
    /// average of the two longitudes, which is wrong across the antimeridian.
    fn center(&self) -> GeoPoint {
        self.point_at_fraction(0.5)
    }

    fn bounding_box(&self) -> GeoRectangle {
        let lat_min = f64::min(self.south_west.lat(), self.north_east.lat());
        let lat_max = f64::max(self.south_west.lat(), self.north_east.lat());

        // the box inherits the line's eastward span, wrapped or not
        let south_west = GeoPoint::try_new(lat_min, self.south_west.lon())
            .expect("endpoint latitude is valid");
        let north_east = GeoPoint::try_new(lat_max, self.north_east.lon())
            .expect("endpoint latitude is valid");
        GeoRectangle::try_new(south_west, north_east).expect("latitudes are ordered")
    }

    fn pixelate(&self) -> Vec<GeoRectangle> {
        vec![self.bounding_box()]
    }
}
