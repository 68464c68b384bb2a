use anyhow::{Result, ensure};
use ordered_float::OrderedFloat;

use crate::geometry::conversions::normalize_lon;
use crate::geometry::geo_traits::{Contains, GeoShape, Overlaps, Translate};
use crate::geometry::primitives::{GeoPoint, GeoVector};

/// Largest representable longitude span. A full 360° span is not representable:
/// the modular width arithmetic would collapse it to zero.
const MAX_SPAN_DEGREES: f64 = 360.0 - 1e-9;

/// Axis-aligned geodetic rectangle, defined by its south-west and north-east corners.
///
/// Because longitude wraps, `south_west.lon() > north_east.lon()` is valid and
/// means the rectangle spans the antimeridian (±180°). All longitude arithmetic
/// is done on eastward angular offsets from the west edge, so wrapped and
/// non-wrapped rectangles are handled uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeoRectangle {
    south_west: GeoPoint,
    north_east: GeoPoint,
}

impl GeoRectangle {
    pub fn try_new(south_west: GeoPoint, north_east: GeoPoint) -> Result<Self> {
        ensure!(
            south_west.lat() <= north_east.lat(),
            "south-west corner must not lie north of north-east corner: {} > {}",
            south_west.lat(),
            north_east.lat()
        );
        Ok(GeoRectangle {
            south_west,
            north_east,
        })
    }

    /// Degenerate rectangle covering a single point.
    pub fn from_point(point: GeoPoint) -> Self {
        GeoRectangle {
            south_west: point,
            north_east: point,
        }
    }

    pub fn south_west(&self) -> GeoPoint {
        self.south_west
    }

    pub fn north_east(&self) -> GeoPoint {
        self.north_east
    }

    /// True when the rectangle spans the antimeridian.
    pub fn is_wrapped(&self) -> bool {
        self.south_west.lon() > self.north_east.lon()
    }

    /// Eastward angular span of the rectangle, in `[0, 360)`.
    pub fn width_degrees(&self) -> f64 {
        (self.north_east.lon() - self.south_west.lon()).rem_euclid(360.0)
    }

    pub fn height_degrees(&self) -> f64 {
        self.north_east.lat() - self.south_west.lat()
    }

    /// Eastward angular offset of `lon` from the west edge, in `[0, 360)`.
    fn lon_offset(&self, lon: f64) -> f64 {
        (lon - self.south_west.lon()).rem_euclid(360.0)
    }

    /// The four corners: north-east, north-west, south-west, south-east.
    pub fn corners(&self) -> [GeoPoint; 4] {
        let (sw, ne) = (self.south_west, self.north_east);
        [
            ne,
            sw.with_lat(ne.lat())
                .expect("corner latitude is within range"),
            sw,
            ne.with_lat(sw.lat())
                .expect("corner latitude is within range"),
        ]
    }

    /// Smallest rectangle containing both `a` and `b`. Of the two candidate
    /// longitude spans (anchored at either operand's west edge) the smaller one
    /// wins; spans are capped just below a full revolution.
    pub fn bounding_rect(a: &GeoRectangle, b: &GeoRectangle) -> GeoRectangle {
        let lat_min = f64::min(a.south_west.lat(), b.south_west.lat());
        let lat_max = f64::max(a.north_east.lat(), b.north_east.lat());

        let span_from_a = f64::max(
            a.width_degrees(),
            a.lon_offset(b.south_west.lon()) + b.width_degrees(),
        );
        let span_from_b = f64::max(
            b.width_degrees(),
            b.lon_offset(a.south_west.lon()) + a.width_degrees(),
        );

        let (west, span) = if OrderedFloat(span_from_a) <= OrderedFloat(span_from_b) {
            (a.south_west.lon(), span_from_a)
        } else {
            (b.south_west.lon(), span_from_b)
        };
        let span = span.min(MAX_SPAN_DEGREES);

        let south_west =
            GeoPoint::try_new(lat_min, west).expect("corners of valid rectangles are valid");
        let north_east = GeoPoint::try_new(lat_max, normalize_lon(west + span))
            .expect("corners of valid rectangles are valid");
        GeoRectangle {
            south_west,
            north_east,
        }
    }

    /// Smallest rectangle containing both `self` and `point`.
    pub fn expand_to_include(&self, point: &GeoPoint) -> GeoRectangle {
        GeoRectangle::bounding_rect(self, &GeoRectangle::from_point(point.without_elevation()))
    }
}

impl Contains<GeoPoint> for GeoRectangle {
    fn contains(&self, point: &GeoPoint) -> bool {
        (self.south_west.lat()..=self.north_east.lat()).contains(&point.lat())
            && self.lon_offset(point.lon()) <= self.width_degrees()
    }
}

impl Contains<GeoRectangle> for GeoRectangle {
    fn contains(&self, other: &GeoRectangle) -> bool {
        let offset = self.lon_offset(other.south_west.lon());
        self.south_west.lat() <= other.south_west.lat()
            && other.north_east.lat() <= self.north_east.lat()
            && offset + other.width_degrees() <= self.width_degrees()
    }
}

impl Overlaps<GeoRectangle> for GeoRectangle {
    fn overlaps(&self, other: &GeoRectangle) -> bool {
        let lats_overlap = f64::max(self.south_west.lat(), other.south_west.lat())
            <= f64::min(self.north_east.lat(), other.north_east.lat());
        let lons_overlap = self.lon_offset(other.south_west.lon()) <= self.width_degrees()
            || other.lon_offset(self.south_west.lon()) <= other.width_degrees();
        lats_overlap && lons_overlap
    }
}

impl Translate for GeoRectangle {
    fn translate(&self, vector: &GeoVector) -> Self {
        GeoRectangle {
            south_west: self.south_west.translate(vector),
            north_east: self.north_east.translate(vector),
        }
    }
}

impl GeoShape for GeoRectangle {
    fn center(&self) -> GeoPoint {
        let lat = (self.south_west.lat() + self.north_east.lat()) / 2.0;
        let lon = normalize_lon(self.south_west.lon() + self.width_degrees() / 2.0);
        GeoPoint::try_new(lat, lon).expect("center of a valid rectangle is valid")
    }

    fn bounding_box(&self) -> GeoRectangle {
        *self
    }

    fn pixelate(&self) -> Vec<GeoRectangle> {
        vec![*self]
    }
}
