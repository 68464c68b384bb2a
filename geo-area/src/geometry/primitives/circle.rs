use std::f64::consts::FRAC_1_SQRT_2;

use anyhow::{Result, ensure};

use crate::geometry::conversions::{meters_to_degrees_lat, meters_to_degrees_lon_at_lat};
use crate::geometry::geo_traits::{Contains, GeoShape, Overlaps, Translate};
use crate::geometry::primitives::{GeoPoint, GeoRectangle, GeoVector};

/// Circle on the globe: a center point and a radius in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCircle {
    center: GeoPoint,
    radius_meters: f64,
}

impl GeoCircle {
    pub fn try_new(center: GeoPoint, radius_meters: f64) -> Result<Self> {
        ensure!(
            radius_meters.is_finite() && radius_meters >= 0.0,
            "circle radius must be finite and non-negative: {radius_meters}"
        );
        Ok(GeoCircle {
            center,
            radius_meters,
        })
    }

    /// Circle through `point`, centered at `center`.
    pub fn from_center_and_point(center: GeoPoint, point: &GeoPoint) -> Self {
        GeoCircle {
            center,
            radius_meters: center.distance_meters(point),
        }
    }

    pub fn radius_meters(&self) -> f64 {
        self.radius_meters
    }

    /// Bounding box touching the circle at the four compass points.
    ///
    /// Near the poles the latitude span clamps at ±90° and the longitude span
    /// degenerates (`cos` correction), per the documented pole edge cases.
    pub fn outer_bounding_box(&self) -> GeoRectangle {
        self.scaled_bounding_box(1.0)
    }

    /// Largest axis-aligned box lying entirely within the circle: the outer box
    /// scaled by `cos(45°)`, so its corners touch the circle from the inside.
    pub fn inner_bounding_box(&self) -> GeoRectangle {
        self.scaled_bounding_box(FRAC_1_SQRT_2)
    }

    fn scaled_bounding_box(&self, scale: f64) -> GeoRectangle {
        let d_lat = meters_to_degrees_lat(self.radius_meters) * scale;
        let d_lon = meters_to_degrees_lon_at_lat(self.radius_meters, self.center.lat()) * scale;
        let half = GeoVector::new(d_lat, d_lon);
        GeoRectangle::try_new(
            self.center.translate(&half.negate()),
            self.center.translate(&half),
        )
        .expect("non-negative radius yields ordered latitudes")
    }
}

impl Contains<GeoPoint> for GeoCircle {
    fn contains(&self, point: &GeoPoint) -> bool {
        self.bounding_box().contains(point)
    }
}

impl Overlaps<GeoRectangle> for GeoCircle {
    fn overlaps(&self, other: &GeoRectangle) -> bool {
        self.bounding_box().overlaps(other)
    }
}

impl Translate for GeoCircle {
    fn translate(&self, vector: &GeoVector) -> Self {
        GeoCircle {
            center: self.center.translate(vector),
            radius_meters: self.radius_meters,
        }
    }
}

impl GeoShape for GeoCircle {
    fn center(&self) -> GeoPoint {
        self.center
    }

    fn bounding_box(&self) -> GeoRectangle {
        self.outer_bounding_box()
    }

    /// A circle pixelates to its outer bounding box: a covering approximation,
    /// not an exact circular tiling.
    fn pixelate(&self) -> Vec<GeoRectangle> {
        vec![self.outer_bounding_box()]
    }
}
