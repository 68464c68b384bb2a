use anyhow::{Result, bail};
use itertools::Itertools;
use log::warn;

use crate::geometry::geo_traits::{Contains, GeoShape, Overlaps, Translate};
use crate::geometry::primitives::{GeoLine, GeoPoint, GeoRectangle, GeoVector};
use crate::util::F64A;

/// Ordered sequence of at least 2 points, exposed as consecutive [`GeoLine`] segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GeoPolyLine {
    points: Vec<GeoPoint>,
}

impl GeoPolyLine {
    pub fn try_new(points: Vec<GeoPoint>) -> Result<Self> {
        if points.len() < 2 {
            bail!("polyline must have at least 2 points: {points:?}");
        }
        let n_duplicates = points.iter().tuple_windows().filter(|(a, b)| a == b).count();
        if n_duplicates > 0 {
            warn!("polyline contains {n_duplicates} duplicate consecutive point(s)");
        }
        Ok(GeoPolyLine { points })
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    pub fn n_points(&self) -> usize {
        self.points.len()
    }

    /// The consecutive line segments making up the polyline.
    pub fn as_lines(&self) -> impl Iterator<Item = GeoLine> + '_ {
        self.points
            .iter()
            .tuple_windows()
            .map(|(a, b)| GeoLine::new(*a, *b))
    }

    /// Total arc length in meters.
    pub fn length_meters(&self) -> f64 {
        self.as_lines().map(|line| line.length_meters()).sum()
    }

    /// Point reached by walking `offset_meters` along the polyline from its start.
    ///
    /// Within a segment, latitude and longitude interpolate linearly along the
    /// segment's arc. Offsets below zero or beyond the total length extrapolate
    /// along the bearing of the first/last segment instead of failing.
    ///
    /// Elevation interpolates linearly only where both segment endpoints define
    /// one; where either endpoint lacks elevation, the nearest defined elevation
    /// is carried over and held constant. Extrapolated offsets hold the terminal
    /// elevation.
    pub fn point_at_offset(&self, offset_meters: f64) -> GeoPoint {
        let lengths: Vec<f64> = self.as_lines().map(|line| line.length_meters()).collect();
        let elevations = self.effective_elevations();

        // negative offsets walk backwards along the first segment
        if offset_meters < 0.0 {
            return self.segment_point(0, offset_meters, &lengths, &elevations);
        }

        let mut walked = 0.0;
        for (i, &length) in lengths.iter().enumerate() {
            let is_last = i == lengths.len() - 1;
            // tolerant comparison: accumulated float error must not push an
            // offset equal to the total length past the final segment
            if F64A(offset_meters) <= F64A(walked + length) || is_last {
                return self.segment_point(i, offset_meters - walked, &lengths, &elevations);
            }
            walked += length;
        }
        unreachable!("polyline has at least one segment");
    }

    /// Point within (or extrapolated from) segment `i` at `distance` meters past
    /// its start.
    fn segment_point(
        &self,
        i: usize,
        distance: f64,
        lengths: &[f64],
        elevations: &[f64],
    ) -> GeoPoint {
        let line = GeoLine::new(self.points[i], self.points[i + 1]);
        let f = if lengths[i] > 0.0 {
            distance / lengths[i]
        } else {
            0.0
        };

        let raw_start = self.points[i].elevation_raw();
        let raw_end = self.points[i + 1].elevation_raw();
        let elevation = if !raw_start.is_nan() && !raw_end.is_nan() {
            // both ends defined: interpolate, holding steady beyond the ends
            raw_start + (raw_end - raw_start) * f.clamp(0.0, 1.0)
        } else if f >= 1.0 {
            elevations[i + 1]
        } else {
            elevations[i]
        };

        line.point_at_fraction(f).with_elevation_meters(elevation)
    }

    /// Per-point elevations with gaps filled by carrying the nearest defined
    /// elevation forward, then backward for any leading gap. All NaN when no
    /// point defines an elevation.
    fn effective_elevations(&self) -> Vec<f64> {
        let mut filled: Vec<f64> = self.points.iter().map(|p| p.elevation_raw()).collect();
        for i in 1..filled.len() {
            if filled[i].is_nan() {
                filled[i] = filled[i - 1];
            }
        }
        for i in (0..filled.len() - 1).rev() {
            if filled[i].is_nan() {
                filled[i] = filled[i + 1];
            }
        }
        filled
    }
}

impl Contains<GeoPoint> for GeoPolyLine {
    fn contains(&self, point: &GeoPoint) -> bool {
        self.bounding_box().contains(point)
    }
}

impl Overlaps<GeoRectangle> for GeoPolyLine {
    fn overlaps(&self, other: &GeoRectangle) -> bool {
        self.bounding_box().overlaps(other)
    }
}

impl Translate for GeoPolyLine {
    fn translate(&self, vector: &GeoVector) -> Self {
        GeoPolyLine {
            points: self.points.iter().map(|p| p.translate(vector)).collect(),
        }
    }
}

impl GeoShape for GeoPolyLine {
    fn center(&self) -> GeoPoint {
        self.bounding_box().center()
    }

    fn bounding_box(&self) -> GeoRectangle {
        self.as_lines()
            .map(|line| line.bounding_box())
            .reduce(|acc, bb| GeoRectangle::bounding_rect(&acc, &bb))
            .expect("polyline has at least one segment")
    }

    /// One covering rectangle per segment. Rectangles of consecutive segments
    /// overlap at the shared endpoints; that is fine for coverage.
    fn pixelate(&self) -> Vec<GeoRectangle> {
        self.as_lines().map(|line| line.bounding_box()).collect()
    }
}
