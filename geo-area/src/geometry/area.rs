use anyhow::{Result, bail};
use log::debug;

use crate::geometry::geo_traits::{Contains, GeoShape, Overlaps, Translate};
use crate::geometry::primitives::{
    GeoCircle, GeoLine, GeoPoint, GeoPolyLine, GeoRectangle, GeoVector,
};

/// Compound geodetic region: a persistent, immutable tree of primitive shapes
/// combined by union.
///
/// Leaves are the primitive shapes; `Union` nodes combine two sub-areas.
/// Composing areas never mutates either operand, so trees can be shared and
/// queried from any number of threads.
///
/// `contains`/`overlaps` answers are bounding-box approximations: conservative
/// and over-inclusive, never exact geometric intersection. Consumers rely on
/// the over-inclusive behavior.
#[derive(Debug, Clone, PartialEq)]
pub enum GeoArea {
    Rectangle(GeoRectangle),
    Circle(GeoCircle),
    Line(GeoLine),
    PolyLine(GeoPolyLine),
    Union(Box<GeoArea>, Box<GeoArea>),
}

impl GeoArea {
    /// Union of `self` and `other` as a new composite area.
    pub fn add(self, other: GeoArea) -> GeoArea {
        GeoArea::Union(Box::new(self), Box::new(other))
    }

    /// Folds a collection of areas into a single composite via repeated binary
    /// union. Fails on an empty collection.
    pub fn from_areas(areas: impl IntoIterator<Item = GeoArea>) -> Result<GeoArea> {
        let mut areas = areas.into_iter();
        let Some(first) = areas.next() else {
            bail!("cannot combine an empty collection of areas");
        };

        let mut n_combined = 1usize;
        let combined = areas.fold(first, |acc, area| {
            n_combined += 1;
            acc.add(area)
        });
        debug!("combined {n_combined} areas into one composite");
        Ok(combined)
    }

    pub fn is_compound(&self) -> bool {
        matches!(self, GeoArea::Union(_, _))
    }

    fn pixelate_into(&self, out: &mut Vec<GeoRectangle>) {
        match self {
            GeoArea::Rectangle(r) => out.extend(r.pixelate()),
            GeoArea::Circle(c) => out.extend(c.pixelate()),
            GeoArea::Line(l) => out.extend(l.pixelate()),
            GeoArea::PolyLine(p) => out.extend(p.pixelate()),
            GeoArea::Union(a, b) => {
                a.pixelate_into(out);
                b.pixelate_into(out);
            }
        }
    }
}

impl Contains<GeoPoint> for GeoArea {
    fn contains(&self, point: &GeoPoint) -> bool {
        self.bounding_box().contains(point)
    }
}

impl Contains<GeoArea> for GeoArea {
    fn contains(&self, other: &GeoArea) -> bool {
        self.bounding_box().contains(&other.bounding_box())
    }
}

impl Overlaps<GeoArea> for GeoArea {
    fn overlaps(&self, other: &GeoArea) -> bool {
        self.bounding_box().overlaps(&other.bounding_box())
    }
}

impl Translate for GeoArea {
    fn translate(&self, vector: &GeoVector) -> Self {
        match self {
            GeoArea::Rectangle(r) => GeoArea::Rectangle(r.translate(vector)),
            GeoArea::Circle(c) => GeoArea::Circle(c.translate(vector)),
            GeoArea::Line(l) => GeoArea::Line(l.translate(vector)),
            GeoArea::PolyLine(p) => GeoArea::PolyLine(p.translate(vector)),
            GeoArea::Union(a, b) => a.translate(vector).add(b.translate(vector)),
        }
    }
}

impl GeoShape for GeoArea {
    fn center(&self) -> GeoPoint {
        match self {
            GeoArea::Rectangle(r) => r.center(),
            GeoArea::Circle(c) => c.center(),
            GeoArea::Line(l) => l.center(),
            GeoArea::PolyLine(p) => p.center(),
            GeoArea::Union(_, _) => self.bounding_box().center(),
        }
    }

    fn bounding_box(&self) -> GeoRectangle {
        match self {
            GeoArea::Rectangle(r) => r.bounding_box(),
            GeoArea::Circle(c) => c.bounding_box(),
            GeoArea::Line(l) => l.bounding_box(),
            GeoArea::PolyLine(p) => p.bounding_box(),
            GeoArea::Union(a, b) => {
                GeoRectangle::bounding_rect(&a.bounding_box(), &b.bounding_box())
            }
        }
    }

    /// Flattens the composite tree into covering rectangles: each leaf
    /// contributes its own decomposition, union nodes concatenate both sides.
    /// No merging of overlapping or adjacent rectangles is attempted.
    fn pixelate(&self) -> Vec<GeoRectangle> {
        let mut rects = Vec::new();
        self.pixelate_into(&mut rects);
        debug!("pixelated area into {} rectangle(s)", rects.len());
        rects
    }
}

impl From<GeoRectangle> for GeoArea {
    fn from(r: GeoRectangle) -> Self {
        GeoArea::Rectangle(r)
    }
}

impl From<GeoCircle> for GeoArea {
    fn from(c: GeoCircle) -> Self {
        GeoArea::Circle(c)
    }
}

impl From<GeoLine> for GeoArea {
    fn from(l: GeoLine) -> Self {
        GeoArea::Line(l)
    }
}

impl From<GeoPolyLine> for GeoArea {
    fn from(p: GeoPolyLine) -> Self {
        GeoArea::PolyLine(p)
    }
}
