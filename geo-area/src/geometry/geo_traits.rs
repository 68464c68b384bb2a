use crate::geometry::primitives::{GeoPoint, GeoRectangle, GeoVector};

/// Trait for areas that can determine whether they fully contain `T`.
///
/// For everything but rectangle/point combinations the answer is a
/// bounding-box approximation: conservative and over-inclusive, never
/// under-inclusive.
pub trait Contains<T> {
    fn contains(&self, other: &T) -> bool;
}

/// Trait for areas that can determine whether they overlap with `T`.
///
/// Same caveat as [`Contains`]: non-rectangular shapes answer through their
/// bounding boxes.
pub trait Overlaps<T> {
    fn overlaps(&self, other: &T) -> bool;
}

/// Trait for types that can be displaced by a [`GeoVector`].
///
/// Returns a new value; the operand is never mutated. Latitudes clamp to
/// `[-90, 90]`, longitudes re-normalize into `(-180, 180]`.
pub trait Translate: Sized {
    fn translate(&self, vector: &GeoVector) -> Self;
}

/// Trait for shapes that can be re-centered on a new origin.
///
/// Blanket-implemented for everything that has a center and can translate.
pub trait MoveTo: Sized {
    fn move_to(&self, origin: &GeoPoint) -> Self;
}

impl<T> MoveTo for T
where
    T: GeoShape + Translate,
{
    fn move_to(&self, origin: &GeoPoint) -> Self {
        self.translate(&self.center().vector_to(origin))
    }
}

/// Trait for shared properties of all geodetic shapes.
pub trait GeoShape {
    /// Geographic center of the shape
    fn center(&self) -> GeoPoint;

    /// Smallest axis-aligned rectangle enclosing the shape
    fn bounding_box(&self) -> GeoRectangle;

    /// Decomposes the shape into a set of axis-aligned rectangles covering it.
    /// Rectangles may overlap each other; the collection is meant for coverage,
    /// not exact tiling.
    fn pixelate(&self) -> Vec<GeoRectangle>;
}
