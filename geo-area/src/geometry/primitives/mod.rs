mod circle;
mod line;
mod point;
mod polyline;
mod rect;
mod vector;

#[doc(inline)]
pub use circle::GeoCircle;
#[doc(inline)]
pub use line::GeoLine;
#[doc(inline)]
pub use point::GeoPoint;
#[doc(inline)]
pub use polyline::GeoPolyLine;
#[doc(inline)]
pub use rect::GeoRectangle;
#[doc(inline)]
pub use vector::GeoVector;
