/// Conversions between meters and degrees of latitude/longitude
pub mod conversions;

/// Set of traits representing various geometric properties & operations
pub mod geo_traits;

/// Set of geometric primitives - atomic building blocks for the geometry module
pub mod primitives;

mod area;

#[doc(inline)]
pub use area::GeoArea;
