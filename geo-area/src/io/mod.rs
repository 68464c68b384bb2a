//! Wire contract of the geometry types.
//!
//! The external representations mirror the internal fields exactly
//! (camelCase on the wire): `{"lat":1.0,"lon":2.0}` for a point without
//! elevation, `{"lat":1.0,"lon":2.0,"elevationMeters":3.0}` with one,
//! `{"southWest":{..},"northEast":{..}}` for a rectangle, and so on.
//! `elevationMeters` is omitted entirely when absent, never `null` or NaN.

/// External (serde) representations of the geometry types
pub mod ext_repr;

mod export;
mod import;

pub use export::{
    export_area, export_circle, export_line, export_point, export_polyline, export_rect,
};
pub use import::{
    import_area, import_circle, import_line, import_point, import_polyline, import_rect,
};
