//! Geodetic area algebra: immutable latitude/longitude primitives, a composite
//! region algebra, and pixelation of arbitrary areas into axis-aligned rectangles.
//!
//! All types are immutable value objects. Operations never mutate their operands;
//! they return new values. Trees of composed areas can therefore be shared and
//! queried concurrently without synchronization.

/// Geometric primitives, capability traits and the composite area algebra
pub mod geometry;

/// Importing external (JSON) representations into and exporting geometry out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;
