use anyhow::{Result, ensure};

/// Displacement in degrees: northing (towards the north pole) and easting
/// (towards the east). A displacement is not tied to any origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoVector {
    northing: f64,
    easting: f64,
}

impl GeoVector {
    /// Fallible constructor for external input.
    pub fn try_new(northing: f64, easting: f64) -> Result<Self> {
        ensure!(
            northing.is_finite() && easting.is_finite(),
            "displacement must be finite: northing {northing}, easting {easting}"
        );
        Ok(GeoVector { northing, easting })
    }

    /// Internal unvalidated constructor. Non-finite components are legal here
    /// and propagate through the numeric edge cases (conversions at the poles).
    pub(crate) fn new(northing: f64, easting: f64) -> Self {
        GeoVector { northing, easting }
    }

    pub fn northing(&self) -> f64 {
        self.northing
    }

    pub fn easting(&self) -> f64 {
        self.easting
    }

    /// The opposite displacement.
    pub fn negate(&self) -> Self {
        GeoVector {
            northing: -self.northing,
            easting: -self.easting,
        }
    }
}
