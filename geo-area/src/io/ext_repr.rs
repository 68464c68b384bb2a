use serde::{Deserialize, Serialize};

/// External representation of a [`GeoPoint`](crate::geometry::primitives::GeoPoint).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtGeoPoint {
    /// Latitude in degrees, `[-90, 90]`
    pub lat: f64,
    /// Longitude in degrees, any finite value (wrapped on import)
    pub lon: f64,
    /// Elevation in meters. Omitted when absent.
    #[serde(
        rename = "elevationMeters",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub elevation_meters: Option<f64>,
}

/// External representation of a [`GeoRectangle`](crate::geometry::primitives::GeoRectangle).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExtGeoRectangle {
    pub south_west: ExtGeoPoint,
    pub north_east: ExtGeoPoint,
}

/// External representation of a [`GeoCircle`](crate::geometry::primitives::GeoCircle).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExtGeoCircle {
    pub center: ExtGeoPoint,
    pub radius_meters: f64,
}

/// External representation of a [`GeoLine`](crate::geometry::primitives::GeoLine).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExtGeoLine {
    pub south_west: ExtGeoPoint,
    pub north_east: ExtGeoPoint,
}

/// External representation of a [`GeoPolyLine`](crate::geometry::primitives::GeoPolyLine).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtGeoPolyLine {
    pub points: Vec<ExtGeoPoint>,
}

/// External representation of a [`GeoArea`](crate::geometry::GeoArea) tree.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", content = "data")]
#[serde(rename_all = "snake_case")]
pub enum ExtGeoArea {
    Rectangle(ExtGeoRectangle),
    Circle(ExtGeoCircle),
    Line(ExtGeoLine),
    PolyLine(ExtGeoPolyLine),
    /// Union of two sub-areas
    Union(Box<ExtGeoArea>, Box<ExtGeoArea>),
}
