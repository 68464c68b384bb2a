use anyhow::{Context, Result};

use crate::geometry::GeoArea;
use crate::geometry::primitives::{GeoCircle, GeoLine, GeoPoint, GeoPolyLine, GeoRectangle};
use crate::io::ext_repr::{
    ExtGeoArea, ExtGeoCircle, ExtGeoLine, ExtGeoPoint, ExtGeoPolyLine, ExtGeoRectangle,
};

/// Converts external representations into internal geometry, validating all
/// invariants (latitude range, longitude wrap, non-negative radius, minimum
/// point counts) on the way in.
pub fn import_point(ext: &ExtGeoPoint) -> Result<GeoPoint> {
    match ext.elevation_meters {
        Some(elevation) => GeoPoint::try_with_elevation(ext.lat, ext.lon, elevation),
        None => GeoPoint::try_new(ext.lat, ext.lon),
    }
}

pub fn import_rect(ext: &ExtGeoRectangle) -> Result<GeoRectangle> {
    GeoRectangle::try_new(
        import_point(&ext.south_west).context("invalid south-west corner")?,
        import_point(&ext.north_east).context("invalid north-east corner")?,
    )
}

pub fn import_circle(ext: &ExtGeoCircle) -> Result<GeoCircle> {
    GeoCircle::try_new(
        import_point(&ext.center).context("invalid circle center")?,
        ext.radius_meters,
    )
}

pub fn import_line(ext: &ExtGeoLine) -> Result<GeoLine> {
    Ok(GeoLine::new(
        import_point(&ext.south_west).context("invalid line start")?,
        import_point(&ext.north_east).context("invalid line end")?,
    ))
}

pub fn import_polyline(ext: &ExtGeoPolyLine) -> Result<GeoPolyLine> {
    let points = ext
        .points
        .iter()
        .map(import_point)
        .collect::<Result<Vec<_>>>()
        .context("invalid polyline point")?;
    GeoPolyLine::try_new(points)
}

pub fn import_area(ext: &ExtGeoArea) -> Result<GeoArea> {
    Ok(match ext {
        ExtGeoArea::Rectangle(r) => import_rect(r)?.into(),
        ExtGeoArea::Circle(c) => import_circle(c)?.into(),
        ExtGeoArea::Line(l) => import_line(l)?.into(),
        ExtGeoArea::PolyLine(p) => import_polyline(p)?.into(),
        ExtGeoArea::Union(a, b) => import_area(a)?.add(import_area(b)?),
    })
}
