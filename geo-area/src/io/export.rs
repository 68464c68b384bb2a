use crate::geometry::GeoArea;
use crate::geometry::geo_traits::GeoShape;
use crate::geometry::primitives::{GeoCircle, GeoLine, GeoPoint, GeoPolyLine, GeoRectangle};
use crate::io::ext_repr::{
    ExtGeoArea, ExtGeoCircle, ExtGeoLine, ExtGeoPoint, ExtGeoPolyLine, ExtGeoRectangle,
};

/// Converts internal geometry into its external representation. Infallible:
/// internal values always satisfy the wire contract.
pub fn export_point(point: &GeoPoint) -> ExtGeoPoint {
    ExtGeoPoint {
        lat: point.lat(),
        lon: point.lon(),
        elevation_meters: point.elevation_meters(),
    }
}

pub fn export_rect(rect: &GeoRectangle) -> ExtGeoRectangle {
    ExtGeoRectangle {
        south_west: export_point(&rect.south_west()),
        north_east: export_point(&rect.north_east()),
    }
}

pub fn export_circle(circle: &GeoCircle) -> ExtGeoCircle {
    ExtGeoCircle {
        center: export_point(&circle.center()),
        radius_meters: circle.radius_meters(),
    }
}

pub fn export_line(line: &GeoLine) -> ExtGeoLine {
    ExtGeoLine {
        south_west: export_point(&line.south_west()),
        north_east: export_point(&line.north_east()),
    }
}

pub fn export_polyline(polyline: &GeoPolyLine) -> ExtGeoPolyLine {
    ExtGeoPolyLine {
        points: polyline.points().iter().map(export_point).collect(),
    }
}

pub fn export_area(area: &GeoArea) -> ExtGeoArea {
    match area {
        GeoArea::Rectangle(r) => ExtGeoArea::Rectangle(export_rect(r)),
        GeoArea::Circle(c) => ExtGeoArea::Circle(export_circle(c)),
        GeoArea::Line(l) => ExtGeoArea::Line(export_line(l)),
        GeoArea::PolyLine(p) => ExtGeoArea::PolyLine(export_polyline(p)),
        GeoArea::Union(a, b) => {
            ExtGeoArea::Union(Box::new(export_area(a)), Box::new(export_area(b)))
        }
    }
}
