use float_cmp::approx_eq;
use geo_area::geometry::conversions::METERS_PER_DEGREE_LAT;
use geo_area::geometry::geo_traits::GeoShape;
use geo_area::geometry::primitives::{GeoLine, GeoPoint};
use test_case::test_case;

fn line(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> GeoLine {
    GeoLine::new(
        GeoPoint::try_new(lat1, lon1).unwrap(),
        GeoPoint::try_new(lat2, lon2).unwrap(),
    )
}

#[test]
fn north_south_line_spans_one_degree_of_latitude() {
    let l = line(-0.5, 10.0, 0.5, 10.0);
    assert!(approx_eq!(
        f64,
        l.length_meters(),
        METERS_PER_DEGREE_LAT,
        ulps = 4
    ));
}

#[test_case(10.0, 20.0, 10.0; "plain east")]
#[test_case(179.0, -179.0, 2.0; "short hop across the seam")]
#[test_case(-179.0, 179.0, 358.0; "long way around")]
#[test_case(10.0, 10.0, 0.0; "no east component")]
fn easting_is_resolved_eastward(lon1: f64, lon2: f64, expected: f64) {
    let l = line(0.0, lon1, 0.0, lon2);
    assert!(approx_eq!(f64, l.easting_degrees(), expected, epsilon = 1e-12));
}

#[test]
fn wrapped_on_long_side() {
    assert!(!line(0.0, 179.0, 0.0, -179.0).is_wrapped_on_long_side());
    assert!(line(0.0, -179.0, 0.0, 179.0).is_wrapped_on_long_side());
}

#[test]
fn center_across_the_antimeridian_is_on_the_arc() {
    // naive averaging of 179 and -179 would give 0; the arc midpoint is 180
    let l = line(0.0, 179.0, 0.0, -179.0);
    let center = l.center();
    assert_eq!(center.lat(), 0.0);
    assert_eq!(center.lon(), 180.0);
}

#[test]
fn center_of_a_plain_line() {
    let l = line(10.0, 20.0, 20.0, 30.0);
    let center = l.center();
    assert!(approx_eq!(f64, center.lat(), 15.0, epsilon = 1e-12));
    assert!(approx_eq!(f64, center.lon(), 25.0, epsilon = 1e-12));
}

#[test]
fn northing_is_signed() {
    assert_eq!(line(10.0, 0.0, 20.0, 0.0).northing_degrees(), 10.0);
    assert_eq!(line(20.0, 0.0, 10.0, 0.0).northing_degrees(), -10.0);
}

#[test]
fn bounding_box_inherits_the_eastward_span() {
    let l = line(5.0, 179.0, -5.0, -179.0);
    let bbox = l.bounding_box();

    assert_eq!(bbox.south_west().lat(), -5.0);
    assert_eq!(bbox.north_east().lat(), 5.0);
    assert!(bbox.is_wrapped());
    assert!(approx_eq!(f64, bbox.width_degrees(), 2.0, epsilon = 1e-12));
}

#[test]
fn pixelate_is_the_bounding_box() {
    let l = line(0.0, 0.0, 1.0, 1.0);
    assert_eq!(l.pixelate(), vec![l.bounding_box()]);
}
