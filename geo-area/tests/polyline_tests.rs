use float_cmp::approx_eq;
use geo_area::geometry::geo_traits::GeoShape;
use geo_area::geometry::primitives::{GeoPoint, GeoPolyLine};
use test_case::test_case;

fn point(lat: f64, lon: f64) -> GeoPoint {
    GeoPoint::try_new(lat, lon).unwrap()
}

fn elevated(lat: f64, lon: f64, elevation: f64) -> GeoPoint {
    GeoPoint::try_with_elevation(lat, lon, elevation).unwrap()
}

#[test_case(vec![]; "empty")]
#[test_case(vec![point(0.0, 0.0)]; "single point")]
fn too_few_points_are_rejected(points: Vec<GeoPoint>) {
    assert!(GeoPolyLine::try_new(points).is_err());
}

#[test]
fn segments_and_length() {
    let polyline =
        GeoPolyLine::try_new(vec![point(0.0, 0.0), point(0.0, 1.0), point(1.0, 1.0)]).unwrap();

    assert_eq!(polyline.as_lines().count(), 2);

    let expected: f64 = polyline.as_lines().map(|l| l.length_meters()).sum();
    assert_eq!(polyline.length_meters(), expected);
    assert!(polyline.length_meters() > 0.0);
}

#[test]
fn offset_zero_returns_the_start_exactly() {
    let polyline = GeoPolyLine::try_new(vec![point(0.0, 0.0), point(0.0, 1.0)]).unwrap();

    let start = polyline.point_at_offset(0.0);
    assert_eq!(start.lat(), 0.0);
    assert_eq!(start.lon(), 0.0);
}

#[test]
fn offset_total_length_returns_the_end() {
    let polyline = GeoPolyLine::try_new(vec![point(0.0, 0.0), point(0.0, 1.0)]).unwrap();

    let end = polyline.point_at_offset(polyline.length_meters());
    assert!(approx_eq!(f64, end.lat(), 0.0, epsilon = 1e-4));
    assert!(approx_eq!(f64, end.lon(), 1.0, epsilon = 1e-4));
}

#[test]
fn offset_halfway_interpolates() {
    let polyline = GeoPolyLine::try_new(vec![point(0.0, 0.0), point(0.0, 1.0)]).unwrap();

    let halfway = polyline.point_at_offset(polyline.length_meters() / 2.0);
    assert!(approx_eq!(f64, halfway.lon(), 0.5, epsilon = 1e-9));
}

#[test]
fn negative_offset_extrapolates_backwards() {
    let polyline = GeoPolyLine::try_new(vec![point(0.0, 0.0), point(0.0, 1.0)]).unwrap();
    let one_degree = polyline.length_meters();

    let before = polyline.point_at_offset(-one_degree / 2.0);
    assert!(approx_eq!(f64, before.lon(), -0.5, epsilon = 1e-9));
    assert!(approx_eq!(f64, before.lat(), 0.0, epsilon = 1e-9));
}

#[test]
fn offset_beyond_the_end_extrapolates_forwards() {
    let polyline = GeoPolyLine::try_new(vec![point(0.0, 0.0), point(0.0, 1.0)]).unwrap();
    let one_degree = polyline.length_meters();

    let beyond = polyline.point_at_offset(one_degree * 1.5);
    assert!(approx_eq!(f64, beyond.lon(), 1.5, epsilon = 1e-9));
}

#[test]
fn offset_lands_in_the_correct_segment() {
    let polyline =
        GeoPolyLine::try_new(vec![point(0.0, 0.0), point(0.0, 1.0), point(0.0, 3.0)]).unwrap();
    let first_segment = GeoPolyLine::try_new(vec![point(0.0, 0.0), point(0.0, 1.0)])
        .unwrap()
        .length_meters();

    // half a degree into the second segment
    let p = polyline.point_at_offset(first_segment * 1.5);
    assert!(approx_eq!(f64, p.lon(), 1.5, epsilon = 1e-9));
}

#[test]
fn interpolation_crosses_the_antimeridian() {
    let polyline = GeoPolyLine::try_new(vec![point(0.0, 179.0), point(0.0, -179.0)]).unwrap();

    let halfway = polyline.point_at_offset(polyline.length_meters() / 2.0);
    assert!(approx_eq!(f64, halfway.lon(), 180.0, epsilon = 1e-9));
}

#[test]
fn elevation_interpolates_between_defined_endpoints() {
    let polyline =
        GeoPolyLine::try_new(vec![elevated(0.0, 0.0, 0.0), elevated(0.0, 1.0, 1000.0)]).unwrap();

    let halfway = polyline.point_at_offset(polyline.length_meters() / 2.0);
    assert!(approx_eq!(
        f64,
        halfway.elevation_meters().unwrap(),
        500.0,
        epsilon = 1e-6
    ));
}

#[test]
fn elevation_is_carried_forward_past_undefined_points() {
    let polyline = GeoPolyLine::try_new(vec![
        elevated(0.0, 0.0, 100.0),
        point(0.0, 1.0),
        elevated(0.0, 2.0, 300.0),
    ])
    .unwrap();
    let segment = polyline.length_meters() / 2.0;

    // anywhere short of the last point the carried elevation holds at 100
    assert_eq!(
        polyline.point_at_offset(segment * 0.5).elevation_meters(),
        Some(100.0)
    );
    assert_eq!(
        polyline.point_at_offset(segment * 1.5).elevation_meters(),
        Some(100.0)
    );
    // the end point reports its own elevation
    assert_eq!(
        polyline
            .point_at_offset(polyline.length_meters())
            .elevation_meters(),
        Some(300.0)
    );
}

#[test]
fn leading_elevation_gap_is_filled_backwards() {
    let polyline =
        GeoPolyLine::try_new(vec![point(0.0, 0.0), elevated(0.0, 1.0, 200.0)]).unwrap();

    assert_eq!(polyline.point_at_offset(0.0).elevation_meters(), Some(200.0));
}

#[test]
fn no_elevation_anywhere_stays_absent() {
    let polyline = GeoPolyLine::try_new(vec![point(0.0, 0.0), point(0.0, 1.0)]).unwrap();
    assert_eq!(
        polyline
            .point_at_offset(polyline.length_meters() / 2.0)
            .elevation_meters(),
        None
    );
}

#[test]
fn bounding_box_covers_all_points() {
    use geo_area::geometry::geo_traits::Contains;

    let points = vec![point(0.0, 0.0), point(5.0, 2.0), point(-3.0, 7.0)];
    let polyline = GeoPolyLine::try_new(points.clone()).unwrap();

    let bbox = polyline.bounding_box();
    for p in &points {
        assert!(bbox.contains(p), "bounding box misses {p:?}");
    }
}

#[test]
fn pixelate_yields_one_rectangle_per_segment() {
    let polyline =
        GeoPolyLine::try_new(vec![point(0.0, 0.0), point(1.0, 1.0), point(2.0, 0.0)]).unwrap();
    assert_eq!(polyline.pixelate().len(), 2);
}
