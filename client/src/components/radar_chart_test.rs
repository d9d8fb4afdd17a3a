use super::*;

fn close(a: (f64, f64), b: (f64, f64)) -> bool {
    (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
}

#[test]
fn first_axis_points_straight_up() {
    assert!(close(radar_point(0, 4, 10.0, 100.0, 50.0), (100.0, 50.0)));
}

#[test]
fn axes_run_clockwise() {
    let pts = radar_points(&[10.0, 10.0, 10.0, 10.0], 100.0, 50.0);
    assert!(close(pts[1], (150.0, 100.0)));
    assert!(close(pts[2], (100.0, 150.0)));
    assert!(close(pts[3], (50.0, 100.0)));
}

#[test]
fn values_are_clamped_to_scale() {
    assert!(close(radar_point(0, 4, 25.0, 0.0, 10.0), (0.0, -10.0)));
    assert!(close(radar_point(1, 4, -3.0, 0.0, 10.0), (0.0, 0.0)));
    assert!(close(radar_point(0, 4, 5.0, 0.0, 10.0), (0.0, -5.0)));
}

#[test]
fn points_attr_formats_one_decimal() {
    assert_eq!(points_attr(&[(1.0, 2.26), (3.333, 4.0)]), "1.0,2.3 3.3,4.0");
}
