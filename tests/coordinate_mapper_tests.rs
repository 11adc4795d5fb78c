use approx::assert_abs_diff_eq;
use radar_chart_rs::ChartError;
use radar_chart_rs::core::{PolarLayout, Point, axis_angle, radar_point};
use std::f64::consts::{FRAC_PI_2, PI, TAU};

#[test]
fn first_axis_points_straight_up_with_default_offset() {
    let center = Point::new(100.0, 100.0);
    let point = radar_point(0, 6, 100.0, 255.0, 70.0, center, -FRAC_PI_2).expect("point");

    assert_abs_diff_eq!(point.x, 100.0, epsilon = 1e-9);
    assert_abs_diff_eq!(point.y, 100.0 - 70.0 * 100.0 / 255.0, epsilon = 1e-9);
}

#[test]
fn angles_increase_clockwise_in_surface_space() {
    let center = Point::new(0.0, 0.0);
    // Axis 1 of 4 sits at 0 rad: straight right.
    let right = radar_point(1, 4, 10.0, 10.0, 50.0, center, -FRAC_PI_2).expect("point");
    assert_abs_diff_eq!(right.x, 50.0, epsilon = 1e-9);
    assert_abs_diff_eq!(right.y, 0.0, epsilon = 1e-9);

    // Axis 2 of 4 points down (larger y).
    let down = radar_point(2, 4, 10.0, 10.0, 50.0, center, -FRAC_PI_2).expect("point");
    assert_abs_diff_eq!(down.x, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(down.y, 50.0, epsilon = 1e-9);
}

#[test]
fn values_above_max_clamp_to_outer_ring() {
    let center = Point::new(100.0, 100.0);
    let point = radar_point(0, 6, 300.0, 255.0, 70.0, center, -FRAC_PI_2).expect("point");

    assert_abs_diff_eq!(point.distance_to(center), 70.0, epsilon = 1e-9);
    assert_abs_diff_eq!(point.y, 30.0, epsilon = 1e-9);
}

#[test]
fn fewer_than_three_axes_is_rejected() {
    let center = Point::new(0.0, 0.0);
    for total in [0, 1, 2] {
        let err = radar_point(0, total, 1.0, 1.0, 10.0, center, -FRAC_PI_2)
            .expect_err("degenerate radar");
        assert_eq!(err, ChartError::InvalidAxisCount { count: total });
        assert!(axis_angle(0, total, 0.0).is_err());
    }
}

#[test]
fn non_positive_max_is_rejected() {
    let center = Point::new(0.0, 0.0);
    for max in [0.0, -1.0, f64::NAN] {
        let err = radar_point(0, 6, 1.0, max, 10.0, center, -FRAC_PI_2).expect_err("bad max");
        assert!(matches!(err, ChartError::InvalidMax { .. }), "max={max}");
    }
}

#[test]
fn non_finite_values_are_rejected() {
    let center = Point::new(0.0, 0.0);
    for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = radar_point(0, 6, value, 255.0, 10.0, center, -FRAC_PI_2)
            .expect_err("non-finite value");
        assert!(matches!(err, ChartError::NonFiniteValue { .. }));
    }
}

#[test]
fn non_finite_value_error_names_the_axis_index() {
    let err = radar_point(4, 6, f64::NAN, 255.0, 10.0, Point::new(0.0, 0.0), -FRAC_PI_2)
        .expect_err("nan value");
    assert!(matches!(err, ChartError::NonFiniteValue { axis: 4, .. }));
}

#[test]
fn layout_angle_matches_free_function() {
    let layout = PolarLayout::new(6, 70.0, Point::new(0.0, 0.0), -FRAC_PI_2).expect("layout");
    assert_abs_diff_eq!(layout.angle_step(), TAU / 6.0, epsilon = 1e-12);
    for index in 0..6 {
        let expected = axis_angle(index, 6, -FRAC_PI_2).expect("angle");
        assert_eq!(layout.angle(index), expected);
    }
    assert_abs_diff_eq!(layout.angle(3), PI - FRAC_PI_2, epsilon = 1e-12);
}

#[test]
fn layout_rejects_non_positive_radius() {
    let err = PolarLayout::new(6, 0.0, Point::new(0.0, 0.0), 0.0).expect_err("radius");
    assert!(matches!(err, ChartError::InvalidConfig(_)));
}
