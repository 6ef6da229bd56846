use approx::assert_relative_eq;
use barchart_rs::core::simple_bar_rect;

#[test]
fn positive_bar_spans_zero_to_y() {
    let rect = simple_bar_rect(4.0, 30.0, 0.25, 1.0, false);

    assert_relative_eq!(rect.left, 3.75);
    assert_relative_eq!(rect.right, 4.25);
    assert_relative_eq!(rect.top, 30.0);
    assert_relative_eq!(rect.bottom, 0.0);
}

#[test]
fn negative_bar_spans_y_to_zero() {
    let rect = simple_bar_rect(4.0, -12.0, 0.25, 1.0, false);

    assert_relative_eq!(rect.top, 0.0);
    assert_relative_eq!(rect.bottom, -12.0);
}

#[test]
fn zero_height_bar_pins_both_bounds_to_baseline() {
    let rect = simple_bar_rect(1.0, 0.0, 0.5, 0.3, false);

    assert_relative_eq!(rect.top, 0.0);
    assert_relative_eq!(rect.bottom, 0.0);
}

#[test]
fn inverted_axis_swaps_bound_roles() {
    let regular = simple_bar_rect(2.0, 8.0, 0.5, 1.0, false);
    let inverted = simple_bar_rect(2.0, 8.0, 0.5, 1.0, true);

    assert_relative_eq!(regular.top, 8.0);
    assert_relative_eq!(regular.bottom, 0.0);
    assert_relative_eq!(inverted.top, 0.0);
    assert_relative_eq!(inverted.bottom, 8.0);
}

#[test]
fn phase_scales_value_bound_and_pins_baseline() {
    let rect = simple_bar_rect(2.0, 10.0, 0.5, 0.4, false);

    assert_relative_eq!(rect.top, 4.0);
    assert_relative_eq!(rect.bottom, 0.0);

    let negative = simple_bar_rect(2.0, -10.0, 0.5, 0.4, false);
    assert_relative_eq!(negative.top, 0.0);
    assert_relative_eq!(negative.bottom, -4.0);
}

#[test]
fn inverted_bars_also_grow_from_the_baseline() {
    // Inverted positive: value bound is `bottom`.
    let positive = simple_bar_rect(2.0, 10.0, 0.5, 0.4, true);
    assert_relative_eq!(positive.top, 0.0);
    assert_relative_eq!(positive.bottom, 4.0);

    // Inverted negative: value bound is `top`.
    let negative = simple_bar_rect(2.0, -10.0, 0.5, 0.4, true);
    assert_relative_eq!(negative.top, -4.0);
    assert_relative_eq!(negative.bottom, 0.0);
}

#[test]
fn phase_growth_is_monotonic_from_baseline() {
    let mut previous_height = 0.0;
    for step in 0..=10 {
        let phase_y = f64::from(step) / 10.0;
        let rect = simple_bar_rect(0.0, 25.0, 0.5, phase_y, false);
        let height = rect.top - rect.bottom;

        assert!(height >= previous_height);
        assert_relative_eq!(rect.bottom, 0.0);
        previous_height = height;
    }
    assert_relative_eq!(previous_height, 25.0);
}

#[test]
fn geometry_is_idempotent() {
    let first = simple_bar_rect(7.0, -3.5, 0.4, 0.77, true);
    let second = simple_bar_rect(7.0, -3.5, 0.4, 0.77, true);

    assert_eq!(first, second);
}
