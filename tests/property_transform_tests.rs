use barchart_rs::core::{BarEntry, ContentBounds, DataPoint, Transform, ZoomState};
use proptest::prelude::*;

proptest! {
    #[test]
    fn pixel_round_trip_recovers_the_data_point(
        x_start in -1_000.0f64..1_000.0,
        x_span in 0.1f64..2_000.0,
        y_start in -1_000.0f64..1_000.0,
        y_span in 0.1f64..2_000.0,
        scale in 0.1f64..10.0,
        trans in -500.0f64..500.0,
        x_factor in 0.0f64..1.0,
        y_factor in 0.0f64..1.0,
        inverted in any::<bool>()
    ) {
        let bounds = ContentBounds::new(0.0, 0.0, 1_200.0, 800.0).expect("bounds");
        let transform = Transform::new(
            (x_start, x_start + x_span),
            (y_start, y_start + y_span),
            bounds,
        )
        .expect("transform")
        .with_zoom(ZoomState::new(scale, scale, trans, -trans).expect("zoom"))
        .with_inverted(inverted);

        let point = DataPoint::new(x_start + x_factor * x_span, y_start + y_factor * y_span);
        let round_tripped = transform.pixel_to_value(transform.value_to_pixel(point));

        let x_tolerance = 1e-9 * x_span.max(point.x.abs()).max(1.0);
        let y_tolerance = 1e-9 * y_span.max(point.y.abs()).max(1.0);
        prop_assert!((round_tripped.x - point.x).abs() <= x_tolerance);
        prop_assert!((round_tripped.y - point.y).abs() <= y_tolerance);
    }

    #[test]
    fn grouped_layout_is_the_inverse_of_de_spacing(
        category in 0usize..50,
        data_set_count in 2usize..6,
        slot in 0usize..6,
        group_space in 0.0f64..0.9
    ) {
        let slot = slot % data_set_count;
        let bounds = ContentBounds::new(0.0, 0.0, 1_200.0, 800.0).expect("bounds");
        let cycle = data_set_count as f64 + group_space;
        let domain_end = 51.0 * cycle;
        let transform =
            Transform::new((0.0, domain_end), (0.0, 100.0), bounds).expect("transform");

        let entry = BarEntry::new(category as f64, 10.0).expect("entry");
        let pixel =
            transform.bar_entry_position(&entry, slot, 1.0, data_set_count, group_space);
        let positional = transform
            .pixel_to_value(pixel)
            .x;

        // De-spacing formula used by the horizontal highlighter.
        let steps = (positional / cycle).floor();
        let de_spaced = positional - group_space * steps;
        let derived = (de_spaced.floor() as i64).rem_euclid(data_set_count as i64) as usize;

        prop_assert_eq!(steps as usize, category);
        prop_assert_eq!(derived, slot);
    }
}
