use approx::assert_relative_eq;
use barchart_rs::BarChartConfig;
use barchart_rs::core::{
    AxisTransforms, BarData, BarDataSet, BarEntry, ContentBounds, Phase, Transform,
};
use barchart_rs::render::{
    VALUE_OFFSET_PX, build_bar_frame, label_offsets, passes_check, project_value_labels,
};

fn full_bounds() -> ContentBounds {
    ContentBounds::new(0.0, 0.0, 1000.0, 500.0).expect("bounds")
}

fn transforms(y_domain: (f64, f64)) -> AxisTransforms {
    let transform = Transform::new((0.0, 10.0), y_domain, full_bounds()).expect("transform");
    AxisTransforms::shared(transform)
}

#[test]
fn offsets_place_labels_outside_the_bar() {
    let (pos, neg) = label_offsets(12.0, true, false);
    assert_relative_eq!(pos, -(12.0 + VALUE_OFFSET_PX));
    assert_relative_eq!(neg, VALUE_OFFSET_PX);

    let (pos, neg) = label_offsets(12.0, false, false);
    assert_relative_eq!(pos, VALUE_OFFSET_PX);
    assert_relative_eq!(neg, -(12.0 + VALUE_OFFSET_PX));
}

#[test]
fn inversion_negates_offsets_and_shifts_by_text_height() {
    let (pos, neg) = label_offsets(12.0, true, true);
    assert_relative_eq!(pos, 12.0 + VALUE_OFFSET_PX - 12.0);
    assert_relative_eq!(neg, -VALUE_OFFSET_PX - 12.0);
}

#[test]
fn anti_clutter_guard_scales_with_zoom() {
    let entries: Vec<BarEntry> = (0..50)
        .map(|i| BarEntry::new(f64::from(i), 1.0).expect("entry"))
        .collect();
    let set = BarDataSet::new("dense", entries).expect("dataset");
    let data = BarData::new(vec![set], 0.5, 0.0).expect("bar data");

    assert!(passes_check(&data, 100, 1.0));
    assert!(!passes_check(&data, 50, 1.0));
    // Zooming in raises the budget.
    assert!(passes_check(&data, 50, 1.5));
}

#[test]
fn failing_guard_suppresses_all_labels_in_the_frame() {
    let entries: Vec<BarEntry> = (0..10)
        .map(|i| BarEntry::new(f64::from(i), 10.0).expect("entry"))
        .collect();
    let set = BarDataSet::new("dense", entries).expect("dataset");
    let data = BarData::new(vec![set], 0.5, 0.0).expect("bar data");
    let config = BarChartConfig::default().with_max_visible_value_count(5);

    let frame = build_bar_frame(
        &data,
        &transforms((0.0, 100.0)),
        full_bounds(),
        Phase::FULL,
        &config,
        &[],
    )
    .expect("frame");

    assert!(!frame.bar_rects.is_empty());
    assert!(frame.value_labels.is_empty());
}

#[test]
fn simple_bar_label_sits_above_a_positive_bar() {
    let set = BarDataSet::new(
        "sales",
        vec![BarEntry::new(4.0, 10.0).expect("entry")],
    )
    .expect("dataset");
    let data = BarData::new(vec![set], 0.5, 0.0).expect("bar data");

    let labels = project_value_labels(
        &data,
        &transforms((0.0, 100.0)),
        full_bounds(),
        Phase::FULL,
        &BarChartConfig::default(),
    )
    .expect("labels");

    assert_eq!(labels.len(), 1);
    let label = labels[0];
    assert_relative_eq!(label.x, 400.0);
    // Bar top at py 450, default text height 12: 450 - 16.5.
    assert_relative_eq!(label.y, 433.5);
    assert_relative_eq!(label.value, 10.0);
    assert_eq!(label.stack_index, None);
}

#[test]
fn stacked_labels_sit_at_outward_segment_ends() {
    let entry = BarEntry::stacked(5.0, vec![3.0, -2.0, 5.0]).expect("entry");
    let set = BarDataSet::new("mix", vec![entry]).expect("dataset");
    let data = BarData::new(vec![set], 0.5, 0.0).expect("bar data");

    // y domain (-50, 50): py = 250 - 5 * y.
    let labels = project_value_labels(
        &data,
        &transforms((-50.0, 50.0)),
        full_bounds(),
        Phase::FULL,
        &BarChartConfig::default(),
    )
    .expect("labels");

    assert_eq!(labels.len(), 3);

    // +3 labels at accumulator top y=3, -2 at its bottom y=-2, +5 at y=8.
    assert_relative_eq!(labels[0].y, 235.0 - 16.5);
    assert_relative_eq!(labels[1].y, 260.0 + 4.5);
    assert_relative_eq!(labels[2].y, 210.0 - 16.5);
    assert_eq!(labels[0].stack_index, Some(0));
    assert_eq!(labels[2].stack_index, Some(2));
    assert_relative_eq!(labels[1].value, -2.0);
}

#[test]
fn labels_outside_the_content_window_are_culled() {
    let entries: Vec<BarEntry> = (0..10)
        .map(|i| BarEntry::new(f64::from(i), 10.0).expect("entry"))
        .collect();
    let set = BarDataSet::new("sales", entries).expect("dataset");
    let data = BarData::new(vec![set], 0.5, 0.0).expect("bar data");

    let window = ContentBounds::new(300.0, 0.0, 600.0, 500.0).expect("window");
    let labels = project_value_labels(
        &data,
        &transforms((0.0, 100.0)),
        window,
        Phase::FULL,
        &BarChartConfig::default(),
    )
    .expect("labels");

    let entry_indices: Vec<usize> = labels.iter().map(|l| l.entry_index).collect();
    assert_eq!(entry_indices, vec![3, 4, 5, 6]);
}

#[test]
fn simple_bar_label_culls_on_the_anchor_not_the_offset_position() {
    // py = 500 - 5y: the first bar's anchor sits above the content, the
    // second bar's anchor is inside but its offset label pokes past the top
    // edge. Only the anchor decides.
    let entries = vec![
        BarEntry::new(3.0, 110.0).expect("entry"),
        BarEntry::new(4.0, 99.0).expect("entry"),
    ];
    let set = BarDataSet::new("tall", entries).expect("dataset");
    let data = BarData::new(vec![set], 0.5, 0.0).expect("bar data");

    let labels = project_value_labels(
        &data,
        &transforms((0.0, 100.0)),
        full_bounds(),
        Phase::FULL,
        &BarChartConfig::default(),
    )
    .expect("labels");

    assert_eq!(labels.len(), 1);
    assert_eq!(labels[0].entry_index, 1);
    // Anchor py 5.0 minus the 16.5 above-bar offset.
    assert_relative_eq!(labels[0].y, -11.5);
}

#[test]
fn datasets_with_labels_disabled_are_skipped() {
    let set = BarDataSet::new("quiet", vec![BarEntry::new(1.0, 5.0).expect("entry")])
        .expect("dataset")
        .with_draw_values(false);
    let data = BarData::new(vec![set], 0.5, 0.0).expect("bar data");

    let labels = project_value_labels(
        &data,
        &transforms((0.0, 100.0)),
        full_bounds(),
        Phase::FULL,
        &BarChartConfig::default(),
    )
    .expect("labels");

    assert!(labels.is_empty());
}
