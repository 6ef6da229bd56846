//! Maps a touch point in pixel space to the data entry and, for stacked
//! bars, the stack segment under it.

use ordered_float::OrderedFloat;
use tracing::trace;

use crate::core::{
    AxisDependency, AxisTransforms, BarData, PixelPoint, SegmentRange, stack_ranges,
};
use crate::interaction::highlight::{ChartOrientation, Highlight};

/// Nearest-entry candidate produced by the selection-detail search.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Selection {
    data_set_index: usize,
    entry_index: usize,
    x: f64,
    y: f64,
}

/// Resolves a touch point to a [`Highlight`], or `None` when nothing is
/// under the touch. A miss is a result, never an error.
#[must_use]
pub fn resolve_highlight(
    data: &BarData,
    transforms: &AxisTransforms,
    point: PixelPoint,
    orientation: ChartOrientation,
) -> Option<Highlight> {
    if data.data_set_count() == 0 {
        return None;
    }

    // Horizontal charts swap the coordinate roles up front; everything
    // below works in primary-x / secondary-y terms.
    let touch = match orientation {
        ChartOrientation::Vertical => point,
        ChartOrientation::Horizontal => PixelPoint::new(point.y, point.x),
    };

    // Any transformer determines the category value; x mapping is shared
    // across axis sides.
    let x_val = transforms
        .for_axis(AxisDependency::Left)
        .pixel_to_value(touch)
        .x;

    let selection = nearest_selection(data, transforms, x_val, touch)?;

    // Horizontal charts derive the candidate dataset from the de-spaced
    // touch position instead of the nearest-entry dataset.
    let candidate_set_index = match orientation {
        ChartOrientation::Vertical => selection.data_set_index,
        ChartOrientation::Horizontal => grouped_data_set_index(data, transforms, touch),
    };
    let set = data.data_set(candidate_set_index)?;

    if set.is_stacked() {
        let entry_index = set.entry_index_for_x(x_val)?;
        let entry = set.entry(entry_index)?;

        if entry.is_stacked() {
            let y_val = transforms
                .for_axis(set.axis_dependency())
                .pixel_to_value(touch)
                .y;
            let ranges = stack_ranges(entry);
            let stack_index = closest_stack_index(&ranges, y_val);
            let range = ranges[stack_index];

            trace!(
                x = entry.x(),
                stack_index,
                from = range.from,
                to = range.to,
                "resolved stacked highlight"
            );
            return Some(Highlight::stack_segment(
                entry.x(),
                entry.y(),
                candidate_set_index,
                entry_index,
                stack_index,
                range,
            ));
        }

        // Unstacked entry inside a stacked set highlights as a whole bar.
        return Some(Highlight::whole_bar(
            entry.x(),
            entry.y(),
            candidate_set_index,
            entry_index,
        ));
    }

    trace!(
        x = selection.x,
        data_set_index = selection.data_set_index,
        entry_index = selection.entry_index,
        "resolved whole-bar highlight"
    );
    Some(Highlight::whole_bar(
        selection.x,
        selection.y,
        selection.data_set_index,
        selection.entry_index,
    ))
}

/// Selection-detail search: nearest entry to the touch's category value
/// across all visible, highlight-enabled datasets, ties broken by value-axis
/// distance.
fn nearest_selection(
    data: &BarData,
    transforms: &AxisTransforms,
    x_val: f64,
    touch: PixelPoint,
) -> Option<Selection> {
    let mut best: Option<(OrderedFloat<f64>, OrderedFloat<f64>, Selection)> = None;

    for (data_set_index, set) in data.data_sets().iter().enumerate() {
        if !set.is_visible() || !set.is_highlight_enabled() {
            continue;
        }
        let Some(entry_index) = set.entry_index_for_x(x_val) else {
            continue;
        };
        let Some(entry) = set.entry(entry_index) else {
            continue;
        };

        let touch_y = transforms
            .for_axis(set.axis_dependency())
            .pixel_to_value(touch)
            .y;
        let key = (
            OrderedFloat((entry.x() - x_val).abs()),
            OrderedFloat((entry.y() - touch_y).abs()),
        );
        let candidate = Selection {
            data_set_index,
            entry_index,
            x: entry.x(),
            y: entry.y(),
        };

        match &best {
            Some((dx, dy, _)) if (key.0, key.1) >= (*dx, *dy) => {}
            _ => best = Some((key.0, key.1, candidate)),
        }
    }

    best.map(|(_, _, selection)| selection)
}

/// Dataset index for a horizontal grouped chart, derived from the touch's
/// positional value with the group spacing subtracted out.
///
/// `steps = floor(v / (count + group_space))` counts whole group cycles
/// before the touch; removing `group_space * steps` yields the de-spaced
/// position whose integer part, mod the dataset count, is the slot index.
fn grouped_data_set_index(data: &BarData, transforms: &AxisTransforms, touch: PixelPoint) -> usize {
    let count = data.data_set_count();
    let positional = transforms
        .for_axis(AxisDependency::Left)
        .pixel_to_value(touch)
        .y;

    let steps = (positional / (count as f64 + data.group_space())).floor();
    let de_spaced = positional - data.group_space() * steps;

    let index = (de_spaced.floor() as i64) % count as i64;
    if index < 0 {
        0
    } else {
        (index as usize).min(count - 1)
    }
}

/// Ordinal of the segment whose `[from, to)` range contains `value`. A value
/// outside every range clamps to the last segment when above the stack and
/// to the first when below.
fn closest_stack_index(ranges: &[SegmentRange], value: f64) -> usize {
    if let Some(index) = ranges.iter().position(|range| range.contains(value)) {
        return index;
    }
    let last = ranges.len().saturating_sub(1);
    if value > ranges[last].to { last } else { 0 }
}
