//! Value-label anchor placement for simple and stacked bars.

use serde::{Deserialize, Serialize};

use crate::config::BarChartConfig;
use crate::core::{AxisTransforms, BarData, ContentBounds, DataPoint, Phase};
use crate::error::ChartResult;

/// Fixed pixel margin between a bar's extremity and its value label.
pub const VALUE_OFFSET_PX: f64 = 4.5;

/// Pixel anchor for one value label. `stack_index` is set for stack-segment
/// labels; text formatting is the caller's concern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueLabel {
    pub x: f64,
    pub y: f64,
    pub value: f64,
    pub data_set_index: usize,
    pub entry_index: usize,
    pub stack_index: Option<usize>,
}

/// Signed vertical offsets placing a label just outside the bar's extremity,
/// for positive- and negative-valued bars respectively.
///
/// Axis inversion flips which screen direction is "outward", so both
/// offsets are negated and shifted by one text height.
#[must_use]
pub fn label_offsets(text_height: f64, above_bar: bool, inverted: bool) -> (f64, f64) {
    let mut pos_offset = if above_bar {
        -(text_height + VALUE_OFFSET_PX)
    } else {
        VALUE_OFFSET_PX
    };
    let mut neg_offset = if above_bar {
        VALUE_OFFSET_PX
    } else {
        -(text_height + VALUE_OFFSET_PX)
    };

    if inverted {
        pos_offset = -pos_offset - text_height;
        neg_offset = -neg_offset - text_height;
    }

    (pos_offset, neg_offset)
}

/// Anti-clutter guard, recomputed every frame from the current zoom level:
/// labels draw only while the total plotted value count stays below
/// `max_visible_value_count` scaled by the horizontal zoom.
#[must_use]
pub fn passes_check(data: &BarData, max_visible_value_count: usize, zoom_scale_x: f64) -> bool {
    (data.value_count() as f64) < max_visible_value_count as f64 * zoom_scale_x
}

/// Computes label anchors for every visible, labels-enabled dataset.
///
/// An anchor beyond the right edge of content stops the entry walk (ordinal
/// x order); one off the left edge or vertically out of content is skipped.
/// Simple bars run the vertical check on the bar-end anchor itself, stacked
/// components on their offset label position. Stacked entries get one label
/// per component at the accumulator positions, scaled fully by `phase.y`;
/// unstacked entries inside a stacked set are labeled like simple bars.
pub fn project_value_labels(
    data: &BarData,
    transforms: &AxisTransforms,
    bounds: ContentBounds,
    phase: Phase,
    config: &BarChartConfig,
) -> ChartResult<Vec<ValueLabel>> {
    let data_set_count = data.data_set_count();
    let group_space = data.group_space();
    let mut labels = Vec::new();

    for (set_index, set) in data.data_sets().iter().enumerate() {
        if !set.is_visible() || !set.is_draw_values_enabled() || set.entry_count() == 0 {
            continue;
        }

        let trans = transforms.for_axis(set.axis_dependency());
        let inverted = trans.is_inverted();
        let (pos_offset, neg_offset) = label_offsets(
            set.value_text_height(),
            config.draw_value_above_bar,
            inverted,
        );

        let reveal = phase.reveal_count(set.entry_count());
        'entries: for (entry_index, entry) in set.entries().iter().enumerate().take(reveal) {
            let anchor =
                trans.bar_entry_position(entry, set_index, phase.y, data_set_count, group_space);

            if !bounds.is_in_bounds_right(anchor.x) {
                break;
            }

            if let Some(values) = entry.y_values() {
                // One label per stack component, at the outward end of each
                // segment; no baseline pin, the accumulator y scales fully.
                let mut pos_y = 0.0;
                let mut neg_y = entry.negative_sum();
                for (stack_index, &value) in values.iter().enumerate() {
                    let y = if value >= 0.0 {
                        pos_y += value;
                        pos_y
                    } else {
                        let y = neg_y;
                        neg_y += value.abs();
                        y
                    };

                    let pixel_y = trans
                        .value_to_pixel(DataPoint::new(entry.x(), y * phase.y))
                        .y
                        + if value >= 0.0 { pos_offset } else { neg_offset };

                    if !bounds.is_in_bounds_right(anchor.x) {
                        break 'entries;
                    }
                    if !bounds.is_in_bounds_y(pixel_y) || !bounds.is_in_bounds_left(anchor.x) {
                        continue;
                    }

                    labels.push(ValueLabel {
                        x: anchor.x,
                        y: pixel_y,
                        value,
                        data_set_index: set_index,
                        entry_index,
                        stack_index: Some(stack_index),
                    });
                }
            } else {
                // Simple bars cull on the bar-end anchor, before the label
                // offset is applied.
                if !bounds.is_in_bounds_y(anchor.y) || !bounds.is_in_bounds_left(anchor.x) {
                    continue;
                }

                let y = anchor.y
                    + if entry.y() >= 0.0 {
                        pos_offset
                    } else {
                        neg_offset
                    };

                labels.push(ValueLabel {
                    x: anchor.x,
                    y,
                    value: entry.y(),
                    data_set_index: set_index,
                    entry_index,
                    stack_index: None,
                });
            }
        }
    }

    Ok(labels)
}
