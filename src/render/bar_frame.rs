//! Per-dataset bar projection and frame assembly: data-space rectangles are
//! transformed to pixel space, culled against the content bounds and
//! materialized into draw primitives.

use smallvec::SmallVec;
use tracing::debug;

use crate::config::BarChartConfig;
use crate::core::{
    AxisTransforms, BarData, ContentBounds, Phase, PixelRect, simple_bar_rect, stack_ranges,
    stacked_segment_rect,
};
use crate::error::{ChartError, ChartResult};
use crate::interaction::Highlight;
use crate::render::frame::BarRenderFrame;
use crate::render::highlight_rect::project_highlight_rects;
use crate::render::primitives::RectPrimitive;
use crate::render::value_labels::{passes_check, project_value_labels};

/// One pixel rectangle of an entry: the whole bar (`stack_index == None`)
/// or a single stack segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarSegmentRect {
    pub rect: PixelRect,
    pub stack_index: Option<usize>,
}

/// All rectangles one visible entry contributes to a frame.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryBarRects {
    pub entry_index: usize,
    /// Full-height "track" rectangle, computed once per entry.
    pub shadow: Option<PixelRect>,
    pub segments: SmallVec<[BarSegmentRect; 4]>,
}

/// Projects one dataset's bars into pixel rectangles.
///
/// Walks `ceil(entry_count * phase.x)` entries in order. Culling relies on
/// the non-decreasing x order of entries: a bar whose right edge is left of
/// the content is skipped, and one whose left edge is right of the content
/// stops the walk, since every later entry is further right. For stacked
/// entries the first segment decides, all segments share the bar's x extent.
///
/// Pure function of its inputs; calling it twice yields identical output.
pub fn project_bar_data_set(
    data: &BarData,
    set_index: usize,
    transforms: &AxisTransforms,
    bounds: ContentBounds,
    phase: Phase,
    shadow_enabled: bool,
) -> ChartResult<Vec<EntryBarRects>> {
    let set = data.data_set(set_index).ok_or_else(|| {
        ChartError::InvalidConfig(format!("dataset index {set_index} out of range"))
    })?;
    let trans = transforms.for_axis(set.axis_dependency());
    let inverted = trans.is_inverted();
    let half_width = data.bar_width() / 2.0;

    let reveal = phase.reveal_count(set.entry_count());
    let mut projected = Vec::with_capacity(reveal);

    'entries: for (entry_index, entry) in set.entries().iter().enumerate().take(reveal) {
        if let Some(values) = entry.y_values() {
            let ranges = stack_ranges(entry);
            let mut segments: SmallVec<[BarSegmentRect; 4]> =
                SmallVec::with_capacity(values.len());
            for (stack_index, range) in ranges.iter().enumerate() {
                let rect = trans.rect_to_pixel(&stacked_segment_rect(
                    *range, entry.x(), half_width, phase.y, inverted,
                ));
                if stack_index == 0 {
                    if !bounds.is_in_bounds_left(rect.right) {
                        continue 'entries;
                    }
                    if !bounds.is_in_bounds_right(rect.left) {
                        break 'entries;
                    }
                }
                segments.push(BarSegmentRect {
                    rect,
                    stack_index: Some(stack_index),
                });
            }

            let shadow = shadow_enabled.then(|| {
                let whole = trans.rect_to_pixel(&simple_bar_rect(
                    entry.x(),
                    entry.y(),
                    half_width,
                    phase.y,
                    inverted,
                ));
                PixelRect::new(whole.left, bounds.top, whole.right, bounds.bottom)
            });

            projected.push(EntryBarRects {
                entry_index,
                shadow,
                segments,
            });
        } else {
            // Simple bar; also the path for unstacked entries inside a
            // stacked set.
            let rect = trans.rect_to_pixel(&simple_bar_rect(
                entry.x(),
                entry.y(),
                half_width,
                phase.y,
                inverted,
            ));
            if !bounds.is_in_bounds_left(rect.right) {
                continue;
            }
            if !bounds.is_in_bounds_right(rect.left) {
                break;
            }

            let shadow = shadow_enabled
                .then(|| PixelRect::new(rect.left, bounds.top, rect.right, bounds.bottom));

            let mut segments = SmallVec::new();
            segments.push(BarSegmentRect {
                rect,
                stack_index: None,
            });
            projected.push(EntryBarRects {
                entry_index,
                shadow,
                segments,
            });
        }
    }

    Ok(projected)
}

/// Builds the full draw pass for one frame: shadows, bar fills with optional
/// borders, value labels (subject to the anti-clutter guard) and highlight
/// overlays for the given resolved highlights.
pub fn build_bar_frame(
    data: &BarData,
    transforms: &AxisTransforms,
    bounds: ContentBounds,
    phase: Phase,
    config: &BarChartConfig,
    highlights: &[Highlight],
) -> ChartResult<BarRenderFrame> {
    let mut frame = BarRenderFrame::new(bounds);

    for (set_index, set) in data.data_sets().iter().enumerate() {
        if !set.is_visible() || set.entry_count() == 0 {
            continue;
        }

        let entries = project_bar_data_set(
            data,
            set_index,
            transforms,
            bounds,
            phase,
            config.draw_bar_shadow,
        )?;
        for entry_rects in &entries {
            if let Some(shadow) = entry_rects.shadow {
                frame
                    .shadow_rects
                    .push(RectPrimitive::filled(shadow, set.bar_shadow_color()));
            }
            for segment in &entry_rects.segments {
                // Simple bars cycle fill colors by entry, stacks by segment.
                let color_index = segment.stack_index.unwrap_or(entry_rects.entry_index);
                let mut primitive =
                    RectPrimitive::filled(segment.rect, set.color_at(color_index));
                if set.bar_border_width() > 0.0 {
                    primitive =
                        primitive.with_stroke(set.bar_border_width(), set.bar_border_color());
                }
                frame.bar_rects.push(primitive);
            }
        }
    }

    if config.draw_value_labels
        && passes_check(data, config.max_visible_value_count, transforms.scale_x())
    {
        frame.value_labels = project_value_labels(data, transforms, bounds, phase, config)?;
    }

    for highlight_rect in project_highlight_rects(data, highlights, transforms, phase.y)? {
        frame.highlight_rects.push(RectPrimitive::filled(
            highlight_rect.rect,
            highlight_rect.fill,
        ));
    }

    debug!(
        bar_rects = frame.bar_rects.len(),
        shadow_rects = frame.shadow_rects.len(),
        value_labels = frame.value_labels.len(),
        highlight_rects = frame.highlight_rects.len(),
        "built bar render frame"
    );

    Ok(frame)
}
