//! Exact bar/segment rectangle recomputation for highlight overlays.
//!
//! Deliberately a separate, simpler computation than the frame projection:
//! an overlay only ever needs one rectangle per highlighted dataset, not the
//! full per-segment fill set.

use crate::core::{AxisTransforms, BarData, DataRect, PixelRect, Transform};
use crate::error::ChartResult;
use crate::interaction::Highlight;
use crate::render::primitives::Color;

/// Overlay rectangle for one resolved highlight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightRect {
    pub data_set_index: usize,
    pub entry_index: usize,
    pub rect: PixelRect,
    pub fill: Color,
}

/// Single highlight rectangle: left/right from `x ∓ half_width`, vertical
/// extent `(y1, y2)`, both y bounds scaled by `phase_y` so the overlay
/// animates in sync with bar growth.
#[must_use]
pub fn highlight_rect(
    x: f64,
    y1: f64,
    y2: f64,
    half_width: f64,
    trans: &Transform,
    phase_y: f64,
) -> PixelRect {
    let rect = DataRect::new(x - half_width, y1, x + half_width, y2);
    trans.rect_to_pixel_with_phase(&rect, phase_y)
}

/// Recomputes the overlay rectangle for each resolved highlight.
///
/// A highlight with an unset dataset index overlays the bar at its `x` in
/// every highlight-enabled dataset. Highlights referencing datasets that no
/// longer exist, or datasets with highlighting disabled, are skipped: a
/// stale highlight is transient state, not an error. Whole-bar highlights
/// span `(entry.y, 0)`, segment highlights the segment's `(from, to)` range.
pub fn project_highlight_rects(
    data: &BarData,
    highlights: &[Highlight],
    transforms: &AxisTransforms,
    phase_y: f64,
) -> ChartResult<Vec<HighlightRect>> {
    let half_width = data.bar_width() / 2.0;
    let mut rects = Vec::with_capacity(highlights.len());

    for highlight in highlights {
        let (min_set, max_set) = match highlight.data_set_index {
            Some(index) => (index, index + 1),
            None => (0, data.data_set_count()),
        };

        for set_index in min_set..max_set {
            let Some(set) = data.data_set(set_index) else {
                continue;
            };
            if !set.is_highlight_enabled() {
                continue;
            }
            let Some(entry_index) = set.entry_index_for_x(highlight.x) else {
                continue;
            };
            let Some(entry) = set.entry(entry_index) else {
                continue;
            };

            let (y1, y2) = match highlight.range {
                Some(range) => (range.from, range.to),
                None => (entry.y(), 0.0),
            };

            let trans = transforms.for_axis(set.axis_dependency());
            rects.push(HighlightRect {
                data_set_index: set_index,
                entry_index,
                rect: highlight_rect(entry.x(), y1, y2, half_width, trans, phase_y),
                fill: set.highlight_color().with_alpha(set.highlight_alpha()),
            });
        }
    }

    Ok(rects)
}
