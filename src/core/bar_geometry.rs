//! Pure data-space bar math: rectangle extents for simple bars and the
//! running-accumulator walk shared by stacked geometry, value labels and
//! stack-segment hit-testing.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::data::BarEntry;
use crate::core::types::DataRect;

/// Value range `[from, to)` of one stack segment along the value axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentRange {
    pub from: f64,
    pub to: f64,
}

impl SegmentRange {
    #[must_use]
    pub fn new(from: f64, to: f64) -> Self {
        Self { from, to }
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.from && value < self.to
    }
}

/// Rectangle of one simple (unstacked) bar in data space.
///
/// The bar spans `[0, y]` for positive values and `[y, 0]` for negative
/// ones; an inverted axis swaps the roles of top and bottom. The non-zero
/// bound is scaled by `phase_y` while the zero bound stays pinned, so the
/// bar grows from its baseline during animation.
#[must_use]
pub fn simple_bar_rect(x: f64, y: f64, half_width: f64, phase_y: f64, inverted: bool) -> DataRect {
    let left = x - half_width;
    let right = x + half_width;
    let mut top = if inverted {
        if y <= 0.0 { y } else { 0.0 }
    } else if y >= 0.0 {
        y
    } else {
        0.0
    };
    let mut bottom = if inverted {
        if y >= 0.0 { y } else { 0.0 }
    } else if y <= 0.0 {
        y
    } else {
        0.0
    };

    // Scale only the value-side bound; the baseline must not move.
    if top != 0.0 {
        top *= phase_y;
    } else {
        bottom *= phase_y;
    }

    DataRect::new(left, top, right, bottom)
}

/// Segment value ranges of a stacked entry, in component order, unscaled by
/// any animation phase.
///
/// Positive components accumulate upward from zero, negative ones upward
/// from `entry.negative_sum()`; together the segments partition
/// `[negative_sum, positive_sum]` with no gaps or overlaps. Returns a single
/// `[0, y)` range for an unstacked entry.
#[must_use]
pub fn stack_ranges(entry: &BarEntry) -> SmallVec<[SegmentRange; 4]> {
    let Some(values) = entry.y_values() else {
        let mut ranges = SmallVec::new();
        ranges.push(SegmentRange::new(0.0, entry.y()));
        return ranges;
    };

    let mut ranges = SmallVec::with_capacity(values.len());
    let mut pos_y = 0.0;
    let mut neg_y = entry.negative_sum();
    for &value in values {
        if value >= 0.0 {
            ranges.push(SegmentRange::new(pos_y, pos_y + value));
            pos_y += value;
        } else {
            ranges.push(SegmentRange::new(neg_y, neg_y + value.abs()));
            neg_y += value.abs();
        }
    }
    ranges
}

/// Rectangle of one stack segment in data space.
///
/// Unlike a simple bar, both bounds scale with `phase_y`: a stack has no
/// single baseline to pin mid-stack, so the whole stack grows uniformly.
#[must_use]
pub fn stacked_segment_rect(
    range: SegmentRange,
    x: f64,
    half_width: f64,
    phase_y: f64,
    inverted: bool,
) -> DataRect {
    let (top, bottom) = if inverted {
        (range.from.min(range.to), range.from.max(range.to))
    } else {
        (range.from.max(range.to), range.from.min(range.to))
    };
    DataRect::new(x - half_width, top * phase_y, x + half_width, bottom * phase_y)
}
