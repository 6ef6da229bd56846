use serde::{Deserialize, Serialize};

use crate::core::SegmentRange;

/// How touch coordinates map onto chart axes. Horizontal bar charts swap
/// the roles of the two pixel coordinates before hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartOrientation {
    Vertical,
    Horizontal,
}

/// Result of hit-testing a touch point against the bar data.
///
/// `stack_index == None` targets the whole bar; a set index carries the
/// segment's ordinal together with its value `range`. An unset
/// `data_set_index` targets the bar at `x` in every highlight-enabled
/// dataset at once.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    /// Resolved x data value (the entry's category position).
    pub x: f64,
    /// Resolved y data value.
    pub y: f64,
    /// Owning dataset, or `None` for all highlight-enabled datasets.
    pub data_set_index: Option<usize>,
    /// Entry index within the owning dataset. Overlay building re-derives
    /// the entry from `x` per dataset, so across-set highlights carry 0.
    pub entry_index: usize,
    pub stack_index: Option<usize>,
    pub range: Option<SegmentRange>,
}

impl Highlight {
    #[must_use]
    pub fn whole_bar(x: f64, y: f64, data_set_index: usize, entry_index: usize) -> Self {
        Self {
            x,
            y,
            data_set_index: Some(data_set_index),
            entry_index,
            stack_index: None,
            range: None,
        }
    }

    /// Whole-bar highlight at `x` across every highlight-enabled dataset.
    #[must_use]
    pub fn across_data_sets(x: f64) -> Self {
        Self {
            x,
            y: 0.0,
            data_set_index: None,
            entry_index: 0,
            stack_index: None,
            range: None,
        }
    }

    #[must_use]
    pub fn stack_segment(
        x: f64,
        y: f64,
        data_set_index: usize,
        entry_index: usize,
        stack_index: usize,
        range: SegmentRange,
    ) -> Self {
        Self {
            x,
            y,
            data_set_index: Some(data_set_index),
            entry_index,
            stack_index: Some(stack_index),
            range: Some(range),
        }
    }

    #[must_use]
    pub fn is_stack_segment(&self) -> bool {
        self.stack_index.is_some()
    }
}
