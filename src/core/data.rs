use serde::{Deserialize, Serialize};

use crate::core::types::AxisDependency;
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// One data point: an `x` category position and either a single `y` value or
/// an ordered sequence of signed stack components.
///
/// `y` (the component sum) and `negative_sum` (the signed sum of negative
/// components) are cached at construction; entries are immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarEntry {
    x: f64,
    y: f64,
    negative_sum: f64,
    y_values: Option<Vec<f64>>,
}

impl BarEntry {
    pub fn new(x: f64, y: f64) -> ChartResult<Self> {
        if !x.is_finite() || !y.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "bar entry values must be finite, got x={x}, y={y}"
            )));
        }
        Ok(Self {
            x,
            y,
            negative_sum: 0.0,
            y_values: None,
        })
    }

    pub fn stacked(x: f64, values: Vec<f64>) -> ChartResult<Self> {
        if !x.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "bar entry x must be finite, got {x}"
            )));
        }
        if values.is_empty() {
            return Err(ChartError::InvalidData(
                "stacked bar entry needs at least one component".to_owned(),
            ));
        }
        if values.iter().any(|v| !v.is_finite()) {
            return Err(ChartError::InvalidData(
                "stack components must be finite".to_owned(),
            ));
        }

        let y = values.iter().sum();
        let negative_sum = values.iter().filter(|v| **v < 0.0).sum();
        Ok(Self {
            x,
            y,
            negative_sum,
            y_values: Some(values),
        })
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Sum of all components (or the single value when unstacked).
    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Signed sum of the negative components; `0.0` when unstacked.
    #[must_use]
    pub fn negative_sum(&self) -> f64 {
        self.negative_sum
    }

    #[must_use]
    pub fn y_values(&self) -> Option<&[f64]> {
        self.y_values.as_deref()
    }

    #[must_use]
    pub fn is_stacked(&self) -> bool {
        self.y_values.is_some()
    }

    /// Number of plotted values this entry contributes.
    #[must_use]
    pub fn stack_size(&self) -> usize {
        self.y_values.as_ref().map_or(1, Vec::len)
    }
}

/// An ordered sequence of entries plus per-set style.
///
/// Entries must be in non-decreasing x order: the renderer's right-edge
/// early exit during culling depends on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarDataSet {
    label: String,
    entries: Vec<BarEntry>,
    colors: Vec<Color>,
    bar_border_width: f64,
    bar_border_color: Color,
    bar_shadow_color: Color,
    highlight_color: Color,
    highlight_alpha: f64,
    axis_dependency: AxisDependency,
    visible: bool,
    highlight_enabled: bool,
    draw_values: bool,
    value_text_height: f64,
}

impl BarDataSet {
    pub fn new(label: impl Into<String>, entries: Vec<BarEntry>) -> ChartResult<Self> {
        if entries.windows(2).any(|pair| pair[0].x() > pair[1].x()) {
            return Err(ChartError::InvalidConfig(
                "bar entries must be in non-decreasing x order".to_owned(),
            ));
        }
        Ok(Self {
            label: label.into(),
            entries,
            colors: vec![Color::rgb(0.55, 0.55, 0.55)],
            bar_border_width: 0.0,
            bar_border_color: Color::rgb(0.0, 0.0, 0.0),
            bar_shadow_color: Color::rgba(0.0, 0.0, 0.0, 0.08),
            highlight_color: Color::rgb(0.0, 0.0, 0.0),
            highlight_alpha: 120.0 / 255.0,
            axis_dependency: AxisDependency::Left,
            visible: true,
            highlight_enabled: true,
            draw_values: true,
            value_text_height: 12.0,
        })
    }

    #[must_use]
    pub fn with_colors(mut self, colors: Vec<Color>) -> Self {
        if !colors.is_empty() {
            self.colors = colors;
        }
        self
    }

    #[must_use]
    pub fn with_bar_border(mut self, width: f64, color: Color) -> Self {
        self.bar_border_width = width;
        self.bar_border_color = color;
        self
    }

    #[must_use]
    pub fn with_bar_shadow_color(mut self, color: Color) -> Self {
        self.bar_shadow_color = color;
        self
    }

    #[must_use]
    pub fn with_highlight(mut self, color: Color, alpha: f64) -> Self {
        self.highlight_color = color;
        self.highlight_alpha = alpha;
        self
    }

    #[must_use]
    pub fn with_axis_dependency(mut self, axis: AxisDependency) -> Self {
        self.axis_dependency = axis;
        self
    }

    #[must_use]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    #[must_use]
    pub fn with_highlight_enabled(mut self, enabled: bool) -> Self {
        self.highlight_enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_draw_values(mut self, draw: bool) -> Self {
        self.draw_values = draw;
        self
    }

    #[must_use]
    pub fn with_value_text_height(mut self, height: f64) -> Self {
        self.value_text_height = height;
        self
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn entry(&self, index: usize) -> Option<&BarEntry> {
        self.entries.get(index)
    }

    #[must_use]
    pub fn entries(&self) -> &[BarEntry] {
        &self.entries
    }

    /// True iff any entry carries stack components. Mixed sets are allowed;
    /// unstacked entries inside a stacked set render as simple bars.
    #[must_use]
    pub fn is_stacked(&self) -> bool {
        self.entries.iter().any(BarEntry::is_stacked)
    }

    /// Fill color for value index `i`; out-of-range indices reuse colors.
    #[must_use]
    pub fn color_at(&self, index: usize) -> Color {
        self.colors[index % self.colors.len()]
    }

    /// Index of the entry nearest to `x`, by binary search over the ordered
    /// entries. `None` when the set is empty.
    #[must_use]
    pub fn entry_index_for_x(&self, x: f64) -> Option<usize> {
        if self.entries.is_empty() {
            return None;
        }
        let upper = self.entries.partition_point(|e| e.x() < x);
        if upper == 0 {
            return Some(0);
        }
        if upper == self.entries.len() {
            return Some(self.entries.len() - 1);
        }
        let below = upper - 1;
        if (x - self.entries[below].x()).abs() <= (self.entries[upper].x() - x).abs() {
            Some(below)
        } else {
            Some(upper)
        }
    }

    #[must_use]
    pub fn bar_border_width(&self) -> f64 {
        self.bar_border_width
    }

    #[must_use]
    pub fn bar_border_color(&self) -> Color {
        self.bar_border_color
    }

    #[must_use]
    pub fn bar_shadow_color(&self) -> Color {
        self.bar_shadow_color
    }

    #[must_use]
    pub fn highlight_color(&self) -> Color {
        self.highlight_color
    }

    #[must_use]
    pub fn highlight_alpha(&self) -> f64 {
        self.highlight_alpha
    }

    #[must_use]
    pub fn axis_dependency(&self) -> AxisDependency {
        self.axis_dependency
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn is_highlight_enabled(&self) -> bool {
        self.highlight_enabled
    }

    #[must_use]
    pub fn is_draw_values_enabled(&self) -> bool {
        self.draw_values
    }

    #[must_use]
    pub fn value_text_height(&self) -> f64 {
        self.value_text_height
    }
}

/// All datasets of one bar chart plus the shared layout parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarData {
    data_sets: Vec<BarDataSet>,
    bar_width: f64,
    group_space: f64,
}

impl BarData {
    pub fn new(data_sets: Vec<BarDataSet>, bar_width: f64, group_space: f64) -> ChartResult<Self> {
        if !bar_width.is_finite() || bar_width <= 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "bar width must be finite and > 0, got {bar_width}"
            )));
        }
        if !group_space.is_finite() || !(0.0..1.0).contains(&group_space) {
            return Err(ChartError::InvalidConfig(format!(
                "group space must be in [0, 1), got {group_space}"
            )));
        }
        Ok(Self {
            data_sets,
            bar_width,
            group_space,
        })
    }

    #[must_use]
    pub fn data_sets(&self) -> &[BarDataSet] {
        &self.data_sets
    }

    #[must_use]
    pub fn data_set(&self, index: usize) -> Option<&BarDataSet> {
        self.data_sets.get(index)
    }

    #[must_use]
    pub fn data_set_count(&self) -> usize {
        self.data_sets.len()
    }

    /// Bar width in data-space units; half of it is used per side of the
    /// entry's x position.
    #[must_use]
    pub fn bar_width(&self) -> f64 {
        self.bar_width
    }

    /// Spacing fraction between groups of bars at the same category.
    #[must_use]
    pub fn group_space(&self) -> f64 {
        self.group_space
    }

    /// Side-by-side layout applies only with more than one dataset.
    #[must_use]
    pub fn is_grouped(&self) -> bool {
        self.data_sets.len() > 1
    }

    /// Total count of plotted values across all datasets, used by the
    /// per-frame anti-clutter guard for value labels.
    #[must_use]
    pub fn value_count(&self) -> usize {
        self.data_sets
            .iter()
            .map(BarDataSet::entry_count)
            .sum()
    }
}
