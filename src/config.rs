use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Frame-level rendering toggles shared by every dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarChartConfig {
    /// Draw the full-height "track" rectangle beneath each bar.
    pub draw_bar_shadow: bool,
    /// Emit value-label anchors (still subject to the anti-clutter guard).
    pub draw_value_labels: bool,
    /// Place labels for positive values above the bar instead of below.
    pub draw_value_above_bar: bool,
    /// Label budget for the anti-clutter guard, scaled by the current
    /// horizontal zoom each frame.
    pub max_visible_value_count: usize,
}

impl Default for BarChartConfig {
    fn default() -> Self {
        Self {
            draw_bar_shadow: false,
            draw_value_labels: true,
            draw_value_above_bar: true,
            max_visible_value_count: 100,
        }
    }
}

impl BarChartConfig {
    #[must_use]
    pub fn with_bar_shadow(mut self, enabled: bool) -> Self {
        self.draw_bar_shadow = enabled;
        self
    }

    #[must_use]
    pub fn with_value_labels(mut self, enabled: bool) -> Self {
        self.draw_value_labels = enabled;
        self
    }

    #[must_use]
    pub fn with_value_above_bar(mut self, above: bool) -> Self {
        self.draw_value_above_bar = above;
        self
    }

    #[must_use]
    pub fn with_max_visible_value_count(mut self, count: usize) -> Self {
        self.max_visible_value_count = count;
        self
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|err| ChartError::InvalidData(format!("config serialization failed: {err}")))
    }

    pub fn from_json_str(json: &str) -> ChartResult<Self> {
        serde_json::from_str(json)
            .map_err(|err| ChartError::InvalidData(format!("config deserialization failed: {err}")))
    }
}
