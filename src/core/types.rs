use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Point in data space: `x` is the category/ordinal position, `y` the value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Point in pixel space. Pixel y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in data space.
///
/// `top` is the value-side y bound and `bottom` the baseline-side bound, in
/// data units. Rectangles are always constructed in data space first and
/// converted to pixel space exactly once via [`Transform`], never mixed.
///
/// [`Transform`]: crate::core::Transform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl DataRect {
    #[must_use]
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }
}

/// Axis-aligned rectangle in pixel space, normalized so `top <= bottom` and
/// `left <= right`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PixelRect {
    #[must_use]
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left: left.min(right),
            top: top.min(bottom),
            right: left.max(right),
            bottom: top.max(bottom),
        }
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }

    #[must_use]
    pub fn center(self) -> PixelPoint {
        PixelPoint::new(
            (self.left + self.right) * 0.5,
            (self.top + self.bottom) * 0.5,
        )
    }
}

/// Which of the two value scales a dataset is plotted against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AxisDependency {
    #[default]
    Left,
    Right,
}

/// Animation interpolation fractions.
///
/// `x` is the fraction of entries revealed left-to-right, `y` the height
/// scale applied to every bar during grow-in. Supplied externally per frame
/// and read-only to the geometry engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    pub x: f64,
    pub y: f64,
}

impl Phase {
    /// Fully revealed, fully grown.
    pub const FULL: Self = Self { x: 1.0, y: 1.0 };

    pub fn new(x: f64, y: f64) -> ChartResult<Self> {
        for (name, value) in [("phase x", x), ("phase y", y)] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "{name} must be finite and in [0, 1], got {value}"
                )));
            }
        }
        Ok(Self { x, y })
    }

    /// Number of entries revealed by `phase.x`.
    #[must_use]
    pub fn reveal_count(self, entry_count: usize) -> usize {
        (entry_count as f64 * self.x).ceil() as usize
    }
}

impl Default for Phase {
    fn default() -> Self {
        Self::FULL
    }
}
