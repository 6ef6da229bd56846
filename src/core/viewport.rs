use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// The visible content rectangle in pixel space, used to cull off-screen
/// geometry. All predicates are boundary inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContentBounds {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl ContentBounds {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> ChartResult<Self> {
        let all_finite =
            left.is_finite() && top.is_finite() && right.is_finite() && bottom.is_finite();
        if !all_finite || right <= left || bottom <= top {
            return Err(ChartError::InvalidBounds {
                left,
                top,
                right,
                bottom,
            });
        }
        Ok(Self {
            left,
            top,
            right,
            bottom,
        })
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }

    /// True when `px` has not fallen off the left edge of the content.
    #[must_use]
    pub fn is_in_bounds_left(self, px: f64) -> bool {
        px >= self.left
    }

    /// True when `px` has not fallen off the right edge of the content.
    #[must_use]
    pub fn is_in_bounds_right(self, px: f64) -> bool {
        px <= self.right
    }

    #[must_use]
    pub fn is_in_bounds_y(self, py: f64) -> bool {
        py >= self.top && py <= self.bottom
    }
}
