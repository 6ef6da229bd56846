use crate::core::data::BarEntry;
use crate::core::types::{AxisDependency, DataPoint, DataRect, PixelPoint, PixelRect};
use crate::core::viewport::ContentBounds;
use crate::error::{ChartError, ChartResult};

/// Pixel-space zoom/pan applied on top of the base data→pixel mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomState {
    pub scale_x: f64,
    pub scale_y: f64,
    pub trans_x: f64,
    pub trans_y: f64,
}

impl ZoomState {
    pub fn new(scale_x: f64, scale_y: f64, trans_x: f64, trans_y: f64) -> ChartResult<Self> {
        if !scale_x.is_finite() || scale_x <= 0.0 || !scale_y.is_finite() || scale_y <= 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "zoom scales must be finite and > 0, got ({scale_x}, {scale_y})"
            )));
        }
        if !trans_x.is_finite() || !trans_y.is_finite() {
            return Err(ChartError::InvalidConfig(
                "zoom translation must be finite".to_owned(),
            ));
        }
        Ok(Self {
            scale_x,
            scale_y,
            trans_x,
            trans_y,
        })
    }
}

impl Default for ZoomState {
    fn default() -> Self {
        Self {
            scale_x: 1.0,
            scale_y: 1.0,
            trans_x: 0.0,
            trans_y: 0.0,
        }
    }
}

/// Affine data↔pixel mapping for one axis side.
///
/// Built from an x domain, a y domain and the content rectangle; a pixel
/// space [`ZoomState`] is applied after the base mapping. An inverted
/// transform flips which data direction maps "up" on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    bounds: ContentBounds,
    zoom: ZoomState,
    inverted: bool,
}

impl Transform {
    pub fn new(
        x_domain: (f64, f64),
        y_domain: (f64, f64),
        bounds: ContentBounds,
    ) -> ChartResult<Self> {
        for (name, (start, end)) in [("x domain", x_domain), ("y domain", y_domain)] {
            if !start.is_finite() || !end.is_finite() || start == end {
                return Err(ChartError::InvalidData(format!(
                    "{name} must be finite and non-degenerate, got ({start}, {end})"
                )));
            }
        }
        Ok(Self {
            x_min: x_domain.0,
            x_max: x_domain.1,
            y_min: y_domain.0,
            y_max: y_domain.1,
            bounds,
            zoom: ZoomState::default(),
            inverted: false,
        })
    }

    #[must_use]
    pub fn with_zoom(mut self, zoom: ZoomState) -> Self {
        self.zoom = zoom;
        self
    }

    #[must_use]
    pub fn with_inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    #[must_use]
    pub fn zoom(&self) -> ZoomState {
        self.zoom
    }

    #[must_use]
    pub fn value_to_pixel(&self, point: DataPoint) -> PixelPoint {
        let base_x = self.bounds.left
            + (point.x - self.x_min) / (self.x_max - self.x_min) * self.bounds.width();
        let y_normalized = (point.y - self.y_min) / (self.y_max - self.y_min);
        let base_y = if self.inverted {
            self.bounds.top + y_normalized * self.bounds.height()
        } else {
            self.bounds.bottom - y_normalized * self.bounds.height()
        };
        PixelPoint::new(
            base_x * self.zoom.scale_x + self.zoom.trans_x,
            base_y * self.zoom.scale_y + self.zoom.trans_y,
        )
    }

    /// Reverse mapping; exact inverse of [`Transform::value_to_pixel`] up to
    /// float error.
    #[must_use]
    pub fn pixel_to_value(&self, point: PixelPoint) -> DataPoint {
        let base_x = (point.x - self.zoom.trans_x) / self.zoom.scale_x;
        let base_y = (point.y - self.zoom.trans_y) / self.zoom.scale_y;
        let x =
            self.x_min + (base_x - self.bounds.left) / self.bounds.width() * (self.x_max - self.x_min);
        let y_normalized = if self.inverted {
            (base_y - self.bounds.top) / self.bounds.height()
        } else {
            (self.bounds.bottom - base_y) / self.bounds.height()
        };
        DataPoint::new(x, self.y_min + y_normalized * (self.y_max - self.y_min))
    }

    #[must_use]
    pub fn rect_to_pixel(&self, rect: &DataRect) -> PixelRect {
        let top_left = self.value_to_pixel(DataPoint::new(rect.left, rect.top));
        let bottom_right = self.value_to_pixel(DataPoint::new(rect.right, rect.bottom));
        PixelRect::new(top_left.x, top_left.y, bottom_right.x, bottom_right.y)
    }

    /// Like [`Transform::rect_to_pixel`] but scales both y bounds by
    /// `phase_y` before mapping. Used for highlight overlays, which animate
    /// in sync with bar growth.
    #[must_use]
    pub fn rect_to_pixel_with_phase(&self, rect: &DataRect, phase_y: f64) -> PixelRect {
        let scaled = DataRect::new(rect.left, rect.top * phase_y, rect.right, rect.bottom * phase_y);
        self.rect_to_pixel(&scaled)
    }

    /// Transformed screen position of a bar entry under grouping parameters.
    ///
    /// With more than one dataset each category expands into
    /// `data_set_count + group_space` positional units, one per dataset plus
    /// spacing; this forward layout is the exact inverse of the
    /// highlighter's de-spacing formula. With a single dataset no group
    /// spacing is applied.
    #[must_use]
    pub fn bar_entry_position(
        &self,
        entry: &BarEntry,
        data_set_index: usize,
        phase_y: f64,
        data_set_count: usize,
        group_space: f64,
    ) -> PixelPoint {
        let x = if data_set_count > 1 {
            entry.x() * (data_set_count as f64 + group_space) + data_set_index as f64 + 0.5
        } else {
            entry.x()
        };
        self.value_to_pixel(DataPoint::new(x, entry.y() * phase_y))
    }
}

/// The per-side transforms plus the shared content bounds, standing in for
/// the data provider's transformer lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisTransforms {
    left: Transform,
    right: Transform,
}

impl AxisTransforms {
    #[must_use]
    pub fn new(left: Transform, right: Transform) -> Self {
        Self { left, right }
    }

    /// Both sides share one scale; common case for single-axis charts.
    #[must_use]
    pub fn shared(transform: Transform) -> Self {
        Self {
            left: transform,
            right: transform,
        }
    }

    #[must_use]
    pub fn for_axis(&self, axis: AxisDependency) -> &Transform {
        match axis {
            AxisDependency::Left => &self.left,
            AxisDependency::Right => &self.right,
        }
    }

    #[must_use]
    pub fn is_inverted(&self, axis: AxisDependency) -> bool {
        self.for_axis(axis).is_inverted()
    }

    /// Current viewport zoom along x. Both sides share the x axis, so the
    /// left transform is authoritative.
    #[must_use]
    pub fn scale_x(&self) -> f64 {
        self.left.zoom().scale_x
    }
}
