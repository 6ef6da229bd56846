use crate::core::ContentBounds;
use crate::error::ChartResult;
use crate::render::RectPrimitive;
use crate::render::value_labels::ValueLabel;

/// Backend-agnostic scene for one bar-chart draw pass.
///
/// Rectangles are listed in draw order: shadows beneath fills, highlight
/// overlays on top.
#[derive(Debug, Clone, PartialEq)]
pub struct BarRenderFrame {
    pub bounds: ContentBounds,
    pub shadow_rects: Vec<RectPrimitive>,
    pub bar_rects: Vec<RectPrimitive>,
    pub highlight_rects: Vec<RectPrimitive>,
    pub value_labels: Vec<ValueLabel>,
}

impl BarRenderFrame {
    #[must_use]
    pub fn new(bounds: ContentBounds) -> Self {
        Self {
            bounds,
            shadow_rects: Vec::new(),
            bar_rects: Vec::new(),
            highlight_rects: Vec::new(),
            value_labels: Vec::new(),
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        for rect in self
            .shadow_rects
            .iter()
            .chain(&self.bar_rects)
            .chain(&self.highlight_rects)
        {
            rect.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shadow_rects.is_empty()
            && self.bar_rects.is_empty()
            && self.highlight_rects.is_empty()
            && self.value_labels.is_empty()
    }
}
