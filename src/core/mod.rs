pub mod bar_geometry;
pub mod data;
pub mod transform;
pub mod types;
pub mod viewport;

pub use bar_geometry::{SegmentRange, simple_bar_rect, stack_ranges, stacked_segment_rect};
pub use data::{BarData, BarDataSet, BarEntry};
pub use transform::{AxisTransforms, Transform, ZoomState};
pub use types::{AxisDependency, DataPoint, DataRect, Phase, PixelPoint, PixelRect};
pub use viewport::ContentBounds;
