mod bar_frame;
mod frame;
mod highlight_rect;
mod primitives;
mod value_labels;

pub use bar_frame::{BarSegmentRect, EntryBarRects, build_bar_frame, project_bar_data_set};
pub use frame::BarRenderFrame;
pub use highlight_rect::{HighlightRect, highlight_rect, project_highlight_rects};
pub use primitives::{Color, RectPrimitive, RectStroke};
pub use value_labels::{
    VALUE_OFFSET_PX, ValueLabel, label_offsets, passes_check, project_value_labels,
};
