mod highlight;
mod highlighter;

pub use highlight::{ChartOrientation, Highlight};
pub use highlighter::resolve_highlight;
