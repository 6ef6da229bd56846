//! barchart-rs: bar-chart geometry and hit-testing engine.
//!
//! This crate turns numeric data series (simple, stacked and grouped bars)
//! into deterministic pixel rectangles under animation phases, zoom/pan and
//! axis inversion, and maps touch points back to the data entry and stack
//! segment under them. Drawing backends stay external: every projection
//! produces backend-agnostic primitives.

pub mod config;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use config::BarChartConfig;
pub use error::{ChartError, ChartResult};
