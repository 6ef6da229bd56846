use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid content bounds: left={left}, top={top}, right={right}, bottom={bottom}")]
    InvalidBounds {
        left: f64,
        top: f64,
        right: f64,
        bottom: f64,
    },

    #[error("invalid data: {0}")]
    InvalidData(String),

    /// The caller wired the chart up incorrectly (out-of-range layout
    /// parameters, dataset shape violations). Fails fast instead of
    /// producing a malformed chart.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
