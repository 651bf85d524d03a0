// File: crates/plot-core/src/error.rs
// Summary: Error type shared by range analysis, layout and rendering.

use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("data series is empty")]
    EmptyInput,

    #[error("sample at index {index} is not a finite number")]
    NonFiniteSample { index: usize },

    #[error("x and y series differ in length: x={x_len}, y={y_len}")]
    LengthMismatch { x_len: usize, y_len: usize },

    #[error("invalid plot rectangle: left={left}, top={top}, right={right}, bottom={bottom}")]
    InvalidPlotRect { left: i32, top: i32, right: i32, bottom: i32 },
}
