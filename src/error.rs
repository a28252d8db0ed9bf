use thiserror::Error;

pub type AxisResult<T> = Result<T, AxisError>;

#[derive(Debug, Error)]
pub enum AxisError {
    #[error("invalid axis range: min={min}, max={max}")]
    InvalidRange { min: f64, max: f64 },

    #[error("invalid axis span: {span} (must be finite and > 0)")]
    InvalidSpan { span: f64 },

    #[error("invalid tick count: {count} (must be >= 2)")]
    InvalidTickCount { count: usize },

    #[error("invalid axis extent: {extent} (must be finite and > 0)")]
    InvalidExtent { extent: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
