use thiserror::Error;

pub type PlotResult<T> = Result<T, PlotError>;

/// Every failure surfaced by label building, option parsing and view state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlotError {
    #[error("invalid grid size: width={width}, height={height}")]
    InvalidGridSize { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    /// Epoch seconds chrono cannot represent.
    #[error("datetime value out of range: {value}")]
    DatetimeOutOfRange { value: f64 },
}
