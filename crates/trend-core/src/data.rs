//! Time series data structures
//!
//! A [`TimeSeries`] pairs an independent variable (usually a year) with one
//! dependent variable. A [`TrendDataset`] holds the two series whose trends are
//! compared and guarantees that they share the same predictor column.

mod dataset;
mod embedded;
mod series;


// Re-exports
pub use dataset::TrendDataset;
pub use embedded::{EMBEDDED_FAILURES, EMBEDDED_LEADERS, EMBEDDED_START_YEAR};
pub use series::{SeriesStats, TimeSeries};

/// One-dimensional float array used for every numeric column
pub type FloatArray = ndarray::Array1<f64>;

/// Error types specific to data operations
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum DataError {
    #[error("Length mismatch in '{name}': {expected} predictor values, {actual} observations")]
    LengthMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },

    #[error("Non-finite value {value} at index {index} in series '{name}'")]
    NonFiniteValue {
        name: String,
        index: usize,
        value: f64,
    },

    #[error(
        "Series '{left}' and '{right}' do not share the same predictor values{}",
        describe_mismatch(.index)
    )]
    PredictorMismatch {
        left: String,
        right: String,
        index: Option<usize>,
    },
}

fn describe_mismatch(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!(" (first difference at index {i})"),
        None => " (different lengths)".to_string(),
    }
}

/// Result type for data operations
pub type Result<T> = std::result::Result<T, DataError>;
