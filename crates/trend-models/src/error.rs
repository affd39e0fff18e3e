//! Model-related error types

use thiserror::Error;

use trend_core::data::DataError;

/// Model-related errors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ModelError {
    /// Data-related error
    #[error("Data error: {0}")]
    Data(#[from] DataError),

    /// Too few observations to estimate a slope and its standard error
    #[error(
        "Not enough data in series '{series}': {n_samples} samples, at least {required} required"
    )]
    InsufficientData {
        /// Series being fitted
        series: String,
        /// Number of samples
        n_samples: usize,
        /// Minimum number of samples
        required: usize,
    },

    /// The two fits were estimated on different sample sizes
    #[error(
        "Sample sizes differ: '{left}' was fit on {left_n} samples, '{right}' on {right_n}"
    )]
    MismatchedSampleSize {
        left: String,
        left_n: usize,
        right: String,
        right_n: usize,
    },

    /// Both slope standard errors are zero, so the t-statistic is 0/0
    #[error("Degenerate regression: slope standard errors of '{left}' and '{right}' are both zero")]
    DegenerateRegression { left: String, right: String },

    /// Predictor has no variance, so the slope is undefined
    #[error("Predictor of series '{series}' is constant; slope is undefined")]
    ConstantPredictor { series: String },

    /// Numerical computation error
    #[error("Numerical error: {message} (operation: {operation})")]
    NumericalError {
        /// Error message
        message: String,
        /// Operation that failed
        operation: String,
    },
}

impl ModelError {
    /// Stable name of the error kind, used in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            ModelError::Data(_) => "DataError",
            ModelError::InsufficientData { .. } => "InsufficientDataError",
            ModelError::MismatchedSampleSize { .. } => "MismatchedSampleSizeError",
            ModelError::DegenerateRegression { .. } => "DegenerateRegressionError",
            ModelError::ConstantPredictor { .. } => "ConstantPredictorError",
            ModelError::NumericalError { .. } => "NumericalError",
        }
    }
}
