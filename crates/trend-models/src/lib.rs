//! Trend models
//!
//! Ordinary least squares trend lines over a single predictor and the
//! t-test comparing the slopes of two such lines.

pub mod base;
pub mod compare;
pub mod error;
pub mod lm;

pub use base::{Coefficient, ModelStatistics, ModelSummary, ResidualStatistics, Result};
pub use compare::{
    ComparatorConfig, SlopeComparison, TrendComparator, TrendComparison, compare_slopes,
};
pub use error::ModelError;
pub use lm::{TrendFit, fit_trend};
