//! Core types shared by the trend models
//!
//! Coefficient tables, goodness-of-fit statistics and printable summaries.

pub use coefficient::Coefficient;
pub use statistics::{ModelStatistics, ResidualStatistics, two_sided_p_value};
pub use summary::ModelSummary;

pub use crate::error::ModelError;

pub mod coefficient;
pub mod statistics;
pub mod summary;

/// Result type for model operations
pub type Result<T> = std::result::Result<T, ModelError>;
