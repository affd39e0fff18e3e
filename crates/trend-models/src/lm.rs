//! Linear trend models
//!
//! A trend is the ordinary least squares line of a series' response on its
//! predictor, with an intercept:
//!
//! ```text
//! slope     = Σ(x - x̄)(y - ȳ) / Σ(x - x̄)²
//! intercept = ȳ - slope·x̄
//! se(slope) = sqrt( RSS / (n - 2) / Σ(x - x̄)² )
//! ```

pub mod ols;
pub mod result;


// Re-exports
pub use ols::{MIN_OBSERVATIONS, fit_trend};
pub use result::TrendFit;
