//! Fitted trend structure

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::base::{Coefficient, ModelStatistics, ModelSummary, ResidualStatistics};
use crate::lm::ols::Vector;

/// Result of fitting one OLS trend line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendFit {
    /// Name of the fitted series
    pub series_name: String,
    /// Coefficient of the predictor
    pub slope: f64,
    /// Intercept
    pub intercept: f64,
    /// Standard error of the slope
    pub standard_error: f64,
    /// Standard error of the intercept
    pub intercept_std_error: f64,
    /// Residual degrees of freedom (n - 2)
    pub df_residual: usize,
    /// Number of observations
    pub n_obs: usize,
    /// Intercept and slope with their t-tests
    pub coefficients: Vec<Coefficient>,
    /// Fitted values (ŷ)
    pub fitted_values: Vector,
    /// Residuals (y - ŷ)
    pub residuals: Vector,
    /// Model statistics
    pub model_statistics: ModelStatistics,
}

impl TrendFit {
    /// Value of the trend line at `x`
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }

    /// Coefficient of determination, absent for a constant response
    pub fn r_squared(&self) -> Option<f64> {
        self.model_statistics.r_squared
    }

    /// Summary table for this fit, labelling the slope with `predictor`
    pub fn summary(&self, predictor: &str) -> ModelSummary {
        let coefficients = self
            .coefficients
            .iter()
            .cloned()
            .map(|mut coeff| {
                if !coeff.is_intercept {
                    coeff.name = predictor.to_string();
                }
                coeff
            })
            .collect();

        ModelSummary {
            response: self.series_name.clone(),
            predictor: predictor.to_string(),
            n_obs: self.n_obs,
            coefficients,
            model_statistics: self.model_statistics,
            residual_statistics: ResidualStatistics::from_residuals(&self.residuals.to_vec()),
        }
    }
}

impl fmt::Display for TrendFit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: slope = {} (SE {}), intercept = {}, df = {}",
            self.series_name, self.slope, self.standard_error, self.intercept, self.df_residual
        )
    }
}
