//! Model summary structures

use super::coefficient::Coefficient;
use super::statistics::{ModelStatistics, ResidualStatistics};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Printable summary of one fitted trend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSummary {
    /// Name of the dependent series
    pub response: String,
    /// Name of the independent variable
    pub predictor: String,
    /// Number of observations
    pub n_obs: usize,
    /// Coefficients table
    pub coefficients: Vec<Coefficient>,
    /// Model statistics
    pub model_statistics: ModelStatistics,
    /// Residual statistics
    pub residual_statistics: ResidualStatistics,
}

impl fmt::Display for ModelSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "OLS Trend: {} ~ {}", self.response, self.predictor)?;
        writeln!(f, "Observations: {}", self.n_obs)?;
        writeln!(f)?;

        writeln!(f, "Residuals:")?;
        writeln!(
            f,
            "{:>12} {:>12} {:>12} {:>12} {:>12}",
            "Min", "1Q", "Median", "3Q", "Max"
        )?;
        let r = &self.residual_statistics;
        writeln!(
            f,
            "{:>12.6} {:>12.6} {:>12.6} {:>12.6} {:>12.6}",
            r.min, r.q1, r.median, r.q3, r.max
        )?;
        writeln!(f)?;

        writeln!(f, "Coefficients:")?;
        writeln!(
            f,
            "{:<20} {:>12} {:>12} {:>12} {:>12}",
            "Term", "Estimate", "Std Error", "t-value", "p-value"
        )?;
        writeln!(
            f,
            "{:-<20} {:-<12} {:-<12} {:-<12} {:-<12}",
            "", "", "", "", ""
        )?;

        for coeff in &self.coefficients {
            writeln!(
                f,
                "{:<20} {:>12.6} {:>12.6} {:>12.6} {:>12.6}",
                coeff.name,
                coeff.estimate,
                coeff.std_error,
                coeff.t_stat.unwrap_or(f64::NAN),
                coeff.p_value.unwrap_or(f64::NAN)
            )?;
        }
        writeln!(f)?;

        writeln!(f, "Model Statistics:")?;
        if let Some(r2) = self.model_statistics.r_squared {
            writeln!(f, "  R-squared: {:.4}", r2)?;
        }
        if let Some(adj_r2) = self.model_statistics.adj_r_squared {
            writeln!(f, "  Adjusted R-squared: {:.4}", adj_r2)?;
        }
        if let Some(resid_se) = self.model_statistics.residual_std_error {
            writeln!(f, "  Residual Std. Error: {:.4}", resid_se)?;
        }
        if let Some(df_resid) = self.model_statistics.df_residual {
            writeln!(f, "  Residual DF: {}", df_resid)?;
        }
        if let Some(dw) = r.durbin_watson {
            writeln!(f, "  Durbin-Watson: {:.4}", dw)?;
        }

        Ok(())
    }
}
