//! Statistical structures for model results

use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, StudentsT};

use super::{ModelError, Result};

/// Model statistics
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ModelStatistics {
    /// R-squared
    pub r_squared: Option<f64>,
    /// Adjusted R-squared
    pub adj_r_squared: Option<f64>,
    /// Residual standard error
    pub residual_std_error: Option<f64>,
    /// Residual sum of squares
    pub rss: Option<f64>,
    /// Total sum of squares
    pub tss: Option<f64>,
    /// Residual degrees of freedom
    pub df_residual: Option<usize>,
    /// Model degrees of freedom
    pub df_model: Option<usize>,
}

/// Residual statistics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResidualStatistics {
    /// Minimum residual
    pub min: f64,
    /// First quartile
    pub q1: f64,
    /// Median
    pub median: f64,
    /// Third quartile
    pub q3: f64,
    /// Maximum residual
    pub max: f64,
    /// Durbin-Watson statistic
    pub durbin_watson: Option<f64>,
}

impl ResidualStatistics {
    /// Summarize a residual vector
    pub fn from_residuals(residuals: &[f64]) -> Self {
        let mut sorted = residuals.to_vec();
        sorted.sort_by(f64::total_cmp);

        Self {
            min: sorted.first().copied().unwrap_or(f64::NAN),
            q1: quantile(&sorted, 0.25),
            median: quantile(&sorted, 0.5),
            q3: quantile(&sorted, 0.75),
            max: sorted.last().copied().unwrap_or(f64::NAN),
            durbin_watson: durbin_watson(residuals),
        }
    }
}

/// Linear-interpolated quantile of sorted data
fn quantile(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }

    let idx = (sorted.len() as f64 - 1.0) * q;
    let lower = idx.floor() as usize;
    let upper = idx.ceil() as usize;

    if lower == upper {
        sorted[lower]
    } else {
        let weight = idx - lower as f64;
        sorted[lower] * (1.0 - weight) + sorted[upper] * weight
    }
}

/// Durbin-Watson statistic; `None` when residuals are all zero
fn durbin_watson(residuals: &[f64]) -> Option<f64> {
    if residuals.len() < 2 {
        return None;
    }

    let sum_sq_diff: f64 = residuals.windows(2).map(|w| (w[1] - w[0]).powi(2)).sum();
    let sum_sq: f64 = residuals.iter().map(|r| r * r).sum();

    if sum_sq == 0.0 {
        None
    } else {
        Some(sum_sq_diff / sum_sq)
    }
}

/// Two-tailed p-value of `t` under Student's t with `df` degrees of freedom
///
/// Computed as `2 * (1 - CDF(|t|))` and clamped to `[0, 1]`. A t-statistic of
/// exactly zero yields `1.0`; a non-finite one is an error.
pub fn two_sided_p_value(t: f64, df: f64) -> Result<f64> {
    if !t.is_finite() {
        return Err(ModelError::NumericalError {
            message: format!("t-statistic is {}", t),
            operation: "two_sided_p_value".to_string(),
        });
    }

    if t == 0.0 {
        return Ok(1.0);
    }

    let t_dist = StudentsT::new(0.0, 1.0, df).map_err(|e| ModelError::NumericalError {
        message: format!("Failed to create t-distribution: {}", e),
        operation: "two_sided_p_value".to_string(),
    })?;

    let p = 2.0 * (1.0 - t_dist.cdf(t.abs()));
    Ok(p.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_two_sided_p_value_reference_points() {
        // df = 1 is the Cauchy distribution: P(|T| > 1) = 0.5
        assert_abs_diff_eq!(two_sided_p_value(1.0, 1.0).unwrap(), 0.5, epsilon = 1e-10);
        assert_abs_diff_eq!(two_sided_p_value(-1.0, 1.0).unwrap(), 0.5, epsilon = 1e-10);
        // 97.5th percentile of t with 10 df
        assert_abs_diff_eq!(
            two_sided_p_value(2.228138851986274, 10.0).unwrap(),
            0.05,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_two_sided_p_value_zero_and_extreme() {
        assert_eq!(two_sided_p_value(0.0, 5.0).unwrap(), 1.0);
        let p = two_sided_p_value(1e6, 5.0).unwrap();
        assert!((0.0..1e-12).contains(&p));
    }

    #[test]
    fn test_two_sided_p_value_rejects_non_finite_t() {
        for t in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = two_sided_p_value(t, 5.0).unwrap_err();
            assert!(matches!(err, ModelError::NumericalError { .. }));
        }
    }

    #[test]
    fn test_two_sided_p_value_invalid_df() {
        let err = two_sided_p_value(1.0, 0.0).unwrap_err();
        assert!(matches!(err, ModelError::NumericalError { .. }));
    }

    #[test]
    fn test_residual_statistics() {
        let stats = ResidualStatistics::from_residuals(&[1.0, -1.0, 2.0, -2.0, 0.0]);
        assert_eq!(stats.min, -2.0);
        assert_eq!(stats.max, 2.0);
        assert_eq!(stats.median, 0.0);
        assert_eq!(stats.q1, -1.0);
        assert_eq!(stats.q3, 1.0);
        // (4 + 9 + 16 + 4) / 10
        assert_abs_diff_eq!(stats.durbin_watson.unwrap(), 3.3, epsilon = 1e-12);
    }

    #[test]
    fn test_residual_statistics_all_zero() {
        let stats = ResidualStatistics::from_residuals(&[0.0, 0.0, 0.0]);
        assert_eq!(stats.durbin_watson, None);
    }
}
