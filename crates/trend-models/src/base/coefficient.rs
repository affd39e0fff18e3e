//! Coefficient definition

use serde::{Deserialize, Serialize};

use super::{Result, two_sided_p_value};

/// Coefficient estimate with its t-test
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coefficient {
    /// Coefficient name
    pub name: String,
    /// Coefficient estimate
    pub estimate: f64,
    /// Standard error
    pub std_error: f64,
    /// t-statistic, absent when the standard error is zero
    pub t_stat: Option<f64>,
    /// Two-tailed p-value, absent when the standard error is zero
    pub p_value: Option<f64>,
    /// Residual degrees of freedom of the test
    pub df: usize,
    /// Is this the intercept?
    pub is_intercept: bool,
}

impl Coefficient {
    /// Estimate `estimate ± std_error` tested against zero with `df` degrees of freedom
    pub fn tested(
        name: impl Into<String>,
        estimate: f64,
        std_error: f64,
        df: usize,
    ) -> Result<Self> {
        let (t_stat, p_value) = if std_error > 0.0 {
            let t = estimate / std_error;
            (Some(t), Some(two_sided_p_value(t, df as f64)?))
        } else {
            (None, None)
        };

        Ok(Self {
            name: name.into(),
            estimate,
            std_error,
            t_stat,
            p_value,
            df,
            is_intercept: false,
        })
    }

    /// Mark as intercept
    pub fn as_intercept(mut self) -> Self {
        self.is_intercept = true;
        self
    }
}
