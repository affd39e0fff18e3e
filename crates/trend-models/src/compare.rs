//! Slope comparison between two fitted trends
//!
//! The slopes are compared with a t-test on independent coefficient
//! estimates:
//!
//! ```text
//! t  = (b_a - b_b) / sqrt(se_a² + se_b²)
//! df = n - 2
//! p  = 2 · (1 - CDF_t(|t|, df))
//! ```
//!
//! The degrees of freedom are those of a single regression on the common
//! sample size, not a pooled or Welch-Satterthwaite value.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::base::{ModelError, Result, two_sided_p_value};
use crate::lm::{TrendFit, fit_trend};
use trend_core::data::{TimeSeries, TrendDataset};


/// Outcome of testing whether two slopes are equal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlopeComparison {
    /// t-statistic of the slope difference
    pub t_statistic: f64,
    /// Two-tailed p-value
    pub p_value: f64,
    /// Degrees of freedom used for the p-value
    pub df: usize,
    /// `a.slope - b.slope`
    pub slope_difference: f64,
    /// Standard error of the slope difference
    pub std_error: f64,
}

/// Test the null hypothesis that the slopes of `a` and `b` are equal
///
/// Both fits must come from series of the same length. Fails with
/// [`ModelError::DegenerateRegression`] when both slope standard errors are
/// zero.
pub fn compare_slopes(a: &TrendFit, b: &TrendFit) -> Result<SlopeComparison> {
    if a.n_obs != b.n_obs {
        return Err(ModelError::MismatchedSampleSize {
            left: a.series_name.clone(),
            left_n: a.n_obs,
            right: b.series_name.clone(),
            right_n: b.n_obs,
        });
    }

    let df = a.n_obs.checked_sub(2).filter(|&df| df > 0).ok_or_else(|| {
        ModelError::InsufficientData {
            series: a.series_name.clone(),
            n_samples: a.n_obs,
            required: crate::lm::MIN_OBSERVATIONS,
        }
    })?;

    let std_error = (a.standard_error.powi(2) + b.standard_error.powi(2)).sqrt();
    if std_error == 0.0 {
        return Err(ModelError::DegenerateRegression {
            left: a.series_name.clone(),
            right: b.series_name.clone(),
        });
    }

    let slope_difference = a.slope - b.slope;
    let t_statistic = slope_difference / std_error;
    let p_value = two_sided_p_value(t_statistic, df as f64)?;

    debug!(
        left = %a.series_name,
        right = %b.series_name,
        t_statistic,
        p_value,
        df,
        "compared slopes"
    );

    Ok(SlopeComparison {
        t_statistic,
        p_value,
        df,
        slope_difference,
        std_error,
    })
}

// ==================== Comparator ====================

/// Comparator configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ComparatorConfig {
    /// Fit the two trends on separate threads
    pub parallel_fits: bool,
}

/// Fits two trends and compares their slopes
#[derive(Debug, Clone, Default)]
pub struct TrendComparator {
    config: ComparatorConfig,
}

/// Both fits and their comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendComparison {
    /// Name of the shared predictor
    pub predictor: String,
    /// Trend of the first series
    pub fit_a: TrendFit,
    /// Trend of the second series
    pub fit_b: TrendFit,
    /// Slope test of `fit_a` against `fit_b`
    pub comparison: SlopeComparison,
}

impl TrendComparator {
    /// Create a comparator with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set configuration
    pub fn config(mut self, config: ComparatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Fit the trends on separate threads
    pub fn parallel(mut self, parallel_fits: bool) -> Self {
        self.config.parallel_fits = parallel_fits;
        self
    }

    /// Fit one series
    pub fn fit_trend(&self, series: &TimeSeries) -> Result<TrendFit> {
        fit_trend(series)
    }

    /// Compare two fitted trends
    pub fn compare_slopes(&self, a: &TrendFit, b: &TrendFit) -> Result<SlopeComparison> {
        compare_slopes(a, b)
    }

    /// Fit both series of `dataset` and compare their slopes
    pub fn compare(&self, dataset: &TrendDataset) -> Result<TrendComparison> {
        let (fit_a, fit_b) = if self.config.parallel_fits {
            rayon::join(
                || fit_trend(dataset.series_a()),
                || fit_trend(dataset.series_b()),
            )
        } else {
            (fit_trend(dataset.series_a()), fit_trend(dataset.series_b()))
        };
        let fit_a = fit_a?;
        let fit_b = fit_b?;

        let comparison = compare_slopes(&fit_a, &fit_b)?;

        info!(
            predictor = dataset.predictor(),
            n = dataset.len(),
            t_statistic = comparison.t_statistic,
            p_value = comparison.p_value,
            "trend comparison complete"
        );

        Ok(TrendComparison {
            predictor: dataset.predictor().to_string(),
            fit_a,
            fit_b,
            comparison,
        })
    }
}
