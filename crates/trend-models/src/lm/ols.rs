//! Ordinary Least Squares (OLS) trend estimation
//!
//! Closed-form simple linear regression of a series' response on its
//! predictor plus an intercept term.

use ndarray::Array1;
use tracing::debug;

use crate::base::{Coefficient, ModelError, ModelStatistics, Result};
use crate::lm::result::TrendFit;
use trend_core::data::TimeSeries;

// ==================== Type Definitions ====================

/// Vector type alias for 1D arrays
pub type Vector = Array1<f64>;

/// Smallest sample that leaves a positive residual degree of freedom
pub const MIN_OBSERVATIONS: usize = 3;

// ==================== Trend Fitting ====================

/// Fit the OLS trend line of `series`
///
/// Fails with [`ModelError::InsufficientData`] below [`MIN_OBSERVATIONS`]
/// points and with [`ModelError::ConstantPredictor`] when every predictor
/// value is the same.
pub fn fit_trend(series: &TimeSeries) -> Result<TrendFit> {
    let n = series.len();
    if n < MIN_OBSERVATIONS {
        return Err(ModelError::InsufficientData {
            series: series.name().to_string(),
            n_samples: n,
            required: MIN_OBSERVATIONS,
        });
    }

    let x = series.x();
    let y = series.y();
    let n_f = n as f64;

    let x_mean = x.sum() / n_f;
    let y_mean = y.sum() / n_f;
    ensure_finite(series, &[("predictor mean", x_mean), ("response mean", y_mean)])?;

    // Deviations from the means
    let dx = x.mapv(|v| v - x_mean);
    let dy = y.mapv(|v| v - y_mean);

    let sxx = dx.dot(&dx);
    if sxx == 0.0 {
        return Err(ModelError::ConstantPredictor {
            series: series.name().to_string(),
        });
    }
    let sxy = dx.dot(&dy);
    ensure_finite(series, &[("Sxx", sxx), ("Sxy", sxy)])?;

    let slope = sxy / sxx;
    let intercept = y_mean - slope * x_mean;

    // Residuals from the centered data
    let residuals: Vector = &dy - &(&dx * slope);
    let fitted_values: Vector = y - &residuals;

    let rss = residuals.dot(&residuals);
    let tss = dy.dot(&dy);

    let df_residual = n - 2;
    let sigma2 = rss / df_residual as f64;

    let standard_error = (sigma2 / sxx).sqrt();
    let intercept_std_error = (sigma2 * (1.0 / n_f + x_mean * x_mean / sxx)).sqrt();
    ensure_finite(
        series,
        &[
            ("slope", slope),
            ("intercept", intercept),
            ("slope standard error", standard_error),
            ("intercept standard error", intercept_std_error),
        ],
    )?;

    let model_statistics = model_statistics(rss, tss, n, df_residual);

    let coefficients = vec![
        Coefficient::tested("(Intercept)", intercept, intercept_std_error, df_residual)?
            .as_intercept(),
        Coefficient::tested("slope", slope, standard_error, df_residual)?,
    ];

    debug!(
        series = series.name(),
        n,
        slope,
        intercept,
        standard_error,
        "fitted OLS trend"
    );

    Ok(TrendFit {
        series_name: series.name().to_string(),
        slope,
        intercept,
        standard_error,
        intercept_std_error,
        df_residual,
        n_obs: n,
        coefficients,
        fitted_values,
        residuals,
        model_statistics,
    })
}

/// Reject intermediate quantities that overflowed
fn ensure_finite(series: &TimeSeries, values: &[(&str, f64)]) -> Result<()> {
    match values.iter().find(|(_, v)| !v.is_finite()) {
        Some((name, value)) => Err(ModelError::NumericalError {
            message: format!("{name} of series '{}' is {value}", series.name()),
            operation: "fit_trend".to_string(),
        }),
        None => Ok(()),
    }
}

/// Goodness-of-fit statistics
fn model_statistics(rss: f64, tss: f64, n: usize, df_residual: usize) -> ModelStatistics {
    let (r_squared, adj_r_squared) = if tss > 0.0 {
        let r2 = 1.0 - rss / tss;
        let adj = 1.0 - (1.0 - r2) * ((n as f64 - 1.0) / df_residual as f64);
        (Some(r2), Some(adj))
    } else {
        (None, None)
    };

    ModelStatistics {
        r_squared,
        adj_r_squared,
        residual_std_error: Some((rss / df_residual as f64).sqrt()),
        rss: Some(rss),
        tss: Some(tss),
        df_residual: Some(df_residual),
        df_model: Some(1),
    }
}
