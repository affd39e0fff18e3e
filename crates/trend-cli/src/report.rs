//! Rendering of comparison results

use serde::Serialize;
use trend_models::TrendComparison;

/// Machine-readable form of the four reported values
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub predictor: &'a str,
    pub series_a: &'a str,
    pub series_b: &'a str,
    pub slope_a: f64,
    pub slope_b: f64,
    pub t_statistic: f64,
    pub p_value: f64,
    pub df: usize,
}

impl<'a> From<&'a TrendComparison> for Report<'a> {
    fn from(result: &'a TrendComparison) -> Self {
        Self {
            predictor: &result.predictor,
            series_a: &result.fit_a.series_name,
            series_b: &result.fit_b.series_name,
            slope_a: result.fit_a.slope,
            slope_b: result.fit_b.slope,
            t_statistic: result.comparison.t_statistic,
            p_value: result.comparison.p_value,
            df: result.comparison.df,
        }
    }
}

/// Four labeled lines: both slopes, the t-statistic and the p-value
///
/// Values use the shortest representation that round-trips to the same `f64`.
pub fn render_text(result: &TrendComparison) -> String {
    format!(
        "Slope of {}: {}\nSlope of {}: {}\nt-statistic: {}\np-value: {}\n",
        result.fit_a.series_name,
        result.fit_a.slope,
        result.fit_b.series_name,
        result.fit_b.slope,
        result.comparison.t_statistic,
        result.comparison.p_value,
    )
}

/// Single JSON object with the reported values
pub fn render_json(result: &TrendComparison) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&Report::from(result))
}

/// Coefficient tables of both fits
pub fn render_summaries(result: &TrendComparison) -> String {
    format!(
        "\n{}\n{}",
        result.fit_a.summary(&result.predictor),
        result.fit_b.summary(&result.predictor)
    )
}
