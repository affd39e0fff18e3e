//! Pair of series compared against each other

use super::*;

/// Two series observed over the same predictor values
#[derive(Clone, Debug, PartialEq)]
pub struct TrendDataset {
    predictor: String,
    series_a: TimeSeries,
    series_b: TimeSeries,
}

impl TrendDataset {
    /// Pair two series, checking that their predictor columns are identical
    pub fn new(
        predictor: impl Into<String>,
        series_a: TimeSeries,
        series_b: TimeSeries,
    ) -> Result<Self> {
        if let Err(index) = series_a.predictor_difference(&series_b) {
            return Err(DataError::PredictorMismatch {
                left: series_a.name().to_string(),
                right: series_b.name().to_string(),
                index,
            });
        }

        Ok(Self {
            predictor: predictor.into(),
            series_a,
            series_b,
        })
    }

    /// Name of the shared independent variable
    pub fn predictor(&self) -> &str {
        &self.predictor
    }

    /// First series
    pub fn series_a(&self) -> &TimeSeries {
        &self.series_a
    }

    /// Second series
    pub fn series_b(&self) -> &TimeSeries {
        &self.series_b
    }

    /// Number of observations in each series
    pub fn len(&self) -> usize {
        self.series_a.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series_a.is_empty()
    }
}
