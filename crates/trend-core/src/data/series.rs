//! Named time series of (predictor, response) pairs

use super::*;

/// A named sequence of observations over an independent variable
#[derive(Clone, Debug, PartialEq)]
pub struct TimeSeries {
    name: String,
    x: FloatArray,
    y: FloatArray,
}

impl TimeSeries {
    /// Create a series from predictor and response values
    ///
    /// Both columns must have the same length and contain only finite values.
    pub fn new(
        name: impl Into<String>,
        x: impl Into<FloatArray>,
        y: impl Into<FloatArray>,
    ) -> Result<Self> {
        let name = name.into();
        let x = x.into();
        let y = y.into();

        if x.len() != y.len() {
            return Err(DataError::LengthMismatch {
                name,
                expected: x.len(),
                actual: y.len(),
            });
        }

        if let Some((index, value)) = first_non_finite(&x).or_else(|| first_non_finite(&y)) {
            return Err(DataError::NonFiniteValue { name, index, value });
        }

        Ok(Self { name, x, y })
    }

    /// Create a series whose predictor is the index sequence `0, 1, ..., n - 1`
    pub fn indexed(name: impl Into<String>, y: impl Into<FloatArray>) -> Result<Self> {
        let y = y.into();
        let x = FloatArray::from_iter((0..y.len()).map(|i| i as f64));
        Self::new(name, x, y)
    }

    /// Series name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Predictor column
    pub fn x(&self) -> &FloatArray {
        &self.x
    }

    /// Response column
    pub fn y(&self) -> &FloatArray {
        &self.y
    }

    /// Number of observations
    pub fn len(&self) -> usize {
        self.y.len()
    }

    /// Check if the series is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over `(x, y)` pairs
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Index of the first predictor value that differs from `other`
    ///
    /// Returns `Ok(())` when both series share an identical predictor column.
    /// A length difference is reported as `Err(None)`.
    pub fn predictor_difference(
        &self,
        other: &TimeSeries,
    ) -> std::result::Result<(), Option<usize>> {
        if self.x.len() != other.x.len() {
            return Err(None);
        }

        match self.x.iter().zip(other.x.iter()).position(|(a, b)| a != b) {
            Some(i) => Err(Some(i)),
            None => Ok(()),
        }
    }

    /// Check whether both series share an identical predictor column
    pub fn shares_predictor(&self, other: &TimeSeries) -> bool {
        self.predictor_difference(other).is_ok()
    }

    /// Compute basic statistics of the response column
    pub fn describe(&self) -> SeriesStats {
        if self.y.is_empty() {
            return SeriesStats::empty();
        }

        let ddof = if self.y.len() > 1 { 1.0 } else { 0.0 };

        SeriesStats {
            count: self.y.len(),
            mean: self.y.mean().unwrap_or(f64::NAN),
            std: self.y.std(ddof),
            min: self.y.iter().fold(f64::INFINITY, |a, &b| a.min(b)),
            max: self.y.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b)),
            first: self.y[0],
            last: self.y[self.y.len() - 1],
        }
    }
}

fn first_non_finite(column: &FloatArray) -> Option<(usize, f64)> {
    column
        .iter()
        .copied()
        .enumerate()
        .find(|(_, v)| !v.is_finite())
}

/// Statistical summary of a series' response values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesStats {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
    pub first: f64,
    pub last: f64,
}

impl SeriesStats {
    pub(crate) fn empty() -> Self {
        Self {
            count: 0,
            mean: f64::NAN,
            std: f64::NAN,
            min: f64::NAN,
            max: f64::NAN,
            first: f64::NAN,
            last: f64::NAN,
        }
    }
}

impl std::fmt::Display for SeriesStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "n={} mean={:.4} sd={:.4} min={:.4} max={:.4} first={:.4} last={:.4}",
            self.count, self.mean, self.std, self.min, self.max, self.first, self.last
        )
    }
}
