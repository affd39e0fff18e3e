//! Reference dataset compiled into the binary
//!
//! Yearly values for 1990 through 2013 of two national indicators. These are
//! the series compared when no dataset file is supplied.

use super::{FloatArray, Result, TimeSeries, TrendDataset};

/// First year of the embedded series
pub const EMBEDDED_START_YEAR: u16 = 1990;

/// `National_Leaders`, 1990..=2013
pub const EMBEDDED_LEADERS: [f64; 24] = [
    7.6, 8.1, 8.1, 8.3, 7.6, 6.6, 5.6, 5.0, 4.2, 3.8, 3.9, 4.1, 4.3, 4.3, 4.1, 4.3, 4.4, 4.1, 3.9,
    3.6, 3.5, 3.5, 3.5, 3.3,
];

/// `National_Failures`, 1990..=2013
pub const EMBEDDED_FAILURES: [f64; 24] = [
    5.9, 6.6, 6.4, 7.0, 6.9, 6.3, 5.7, 5.5, 4.9, 4.6, 4.5, 4.7, 4.6, 4.5, 4.4, 4.6, 4.8, 4.7, 4.8,
    4.2, 4.1, 4.2, 4.4, 4.2,
];

impl TrendDataset {
    /// The embedded `National_Leaders` / `National_Failures` dataset keyed by year
    pub fn embedded() -> Result<Self> {
        let years: FloatArray = (0..EMBEDDED_LEADERS.len())
            .map(|i| f64::from(EMBEDDED_START_YEAR) + i as f64)
            .collect();

        let leaders =
            TimeSeries::new("National_Leaders", years.clone(), EMBEDDED_LEADERS.to_vec())?;
        let failures = TimeSeries::new("National_Failures", years, EMBEDDED_FAILURES.to_vec())?;

        TrendDataset::new("Year", leaders, failures)
    }
}
